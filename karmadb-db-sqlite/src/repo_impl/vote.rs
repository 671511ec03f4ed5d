use super::*;

impl<'a> VoteRepo for DbReadOnly<'a> {
    fn create_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }
    fn update_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }
    fn delete_vote(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn try_get_vote(&self, staff_id: &str, review_id: &str) -> Result<Option<Vote>> {
        try_get_vote(&mut self.conn.borrow_mut(), staff_id, review_id)
    }
    fn load_votes_of_review(&self, review_id: &str) -> Result<Vec<Vote>> {
        load_votes_of_review(&mut self.conn.borrow_mut(), review_id)
    }
    fn load_votes_by_staff(&self, staff_id: &str) -> Result<Vec<Vote>> {
        load_votes_by_staff(&mut self.conn.borrow_mut(), staff_id)
    }
    fn count_votes(&self) -> Result<usize> {
        count_votes(&mut self.conn.borrow_mut())
    }

    fn delete_votes_of_review(&self, _review_id: &str) -> Result<usize> {
        unreachable!();
    }
    fn delete_votes_by_staff(&self, _staff_id: &str) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> VoteRepo for DbConnection<'a> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn update_vote(&self, vote: &Vote) -> Result<()> {
        update_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, id: &str) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), id)
    }

    fn try_get_vote(&self, staff_id: &str, review_id: &str) -> Result<Option<Vote>> {
        try_get_vote(&mut self.conn.borrow_mut(), staff_id, review_id)
    }
    fn load_votes_of_review(&self, review_id: &str) -> Result<Vec<Vote>> {
        load_votes_of_review(&mut self.conn.borrow_mut(), review_id)
    }
    fn load_votes_by_staff(&self, staff_id: &str) -> Result<Vec<Vote>> {
        load_votes_by_staff(&mut self.conn.borrow_mut(), staff_id)
    }
    fn count_votes(&self) -> Result<usize> {
        count_votes(&mut self.conn.borrow_mut())
    }

    fn delete_votes_of_review(&self, review_id: &str) -> Result<usize> {
        delete_votes_of_review(&mut self.conn.borrow_mut(), review_id)
    }
    fn delete_votes_by_staff(&self, staff_id: &str) -> Result<usize> {
        delete_votes_by_staff(&mut self.conn.borrow_mut(), staff_id)
    }
}

// The unique index on (staff_rowid, review_rowid) rejects a second
// vote of the same staff member on the same review.
fn create_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    let Vote {
        id,
        staff_id,
        review_id,
        polarity,
        created_at,
    } = vote;
    let staff_rowid = resolve_user_rowid(conn, staff_id.as_str())?;
    let review_rowid = resolve_review_rowid(conn, review_id.as_str())?;
    let new_vote = models::NewVote {
        id: id.as_str(),
        staff_rowid,
        review_rowid,
        polarity: models::polarity_to_primitive(*polarity),
        created_at: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::votes::table)
        .values(&new_vote)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    use schema::votes::dsl;
    let count = diesel::update(dsl::votes.filter(dsl::id.eq(vote.id.as_str())))
        .set((
            dsl::polarity.eq(models::polarity_to_primitive(vote.polarity)),
            dsl::created_at.eq(vote.created_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_vote(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::votes::dsl;
    let count = diesel::delete(dsl::votes.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_deletion(count)
}

macro_rules! joined_votes {
    () => {
        schema::votes::table
            .inner_join(schema::users::table)
            .inner_join(schema::reviews::table)
            .select((
                schema::votes::dsl::id,
                schema::votes::dsl::polarity,
                schema::votes::dsl::created_at,
                schema::users::dsl::id,
                schema::reviews::dsl::id,
            ))
    };
}

fn load_joined_votes(votes: Vec<models::JoinedVote>) -> Result<Vec<Vote>> {
    votes.into_iter().map(TryInto::try_into).collect()
}

fn try_get_vote(
    conn: &mut SqliteConnection,
    staff_id: &str,
    review_id: &str,
) -> Result<Option<Vote>> {
    use schema::{reviews::dsl as review_dsl, users::dsl as user_dsl};
    joined_votes!()
        .filter(user_dsl::id.eq(staff_id))
        .filter(review_dsl::id.eq(review_id))
        .first::<models::JoinedVote>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn load_votes_of_review(conn: &mut SqliteConnection, review_id: &str) -> Result<Vec<Vote>> {
    use schema::{reviews::dsl as review_dsl, votes::dsl};
    let votes = joined_votes!()
        .filter(review_dsl::id.eq(review_id))
        .order_by(dsl::created_at)
        .load::<models::JoinedVote>(conn)
        .map_err(from_diesel_err)?;
    load_joined_votes(votes)
}

fn load_votes_by_staff(conn: &mut SqliteConnection, staff_id: &str) -> Result<Vec<Vote>> {
    use schema::{users::dsl as user_dsl, votes::dsl};
    let votes = joined_votes!()
        .filter(user_dsl::id.eq(staff_id))
        .order_by(dsl::created_at)
        .load::<models::JoinedVote>(conn)
        .map_err(from_diesel_err)?;
    load_joined_votes(votes)
}

fn count_votes(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::votes::dsl;
    Ok(dsl::votes
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn delete_votes_of_review(conn: &mut SqliteConnection, review_id: &str) -> Result<usize> {
    use schema::{reviews::dsl as review_dsl, votes::dsl};
    diesel::delete(
        dsl::votes.filter(
            dsl::review_rowid.eq_any(
                schema::reviews::table
                    .select(review_dsl::rowid)
                    .filter(review_dsl::id.eq(review_id)),
            ),
        ),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}

fn delete_votes_by_staff(conn: &mut SqliteConnection, staff_id: &str) -> Result<usize> {
    use schema::{users::dsl as user_dsl, votes::dsl};
    diesel::delete(
        dsl::votes.filter(
            dsl::staff_rowid.eq_any(
                schema::users::table
                    .select(user_dsl::rowid)
                    .filter(user_dsl::id.eq(staff_id)),
            ),
        ),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}
