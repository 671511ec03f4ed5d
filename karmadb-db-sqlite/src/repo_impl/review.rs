use super::*;

impl<'a> ReviewRepo for DbReadOnly<'a> {
    fn create_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }
    fn update_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }
    fn delete_review(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn all_reviews(&self) -> Result<Vec<Review>> {
        all_reviews(&mut self.conn.borrow_mut())
    }
    fn count_reviews(&self) -> Result<usize> {
        count_reviews(&mut self.conn.borrow_mut())
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_review_by_staff_and_student(
        &self,
        staff_id: &str,
        student_id: &str,
    ) -> Result<Option<Review>> {
        try_get_review_by_staff_and_student(&mut self.conn.borrow_mut(), staff_id, student_id)
    }
    fn load_reviews_of_student(&self, student_id: &str) -> Result<Vec<Review>> {
        load_reviews_of_student(&mut self.conn.borrow_mut(), student_id)
    }
    fn load_reviews_by_staff(&self, staff_id: &str) -> Result<Vec<Review>> {
        load_reviews_by_staff(&mut self.conn.borrow_mut(), staff_id)
    }
}

impl<'a> ReviewRepo for DbConnection<'a> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: &str) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }

    fn all_reviews(&self) -> Result<Vec<Review>> {
        all_reviews(&mut self.conn.borrow_mut())
    }
    fn count_reviews(&self) -> Result<usize> {
        count_reviews(&mut self.conn.borrow_mut())
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_review_by_staff_and_student(
        &self,
        staff_id: &str,
        student_id: &str,
    ) -> Result<Option<Review>> {
        try_get_review_by_staff_and_student(&mut self.conn.borrow_mut(), staff_id, student_id)
    }
    fn load_reviews_of_student(&self, student_id: &str) -> Result<Vec<Review>> {
        load_reviews_of_student(&mut self.conn.borrow_mut(), student_id)
    }
    fn load_reviews_by_staff(&self, staff_id: &str) -> Result<Vec<Review>> {
        load_reviews_by_staff(&mut self.conn.borrow_mut(), staff_id)
    }
}

fn create_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    let Review {
        id,
        staff_id,
        student_id,
        created_at,
        text,
        rating,
    } = review;
    let author_rowid = resolve_user_rowid(conn, staff_id.as_str())?;
    let student_rowid = resolve_student_rowid(conn, student_id.as_str())?;
    let new_review = models::NewReview {
        id: id.as_str(),
        author_rowid,
        student_rowid,
        created_at: created_at.as_millis(),
        text,
        rating: models::rating_to_primitive(*rating),
    };
    let _count = diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

// Only the text and the rating are mutable
fn update_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::update(dsl::reviews.filter(dsl::id.eq(review.id.as_str())))
        .set((
            dsl::text.eq(&review.text),
            dsl::rating.eq(models::rating_to_primitive(review.rating)),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_review(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::delete(dsl::reviews.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_deletion(count)
}

macro_rules! joined_reviews {
    () => {
        schema::reviews::table
            .inner_join(schema::users::table)
            .inner_join(schema::students::table)
            .select((
                schema::reviews::dsl::id,
                schema::reviews::dsl::created_at,
                schema::reviews::dsl::text,
                schema::reviews::dsl::rating,
                schema::users::dsl::id,
                schema::students::dsl::id,
            ))
    };
}

fn load_joined_reviews(reviews: Vec<models::JoinedReview>) -> Result<Vec<Review>> {
    reviews.into_iter().map(TryInto::try_into).collect()
}

fn get_review(conn: &mut SqliteConnection, id: &str) -> Result<Review> {
    use schema::reviews::dsl;
    joined_reviews!()
        .filter(dsl::id.eq(id))
        .first::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn try_get_review_by_staff_and_student(
    conn: &mut SqliteConnection,
    staff_id: &str,
    student_id: &str,
) -> Result<Option<Review>> {
    use schema::{students::dsl as student_dsl, users::dsl as user_dsl};
    joined_reviews!()
        .filter(user_dsl::id.eq(staff_id))
        .filter(student_dsl::id.eq(student_id))
        .first::<models::JoinedReview>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn load_reviews_of_student(conn: &mut SqliteConnection, student_id: &str) -> Result<Vec<Review>> {
    use schema::{reviews::dsl, students::dsl as student_dsl};
    let reviews = joined_reviews!()
        .filter(student_dsl::id.eq(student_id))
        .order_by(dsl::created_at)
        .load::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?;
    load_joined_reviews(reviews)
}

fn load_reviews_by_staff(conn: &mut SqliteConnection, staff_id: &str) -> Result<Vec<Review>> {
    use schema::{reviews::dsl, users::dsl as user_dsl};
    let reviews = joined_reviews!()
        .filter(user_dsl::id.eq(staff_id))
        .order_by(dsl::created_at)
        .load::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?;
    load_joined_reviews(reviews)
}

fn all_reviews(conn: &mut SqliteConnection) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let reviews = joined_reviews!()
        .order_by(dsl::created_at)
        .load::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?;
    load_joined_reviews(reviews)
}

fn count_reviews(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::reviews::dsl;
    Ok(dsl::reviews
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
