use super::*;

pub fn delete_user(connections: &sqlite::Connections, account: &str, user_id: &str) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_account(conn, account)?;
        usecases::delete_user(conn, &account, user_id).map_err(|err| {
            warn!("Failed to delete user {}: {}", user_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn delete_user_with_reviews_and_votes() {
        let fixture = BackendFixture::new();
        let alice = fixture.create_staff("alice");
        let bob = fixture.create_staff("bob");
        let student = fixture.create_student("S-0001", "Ada Lovelace");
        let other_student = fixture.create_student("S-0002", "Grace Hopper");
        let review_by_alice = fixture.create_review(&alice, &student, 7);
        let review_by_bob = fixture.create_review(&bob, &other_student, 3);
        // Bob votes on Alice's review and Alice on Bob's
        flows::resolve_vote(
            &fixture.db_connections,
            review_by_alice.id.as_str(),
            bob.id.as_str(),
            "upvote",
        )
        .unwrap();
        flows::resolve_vote(
            &fixture.db_connections,
            review_by_bob.id.as_str(),
            alice.id.as_str(),
            "downvote",
        )
        .unwrap();
        assert_eq!(2, fixture.count_votes());

        assert!(matches!(
            flows::delete_user(&fixture.db_connections, "bob", alice.id.as_str())
                .unwrap_err()
                .parameter(),
            Some(usecases::Error::Unauthorized)
        ));

        flows::delete_user(&fixture.db_connections, ADMIN, alice.id.as_str()).unwrap();
        assert!(fixture.try_get_user(alice.id.as_str()).is_none());
        assert!(fixture.try_get_review(review_by_alice.id.as_str()).is_none());
        assert!(fixture.try_get_review(review_by_bob.id.as_str()).is_some());
        assert_eq!(0, fixture.count_votes());
    }
}
