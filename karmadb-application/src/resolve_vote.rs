use super::*;

/// Toggles the vote of a staff member on a review.
///
/// The action is parsed before any database access, so an invalid
/// action never opens a transaction.
pub fn resolve_vote(
    connections: &sqlite::Connections,
    review_id: &str,
    staff_id: &str,
    action: &str,
) -> Result<usecases::VoteResolution> {
    let requested = usecases::parse_vote_action(action).map_err(|err| {
        warn!("Rejecting vote of {} on review {}: {}", staff_id, review_id, err);
        err
    })?;
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::resolve_vote(conn, review_id, staff_id, requested).map_err(|err| {
            warn!(
                "Failed to resolve {} of review {} by {}: {}",
                requested, review_id, staff_id, err
            );
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use usecases::AppliedAction;

    struct Setup {
        fixture: BackendFixture,
        alice: User,
        bob: User,
        student: Student,
    }

    fn setup() -> Setup {
        let fixture = BackendFixture::new();
        let alice = fixture.create_staff("alice");
        let bob = fixture.create_staff("bob");
        let student = fixture.create_student("S-0001", "Ada Lovelace");
        Setup {
            fixture,
            alice,
            bob,
            student,
        }
    }

    fn vote(
        fixture: &BackendFixture,
        review: &Review,
        staff: &User,
        action: &str,
    ) -> super::Result<usecases::VoteResolution> {
        super::resolve_vote(
            &fixture.db_connections,
            review.id.as_str(),
            staff.id.as_str(),
            action,
        )
    }

    #[test]
    fn upvote_twice_removes_the_vote() {
        let Setup {
            fixture,
            alice,
            bob,
            student,
        } = setup();
        let review = fixture.create_review(&alice, &student, 5);
        assert_eq!(Karma::from(5), fixture.review_karma(&review));

        let res = vote(&fixture, &review, &bob, "upvote").unwrap();
        assert_eq!(AppliedAction::Created, res.applied);
        assert_eq!(Polarity::Upvote, res.vote.unwrap().polarity);
        assert_eq!(Karma::from(6), fixture.review_karma(&review));

        let res = vote(&fixture, &review, &bob, "upvote").unwrap();
        assert_eq!(AppliedAction::Removed, res.applied);
        assert!(res.vote.is_none());
        assert!(fixture.try_get_vote(&bob, &review).is_none());
        assert_eq!(Karma::from(5), fixture.review_karma(&review));
    }

    #[test]
    fn opposite_vote_flips_in_place() {
        let Setup {
            fixture,
            alice,
            bob,
            student,
        } = setup();
        let review = fixture.create_review(&alice, &student, 6);

        let created = vote(&fixture, &review, &bob, "upvote").unwrap().vote.unwrap();
        assert_eq!(Karma::from(7), fixture.review_karma(&review));

        let res = vote(&fixture, &review, &bob, "downvote").unwrap();
        assert_eq!(AppliedAction::Flipped, res.applied);
        let flipped = fixture.try_get_vote(&bob, &review).unwrap();
        assert_eq!(created.id, flipped.id);
        assert_eq!(Polarity::Downvote, flipped.polarity);
        assert_eq!(1, fixture.count_votes());
        assert_eq!(Karma::from(5), fixture.review_karma(&review));
    }

    #[test]
    fn low_rated_review() {
        let Setup {
            fixture,
            alice,
            bob,
            student,
        } = setup();
        let review = fixture.create_review(&alice, &student, 4);
        vote(&fixture, &review, &bob, "upvote").unwrap();
        assert_eq!(Karma::from(-7), fixture.review_karma(&review));
        vote(&fixture, &review, &bob, "downvote").unwrap();
        assert_eq!(Karma::from(-5), fixture.review_karma(&review));
    }

    #[test]
    fn student_karma_sums_reviews() {
        let Setup {
            fixture,
            alice,
            bob,
            student,
        } = setup();
        let carol = fixture.create_staff("carol");
        let high = fixture.create_review(&alice, &student, 6);
        let low = fixture.create_review(&bob, &student, 4);
        vote(&fixture, &low, &carol, "upvote").unwrap();
        assert_eq!(Karma::from(6), fixture.review_karma(&high));
        assert_eq!(Karma::from(-7), fixture.review_karma(&low));
        assert_eq!(Karma::from(-1), fixture.student_karma(&student));
    }

    #[test]
    fn invalid_action_leaves_ledger_untouched() {
        let Setup {
            fixture,
            alice,
            bob,
            student,
        } = setup();
        let review = fixture.create_review(&alice, &student, 5);
        let err = vote(&fixture, &review, &bob, "sideways").unwrap_err();
        assert!(matches!(
            err.parameter(),
            Some(usecases::Error::InvalidAction(_))
        ));
        assert_eq!(0, fixture.count_votes());
    }

    #[test]
    fn unknown_staff_or_review() {
        let Setup {
            fixture,
            alice,
            student,
            ..
        } = setup();
        let review = fixture.create_review(&alice, &student, 5);
        let err = super::resolve_vote(
            &fixture.db_connections,
            review.id.as_str(),
            "unknown",
            "upvote",
        )
        .unwrap_err();
        assert!(err.is_not_found());
        let err = super::resolve_vote(
            &fixture.db_connections,
            "unknown",
            alice.id.as_str(),
            "upvote",
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(0, fixture.count_votes());
    }

    #[test]
    fn admins_cannot_vote() {
        let Setup {
            fixture,
            alice,
            student,
            ..
        } = setup();
        let review = fixture.create_review(&alice, &student, 5);
        let admin = fixture.admin.clone();
        let err = vote(&fixture, &review, &admin, "upvote").unwrap_err();
        assert!(matches!(
            err.parameter(),
            Some(usecases::Error::Unauthorized)
        ));
        assert_eq!(0, fixture.count_votes());
    }

    #[test]
    fn staff_may_vote_on_own_review() {
        let Setup {
            fixture,
            alice,
            student,
            ..
        } = setup();
        let review = fixture.create_review(&alice, &student, 8);
        vote(&fixture, &review, &alice, "downvote").unwrap();
        // 8 - (8 - 5) * 1
        assert_eq!(Karma::from(5), fixture.review_karma(&review));
    }
}
