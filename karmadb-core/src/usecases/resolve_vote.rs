use super::prelude::*;

/// The effect a vote request actually had on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedAction {
    Created,
    Flipped,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteResolution {
    pub applied: AppliedAction,
    /// `None` if the vote has been removed
    pub vote: Option<Vote>,
}

/// State transition of the vote of a single staff member on
/// a single review.
///
/// ```text
/// Unvoted ──req──▶ Voted(req)
/// Voted(p) ──p──▶ Unvoted
/// Voted(p) ──!p──▶ Voted(!p)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteTransition {
    Create(Polarity),
    Flip(Vote, Polarity),
    Remove(Vote),
}

impl VoteTransition {
    pub fn decide(existing: Option<Vote>, requested: Polarity) -> Self {
        match existing {
            None => Self::Create(requested),
            Some(vote) if vote.polarity == requested => Self::Remove(vote),
            Some(vote) => Self::Flip(vote, requested),
        }
    }

    pub const fn applied_action(&self) -> AppliedAction {
        match self {
            Self::Create(_) => AppliedAction::Created,
            Self::Flip(..) => AppliedAction::Flipped,
            Self::Remove(_) => AppliedAction::Removed,
        }
    }
}

pub fn parse_vote_action(action: &str) -> Result<Polarity> {
    action
        .parse()
        .map_err(|_| Error::InvalidAction(action.to_owned()))
}

/// Applies a vote request of a staff member to a review.
///
/// Must be invoked within a transaction, the existing vote is
/// read before the decision is written back.
pub fn resolve_vote<R>(
    repo: &R,
    review_id: &str,
    staff_id: &str,
    requested: Polarity,
) -> Result<VoteResolution>
where
    R: UserRepo + ReviewRepo + VoteRepo,
{
    let staff = repo.try_get_user(staff_id)?.ok_or(Error::UnknownUser)?;
    let review = repo.try_get_review(review_id)?.ok_or(Error::UnknownReview)?;
    if !staff.is_staff() {
        log::info!(
            "Rejecting {requested} of review {review_id} by non-staff user {}",
            staff.username
        );
        return Err(Error::Unauthorized);
    }
    let existing = repo.try_get_vote(staff.id.as_str(), review.id.as_str())?;
    let transition = VoteTransition::decide(existing, requested);
    log::debug!(
        "Resolving {requested} of review {} by {}: {transition:?}",
        review.id,
        staff.username
    );
    let applied = transition.applied_action();
    let vote = match transition {
        VoteTransition::Create(polarity) => {
            let vote = Vote {
                id: Id::new(),
                staff_id: staff.id,
                review_id: review.id,
                polarity,
                created_at: Timestamp::now(),
            };
            repo.create_vote(&vote)?;
            Some(vote)
        }
        VoteTransition::Flip(mut vote, polarity) => {
            vote.polarity = polarity;
            vote.created_at = Timestamp::now();
            repo.update_vote(&vote)?;
            Some(vote)
        }
        VoteTransition::Remove(vote) => {
            repo.delete_vote(vote.id.as_str())?;
            None
        }
    };
    Ok(VoteResolution { applied, vote })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use karmadb_entities::builders::*;

    fn setup() -> (MockDb, User, Review) {
        let db = MockDb::default();
        let staff = User::build().role(Role::Staff).finish();
        let author = User::build().role(Role::Staff).finish();
        let student = Student::build().finish();
        let review = Review::build()
            .staff_id(author.id.as_str())
            .student_id(student.id.as_str())
            .finish();
        db.users.borrow_mut().push(staff.clone());
        db.users.borrow_mut().push(author);
        db.students.borrow_mut().push(student);
        db.reviews.borrow_mut().push(review.clone());
        (db, staff, review)
    }

    #[test]
    fn decide_transitions() {
        use Polarity::*;
        let vote = |polarity| Vote::build().polarity(polarity).finish();
        assert_eq!(
            VoteTransition::Create(Upvote),
            VoteTransition::decide(None, Upvote)
        );
        assert_eq!(
            VoteTransition::Create(Downvote),
            VoteTransition::decide(None, Downvote)
        );
        let up = vote(Upvote);
        assert_eq!(
            VoteTransition::Remove(up.clone()),
            VoteTransition::decide(Some(up), Upvote)
        );
        let down = vote(Downvote);
        assert_eq!(
            VoteTransition::Remove(down.clone()),
            VoteTransition::decide(Some(down), Downvote)
        );
        let up = vote(Upvote);
        assert_eq!(
            VoteTransition::Flip(up.clone(), Downvote),
            VoteTransition::decide(Some(up), Downvote)
        );
        let down = vote(Downvote);
        assert_eq!(
            VoteTransition::Flip(down.clone(), Upvote),
            VoteTransition::decide(Some(down), Upvote)
        );
    }

    #[test]
    fn applied_action_of_transitions() {
        let vote = Vote::build().polarity(Polarity::Upvote).finish();
        assert_eq!(
            AppliedAction::Created,
            VoteTransition::Create(Polarity::Upvote).applied_action()
        );
        assert_eq!(
            AppliedAction::Flipped,
            VoteTransition::Flip(vote.clone(), Polarity::Downvote).applied_action()
        );
        assert_eq!(
            AppliedAction::Removed,
            VoteTransition::Remove(vote).applied_action()
        );
    }

    #[test]
    fn parse_actions() {
        assert_eq!(Polarity::Upvote, parse_vote_action("upvote").unwrap());
        assert_eq!(Polarity::Downvote, parse_vote_action("downvote").unwrap());
        assert!(matches!(
            parse_vote_action("sideways"),
            Err(Error::InvalidAction(action)) if action == "sideways"
        ));
    }

    #[test]
    fn create_vote_if_none_exists() {
        let (db, staff, review) = setup();
        let res = resolve_vote(&db, review.id.as_str(), staff.id.as_str(), Polarity::Upvote)
            .unwrap();
        assert_eq!(AppliedAction::Created, res.applied);
        let vote = res.vote.unwrap();
        assert_eq!(Polarity::Upvote, vote.polarity);
        assert_eq!(staff.id, vote.staff_id);
        assert_eq!(review.id, vote.review_id);
        assert_eq!(vec![vote], *db.votes.borrow());
    }

    #[test]
    fn repeated_vote_is_removed() {
        let (db, staff, review) = setup();
        resolve_vote(&db, review.id.as_str(), staff.id.as_str(), Polarity::Upvote).unwrap();
        let res = resolve_vote(&db, review.id.as_str(), staff.id.as_str(), Polarity::Upvote)
            .unwrap();
        assert_eq!(AppliedAction::Removed, res.applied);
        assert!(res.vote.is_none());
        assert!(db.votes.borrow().is_empty());
    }

    #[test]
    fn opposite_vote_is_flipped_in_place() {
        let (db, staff, review) = setup();
        let created = resolve_vote(&db, review.id.as_str(), staff.id.as_str(), Polarity::Upvote)
            .unwrap()
            .vote
            .unwrap();
        let res = resolve_vote(
            &db,
            review.id.as_str(),
            staff.id.as_str(),
            Polarity::Downvote,
        )
        .unwrap();
        assert_eq!(AppliedAction::Flipped, res.applied);
        let flipped = res.vote.unwrap();
        assert_eq!(created.id, flipped.id);
        assert_eq!(Polarity::Downvote, flipped.polarity);
        let votes = db.votes.borrow();
        assert_eq!(1, votes.len());
        assert_eq!(Polarity::Downvote, votes[0].polarity);
    }

    #[test]
    fn unknown_staff() {
        let (db, _, review) = setup();
        let err = resolve_vote(&db, review.id.as_str(), "unknown", Polarity::Upvote).unwrap_err();
        assert!(matches!(err, Error::UnknownUser));
        assert!(err.is_not_found());
        assert!(db.votes.borrow().is_empty());
    }

    #[test]
    fn unknown_review() {
        let (db, staff, _) = setup();
        let err = resolve_vote(&db, "unknown", staff.id.as_str(), Polarity::Downvote).unwrap_err();
        assert!(matches!(err, Error::UnknownReview));
        assert!(db.votes.borrow().is_empty());
    }

    #[test]
    fn admins_cannot_vote() {
        let (db, _, review) = setup();
        let admin = User::build().role(Role::Admin).finish();
        db.users.borrow_mut().push(admin.clone());
        let err = resolve_vote(&db, review.id.as_str(), admin.id.as_str(), Polarity::Upvote)
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized));
        assert!(db.votes.borrow().is_empty());
    }

    #[test]
    fn votes_of_different_staff_are_independent() {
        let (db, staff, review) = setup();
        let other = User::build().role(Role::Staff).finish();
        db.users.borrow_mut().push(other.clone());
        resolve_vote(&db, review.id.as_str(), staff.id.as_str(), Polarity::Upvote).unwrap();
        let res = resolve_vote(&db, review.id.as_str(), other.id.as_str(), Polarity::Upvote)
            .unwrap();
        assert_eq!(AppliedAction::Created, res.applied);
        assert_eq!(2, db.votes.borrow().len());
    }
}
