pub use karmadb_boundary::*;

use crate::core::usecases;

pub mod from_json {
    //! JSON -> Use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            username,
            password,
            role,
        } = from;
        usecases::NewUser {
            username,
            password,
            role: role.into(),
        }
    }

    pub fn new_student(from: NewStudent) -> usecases::NewStudent {
        let NewStudent {
            school_id,
            name,
            faculty,
            programme,
        } = from;
        usecases::NewStudent {
            school_id,
            name,
            faculty,
            programme,
        }
    }

    pub fn new_review(from: NewReview) -> usecases::NewReview {
        let NewReview {
            student_id,
            text,
            rating,
        } = from;
        usecases::NewReview {
            student_id,
            text,
            rating,
        }
    }

    pub fn review_update(from: ReviewUpdate) -> usecases::ReviewUpdate {
        let ReviewUpdate { text, rating } = from;
        usecases::ReviewUpdate { text, rating }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn scored_review(from: usecases::ScoredReview) -> Review {
        let usecases::ScoredReview {
            review,
            tally,
            karma,
        } = from;
        (review, tally, karma).into()
    }

    pub fn scored_student(from: usecases::ScoredStudent) -> Student {
        let usecases::ScoredStudent { student, karma } = from;
        (student, karma).into()
    }

    pub fn applied_action(from: usecases::AppliedAction) -> AppliedAction {
        use usecases::AppliedAction as A;
        match from {
            A::Created => AppliedAction::Created,
            A::Flipped => AppliedAction::Flipped,
            A::Removed => AppliedAction::Removed,
        }
    }

    pub fn vote_resolution(from: usecases::VoteResolution) -> VoteResolution {
        let usecases::VoteResolution { applied, vote } = from;
        VoteResolution {
            applied_action: applied_action(applied),
            vote: vote.map(Into::into),
        }
    }
}
