use super::*;
use karmadb_entities as e;

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            role,
            password: _password,
        } = from;
        Self {
            id: id.into(),
            username,
            role: role.into(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Staff => UserRole::Staff,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Staff => Staff,
            UserRole::Admin => Admin,
        }
    }
}

impl From<(e::student::Student, e::karma::Karma)> for Student {
    fn from((student, karma): (e::student::Student, e::karma::Karma)) -> Self {
        let e::student::Student {
            id,
            school_id,
            name,
            faculty,
            programme,
        } = student;
        Self {
            id: id.into(),
            school_id,
            name,
            faculty,
            programme,
            karma: karma.into(),
        }
    }
}

impl From<(e::review::Review, e::vote::VoteTally, e::karma::Karma)> for Review {
    fn from(
        (review, tally, karma): (e::review::Review, e::vote::VoteTally, e::karma::Karma),
    ) -> Self {
        let e::review::Review {
            id,
            staff_id,
            student_id,
            created_at,
            text,
            rating,
        } = review;
        let e::vote::VoteTally { upvotes, downvotes } = tally;
        Self {
            id: id.into(),
            staff_id: staff_id.into(),
            student_id: student_id.into(),
            created: created_at.as_millis(),
            text,
            rating: rating.into(),
            karma: karma.into(),
            num_upvotes: upvotes,
            num_downvotes: downvotes,
        }
    }
}

impl From<e::vote::Polarity> for Polarity {
    fn from(from: e::vote::Polarity) -> Self {
        use e::vote::Polarity::*;
        match from {
            Upvote => Polarity::Upvote,
            Downvote => Polarity::Downvote,
        }
    }
}

impl From<Polarity> for e::vote::Polarity {
    fn from(from: Polarity) -> Self {
        use e::vote::Polarity::*;
        match from {
            Polarity::Upvote => Upvote,
            Polarity::Downvote => Downvote,
        }
    }
}

impl From<e::vote::Vote> for Vote {
    fn from(from: e::vote::Vote) -> Self {
        let e::vote::Vote {
            id,
            staff_id,
            review_id,
            polarity,
            created_at,
        } = from;
        Self {
            id: id.into(),
            staff_id: staff_id.into(),
            review_id: review_id.into(),
            polarity: polarity.into(),
            created: created_at.as_millis(),
        }
    }
}

impl From<e::karma::Karma> for Karma {
    fn from(from: e::karma::Karma) -> Self {
        Self { karma: from.into() }
    }
}
