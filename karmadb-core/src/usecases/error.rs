use crate::{
    authorization,
    repositories,
    util::validate::{ReviewInvalidation, StudentInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The user does not exist")]
    UnknownUser,
    #[error("The student does not exist")]
    UnknownStudent,
    #[error("The review does not exist")]
    UnknownReview,
    #[error("Invalid vote action '{0}', expected 'upvote' or 'downvote'")]
    InvalidAction(String),
    #[error("This is not allowed")]
    Unauthorized,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The student has already been reviewed by this staff member")]
    DuplicateReview,
    #[error("The user already exists")]
    UserExists,
    #[error("A student with this school id already exists")]
    StudentExists,
    #[error("Invalid username")]
    Username,
    #[error("Invalid password")]
    Password,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty review text")]
    EmptyText,
    #[error("The review text is too long")]
    TextTooLong,
    #[error("Missing {0}")]
    EmptyField(&'static str),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownUser
                | Self::UnknownStudent
                | Self::UnknownReview
                | Self::Repo(repositories::Error::NotFound)
        )
    }
}

impl From<karmadb_entities::password::ParseError> for Error {
    fn from(_: karmadb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<authorization::user::Error> for Error {
    fn from(_: authorization::user::Error) -> Self {
        Self::Unauthorized
    }
}

impl From<ReviewInvalidation> for Error {
    fn from(err: ReviewInvalidation) -> Self {
        match err {
            ReviewInvalidation::EmptyText => Self::EmptyText,
            ReviewInvalidation::TextTooLong => Self::TextTooLong,
            ReviewInvalidation::RatingValue => Self::RatingValue,
        }
    }
}

impl From<StudentInvalidation> for Error {
    fn from(err: StudentInvalidation) -> Self {
        match err {
            StudentInvalidation::EmptyField(field) => Self::EmptyField(field),
        }
    }
}
