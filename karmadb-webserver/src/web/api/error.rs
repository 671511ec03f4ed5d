use super::json_error_response;
use anyhow::anyhow;
use karmadb_application::error::{AppError, BError};
pub use karmadb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

fn parameter_error_status(err: &ParameterError) -> Status {
    if err.is_not_found() {
        return Status::NotFound;
    }
    match err {
        ParameterError::Credentials => Status::Unauthorized,
        ParameterError::Unauthorized => Status::Forbidden,
        ParameterError::UserExists
        | ParameterError::StudentExists
        | ParameterError::DuplicateReview
        | ParameterError::Repo(RepoError::AlreadyExists) => Status::Conflict,
        ParameterError::Repo(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

fn app_error_status(err: &AppError) -> Status {
    match err {
        AppError::Business(BError::Parameter(err)) => parameter_error_status(err),
        AppError::Business(BError::Repo(RepoError::NotFound)) => Status::NotFound,
        // A concurrent write won the race for a unique key
        AppError::Business(BError::Repo(RepoError::AlreadyExists)) => Status::Conflict,
        _ => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                let status = app_error_status(&err);
                if status == Status::InternalServerError {
                    error!("Error: {err}");
                }
                json_error_response(req, &err, status)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
