#[macro_use]
extern crate log;

mod create_review;
mod create_student;
mod create_user;
mod delete_review;
mod delete_student;
mod delete_user;
mod resolve_vote;
mod update_review;
mod update_student;
mod update_username;

pub mod prelude {
    pub use super::{
        create_review::*, create_student::*, create_user::*, delete_review::*,
        delete_student::*, delete_user::*, resolve_vote::*, update_review::*, update_student::*,
        update_username::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use karmadb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use karmadb_db_sqlite::Connections;
}
