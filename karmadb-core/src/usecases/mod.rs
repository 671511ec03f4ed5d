mod authorize;
mod calc_karma;
mod create_new_user;
mod create_review;
mod create_student;
mod delete_review;
mod delete_student;
mod delete_user;
mod error;
mod find_students;
mod get_user;
mod list_votes;
mod load_reviews;
mod login;
mod resolve_vote;
mod update_review;
mod update_student;
mod update_username;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, calc_karma::*, create_new_user::*, create_review::*, create_student::*,
    delete_review::*, delete_student::*, delete_user::*, error::Error, find_students::*,
    get_user::*, list_votes::*, load_reviews::*, login::*, resolve_vote::*, update_review::*,
    update_student::*, update_username::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
