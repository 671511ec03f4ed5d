use karmadb_entities::{
    review::Review,
    user::{Role, User},
};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("not the author")]
    NotTheAuthor,
}

pub type Result<T> = StdResult<T, Error>;

// Roles are not ordered: an admin is not a staff member.
pub fn authorize_role(user: &User, required_role: Role) -> Result<()> {
    if user.role != required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

pub fn authorize_author_or_admin(user: &User, review: &Review) -> Result<()> {
    if user.is_admin() || review.is_authored_by(&user.id) {
        return Ok(());
    }
    Err(Error::NotTheAuthor)
}
