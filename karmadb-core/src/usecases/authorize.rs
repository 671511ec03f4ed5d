use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Loads the signed-in account.
pub fn authorize_account<R: UserRepo>(repo: &R, username: &str) -> Result<User> {
    repo.try_get_user_by_username(username)?
        .ok_or(Error::Unauthorized)
}

pub fn authorize_user_by_username<R: UserRepo>(
    repo: &R,
    username: &str,
    required_role: Role,
) -> Result<User> {
    let user = authorize_account(repo, username)?;
    authorize_role(&user, required_role)?;
    Ok(user)
}
