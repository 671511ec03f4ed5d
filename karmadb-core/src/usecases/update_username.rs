use super::prelude::*;
use crate::util::validate;

/// Admins may rename everyone, everybody else only themselves.
pub fn update_username<R: UserRepo>(
    repo: &R,
    account: &User,
    user_id: &str,
    username: &str,
) -> Result<User> {
    if !account.is_admin() && account.id.as_str() != user_id {
        return Err(Error::Unauthorized);
    }
    let username = username.trim();
    if !validate::is_valid_username(username) {
        return Err(Error::Username);
    }
    let mut user = repo.try_get_user(user_id)?.ok_or(Error::UnknownUser)?;
    if user.username == username {
        return Ok(user);
    }
    if repo.try_get_user_by_username(username)?.is_some() {
        return Err(Error::UserExists);
    }
    log::info!("Renaming user {} to {}", user.username, username);
    user.username = username.to_owned();
    repo.update_user(&user)?;
    Ok(user)
}
