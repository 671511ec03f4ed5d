use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let username = u.username.trim();
    if !validate::is_valid_username(username) {
        return Err(Error::Username);
    }
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_username(username)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        username: username.to_owned(),
        password,
        role: u.role,
    };
    log::debug!(
        "Creating new user: username = {}, role = {}",
        new_user.username,
        new_user.role
    );
    repo.create_user(&new_user)?;
    Ok(new_user)
}
