use super::prelude::*;

pub fn get_user<R>(repo: &R, id: &str) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user(id)?.ok_or(Error::UnknownUser)
}

pub fn get_user_by_username<R>(repo: &R, username: &str) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_username(username)?
        .ok_or(Error::UnknownUser)
}

pub fn users_with_role<R>(repo: &R, role: Role) -> Result<Vec<User>>
where
    R: UserRepo,
{
    Ok(repo
        .all_users()?
        .into_iter()
        .filter(|u| u.role == role)
        .collect())
}

/// All users ordered by username.
pub fn all_users<R>(repo: &R) -> Result<Vec<User>>
where
    R: UserRepo,
{
    let mut users = repo.all_users()?;
    users.sort_by(|a, b| a.username.cmp(&b.username));
    Ok(users)
}
