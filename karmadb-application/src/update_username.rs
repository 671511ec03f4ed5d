use super::*;

pub fn update_username(
    connections: &sqlite::Connections,
    account: &str,
    user_id: &str,
    username: &str,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_account(conn, account)?;
        usecases::update_username(conn, &account, user_id, username).map_err(|err| {
            warn!("Failed to rename user {}: {}", user_id, err);
            err
        })
    })?)
}
