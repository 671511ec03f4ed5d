use super::*;

pub fn delete_review(
    connections: &sqlite::Connections,
    account: &str,
    review_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_account(conn, account)?;
        usecases::delete_review(conn, &account, review_id).map_err(|err| {
            warn!("Failed to delete review {}: {}", review_id, err);
            err
        })
    })?)
}
