use super::*;

pub fn update_review(
    connections: &sqlite::Connections,
    account: &str,
    review_id: &str,
    update: usecases::ReviewUpdate,
) -> Result<Review> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_account(conn, account)?;
        usecases::update_review(conn, &account, review_id, update).map_err(|err| {
            warn!("Failed to update review {}: {}", review_id, err);
            err
        })
    })?)
}
