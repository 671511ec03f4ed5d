use super::*;

pub fn create_review(
    connections: &sqlite::Connections,
    account: &str,
    new_review: usecases::NewReview,
) -> Result<Review> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_account(conn, account)?;
        usecases::create_review(conn, &account, new_review).map_err(|err| {
            warn!("Failed to create review by {}: {}", account.username, err);
            err
        })
    })?)
}
