use super::{delete_review::delete_review_with_votes, prelude::*};
use crate::authorization::user::authorize_role;

/// Deletes a user together with everything that references it:
/// votes cast by the user and reviews written by the user
/// including their votes.
pub fn delete_user<D: Db>(db: &D, account: &User, user_id: &str) -> Result<()> {
    authorize_role(account, Role::Admin)?;
    let user = db.try_get_user(user_id)?.ok_or(Error::UnknownUser)?;
    let deleted_votes = db.delete_votes_by_staff(user_id)?;
    let reviews = db.load_reviews_by_staff(user_id)?;
    for review in &reviews {
        delete_review_with_votes(db, review.id.as_str())?;
    }
    db.delete_user(user_id)?;
    log::info!(
        "Deleted user {} with {} review(s) and {} vote(s)",
        user.username,
        reviews.len(),
        deleted_votes
    );
    Ok(())
}
