use super::prelude::*;
use crate::authorization::user::authorize_author_or_admin;

pub fn delete_review<R>(repo: &R, account: &User, review_id: &str) -> Result<()>
where
    R: ReviewRepo + VoteRepo,
{
    let review = repo.try_get_review(review_id)?.ok_or(Error::UnknownReview)?;
    authorize_author_or_admin(account, &review)?;
    let deleted_votes = delete_review_with_votes(repo, review_id)?;
    log::info!(
        "Deleted review {} with {} vote(s) by {}",
        review.id,
        deleted_votes,
        account.username
    );
    Ok(())
}

// Returns the number of deleted votes
pub(crate) fn delete_review_with_votes<R>(repo: &R, review_id: &str) -> Result<usize>
where
    R: ReviewRepo + VoteRepo,
{
    let count = repo.delete_votes_of_review(review_id)?;
    repo.delete_review(review_id)?;
    Ok(count)
}
