use super::prelude::*;

/// All current votes on an existing review.
pub fn list_votes<R>(repo: &R, review_id: &str) -> Result<Vec<Vote>>
where
    R: ReviewRepo + VoteRepo,
{
    if repo.try_get_review(review_id)?.is_none() {
        return Err(Error::UnknownReview);
    }
    Ok(repo.load_votes_of_review(review_id)?)
}

pub fn votes_by_staff<R>(repo: &R, staff_id: &str) -> Result<Vec<Vote>>
where
    R: UserRepo + VoteRepo,
{
    if repo.try_get_user(staff_id)?.is_none() {
        return Err(Error::UnknownUser);
    }
    Ok(repo.load_votes_by_staff(staff_id)?)
}
