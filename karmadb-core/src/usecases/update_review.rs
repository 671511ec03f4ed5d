use super::prelude::*;
use crate::{
    authorization::user::authorize_author_or_admin,
    util::validate::{AutoCorrect, Validate},
};

#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub text: String,
    pub rating: u8,
}

pub fn update_review<R: ReviewRepo>(
    repo: &R,
    account: &User,
    review_id: &str,
    update: ReviewUpdate,
) -> Result<Review> {
    let old = repo.try_get_review(review_id)?.ok_or(Error::UnknownReview)?;
    authorize_author_or_admin(account, &old)?;
    let review = Review {
        text: update.text,
        rating: update.rating.into(),
        ..old
    }
    .auto_correct();
    review.validate()?;
    log::debug!("Updating review {} by {}", review.id, account.username);
    repo.update_review(&review)?;
    Ok(review)
}
