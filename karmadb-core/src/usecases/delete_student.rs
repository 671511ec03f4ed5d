use super::{delete_review::delete_review_with_votes, prelude::*};
use crate::authorization::user::authorize_role;

/// Deletes a student after all reviews about the
/// student and their votes.
pub fn delete_student<R>(repo: &R, account: &User, student_id: &str) -> Result<()>
where
    R: StudentRepo + ReviewRepo + VoteRepo,
{
    authorize_role(account, Role::Admin)?;
    let student = repo
        .try_get_student(student_id)?
        .ok_or(Error::UnknownStudent)?;
    let reviews = repo.load_reviews_of_student(student_id)?;
    let mut deleted_votes = 0;
    for review in &reviews {
        deleted_votes += delete_review_with_votes(repo, review.id.as_str())?;
    }
    repo.delete_student(student_id)?;
    log::info!(
        "Deleted student {} with {} review(s) and {} vote(s)",
        student.school_id,
        reviews.len(),
        deleted_votes
    );
    Ok(())
}
