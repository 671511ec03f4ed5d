use super::prelude::*;

pub fn get_review<R: ReviewRepo>(repo: &R, id: &str) -> Result<Review> {
    repo.try_get_review(id)?.ok_or(Error::UnknownReview)
}

pub fn all_reviews<R: ReviewRepo>(repo: &R) -> Result<Vec<Review>> {
    Ok(repo.all_reviews()?)
}

pub fn reviews_of_student<R>(repo: &R, student_id: &str) -> Result<Vec<Review>>
where
    R: StudentRepo + ReviewRepo,
{
    if repo.try_get_student(student_id)?.is_none() {
        return Err(Error::UnknownStudent);
    }
    Ok(repo.load_reviews_of_student(student_id)?)
}

pub fn reviews_by_staff<R>(repo: &R, staff_id: &str) -> Result<Vec<Review>>
where
    R: UserRepo + ReviewRepo,
{
    if repo.try_get_user(staff_id)?.is_none() {
        return Err(Error::UnknownUser);
    }
    Ok(repo.load_reviews_by_staff(staff_id)?)
}
