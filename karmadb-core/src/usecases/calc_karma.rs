use super::prelude::*;
use crate::karma::{self, AccumulatedReputation, Reputation};

/// A review with its current vote tally and karma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredReview {
    pub review: Review,
    pub tally: VoteTally,
    pub karma: Karma,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredStudent {
    pub student: Student,
    pub karma: Karma,
}

// Karma is never stored. Every call reads the current votes.

pub fn review_karma<R>(repo: &R, review_id: &str) -> Result<Karma>
where
    R: ReviewRepo + VoteRepo,
{
    let review = repo.try_get_review(review_id)?.ok_or(Error::UnknownReview)?;
    let votes = repo.load_votes_of_review(review_id)?;
    Ok(review.karma(&votes))
}

pub fn student_karma<R>(repo: &R, student_id: &str) -> Result<Karma>
where
    R: StudentRepo + ReviewRepo + VoteRepo,
{
    let student = repo
        .try_get_student(student_id)?
        .ok_or(Error::UnknownStudent)?;
    calc_student_karma(repo, &student)
}

fn calc_student_karma<R>(repo: &R, student: &Student) -> Result<Karma>
where
    R: ReviewRepo + VoteRepo,
{
    let reviews = repo
        .load_reviews_of_student(student.id.as_str())?
        .into_iter()
        .map(|review| {
            let votes = repo.load_votes_of_review(review.id.as_str())?;
            Ok((review, votes))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(student.accumulated_karma(&reviews))
}

pub fn score_reviews<R: VoteRepo>(repo: &R, reviews: Vec<Review>) -> Result<Vec<ScoredReview>> {
    reviews
        .into_iter()
        .map(|review| {
            let votes = repo.load_votes_of_review(review.id.as_str())?;
            let tally: VoteTally = votes.iter().collect();
            let karma = karma::review_karma(review.rating, tally);
            Ok(ScoredReview {
                review,
                tally,
                karma,
            })
        })
        .collect()
}

pub fn score_students<R>(repo: &R, students: Vec<Student>) -> Result<Vec<ScoredStudent>>
where
    R: ReviewRepo + VoteRepo,
{
    students
        .into_iter()
        .map(|student| {
            let karma = calc_student_karma(repo, &student)?;
            Ok(ScoredStudent { student, karma })
        })
        .collect()
}

pub fn load_scored_review<R>(repo: &R, review_id: &str) -> Result<ScoredReview>
where
    R: ReviewRepo + VoteRepo,
{
    let review = super::get_review(repo, review_id)?;
    let mut scored = score_reviews(repo, vec![review])?;
    debug_assert_eq!(1, scored.len());
    scored.pop().ok_or(Error::UnknownReview)
}

pub fn load_scored_reviews_of_student<R>(repo: &R, student_id: &str) -> Result<Vec<ScoredReview>>
where
    R: StudentRepo + ReviewRepo + VoteRepo,
{
    let reviews = super::reviews_of_student(repo, student_id)?;
    score_reviews(repo, reviews)
}

pub fn load_all_scored_reviews<R>(repo: &R) -> Result<Vec<ScoredReview>>
where
    R: ReviewRepo + VoteRepo,
{
    let reviews = super::all_reviews(repo)?;
    score_reviews(repo, reviews)
}

pub fn load_scored_reviews_by_staff<R>(repo: &R, staff_id: &str) -> Result<Vec<ScoredReview>>
where
    R: UserRepo + ReviewRepo + VoteRepo,
{
    let reviews = super::reviews_by_staff(repo, staff_id)?;
    score_reviews(repo, reviews)
}

pub fn load_scored_student<R>(repo: &R, student_id: &str) -> Result<ScoredStudent>
where
    R: StudentRepo + ReviewRepo + VoteRepo,
{
    let student = super::get_student(repo, student_id)?;
    let karma = calc_student_karma(repo, &student)?;
    Ok(ScoredStudent { student, karma })
}

pub fn load_all_scored_students<R>(repo: &R) -> Result<Vec<ScoredStudent>>
where
    R: StudentRepo + ReviewRepo + VoteRepo,
{
    let students = super::all_students(repo)?;
    score_students(repo, students)
}
