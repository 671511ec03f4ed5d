// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

fn optional<T>(res: Result<T>) -> Result<Option<T>> {
    match res {
        Ok(t) => Ok(Some(t)),
        Err(Error::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        optional(self.get_user(id))
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

pub trait StudentRepo {
    fn create_student(&self, student: &Student) -> Result<()>;
    fn update_student(&self, student: &Student) -> Result<()>;
    fn delete_student(&self, id: &str) -> Result<()>;

    fn all_students(&self) -> Result<Vec<Student>>;
    fn count_students(&self) -> Result<usize>;

    fn get_student(&self, id: &str) -> Result<Student>;
    fn try_get_student(&self, id: &str) -> Result<Option<Student>> {
        optional(self.get_student(id))
    }
    fn try_get_student_by_school_id(&self, school_id: &str) -> Result<Option<Student>>;
    // Case-insensitive match of the whole name
    fn find_students_by_name(&self, name: &str) -> Result<Vec<Student>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;

    fn all_reviews(&self) -> Result<Vec<Review>>;
    fn count_reviews(&self) -> Result<usize>;

    fn get_review(&self, id: &str) -> Result<Review>;
    fn try_get_review(&self, id: &str) -> Result<Option<Review>> {
        optional(self.get_review(id))
    }
    fn try_get_review_by_staff_and_student(
        &self,
        staff_id: &str,
        student_id: &str,
    ) -> Result<Option<Review>>;
    fn load_reviews_of_student(&self, student_id: &str) -> Result<Vec<Review>>;
    fn load_reviews_by_staff(&self, staff_id: &str) -> Result<Vec<Review>>;
}

pub trait VoteRepo {
    fn create_vote(&self, vote: &Vote) -> Result<()>;
    fn update_vote(&self, vote: &Vote) -> Result<()>;
    fn delete_vote(&self, id: &str) -> Result<()>;

    fn try_get_vote(&self, staff_id: &str, review_id: &str) -> Result<Option<Vote>>;
    fn load_votes_of_review(&self, review_id: &str) -> Result<Vec<Vote>>;
    fn load_votes_by_staff(&self, staff_id: &str) -> Result<Vec<Vote>>;
    fn count_votes(&self) -> Result<usize>;

    // Returns the number of deleted votes
    fn delete_votes_of_review(&self, review_id: &str) -> Result<usize>;
    fn delete_votes_by_staff(&self, staff_id: &str) -> Result<usize>;
}
