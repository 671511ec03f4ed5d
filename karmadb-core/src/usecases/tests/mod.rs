use super::prelude::*;
use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, RepoError>;

use crate::repositories::Error as RepoError;

trait Key {
    fn key(&self) -> &str;
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Student {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Review {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Vote {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    let x = objects
        .iter_mut()
        .find(|x| x.key() == e.key())
        .ok_or(RepoError::NotFound)?;
    *x = e.clone();
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    let len = objects.len();
    objects.retain(|x| x.key() != id);
    if objects.len() == len {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

/// In-memory database that enforces the same unique
/// constraints as the real one.
#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub students: RefCell<Vec<Student>>,
    pub reviews: RefCell<Vec<Review>>,
    pub votes: RefCell<Vec<Vote>>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self
            .users
            .borrow()
            .iter()
            .any(|u| u.username == user.username)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn delete_user(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.users.borrow_mut(), id)
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

impl StudentRepo for MockDb {
    fn create_student(&self, student: &Student) -> RepoResult<()> {
        if self
            .students
            .borrow()
            .iter()
            .any(|s| s.school_id == student.school_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.students.borrow_mut(), student.clone())
    }
    fn update_student(&self, student: &Student) -> RepoResult<()> {
        update(&mut self.students.borrow_mut(), student)
    }
    fn delete_student(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.students.borrow_mut(), id)
    }

    fn all_students(&self) -> RepoResult<Vec<Student>> {
        Ok(self.students.borrow().clone())
    }
    fn count_students(&self) -> RepoResult<usize> {
        Ok(self.students.borrow().len())
    }

    fn get_student(&self, id: &str) -> RepoResult<Student> {
        get(&self.students.borrow(), id)
    }
    fn try_get_student_by_school_id(&self, school_id: &str) -> RepoResult<Option<Student>> {
        Ok(self
            .students
            .borrow()
            .iter()
            .find(|s| s.school_id == school_id)
            .cloned())
    }
    fn find_students_by_name(&self, name: &str) -> RepoResult<Vec<Student>> {
        let name = name.to_lowercase();
        Ok(self
            .students
            .borrow()
            .iter()
            .filter(|s| s.name.to_lowercase() == name)
            .cloned()
            .collect())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        if self
            .try_get_review_by_staff_and_student(review.staff_id.as_str(), review.student_id.as_str())?
            .is_some()
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.reviews.borrow_mut(), review.clone())
    }
    fn update_review(&self, review: &Review) -> RepoResult<()> {
        update(&mut self.reviews.borrow_mut(), review)
    }
    fn delete_review(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.reviews.borrow_mut(), id)
    }

    fn all_reviews(&self) -> RepoResult<Vec<Review>> {
        Ok(self.reviews.borrow().clone())
    }
    fn count_reviews(&self) -> RepoResult<usize> {
        Ok(self.reviews.borrow().len())
    }

    fn get_review(&self, id: &str) -> RepoResult<Review> {
        get(&self.reviews.borrow(), id)
    }
    fn try_get_review_by_staff_and_student(
        &self,
        staff_id: &str,
        student_id: &str,
    ) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| r.staff_id.as_str() == staff_id && r.student_id.as_str() == student_id)
            .cloned())
    }
    fn load_reviews_of_student(&self, student_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.student_id.as_str() == student_id)
            .cloned()
            .collect())
    }
    fn load_reviews_by_staff(&self, staff_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.staff_id.as_str() == staff_id)
            .cloned()
            .collect())
    }
}

impl VoteRepo for MockDb {
    fn create_vote(&self, vote: &Vote) -> RepoResult<()> {
        if self
            .try_get_vote(vote.staff_id.as_str(), vote.review_id.as_str())?
            .is_some()
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.votes.borrow_mut(), vote.clone())
    }
    fn update_vote(&self, vote: &Vote) -> RepoResult<()> {
        update(&mut self.votes.borrow_mut(), vote)
    }
    fn delete_vote(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.votes.borrow_mut(), id)
    }

    fn try_get_vote(&self, staff_id: &str, review_id: &str) -> RepoResult<Option<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .find(|v| v.staff_id.as_str() == staff_id && v.review_id.as_str() == review_id)
            .cloned())
    }
    fn load_votes_of_review(&self, review_id: &str) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.review_id.as_str() == review_id)
            .cloned()
            .collect())
    }
    fn load_votes_by_staff(&self, staff_id: &str) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.staff_id.as_str() == staff_id)
            .cloned()
            .collect())
    }
    fn count_votes(&self) -> RepoResult<usize> {
        Ok(self.votes.borrow().len())
    }

    fn delete_votes_of_review(&self, review_id: &str) -> RepoResult<usize> {
        let mut votes = self.votes.borrow_mut();
        let len = votes.len();
        votes.retain(|v| v.review_id.as_str() != review_id);
        Ok(len - votes.len())
    }
    fn delete_votes_by_staff(&self, staff_id: &str) -> RepoResult<usize> {
        let mut votes = self.votes.borrow_mut();
        let len = votes.len();
        votes.retain(|v| v.staff_id.as_str() != staff_id);
        Ok(len - votes.len())
    }
}
