#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use karmadb_core::{entities::*, repositories::Error as RepoError};
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub role: i16,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(from: &'a User) -> Self {
        let User {
            id,
            username,
            password,
            role,
        } = from;
        Self {
            id: id.as_str(),
            username,
            password: password.as_ref(),
            role: role_to_primitive(*role),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: i16,
}

impl TryFrom<UserEntity> for User {
    type Error = RepoError;

    fn try_from(from: UserEntity) -> Result<Self, Self::Error> {
        let UserEntity {
            rowid: _,
            id,
            username,
            password,
            role,
        } = from;
        let role = Role::from_i16(role).ok_or_else(|| anyhow!("Invalid role: {role}"))?;
        Ok(Self {
            id: id.into(),
            username,
            password: password.into(),
            role,
        })
    }
}

fn role_to_primitive(role: Role) -> i16 {
    // All roles fit into the column type
    role.to_i16().unwrap_or_default()
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = students)]
pub struct NewStudent<'a> {
    pub id: &'a str,
    pub school_id: &'a str,
    pub name: &'a str,
    pub faculty: &'a str,
    pub programme: &'a str,
}

impl<'a> From<&'a Student> for NewStudent<'a> {
    fn from(from: &'a Student) -> Self {
        let Student {
            id,
            school_id,
            name,
            faculty,
            programme,
        } = from;
        Self {
            id: id.as_str(),
            school_id,
            name,
            faculty,
            programme,
        }
    }
}

#[derive(Queryable)]
pub struct StudentEntity {
    pub rowid: i64,
    pub id: String,
    pub school_id: String,
    pub name: String,
    pub faculty: String,
    pub programme: String,
}

impl From<StudentEntity> for Student {
    fn from(from: StudentEntity) -> Self {
        let StudentEntity {
            rowid: _,
            id,
            school_id,
            name,
            faculty,
            programme,
        } = from;
        Self {
            id: id.into(),
            school_id,
            name,
            faculty,
            programme,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub author_rowid: i64,
    pub student_rowid: i64,
    pub created_at: i64,
    pub text: &'a str,
    pub rating: i16,
}

#[derive(Queryable)]
pub struct JoinedReview {
    pub id: String,
    pub created_at: i64,
    pub text: String,
    pub rating: i16,
    // Joined columns
    pub staff_id: String,
    pub student_id: String,
}

impl TryFrom<JoinedReview> for Review {
    type Error = RepoError;

    fn try_from(from: JoinedReview) -> Result<Self, Self::Error> {
        let JoinedReview {
            id,
            created_at,
            text,
            rating,
            staff_id,
            student_id,
        } = from;
        let rating = u8::try_from(rating)
            .map(ReviewRating::from)
            .ok()
            .filter(|r| r.is_valid())
            .ok_or_else(|| anyhow!("Invalid review rating: {rating}"))?;
        Ok(Self {
            id: id.into(),
            staff_id: staff_id.into(),
            student_id: student_id.into(),
            created_at: Timestamp::from_millis(created_at),
            text,
            rating,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = votes)]
pub struct NewVote<'a> {
    pub id: &'a str,
    pub staff_rowid: i64,
    pub review_rowid: i64,
    pub polarity: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct JoinedVote {
    pub id: String,
    pub polarity: i16,
    pub created_at: i64,
    // Joined columns
    pub staff_id: String,
    pub review_id: String,
}

impl TryFrom<JoinedVote> for Vote {
    type Error = RepoError;

    fn try_from(from: JoinedVote) -> Result<Self, Self::Error> {
        let JoinedVote {
            id,
            polarity,
            created_at,
            staff_id,
            review_id,
        } = from;
        let polarity = Polarity::from_i16(polarity)
            .ok_or_else(|| anyhow!("Invalid vote polarity: {polarity}"))?;
        Ok(Self {
            id: id.into(),
            staff_id: staff_id.into(),
            review_id: review_id.into(),
            polarity,
            created_at: Timestamp::from_millis(created_at),
        })
    }
}

pub fn polarity_to_primitive(polarity: Polarity) -> i16 {
    match polarity {
        Polarity::Upvote => 1,
        Polarity::Downvote => -1,
    }
}

pub fn rating_to_primitive(rating: ReviewRating) -> i16 {
    i16::from(u8::from(rating))
}
