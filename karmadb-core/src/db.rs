use crate::repositories::*;

/// All repositories that are backed by the same database.
pub trait Db: UserRepo + StudentRepo + ReviewRepo + VoteRepo {}

impl<T> Db for T where T: UserRepo + StudentRepo + ReviewRepo + VoteRepo {}
