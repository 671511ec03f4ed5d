use crate::{id::Id, time::Timestamp};

/// A rating between 1 and 10 where 5 is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReviewRating(u8);

impl ReviewRating {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(10)
    }

    pub const fn neutral() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// Signed distance from the neutral rating.
    pub fn deviation(self) -> i64 {
        i64::from(self.0) - i64::from(Self::neutral().0)
    }
}

impl Default for ReviewRating {
    fn default() -> Self {
        Self::neutral()
    }
}

impl From<u8> for ReviewRating {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<ReviewRating> for u8 {
    fn from(from: ReviewRating) -> Self {
        from.0
    }
}

impl From<ReviewRating> for i64 {
    fn from(from: ReviewRating) -> Self {
        i64::from(from.0)
    }
}

/// A review written by a staff member about a student.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : Id,
    /// The authoring staff member
    pub staff_id   : Id,
    pub student_id : Id,
    pub created_at : Timestamp,
    pub text       : String,
    pub rating     : ReviewRating,
}

impl Review {
    pub fn is_authored_by(&self, staff_id: &Id) -> bool {
        &self.staff_id == staff_id
    }
}
