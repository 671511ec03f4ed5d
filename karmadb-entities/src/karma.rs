use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

/// Integer reputation score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Karma(i64);

impl Karma {
    pub const fn zero() -> Self {
        Self(0)
    }
}

impl From<i64> for Karma {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<Karma> for i64 {
    fn from(from: Karma) -> Self {
        from.0
    }
}

impl Add for Karma {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Karma {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Karma {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Karma {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
