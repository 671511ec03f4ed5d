use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumString};

use crate::{id::Id, time::Timestamp};

/// The direction of a vote.
///
/// The string representation is the action name accepted from clients.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    FromPrimitive, ToPrimitive,
    EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Polarity {
    Upvote   =  1,
    Downvote = -1,
}

/// The current vote of a staff member on a review.
///
/// There is at most one vote per staff member and review.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id         : Id,
    pub staff_id   : Id,
    pub review_id  : Id,
    pub polarity   : Polarity,
    /// Time of the last transition
    pub created_at : Timestamp,
}

/// Number of upvotes and downvotes of a single review.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: u64,
    pub downvotes: u64,
}

impl VoteTally {
    pub fn add(&mut self, polarity: Polarity) {
        match polarity {
            Polarity::Upvote => self.upvotes += 1,
            Polarity::Downvote => self.downvotes += 1,
        }
    }
}

impl<'a> FromIterator<&'a Vote> for VoteTally {
    fn from_iter<T: IntoIterator<Item = &'a Vote>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), |mut tally, vote| {
            tally.add(vote.polarity);
            tally
        })
    }
}
