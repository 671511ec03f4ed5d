use std::cmp::Ordering;

use crate::entities::*;

/// Karma of a single review.
///
/// The further the rating deviates from neutral, the more weight each
/// vote carries. Votes on a neutral review count once. The rating
/// itself always contributes a base value.
pub fn review_karma(rating: ReviewRating, tally: VoteTally) -> Karma {
    debug_assert!(rating.is_valid());
    let deviation = rating.deviation();
    let weight = deviation.abs();
    let base = i64::from(rating);
    let net = tally.upvotes as i64 - tally.downvotes as i64;
    let karma = match deviation.cmp(&0) {
        Ordering::Greater => base + weight * net,
        Ordering::Less => (base - 10) - weight * net,
        Ordering::Equal => base + net,
    };
    karma.into()
}

pub trait Reputation {
    fn karma(&self, votes: &[Vote]) -> Karma;
}

impl Reputation for Review {
    fn karma(&self, votes: &[Vote]) -> Karma {
        debug_assert_eq!(
            votes.len(),
            votes.iter().filter(|v| v.review_id == self.id).count()
        );
        review_karma(self.rating, votes.iter().collect())
    }
}

pub trait AccumulatedReputation {
    fn accumulated_karma(&self, reviews: &[(Review, Vec<Vote>)]) -> Karma;
}

impl AccumulatedReputation for Student {
    fn accumulated_karma(&self, reviews: &[(Review, Vec<Vote>)]) -> Karma {
        debug_assert_eq!(
            reviews.len(),
            reviews
                .iter()
                .filter(|(r, _)| r.student_id == self.id)
                .count()
        );
        reviews
            .iter()
            .map(|(review, votes)| review.karma(votes))
            .sum()
    }
}
