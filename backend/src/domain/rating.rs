//! Community rating values.
//!
//! Ratings are never cached: every read recomputes the mean from the raw
//! totals the persistence layer reports at that moment.

use serde::Serialize;

/// Raw feedback totals for one recipe as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingTotals {
    /// Number of feedback rows.
    pub count: u64,
    /// Sum of their ratings.
    pub sum: i64,
}

/// Mean rating and feedback count for a recipe.
///
/// A recipe without feedback has an average of exactly `0.0`; only the count
/// tells it apart from a genuine low score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregatedRating {
    average: f64,
    count: u64,
}

impl AggregatedRating {
    /// Rating of a recipe nobody has reviewed yet.
    pub const UNRATED: Self = Self {
        average: 0.0,
        count: 0,
    };

    /// Wrap an already computed mean, for example one a store aggregated
    /// itself. A zero count always yields [`Self::UNRATED`].
    pub fn new(average: f64, count: u64) -> Self {
        if count == 0 {
            return Self::UNRATED;
        }
        Self { average, count }
    }

    /// Mean of the stored totals.
    ///
    /// Out-of-range stored values are averaged as-is.
    ///
    /// # Examples
    /// ```
    /// use recipes_backend::domain::{AggregatedRating, RatingTotals};
    ///
    /// let rating = AggregatedRating::from_totals(RatingTotals { count: 3, sum: 12 });
    /// assert_eq!(rating.average(), 4.0);
    /// assert_eq!(rating.count(), 3);
    /// ```
    #[allow(
        clippy::cast_precision_loss,
        reason = "feedback totals stay far below 2^52"
    )]
    pub fn from_totals(totals: RatingTotals) -> Self {
        if totals.count == 0 {
            return Self::UNRATED;
        }
        Self {
            average: totals.sum as f64 / totals.count as f64,
            count: totals.count,
        }
    }

    /// Mean of individual rating values.
    pub fn from_ratings(ratings: &[i32]) -> Self {
        let totals = ratings.iter().fold(RatingTotals::default(), |acc, rating| {
            RatingTotals {
                count: acc.count.saturating_add(1),
                sum: acc.sum.saturating_add(i64::from(*rating)),
            }
        });
        Self::from_totals(totals)
    }

    /// Arithmetic mean, `0.0` when unrated.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Number of feedback records.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl From<RatingTotals> for AggregatedRating {
    fn from(totals: RatingTotals) -> Self {
        Self::from_totals(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(&[], 0.0, 0)]
    #[case::mixed(&[4, 5, 3], 4.0, 3)]
    #[case::single(&[1], 1.0, 1)]
    #[case::fractional(&[5, 4], 4.5, 2)]
    fn averages_ratings(#[case] ratings: &[i32], #[case] average: f64, #[case] count: u64) {
        let rating = AggregatedRating::from_ratings(ratings);
        assert_eq!(rating.average(), average);
        assert_eq!(rating.count(), count);
    }

    #[rstest]
    fn out_of_range_values_are_still_averaged() {
        let rating = AggregatedRating::from_ratings(&[0, 9]);
        assert_eq!(rating.average(), 4.5);
        assert_eq!(rating.count(), 2);
    }

    #[rstest]
    fn zero_count_totals_are_unrated_regardless_of_sum() {
        let rating = AggregatedRating::from_totals(RatingTotals { count: 0, sum: 17 });
        assert_eq!(rating, AggregatedRating::UNRATED);
    }
}
