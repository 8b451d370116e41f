use crate::core::{Classification, Parity};
use std::ops::RangeInclusive;

/// Classifies `n` as [`Parity::Even`] when `n % 2 == 0`, otherwise [`Parity::Odd`].
///
/// Total over `i64`. For negative odd numbers the remainder is `-1`, which is
/// still non-zero, so the result does not depend on sign.
pub fn classify(n: i64) -> Parity {
    if n % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// Lazily yields one row per number in `range`, ascending.
pub fn classifications(range: RangeInclusive<i64>) -> impl Iterator<Item = Classification> {
    range.map(|number| Classification {
        number,
        parity: classify(number),
    })
}

pub fn classify_range(range: RangeInclusive<i64>) -> Vec<Classification> {
    tracing::debug!(
        "Classifying {}..={}",
        range.start(),
        range.end()
    );
    let table: Vec<Classification> = classifications(range).collect();
    tracing::debug!("Built classification table with {} rows", table.len());
    table
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParitySummary {
    pub even: usize,
    pub odd: usize,
}

impl ParitySummary {
    pub fn total(&self) -> usize {
        self.even + self.odd
    }
}

pub fn summarize(table: &[Classification]) -> ParitySummary {
    table
        .iter()
        .fold(ParitySummary::default(), |mut summary, row| {
            match row.parity {
                Parity::Even => summary.even += 1,
                Parity::Odd => summary.odd += 1,
            }
            summary
        })
}
