use std::fmt::Display;

use itertools::Itertools;

use crate::plate::Plate;

/// The plates belonging to one side of the exchange: either the plates
/// currently loaded on the bar, or the denominations available to add.
/// Duplicate weights are kept; a pool of two 2.5s can contribute 0, 2.5
/// or 5.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    plates: Vec<Plate>,
}

impl Pool {
    #[must_use]
    pub fn new(plates: Vec<Plate>) -> Self {
        Pool {
            plates: plates.into_iter().sorted().collect(),
        }
    }

    /// Parses a comma-separated list of weights, discarding tokens that are
    /// not positive numbers.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Pool::new(
            input
                .split(',')
                .filter_map(|token| token.parse().ok())
                .collect(),
        )
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolKind {
    Current,
    Available,
}

impl Display for PoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolKind::Current => write!(f, "current"),
            PoolKind::Available => write!(f, "available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_weights() {
        let pool = Pool::parse("2.5, 1");
        assert_eq!(pool.plates(), &[Plate::new(100), Plate::new(250)]);
    }

    #[test]
    fn discards_invalid_tokens() {
        let pool = Pool::parse("1, abc, -3, 0, 2.5,");
        assert_eq!(pool.plates(), &[Plate::new(100), Plate::new(250)]);
    }

    #[test]
    fn keeps_duplicate_weights() {
        let pool = Pool::parse("2.5, 2.5");
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn empty_input_gives_empty_pool() {
        assert!(Pool::parse("").is_empty());
        assert!(Pool::parse(", ,").is_empty());
    }
}
