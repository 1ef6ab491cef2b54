use std::{fmt::Display, str::FromStr};

use crate::plate::Plate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// Whether a candidate pair is valid for this direction. A net change
    /// of zero is never valid.
    #[must_use]
    pub fn permits(self, addition: Plate, removal: Plate) -> bool {
        match self {
            Direction::Increase => addition > removal,
            Direction::Decrease => addition < removal,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Increase => write!(f, "increase"),
            Direction::Decrease => write!(f, "decrease"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" | "increase" => Ok(Direction::Increase),
            "d" | "decrease" => Ok(Direction::Decrease),
            _ => Err("Invalid direction.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("increase".parse::<Direction>(), Ok(Direction::Increase));
        assert_eq!("i".parse::<Direction>(), Ok(Direction::Increase));
        assert_eq!("Decrease".parse::<Direction>(), Ok(Direction::Decrease));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn zero_net_change_is_never_permitted() {
        let weight = Plate::new(250);
        assert!(!Direction::Increase.permits(weight, weight));
        assert!(!Direction::Decrease.permits(weight, weight));
    }

    #[test]
    fn permits_strict_changes_only() {
        assert!(Direction::Increase.permits(Plate::new(125), Plate::new(100)));
        assert!(!Direction::Increase.permits(Plate::new(100), Plate::new(125)));
        assert!(Direction::Decrease.permits(Plate::new(100), Plate::new(125)));
        assert!(!Direction::Decrease.permits(Plate::new(125), Plate::new(100)));
    }
}
