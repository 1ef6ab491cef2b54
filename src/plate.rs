use std::{fmt::Display, iter::Sum, str::FromStr};

/// A plate weight in hundredths of a kilogram. Plate weights are quoted to
/// at most two decimal places, so hundredths keep every sum and comparison
/// exact.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Plate {
    weight: u32,
}

impl Plate {
    #[must_use]
    pub fn new(weight: u32) -> Self {
        Plate { weight }
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn kilograms(&self) -> f64 {
        f64::from(self.weight) / 100.0
    }

    #[must_use]
    pub fn abs_diff(self, other: Plate) -> Plate {
        Plate::new(self.weight.abs_diff(other.weight))
    }
}

impl FromStr for Plate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kilograms = s
            .trim()
            .parse::<f64>()
            .map_err(|_| "Invalid weight.".to_string())?;

        if !kilograms.is_finite() || kilograms <= 0.0 {
            return Err("Weights must be positive.".to_string());
        }

        Ok(Plate::new((kilograms * 100.0).round() as u32))
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kilograms())
    }
}

impl Sum for Plate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Plate::new(0), |acc, plate| {
            Plate::new(acc.weight + plate.weight)
        })
    }
}
