use std::fmt::Display;

use itertools::Itertools;

use crate::plate::Plate;

/// One way to realise a weight change: the plates to take off the bar and
/// the plates to put on. Both lists are held sorted ascending so that two
/// changes built from different subset choices compare equal whenever their
/// plate multisets match.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Change {
    remove: Vec<Plate>,
    add: Vec<Plate>,
}

impl Change {
    #[must_use]
    pub fn new(remove: Vec<Plate>, add: Vec<Plate>) -> Self {
        Change {
            remove: remove.into_iter().sorted().collect(),
            add: add.into_iter().sorted().collect(),
        }
    }

    #[must_use]
    pub fn remove(&self) -> &[Plate] {
        &self.remove
    }

    #[must_use]
    pub fn add(&self) -> &[Plate] {
        &self.add
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.remove.is_empty() {
            writeln!(
                f,
                "  Remove: {}",
                self.remove.iter().map(|p| format!("{p}kg")).join(", ")
            )?;
        }
        if !self.add.is_empty() {
            writeln!(
                f,
                "  Add: {}",
                self.add.iter().map(|p| format!("{p}kg")).join(", ")
            )?;
        }
        Ok(())
    }
}
