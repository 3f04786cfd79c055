use crate::cell::{Cell, Health};
use std::fmt;

/// Number of cells in each disease band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub vulnerable: usize,
    pub infected: usize,
    pub immune: usize,
}

impl Census {
    pub fn of<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut census = Self::default();
        for cell in cells {
            match cell.health {
                Health::Vulnerable => census.vulnerable += 1,
                Health::Infected { .. } => census.infected += 1,
                Health::Immune => census.immune += 1,
            }
        }
        census
    }

    pub fn total(&self) -> usize {
        self.vulnerable + self.infected + self.immune
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vulnerable={} infected={} immune={}",
            self.vulnerable, self.infected, self.immune
        )
    }
}
