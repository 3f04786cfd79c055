use crate::error::{Error, Result};
use crate::geometry::Bounds;

/// Simulation parameters consumed by [`crate::model::Model`] at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Rectangle the cells bounce around in.
    pub bounds: Bounds,
    /// Two cells strictly closer than this are in contact.
    pub contact_radius: f32,
    /// Ticks an infected cell stays infectious before becoming immune.
    pub recovery_period: u32,
    /// Length of every cell's initial direction vector.
    pub speed: f32,
    pub population: usize,
    /// Cells `[0, infected)` start infected.
    pub infected: usize,
    /// Cells `[infected, infected + immune)` start immune.
    pub immune: usize,
    /// RNG seed for reproducible placement; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            contact_radius: 15.0,
            recovery_period: 90,
            speed: 5.0,
            population: 100,
            infected: 1,
            immune: 0,
            seed: None,
        }
    }
}

impl Config {
    /// Convenience constructor mirroring the classic
    /// `(population, speed, infected, immune)` argument list; the remaining
    /// fields keep their defaults.
    pub fn with_counts(population: usize, speed: f32, infected: usize, immune: usize) -> Self {
        Self {
            population,
            speed,
            infected,
            immune,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks population counts and physical parameters.
    ///
    /// Both seeded ranges must fit inside the population without
    /// overlapping: `0 < infected < population`, `immune < population` and
    /// `infected + immune <= population`.
    pub fn validate(&self) -> Result<()> {
        if self.infected == 0 {
            return Err(Error::InvalidParam("infected count must be > 0".into()));
        }
        if self.infected >= self.population {
            return Err(Error::InvalidParam(format!(
                "infected count {} must be < population {}",
                self.infected, self.population
            )));
        }
        if self.immune >= self.population {
            return Err(Error::InvalidParam(format!(
                "immune count {} must be < population {}",
                self.immune, self.population
            )));
        }
        if self
            .infected
            .checked_add(self.immune)
            .is_none_or(|n| n > self.population)
        {
            return Err(Error::InvalidParam(format!(
                "infected count {} plus immune count {} exceeds population {}",
                self.infected, self.immune, self.population
            )));
        }
        // A negative speed only flips the random heading.
        if !self.speed.is_finite() {
            return Err(Error::InvalidParam("speed must be finite".into()));
        }
        if !self.contact_radius.is_finite() || self.contact_radius < 0.0 {
            return Err(Error::InvalidParam(
                "contact radius must be finite and >= 0".into(),
            ));
        }
        self.bounds.validate()
    }
}
