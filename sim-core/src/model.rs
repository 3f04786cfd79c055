//! The simulation model: a fixed population of cells and a tick counter.

use crate::{
    cell::Cell,
    census::Census,
    config::Config,
    error::Result,
    geometry::Point,
    phases,
    types::CellId,
};
use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rng, rngs::StdRng};
use std::f32::consts::TAU;

/// State of the simulation.
///
/// Drivers call [`Model::tick`] once per frame and poll
/// [`Model::is_complete`] to decide whether to keep going. Drawing code
/// reads `population` for each cell's location and color, and `time` for
/// display.
#[derive(Debug, Clone)]
pub struct Model {
    pub population: Vec<Cell>,
    pub time: u64,
    config: Config,
    newly_infected: Vec<CellId>,
}

impl Model {
    /// Builds a model from `config`.
    ///
    /// Placement randomness comes from `config.seed` when set, otherwise from
    /// a seed drawn off the thread RNG.
    ///
    /// ### Errors
    /// [`crate::error::Error::InvalidParam`] if `config` fails
    /// [`Config::validate`]; no cells are created in that case.
    pub fn new(config: &Config) -> Result<Self> {
        let mut rng: StdRng = match config.seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Builds a model drawing positions and directions from `rng`.
    ///
    /// Every cell gets a uniformly random location inside `config.bounds`
    /// and a direction of length `config.speed` at a uniformly random angle.
    /// The first `config.infected` cells are infected and the following
    /// `config.immune` cells are immune; `config.seed` is ignored.
    pub fn with_rng(config: &Config, rng: &mut impl Rng) -> Result<Self> {
        config.validate()?;

        let population: Vec<Cell> = (0..config.population)
            .map(|_| {
                let location = config.bounds.random_point(rng);
                let direction = random_direction(config.speed, rng);
                Cell::new(location, direction)
            })
            .collect();

        let mut model = Self {
            population,
            time: 0,
            config: *config,
            newly_infected: Vec::new(),
        };

        let immune_end = config.infected + config.immune;
        for cell in &mut model.population[..config.infected] {
            cell.contract_disease();
        }
        for cell in &mut model.population[config.infected..immune_end] {
            cell.immunize();
        }

        debug!(
            "model created: population={} speed={} contact_radius={} recovery_period={} ({})",
            config.population,
            config.speed,
            config.contact_radius,
            config.recovery_period,
            model.census()
        );
        Ok(model)
    }

    /// Advances the whole model by one time step.
    ///
    /// Increments `time`, runs [`phases::movement_phase`] over every cell,
    /// then [`phases::contact_phase`] over the moved population.
    pub fn tick(&mut self) {
        let was_complete = self.is_complete();
        self.time += 1;
        phases::movement_phase(
            &mut self.population,
            &self.config.bounds,
            self.config.recovery_period,
        );
        self.newly_infected =
            phases::contact_phase(&mut self.population, self.config.contact_radius);

        trace!(
            "tick {}: {} new infections, {}",
            self.time,
            self.newly_infected.len(),
            self.census()
        );
        if !was_complete && self.is_complete() {
            info!("no infected cells remain at tick {} ({})", self.time, self.census());
        }
    }

    /// Returns `true` when no cell is infected.
    pub fn is_complete(&self) -> bool {
        !self.population.iter().any(Cell::is_infected)
    }

    pub fn census(&self) -> Census {
        Census::of(&self.population)
    }

    /// Cells infected by contact during the most recent [`Model::tick`].
    pub fn newly_infected(&self) -> &[CellId] {
        &self.newly_infected
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cells(&self) -> &[Cell] {
        &self.population
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }
}

fn random_direction(speed: f32, rng: &mut impl Rng) -> Point {
    let angle = rng.random_range(0.0..TAU);
    Point::from_angle(angle, speed)
}
