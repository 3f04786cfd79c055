use crate::geometry::Point;

/// Classic integer value of the sickness counter for a vulnerable cell.
pub const VULNERABLE: i64 = 0;
/// Counter value on the tick a cell contracts the disease.
pub const INFECTED: i64 = 1;
/// Counter value reported for a recovered cell.
pub const IMMUNE: i64 = -1;

/// Disease state of a single cell.
///
/// Transitions only go `Vulnerable -> Infected -> Immune`; `Immune` is
/// terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Health {
    #[default]
    Vulnerable,
    /// `ticks` counts the ticks elapsed since the disease was contracted.
    Infected { ticks: u32 },
    Immune,
}

/// Display color of a cell, a pure function of its [`Health`] band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellColor {
    Gray,
    Red,
    Green,
}

impl CellColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            CellColor::Gray => [160, 160, 160],
            CellColor::Red => [220, 40, 40],
            CellColor::Green => [40, 180, 70],
        }
    }
}

/// An individual moving entity in the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub location: Point,
    pub direction: Point,
    pub health: Health,
}

impl Cell {
    /// Creates a vulnerable cell at `location` moving by `direction` per tick.
    pub fn new(location: Point, direction: Point) -> Self {
        Self {
            location,
            direction,
            health: Health::Vulnerable,
        }
    }

    /// Advances the cell by one tick.
    ///
    /// Moves by `direction`, then progresses an active infection by one
    /// tick, then recovers the cell once it has been infected for
    /// `recovery_period` ticks. The three steps always run in this order.
    pub fn tick(&mut self, recovery_period: u32) {
        self.location = self.location.add(self.direction);
        if let Health::Infected { ticks } = &mut self.health {
            *ticks = ticks.saturating_add(1);
        }
        if let Health::Infected { ticks } = self.health
            && ticks >= recovery_period
        {
            self.immunize();
        }
    }

    pub fn color(&self) -> CellColor {
        match self.health {
            Health::Vulnerable => CellColor::Gray,
            Health::Infected { .. } => CellColor::Red,
            Health::Immune => CellColor::Green,
        }
    }

    /// Puts the cell at the start of the infectious band.
    ///
    /// There is no guard: an infected cell restarts its counter and an
    /// immune cell becomes infected again. Callers only invoke this on
    /// vulnerable cells.
    pub fn contract_disease(&mut self) {
        self.health = Health::Infected { ticks: 0 };
    }

    pub fn immunize(&mut self) {
        self.health = Health::Immune;
    }

    #[inline]
    pub fn is_vulnerable(&self) -> bool {
        matches!(self.health, Health::Vulnerable)
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        matches!(self.health, Health::Infected { .. })
    }

    #[inline]
    pub fn is_immune(&self) -> bool {
        matches!(self.health, Health::Immune)
    }

    /// Integer sickness counter: [`VULNERABLE`], [`INFECTED`] plus the ticks
    /// spent infected, or [`IMMUNE`].
    pub fn sickness(&self) -> i64 {
        match self.health {
            Health::Vulnerable => VULNERABLE,
            Health::Infected { ticks } => INFECTED + i64::from(ticks),
            Health::Immune => IMMUNE,
        }
    }

    /// Pairwise transmission between two cells in contact.
    ///
    /// A vulnerable `self` catches the disease from an infected `other`,
    /// then an infected `self` passes it to a vulnerable `other`. Both
    /// checks run; pairs in the same band or involving an immune cell are
    /// unaffected.
    pub fn contact_with(&mut self, other: &mut Cell) {
        if self.is_vulnerable() && other.is_infected() {
            self.contract_disease();
        }
        if self.is_infected() && other.is_vulnerable() {
            other.contract_disease();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_cell() -> Cell {
        Cell::new(Point::ZERO, Point::ZERO)
    }

    fn infected_cell() -> Cell {
        let mut c = still_cell();
        c.contract_disease();
        c
    }

    fn immune_cell() -> Cell {
        let mut c = still_cell();
        c.immunize();
        c
    }

    #[test]
    fn new_cell_is_vulnerable_and_gray() {
        let c = still_cell();
        assert!(c.is_vulnerable());
        assert!(!c.is_infected());
        assert!(!c.is_immune());
        assert_eq!(c.sickness(), VULNERABLE);
        assert_eq!(c.color(), CellColor::Gray);
    }

    #[test]
    fn bands_are_mutually_exclusive() {
        for c in [still_cell(), infected_cell(), immune_cell()] {
            let flags = [c.is_vulnerable(), c.is_infected(), c.is_immune()];
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1, "{c:?}");
        }
        assert_eq!(infected_cell().color(), CellColor::Red);
        assert_eq!(immune_cell().color(), CellColor::Green);
    }

    #[test]
    fn tick_moves_by_direction() {
        let mut c = Cell::new(Point::new(1.0, 2.0), Point::new(0.5, -1.0));
        c.tick(10);
        assert_eq!(c.location, Point::new(1.5, 1.0));
        c.tick(10);
        assert_eq!(c.location, Point::new(2.0, 0.0));
        assert!(c.is_vulnerable());
    }

    #[test]
    fn infection_progresses_then_recovers_after_recovery_period() {
        let recovery = 5;
        let mut c = infected_cell();
        assert_eq!(c.sickness(), INFECTED);

        let mut last = c.sickness();
        for _ in 0..recovery - 1 {
            c.tick(recovery);
            assert!(c.is_infected());
            assert!(c.sickness() > last, "counter must strictly increase");
            last = c.sickness();
        }
        assert_eq!(last, i64::from(recovery));

        c.tick(recovery);
        assert!(c.is_immune());
        assert_eq!(c.sickness(), IMMUNE);

        for _ in 0..20 {
            c.tick(recovery);
            assert!(c.is_immune());
        }
    }

    #[test]
    fn vulnerable_and_immune_cells_do_not_progress() {
        let mut v = still_cell();
        let mut i = immune_cell();
        for _ in 0..100 {
            v.tick(3);
            i.tick(3);
        }
        assert!(v.is_vulnerable());
        assert!(i.is_immune());
    }

    #[test]
    fn contract_disease_restarts_counter() {
        let mut c = infected_cell();
        c.tick(50);
        c.tick(50);
        assert_eq!(c.sickness(), INFECTED + 2);

        c.contract_disease();
        assert_eq!(c.sickness(), INFECTED);
    }

    #[test]
    fn contact_infects_vulnerable_self() {
        let mut a = still_cell();
        let mut b = infected_cell();
        b.tick(50);
        let b_before = b.clone();

        a.contact_with(&mut b);

        assert!(a.is_infected());
        assert_eq!(a.sickness(), INFECTED);
        assert_eq!(b, b_before);
    }

    #[test]
    fn contact_infects_vulnerable_other() {
        let mut a = infected_cell();
        let mut b = still_cell();

        a.contact_with(&mut b);

        assert!(b.is_infected());
        assert_eq!(a.sickness(), INFECTED);
    }

    #[test]
    fn contact_without_a_vulnerable_infected_pair_changes_nothing() {
        let pairs = [
            (still_cell(), still_cell()),
            (infected_cell(), infected_cell()),
            (immune_cell(), infected_cell()),
            (infected_cell(), immune_cell()),
            (immune_cell(), still_cell()),
            (still_cell(), immune_cell()),
        ];
        for (mut a, mut b) in pairs {
            let (a0, b0) = (a.clone(), b.clone());
            a.contact_with(&mut b);
            assert_eq!(a, a0);
            assert_eq!(b, b0);
        }
    }

    #[test]
    fn color_rgb_is_distinct_per_band() {
        let colors = [CellColor::Gray, CellColor::Red, CellColor::Green].map(CellColor::rgb);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
