use contagion_core::cell::{IMMUNE, INFECTED, VULNERABLE};
use contagion_core::error::{Error, Result};
use contagion_core::{Config, Model, Point};

/// Construction rejects out-of-range seeding counts and accepts a valid split.
#[test]
fn construction_validates_counts() -> Result<()> {
    for (pop, infected, immune) in [(10, 0, 0), (10, 10, 0), (10, 3, 10)] {
        let err = Model::new(&Config::with_counts(pop, 1.0, infected, immune)).unwrap_err();
        assert!(
            matches!(err, Error::InvalidParam(_)),
            "({pop}, {infected}, {immune}) gave {err:?}"
        );
    }

    let model = Model::new(&Config::with_counts(10, 1.0, 3, 0))?;
    let census = model.census();
    assert_eq!(census.infected, 3);
    assert_eq!(census.immune, 0);
    assert_eq!(census.vulnerable, 7);
    Ok(())
}

/// Overlapping seed ranges are refused instead of re-immunizing infected cells.
#[test]
fn construction_rejects_seed_ranges_past_population() {
    let err = Model::new(&Config::with_counts(10, 1.0, 6, 5)).unwrap_err();
    assert!(err.to_string().contains("exceeds population"));
}

#[test]
fn termination_follows_infected_cells() -> Result<()> {
    let mut model = Model::new(&Config::with_counts(12, 2.0, 1, 0).with_seed(3))?;
    assert!(!model.is_complete());

    for cell in &mut model.population {
        cell.immunize();
    }
    assert!(model.is_complete());
    Ok(())
}

/// Two frozen cells in contact: the infection passes on, then both recover.
#[test]
fn frozen_pair_infects_then_recovers() -> Result<()> {
    let mut cfg = Config::with_counts(5, 0.0, 1, 0).with_seed(11);
    cfg.recovery_period = 10;
    let mut model = Model::new(&cfg)?;

    let positions = [
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(-200.0, -200.0),
        Point::new(200.0, -200.0),
        Point::new(200.0, 200.0),
    ];
    for (cell, pos) in model.population.iter_mut().zip(positions) {
        cell.location = pos;
    }
    assert!(model.population[0].is_infected());
    assert!(model.population[1].is_vulnerable());

    model.tick();
    assert!(model.population[1].is_infected());
    assert_eq!(model.population[1].sickness(), INFECTED);
    assert!(!model.is_complete());

    let mut guard = 0;
    while !model.is_complete() {
        model.tick();
        guard += 1;
        assert!(guard < 100, "model never completed");
    }

    assert!(model.population[0].is_immune());
    assert!(model.population[1].is_immune());
    assert!(model.population[2..].iter().all(|c| c.is_vulnerable()));
    // Cell 1 was infected one tick after cell 0 and needs the full period.
    assert_eq!(model.time, u64::from(cfg.recovery_period) + 1);
    for (cell, pos) in model.cells().iter().zip(positions) {
        assert_eq!(cell.location, pos);
    }
    Ok(())
}

/// Over a long seeded run every cell's counter only moves forward.
#[test]
fn sickness_never_regresses() -> Result<()> {
    let mut cfg = Config::with_counts(60, 4.0, 3, 5).with_seed(2024);
    cfg.recovery_period = 15;
    cfg.contact_radius = 20.0;
    let recovery = i64::from(cfg.recovery_period);
    let mut model = Model::new(&cfg)?;

    let mut prev: Vec<i64> = model.cells().iter().map(|c| c.sickness()).collect();
    let mut infected_for = vec![0u32; model.len()];

    for _ in 0..400 {
        model.tick();
        for (i, cell) in model.cells().iter().enumerate() {
            let now = cell.sickness();
            let before = prev[i];
            let ok = match before {
                VULNERABLE => now == VULNERABLE || now == INFECTED,
                IMMUNE => now == IMMUNE,
                k if k == recovery => now == IMMUNE,
                k => now == k + 1,
            };
            assert!(ok, "cell {i}: {before} -> {now}");
            if before >= INFECTED {
                infected_for[i] += 1;
            }
            if before >= INFECTED && now == IMMUNE {
                assert_eq!(infected_for[i], cfg.recovery_period, "cell {i}");
            }
            assert!(cfg.bounds.contains(cell.location), "cell {i} escaped");
        }
        prev = model.cells().iter().map(|c| c.sickness()).collect();
    }
    Ok(())
}
