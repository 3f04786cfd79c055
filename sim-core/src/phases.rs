//! Per-tick simulation phases for the cell population.
//!
//! A model step runs them in this order:
//! 1. [`movement_phase`] — every cell advances its own state machine and
//!    bounces off the bounds. No cell looks at any other cell here.
//! 2. [`contact_phase`] — every pair of cells closer than the contact
//!    radius interacts, using the post-move positions.

use crate::{cell::Cell, geometry::Bounds, geometry::Point, types::CellId};

/// Advances every cell by one tick and keeps it inside `bounds`.
///
/// For each cell, in population order, calls [`Cell::tick`] with the given
/// recovery period and then [`enforce_bounds`].
///
/// ### Parameters
/// - `population` - Cells to advance; mutated in place.
/// - `bounds` - Rectangle the cells are reflected into.
/// - `recovery_period` - Ticks an infected cell needs to become immune.
pub fn movement_phase(population: &mut [Cell], bounds: &Bounds, recovery_period: u32) {
    for cell in population.iter_mut() {
        cell.tick(recovery_period);
        enforce_bounds(cell, bounds);
    }
}

/// Reflects a cell that has left `bounds` back onto the boundary.
///
/// Each axis is handled independently: a coordinate past the max edge is
/// clamped to it and that direction component negated, and likewise for
/// the min edge. A diagonal overshoot therefore reflects on both axes.
///
/// `location` and `direction` are rebuilt and reassigned rather than
/// mutated through shared points.
pub fn enforce_bounds(cell: &mut Cell, bounds: &Bounds) {
    let Point { mut x, mut y } = cell.location;
    let Point { x: mut dx, y: mut dy } = cell.direction;

    if x > bounds.max.x {
        x = bounds.max.x;
        dx = -dx;
    }
    if x < bounds.min.x {
        x = bounds.min.x;
        dx = -dx;
    }
    if y > bounds.max.y {
        y = bounds.max.y;
        dy = -dy;
    }
    if y < bounds.min.y {
        y = bounds.min.y;
        dy = -dy;
    }

    cell.location = Point::new(x, y);
    cell.direction = Point::new(dx, dy);
}

/// Runs pairwise contact between every two cells closer than `radius`.
///
/// This is an exhaustive O(n²) scan over unordered pairs `i < j`. A pair
/// is in contact when its distance is strictly less than `radius`, in which
/// case `population[i].contact_with(population[j])` is called; the lower
/// index always plays `self`.
///
/// ### Parameters
/// - `population` - Cells after the movement phase; mutated in place.
/// - `radius` - Contact radius.
///
/// ### Returns
/// The ids of cells that went from vulnerable to infected during this
/// phase, in ascending order.
pub fn contact_phase(population: &mut [Cell], radius: f32) -> Vec<CellId> {
    let was_vulnerable: Vec<bool> = population.iter().map(Cell::is_vulnerable).collect();

    check_contacts(population, radius);

    population
        .iter()
        .enumerate()
        .filter_map(|(id, c)| (was_vulnerable[id] && c.is_infected()).then_some(id))
        .collect()
}

/// Exhaustive pairwise contact scan; see [`contact_phase`].
///
/// ### Returns
/// The number of pairs found within `radius`.
pub fn check_contacts(population: &mut [Cell], radius: f32) -> usize {
    let mut pairs = 0;
    for i in 0..population.len() {
        let (head, tail) = population.split_at_mut(i + 1);
        let cell = &mut head[i];
        for other in tail.iter_mut() {
            if cell.location.distance(other.location) < radius {
                cell.contact_with(other);
                pairs += 1;
            }
        }
    }
    pairs
}
