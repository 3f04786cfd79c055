use crate::error::{Error, Result};
use glam::Vec2;
use rand::Rng;
use std::ops::Add;

/// A 2-D coordinate, used both as a position and as a per-tick
/// displacement vector.
///
/// `Point` is a plain value: operations return new points and never
/// mutate their operands. Arithmetic is delegated to [`glam::Vec2`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds a vector of length `magnitude` pointing at `angle` radians.
    pub fn from_angle(angle: f32, magnitude: f32) -> Self {
        (Vec2::from_angle(angle) * magnitude).into()
    }

    /// Component-wise sum of `self` and `other`.
    #[inline]
    pub fn add(self, other: Point) -> Point {
        (Vec2::from(self) + Vec2::from(other)).into()
    }

    /// Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        Vec2::from(self).distance(Vec2::from(other))
    }

    #[inline]
    pub fn length(self) -> f32 {
        Vec2::from(self).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::add(self, rhs)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Axis-aligned rectangle that cells live in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Square of side `2 * half_extent` centered on the origin.
    pub const fn centered(half_extent: f32) -> Self {
        Self {
            min: Point::new(-half_extent, -half_extent),
            max: Point::new(half_extent, half_extent),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test; points lying on an edge are inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Uniformly random point inside the rectangle.
    pub fn random_point(&self, rng: &mut impl Rng) -> Point {
        let x = self.min.x + rng.random::<f32>() * self.width();
        let y = self.min.y + rng.random::<f32>() * self.height();
        Point::new(x, y)
    }

    /// Errors unless both corners are finite and `min < max` on each axis.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidParam("bounds must be finite".into()));
        }
        if self.min.x >= self.max.x || self.min.y >= self.max.y {
            return Err(Error::InvalidParam(format!(
                "bounds min {:?} must be strictly below max {:?}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::centered(250.0)
    }
}
