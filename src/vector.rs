//! Two-dimensional vector used for entity positions and goals.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::{IVec2, Vec2};

use crate::constants::VECTOR_EPSILON;

/// A 2D floating-point vector.
///
/// Equality is approximate: two vectors are equal when each axis differs by less
/// than [`VECTOR_EPSILON`]. Division by zero yields `None` instead of infinities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.as_vec2().length_squared()
    }

    pub fn magnitude(&self) -> f32 {
        self.as_vec2().length()
    }

    pub fn distance_squared(&self, other: Vector2) -> f32 {
        (*self - other).magnitude_squared()
    }

    /// Divides both axes by `scalar`, or returns `None` when `scalar` is zero.
    pub fn checked_div(self, scalar: f32) -> Option<Vector2> {
        if scalar == 0.0 {
            return None;
        }
        Some(Vector2::new(self.x / scalar, self.y / scalar))
    }

    /// Truncates toward negative infinity on both axes.
    pub fn as_ivec2(&self) -> IVec2 {
        self.as_vec2().floor().as_ivec2()
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < VECTOR_EPSILON && (self.y - other.y).abs() < VECTOR_EPSILON
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        v.as_vec2()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        (self.as_vec2() + rhs.as_vec2()).into()
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        (self.as_vec2() - rhs.as_vec2()).into()
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f32) -> Vector2 {
        (self.as_vec2() * scalar).into()
    }
}

impl Div<f32> for Vector2 {
    type Output = Option<Vector2>;

    fn div(self, scalar: f32) -> Option<Vector2> {
        self.checked_div(scalar)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
