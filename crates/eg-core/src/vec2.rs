//! 2-D vector type and the stateless kernels built on it.
//!
//! Every function here is pure, allocation-free and safe to call once per
//! agent per tick.  The batch kernels work on caller-owned slices so the hot
//! path never touches the allocator.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2-D vector in double precision.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean magnitude, computed with `hypot` to avoid overflow.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

// ── Kernels ───────────────────────────────────────────────────────────────────

/// 90° counter-clockwise rotation: `(x, y) → (-y, x)`.
#[inline]
pub fn rotate90(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// 90° clockwise rotation: `(x, y) → (y, -x)`.
#[inline]
pub fn rotate270(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

#[inline]
pub fn dot(v0: Vec2, v1: Vec2) -> f64 {
    v0.x * v1.x + v0.y * v1.y
}

/// z-component of the 3-D cross product of two vectors in the xy-plane.
#[inline]
pub fn cross(v0: Vec2, v1: Vec2) -> f64 {
    v0.x * v1.y - v0.y * v1.x
}

/// Unit vector in the direction of `v`.
///
/// The result is non-finite when `v` is the zero vector; callers that can
/// see a zero vector must check before calling.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v / v.length()
}

/// In-place [`normalize`] of every row.
pub fn normalize_batch(vs: &mut [Vec2]) {
    for v in vs.iter_mut() {
        *v = normalize(*v);
    }
}

/// Row-wise magnitudes of `vs` written into `out`.
///
/// # Panics
/// Panics if the two slices differ in length.
pub fn lengths(vs: &[Vec2], out: &mut [f64]) {
    assert_eq!(vs.len(), out.len(), "lengths: output buffer size mismatch");
    for (v, o) in vs.iter().zip(out.iter_mut()) {
        *o = v.length();
    }
}

/// Scale `force` down to magnitude `f_max` if it is longer than that.
///
/// Shorter forces (including the zero vector) are left untouched.
#[inline]
pub fn force_limit(force: &mut Vec2, f_max: f64) {
    let f_mag = force.length();
    if f_mag > f_max {
        *force *= f_max / f_mag;
    }
}
