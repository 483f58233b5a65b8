use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Linearly map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping is applied; values outside the input range extrapolate.
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// 2D vector in UI coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Componentwise clamp into `[min, max]`.
    ///
    /// If `min > max` on an axis the result is `max`; `f64::clamp` would panic.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self {
            x: self.x.max(min.x).min(max.x),
            y: self.y.max(min.y).min(max.y),
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Vec2) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// The fixed crop window.
///
/// `anchor` is where the pivot sits in UI coordinates. The local rectangle
/// spans `-pivot * size ..= (1 - pivot) * size` around it, so the default
/// centre pivot gives a rectangle symmetric about the anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub anchor: Vec2,
    pub width: u32,
    pub height: u32,
    pub pivot: Vec2,
}

impl Viewport {
    /// Viewport with a centred pivot.
    pub fn new(anchor: Vec2, width: u32, height: u32) -> Self {
        Self {
            anchor,
            width,
            height,
            pivot: Vec2::splat(0.5),
        }
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f64, self.height as f64)
    }

    pub fn local_min(&self) -> Vec2 {
        -(self.pivot * self.size())
    }

    pub fn local_max(&self) -> Vec2 {
        (Vec2::splat(1.0) - self.pivot) * self.size()
    }

    /// Top-left corner in UI coordinates.
    pub fn min(&self) -> Vec2 {
        self.anchor + self.local_min()
    }

    /// Bottom-right corner in UI coordinates.
    pub fn max(&self) -> Vec2 {
        self.anchor + self.local_max()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_unit_interval() {
        assert_eq!(remap(0.0, 0.0, 1.0, 10.0, 30.0), 10.0);
        assert_eq!(remap(1.0, 0.0, 1.0, 10.0, 30.0), 30.0);
        assert_eq!(remap(0.5, 0.0, 1.0, 10.0, 30.0), 20.0);
    }

    #[test]
    fn remap_general_range() {
        assert_eq!(remap(5.0, 0.0, 10.0, -1.0, 1.0), 0.0);
        assert_eq!(remap(15.0, 10.0, 20.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn clamp_inverted_range_takes_max() {
        let v = Vec2::new(5.0, 5.0).clamp(Vec2::splat(10.0), Vec2::splat(0.0));
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn viewport_corners_follow_pivot() {
        let vp = Viewport::new(Vec2::new(10.0, 20.0), 200, 100);
        assert_eq!(vp.min(), Vec2::new(-90.0, -30.0));
        assert_eq!(vp.max(), Vec2::new(110.0, 70.0));

        let top_left = vp.with_pivot(Vec2::ZERO);
        assert_eq!(top_left.min(), Vec2::new(10.0, 20.0));
        assert_eq!(top_left.max(), Vec2::new(210.0, 120.0));
    }
}
