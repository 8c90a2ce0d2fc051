// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{check_len, TupleError};
use crate::provider::{default_provider, MathProvider};
use crate::rounding::RoundingMethod;
use crate::tuple::{extreme_index, Components, ComponentsMut};

/// 2D vector of `f32` components `(x, y)`.
///
/// * Values may represent points or directions; operations never enforce
///   normalization and never fail. Division by zero and friends follow
///   IEEE-754.
/// * Methods without a provider argument route sqrt/trig/fma through
///   [`default_provider`]; the `*_with` variants take an explicit backend.
/// * Layout is `#[repr(C)]` `[x, y]`, so flat `f32` buffers can be viewed as
///   vectors with [`Vec2::cast_slice`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
#[serde(transparent)]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Both components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with both components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Reads the first two components of any tuple-like value.
    pub fn from_components<T: Components<2> + ?Sized>(source: &T) -> Self {
        Self {
            data: source.components(),
        }
    }

    /// Writes the components into `sink`.
    pub fn write_to<T: ComponentsMut<2> + ?Sized>(self, sink: &mut T) {
        sink.set_components(self.data);
    }

    /// Hands the components to `f` and returns whatever it builds.
    pub fn map_into<R>(self, f: impl FnOnce(f32, f32) -> R) -> R {
        f(self.x(), self.y())
    }

    /// Reads `(slice[0], slice[1])`.
    pub fn from_slice(slice: &[f32]) -> Result<Self, TupleError> {
        check_len(2, slice.len())?;
        Ok(Self::new(slice[0], slice[1]))
    }

    /// Writes into `slice[0..2]`, leaving any further elements untouched.
    pub fn write_to_slice(self, slice: &mut [f32]) -> Result<(), TupleError> {
        check_len(2, slice.len())?;
        slice[..2].copy_from_slice(&self.data);
        Ok(())
    }

    /// Views a flat `[x0, y0, x1, y1, ..]` buffer as vectors without copying.
    ///
    /// The buffer length must be a multiple of two.
    pub fn cast_slice(flat: &[f32]) -> Result<&[Self], TupleError> {
        Ok(bytemuck::try_cast_slice(flat)?)
    }

    /// Mutable counterpart of [`Vec2::cast_slice`].
    pub fn cast_slice_mut(flat: &mut [f32]) -> Result<&mut [Self], TupleError> {
        Ok(bytemuck::try_cast_slice_mut(flat)?)
    }

    /// `self + other`.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// `self - other`.
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// `other - self`.
    pub fn rev_sub(self, other: Self) -> Self {
        other.sub(self)
    }

    /// Componentwise product.
    pub fn mul(self, other: Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y())
    }

    /// Componentwise quotient `self / other`.
    pub fn div(self, other: Self) -> Self {
        Self::new(self.x() / other.x(), self.y() / other.y())
    }

    /// Componentwise quotient `other / self`.
    pub fn rev_div(self, other: Self) -> Self {
        other.div(self)
    }

    /// Adds `scalar` to each component.
    pub fn add_scalar(self, scalar: f32) -> Self {
        Self::new(self.x() + scalar, self.y() + scalar)
    }

    /// Subtracts `scalar` from each component.
    pub fn sub_scalar(self, scalar: f32) -> Self {
        Self::new(self.x() - scalar, self.y() - scalar)
    }

    /// Multiplies each component by `scalar`.
    pub fn scale(self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Divides each component by `scalar`.
    pub fn div_scalar(self, scalar: f32) -> Self {
        Self::new(self.x() / scalar, self.y() / scalar)
    }

    /// Componentwise `self * a + b` using the default provider.
    pub fn fma(self, a: Self, b: Self) -> Self {
        self.fma_with(default_provider(), a, b)
    }

    /// Componentwise `self * a + b` using `provider`.
    pub fn fma_with<P: MathProvider + ?Sized>(self, provider: &P, a: Self, b: Self) -> Self {
        Self::new(
            provider.fma(self.x(), a.x(), b.x()),
            provider.fma(self.y(), a.y(), b.y()),
        )
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Perp-dot product `x₁y₂ − y₁x₂` (z of the 3D cross product).
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    pub fn cross(self, other: Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Rotates by +90° (`(-y, x)`).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Squared length.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length using the default provider.
    pub fn length(self) -> f32 {
        self.length_with(default_provider())
    }

    /// Length using `provider`.
    pub fn length_with<P: MathProvider + ?Sized>(self, provider: &P) -> f32 {
        provider.sqrt(self.length_squared())
    }

    /// `1 / length` using the default provider. Infinite for the zero vector.
    pub fn inv_length(self) -> f32 {
        self.inv_length_with(default_provider())
    }

    /// `1 / length` using `provider`.
    pub fn inv_length_with<P: MathProvider + ?Sized>(self, provider: &P) -> f32 {
        provider.inv_sqrt(self.length_squared())
    }

    /// True when every component's magnitude is `<= tolerance`.
    pub fn is_zero_within(self, tolerance: f32) -> bool {
        self.x().abs() <= tolerance && self.y().abs() <= tolerance
    }

    /// Length, snapped to `0` when [`Vec2::is_zero_within`] holds.
    pub fn length_tolerant(self, tolerance: f32) -> f32 {
        self.length_tolerant_with(default_provider(), tolerance)
    }

    /// [`Vec2::length_tolerant`] using `provider`.
    pub fn length_tolerant_with<P: MathProvider + ?Sized>(
        self,
        provider: &P,
        tolerance: f32,
    ) -> f32 {
        if self.is_zero_within(tolerance) {
            return 0.0;
        }
        self.length_with(provider)
    }

    /// Inverse length, `0` (not infinity) when [`Vec2::is_zero_within`] holds.
    pub fn inv_length_tolerant(self, tolerance: f32) -> f32 {
        self.inv_length_tolerant_with(default_provider(), tolerance)
    }

    /// [`Vec2::inv_length_tolerant`] using `provider`.
    pub fn inv_length_tolerant_with<P: MathProvider + ?Sized>(
        self,
        provider: &P,
        tolerance: f32,
    ) -> f32 {
        if self.is_zero_within(tolerance) {
            return 0.0;
        }
        self.inv_length_with(provider)
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalize(self) -> Self {
        self.normalize_tolerant(0.0)
    }

    /// [`Vec2::normalize`] using `provider`.
    pub fn normalize_with<P: MathProvider + ?Sized>(self, provider: &P) -> Self {
        self.normalize_tolerant_with(provider, 0.0)
    }

    /// Normalizes, returning the zero vector when [`Vec2::is_zero_within`] holds.
    pub fn normalize_tolerant(self, tolerance: f32) -> Self {
        self.normalize_tolerant_with(default_provider(), tolerance)
    }

    /// [`Vec2::normalize_tolerant`] using `provider`.
    pub fn normalize_tolerant_with<P: MathProvider + ?Sized>(
        self,
        provider: &P,
        tolerance: f32,
    ) -> Self {
        if self.is_zero_within(tolerance) {
            return Self::ZERO;
        }
        let len_sq = self.length_squared();
        if len_sq >= f32::MIN_POSITIVE && len_sq.is_finite() {
            return self.scale(provider.inv_sqrt(len_sq));
        }
        // Squared length under- or overflowed: bring the largest component to 1 first.
        let largest = self.x().abs().max(self.y().abs());
        if largest <= 0.0 {
            return Self::ZERO;
        }
        let unit_box = self.div_scalar(largest);
        unit_box.scale(unit_box.inv_length_with(provider))
    }

    /// Componentwise negation.
    pub fn negate(self) -> Self {
        Self::new(-self.x(), -self.y())
    }

    /// Componentwise reciprocal `(1/x, 1/y)`.
    pub fn inverse(self) -> Self {
        Self::new(1.0 / self.x(), 1.0 / self.y())
    }

    /// Componentwise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Componentwise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    /// Index of the smallest component; index 0 wins ties.
    pub fn min_component_index(self) -> usize {
        extreme_index(&self.data, |candidate, best| candidate < best)
    }

    /// Index of the largest component; index 0 wins ties.
    pub fn max_component_index(self) -> usize {
        extreme_index(&self.data, |candidate, best| candidate > best)
    }

    /// Smallest component.
    pub fn min_component(self) -> f32 {
        self.data[self.min_component_index()]
    }

    /// Largest component.
    pub fn max_component(self) -> f32 {
        self.data[self.max_component_index()]
    }

    /// Rotates counter-clockwise by `angle` radians using the default provider.
    pub fn rotate_rad(self, angle: f32) -> Self {
        self.rotate_rad_with(default_provider(), angle)
    }

    /// Rotates counter-clockwise by `angle` radians using `provider`.
    pub fn rotate_rad_with<P: MathProvider + ?Sized>(self, provider: &P, angle: f32) -> Self {
        let (s, c) = provider.sin_cos(angle);
        Self::new(c * self.x() - s * self.y(), s * self.x() + c * self.y())
    }

    /// Rotates counter-clockwise by `angle` degrees using the default provider.
    pub fn rotate_deg(self, angle: f32) -> Self {
        self.rotate_rad(crate::deg_to_rad(angle))
    }

    /// Rotates counter-clockwise by `angle` degrees using `provider`.
    pub fn rotate_deg_with<P: MathProvider + ?Sized>(self, provider: &P, angle: f32) -> Self {
        self.rotate_rad_with(provider, crate::deg_to_rad(angle))
    }

    /// Orthogonal projection onto `target`, which must already be normalized.
    pub fn project(self, target: Self) -> Self {
        target.scale(self.dot(target))
    }

    /// Reflects about the surface with unit `normal`: `v − 2(v·n)n`.
    pub fn reflect(self, normal: Self) -> Self {
        self.sub(normal.scale(2.0 * self.dot(normal)))
    }

    /// Half of the vector from `self` to `other`: `(other − self) / 2`.
    pub fn half_vector_to(self, other: Self) -> Self {
        other.sub(self).scale(0.5)
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        self.add(other).scale(0.5)
    }

    /// Squared distance between two points.
    pub fn distance_squared(self, other: Self) -> f32 {
        other.sub(self).length_squared()
    }

    /// Euclidean distance using the default provider.
    pub fn distance(self, other: Self) -> f32 {
        self.distance_with(default_provider(), other)
    }

    /// Euclidean distance using `provider`.
    pub fn distance_with<P: MathProvider + ?Sized>(self, provider: &P, other: Self) -> f32 {
        provider.sqrt(self.distance_squared(other))
    }

    /// `1 / distance` using the default provider.
    pub fn inv_distance(self, other: Self) -> f32 {
        self.inv_distance_with(default_provider(), other)
    }

    /// `1 / distance` using `provider`.
    pub fn inv_distance_with<P: MathProvider + ?Sized>(self, provider: &P, other: Self) -> f32 {
        provider.inv_sqrt(self.distance_squared(other))
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.add(other.sub(self).scale(t))
    }

    /// Componentwise ceiling.
    pub fn ceil(self) -> Self {
        Self::new(self.x().ceil(), self.y().ceil())
    }

    /// Componentwise floor.
    pub fn floor(self) -> Self {
        Self::new(self.x().floor(), self.y().floor())
    }

    /// Componentwise round, ties away from zero.
    pub fn round(self) -> Self {
        Self::new(self.x().round(), self.y().round())
    }

    /// Componentwise truncation toward zero.
    pub fn trunc(self) -> Self {
        Self::new(self.x().trunc(), self.y().trunc())
    }

    /// Rounds each component with `method`.
    pub fn round_with<R: RoundingMethod + ?Sized>(self, method: &R) -> Self {
        Self::new(method.round(self.x()), method.round(self.y()))
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl From<Vec2> for (f32, f32) {
    fn from(value: Vec2) -> Self {
        (value.x(), value.y())
    }
}

impl Components<2> for Vec2 {
    fn components(&self) -> [f32; 2] {
        self.data
    }
}

impl ComponentsMut<2> for Vec2 {
    fn set_components(&mut self, values: [f32; 2]) {
        self.data = values;
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::sub(self, rhs)
    }
}

impl Mul for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::mul(self, rhs)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs.scale(self)
    }
}

impl Div for Vec2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::div(self, rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.div_scalar(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(*self, rhs);
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(*self, rhs);
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.div_scalar(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherent_methods_shadow_operator_traits() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.add(b), a + b);
        assert_eq!(a.sub(b), a - b);
        assert_eq!(a.mul(b), a * b);
        assert_eq!(a.div(b), a / b);
    }

    #[test]
    fn serde_is_a_plain_pair() {
        let v = Vec2::new(1.5, -2.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
        let back: Vec2 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
