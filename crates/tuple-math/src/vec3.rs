// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{check_len, TupleError};
use crate::provider::{default_provider, MathProvider};
use crate::rounding::RoundingMethod;
use crate::tuple::{extreme_index, Components, ComponentsMut};

/// 3D vector of `f32` components `(x, y, z)`.
///
/// Same conventions as [`crate::Vec2`]: points or directions, no enforced
/// normalization, IEEE-754 edge cases pass through. Rotations are
/// right-handed (counter-clockwise when looking down the axis toward the
/// origin).
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
#[serde(transparent)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> f32 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }

    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        )
    }

    /// Reads three components from any tuple-like value.
    pub fn from_components<T: Components<3> + ?Sized>(source: &T) -> Self {
        Self {
            data: source.components(),
        }
    }

    /// Writes the components into `sink`.
    pub fn write_to<T: ComponentsMut<3> + ?Sized>(self, sink: &mut T) {
        sink.set_components(self.data);
    }

    /// Hands the components to `f` and returns whatever it builds.
    pub fn map_into<R>(self, f: impl FnOnce(f32, f32, f32) -> R) -> R {
        f(self.x(), self.y(), self.z())
    }

    /// Reads `slice[0..3]`.
    pub fn from_slice(slice: &[f32]) -> Result<Self, TupleError> {
        check_len(3, slice.len())?;
        Ok(Self::new(slice[0], slice[1], slice[2]))
    }

    /// Writes into `slice[0..3]`.
    pub fn write_to_slice(self, slice: &mut [f32]) -> Result<(), TupleError> {
        check_len(3, slice.len())?;
        slice[..3].copy_from_slice(&self.data);
        Ok(())
    }

    /// Views a flat `[x0, y0, z0, x1, ..]` buffer as vectors; length must be a multiple of three.
    pub fn cast_slice(flat: &[f32]) -> Result<&[Self], TupleError> {
        Ok(bytemuck::try_cast_slice(flat)?)
    }

    /// Mutable counterpart of [`Vec3::cast_slice`].
    pub fn cast_slice_mut(flat: &mut [f32]) -> Result<&mut [Self], TupleError> {
        Ok(bytemuck::try_cast_slice_mut(flat)?)
    }

    /// `self + other`.
    pub fn add(self, other: Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// `self - other`.
    pub fn sub(self, other: Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// `other - self`.
    pub fn rev_sub(self, other: Self) -> Self {
        other.sub(self)
    }

    /// Componentwise product.
    pub fn mul(self, other: Self) -> Self {
        self.zip(other, |a, b| a * b)
    }

    /// Componentwise `self / other`.
    pub fn div(self, other: Self) -> Self {
        self.zip(other, |a, b| a / b)
    }

    /// Componentwise `other / self`.
    pub fn rev_div(self, other: Self) -> Self {
        other.div(self)
    }

    /// Adds `scalar` to each component.
    pub fn add_scalar(self, scalar: f32) -> Self {
        self.map(|v| v + scalar)
    }

    /// Subtracts `scalar` from each component.
    pub fn sub_scalar(self, scalar: f32) -> Self {
        self.map(|v| v - scalar)
    }

    /// Multiplies each component by `scalar`.
    pub fn scale(self, scalar: f32) -> Self {
        self.map(|v| v * scalar)
    }

    /// Divides each component by `scalar`.
    pub fn div_scalar(self, scalar: f32) -> Self {
        self.map(|v| v / scalar)
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
            provider.fma(self.z(), a.z(), b.z()),
        )
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        let (ax, ay, az) = (self.x(), self.y(), self.z());
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
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

    /// `1 / length` using the default provider.
    pub fn inv_length(self) -> f32 {
        self.inv_length_with(default_provider())
    }

    /// `1 / length` using `provider`.
    pub fn inv_length_with<P: MathProvider + ?Sized>(self, provider: &P) -> f32 {
        provider.inv_sqrt(self.length_squared())
    }

    /// True when every component's magnitude is `<= tolerance`.
    pub fn is_zero_within(self, tolerance: f32) -> bool {
        self.data.iter().all(|v| v.abs() <= tolerance)
    }

    /// Length, `0` when [`Vec3::is_zero_within`] holds.
    pub fn length_tolerant(self, tolerance: f32) -> f32 {
        self.length_tolerant_with(default_provider(), tolerance)
    }

    /// [`Vec3::length_tolerant`] using `provider`.
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

    /// Inverse length, `0` when [`Vec3::is_zero_within`] holds.
    pub fn inv_length_tolerant(self, tolerance: f32) -> f32 {
        self.inv_length_tolerant_with(default_provider(), tolerance)
    }

    /// [`Vec3::inv_length_tolerant`] using `provider`.
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

    /// [`Vec3::normalize`] using `provider`.
    pub fn normalize_with<P: MathProvider + ?Sized>(self, provider: &P) -> Self {
        self.normalize_tolerant_with(provider, 0.0)
    }

    /// Normalizes, returning zero when [`Vec3::is_zero_within`] holds.
    pub fn normalize_tolerant(self, tolerance: f32) -> Self {
        self.normalize_tolerant_with(default_provider(), tolerance)
    }

    /// [`Vec3::normalize_tolerant`] using `provider`.
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
        let largest = self.data.iter().fold(0.0_f32, |m, c| m.max(c.abs()));
        if largest <= 0.0 {
            return Self::ZERO;
        }
        let unit_box = self.div_scalar(largest);
        unit_box.scale(unit_box.inv_length_with(provider))
    }

    /// Componentwise negation.
    pub fn negate(self) -> Self {
        self.map(|v| -v)
    }

    /// Componentwise reciprocal.
    pub fn inverse(self) -> Self {
        self.map(|v| 1.0 / v)
    }

    /// Componentwise minimum.
    pub fn min(self, other: Self) -> Self {
        self.zip(other, f32::min)
    }

    /// Componentwise maximum.
    pub fn max(self, other: Self) -> Self {
        self.zip(other, f32::max)
    }

    /// Index of the smallest component; lower index wins ties.
    pub fn min_component_index(self) -> usize {
        extreme_index(&self.data, |candidate, best| candidate < best)
    }

    /// Index of the largest component; lower index wins ties.
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

    /// Rotates about +X by `angle` radians.
    pub fn rotate_x_rad(self, angle: f32) -> Self {
        self.rotate_x_rad_with(default_provider(), angle)
    }

    /// Rotates about +X by `angle` radians using `provider`.
    pub fn rotate_x_rad_with<P: MathProvider + ?Sized>(self, provider: &P, angle: f32) -> Self {
        let (s, c) = provider.sin_cos(angle);
        Self::new(
            self.x(),
            c * self.y() - s * self.z(),
            s * self.y() + c * self.z(),
        )
    }

    /// Rotates about +X by `angle` degrees.
    pub fn rotate_x_deg(self, angle: f32) -> Self {
        self.rotate_x_rad(crate::deg_to_rad(angle))
    }

    /// Rotates about +X by `angle` degrees using `provider`.
    pub fn rotate_x_deg_with<P: MathProvider + ?Sized>(self, provider: &P, angle: f32) -> Self {
        self.rotate_x_rad_with(provider, crate::deg_to_rad(angle))
    }

    /// Rotates about +Y by `angle` radians.
    pub fn rotate_y_rad(self, angle: f32) -> Self {
        self.rotate_y_rad_with(default_provider(), angle)
    }

    /// Rotates about +Y by `angle` radians using `provider`.
    pub fn rotate_y_rad_with<P: MathProvider + ?Sized>(self, provider: &P, angle: f32) -> Self {
        let (s, c) = provider.sin_cos(angle);
        Self::new(
            c * self.x() + s * self.z(),
            self.y(),
            -s * self.x() + c * self.z(),
        )
    }

    /// Rotates about +Y by `angle` degrees.
    pub fn rotate_y_deg(self, angle: f32) -> Self {
        self.rotate_y_rad(crate::deg_to_rad(angle))
    }

    /// Rotates about +Y by `angle` degrees using `provider`.
    pub fn rotate_y_deg_with<P: MathProvider + ?Sized>(self, provider: &P, angle: f32) -> Self {
        self.rotate_y_rad_with(provider, crate::deg_to_rad(angle))
    }

    /// Rotates about +Z by `angle` radians.
    pub fn rotate_z_rad(self, angle: f32) -> Self {
        self.rotate_z_rad_with(default_provider(), angle)
    }

    /// Rotates about +Z by `angle` radians using `provider`.
    pub fn rotate_z_rad_with<P: MathProvider + ?Sized>(self, provider: &P, angle: f32) -> Self {
        let (s, c) = provider.sin_cos(angle);
        Self::new(
            c * self.x() - s * self.y(),
            s * self.x() + c * self.y(),
            self.z(),
        )
    }

    /// Rotates about +Z by `angle` degrees.
    pub fn rotate_z_deg(self, angle: f32) -> Self {
        self.rotate_z_rad(crate::deg_to_rad(angle))
    }

    /// Rotates about +Z by `angle` degrees using `provider`.
    pub fn rotate_z_deg_with<P: MathProvider + ?Sized>(self, provider: &P, angle: f32) -> Self {
        self.rotate_z_rad_with(provider, crate::deg_to_rad(angle))
    }

    /// Rotates about the unit `axis` by `angle` radians (Rodrigues' formula).
    ///
    /// `axis` must already be normalized.
    pub fn rotate_axis_rad(self, axis: Self, angle: f32) -> Self {
        self.rotate_axis_rad_with(default_provider(), axis, angle)
    }

    /// [`Vec3::rotate_axis_rad`] using `provider`.
    pub fn rotate_axis_rad_with<P: MathProvider + ?Sized>(
        self,
        provider: &P,
        axis: Self,
        angle: f32,
    ) -> Self {
        let (s, c) = provider.sin_cos(angle);
        self.scale(c)
            .add(axis.cross(self).scale(s))
            .add(axis.scale(axis.dot(self) * (1.0 - c)))
    }

    /// Rotates about the unit `axis` by `angle` degrees.
    pub fn rotate_axis_deg(self, axis: Self, angle: f32) -> Self {
        self.rotate_axis_rad(axis, crate::deg_to_rad(angle))
    }

    /// [`Vec3::rotate_axis_deg`] using `provider`.
    pub fn rotate_axis_deg_with<P: MathProvider + ?Sized>(
        self,
        provider: &P,
        axis: Self,
        angle: f32,
    ) -> Self {
        self.rotate_axis_rad_with(provider, axis, crate::deg_to_rad(angle))
    }

    /// Orthogonal projection onto the normalized `target`.
    pub fn project(self, target: Self) -> Self {
        target.scale(self.dot(target))
    }

    /// Reflects about the surface with unit `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self.sub(normal.scale(2.0 * self.dot(normal)))
    }

    /// `(other − self) / 2`.
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

    /// Linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.add(other.sub(self).scale(t))
    }

    /// Componentwise ceiling.
    pub fn ceil(self) -> Self {
        self.map(f32::ceil)
    }

    /// Componentwise floor.
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    /// Componentwise round, ties away from zero.
    pub fn round(self) -> Self {
        self.map(f32::round)
    }

    /// Componentwise truncation.
    pub fn trunc(self) -> Self {
        self.map(f32::trunc)
    }

    /// Rounds each component with `method`.
    pub fn round_with<R: RoundingMethod + ?Sized>(self, method: &R) -> Self {
        self.map(|v| method.round(v))
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Components<3> for Vec3 {
    fn components(&self) -> [f32; 3] {
        self.data
    }
}

impl ComponentsMut<3> for Vec3 {
    fn set_components(&mut self, values: [f32; 3]) {
        self.data = values;
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::sub(self, rhs)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::mul(self, rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::div(self, rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.div_scalar(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(*self, rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(*self, rhs);
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.div_scalar(rhs);
    }
}
