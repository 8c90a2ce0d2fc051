// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read and write adapters for anything shaped like an `N`-component tuple.
//!
//! Vector operations take and return the crate's own value types. These two
//! traits are the bridge to caller-owned representations: arrays, plain
//! tuples, or a caller's own vector struct.

/// Read access to `N` ordered `f32` components.
pub trait Components<const N: usize> {
    /// Returns the components in order.
    fn components(&self) -> [f32; N];
}

/// Write access to `N` ordered `f32` components (an output sink).
pub trait ComponentsMut<const N: usize> {
    /// Overwrites every component.
    fn set_components(&mut self, values: [f32; N]);
}

impl<const N: usize> Components<N> for [f32; N] {
    fn components(&self) -> [f32; N] {
        *self
    }
}

impl<const N: usize> ComponentsMut<N> for [f32; N] {
    fn set_components(&mut self, values: [f32; N]) {
        *self = values;
    }
}

impl Components<2> for (f32, f32) {
    fn components(&self) -> [f32; 2] {
        [self.0, self.1]
    }
}

impl ComponentsMut<2> for (f32, f32) {
    fn set_components(&mut self, [x, y]: [f32; 2]) {
        *self = (x, y);
    }
}

impl Components<3> for (f32, f32, f32) {
    fn components(&self) -> [f32; 3] {
        [self.0, self.1, self.2]
    }
}

impl ComponentsMut<3> for (f32, f32, f32) {
    fn set_components(&mut self, [x, y, z]: [f32; 3]) {
        *self = (x, y, z);
    }
}

impl Components<4> for (f32, f32, f32, f32) {
    fn components(&self) -> [f32; 4] {
        [self.0, self.1, self.2, self.3]
    }
}

impl ComponentsMut<4> for (f32, f32, f32, f32) {
    fn set_components(&mut self, [x, y, z, w]: [f32; 4]) {
        *self = (x, y, z, w);
    }
}

impl<T, const N: usize> Components<N> for &T
where
    T: Components<N> + ?Sized,
{
    fn components(&self) -> [f32; N] {
        (**self).components()
    }
}

impl<T, const N: usize> ComponentsMut<N> for &mut T
where
    T: ComponentsMut<N> + ?Sized,
{
    fn set_components(&mut self, values: [f32; N]) {
        (**self).set_components(values);
    }
}

/// Index of the component preferred by `better`, scanning left to right.
///
/// Earlier indices win ties because `better` must be strict. A NaN never
/// displaces a number, but any number displaces a NaN.
pub(crate) fn extreme_index(values: &[f32], better: impl Fn(f32, f32) -> bool) -> usize {
    let mut best = 0;
    for (idx, &candidate) in values.iter().enumerate().skip(1) {
        let current = values[best];
        if candidate.is_nan() {
            continue;
        }
        if current.is_nan() || better(candidate, current) {
            best = idx;
        }
    }
    best
}
