// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tuple-math: pure `f32` vector arithmetic for 2, 3 and 4 components.
//!
//! Each operation exists once per vector type and returns its result by
//! value. Caller-owned representations (arrays, tuples, flat buffers, custom
//! structs) plug in through [`Components`] / [`ComponentsMut`] and the slice
//! adapters; sqrt, inverse sqrt, trig and fma come from a swappable
//! [`MathProvider`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::should_implement_trait,
    clippy::use_self
)]
// `should_implement_trait`: inherent `add`/`sub`/`mul`/`div` mirror the operator impls.

use std::f32::consts::TAU;

/// Typed config service (provider choice, default zero tolerance).
pub mod config;
mod error;
/// Sqrt/trig/fma backends and the process-wide default.
pub mod provider;
/// Rounding strategies.
pub mod rounding;
/// Tuple read/write adapters.
pub mod tuple;
mod vec2;
mod vec3;
mod vec4;

pub use error::TupleError;
pub use provider::{
    default_provider, default_provider_kind, install_default_provider, FastMathProvider,
    LibmMathProvider, MathProvider, ProviderKind, StdMathProvider,
};
pub use rounding::{Rounding, RoundingMethod};
pub use tuple::{Components, ComponentsMut};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
