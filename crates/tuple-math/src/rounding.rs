// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rounding strategies applied componentwise by `round_with`.

use serde::{Deserialize, Serialize};

/// Maps a single component to its rounded value.
pub trait RoundingMethod {
    /// Rounds `value`.
    fn round(&self, value: f32) -> f32;
}

/// Built-in rounding modes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
    /// To nearest, ties away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    HalfAwayFromZero,
    /// To nearest, ties to even (`2.5 -> 2`, `3.5 -> 4`).
    HalfEven,
    /// Toward zero.
    Trunc,
}

impl RoundingMethod for Rounding {
    fn round(&self, value: f32) -> f32 {
        match self {
            Self::Ceil => value.ceil(),
            Self::Floor => value.floor(),
            Self::HalfAwayFromZero => value.round(),
            Self::HalfEven => value.round_ties_even(),
            Self::Trunc => value.trunc(),
        }
    }
}

impl<F> RoundingMethod for F
where
    F: Fn(f32) -> f32,
{
    fn round(&self, value: f32) -> f32 {
        self(value)
    }
}
