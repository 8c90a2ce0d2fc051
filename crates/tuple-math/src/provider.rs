// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Pluggable elementary functions used by the vector operations.
//!
//! Every length, normalize, distance, rotation and fused multiply-add in this
//! crate routes through a [`MathProvider`]. Callers pick a backend per call
//! (the `*_with` methods) or install a process-wide default once at startup.
//!
//! Contract:
//! - Implementations are stateless and `Send + Sync`.
//! - For finite inputs the functions match their mathematical definitions up
//!   to the backend's documented precision.
//! - NaN and infinities propagate the way IEEE-754 arithmetic propagates them;
//!   no backend intercepts or canonicalizes special values.

use core::fmt;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::TupleError;

/// Elementary algebraic and transcendental functions over `f32`.
pub trait MathProvider: Send + Sync {
    /// Square root of `value`.
    fn sqrt(&self, value: f32) -> f32;

    /// Reciprocal square root `1 / sqrt(value)`.
    fn inv_sqrt(&self, value: f32) -> f32;

    /// Sine of `angle` (radians).
    fn sin(&self, angle: f32) -> f32;

    /// Cosine of `angle` (radians).
    fn cos(&self, angle: f32) -> f32;

    /// `a * b + c`, fused where the backend supports it.
    fn fma(&self, a: f32, b: f32, c: f32) -> f32;

    /// Returns `(sin(angle), cos(angle))`.
    ///
    /// Default implementation computes both separately; backends may override
    /// to share range reduction.
    fn sin_cos(&self, angle: f32) -> (f32, f32) {
        (self.sin(angle), self.cos(angle))
    }
}

/// Exact backend built on the `f32` inherent methods. This is the default.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct StdMathProvider;

impl MathProvider for StdMathProvider {
    fn sqrt(&self, value: f32) -> f32 {
        value.sqrt()
    }

    fn inv_sqrt(&self, value: f32) -> f32 {
        1.0 / value.sqrt()
    }

    fn sin(&self, angle: f32) -> f32 {
        angle.sin()
    }

    fn cos(&self, angle: f32) -> f32 {
        angle.cos()
    }

    fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
        a.mul_add(b, c)
    }

    fn sin_cos(&self, angle: f32) -> (f32, f32) {
        angle.sin_cos()
    }
}

/// Speed-over-precision backend.
///
/// `inv_sqrt` uses the classic bit-level estimate refined with a single
/// Newton-Raphson step; relative error stays below `2e-3` for normal positive
/// inputs. Zero, subnormal, negative and non-finite inputs fall back to the
/// exact path so special values behave like [`StdMathProvider`].
///
/// `fma` is the unfused `a * b + c`, which is cheaper on targets without a
/// hardware FMA instruction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FastMathProvider;

impl FastMathProvider {
    const MAGIC: u32 = 0x5f37_59df;

    #[inline]
    fn estimate_inv_sqrt(value: f32) -> f32 {
        let y = f32::from_bits(Self::MAGIC.wrapping_sub(value.to_bits() >> 1));
        y * (1.5 - 0.5 * value * y * y)
    }
}

impl MathProvider for FastMathProvider {
    fn sqrt(&self, value: f32) -> f32 {
        if value.is_sign_negative() || !value.is_normal() {
            return value.sqrt();
        }
        value * Self::estimate_inv_sqrt(value)
    }

    fn inv_sqrt(&self, value: f32) -> f32 {
        if value.is_sign_negative() || !value.is_normal() {
            return 1.0 / value.sqrt();
        }
        Self::estimate_inv_sqrt(value)
    }

    fn sin(&self, angle: f32) -> f32 {
        angle.sin()
    }

    fn cos(&self, angle: f32) -> f32 {
        angle.cos()
    }

    fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
        a * b + c
    }

    fn sin_cos(&self, angle: f32) -> (f32, f32) {
        angle.sin_cos()
    }
}

/// Platform-stable backend built on the pure-Rust `libm` routines.
///
/// Results are bit-identical across targets, unlike the `f32` inherent
/// methods which may lower to platform intrinsics.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LibmMathProvider;

impl MathProvider for LibmMathProvider {
    fn sqrt(&self, value: f32) -> f32 {
        libm::sqrtf(value)
    }

    fn inv_sqrt(&self, value: f32) -> f32 {
        1.0 / libm::sqrtf(value)
    }

    fn sin(&self, angle: f32) -> f32 {
        libm::sinf(angle)
    }

    fn cos(&self, angle: f32) -> f32 {
        libm::cosf(angle)
    }

    fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
        libm::fmaf(a, b, c)
    }

    fn sin_cos(&self, angle: f32) -> (f32, f32) {
        libm::sincosf(angle)
    }
}

static STD: StdMathProvider = StdMathProvider;
static FAST: FastMathProvider = FastMathProvider;
static LIBM: LibmMathProvider = LibmMathProvider;

/// Names a built-in provider; used by config and the process-wide default.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// [`StdMathProvider`].
    #[default]
    Std,
    /// [`FastMathProvider`].
    Fast,
    /// [`LibmMathProvider`].
    Libm,
}

impl ProviderKind {
    /// Returns the shared instance for this kind.
    pub fn provider(self) -> &'static dyn MathProvider {
        match self {
            Self::Std => &STD,
            Self::Fast => &FAST,
            Self::Libm => &LIBM,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Std => "std",
            Self::Fast => "fast",
            Self::Libm => "libm",
        };
        f.write_str(name)
    }
}

static DEFAULT_KIND: OnceCell<ProviderKind> = OnceCell::new();

/// Returns the kind of the process-wide default provider.
///
/// Falls back to [`ProviderKind::Std`] until [`install_default_provider`]
/// succeeds.
pub fn default_provider_kind() -> ProviderKind {
    DEFAULT_KIND.get().copied().unwrap_or_default()
}

/// Returns the process-wide default provider.
pub fn default_provider() -> &'static dyn MathProvider {
    default_provider_kind().provider()
}

/// Installs `kind` as the process-wide default provider.
///
/// The default may be set once. Re-installing the same kind is a no-op;
/// installing a different kind afterwards fails with
/// [`TupleError::ProviderAlreadyInstalled`].
pub fn install_default_provider(kind: ProviderKind) -> Result<(), TupleError> {
    match DEFAULT_KIND.try_insert(kind) {
        Ok(_) => {
            info!(provider = %kind, "installed default math provider");
            Ok(())
        }
        Err((current, _)) if *current == kind => Ok(()),
        Err((current, _)) => {
            warn!(
                requested = %kind,
                current = %current,
                "default math provider already installed"
            );
            Err(TupleError::ProviderAlreadyInstalled { current: *current })
        }
    }
}
