// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Math settings and the storage port they are loaded through.
//!
//! Storage is abstracted behind [`ConfigStore`]; `tuple-math-config-fs`
//! provides the filesystem adapter. Values are JSON documents.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::TupleError;
use crate::provider::{install_default_provider, ProviderKind};
use crate::{Vec2, Vec3, Vec4};

/// Key under which [`MathConfig`] is stored.
pub const MATH_CONFIG_KEY: &str = "math";

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The document parsed but holds unusable values.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Applying the config to the process failed.
    #[error("apply error: {0}")]
    Apply(#[from] TupleError),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Process-level math settings.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MathConfig {
    /// Backend installed as the process-wide default provider.
    pub provider: ProviderKind,
    /// Tolerance used by [`MathConfig::normalize`] and [`MathConfig::length`].
    pub zero_tolerance: f32,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Std,
            zero_tolerance: 1e-6,
        }
    }
}

impl MathConfig {
    /// Rejects negative or non-finite tolerances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zero_tolerance.is_finite() || self.zero_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "zero_tolerance must be finite and >= 0, got {}",
                self.zero_tolerance
            )));
        }
        Ok(())
    }

    /// Validates, then installs [`MathConfig::provider`] as the process default.
    pub fn apply(&self) -> Result<(), ConfigError> {
        self.validate()?;
        install_default_provider(self.provider)?;
        Ok(())
    }

    /// Normalizes `v`, snapping to zero within [`MathConfig::zero_tolerance`].
    pub fn normalize<V: Tolerant>(&self, v: V) -> V {
        v.normalize_within(self.zero_tolerance)
    }

    /// Length of `v`, snapped to `0` within [`MathConfig::zero_tolerance`].
    pub fn length<V: Tolerant>(&self, v: V) -> f32 {
        v.length_within(self.zero_tolerance)
    }

    /// Inverse length of `v`, `0` within [`MathConfig::zero_tolerance`].
    pub fn inv_length<V: Tolerant>(&self, v: V) -> f32 {
        v.inv_length_within(self.zero_tolerance)
    }
}

/// Vector types whose tolerance-aware operations [`MathConfig`] can drive.
pub trait Tolerant: Copy {
    /// See `normalize_tolerant` on the vector types.
    fn normalize_within(self, tolerance: f32) -> Self;
    /// See `length_tolerant` on the vector types.
    fn length_within(self, tolerance: f32) -> f32;
    /// See `inv_length_tolerant` on the vector types.
    fn inv_length_within(self, tolerance: f32) -> f32;
}

macro_rules! impl_tolerant {
    ($($ty:ty),*) => {$(
        impl Tolerant for $ty {
            fn normalize_within(self, tolerance: f32) -> Self {
                self.normalize_tolerant(tolerance)
            }
            fn length_within(self, tolerance: f32) -> f32 {
                self.length_tolerant(tolerance)
            }
            fn inv_length_within(self, tolerance: f32) -> f32 {
                self.inv_length_tolerant(tolerance)
            }
        }
    )*};
}

impl_tolerant!(Vec2, Vec3, Vec4);

/// Thin service that serializes config values and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// Loads and validates [`MathConfig`], falling back to the default when absent.
    pub fn load_math(&self) -> Result<MathConfig, ConfigError> {
        let config = match self.load::<MathConfig>(MATH_CONFIG_KEY)? {
            Some(config) => config,
            None => {
                debug!(key = MATH_CONFIG_KEY, "no math config stored; using defaults");
                MathConfig::default()
            }
        };
        if let Err(err) = config.validate() {
            warn!(key = MATH_CONFIG_KEY, error = %err, "rejected math config");
            return Err(err);
        }
        debug!(
            provider = %config.provider,
            zero_tolerance = config.zero_tolerance,
            "loaded math config"
        );
        Ok(config)
    }

    /// Validates and persists `config` under [`MATH_CONFIG_KEY`].
    pub fn save_math(&self, config: &MathConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.save(MATH_CONFIG_KEY, config)
    }
}
