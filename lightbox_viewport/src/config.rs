// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use lightbox_gesture::DEFAULT_DEBOUNCE_MS;

/// Lowest committed scale by default.
pub const DEFAULT_MIN_SCALE: f64 = 1.0;

/// Highest committed scale by default.
///
/// Two bounds are in circulation for this viewer, `5.0` and `15.0`. The
/// tighter one is the default for the committed scale and the looser one is
/// the default per-sample guard ([`DEFAULT_SAMPLE_GUARD_MAX`]); both are
/// configurable.
pub const DEFAULT_MAX_SCALE: f64 = 5.0;

/// Lowest raw per-sample scale accepted by default.
pub const DEFAULT_SAMPLE_GUARD_MIN: f64 = 1.0;

/// Highest raw per-sample scale accepted by default.
pub const DEFAULT_SAMPLE_GUARD_MAX: f64 = 15.0;

/// Scale at or above which a double tap may reset the view by default.
pub const DEFAULT_RESET_MIN_SCALE: f64 = 2.0;

/// Tuning for a [`ViewportEngine`](crate::ViewportEngine).
///
/// Build one with [`ViewportConfig::default`] and the `with_*` setters. The
/// engine validates it on construction.
///
/// ```
/// use lightbox_viewport::ViewportConfig;
///
/// let config = ViewportConfig::default()
///     .with_scale_limits(1.0, 15.0)
///     .with_debounce_ms(250);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewportConfig {
    /// Lower bound the committed scale is clamped to.
    pub min_scale: f64,
    /// Upper bound the committed scale is clamped to.
    pub max_scale: f64,
    /// A sample whose raw scale (before clamping) falls below this is dropped.
    pub sample_guard_min: f64,
    /// A sample whose raw scale (before clamping) exceeds this is dropped.
    ///
    /// This filters single-sample jumps from sensor noise.
    pub sample_guard_max: f64,
    /// Unrotated views must be zoomed at least this far for a double tap to
    /// reset them.
    pub reset_min_scale: f64,
    /// Quiet window after the last transform change before a double tap is
    /// honored, in host time units.
    pub debounce_ms: u64,
}

impl ViewportConfig {
    /// Sets the committed scale range.
    #[must_use]
    pub fn with_scale_limits(mut self, min: f64, max: f64) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    /// Sets the per-sample raw scale guard.
    #[must_use]
    pub fn with_sample_guard(mut self, min: f64, max: f64) -> Self {
        self.sample_guard_min = min;
        self.sample_guard_max = max;
        self
    }

    /// Sets the minimum scale for a double-tap reset.
    #[must_use]
    pub fn with_reset_min_scale(mut self, scale: f64) -> Self {
        self.reset_min_scale = scale;
        self
    }

    /// Sets the debounce window.
    #[must_use]
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("sample_guard_min", self.sample_guard_min),
            ("sample_guard_max", self.sample_guard_max),
            ("reset_min_scale", self.reset_min_scale),
        ];
        if let Some((name, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(name));
        }
        if self.min_scale < 1.0 || self.min_scale > self.max_scale {
            return Err(ConfigError::ScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if self.sample_guard_min <= 0.0 || self.sample_guard_min > self.sample_guard_max {
            return Err(ConfigError::GuardRange {
                min: self.sample_guard_min,
                max: self.sample_guard_max,
            });
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        Ok(())
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            sample_guard_min: DEFAULT_SAMPLE_GUARD_MIN,
            sample_guard_max: DEFAULT_SAMPLE_GUARD_MAX,
            reset_min_scale: DEFAULT_RESET_MIN_SCALE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Error returned when a [`ViewportConfig`] is unusable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The named field is NaN or infinite.
    NonFinite(&'static str),
    /// The committed scale range is empty or starts below `1.0`.
    ScaleRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The per-sample guard range is empty or not strictly positive.
    GuardRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The debounce window is zero.
    ZeroDebounce,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(field) => write!(f, "`{field}` must be finite"),
            Self::ScaleRange { min, max } => {
                write!(f, "scale range [{min}, {max}] must satisfy 1 <= min <= max")
            }
            Self::GuardRange { min, max } => {
                write!(f, "sample guard [{min}, {max}] must satisfy 0 < min <= max")
            }
            Self::ZeroDebounce => f.write_str("debounce window must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}
