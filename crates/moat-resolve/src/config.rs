//! Resolver configuration, validation, and error types.
//!
//! [`ResolverConfig`] selects the interior algorithm and the size limits
//! a [`PolygonData`](crate::PolygonData) enforces at construction.
//! [`validate()`](ResolverConfig::validate) checks the limits themselves.

use std::error::Error;
use std::fmt;

use moat_core::MIN_PATH_LEN;

use crate::flood::SpanFill;
use crate::raycast::RayCast;
use crate::resolver::Resolve;

// ── Algorithm ──────────────────────────────────────────────────────

/// Which interior algorithm to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Row/column parity sweep with perpendicular fallback.
    RayCast,
    /// Span flood fill from one interior seed.
    #[default]
    SpanFill,
}

impl Algorithm {
    /// Both algorithms, in declaration order.
    pub const ALL: [Algorithm; 2] = [Algorithm::RayCast, Algorithm::SpanFill];

    /// The resolver implementing this algorithm.
    pub fn resolver(self) -> &'static dyn Resolve {
        match self {
            Self::RayCast => &RayCast,
            Self::SpanFill => &SpanFill,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resolver().name())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ResolverConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_path_len` is below the smallest loop that can enclose a cell.
    MinPathTooShort {
        /// The configured value.
        configured: usize,
    },
    /// `max_extent` is `Some(0)`; no path could ever fit.
    ZeroExtent,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinPathTooShort { configured } => {
                write!(f, "min_path_len {configured} is below minimum of {MIN_PATH_LEN}")
            }
            Self::ZeroExtent => write!(f, "max_extent must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── ResolverConfig ─────────────────────────────────────────────────

/// Configuration applied when a polygon is constructed and resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Interior algorithm. Default: [`Algorithm::SpanFill`].
    pub algorithm: Algorithm,
    /// Shortest accepted path. Default: 8. Minimum: 8.
    pub min_path_len: usize,
    /// Longest accepted bounding box side, or `None` for no cap.
    /// Default: 100.
    pub max_extent: Option<u32>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            min_path_len: MIN_PATH_LEN,
            max_extent: Some(100),
        }
    }
}

impl ResolverConfig {
    /// Default limits with the given algorithm.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Validate the limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_path_len < MIN_PATH_LEN {
            return Err(ConfigError::MinPathTooShort {
                configured: self.min_path_len,
            });
        }
        if self.max_extent == Some(0) {
            return Err(ConfigError::ZeroExtent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.algorithm, Algorithm::SpanFill);
        assert_eq!(cfg.max_extent, Some(100));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn short_min_path_rejected() {
        let cfg = ResolverConfig {
            min_path_len: 4,
            ..ResolverConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::MinPathTooShort { configured: 4 })
        );
    }

    #[test]
    fn zero_extent_rejected() {
        let cfg = ResolverConfig {
            max_extent: Some(0),
            ..ResolverConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroExtent));
        let uncapped = ResolverConfig {
            max_extent: None,
            ..cfg
        };
        assert!(uncapped.validate().is_ok());
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::RayCast.to_string(), "ray-cast");
        assert_eq!(Algorithm::SpanFill.to_string(), "span-fill");
    }
}
