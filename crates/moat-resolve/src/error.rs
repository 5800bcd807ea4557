//! Construction errors for [`PolygonData`](crate::PolygonData).

use std::error::Error;
use std::fmt;

use moat_core::PolygonError;

use crate::config::ConfigError;

/// Why [`PolygonData::with_config`](crate::PolygonData::with_config) failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The supplied configuration is invalid.
    Config(ConfigError),
    /// The path or bounding box was rejected.
    Polygon(PolygonError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Polygon(e) => write!(f, "polygon: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Polygon(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BuildError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PolygonError> for BuildError {
    fn from(e: PolygonError) -> Self {
        Self::Polygon(e)
    }
}
