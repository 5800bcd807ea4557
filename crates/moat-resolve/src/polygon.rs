//! A boundary path with a lazily computed, cached interior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use moat_core::{BoundingBox, Point, PolygonError};
use moat_grid::{GridFrame, PathBoundaryClassifier, TracedPath};

use crate::config::{Algorithm, ResolverConfig};
use crate::error::BuildError;

/// An ordered closed boundary path and its bounding box.
///
/// Construction checks the cheap input contract (length, containment,
/// extent cap). The structural checks and the interior itself are
/// computed on the first call to [`interior_points`](Self::interior_points)
/// and cached for the lifetime of the value; later calls return the
/// cached result, success or failure, without recomputing.
///
/// `PolygonData` is `Send + Sync`. Concurrent first calls still resolve
/// at most once.
///
/// # Examples
///
/// ```
/// use moat_core::Point;
/// use moat_resolve::PolygonData;
///
/// let ring: Vec<Point> = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// let polygon = PolygonData::from_path(ring).unwrap();
/// assert_eq!(polygon.interior_points().unwrap(), &[Point::new(1, 1)]);
/// ```
#[derive(Debug)]
pub struct PolygonData {
    path: Vec<Point>,
    bounding_box: BoundingBox,
    config: ResolverConfig,
    interior: OnceLock<Result<Vec<Point>, PolygonError>>,
    resolutions: AtomicUsize,
}

impl PolygonData {
    /// Wrap `path` and the box that bounds it, with the default config.
    pub fn new(path: Vec<Point>, bounding_box: BoundingBox) -> Result<Self, PolygonError> {
        Self::build(path, bounding_box, ResolverConfig::default())
    }

    /// Wrap `path`, deriving the tight bounding box from its points.
    pub fn from_path(path: Vec<Point>) -> Result<Self, PolygonError> {
        let Some(bounding_box) = BoundingBox::from_points(path.iter().copied()) else {
            return Err(PolygonError::DegenerateInput {
                len: 0,
                min: ResolverConfig::default().min_path_len,
            });
        };
        Self::new(path, bounding_box)
    }

    /// Wrap `path` under an explicit configuration.
    pub fn with_config(
        path: Vec<Point>,
        bounding_box: BoundingBox,
        config: ResolverConfig,
    ) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self::build(path, bounding_box, config)?)
    }

    fn build(
        path: Vec<Point>,
        bounding_box: BoundingBox,
        config: ResolverConfig,
    ) -> Result<Self, PolygonError> {
        if path.len() < config.min_path_len {
            return Err(PolygonError::DegenerateInput {
                len: path.len(),
                min: config.min_path_len,
            });
        }
        if let Some(&point) = path.iter().find(|p| !bounding_box.contains(**p)) {
            return Err(PolygonError::OutOfBounds {
                point,
                bounds: bounding_box,
            });
        }
        if let Some(max) = config.max_extent {
            let extent = bounding_box.max_size();
            if extent > max {
                return Err(PolygonError::TooLarge { extent, max });
            }
        }
        Ok(Self {
            path,
            bounding_box,
            config,
            interior: OnceLock::new(),
            resolutions: AtomicUsize::new(0),
        })
    }

    /// The boundary path, in the order supplied.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// The bounding box the interior is resolved in.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// The configuration this polygon was built with.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Number of resolution passes actually run. Never exceeds 1.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Acquire)
    }

    /// Cells strictly enclosed by the path, sorted by `(y, x)`.
    ///
    /// Resolved with the configured algorithm on first call, then cached.
    ///
    /// # Errors
    ///
    /// [`PolygonError::MalformedPolygon`] if the path violates a
    /// structural invariant. The error is cached like a success.
    pub fn interior_points(&self) -> Result<&[Point], PolygonError> {
        self.interior
            .get_or_init(|| {
                self.resolutions.fetch_add(1, Ordering::AcqRel);
                self.resolve_with(self.config.algorithm)
            })
            .as_deref()
            .map_err(Clone::clone)
    }

    /// Resolve with `algorithm`, bypassing the cache.
    pub fn resolve_with(&self, algorithm: Algorithm) -> Result<Vec<Point>, PolygonError> {
        let resolver = algorithm.resolver();
        log::debug!(
            "resolving {} path cells in {} with {}",
            self.path.len(),
            self.bounding_box,
            resolver.name()
        );

        let result = GridFrame::new(self.bounding_box).and_then(|frame| {
            let classifier = PathBoundaryClassifier::new(frame, &self.path)?;
            resolver.resolve(&frame, &classifier)
        });

        match &result {
            Ok(interior) => log::debug!(
                "{} resolved {} interior cells",
                resolver.name(),
                interior.len()
            ),
            Err(e) if e.is_malformed() => log::warn!("{} failed: {e}", resolver.name()),
            Err(e) => log::debug!("{} rejected input: {e}", resolver.name()),
        }
        result
    }
}

impl TryFrom<TracedPath> for PolygonData {
    type Error = PolygonError;

    fn try_from(traced: TracedPath) -> Result<Self, Self::Error> {
        Self::new(traced.path, traced.bounding_box)
    }
}
