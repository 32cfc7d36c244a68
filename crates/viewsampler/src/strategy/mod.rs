//! View-sequence strategies.
//!
//! A strategy is a [`ViewSequence`]: a set of named parameter axes plus a
//! pure function from one grid point to one [`ViewRequest`]. The three
//! strategies are:
//! - [`Ring`]: camera orbits a static model
//! - [`RingPitchGrid`]: the ring repeated for each model pitch
//! - [`FullGrid`]: fixed camera, model swept over roll x pitch x yaw

pub mod full_grid;
pub mod ring;
pub mod ring_pitch;

pub use full_grid::FullGrid;
pub use ring::Ring;
pub use ring_pitch::RingPitchGrid;

use std::f32::consts::TAU;

use glam::Vec3;
use viewsampler_core::{BoundingBox, Pose, Result, ViewRequest};

use crate::axes::{CartesianProduct, GridPoint, ParameterAxis};

/// Ring position axis.
pub const VIEW_AXIS: &str = "view";
/// Model pitch axis, in degrees.
pub const PITCH_AXIS: &str = "pitch";
/// Model roll axis, in degrees.
pub const ROLL_AXIS: &str = "roll";
/// Model yaw axis, in degrees.
pub const YAW_AXIS: &str = "yaw";

/// A deterministic, index-addressable sequence of view requests.
pub trait ViewSequence {
    /// Short strategy name for logs.
    fn name(&self) -> &'static str;

    /// Parameter axes, outermost first.
    fn axes(&self) -> Vec<ParameterAxis>;

    /// Computes the request for one grid point.
    ///
    /// # Errors
    /// Returns [`viewsampler_core::Error::DegenerateDirection`] if a camera or
    /// light would sit on the model center, and
    /// [`viewsampler_core::Error::InvalidConfig`] if the point lacks one of
    /// this sequence's axes.
    fn request(&self, bounds: &BoundingBox, point: &GridPoint) -> Result<ViewRequest>;

    /// The product of [`axes`](ViewSequence::axes).
    fn product(&self) -> CartesianProduct {
        CartesianProduct::new(self.axes())
    }

    /// Number of requests in the sequence.
    fn len(&self) -> usize {
        self.product().len()
    }

    /// Returns true if the sequence yields nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Computes the request at a flat index, or `None` past the end.
    fn request_at(&self, bounds: &BoundingBox, index: usize) -> Option<Result<ViewRequest>> {
        self.product()
            .point_at(index)
            .map(|point| self.request(bounds, &point))
    }

    /// Lazily yields every request in enumeration order.
    fn requests<'a>(&'a self, bounds: &BoundingBox) -> ViewRequests<'a>
    where
        Self: Sized,
    {
        ViewRequests::new(self, *bounds)
    }
}

/// Iterator over the requests of a [`ViewSequence`].
///
/// Each item is computed on demand; nothing is retained once yielded.
pub struct ViewRequests<'a> {
    sequence: &'a dyn ViewSequence,
    bounds: BoundingBox,
    product: CartesianProduct,
    next: usize,
}

impl<'a> ViewRequests<'a> {
    /// Creates the iterator for any sequence, including trait objects.
    pub fn new(sequence: &'a dyn ViewSequence, bounds: BoundingBox) -> Self {
        Self {
            product: sequence.product(),
            sequence,
            bounds,
            next: 0,
        }
    }
}

impl Iterator for ViewRequests<'_> {
    type Item = Result<ViewRequest>;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.product.point_at(self.next)?;
        self.next += 1;
        Some(self.sequence.request(&self.bounds, &point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.product.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ViewRequests<'_> {}

/// Camera orbit shared by the ring strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Number of evenly spaced views around the model.
    pub n_views: usize,
    /// Horizontal distance from the model center.
    pub distance: f32,
    /// Camera height above the center, as a fraction of the largest extent.
    pub elevation_factor: f32,
}

impl RingGeometry {
    /// Azimuth of view `i` in radians: `i * 2pi / n_views`.
    #[allow(clippy::cast_precision_loss)]
    pub fn angle(&self, i: usize) -> f32 {
        i as f32 * TAU / self.n_views as f32
    }

    /// Camera position for view `i`.
    pub fn position(&self, bounds: &BoundingBox, i: usize) -> Vec3 {
        let center = bounds.center();
        let angle = self.angle(i);
        Vec3::new(
            center.x + self.distance * angle.cos(),
            center.y + self.distance * angle.sin(),
            center.z + bounds.max_extent() * self.elevation_factor,
        )
    }

    /// Camera pose for view `i`, aimed at the model center.
    pub fn camera(&self, bounds: &BoundingBox, i: usize) -> Result<Pose> {
        Pose::look_at(self.position(bounds, i), bounds.center())
    }
}

/// Which strategy a run uses.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Camera ring, static model.
    Ring(Ring),
    /// Camera ring for each model pitch.
    RingPitchGrid(RingPitchGrid),
    /// Fixed camera, full model rotation grid.
    FullGrid(FullGrid),
}

impl Strategy {
    fn inner(&self) -> &dyn ViewSequence {
        match self {
            Strategy::Ring(s) => s,
            Strategy::RingPitchGrid(s) => s,
            Strategy::FullGrid(s) => s,
        }
    }
}

impl ViewSequence for Strategy {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn axes(&self) -> Vec<ParameterAxis> {
        self.inner().axes()
    }

    fn request(&self, bounds: &BoundingBox, point: &GridPoint) -> Result<ViewRequest> {
        self.inner().request(bounds, point)
    }
}
