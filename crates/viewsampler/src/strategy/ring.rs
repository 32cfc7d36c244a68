//! Camera ring around a static model.

use viewsampler_core::{BoundingBox, ModelRotation, Result, ViewRequest};

use super::{RingGeometry, ViewSequence, VIEW_AXIS};
use crate::axes::{GridPoint, ParameterAxis};
use crate::light::LightPlacement;

/// Camera orbits a static model on a horizontal ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub ring: RingGeometry,
    pub light: LightPlacement,
    /// Image file extension without the dot.
    pub extension: &'static str,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            ring: RingGeometry {
                n_views: 12,
                distance: 0.5,
                elevation_factor: 0.3,
            },
            light: LightPlacement::default(),
            extension: "png",
        }
    }
}

impl ViewSequence for Ring {
    fn name(&self) -> &'static str {
        "ring"
    }

    fn axes(&self) -> Vec<ParameterAxis> {
        vec![ParameterAxis::indexed(VIEW_AXIS, self.ring.n_views)]
    }

    fn request(&self, bounds: &BoundingBox, point: &GridPoint) -> Result<ViewRequest> {
        let i = point.require(VIEW_AXIS)?.index;
        let camera = self.ring.camera(bounds, i)?;
        let light = self.light.pose(&camera, bounds.center())?;
        Ok(ViewRequest {
            index: point.index,
            model_rotation: ModelRotation::identity(),
            camera,
            light,
            file_name: format!("view_{i:03}.{}", self.extension),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_ring_names_and_identity_rotation() {
        let bounds = BoundingBox::new(Vec3::new(-0.1, -0.1, 0.0), Vec3::new(0.1, 0.1, 0.2));
        let ring = Ring::default();
        let requests: Vec<ViewRequest> = ring.requests(&bounds).collect::<Result<_>>().unwrap();
        assert_eq!(requests.len(), 12);
        assert_eq!(requests[0].file_name, "view_000.png");
        assert_eq!(requests[11].file_name, "view_011.png");
        assert!(requests.iter().all(|r| r.model_rotation.is_identity()));
    }

    #[test]
    fn test_ring_camera_faces_center() {
        let bounds = BoundingBox::new(Vec3::splat(-0.05), Vec3::splat(0.05));
        let ring = Ring::default();
        for request in ring.requests(&bounds) {
            let request = request.unwrap();
            let to_center = (bounds.center() - request.camera.position).normalize();
            assert!(request.camera.forward().dot(to_center) > 1.0 - 1e-5);
        }
    }

    #[test]
    fn test_point_from_other_sequence_is_rejected() {
        let bounds = BoundingBox::new(Vec3::splat(-0.05), Vec3::splat(0.05));
        let foreign = crate::axes::CartesianProduct::new(vec![ParameterAxis::indexed("yaw", 3)]);
        let point = foreign.point_at(1).unwrap();
        let err = Ring::default().request(&bounds, &point).unwrap_err();
        assert!(matches!(err, viewsampler_core::Error::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_distance_is_degenerate() {
        let bounds = BoundingBox::new(Vec3::splat(-0.05), Vec3::splat(0.05));
        let mut ring = Ring::default();
        ring.ring.distance = 0.0;
        ring.ring.elevation_factor = 0.0;
        assert!(ring.request_at(&bounds, 0).unwrap().is_err());
    }
}
