use crate::material::Material;
use glam::Vec3;
use std::sync::Arc;

/// The ray data type
#[derive(Clone, Copy, Debug, Default)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn point_at_parameter(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

/// Contains data to be used in the generation of a new ray as a result of an intersection.
#[derive(Clone)]
pub struct Hit {
    pub t: f32,
    pub point: Vec3,
    /// Unit normal at the hit point, always facing against the incoming ray
    pub normal: Vec3,
    /// Whether the geometric outward normal already opposed the ray
    pub front_face: bool,
    pub material: Arc<dyn Material>,
}

impl Hit {
    /// Builds a hit record from the geometric outward normal, flipping it to
    /// oppose the ray and recording which side was struck. All primitives
    /// construct their records through here so the front-face convention
    /// lives in one place.
    pub fn new(
        ray: Ray,
        t: f32,
        point: Vec3,
        outward_normal: Vec3,
        material: Arc<dyn Material>,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            t,
            point,
            normal,
            front_face,
            material,
        }
    }
}
