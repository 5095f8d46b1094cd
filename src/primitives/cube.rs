use crate::{
    interval::Interval,
    material::Material,
    primitives::Intersect,
    ray::{Hit, Ray},
};
use glam::{vec3, Vec3};
use std::sync::Arc;

/// Direction components below this magnitude are treated as parallel to the
/// matching pair of slab planes.
const PARALLEL_EPS: f32 = 1e-8;

/// Rotate `v` about the +Y axis by `angle` radians.
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (sin_theta, cos_theta) = angle.sin_cos();

    vec3(
        cos_theta * v.x() + sin_theta * v.z(),
        v.y(),
        -sin_theta * v.x() + cos_theta * v.z(),
    )
}

/// A cube, optionally rotated about the vertical axis through its center.
///
/// Intersection uses the slab method in the cube's local frame: the ray is
/// translated and un-rotated into a frame where the cube is axis-aligned and
/// centered at the origin, the three per-axis plane ranges are intersected,
/// and the hit point and normal are rotated back out. The face normal is
/// chosen by minimum boundary distance (the axis whose hit coordinate lies
/// nearest a face plane), with ties broken in x, y, z order. A ray starting
/// inside the cube reports the exit face rather than missing.
#[derive(Clone)]
pub struct Cube {
    center: Vec3,
    half: f32,
    rotation: f32,
    material: Arc<dyn Material>,
}

impl Cube {
    /// An axis-aligned cube.
    ///
    /// # Panics
    /// Panics if `side_length` is not strictly positive.
    pub fn new(center: Vec3, side_length: f32, material: Arc<dyn Material>) -> Self {
        Self::rotated(center, side_length, 0.0, material)
    }

    /// A cube rotated `rotation_degrees` about the vertical axis through its
    /// center.
    ///
    /// # Panics
    /// Panics if `side_length` is not strictly positive.
    pub fn rotated(
        center: Vec3,
        side_length: f32,
        rotation_degrees: f32,
        material: Arc<dyn Material>,
    ) -> Self {
        assert!(side_length > 0.0, "cube side length must be positive");

        Self {
            center,
            half: side_length / 2.0,
            rotation: rotation_degrees.to_radians(),
            material,
        }
    }
}

impl Intersect for Cube {
    fn intersection(&self, ray: Ray, t: Interval) -> Option<Hit> {
        // Local frame: cube centered at the origin, axes unrotated
        let origin = rotate_y(ray.origin - self.center, -self.rotation);
        let direction = rotate_y(ray.direction, -self.rotation);

        let o = [origin.x(), origin.y(), origin.z()];
        let d = [direction.x(), direction.y(), direction.z()];

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            if d[axis].abs() < PARALLEL_EPS {
                // Parallel to this slab pair: the axis either never constrains
                // the ray or rules out a hit entirely
                if o[axis] < -self.half || o[axis] > self.half {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d[axis];
            let mut t0 = (-self.half - o[axis]) * inv;
            let mut t1 = (self.half - o[axis]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        // A ray starting inside the cube reports the exit face
        let t_hit = if t_near >= 0.0 { t_near } else { t_far };
        if !t.surrounds(t_hit) {
            return None;
        }

        let point_local = origin + t_hit * direction;
        let normal_local = face_normal(point_local, self.half);

        let point = rotate_y(point_local, self.rotation) + self.center;
        let normal = rotate_y(normal_local, self.rotation);

        Some(Hit::new(ray, t_hit, point, normal, self.material.clone()))
    }
}

/// Outward unit normal for a local-frame point on the cube surface: the axis
/// whose coordinate lies closest to its face plane, signed by which side of
/// the center the point falls on. Ties resolve to x, then y, then z.
fn face_normal(p: Vec3, half: f32) -> Vec3 {
    let dx = half - p.x().abs();
    let dy = half - p.y().abs();
    let dz = half - p.z().abs();

    if dx <= dy && dx <= dz {
        vec3(if p.x() > 0.0 { 1.0 } else { -1.0 }, 0.0, 0.0)
    } else if dy <= dz {
        vec3(0.0, if p.y() > 0.0 { 1.0 } else { -1.0 }, 0.0)
    } else {
        vec3(0.0, 0.0, if p.z() > 0.0 { 1.0 } else { -1.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn unit_cube() -> Cube {
        Cube::new(
            Vec3::zero(),
            1.0,
            Arc::new(Lambertian::new(vec3(0.5, 0.5, 0.5))),
        )
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < 1e-4,
            "expected {:?} to be close to {:?}",
            a,
            b
        );
    }

    #[test]
    fn axis_ray_hits_near_face() {
        let cube = unit_cube();
        let ray = Ray::new(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));

        let hit = cube
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();
        assert_eq!(hit.t, 4.5);
        assert_eq!(hit.point, vec3(0.0, 0.0, 0.5));
        assert_eq!(hit.normal, vec3(0.0, 0.0, 1.0));
        assert!(hit.front_face);
    }

    #[test]
    fn interval_short_of_the_face_rejects() {
        let cube = unit_cube();
        let ray = Ray::new(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));

        assert!(cube.intersection(ray, Interval::new(0.001, 4.0)).is_none());
        // surrounds is strict, so a hit exactly on the bound is out too
        assert!(cube.intersection(ray, Interval::new(0.001, 4.5)).is_none());
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        let cube = unit_cube();
        // Zero x and y components, origin well outside the x slab
        let ray = Ray::new(vec3(5.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));

        assert!(cube
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .is_none());
    }

    #[test]
    fn ray_from_inside_exits_through_far_face() {
        let cube = unit_cube();
        let ray = Ray::new(vec3(0.1, 0.0, 0.0), vec3(0.0, 0.0, -1.0));

        let hit = cube
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.point, vec3(0.1, 0.0, -0.5));
        // Exit face: the geometric normal pointed with the ray, so the record
        // flips it and flags a back-face hit
        assert!(!hit.front_face);
        assert_eq!(hit.normal, vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn diagonal_miss_reports_none() {
        let cube = unit_cube();
        // Leaves the x slab long before reaching the z slab
        let ray = Ray::new(vec3(0.0, 0.0, 5.0), vec3(3.0, 0.0, -1.0));

        assert!(cube
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .is_none());
    }

    #[test]
    fn rotation_equivariance() {
        let center = vec3(0.3, -0.2, -1.0);
        let material: Arc<dyn Material> = Arc::new(Lambertian::new(vec3(0.5, 0.5, 0.5)));
        let ray = Ray::new(vec3(0.3, -0.2, 4.0), vec3(0.0, 0.0, -1.0));

        let reference = Cube::new(center, 0.8, material.clone())
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();

        for &degrees in &[0.0f32, 45.0, 90.0, -60.0] {
            let theta = degrees.to_radians();
            let rotated = Cube::rotated(center, 0.8, degrees, material.clone());
            // Rotate the ray about the cube center by the same angle
            let ray = Ray::new(
                center + rotate_y(ray.origin - center, theta),
                rotate_y(ray.direction, theta),
            );

            let hit = rotated
                .intersection(ray, Interval::new(0.001, f32::INFINITY))
                .unwrap();
            assert!((hit.t - reference.t).abs() < 1e-4, "t mismatch at {}deg", degrees);
            assert_close(hit.point, center + rotate_y(reference.point - center, theta));
            assert_close(hit.normal, rotate_y(reference.normal, theta));
        }
    }

    #[test]
    #[should_panic(expected = "side length must be positive")]
    fn zero_side_length_is_rejected() {
        Cube::new(
            Vec3::zero(),
            0.0,
            Arc::new(Lambertian::new(vec3(0.5, 0.5, 0.5))),
        );
    }

    #[test]
    fn grazing_edge_picks_a_deterministic_face() {
        let cube = unit_cube();
        // Strikes the exact edge shared by the +x and +z faces; the x axis
        // wins the tie. The chosen normal is perpendicular to the ray, so it
        // does not oppose it and the record flags a back face and flips it.
        let ray = Ray::new(vec3(0.5, 0.0, 5.0), vec3(0.0, 0.0, -1.0));

        let hit = cube
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();
        assert!(!hit.front_face);
        assert_eq!(hit.normal, vec3(-1.0, 0.0, 0.0));
    }
}
