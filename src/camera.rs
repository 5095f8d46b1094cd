use crate::{material::sample_unit_disc, ray::Ray, DefaultRng};
use glam::Vec3;
use std::f32::consts::PI;

#[derive(Debug)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
}

impl Camera {
    pub fn new(origin: Vec3, target: Vec3, up: Vec3, vfov: f32, aspect: f32, aperture: f32) -> Self {
        let lens_radius = aperture / 2.0;
        let focus_dist = (origin - target).length();
        let theta = vfov * PI / 180.0;
        let half_height = f32::tan(theta / 2.0);
        let half_width = aspect * half_height;
        let w = (origin - target).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);
        let lower_left_corner =
            origin - half_width * focus_dist * u - half_height * focus_dist * v - focus_dist * w;
        let horizontal = 2.0 * half_width * focus_dist * u;
        let vertical = 2.0 * half_height * focus_dist * v;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius,
        }
    }

    pub fn ray(&self, s: f32, t: f32, rng: &mut DefaultRng) -> Ray {
        let [dx, dy] = sample_unit_disc(rng);
        let offset = self.lens_radius * (self.u * dx + self.v * dy);

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;
    use rand::SeedableRng;

    #[test]
    fn center_ray_points_at_target() {
        let eye = vec3(0.0, 0.0, 2.0);
        let target = vec3(0.0, 0.0, -1.0);
        let camera = Camera::new(eye, target, vec3(0.0, 1.0, 0.0), 60.0, 1.0, 0.0);
        let mut rng = DefaultRng::seed_from_u64(1);

        // With zero aperture the center-of-image ray runs straight from the
        // eye toward the look target
        let ray = camera.ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin, eye);
        let direction = ray.direction.normalize();
        assert!((direction - vec3(0.0, 0.0, -1.0)).length() < 1e-4);
    }
}
