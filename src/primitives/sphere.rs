use crate::{
    interval::Interval,
    material::Material,
    primitives::Intersect,
    ray::{Hit, Ray},
};
use glam::Vec3;
use std::sync::Arc;

#[derive(Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        assert!(radius > 0.0, "sphere radius must be positive");

        Self {
            center,
            radius,
            material,
        }
    }
}

impl Intersect for Sphere {
    fn intersection(&self, ray: Ray, t: Interval) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - a * c;

        if discriminant > 0.0 {
            let sqrt_d = discriminant.sqrt();
            let t_1 = (-b - sqrt_d) / a;
            let t_2 = (-b + sqrt_d) / a;

            for &t_hit in &[t_1, t_2] {
                if t.surrounds(t_hit) {
                    let point = ray.point_at_parameter(t_hit);
                    let outward_normal = (point - self.center) / self.radius;

                    return Some(Hit::new(ray, t_hit, point, outward_normal, self.material.clone()));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use glam::vec3;

    fn unit_sphere() -> Sphere {
        Sphere::new(
            vec3(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(vec3(0.5, 0.5, 0.5))),
        )
    }

    #[test]
    fn head_on_ray_hits_near_surface() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::zero(), vec3(0.0, 0.0, -1.0));

        let hit = sphere
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();
        assert!((hit.t - 0.5).abs() < 1e-6);
        assert!((hit.normal - vec3(0.0, 0.0, 1.0)).length() < 1e-6);
        assert!(hit.front_face);
    }

    #[test]
    fn offset_ray_misses() {
        let sphere = unit_sphere();
        let ray = Ray::new(vec3(2.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));

        assert!(sphere
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .is_none());
    }

    #[test]
    fn ray_from_inside_hits_back_of_shell() {
        let sphere = unit_sphere();
        let ray = Ray::new(vec3(0.0, 0.0, -1.0), vec3(0.0, 0.0, -1.0));

        let hit = sphere
            .intersection(ray, Interval::new(0.001, f32::INFINITY))
            .unwrap();
        assert!((hit.t - 0.5).abs() < 1e-6);
        assert!(!hit.front_face);
    }
}
