use crate::{
    interval::Interval,
    primitives::Intersect,
    ray::{Hit, Ray},
};

/// An ordered list of primitives queried as a single object.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Intersect>>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn add(&mut self, object: impl Intersect + 'static) {
        self.objects.push(Box::new(object));
    }
}

impl Intersect for Scene {
    /// Returns the nearest hit among all primitives by shrinking the valid
    /// interval's far bound to each hit found so far.
    fn intersection(&self, ray: Ray, t: Interval) -> Option<Hit> {
        let mut closest = t.max;
        let mut nearest = None;

        for object in &self.objects {
            if let Some(hit) = object.intersection(ray, Interval::new(t.min, closest)) {
                closest = hit.t;
                nearest = Some(hit);
            }
        }

        nearest
    }
}
