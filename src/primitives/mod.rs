//! This module is full of primitives that all impl Intersect

mod cube;
mod sphere;

pub use cube::*;
pub use sphere::*;

use crate::{
    interval::Interval,
    ray::{Hit, Ray},
};

/// Computes whether a ray intersects a primitive
pub trait Intersect: Send + Sync {
    /// Computes the nearest intersection between the ray and the primitive
    /// with a hit parameter surrounded by `t`. Pure and stateless, so safe to
    /// call from any number of render threads at once.
    fn intersection(&self, ray: Ray, t: Interval) -> Option<Hit>;
}
