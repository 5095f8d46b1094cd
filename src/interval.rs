/// A parametric range [min, max] of valid ray t-values.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Inclusive containment check
    pub fn contains(&self, t: f32) -> bool {
        self.min <= t && t <= self.max
    }

    /// Strict containment check. Primitives accept a hit t only when the
    /// caller's interval surrounds it, so hits exactly on a bound are rejected.
    pub fn surrounds(&self, t: f32) -> bool {
        self.min < t && t < self.max
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_is_strict_on_both_bounds() {
        let i = Interval::new(0.0, 1.0);

        assert!(i.surrounds(0.5));
        assert!(!i.surrounds(0.0));
        assert!(!i.surrounds(1.0));
        assert!(!i.surrounds(-0.1));
        assert!(!i.surrounds(1.1));
    }

    #[test]
    fn contains_includes_bounds() {
        let i = Interval::new(0.0, 1.0);

        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(!i.contains(1.0 + f32::EPSILON * 2.0));
    }

    #[test]
    fn empty_surrounds_nothing() {
        assert!(!Interval::EMPTY.surrounds(0.0));
        assert!(Interval::UNIVERSE.surrounds(1.0e30));
    }
}
