//! Axis-aligned collision boxes

/// An axis-aligned rectangle with cached far edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            max_x: x + width,
            max_y: y + height,
        }
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x && self.max_x > other.x && self.y < other.max_y && self.max_y > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_caches_far_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.max_x, 40.0);
        assert_eq!(r.max_y, 60.0);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, -50.0, 5.0, 5.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_containment_counts_as_intersection() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 1.0, 1.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_zero_size_never_intersects_itself() {
        let r = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!r.intersects(&r));
    }
}
