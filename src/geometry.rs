use serde::{Deserialize, Serialize};

/// Screen-space point in virtual-desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// 2D offset/size pair used by configuration (fractional pixels are allowed;
/// results are rounded once when a concrete `Rect` is built).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in virtual-desktop pixel coordinates.
///
/// Matches the native window-rect convention: `right`/`bottom` are exclusive,
/// so `width = right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        self.left as f32 + self.width() as f32 * 0.5
    }

    /// Intersection area, or zero for disjoint rectangles and rectangles that
    /// touch only along an edge.
    pub fn overlap_area(&self, other: &Rect) -> i64 {
        let dx = self.right.min(other.right) as i64 - self.left.max(other.left) as i64;
        let dy = self.bottom.min(other.bottom) as i64 - self.top.max(other.top) as i64;
        if dx <= 0 || dy <= 0 {
            return 0;
        }
        dx * dy
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlap_area(other) > 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 200, 200);
        let c = Rect::new(500, 500, 600, 600);
        assert_eq!(a.overlap_area(&b), b.overlap_area(&a));
        assert_eq!(a.overlap_area(&c), c.overlap_area(&a));
        assert_eq!(a.overlap_area(&b), 50 * 50);
    }

    #[test]
    fn disjoint_rects_have_zero_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 30, 30);
        assert_eq!(a.overlap_area(&b), 0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn edge_contact_counts_as_no_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let right_edge = Rect::new(10, 0, 20, 10);
        let bottom_edge = Rect::new(0, 10, 10, 20);
        assert_eq!(a.overlap_area(&right_edge), 0);
        assert_eq!(a.overlap_area(&bottom_edge), 0);
        assert!(!a.overlaps(&right_edge));
        assert!(!a.overlaps(&bottom_edge));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Point { x: 0, y: 0 }));
        assert!(r.contains(Point { x: 9, y: 9 }));
        assert!(!r.contains(Point { x: 10, y: 0 }));
        assert!(!r.contains(Point { x: 0, y: 10 }));
    }

    #[test]
    fn width_height_from_origin() {
        let r = Rect::from_origin(300, 100, 600, 600);
        assert_eq!(r.right, 900);
        assert_eq!(r.bottom, 700);
        assert_eq!(r.width(), 600);
        assert_eq!(r.height(), 600);
        assert_eq!(r.center_x(), 600.0);
    }
}
