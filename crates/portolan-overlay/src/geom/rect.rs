use super::Vec2;

/// Axis-aligned rectangle in screen pixels (top-left origin).
///
/// Sizes are non-negative: every rect here comes from an anchor-aligned
/// origin plus a measured size, or from a center and a slop radius.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rect of `2 * half_size` centered on `center`. Touch areas are built
    /// this way from a touch point and a slop radius.
    #[inline]
    pub fn from_center_half_size(center: Vec2, half_size: Vec2) -> Self {
        Self {
            origin: center - half_size,
            size: half_size * 2.0,
        }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Bottom-left corner (y grows downward).
    #[inline]
    pub fn left_bottom(self) -> Vec2 {
        Vec2::new(self.origin.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn right_top(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = (self.origin.x + self.size.x).min(other.origin.x + other.size.x);
        let y1 = (self.origin.y + self.size.y).min(other.origin.y + other.size.y);

        (x0 < x1 && y0 < y1).then(|| Rect::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Whether the rects overlap with positive area. Hit tests compare a
    /// touch area against an element's bounds with this.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        self.intersect(other).is_some()
    }
}
