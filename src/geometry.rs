//! Core geometry types: Size, Bounds.
//!
//! Layout math is done in fractional pixels. Values are only rounded when they
//! cross into the native property bag.

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The smaller of the two dimensions.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A rectangle in pixels defined by its top-left corner and size.
///
/// The engine hands one `Bounds` to each layout cell; widgets derive their
/// native geometry from it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// The center point `(x, y)`.
    #[inline]
    pub fn center(self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Default native geometry for a cell: shifted right by `padding` and
    /// shrunk by `2 * padding` in both dimensions.
    ///
    /// The vertical position is left alone; the engine already starts rows
    /// below the top padding.
    #[inline]
    pub fn padded(self, padding: f32) -> Bounds {
        Bounds {
            x: self.x + padding,
            y: self.y,
            width: self.width - padding * 2.0,
            height: self.height - padding * 2.0,
        }
    }

    /// Bounds of `size` centered inside `self`.
    ///
    /// The result may extend past `self` when `size` is larger.
    #[inline]
    pub fn centered(self, size: Size) -> Bounds {
        Bounds {
            x: self.x + (self.width - size.width) / 2.0,
            y: self.y + (self.height - size.height) / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Rounded pixel coordinates `(x, y, w, h)`.
    #[inline]
    pub fn to_pixels(self) -> (i32, i32, i32, i32) {
        (
            self.x.round() as i32,
            self.y.round() as i32,
            self.width.round() as i32,
            self.height.round() as i32,
        )
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_new() {
        let s = Size::new(480.0, 320.0);
        assert_eq!(s.width, 480.0);
        assert_eq!(s.height, 320.0);
    }

    #[test]
    fn size_min_side() {
        assert_eq!(Size::new(480.0, 320.0).min_side(), 320.0);
        assert_eq!(Size::new(10.0, 40.0).min_side(), 10.0);
    }

    #[test]
    fn bounds_size() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn bounds_center() {
        let b = Bounds::new(0.0, 100.0, 200.0, 50.0);
        assert_eq!(b.center(), (100.0, 125.0));
    }

    #[test]
    fn bounds_padded() {
        let b = Bounds::new(4.0, 8.0, 100.0, 60.0).padded(4.0);
        assert_eq!(b, Bounds::new(8.0, 8.0, 92.0, 52.0));
    }

    #[test]
    fn bounds_padded_zero_is_identity() {
        let b = Bounds::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.padded(0.0), b);
    }

    #[test]
    fn bounds_centered_smaller() {
        let cell = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let img = cell.centered(Size::new(40.0, 20.0));
        assert_eq!(img, Bounds::new(30.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn bounds_centered_larger_overflows() {
        let cell = Bounds::new(10.0, 10.0, 20.0, 20.0);
        let img = cell.centered(Size::new(40.0, 40.0));
        assert_eq!(img.x, 0.0);
        assert_eq!(img.y, 0.0);
    }

    #[test]
    fn bounds_to_pixels_rounds() {
        let b = Bounds::new(1.4, 1.6, 157.33, 99.5);
        assert_eq!(b.to_pixels(), (1, 2, 157, 100));
    }

    #[test]
    fn types_are_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Size>();
        assert_copy::<Bounds>();
    }
}
