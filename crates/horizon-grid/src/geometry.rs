//! Basic geometry types and inline-axis normalization.
//!
//! Header cells measure themselves in client (viewport) coordinates, exactly
//! like the pointer events routed to them, so no coordinate conversion is
//! needed between a pointer position and a cell's bounding box.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
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

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Text direction of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right: the inline start edge is on the left.
    #[default]
    Ltr,
    /// Right-to-left: the inline start edge is on the right.
    Rtl,
}

impl Direction {
    /// Returns `true` for right-to-left layout.
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// Maps physical x coordinates onto a direction-agnostic inline axis.
///
/// On the inline axis positions grow from the inline start edge towards the
/// inline end edge, whatever the text direction. In right-to-left layout the
/// physical x axis is mirrored, so `start < end` holds in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineAxis {
    direction: Direction,
}

impl InlineAxis {
    /// Create an axis for the given text direction.
    #[inline]
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Inline position of a physical x coordinate.
    #[inline]
    pub fn position(&self, x: f32) -> f32 {
        match self.direction {
            Direction::Ltr => x,
            Direction::Rtl => -x,
        }
    }

    /// Inline position of the rectangle's start edge.
    #[inline]
    pub fn start(&self, rect: &Rect) -> f32 {
        match self.direction {
            Direction::Ltr => rect.left(),
            Direction::Rtl => -rect.right(),
        }
    }

    /// Inline position of the rectangle's end edge.
    #[inline]
    pub fn end(&self, rect: &Rect) -> f32 {
        match self.direction {
            Direction::Ltr => rect.right(),
            Direction::Rtl => -rect.left(),
        }
    }

    /// A strip of `thickness` along the rectangle's inline end edge.
    ///
    /// Degenerate rectangles (negative or NaN width) yield an empty strip.
    pub fn end_strip(&self, rect: &Rect, thickness: f32) -> Rect {
        let thickness = thickness.max(0.0).min(rect.width().max(0.0));
        let x = match self.direction {
            Direction::Ltr => rect.right() - thickness,
            Direction::Rtl => rect.left(),
        };
        Rect::new(x, rect.top(), thickness, rect.height())
    }
}
