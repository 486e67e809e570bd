#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle on the character canvas.
///
/// Uses canvas coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: usize,
    /// Top edge (inclusive).
    pub y: usize,
    /// Width in canvas cells.
    pub width: usize,
    /// Height in canvas cells.
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle spanning the half-open ranges `[x0, x1)` and `[y0, y1)`.
    ///
    /// Inverted ranges produce an empty rectangle.
    #[inline]
    pub const fn from_edges(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Create a new rectangle inside the current one, inset by `margin`.
    pub fn inner(&self, margin: Sides<usize>) -> Rect {
        let x = self.x.saturating_add(margin.left);
        let y = self.y.saturating_add(margin.top);
        let width = self
            .width
            .saturating_sub(margin.left)
            .saturating_sub(margin.right);
        let height = self
            .height
            .saturating_sub(margin.top)
            .saturating_sub(margin.bottom);

        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// One of the four sides of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// All sides, in `left, top, right, bottom` order.
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];
}

/// A value per side, used for margins, border requests and junction arms.
///
/// Field order follows `left, top, right, bottom` everywhere in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T: Copy> Sides<T> {
    /// Create new sides with specific values.
    pub const fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create new sides with equal values.
    pub const fn all(val: T) -> Self {
        Self::new(val, val, val, val)
    }

    /// Create sides from a horizontal (left/right) and vertical (top/bottom) value.
    pub const fn symmetric(horizontal: T, vertical: T) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Value on the given side.
    #[inline]
    pub const fn get(&self, side: Side) -> T {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    /// Replace the value on the given side.
    #[inline]
    pub fn set(&mut self, side: Side, val: T) {
        match side {
            Side::Left => self.left = val,
            Side::Top => self.top = val,
            Side::Right => self.right = val,
            Side::Bottom => self.bottom = val,
        }
    }

    /// Apply `f` to every side.
    pub fn map<U: Copy>(self, mut f: impl FnMut(T) -> U) -> Sides<U> {
        Sides::new(f(self.left), f(self.top), f(self.right), f(self.bottom))
    }
}

impl<T: Copy> Sides<Option<T>> {
    /// Fill unset sides from `defaults`.
    pub fn resolve(self, defaults: Sides<T>) -> Sides<T> {
        Sides::new(
            self.left.unwrap_or(defaults.left),
            self.top.unwrap_or(defaults.top),
            self.right.unwrap_or(defaults.right),
            self.bottom.unwrap_or(defaults.bottom),
        )
    }
}

impl Sides<usize> {
    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }
}

impl<T: Copy> From<T> for Sides<T> {
    fn from(val: T) -> Self {
        Self::all(val)
    }
}

impl<T: Copy> From<(T, T, T, T)> for Sides<T> {
    fn from((left, top, right, bottom): (T, T, T, T)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

bitflags::bitflags! {
    /// Set of rectangle edges a sub-cell lies on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const LEFT   = 0b0001;
        const TOP    = 0b0010;
        const RIGHT  = 0b0100;
        const BOTTOM = 0b1000;
    }
}

impl Edges {
    /// Flag for a single side.
    #[must_use]
    pub const fn of(side: Side) -> Edges {
        match side {
            Side::Left => Edges::LEFT,
            Side::Top => Edges::TOP,
            Side::Right => Edges::RIGHT,
            Side::Bottom => Edges::BOTTOM,
        }
    }

    /// Whether the set includes `side`.
    #[inline]
    pub const fn has(self, side: Side) -> bool {
        self.contains(Edges::of(side))
    }
}
