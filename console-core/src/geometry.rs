//! Cell-unit geometry and the bounds checks shared by views and screens

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells, None on overflow
    pub fn area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

/// A rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect of `size` with its top-left corner at `origin`
    pub const fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// One past the last column, None on overflow
    pub fn right(&self) -> Option<usize> {
        self.x.checked_add(self.width)
    }

    /// One past the last row, None on overflow
    pub fn bottom(&self) -> Option<usize> {
        self.y.checked_add(self.height)
    }

    pub fn area(&self) -> Option<usize> {
        self.size().area()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && self.right().map_or(true, |r| point.x < r)
            && self.bottom().map_or(true, |b| point.y < b)
    }

    /// Whether the rect lies entirely inside a grid of `size`
    pub fn fits_within(&self, size: Size) -> bool {
        matches!(self.right(), Some(r) if r <= size.width)
            && matches!(self.bottom(), Some(b) if b <= size.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rect {}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Row-major index of (x, y) in a grid of `size`, or an index error
pub(crate) fn checked_index(x: usize, y: usize, size: Size) -> Result<usize> {
    if x >= size.width || y >= size.height {
        return Err(Error::OutOfBounds {
            x,
            y,
            width: size.width,
            height: size.height,
        });
    }
    Ok(y * size.width + x)
}

/// Ensure `rect` lies inside a grid of `size`
pub(crate) fn check_rect(rect: Rect, size: Size) -> Result<()> {
    if rect.fits_within(size) {
        Ok(())
    } else {
        Err(Error::RectOutOfBounds {
            rect,
            width: size.width,
            height: size.height,
        })
    }
}
