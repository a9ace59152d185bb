use crate::foundation::error::{SwapError, SwapResult};

pub use kurbo::{BezPath, Point, Rect};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas that fits the CPU rasterizer (`u16` per side).
    pub fn new(width: u32, height: u32) -> SwapResult<Self> {
        if width == 0 || height == 0 {
            return Err(SwapError::configuration("canvas width/height must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(SwapError::configuration(format!(
                "canvas {width}x{height} exceeds the rasterizer limit of {} px per side",
                u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Straight (non-premultiplied) opaque RGB8 color. Serializes as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    /// Pure white.
    pub const WHITE: Self = Self(255, 255, 255);
    /// Pure black.
    pub const BLACK: Self = Self(0, 0, 0);

    /// Return the channels as an array.
    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// Integer pixel center of one symbol slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Column of the center pixel.
    pub x: i32,
    /// Row of the center pixel.
    pub y: i32,
}

impl Position {
    /// Create a position from pixel coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Continuous-space center of the pixel at `(x, y)`.
    ///
    /// Pixel `(x, y)` covers `[x, x+1) x [y, y+1)`, so geometry centered here stays symmetric
    /// about the pixel grid.
    pub fn center_point(self) -> Point {
        Point::new(f64::from(self.x) + 0.5, f64::from(self.y) + 0.5)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
