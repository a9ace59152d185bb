use std::collections::HashSet;
use std::fmt;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{SwapError, SwapResult};

/// Geometric figure a symbol is drawn as.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Bounding-box ellipse.
    Circle,
    /// Axis-aligned square.
    Square,
    /// Isosceles triangle, apex up.
    Triangle,
    /// Five-point star.
    Star,
    /// Square rotated by 45 degrees.
    Diamond,
    /// Regular hexagon.
    Hexagon,
}

impl Shape {
    /// Every shape, in pool enumeration order.
    pub const ALL: [Shape; 6] = [
        Shape::Circle,
        Shape::Square,
        Shape::Triangle,
        Shape::Star,
        Shape::Diamond,
        Shape::Hexagon,
    ];

    /// Lowercase name used in prompts and metadata.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Star => "star",
            Shape::Diamond => "diamond",
            Shape::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named symbol fill color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    #[allow(missing_docs)]
    Red,
    #[allow(missing_docs)]
    Blue,
    #[allow(missing_docs)]
    Green,
    #[allow(missing_docs)]
    Yellow,
    #[allow(missing_docs)]
    Purple,
    #[allow(missing_docs)]
    Orange,
    #[allow(missing_docs)]
    Cyan,
    #[allow(missing_docs)]
    Pink,
}

impl ColorName {
    /// Every color, in pool enumeration order.
    pub const ALL: [ColorName; 8] = [
        ColorName::Red,
        ColorName::Blue,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Purple,
        ColorName::Orange,
        ColorName::Cyan,
        ColorName::Pink,
    ];

    /// Lowercase name used in prompts and metadata.
    pub fn name(self) -> &'static str {
        match self {
            ColorName::Red => "red",
            ColorName::Blue => "blue",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Purple => "purple",
            ColorName::Orange => "orange",
            ColorName::Cyan => "cyan",
            ColorName::Pink => "pink",
        }
    }

    /// Fill color designated for this name.
    pub fn rgb(self) -> Rgb8 {
        match self {
            ColorName::Red => Rgb8(220, 50, 50),
            ColorName::Blue => Rgb8(50, 100, 220),
            ColorName::Green => Rgb8(50, 180, 50),
            ColorName::Yellow => Rgb8(230, 200, 50),
            ColorName::Purple => Rgb8(180, 50, 180),
            ColorName::Orange => Rgb8(255, 140, 50),
            ColorName::Cyan => Rgb8(50, 200, 200),
            ColorName::Pink => Rgb8(255, 100, 150),
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of symbols in the standard pool (6 shapes x 8 colors).
pub const POOL_SIZE: usize = Shape::ALL.len() * ColorName::ALL.len();

/// Identity of a symbol for uniqueness purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId {
    /// Shape component.
    pub shape: Shape,
    /// Color component.
    pub color: ColorName,
}

/// A colored geometric figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Symbol {
    /// Figure to draw.
    pub shape: Shape,
    /// Color name, as it appears in prompts.
    #[serde(rename = "color")]
    pub color_name: ColorName,
    /// Fill color.
    pub color_rgb: Rgb8,
}

impl Symbol {
    /// Build a symbol with the designated RGB for `color_name`.
    pub fn new(shape: Shape, color_name: ColorName) -> Self {
        Self {
            shape,
            color_name,
            color_rgb: color_name.rgb(),
        }
    }

    /// Identity used for uniqueness checks.
    pub fn id(&self) -> SymbolId {
        SymbolId {
            shape: self.shape,
            color: self.color_name,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color_name, self.shape)
    }
}

/// The cartesian product of a shape list and a color list.
#[derive(Clone, Debug)]
pub struct SymbolPool {
    symbols: Vec<Symbol>,
}

impl SymbolPool {
    /// Build a pool from explicit shape and color lists (shape-major order).
    pub fn new(shapes: &[Shape], colors: &[ColorName]) -> SwapResult<Self> {
        let symbols: Vec<Symbol> = shapes
            .iter()
            .flat_map(|&shape| colors.iter().map(move |&color| Symbol::new(shape, color)))
            .collect();
        if symbols.is_empty() {
            return Err(SwapError::configuration(
                "symbol pool needs at least one shape and one color",
            ));
        }

        let unique: HashSet<SymbolId> = symbols.iter().map(Symbol::id).collect();
        if unique.len() != symbols.len() {
            return Err(SwapError::configuration(
                "symbol pool shape/color lists must not repeat entries",
            ));
        }
        Ok(Self { symbols })
    }

    /// The standard 48-symbol pool.
    pub fn standard() -> Self {
        Self {
            symbols: Shape::ALL
                .iter()
                .flat_map(|&shape| ColorName::ALL.iter().map(move |&c| Symbol::new(shape, c)))
                .collect(),
        }
    }

    /// Every symbol, in deterministic enumeration order.
    pub fn all_combinations(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols in the pool.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a constructed pool; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols whose identity is not in `existing`, in pool order.
    pub fn excluding(&self, existing: &HashSet<SymbolId>) -> Vec<Symbol> {
        self.symbols
            .iter()
            .filter(|s| !existing.contains(&s.id()))
            .copied()
            .collect()
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/symbol/pool.rs"]
mod tests;
