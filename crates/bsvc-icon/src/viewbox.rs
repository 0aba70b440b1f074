//! # viewBox Parsing
//!
//! The SVG `viewBox` attribute is four numbers, `min-x min-y width height`,
//! separated by whitespace and/or commas.

/// A parsed `viewBox` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge of the visible region.
    pub min_x: f64,
    /// Top edge of the visible region.
    pub min_y: f64,
    /// Width of the visible region.
    pub width: f64,
    /// Height of the visible region.
    pub height: f64,
}

impl ViewBox {
    /// Parse a `viewBox` attribute value.
    ///
    /// Returns `None` unless the value holds exactly four finite numbers.
    pub fn parse(value: &str) -> Option<Self> {
        let mut numbers = value
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| token.parse::<f64>().ok().filter(|n| n.is_finite()));

        let view_box = Self {
            min_x: numbers.next()??,
            min_y: numbers.next()??,
            width: numbers.next()??,
            height: numbers.next()??,
        };

        if numbers.next().is_some() {
            return None;
        }
        Some(view_box)
    }

    /// Returns true if width and height are equal.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}
