//! Cursor-follow highlight support.
//!
//! The rendering layer drives a radial highlight from two CSS custom
//! properties, `--cursor-x` and `--cursor-y`, expressed as viewport
//! percentages. The conversion from pointer coordinates lives here; it is
//! pure data-shaping and carries no part of the content contract.

/// Pointer position as viewport percentages, clamped to 0–100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl CursorPosition {
    /// Convert client pixel coordinates into percentages of the viewport.
    /// A degenerate viewport maps everything to the origin.
    pub fn from_client(x: f64, y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        let percent = |value: f64, extent: f64| {
            if extent <= 0.0 {
                return 0.0;
            }
            (value / extent * 100.0).clamp(0.0, 100.0)
        };

        Self {
            x_percent: percent(x, viewport_width),
            y_percent: percent(y, viewport_height),
        }
    }

    /// The property pairs the rendering layer writes onto the document
    /// element.
    pub fn css_custom_properties(&self) -> [(&'static str, String); 2] {
        [
            ("--cursor-x", format!("{}%", self.x_percent)),
            ("--cursor-y", format!("{}%", self.y_percent)),
        ]
    }
}
