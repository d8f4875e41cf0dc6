use image::Rgba;

/// Side length of the generated badge, in pixels.
pub const BADGE_SIZE: u32 = 32;

/// Distance between the canvas edge and the circle's bounding box.
pub const CIRCLE_INSET: u32 = 2;

/// Material blue 500 (`#2196F3`).
pub const FILL_BLUE: Rgba<u8> = Rgba([0x21, 0x96, 0xF3, 0xFF]);

/// Material blue 700 (`#1976D2`).
pub const OUTLINE_BLUE: Rgba<u8> = Rgba([0x19, 0x76, 0xD2, 0xFF]);

pub const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Everything the generator draws, as plain values.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStyle {
    pub size: u32,
    pub inset: u32,
    pub fill: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub outline_width: u32,
    pub glyph: char,
    pub glyph_color: Rgba<u8>,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            size: BADGE_SIZE,
            inset: CIRCLE_INSET,
            fill: FILL_BLUE,
            outline: OUTLINE_BLUE,
            outline_width: 2,
            glyph: 'P',
            glyph_color: WHITE,
        }
    }
}

impl BadgeStyle {
    /// Circle bounding box as `(x0, y0, x1, y1)`.
    pub fn circle_bounds(&self) -> (u32, u32, u32, u32) {
        let far = self.size.saturating_sub(self.inset);
        (self.inset, self.inset, far, far)
    }

    /// Top-left corner of the glyph cell.
    ///
    /// Tuned for an 8x8 cell at 32px; other sizes still land inside the
    /// canvas but are not visually centred.
    pub fn glyph_origin(&self) -> (i64, i64) {
        let half = i64::from(self.size / 2);
        (half - 4, half - 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_badge_constants() {
        let style = BadgeStyle::default();
        assert_eq!(style.size, 32);
        assert_eq!(style.circle_bounds(), (2, 2, 30, 30));
        assert_eq!(style.glyph_origin(), (12, 8));
        assert_eq!(style.fill, Rgba([33, 150, 243, 255]));
        assert_eq!(style.outline, Rgba([25, 118, 210, 255]));
    }

    #[test]
    fn bounds_never_underflow() {
        let style = BadgeStyle {
            size: 1,
            ..BadgeStyle::default()
        };
        assert_eq!(style.circle_bounds(), (2, 2, 0, 0));
    }
}
