//! Bitmap font resource used for the badge glyph.
//!
//! Glyphs are 8x8 cells, one byte per row, least significant bit on the
//! left. A font covers a contiguous run of code points starting at `first`.

use thiserror::Error;

/// Width and height of one glyph cell.
pub const CELL: u32 = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FontError {
    #[error("font data is malformed: {0}")]
    Malformed(String),
    #[error("font has no glyph for {0:?}")]
    MissingGlyph(char),
    #[error("font unavailable: {0}")]
    Unavailable(String),
}

/// Something that can hand out a font on request.
///
/// Acquisition may fail; callers decide whether that is fatal.
pub trait FontSource {
    fn load(&self) -> Result<BitmapFont, FontError>;
}

/// The font compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFont;

impl FontSource for DefaultFont {
    fn load(&self) -> Result<BitmapFont, FontError> {
        BitmapFont::from_bytes('A', &UPPERCASE_LATIN)
    }
}

#[derive(Debug, Clone)]
pub struct BitmapFont {
    first: u32,
    cells: Vec<[u8; CELL as usize]>,
}

impl BitmapFont {
    pub fn from_bytes(first: char, bytes: &[u8]) -> Result<Self, FontError> {
        let row_count = CELL as usize;
        if bytes.is_empty() {
            return Err(FontError::Malformed("no glyph data".into()));
        }
        if bytes.len() % row_count != 0 {
            return Err(FontError::Malformed(format!(
                "{} bytes is not a whole number of {row_count}-byte glyphs",
                bytes.len()
            )));
        }

        let cells = bytes
            .chunks_exact(row_count)
            .map(|chunk| {
                let mut cell = [0u8; CELL as usize];
                cell.copy_from_slice(chunk);
                cell
            })
            .collect();

        Ok(Self {
            first: first as u32,
            cells,
        })
    }

    pub fn glyph(&self, ch: char) -> Result<&[u8; CELL as usize], FontError> {
        (ch as u32)
            .checked_sub(self.first)
            .and_then(|index| self.cells.get(index as usize))
            .ok_or(FontError::MissingGlyph(ch))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[rustfmt::skip]
const UPPERCASE_LATIN: [u8; 26 * CELL as usize] = [
    0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00, // A
    0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00, // B
    0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00, // C
    0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00, // D
    0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00, // E
    0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00, // F
    0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00, // G
    0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00, // H
    0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00, // I
    0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00, // J
    0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00, // K
    0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00, // L
    0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00, // M
    0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00, // N
    0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00, // O
    0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00, // P
    0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00, // Q
    0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00, // R
    0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00, // S
    0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00, // T
    0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00, // U
    0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00, // V
    0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00, // W
    0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00, // X
    0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00, // Y
    0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00, // Z
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_font_covers_uppercase() {
        let font = DefaultFont.load().unwrap();
        assert_eq!(font.len(), 26);
        assert_eq!(
            font.glyph('P').unwrap(),
            &[0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00]
        );
        assert!(font.glyph('Z').is_ok());
    }

    #[test]
    fn glyphs_outside_range_are_missing() {
        let font = DefaultFont.load().unwrap();
        assert_eq!(font.glyph('@'), Err(FontError::MissingGlyph('@')));
        assert_eq!(font.glyph('['), Err(FontError::MissingGlyph('[')));
        assert_eq!(font.glyph('p'), Err(FontError::MissingGlyph('p')));
    }

    #[test]
    fn rejects_partial_cells() {
        let err = BitmapFont::from_bytes('A', &[0xFF; 12]).unwrap_err();
        assert!(matches!(err, FontError::Malformed(_)));
        assert!(err.to_string().contains("12 bytes"));
    }

    #[test]
    fn rejects_empty_data() {
        assert!(matches!(
            BitmapFont::from_bytes('A', &[]),
            Err(FontError::Malformed(_))
        ));
    }

    #[test]
    fn custom_first_code_point() {
        let font = BitmapFont::from_bytes('0', &[0x01; 16]).unwrap();
        assert_eq!(font.glyph('1').unwrap(), &[0x01; 8]);
        assert!(font.glyph('2').is_err());
    }
}
