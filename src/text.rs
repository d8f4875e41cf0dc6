use crate::font::{BitmapFont, FontError, CELL};
use image::{Rgba, RgbaImage};

/// Horizontal advance of the built-in glyphs.
const BUILTIN_ADVANCE: i64 = 4;

/// Draw `text` with `font`, one 8x8 cell per character.
///
/// Every glyph is looked up before anything is drawn, so a missing glyph
/// leaves the canvas untouched.
pub fn draw_text(
    canvas: &mut RgbaImage,
    origin: (i64, i64),
    text: &str,
    color: Rgba<u8>,
    font: &BitmapFont,
) -> Result<(), FontError> {
    let glyphs = text
        .chars()
        .map(|ch| font.glyph(ch))
        .collect::<Result<Vec<_>, _>>()?;

    let (mut x, y) = origin;
    for rows in glyphs {
        for (dy, row) in rows.iter().enumerate() {
            for dx in 0..CELL {
                if row & (1 << dx) != 0 {
                    plot(canvas, x + i64::from(dx), y + dy as i64, color);
                }
            }
        }
        x += i64::from(CELL);
    }
    Ok(())
}

/// Draw `text` without a font, using the tiny glyphs baked into this module.
///
/// Lowercase letters are drawn as uppercase; anything else without a shape
/// becomes a hollow box.
pub fn draw_text_builtin(
    canvas: &mut RgbaImage,
    origin: (i64, i64),
    text: &str,
    color: Rgba<u8>,
) {
    let (mut x, y) = origin;
    for ch in text.chars() {
        let rows = builtin_glyph(ch);
        for (dy, row) in rows.iter().enumerate() {
            for dx in 0..3 {
                // Leftmost column is the high bit.
                if row & (0b100 >> dx) != 0 {
                    plot(canvas, x + dx, y + dy as i64, color);
                }
            }
        }
        x += BUILTIN_ADVANCE;
    }
}

fn plot(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height()) {
        return;
    }
    canvas.put_pixel(x as u32, y as u32, color);
}

fn builtin_glyph(ch: char) -> [u8; 5] {
    match ch.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        ' ' => [0; 5],
        _ => [0b111, 0b101, 0b101, 0b101, 0b111],
    }
}
