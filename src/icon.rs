use crate::font::{DefaultFont, FontError, FontSource};
use crate::shape::draw_ellipse;
use crate::style::{BadgeStyle, TRANSPARENT};
use crate::text::{draw_text, draw_text_builtin};
use image::RgbaImage;

/// Build the default badge: a blue circle with a white 'P'.
pub fn generate() -> RgbaImage {
    generate_with(&BadgeStyle::default(), &DefaultFont)
}

/// Build a badge from `style`, drawing the glyph with a font from `fonts`.
///
/// If the font cannot be loaded or cannot draw the glyph, the built-in
/// glyphs are used instead and the failure is dropped.
pub fn generate_with<S: FontSource>(style: &BadgeStyle, fonts: &S) -> RgbaImage {
    log::debug!("Generating {0}x{0} badge", style.size);

    let mut canvas = RgbaImage::from_pixel(style.size, style.size, TRANSPARENT);

    draw_ellipse(
        &mut canvas,
        style.circle_bounds(),
        style.fill,
        style.outline,
        style.outline_width,
    );

    let origin = style.glyph_origin();
    let glyph = style.glyph.to_string();

    if draw_glyph_with_font(&mut canvas, style, &glyph, fonts).is_err() {
        draw_text_builtin(&mut canvas, origin, &glyph, style.glyph_color);
    }

    canvas
}

fn draw_glyph_with_font<S: FontSource>(
    canvas: &mut RgbaImage,
    style: &BadgeStyle,
    glyph: &str,
    fonts: &S,
) -> Result<(), FontError> {
    let font = fonts.load()?;
    draw_text(canvas, style.glyph_origin(), glyph, style.glyph_color, &font)
}
