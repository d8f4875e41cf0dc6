use image::{Rgba, RgbaImage};

/// Draw an ellipse inscribed in `bounds` (`x0, y0, x1, y1`, inclusive).
///
/// Pixels inside the inner ellipse (radii shrunk by `width`) get `fill`; the
/// ring between inner and outer gets `outline`. Edges are hard, no blending.
pub fn draw_ellipse(
    canvas: &mut RgbaImage,
    bounds: (u32, u32, u32, u32),
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: u32,
) {
    let (x0, y0, x1, y1) = bounds;
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    let rx = (x1 - x0) as f32 / 2.0;
    let ry = (y1 - y0) as f32 / 2.0;
    let inner_rx = rx - width as f32;
    let inner_ry = ry - width as f32;

    let max_x = x1.min(canvas.width().saturating_sub(1));
    let max_y = y1.min(canvas.height().saturating_sub(1));

    for y in y0..=max_y {
        for x in x0..=max_x {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;

            if !inside(dx, dy, rx, ry) {
                continue;
            }

            // A stroke at least as wide as the radius leaves no fill.
            let in_fill = inner_rx > 0.0 && inner_ry > 0.0 && inside(dx, dy, inner_rx, inner_ry);
            canvas.put_pixel(x, y, if in_fill { fill } else { outline });
        }
    }
}

fn inside(dx: f32, dy: f32, rx: f32, ry: f32) -> bool {
    let nx = dx / rx;
    let ny = dy / ry;
    nx * nx + ny * ny <= 1.0
}
