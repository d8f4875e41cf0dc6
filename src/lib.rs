//! Draws a small circular letter badge and stores it as a Windows icon.

pub mod export;
pub mod font;
pub mod icon;
pub mod shape;
pub mod style;
pub mod text;

pub use export::{encode_ico, save_ico};
pub use font::{BitmapFont, DefaultFont, FontError, FontSource};
pub use icon::{generate, generate_with};
pub use style::BadgeStyle;

/// Where the binary writes its output, relative to the working directory.
pub const OUTPUT_PATH: &str = "favicon.ico";

/// Entry sizes embedded in the written icon.
pub const ICON_SIZES: &[u32] = &[32];
