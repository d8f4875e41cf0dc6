use favicon_badge::{generate, save_ico, ICON_SIZES, OUTPUT_PATH};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let favicon = generate();
    save_ico(&favicon, Path::new(OUTPUT_PATH), ICON_SIZES)?;

    println!("Favicon created successfully!");
    Ok(())
}
