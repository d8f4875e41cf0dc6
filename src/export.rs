use anyhow::{bail, Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encode `image` as an ICO container with one entry per requested size.
///
/// Sizes larger than the source image are skipped rather than upscaled.
pub fn encode_ico(image: &RgbaImage, sizes: &[u32]) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        if size == 0 || size > width || size > height {
            log::debug!("Skipping {size}px entry for {width}x{height} source");
            continue;
        }

        let rgba = if (size, size) == (width, height) {
            image.as_raw().clone()
        } else {
            imageops::resize(image, size, size, FilterType::Lanczos3).into_raw()
        };

        let entry = IconDirEntry::encode(&IconImage::from_rgba_data(size, size, rgba))
            .with_context(|| format!("Failed to encode {size}x{size} icon entry"))?;
        icon_dir.add_entry(entry);
    }

    if icon_dir.entries().is_empty() {
        bail!("No icon sizes in {sizes:?} fit a {width}x{height} image");
    }

    let mut bytes = Vec::new();
    icon_dir
        .write(&mut bytes)
        .context("Failed to write icon directory")?;
    Ok(bytes)
}

/// Encode `image` and write it to `path`.
pub fn save_ico(image: &RgbaImage, path: &Path, sizes: &[u32]) -> Result<()> {
    let bytes = encode_ico(image, sizes)?;

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::generate;
    use std::io::Cursor;

    fn read_dir(bytes: &[u8]) -> IconDir {
        IconDir::read(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn single_native_entry() {
        let img = generate();
        let bytes = encode_ico(&img, &[32]).unwrap();
        let dir = read_dir(&bytes);
        assert_eq!(dir.entries().len(), 1);

        let entry = &dir.entries()[0];
        assert_eq!((entry.width(), entry.height()), (32, 32));
        let decoded = entry.decode().unwrap();
        assert_eq!(decoded.rgba_data(), img.as_raw().as_slice());
    }

    #[test]
    fn downscaled_entries() {
        let bytes = encode_ico(&generate(), &[16, 32]).unwrap();
        let sizes: Vec<_> = read_dir(&bytes)
            .entries()
            .iter()
            .map(|e| e.width())
            .collect();
        assert_eq!(sizes, vec![16, 32]);
    }

    #[test]
    fn oversized_entries_are_skipped() {
        let bytes = encode_ico(&generate(), &[64, 32, 48]).unwrap();
        assert_eq!(read_dir(&bytes).entries().len(), 1);
    }

    #[test]
    fn nothing_to_encode_is_an_error() {
        let err = encode_ico(&generate(), &[64]).unwrap_err();
        assert!(err.to_string().contains("No icon sizes"));
        assert!(encode_ico(&generate(), &[]).is_err());
    }

    #[test]
    fn save_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("favicon.ico");
        let err = save_ico(&generate(), &target, &[32]).unwrap_err();
        assert!(format!("{err:#}").contains("favicon.ico"));
    }
}
