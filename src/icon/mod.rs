use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::imageops::FilterType;
use log::info;

/// Resolutions embedded in the generated ICO container.
pub const ICON_SIZES: [u32; 8] = [16, 24, 32, 48, 64, 96, 128, 256];

/// Write the fetched favicon into `build_dir` as `icon.png`, then
/// encode `icon.ico` with resized copies at the 8 fixed resolutions.
pub fn write_icon_set(build_dir: &Path, png_bytes: &[u8]) -> Result<(), String> {
    let png_path = build_dir.join("icon.png");
    fs::write(&png_path, png_bytes)
        .map_err(|e| format!("failed to write {}: {e}", png_path.display()))?;

    let img = image::load_from_memory(png_bytes)
        .map_err(|e| format!("failed to decode favicon.png: {e}"))?;

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ICON_SIZES {
        let resized = img.resize_exact(size, size, FilterType::Lanczos3);
        let rgba = resized.to_rgba8();
        let icon_image = ico::IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = ico::IconDirEntry::encode(&icon_image)
            .map_err(|e| format!("failed to encode {size}px icon: {e}"))?;
        icon_dir.add_entry(entry);
    }

    let ico_path = build_dir.join("icon.ico");
    let file = File::create(&ico_path)
        .map_err(|e| format!("failed to create {}: {e}", ico_path.display()))?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| format!("failed to write {}: {e}", ico_path.display()))?;

    info!("icon: wrote {}", ico_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(64, 64, image::Rgba([12, 34, 56, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn produces_ico_with_eight_resolutions() {
        let tmp = tempfile::tempdir().unwrap();
        write_icon_set(tmp.path(), &sample_png()).unwrap();

        let file = File::open(tmp.path().join("icon.ico")).unwrap();
        let icon_dir = ico::IconDir::read(file).unwrap();
        let sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(sizes, ICON_SIZES.to_vec());
    }

    #[test]
    fn writes_source_png_alongside() {
        let tmp = tempfile::tempdir().unwrap();
        let png = sample_png();
        write_icon_set(tmp.path(), &png).unwrap();
        assert_eq!(fs::read(tmp.path().join("icon.png")).unwrap(), png);
    }

    #[test]
    fn rejects_undecodable_image() {
        let tmp = tempfile::tempdir().unwrap();
        let err = write_icon_set(tmp.path(), b"not a png").unwrap_err();
        assert!(err.contains("decode"));
    }
}
