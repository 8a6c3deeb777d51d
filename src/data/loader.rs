use crate::data::Activity;
use anyhow::Context;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the ordered activity list from a JSON array file.
pub fn load_activities<P: AsRef<Path>>(path: P) -> crate::Result<Vec<Activity>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open activities file {}", path.display()))?;
    let activities: Vec<Activity> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse activities file {}", path.display()))?;

    tracing::debug!(count = activities.len(), path = %path.display(), "Loaded activities");
    Ok(activities)
}

/// Decode an image, sniffing the format from its content rather than its extension.
pub fn load_image<P: AsRef<Path>>(path: P) -> crate::Result<DynamicImage> {
    let path = path.as_ref();
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image {}", path.display()))?;

    tracing::trace!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        channels = img.color().channel_count(),
        "Decoded image"
    );
    Ok(img)
}

/// Decode an image and apply its EXIF orientation, so a rotated photo reports
/// the width and height it is displayed with.
pub fn load_oriented_image<P: AsRef<Path>>(path: P) -> crate::Result<DynamicImage> {
    let path = path.as_ref();
    let mut decoder = ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image {}", path.display()))?
        .into_decoder()
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let orientation = decoder
        .orientation()
        .with_context(|| format!("Failed to read orientation of {}", path.display()))?;
    let mut img = DynamicImage::from_decoder(decoder)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    img.apply_orientation(orientation);

    tracing::trace!(
        path = %path.display(),
        ?orientation,
        width = img.width(),
        height = img.height(),
        "Decoded oriented image"
    );
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    /// JPEG bytes carrying an EXIF orientation tag.
    fn jpeg_with_orientation(width: u32, height: u32, orientation: u8) -> Vec<u8> {
        let mut encoded = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut encoded, ImageFormat::Jpeg)
            .unwrap();
        let encoded = encoded.into_inner();

        // APP1: "Exif\0\0", big-endian TIFF header, one IFD entry (0x0112, SHORT)
        let mut app1 = vec![0xFF, 0xE1, 0x00, 0x22];
        app1.extend_from_slice(b"Exif\0\0");
        app1.extend_from_slice(&[b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
        app1.extend_from_slice(&[0x00, 0x01]);
        app1.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        app1.extend_from_slice(&[0x00, orientation, 0x00, 0x00]);
        app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let mut bytes = encoded[..2].to_vec();
        bytes.extend_from_slice(&app1);
        bytes.extend_from_slice(&encoded[2..]);
        bytes
    }
    use tempfile::TempDir;

    #[test]
    fn test_load_activities_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("activities.json");
        std::fs::write(
            &path,
            r#"[{"image_path": "b.png", "title": "Biking"}, {"image_path": "a.png"}]"#,
        )
        .unwrap();

        let activities = load_activities(&path).unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].image_path, Path::new("b.png"));
        assert_eq!(activities[1].image_path, Path::new("a.png"));
    }

    #[test]
    fn test_load_activities_tolerates_non_string_id_and_title() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("activities.json");
        std::fs::write(
            &path,
            r#"[{"id": 42, "image_path": "a.png"}, {"title": 7, "image_path": "b.png"}]"#,
        )
        .unwrap();

        let activities = load_activities(&path).unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].display_id().as_deref(), Some("42"));
        assert_eq!(activities[1].image_path, Path::new("b.png"));
    }

    #[test]
    fn test_load_activities_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_activities(dir.path().join("activities.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open activities file"));
    }

    #[test]
    fn test_load_activities_rejects_non_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("activities.json");
        std::fs::write(&path, r#"{"image_path": "a.png"}"#).unwrap();
        assert!(load_activities(&path).is_err());
    }

    #[test]
    fn test_load_image_sniffs_format() {
        let dir = TempDir::new().unwrap();
        // PNG bytes behind a misleading extension
        let path = dir.path().join("picture.jpg");
        RgbImage::new(7, 3)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (7, 3));
    }

    #[test]
    fn test_load_image_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(load_image(&path).is_err());
    }

    #[test]
    fn test_oriented_image_swaps_rotated_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phone.jpg");
        // 6 = rotate 90 degrees clockwise for display
        std::fs::write(&path, jpeg_with_orientation(40, 20, 6)).unwrap();

        let raw = load_image(&path).unwrap();
        assert_eq!((raw.width(), raw.height()), (40, 20));

        let oriented = load_oriented_image(&path).unwrap();
        assert_eq!((oriented.width(), oriented.height()), (20, 40));
    }

    #[test]
    fn test_oriented_image_without_exif_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.png");
        RgbImage::new(9, 4).save(&path).unwrap();

        let img = load_oriented_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (9, 4));
    }
}
