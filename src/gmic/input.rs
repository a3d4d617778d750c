use std::path::Path;

use crate::gmic::errors::{GmicError, Result};
use crate::gmic::InputImage;

/// Display name G'MIC gives the single input image.
const INPUT_IMAGE_NAME: &str = "Image 1";

/// Decode the image at `path` into an owned buffer for the engine.
///
/// The file handle is released as soon as decoding finishes; only the decoded
/// pixels travel further down the pipeline.
pub fn load_input_image(path: &Path) -> Result<InputImage> {
    let image = image::open(path).map_err(|source| GmicError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(InputImage {
        name: INPUT_IMAGE_NAME.to_string(),
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn test_load_input_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.png");
        let img: image::RgbImage = ImageBuffer::from_pixel(4, 3, Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        let input = load_input_image(&path).unwrap();
        assert_eq!(input.name, "Image 1");
        assert_eq!(input.image.width(), 4);
        assert_eq!(input.image.height(), 3);
    }

    #[test]
    fn test_missing_file_is_a_decode_error() {
        let err = load_input_image(Path::new("/no/such/file.png")).unwrap_err();
        assert!(matches!(err, GmicError::Decode { .. }));
    }

    #[test]
    fn test_non_image_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        let err = load_input_image(&path).unwrap_err();
        assert!(matches!(err, GmicError::Decode { .. }));
    }
}
