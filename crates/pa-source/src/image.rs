use std::path::Path;

use ::image::ImageReader;
use pa_core::error::CoreError;
use pa_core::frame::RgbRaster;

/// Charge une image depuis le disque en raster RGB.
///
/// Le format est détecté sur le contenu, puis sur l'extension. Les GIF
/// animés ne fournissent que leur première frame. La transparence est
/// ignorée.
///
/// # Errors
/// - [`CoreError::InputNotFound`] si `path` ne désigne pas un fichier existant;
///   aucune tentative de décodage n'est faite dans ce cas.
/// - [`CoreError::Decode`] si le contenu est illisible, corrompu ou d'un
///   format non supporté.
///
/// # Example
/// ```no_run
/// use pa_source::image::load_image;
/// use std::path::Path;
/// let raster = load_image(Path::new("photo.jpg")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<RgbRaster, CoreError> {
    if !path.is_file() {
        return Err(CoreError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |reason: String| CoreError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| decode_err(e.to_string()))?
        .decode()
        .map_err(|e| decode_err(e.to_string()))?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::debug!("Image chargée : {} ({width}×{height})", path.display());
    RgbRaster::from_raw(width, height, rgb.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgb, RgbImage};

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, CoreError::InputNotFound { .. }));
    }

    #[test]
    fn directory_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::InputNotFound { .. }));
    }

    #[test]
    fn zero_byte_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }

    #[test]
    fn garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"definitely not pixels").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }

    #[test]
    fn png_is_decoded_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(3, 2, Rgb([255, 0, 0]))
            .save(&path)
            .unwrap();
        let raster = load_image(&path).unwrap();
        assert_eq!((raster.width, raster.height), (3, 2));
        assert!(raster.pixels().all(|p| p == (255, 0, 0)));
    }

    #[test]
    fn format_is_sniffed_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("blue.png");
        RgbImage::from_pixel(1, 1, Rgb([0, 0, 255]))
            .save(&png)
            .unwrap();
        let renamed = dir.path().join("blue.jpg");
        std::fs::rename(&png, &renamed).unwrap();
        let raster = load_image(&renamed).unwrap();
        assert_eq!(raster.pixel(0, 0), (0, 0, 255));
    }
}
