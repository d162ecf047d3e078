use pa_core::frame::{GrayRaster, RgbRaster};

/// Luma perceptuelle BT.601, arrondie à l'entier le plus proche.
///
/// `L = 0.299 R + 0.587 G + 0.114 B`, calculée en entiers. Les poids
/// somment à 1000 : le résultat ne dépasse jamais 255.
///
/// # Example
/// ```
/// use pa_ascii::luminance::luma;
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(255, 0, 0), 76);
/// assert_eq!(luma(0, 0, 255), 29);
/// ```
#[inline(always)]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114 + 500) / 1000) as u8
}

/// Convert an RGB raster to a same-size grayscale raster.
///
/// # Example
/// ```
/// use pa_core::frame::RgbRaster;
/// use pa_ascii::luminance::to_grayscale;
///
/// let rgb = RgbRaster::from_raw(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
/// let gray = to_grayscale(&rgb);
/// assert_eq!(gray.data, vec![0, 255]);
/// ```
#[must_use]
pub fn to_grayscale(rgb: &RgbRaster) -> GrayRaster {
    GrayRaster {
        data: rgb.pixels().map(|(r, g, b)| luma(r, g, b)).collect(),
        width: rgb.width,
        height: rgb.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_round_to_nearest() {
        // 0.587 * 255 = 149.685
        assert_eq!(luma(0, 255, 0), 150);
        // 0.299 * 255 = 76.245
        assert_eq!(luma(255, 0, 0), 76);
        // 0.114 * 255 = 29.07
        assert_eq!(luma(0, 0, 255), 29);
        assert_eq!(luma(0, 0, 0), 0);
    }

    #[test]
    fn luma_is_floor_or_floor_plus_one() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let l = u32::from(luma(r, g, b));
                    let floor =
                        (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
                    assert!(l == floor || l == floor + 1, "luma({r}, {g}, {b}) = {l}");
                }
            }
        }
    }

    #[test]
    fn grayscale_keeps_dimensions() {
        let rgb = RgbRaster::new(7, 3);
        let gray = to_grayscale(&rgb);
        assert_eq!((gray.width, gray.height), (7, 3));
        assert_eq!(gray.data.len(), 21);
        assert!(gray.matches(&rgb));
    }

    #[test]
    fn four_pixel_scenario() {
        let rgb = RgbRaster::from_raw(
            2,
            2,
            vec![0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 0, 255],
        )
        .unwrap();
        assert_eq!(to_grayscale(&rgb).data, vec![0, 255, 76, 29]);
    }
}
