use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use pa_core::error::CoreError;
use pa_core::frame::RgbRaster;

/// Correction d'aspect par défaut : un glyphe monospace est ~1.8× plus haut que large.
pub const DEFAULT_ASPECT_CORRECTION: f32 = 0.55;

/// Dimensions de sortie pour une largeur cible, ratio source conservé.
///
/// `height = round(target_width * src_height / src_width * aspect_correction)`.
/// Aucun bornage : une source très large peut donner une hauteur nulle.
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] if `src_width` or `target_width` is 0.
///
/// # Example
/// ```
/// use pa_source::resize::target_dimensions;
/// assert_eq!(target_dimensions(200, 100, 120, 0.55).unwrap(), (120, 33));
/// assert!(target_dimensions(0, 100, 120, 0.55).is_err());
/// ```
pub fn target_dimensions(
    src_width: u32,
    src_height: u32,
    target_width: u32,
    aspect_correction: f32,
) -> Result<(u32, u32), CoreError> {
    if src_width == 0 {
        return Err(CoreError::InvalidInput("image source de largeur nulle".into()));
    }
    if target_width == 0 {
        return Err(CoreError::InvalidInput("largeur cible nulle".into()));
    }
    let ratio = f64::from(src_height) / f64::from(src_width);
    let height = (f64::from(target_width) * ratio * f64::from(aspect_correction)).round();
    Ok((target_width, height as u32))
}

/// Resizer réutilisable wrappant fast_image_resize.
///
/// # Example
/// ```
/// use pa_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch image for source (owned buffer to avoid the mut borrow issue).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer (Catmull-Rom convolution).
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new()
                .resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom)),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns an error if the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use pa_source::resize::Resizer;
    /// use pa_core::frame::RgbRaster;
    /// let mut r = Resizer::new();
    /// let src = RgbRaster::new(100, 100);
    /// let mut dst = RgbRaster::new(50, 50);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &RgbRaster, dst: &mut RgbRaster) -> Result<()> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        // fast_image_resize requires &mut on the source buffer
        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x3)
                .context("Invalid source dimensions")?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x3)
                .context("Invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(())
    }

    /// Downscale (or upscale) `src` to `target_width` columns, height per
    /// [`target_dimensions`].
    ///
    /// # Errors
    /// [`CoreError::InvalidInput`] for a zero source or target width, or a
    /// resampler failure.
    ///
    /// # Example
    /// ```
    /// use pa_source::resize::Resizer;
    /// use pa_core::frame::RgbRaster;
    /// let mut r = Resizer::new();
    /// let out = r.resize_to_width(&RgbRaster::new(240, 100), 120, 0.55).unwrap();
    /// assert_eq!((out.width, out.height), (120, 28));
    /// ```
    pub fn resize_to_width(
        &mut self,
        src: &RgbRaster,
        target_width: u32,
        aspect_correction: f32,
    ) -> Result<RgbRaster> {
        let (width, height) =
            target_dimensions(src.width, src.height, target_width, aspect_correction)?;
        let mut dst = RgbRaster::new(width, height);
        if dst.is_empty() {
            log::debug!(
                "Hauteur cible nulle pour {}×{}, raster vide",
                src.width,
                src.height
            );
            return Ok(dst);
        }
        self.resize_into(src, &mut dst)?;
        log::debug!("Resize {}×{} → {width}×{height}", src.width, src.height);
        Ok(dst)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Same as [`Resizer::resize_to_width`].
///
/// # Example
/// ```
/// use pa_source::resize::{resize_raster, DEFAULT_ASPECT_CORRECTION};
/// use pa_core::frame::RgbRaster;
/// let src = RgbRaster::new(100, 100);
/// let dst = resize_raster(&src, 120, DEFAULT_ASPECT_CORRECTION).unwrap();
/// assert_eq!((dst.width, dst.height), (120, 66));
/// ```
pub fn resize_raster(
    src: &RgbRaster,
    target_width: u32,
    aspect_correction: f32,
) -> Result<RgbRaster> {
    Resizer::new().resize_to_width(src, target_width, aspect_correction)
}
