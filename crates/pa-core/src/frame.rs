use crate::error::CoreError;

/// Raster RGB, row-major, origine en haut à gauche, 3 bytes par pixel.
///
/// # Example
/// ```
/// use pa_core::frame::RgbRaster;
/// let raster = RgbRaster::new(10, 10);
/// assert_eq!(raster.data.len(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbRaster {
    /// Pixels RGB, row-major, 3 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RgbRaster {
    /// Crée un raster noir aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use pa_core::frame::RgbRaster;
    /// let raster = RgbRaster::new(4, 2);
    /// assert_eq!(raster.width, 4);
    /// assert_eq!(raster.height, 2);
    /// assert_eq!(raster.pixel(3, 1), (0, 0, 0));
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Wrap raw RGB bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] if `data.len() != width * height * 3`.
    ///
    /// # Example
    /// ```
    /// use pa_core::frame::RgbRaster;
    /// let raster = RgbRaster::from_raw(1, 1, vec![255, 0, 0]).unwrap();
    /// assert_eq!(raster.pixel(0, 0), (255, 0, 0));
    /// assert!(RgbRaster::from_raw(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(CoreError::InvalidInput(format!(
                "raster RGB {width}×{height} : {} bytes, {expected} attendus",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Accès au pixel (x, y) → (r, g, b).
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data.chunks_exact(3).map(|p| (p[0], p[1], p[2]))
    }

    /// True when the raster holds no pixel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Raster en niveaux de gris, un byte par pixel.
///
/// Toujours dérivé d'un [`RgbRaster`] de mêmes dimensions.
///
/// # Example
/// ```
/// use pa_core::frame::GrayRaster;
/// let gray = GrayRaster::from_raw(2, 1, vec![0, 255]).unwrap();
/// assert_eq!(gray.get(1, 0), 255);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayRaster {
    /// Samples, row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GrayRaster {
    /// Wrap raw grayscale samples.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(CoreError::InvalidInput(format!(
                "raster gris {width}×{height} : {} samples, {expected} attendus",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Sample at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Iterate over rows, top to bottom. Yields nothing for an empty raster.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // chunks(0) panics: an empty raster has no row to yield anyway.
        let width = (self.width as usize).max(1);
        self.data.chunks(width)
    }

    /// Same dimensions as `rgb`.
    #[must_use]
    pub fn matches(&self, rgb: &RgbRaster) -> bool {
        self.width == rgb.width && self.height == rgb.height
    }
}
