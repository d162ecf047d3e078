use crate::error::CoreError;

/// 10 caractères — compact, bon contraste. Rampe par défaut.
pub const CHARSET_COMPACT: &str = " .:-=+*#%@";

/// 70 caractères — Paul Bourke extended, bon équilibre.
pub const CHARSET_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Blocs Unicode — pseudo-pixels.
pub const CHARSET_BLOCKS: &str = " ░▒▓█";

/// Minimal — haut contraste.
pub const CHARSET_MINIMAL: &str = " .:░▒▓█";

/// Named ramp presets, selectable with `--charset`.
pub const PRESETS: &[(&str, &str)] = &[
    ("compact", CHARSET_COMPACT),
    ("standard", CHARSET_STANDARD),
    ("blocks", CHARSET_BLOCKS),
    ("minimal", CHARSET_MINIMAL),
];

/// Look up a preset ramp by name.
///
/// # Example
/// ```
/// use pa_core::charset::{preset, CHARSET_BLOCKS};
/// assert_eq!(preset("blocks"), Some(CHARSET_BLOCKS));
/// assert_eq!(preset("nope"), None);
/// ```
#[must_use]
pub fn preset(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, ramp)| *ramp)
}

/// Quantifie une luminance [0..255] en caractère de la rampe.
///
/// La rampe est ordonnée du plus clair au plus dense. Chaque caractère couvre
/// `256 / len` valeurs consécutives; l'index est borné à `len - 1` pour que
/// la dernière tranche absorbe le reste (255 inclus).
///
/// Pré-calculé une fois par run : coût O(1) par pixel.
///
/// # Example
/// ```
/// use pa_core::charset::{CharacterMapper, CHARSET_COMPACT};
/// let mapper = CharacterMapper::new(CHARSET_COMPACT).unwrap();
/// assert_eq!(mapper.map(0), ' ');
/// assert_eq!(mapper.map(255), '@');
/// ```
#[derive(Clone, Debug)]
pub struct CharacterMapper {
    ramp: Vec<char>,
    bucket_width: usize,
    lut: [u8; 256],
}

impl CharacterMapper {
    /// Build a mapper from a ramp ordered lightest→densest.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] if the ramp is empty or longer than
    /// 256 characters (a bucket would be zero-wide).
    ///
    /// # Example
    /// ```
    /// use pa_core::charset::CharacterMapper;
    /// assert!(CharacterMapper::new("").is_err());
    /// let mapper = CharacterMapper::new(" #").unwrap();
    /// assert_eq!(mapper.bucket_width(), 128);
    /// ```
    pub fn new(ramp: &str) -> Result<Self, CoreError> {
        let ramp: Vec<char> = ramp.chars().collect();
        if ramp.is_empty() || ramp.len() > 256 {
            return Err(CoreError::InvalidInput(format!(
                "la rampe doit contenir entre 1 et 256 caractères (reçu {})",
                ramp.len()
            )));
        }
        let bucket_width = 256 / ramp.len();
        let last = ramp.len() - 1;
        let mut lut = [0u8; 256];
        for (v, slot) in lut.iter_mut().enumerate() {
            *slot = (v / bucket_width).min(last) as u8;
        }
        Ok(Self {
            ramp,
            bucket_width,
            lut,
        })
    }

    /// Ramp index for a luminance value, always in `[0, len - 1]`.
    ///
    /// # Example
    /// ```
    /// use pa_core::charset::{CharacterMapper, CHARSET_COMPACT};
    /// let mapper = CharacterMapper::new(CHARSET_COMPACT).unwrap();
    /// assert_eq!(mapper.index(76), 3);
    /// assert_eq!(mapper.index(255), 9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index(&self, luminance: u8) -> usize {
        usize::from(self.lut[usize::from(luminance)])
    }

    /// Map a luminance value [0..255] to a character.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.ramp[self.index(luminance)]
    }

    /// Number of luminance values covered by each ramp character.
    #[must_use]
    pub fn bucket_width(&self) -> usize {
        self.bucket_width
    }

    /// The ramp characters, lightest first.
    #[must_use]
    pub fn ramp(&self) -> &[char] {
        &self.ramp
    }
}
