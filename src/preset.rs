use std::fmt;

/// PDF user space unit: 72 points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Named compression tier.
///
/// The naming follows the amount of compression, not the fidelity: `High`
/// produces the smallest, lossiest output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CompressionPreset {
    Low,
    #[default]
    Medium,
    High,
}

/// Concrete encoder settings for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodingParams {
    /// JPEG quality in `(0, 1]`.
    pub quality_factor: f32,
    /// Render resolution relative to 72 DPI.
    pub scale_factor: f32,
}

impl CompressionPreset {
    /// Looks up a preset by name. Unknown or missing names yield `Medium`.
    ///
    /// Permissive on purpose: an unexpected name still runs, as `Medium`.
    /// Do not turn this into a validation error.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(n) if n.eq_ignore_ascii_case("low") => Self::Low,
            Some(n) if n.eq_ignore_ascii_case("high") => Self::High,
            _ => Self::Medium,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn dpi(self) -> f32 {
        match self {
            Self::Low => 150.0,
            Self::Medium => 120.0,
            Self::High => 90.0,
        }
    }

    pub fn quality_factor(self) -> f32 {
        match self {
            Self::Low => 0.85,
            Self::Medium => 0.65,
            Self::High => 0.40,
        }
    }

    pub fn params(self) -> EncodingParams {
        EncodingParams {
            quality_factor: self.quality_factor(),
            scale_factor: self.dpi() / POINTS_PER_INCH,
        }
    }
}

impl fmt::Display for CompressionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a preset name straight to encoder settings.
///
/// Total over its input: see [`CompressionPreset::resolve`].
pub fn resolve(name: Option<&str>) -> EncodingParams {
    CompressionPreset::resolve(name).params()
}

impl EncodingParams {
    /// Quality on the JPEG encoder's 1..=100 scale.
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality_factor * 100.0).round().clamp(1.0, 100.0) as u8
    }
}
