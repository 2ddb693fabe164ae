use crate::preset::CompressionPreset;
use crate::source::MAX_SOURCE_BYTES;

/// Settings a session runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub preset: CompressionPreset,
    pub max_source_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: CompressionPreset::default(),
            max_source_bytes: MAX_SOURCE_BYTES,
        }
    }
}

impl Settings {
    pub fn with_preset(mut self, preset: CompressionPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Same as [`Settings::with_preset`] but takes a free-form name, which
    /// resolves leniently (unknown names mean `medium`).
    pub fn with_preset_name(self, name: Option<&str>) -> Self {
        self.with_preset(CompressionPreset::resolve(name))
    }
}
