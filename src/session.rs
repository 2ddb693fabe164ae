//! Caller-side state: one selected file, at most one result.

use crate::config::Settings;
use crate::error::{SessionError, ValidationError};
use crate::format::compressed_file_name;
use crate::pipeline::{compress, CompressionOutcome};
use crate::progress::{Progress, ProgressSink};
use crate::raster::Rasterizer;
use crate::source::{SourceDocument, PDF_MEDIA_TYPE};

/// A result ready to be saved or downloaded.
#[derive(Debug, Clone, Copy)]
pub struct Download<'a> {
    pub file_name: &'a str,
    pub media_type: &'static str,
    pub bytes: &'a [u8],
}

#[derive(Debug, Default)]
pub struct Session {
    settings: Settings,
    source: Option<SourceDocument>,
    output: Option<(String, CompressionOutcome)>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            source: None,
            output: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn source(&self) -> Option<&SourceDocument> {
        self.source.as_ref()
    }

    pub fn outcome(&self) -> Option<&CompressionOutcome> {
        self.output.as_ref().map(|(_, outcome)| outcome)
    }

    /// Accepts a new file. A rejected file leaves the session untouched; an
    /// accepted one replaces the previous file and drops its result.
    pub fn select(&mut self, source: SourceDocument) -> Result<(), ValidationError> {
        source.validate(self.settings.max_source_bytes)?;
        log::info!("Selected {} ({} bytes)", source.name(), source.size());
        self.source = Some(source);
        self.output = None;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.output = None;
    }

    /// Runs the pipeline on the selected file with the session's preset.
    ///
    /// On success a final 100% "done" update follows the per-page ones.
    /// Failures are logged and reported with one generic message.
    pub fn compress<R, S>(
        &mut self,
        rasterizer: &R,
        progress: &mut S,
    ) -> Result<&CompressionOutcome, SessionError>
    where
        R: Rasterizer,
        S: ProgressSink + ?Sized,
    {
        let source = self.source.as_ref().ok_or(SessionError::NoSource)?;
        self.output = None;

        let params = self.settings.preset.params();
        log::debug!("Compressing {} with preset {}", source.name(), self.settings.preset);

        let outcome = compress(source.bytes(), params, rasterizer, progress).map_err(|e| {
            log::error!("Compression of {} failed: {}", source.name(), e);
            SessionError::CompressionFailed(e)
        })?;
        progress.report(Progress::done());

        let file_name = compressed_file_name(Some(source.name()));
        let (_, outcome) = &*self.output.insert((file_name, outcome));
        Ok(outcome)
    }

    pub fn download(&self) -> Option<Download<'_>> {
        self.output.as_ref().map(|(file_name, outcome)| Download {
            file_name,
            media_type: PDF_MEDIA_TYPE,
            bytes: &outcome.bytes,
        })
    }
}
