//! Shrinks PDFs by rasterizing every page to a JPEG and rebuilding the
//! document from those images.

use wasm_bindgen::prelude::*;

pub mod assemble;
pub mod config;
pub mod encode;
pub mod error;
pub mod format;
pub mod messages;
pub mod metadata;
pub mod pipeline;
pub mod preset;
pub mod progress;
pub mod raster;
pub mod session;
pub mod source;

pub use config::Settings;
pub use error::{CompressError, DecodeError, RenderError, SessionError, ValidationError};
pub use pipeline::{compress, strip_metadata, CompressionOutcome};
pub use preset::{resolve, CompressionPreset, EncodingParams};
pub use progress::{ChannelProgress, Progress, ProgressSink};
pub use raster::{PdfiumRasterizer, RasterDocument, Rasterizer, RenderedPage, Viewport};
pub use session::{Download, Session};
pub use source::SourceDocument;

/// Browser entry point.
///
/// `preset` is resolved leniently (unknown or missing means medium).
/// `on_progress`, when given, is called as `on_progress(percent, label)`.
#[wasm_bindgen]
pub fn compress_pdf(
    input: &[u8],
    preset: Option<String>,
    on_progress: Option<js_sys::Function>,
) -> Result<Vec<u8>, JsError> {
    let params = resolve(preset.as_deref());
    let rasterizer = PdfiumRasterizer::bind().map_err(|e| {
        web_sys::console::error_1(&format!("PDFium unavailable: {}", e).into());
        JsError::new(messages::COMPRESSION_FAILED)
    })?;

    let mut report = |progress: Progress| {
        if let Some(callback) = &on_progress {
            if let Err(e) = callback.call2(
                &JsValue::NULL,
                &JsValue::from(progress.percent),
                &JsValue::from_str(&progress.label),
            ) {
                web_sys::console::warn_1(&format!("Progress callback failed: {:?}", e).into());
            }
        }
    };

    let outcome = compress(input, params, &rasterizer, &mut report).map_err(|e| {
        web_sys::console::error_1(&format!("Compression failed: {}", e).into());
        JsError::new(messages::COMPRESSION_FAILED)
    })?;
    if outcome.fell_back {
        web_sys::console::warn_1(&"Compression did not reduce size, keeping original.".into());
    }
    report(Progress::done());

    Ok(outcome.bytes)
}

/// Checks a picked file's declared type and size before its bytes are read.
///
/// The error carries the same localized message the session would report.
#[wasm_bindgen(js_name = validateFile)]
pub fn validate_file(media_type: &str, size: f64) -> Result<(), JsError> {
    check_file(media_type, size).map_err(|e| JsError::new(&e.to_string()))
}

fn check_file(media_type: &str, size: f64) -> Result<(), ValidationError> {
    source::validate(media_type, size.max(0.0) as u64, source::MAX_SOURCE_BYTES)
}

#[wasm_bindgen(js_name = compressedFileName)]
pub fn compressed_file_name(name: Option<String>) -> String {
    format::compressed_file_name(name.as_deref())
}

#[wasm_bindgen(js_name = formatFileSize)]
pub fn format_file_size(bytes: f64) -> String {
    format::format_file_size(bytes.max(0.0) as u64)
}
