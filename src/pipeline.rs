//! The rasterize-then-reencode pipeline.

use lopdf::Document;

use crate::assemble::{write_document, OutputDocument};
use crate::encode::encode_jpeg;
use crate::error::{CompressError, DecodeError, RenderError};
use crate::format::{format_file_size, reduction_percent};
use crate::metadata::clear_descriptive_metadata;
use crate::preset::EncodingParams;
use crate::progress::{Progress, ProgressSink};
use crate::raster::{RasterDocument, Rasterizer};

const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Result of one run.
#[derive(Debug, Clone)]
pub struct CompressionOutcome {
    pub bytes: Vec<u8>,
    pub original_size: u64,
    pub compressed_size: u64,
    pub page_count: usize,
    /// `true` when the rasterized output was discarded.
    pub fell_back: bool,
}

impl CompressionOutcome {
    pub fn reduction_percent(&self) -> f64 {
        reduction_percent(self.original_size, self.compressed_size)
    }
}

/// Parses `source`, clears its descriptive metadata and re-serializes it.
pub fn strip_metadata(source: &[u8]) -> Result<Vec<u8>, CompressError> {
    if !source.starts_with(PDF_SIGNATURE) {
        return Err(DecodeError::MissingSignature.into());
    }

    let mut doc = Document::load_mem(source).map_err(DecodeError::from)?;
    if doc.is_encrypted() {
        if let Err(e) = doc.decrypt(b"") {
            log::warn!("Failed to decrypt with empty password: {:?}", e);
        }
    }

    clear_descriptive_metadata(&mut doc);
    Ok(write_document(&mut doc)?)
}

/// Rasterizes every page of `source` and rebuilds a PDF of JPEG pages.
///
/// `progress` gets exactly one update per page, in page order. If the
/// rebuilt PDF is larger than `source`, the metadata-stripped copy of the
/// source is returned instead, whatever its own size.
pub fn compress<R, S>(
    source: &[u8],
    params: EncodingParams,
    rasterizer: &R,
    progress: &mut S,
) -> Result<CompressionOutcome, CompressError>
where
    R: Rasterizer,
    S: ProgressSink + ?Sized,
{
    let original_size = source.len() as u64;
    let stripped = strip_metadata(source)?;

    let document = rasterizer.open(&stripped)?;
    let page_count = document.page_count();
    let quality = params.jpeg_quality();
    log::info!(
        "Rasterizing {} page(s) at scale {:.3}, JPEG quality {}",
        page_count,
        params.scale_factor,
        quality
    );

    let mut output = OutputDocument::new();
    for index in 0..page_count {
        let page = index + 1;
        let rendered = document.render_page(index, params.scale_factor)?;
        let (width, height) = rendered.bitmap.dimensions();
        let jpeg = encode_jpeg(&rendered.bitmap, quality)
            .map_err(|source| RenderError::Encode { page, source })?;
        log::debug!(
            "Page {}/{}: {}x{} px, {} bytes",
            page,
            page_count,
            width,
            height,
            jpeg.len()
        );
        output.push_jpeg_page(rendered.viewport, jpeg, width, height)?;

        progress.report(Progress::page(page, page_count));
    }
    drop(document);

    let rasterized = output.finish()?;
    let (bytes, fell_back) = choose_output(source, stripped, rasterized);

    let compressed_size = bytes.len() as u64;
    log::info!(
        "Original size: {}, compressed size: {}",
        format_file_size(original_size),
        format_file_size(compressed_size)
    );

    Ok(CompressionOutcome {
        bytes,
        original_size,
        compressed_size,
        page_count,
        fell_back,
    })
}

/// Picks what to hand back. The comparison is against the original input
/// size; a tie keeps the rasterized output.
fn choose_output(source: &[u8], stripped: Vec<u8>, rasterized: Vec<u8>) -> (Vec<u8>, bool) {
    if rasterized.len() <= source.len() {
        return (rasterized, false);
    }

    log::warn!(
        "Compression did not reduce size ({} > {} bytes), keeping original",
        rasterized.len(),
        source.len()
    );
    (stripped, true)
}
