//! Human-readable sizes and output naming.

pub const COMPRESSED_SUFFIX: &str = "_comprimido";
pub const DEFAULT_OUTPUT_NAME: &str = "compressed.pdf";

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with base-1024 units and at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Size reduction as a percentage of the original. Negative when the output grew.
pub fn reduction_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - compressed as f64) / original as f64 * 100.0
}

pub fn format_reduction(original: u64, compressed: u64) -> String {
    format!("{:.1}%", reduction_percent(original, compressed))
}

/// Derives the download name: drop the last extension, add the suffix.
///
/// `report.pdf` becomes `report_comprimido.pdf`. Names without a usable stem
/// fall back to [`DEFAULT_OUTPUT_NAME`].
pub fn compressed_file_name(original: Option<&str>) -> String {
    let stem = original
        .and_then(|name| name.rsplit_once('.'))
        .map(|(stem, _ext)| stem)
        .filter(|stem| !stem.is_empty());

    match stem {
        Some(stem) => format!("{}{}.pdf", stem, COMPRESSED_SUFFIX),
        None => DEFAULT_OUTPUT_NAME.to_string(),
    }
}
