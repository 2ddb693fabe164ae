//! Page rasterization.
//!
//! The pipeline only sees the [`Rasterizer`] / [`RasterDocument`] pair; the
//! PDFium binding below is the production backend.

use image::{DynamicImage, RgbImage, RgbaImage};
use pdfium_render::prelude::*;

use crate::error::{DecodeError, RenderError};

/// Size of a rendered page, in output points (page points times scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Scales a page size given in PDF points, uniformly on both axes.
    pub fn scaled(page_width: f32, page_height: f32, scale: f32) -> Self {
        Self {
            width: page_width * scale,
            height: page_height * scale,
        }
    }

    /// Bitmap dimensions: fractional pixels are dropped, never below 1.
    pub fn pixel_size(&self) -> (u32, u32) {
        (to_pixels(self.width), to_pixels(self.height))
    }
}

fn to_pixels(points: f32) -> u32 {
    if points.is_finite() && points >= 1.0 {
        points.floor() as u32
    } else {
        1
    }
}

pub struct RenderedPage {
    pub viewport: Viewport,
    pub bitmap: RgbImage,
}

/// Opens PDF bytes for page-by-page rendering.
pub trait Rasterizer {
    type Document<'a>: RasterDocument
    where
        Self: 'a;

    fn open<'a>(&'a self, pdf: &'a [u8]) -> Result<Self::Document<'a>, DecodeError>;
}

pub trait RasterDocument {
    fn page_count(&self) -> usize;

    /// Renders the zero-based page `index` at `scale`.
    fn render_page(&self, index: usize, scale: f32) -> Result<RenderedPage, RenderError>;
}

/// Renders with a PDFium shared library.
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
}

impl PdfiumRasterizer {
    /// Binds to `libpdfium` in the working directory, falling back to the system library.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn bind() -> Result<Self, RenderError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| RenderError::Unavailable(format!("{:?}", e)))?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Binds to the PDFium module the host page has already loaded.
    #[cfg(target_arch = "wasm32")]
    pub fn bind() -> Result<Self, RenderError> {
        let bindings = Pdfium::bind_to_system_library()
            .map_err(|e| RenderError::Unavailable(format!("{:?}", e)))?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Binds to an explicit library file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn bind_to(path: &std::path::Path) -> Result<Self, RenderError> {
        let bindings = Pdfium::bind_to_library(path)
            .map_err(|e| RenderError::Unavailable(format!("{}: {:?}", path.display(), e)))?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl Rasterizer for PdfiumRasterizer {
    type Document<'a> = PdfiumDocument<'a>;

    fn open<'a>(&'a self, pdf: &'a [u8]) -> Result<PdfiumDocument<'a>, DecodeError> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(pdf, None)
            .map_err(|e| DecodeError::Open(format!("{:?}", e)))?;
        Ok(PdfiumDocument { document })
    }
}

pub struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl RasterDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<RenderedPage, RenderError> {
        let page_error = |message: String| RenderError::Page {
            page: index + 1,
            message,
        };

        let page = self
            .document
            .pages()
            .get(index as PdfPageIndex)
            .map_err(|e| page_error(format!("{:?}", e)))?;

        let viewport = Viewport::scaled(page.width().value, page.height().value, scale);
        let (width, height) = viewport.pixel_size();

        let render_config = PdfRenderConfig::new()
            .set_target_width(width as i32)
            .set_target_height(height as i32);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| page_error(format!("{:?}", e)))?;

        // Go through raw RGBA so we don't depend on pdfium-render's `image` version.
        let rgba = RgbaImage::from_raw(
            bitmap.width() as u32,
            bitmap.height() as u32,
            bitmap.as_rgba_bytes(),
        )
        .ok_or_else(|| page_error("bitmap buffer does not match its dimensions".to_string()))?;

        Ok(RenderedPage {
            viewport,
            bitmap: DynamicImage::ImageRgba8(rgba).to_rgb8(),
        })
    }
}
