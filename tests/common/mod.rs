#![allow(dead_code)]

use std::cell::Cell;

use image::{Rgb, RgbImage};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use pdf_raster_compressor::{
    DecodeError, RasterDocument, Rasterizer, RenderError, RenderedPage, Viewport,
};

/// Builds a PDF with one page per `(width, height)` MediaBox.
///
/// `padding` adds an unreferenced stream of that many bytes, to make the
/// source larger than any rasterized output. `info` fills the document
/// information dictionary.
pub fn build_pdf(page_sizes: &[(i64, i64)], padding: usize, info: bool) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for &(width, height) in page_sizes {
        let content_id = doc.add_object(Stream::new(
            lopdf::Dictionary::new(),
            b"0 0 1 rg 10 10 50 50 re f".to_vec(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_sizes.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if padding > 0 {
        let junk: Vec<u8> = (0..padding).map(|i| (i * 31 % 251) as u8).collect();
        let mut stream = Stream::new(lopdf::Dictionary::new(), junk);
        stream.allows_compression = false;
        doc.add_object(stream);
    }

    if info {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal("A rather long confidential title"),
            "Author" => Object::string_literal("Somebody Important"),
            "Subject" => Object::string_literal("Testing"),
            "Keywords" => Object::string_literal("pdf, raster, jpeg"),
            "Producer" => Object::string_literal("Fixture Builder 1.0"),
            "Creator" => Object::string_literal("Integration tests"),
        });
        doc.trailer.set("Info", info_id);
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

#[derive(Debug, Clone, Copy)]
pub enum Fill {
    /// Flat white, compresses to almost nothing.
    Blank,
    /// Per-pixel pseudo-random colours, compresses badly.
    Noise,
}

/// Renders pages from their MediaBox without a real PDF engine.
pub struct FakeRasterizer {
    pub fill: Fill,
    /// 1-based page that fails to render.
    pub fail_on_page: Option<usize>,
    /// Pages passed to `render_page`, in call order.
    pub rendered: Cell<Vec<usize>>,
}

impl FakeRasterizer {
    pub fn new(fill: Fill) -> Self {
        Self {
            fill,
            fail_on_page: None,
            rendered: Cell::new(Vec::new()),
        }
    }

    pub fn failing_on(page: usize) -> Self {
        Self {
            fail_on_page: Some(page),
            ..Self::new(Fill::Blank)
        }
    }

    pub fn rendered_pages(&self) -> Vec<usize> {
        let pages = self.rendered.take();
        self.rendered.set(pages.clone());
        pages
    }
}

pub struct FakeDocument<'a> {
    rasterizer: &'a FakeRasterizer,
    page_sizes: Vec<(f32, f32)>,
}

impl Rasterizer for FakeRasterizer {
    type Document<'a> = FakeDocument<'a>;

    fn open<'a>(&'a self, pdf: &'a [u8]) -> Result<FakeDocument<'a>, DecodeError> {
        let doc = Document::load_mem(pdf)?;
        let page_sizes = doc
            .get_pages()
            .values()
            .map(|&id| media_box_size(&doc, id))
            .collect();
        Ok(FakeDocument {
            rasterizer: self,
            page_sizes,
        })
    }
}

impl RasterDocument for FakeDocument<'_> {
    fn page_count(&self) -> usize {
        self.page_sizes.len()
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<RenderedPage, RenderError> {
        let page = index + 1;
        let mut rendered = self.rasterizer.rendered.take();
        rendered.push(page);
        self.rasterizer.rendered.set(rendered);

        if self.rasterizer.fail_on_page == Some(page) {
            return Err(RenderError::Page {
                page,
                message: "simulated failure".to_string(),
            });
        }

        let (width, height) = self.page_sizes[index];
        let viewport = Viewport::scaled(width, height, scale);
        let (px_width, px_height) = viewport.pixel_size();
        let bitmap = match self.rasterizer.fill {
            Fill::Blank => RgbImage::from_pixel(px_width, px_height, Rgb([255, 255, 255])),
            Fill::Noise => {
                let mut state: u32 = 0x2545_F491 ^ page as u32;
                RgbImage::from_fn(px_width, px_height, |_, _| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    let [r, g, b, _] = state.to_le_bytes();
                    Rgb([r, g, b])
                })
            }
        };
        Ok(RenderedPage { viewport, bitmap })
    }
}

fn media_box_size(doc: &Document, page_id: ObjectId) -> (f32, f32) {
    let media_box = doc
        .get_dictionary(page_id)
        .and_then(|page| page.get(b"MediaBox"))
        .and_then(|mb| mb.as_array())
        .expect("fixture pages carry a MediaBox");
    let values: Vec<f32> = media_box.iter().map(|o| o.as_float().unwrap()).collect();
    (values[2] - values[0], values[3] - values[1])
}

/// MediaBox width and height of every page, in page order.
pub fn page_sizes(pdf: &[u8]) -> Vec<(f32, f32)> {
    let doc = Document::load_mem(pdf).expect("output is a valid PDF");
    doc.get_pages()
        .values()
        .map(|&id| media_box_size(&doc, id))
        .collect()
}
