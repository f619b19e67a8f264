//! Realization of [`ContentBlock`]s as `genpdf` elements.
//!
//! This module owns all knowledge of the rendering crate: paragraph and span
//! styling, table layout, captioned images with graceful decode fallbacks, and
//! the small custom elements (vertical space, section markers) the renderer
//! needs beyond what `genpdf` ships with.

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use image::GenericImageView;
use log::warn;

use genpdf::elements::{
    BulletPoint, FrameCellDecorator, FramedElement, Image, LinearLayout, PageBreak, Paragraph,
    TableLayout,
};
use genpdf::error::{Context as _, Error};
use genpdf::style::Style;
use genpdf::{render, Alignment, Element, Margins, Mm, Position, RenderResult, Scale, Size};

use crate::model::{self, ContentBlock, ImageBlock, ImageSource, TableBlock};
use crate::richtext::Span;
use crate::theme::{BrandTheme, StyleName, StyleSpec};

const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;
const DEFAULT_CAPTION_SPACING_MM: f64 = 2.0;
const CALLOUT_PADDING_MM: f64 = 4.0;
const BULLET_GLYPH: &str = "•";

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Maps the model alignment onto `genpdf`'s; justified copy falls back to
/// left-aligned since the backend has no justification.
pub fn alignment(value: model::Alignment) -> Alignment {
    match value {
        model::Alignment::Left | model::Alignment::Justified => Alignment::Left,
        model::Alignment::Center => Alignment::Center,
        model::Alignment::Right => Alignment::Right,
    }
}

/// Loads an image from in-memory bytes with descriptive errors.
pub fn decode_image_from_bytes(bytes: impl AsRef<[u8]>) -> Result<image::DynamicImage, Error> {
    image::load_from_memory(bytes.as_ref()).context("Failed to decode image from provided bytes")
}

/// Loads an image from the given path with descriptive errors.
pub fn decode_image_from_path(path: impl AsRef<Path>) -> Result<image::DynamicImage, Error> {
    let path = path.as_ref();
    let reader = image::io::Reader::open(path)
        .with_context(|| format!("Failed to open image file {}", path.display()))?;
    reader
        .with_guessed_format()
        .context("Unable to determine image format")?
        .decode()
        .with_context(|| format!("Failed to decode image file {}", path.display()))
}

fn estimated_image_size(image: &image::DynamicImage, dpi: f64) -> Size {
    let (px_width, px_height) = image.dimensions();
    let width_mm = MM_PER_INCH * (px_width as f64) / dpi;
    let height_mm = MM_PER_INCH * (px_height as f64) / dpi;
    Size::new(mm_from_f64(width_mm), mm_from_f64(height_mm))
}

fn image_from_dynamic(image: image::DynamicImage) -> Result<(Image, Size), Error> {
    let size = estimated_image_size(&image, DEFAULT_IMAGE_DPI);
    let image = Image::from_dynamic_image(image)?;
    Ok((image, size))
}

/// An image with an optional caption stacked underneath, sharing alignment
/// and an optional width constraint.
pub struct CaptionedImage {
    image: Image,
    caption: Option<Paragraph>,
    alignment: Alignment,
    natural_size: Size,
    requested_width: Option<Mm>,
    spacing: Mm,
}

impl CaptionedImage {
    fn new(image: Image, natural_size: Size) -> Self {
        Self {
            image,
            caption: None,
            alignment: Alignment::Left,
            natural_size,
            requested_width: None,
            spacing: mm_from_f64(DEFAULT_CAPTION_SPACING_MM),
        }
    }

    /// Creates the element from a decoded image.
    pub fn from_dynamic_image(image: image::DynamicImage) -> Result<Self, Error> {
        let (image, size) = image_from_dynamic(image)?;
        Ok(Self::new(image, size))
    }

    pub fn with_caption(mut self, caption: impl Into<Option<Paragraph>>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Constrains the rendered width while keeping the aspect ratio.
    pub fn with_width(mut self, width: impl Into<Option<Mm>>) -> Self {
        self.requested_width = width.into();
        self
    }

    fn apply_alignment(&mut self) {
        self.image.set_alignment(self.alignment);
        if let Some(caption) = &mut self.caption {
            caption.set_alignment(self.alignment);
        }
    }

    fn apply_width(&mut self) {
        if let Some(width) = self.requested_width {
            let natural = mm_to_f64(self.natural_size.width);
            if natural > f64::EPSILON {
                let scale = mm_to_f64(width) / natural;
                self.image.set_scale(Scale::new(scale, scale));
            }
        } else {
            self.image.set_scale(Scale::new(1.0, 1.0));
        }
    }
}

impl Element for CaptionedImage {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        self.apply_alignment();
        self.apply_width();

        let mut result = RenderResult::default();
        let image_result = self.image.render(context, area.clone(), style)?;
        result.size = result.size.stack_vertical(image_result.size);
        result.has_more |= image_result.has_more;

        if let Some(caption) = &mut self.caption {
            let spacing = self.spacing;
            area.add_offset(Position::new(0, image_result.size.height + spacing));
            result.size = result.size.stack_vertical(Size::new(0, spacing));

            let caption_result = caption.render(context, area, style)?;
            result.size = result.size.stack_vertical(caption_result.size);
            result.has_more |= caption_result.has_more;
        }

        Ok(result)
    }
}

/// A fixed vertical gap, clamped to the space left on the page.
pub struct VSpace {
    height: Mm,
}

impl VSpace {
    pub fn new(height_mm: f64) -> Self {
        Self {
            height: mm_from_f64(height_mm),
        }
    }
}

impl Element for VSpace {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let height = if self.height > area.size().height {
            area.size().height
        } else {
            self.height
        };
        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// A zero-size element that records the page it was rendered on.
///
/// The layout pass plants one of these at each section start; the page counter
/// cell is shared with the page decorator, which bumps it whenever a new page
/// begins.  Only the first render is recorded so re-rendering after a page
/// overflow cannot move a section forward.
pub struct SectionMarker {
    current_page: Rc<Cell<usize>>,
    pages: Rc<RefCell<Vec<Option<usize>>>>,
    index: usize,
}

impl SectionMarker {
    pub fn new(
        current_page: Rc<Cell<usize>>,
        pages: Rc<RefCell<Vec<Option<usize>>>>,
        index: usize,
    ) -> Self {
        Self {
            current_page,
            pages,
            index,
        }
    }
}

impl Element for SectionMarker {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        _area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut pages = self.pages.borrow_mut();
        if let Some(slot) = pages.get_mut(self.index) {
            if slot.is_none() {
                *slot = Some(self.current_page.get());
            }
        }
        Ok(RenderResult::default())
    }
}

/// A realized block, ready to be pushed into a `genpdf::Document`.
pub struct Realized(Box<dyn Element>);

impl Realized {
    fn new(element: impl Element + 'static) -> Self {
        Self(Box::new(element))
    }
}

impl Element for Realized {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        self.0.render(context, area, style)
    }
}

fn paragraph(spans: &[Span], spec: &StyleSpec) -> Paragraph {
    let base = spec.text_style();
    let mut paragraph = Paragraph::default();
    for span in spans {
        paragraph.push(span.styled_string(&base));
    }
    paragraph.set_alignment(alignment(spec.alignment));
    paragraph
}

fn with_space_after(element: impl Element + 'static, spec: &StyleSpec) -> Realized {
    if spec.space_after_mm > 0.0 {
        Realized::new(element.padded(Margins::trbl(0.0, 0.0, spec.space_after_mm, 0.0)))
    } else {
        Realized::new(element)
    }
}

fn realize_paragraph(spans: &[Span], spec: &StyleSpec) -> Realized {
    let body = paragraph(spans, spec);
    if spec.framed {
        let boxed = FramedElement::new(body.padded(Margins::trbl(
            CALLOUT_PADDING_MM,
            CALLOUT_PADDING_MM,
            CALLOUT_PADDING_MM,
            CALLOUT_PADDING_MM,
        )));
        with_space_after(boxed, spec)
    } else {
        with_space_after(body, spec)
    }
}

fn realize_bullets(items: &[Vec<Span>], spec: &StyleSpec) -> Realized {
    let mut layout = LinearLayout::vertical();
    for item in items {
        layout.push(BulletPoint::new(paragraph(item, spec)).with_bullet(BULLET_GLYPH));
    }
    with_space_after(layout, spec)
}

fn realize_table(table: &TableBlock, theme: &BrandTheme) -> Result<Realized, Error> {
    let mut layout = TableLayout::new(table.column_weights().to_vec());
    layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let header_spec = theme.style(StyleName::TableHeader);
    let mut header_row = layout.row();
    for cell in table.header() {
        header_row.push_element(paragraph(cell, header_spec).padded(1));
    }
    header_row.push()?;

    let cell_spec = theme.style(StyleName::TableCell);
    for cells in table.rows() {
        let mut row = layout.row();
        for cell in cells {
            row.push_element(paragraph(cell, cell_spec).padded(1));
        }
        row.push()?;
    }

    Ok(with_space_after(layout, theme.style(StyleName::Body)))
}

fn realize_image(block: &ImageBlock, theme: &BrandTheme) -> Realized {
    let decoded = match block.source() {
        ImageSource::Bytes(bytes) => decode_image_from_bytes(bytes),
        ImageSource::Path(path) => decode_image_from_path(path),
    };

    let decoded = match decoded {
        Ok(image) => image,
        Err(err) => {
            // Missing or broken assets degrade to a visible placeholder; the
            // document itself must still render.
            warn!("substituting placeholder for image: {}", err);
            let spec = theme.style(StyleName::Caption);
            let spans = [Span::new("[ image unavailable ]").italic()];
            return realize_paragraph(&spans, spec);
        }
    };

    let mut element = match CaptionedImage::from_dynamic_image(decoded) {
        Ok(element) => element,
        Err(err) => {
            warn!("substituting placeholder for image: {}", err);
            let spec = theme.style(StyleName::Caption);
            let spans = [Span::new("[ image unavailable ]").italic()];
            return realize_paragraph(&spans, spec);
        }
    };

    element = element.with_alignment(alignment(block.alignment()));
    if let Some(width_mm) = block.width_mm() {
        element = element.with_width(mm_from_f64(width_mm));
    }
    if let Some(caption) = block.caption() {
        element = element.with_caption(paragraph(caption, theme.style(StyleName::Caption)));
    }

    with_space_after(element, theme.style(StyleName::Caption))
}

/// Converts one content block into a renderable element.
pub fn realize(block: &ContentBlock, theme: &BrandTheme) -> Result<Realized, Error> {
    match block {
        ContentBlock::Heading { level, spans } => {
            Ok(realize_paragraph(spans, theme.style(level.style())))
        }
        ContentBlock::Paragraph { style, spans } => {
            Ok(realize_paragraph(spans, theme.style(*style)))
        }
        ContentBlock::BulletList { items } => {
            Ok(realize_bullets(items, theme.style(StyleName::Bullet)))
        }
        ContentBlock::Table(table) => realize_table(table, theme),
        ContentBlock::Image(image) => Ok(realize_image(image, theme)),
        ContentBlock::Spacer { height_mm } => Ok(Realized::new(VSpace::new(*height_mm))),
        ContentBlock::PageBreak => Ok(Realized::new(PageBreak::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn justified_maps_to_left() {
        assert_eq!(alignment(model::Alignment::Justified), Alignment::Left);
        assert_eq!(alignment(model::Alignment::Right), Alignment::Right);
    }

    #[test]
    fn section_marker_records_first_page_only() {
        let current = Rc::new(Cell::new(3));
        let pages = Rc::new(RefCell::new(vec![None]));
        let mut marker = SectionMarker::new(Rc::clone(&current), Rc::clone(&pages), 0);

        // Drive the recording logic directly; rendering needs a font cache.
        let record = |marker: &mut SectionMarker| {
            let mut pages = marker.pages.borrow_mut();
            if let Some(slot) = pages.get_mut(marker.index) {
                if slot.is_none() {
                    *slot = Some(marker.current_page.get());
                }
            }
        };
        record(&mut marker);
        current.set(5);
        record(&mut marker);

        assert_eq!(*pages.borrow(), vec![Some(3)]);
    }
}
