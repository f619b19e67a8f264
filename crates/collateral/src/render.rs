//! The paginating PDF renderer: page geometry, the page decorator, and the
//! two-pass protocol that stamps trailing page numbers.
//!
//! Total page count is only known after the whole flow has been laid out
//! once, so rendering happens in two strictly separated phases:
//!
//! 1. [`LayoutPass`] replays the flow into a discard sink with the footer
//!    region reserved but empty, and captures a [`Layout`]: the page count
//!    and the start page of every section mark.
//! 2. [`StampPass`] consumes that [`Layout`] by value and replays the same
//!    immutable flow, stamping `Page i of N` on every page after the cover.
//!
//! Because a `Layout` can only exist once the first pass has finished, the
//! accumulate and stamp phases cannot interleave.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

use genpdf::elements::Paragraph;
use genpdf::error::{Error as PdfError, ErrorKind};
use genpdf::style::{Style, StyledString};
use genpdf::{Alignment, Document, Element, Margins, Mm, PageDecorator, Position, Size};

use crate::elements::{realize, SectionMarker};
use crate::fonts;
use crate::model::DocumentFlow;
use crate::theme::{BrandTheme, StyleName};

const LETTER_WIDTH_MM: f64 = 215.9;
const LETTER_HEIGHT_MM: f64 = 279.4;
const DEFAULT_MARGIN_MM: f64 = 19.05;
const DEFAULT_FOOTER_HEIGHT_MM: f64 = 12.7;

/// Page orientation for letter-format documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Fixed page geometry for one document: paper size, margins, and the height
/// reserved for the page-number footer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_mm: f64,
    pub footer_height_mm: f64,
}

impl PageGeometry {
    /// US letter with the original collateral's 0.75 inch margins.
    pub fn letter(orientation: Orientation) -> Self {
        let (width_mm, height_mm) = match orientation {
            Orientation::Portrait => (LETTER_WIDTH_MM, LETTER_HEIGHT_MM),
            Orientation::Landscape => (LETTER_HEIGHT_MM, LETTER_WIDTH_MM),
        };
        Self {
            width_mm,
            height_mm,
            margin_mm: DEFAULT_MARGIN_MM,
            footer_height_mm: DEFAULT_FOOTER_HEIGHT_MM,
        }
    }

    fn paper_size(&self) -> Size {
        Size::new(self.width_mm, self.height_mm)
    }

    fn margins(&self) -> Margins {
        Margins::trbl(
            self.margin_mm,
            self.margin_mm,
            self.margin_mm,
            self.margin_mm,
        )
    }
}

/// Errors surfaced by the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to resolve a font family: {0}")]
    Fonts(#[source] PdfError),
    #[error("failed to render document: {0}")]
    Pdf(#[source] PdfError),
    #[error("replay produced {actual} pages but the layout captured {expected}")]
    PageCountDrift { expected: usize, actual: usize },
}

/// The snapshot captured by the layout pass: everything the stamp pass needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    page_count: usize,
    section_pages: Vec<Option<usize>>,
}

impl Layout {
    /// Total number of pages the flow occupies.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// 1-indexed start page per section mark, in flow order.  `None` means the
    /// section never rendered (an empty trailing section).
    pub fn section_pages(&self) -> &[Option<usize>] {
        &self.section_pages
    }
}

/// A finished PDF together with the layout it was stamped from.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub layout: Layout,
}

/// The footer label for `page` out of `total`.
///
/// The cover page carries no number; every later page reads `Page i of N`.
pub fn page_number_label(page: usize, total: usize) -> Option<String> {
    if page <= 1 {
        None
    } else {
        Some(format!("Page {} of {}", page, total))
    }
}

#[derive(Clone, Copy, Debug)]
enum FooterMode {
    /// Reserve the footer region without drawing into it (layout pass).
    Reserve,
    /// Stamp page numbers against the known total (stamp pass).
    Stamp { total: usize },
}

/// Page decorator applying margins, counting pages, and managing the footer
/// region.  Both passes use it with the same footer height so pagination is
/// identical; only the stamped text differs.
struct PageChrome {
    page: Rc<Cell<usize>>,
    margins: Margins,
    footer_height: Mm,
    mode: FooterMode,
    number_style: Style,
}

impl PageChrome {
    fn new(
        page: Rc<Cell<usize>>,
        geometry: &PageGeometry,
        mode: FooterMode,
        number_style: Style,
    ) -> Self {
        Self {
            page,
            margins: geometry.margins(),
            footer_height: Mm::from(printpdf::Mm(geometry.footer_height_mm)),
            mode,
            number_style,
        }
    }
}

impl PageDecorator for PageChrome {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: Style,
    ) -> Result<genpdf::render::Area<'a>, PdfError> {
        let page = self.page.get() + 1;
        self.page.set(page);

        area.add_margins(self.margins);

        let available = area.size().height;
        if self.footer_height > available {
            return Err(PdfError::new(
                "Footer height exceeds available space",
                ErrorKind::InvalidData,
            ));
        }

        if let FooterMode::Stamp { total } = self.mode {
            if let Some(label) = page_number_label(page, total) {
                let mut footer_area = area.clone();
                footer_area.add_offset(Position::new(0, available - self.footer_height));

                let mut element = Paragraph::default();
                element.push(StyledString::new(label, self.number_style.clone()));
                element.set_alignment(Alignment::Right);

                let result = element.render(context, footer_area, style)?;
                if result.has_more {
                    return Err(PdfError::new(
                        "Page number does not fit into the reserved footer",
                        ErrorKind::PageSizeExceeded,
                    ));
                }
            }
        }

        area.set_height(available - self.footer_height);
        Ok(area)
    }
}

fn build_document(
    flow: &DocumentFlow,
    theme: &BrandTheme,
    geometry: &PageGeometry,
    title: &str,
    mode: FooterMode,
    page_counter: Rc<Cell<usize>>,
    section_pages: Rc<RefCell<Vec<Option<usize>>>>,
) -> Result<Document, RenderError> {
    let family = fonts::default_font_family().map_err(RenderError::Fonts)?;
    let mut document = Document::new(family);
    document.set_title(title);
    document.set_paper_size(geometry.paper_size());

    let number_style = theme.style(StyleName::PageNumber).text_style();
    document.set_page_decorator(PageChrome::new(
        Rc::clone(&page_counter),
        geometry,
        mode,
        number_style,
    ));

    let mut marks = flow.sections().iter().enumerate().peekable();
    for (index, block) in flow.blocks().iter().enumerate() {
        while marks
            .peek()
            .is_some_and(|(_, mark)| mark.block_index() == index)
        {
            let (mark_index, _) = marks.next().expect("peeked mark");
            document.push(SectionMarker::new(
                Rc::clone(&page_counter),
                Rc::clone(&section_pages),
                mark_index,
            ));
        }
        document.push(realize(block, theme).map_err(RenderError::Pdf)?);
    }
    for (mark_index, _) in marks {
        document.push(SectionMarker::new(
            Rc::clone(&page_counter),
            Rc::clone(&section_pages),
            mark_index,
        ));
    }

    Ok(document)
}

/// First phase: lay the flow out once and capture the [`Layout`] snapshot.
pub struct LayoutPass;

impl LayoutPass {
    pub fn run(
        flow: &DocumentFlow,
        theme: &BrandTheme,
        geometry: &PageGeometry,
        title: &str,
    ) -> Result<Layout, RenderError> {
        let page_counter = Rc::new(Cell::new(0));
        let section_pages = Rc::new(RefCell::new(vec![None; flow.sections().len()]));

        let document = build_document(
            flow,
            theme,
            geometry,
            title,
            FooterMode::Reserve,
            Rc::clone(&page_counter),
            Rc::clone(&section_pages),
        )?;

        let mut sink = Vec::new();
        document.render(&mut sink).map_err(RenderError::Pdf)?;

        let captured = section_pages.borrow().clone();
        Ok(Layout {
            page_count: page_counter.get(),
            section_pages: captured,
        })
    }
}

/// Second phase: replay the flow and stamp `Page i of N` against the captured
/// total.  Consumes the [`Layout`] so stamping cannot start before layout has
/// completed.
pub struct StampPass;

impl StampPass {
    pub fn run(
        flow: &DocumentFlow,
        theme: &BrandTheme,
        geometry: &PageGeometry,
        title: &str,
        layout: Layout,
    ) -> Result<RenderedDocument, RenderError> {
        let page_counter = Rc::new(Cell::new(0));
        let section_pages = Rc::new(RefCell::new(vec![None; flow.sections().len()]));

        let document = build_document(
            flow,
            theme,
            geometry,
            title,
            FooterMode::Stamp {
                total: layout.page_count,
            },
            Rc::clone(&page_counter),
            Rc::clone(&section_pages),
        )?;

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(RenderError::Pdf)?;

        // Replays of an immutable flow are deterministic; drift means an
        // external input (an image file on disk) changed between passes.
        let actual = page_counter.get();
        if actual != layout.page_count {
            return Err(RenderError::PageCountDrift {
                expected: layout.page_count,
                actual,
            });
        }

        Ok(RenderedDocument { bytes, layout })
    }
}

/// Runs both passes in order.
pub fn render(
    flow: &DocumentFlow,
    theme: &BrandTheme,
    geometry: &PageGeometry,
    title: &str,
) -> Result<RenderedDocument, RenderError> {
    let layout = LayoutPass::run(flow, theme, geometry, title)?;
    StampPass::run(flow, theme, geometry, title, layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_page_carries_no_number() {
        assert_eq!(page_number_label(1, 12), None);
    }

    #[test]
    fn later_pages_are_stamped_with_the_total() {
        assert_eq!(page_number_label(2, 12).as_deref(), Some("Page 2 of 12"));
        assert_eq!(page_number_label(12, 12).as_deref(), Some("Page 12 of 12"));
    }

    #[test]
    fn landscape_letter_swaps_dimensions() {
        let portrait = PageGeometry::letter(Orientation::Portrait);
        let landscape = PageGeometry::letter(Orientation::Landscape);
        assert_eq!(portrait.width_mm, landscape.height_mm);
        assert_eq!(portrait.height_mm, landscape.width_mm);
        assert!(landscape.width_mm > landscape.height_mm);
    }
}
