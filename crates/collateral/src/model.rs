//! The logical content model: blocks, tables, images, and the document flow.
//!
//! Values in this module describe *what* a document says, never how it is laid
//! out.  Blocks are appended to a [`DocumentFlow`] during a single build pass
//! and consumed once by the renderer; nothing here knows about page geometry.

use std::path::PathBuf;

use thiserror::Error;

use crate::richtext::{ParseError, Span};
use crate::theme::StyleName;

/// Horizontal alignment for text and images.
///
/// `Justified` exists for body copy; backends without native justification
/// (genpdf) fall back to left alignment at the element boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// Heading levels, mapped onto the theme's heading styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// The style registered for this heading level.
    pub fn style(self) -> StyleName {
        match self {
            HeadingLevel::H1 => StyleName::H1,
            HeadingLevel::H2 => StyleName::H2,
            HeadingLevel::H3 => StyleName::H3,
            HeadingLevel::H4 => StyleName::H4,
        }
    }
}

/// Fatal content-structure errors detected while building a flow.
///
/// A malformed block never reaches the renderer: a half-built document is
/// worse than no document.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("table defines no columns")]
    EmptyTable,
    #[error("table row {row} has {got} cells but {expected} columns are defined")]
    ColumnMismatch {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("invalid markup: {0}")]
    Markup(#[from] ParseError),
    #[error("failed to encode generated image: {0}")]
    Image(#[from] image::ImageError),
}

/// A table with a header row, body rows, and relative column weights.
#[derive(Clone, Debug, PartialEq)]
pub struct TableBlock {
    header: Vec<Vec<Span>>,
    rows: Vec<Vec<Vec<Span>>>,
    column_weights: Vec<usize>,
}

impl TableBlock {
    /// Creates a table, validating that the header and every row have exactly
    /// one cell per column weight.
    pub fn new(
        column_weights: Vec<usize>,
        header: Vec<Vec<Span>>,
        rows: Vec<Vec<Vec<Span>>>,
    ) -> Result<Self, BuildError> {
        if column_weights.is_empty() {
            return Err(BuildError::EmptyTable);
        }
        let expected = column_weights.len();
        if header.len() != expected {
            return Err(BuildError::ColumnMismatch {
                row: 0,
                got: header.len(),
                expected,
            });
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(BuildError::ColumnMismatch {
                    row: index + 1,
                    got: row.len(),
                    expected,
                });
            }
        }
        Ok(Self {
            header,
            rows,
            column_weights,
        })
    }

    pub fn header(&self) -> &[Vec<Span>] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Vec<Span>>] {
        &self.rows
    }

    pub fn column_weights(&self) -> &[usize] {
        &self.column_weights
    }
}

/// Where an image's pixels come from.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// Encoded image bytes held in memory (generated swatches, test fixtures).
    Bytes(Vec<u8>),
    /// An image file on disk.
    Path(PathBuf),
}

/// An image block with optional scaling and caption.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBlock {
    source: ImageSource,
    width_mm: Option<f64>,
    alignment: Alignment,
    caption: Option<Vec<Span>>,
}

impl ImageBlock {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            width_mm: None,
            alignment: Alignment::Left,
            caption: None,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn width_mm(&self) -> Option<f64> {
        self.width_mm
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn caption(&self) -> Option<&[Span]> {
        self.caption.as_deref()
    }

    /// Constrains the rendered width in millimetres, keeping the aspect ratio.
    pub fn with_width_mm(mut self, width_mm: impl Into<Option<f64>>) -> Self {
        self.width_mm = width_mm.into();
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<Option<Vec<Span>>>) -> Self {
        self.caption = caption.into();
        self
    }
}

/// One unit of document content, queued for rendering in order.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentBlock {
    Heading {
        level: HeadingLevel,
        spans: Vec<Span>,
    },
    Paragraph {
        style: StyleName,
        spans: Vec<Span>,
    },
    BulletList {
        items: Vec<Vec<Span>>,
    },
    Table(TableBlock),
    Image(ImageBlock),
    Spacer {
        height_mm: f64,
    },
    PageBreak,
}

/// A logical section boundary recorded by [`DocumentFlow::start_section`].
///
/// Marks carry the index of the first block belonging to the section; the
/// layout pass resolves them to start pages for bookmarks and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionMark {
    title: String,
    block_index: usize,
}

impl SectionMark {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn block_index(&self) -> usize {
        self.block_index
    }
}

/// The ordered, append-only accumulator for a whole document.
#[derive(Clone, Debug, Default)]
pub struct DocumentFlow {
    blocks: Vec<ContentBlock>,
    sections: Vec<SectionMark>,
}

impl DocumentFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one block.
    pub fn push(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// Appends several blocks in order.
    pub fn extend<I>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        self.blocks.extend(blocks);
    }

    /// Requests that the following content starts on a new page.
    ///
    /// A break is skipped when the flow is empty (the first page needs none)
    /// or when the previous block already is a break.
    pub fn break_page(&mut self) {
        match self.blocks.last() {
            None | Some(ContentBlock::PageBreak) => {}
            Some(_) => self.blocks.push(ContentBlock::PageBreak),
        }
    }

    /// Starts a new logical section: inserts a page break (deduplicated) and
    /// records a section mark for the block that follows.
    pub fn start_section(&mut self, title: impl Into<String>) {
        self.break_page();
        self.sections.push(SectionMark {
            title: title.into(),
            block_index: self.blocks.len(),
        });
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn sections(&self) -> &[SectionMark] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::Span;

    fn cell(text: &str) -> Vec<Span> {
        vec![Span::new(text)]
    }

    #[test]
    fn start_section_inserts_page_break() {
        let mut flow = DocumentFlow::new();
        flow.push(ContentBlock::Paragraph {
            style: StyleName::Body,
            spans: vec![Span::new("intro")],
        });
        flow.start_section("Colors");
        assert!(matches!(flow.blocks()[1], ContentBlock::PageBreak));
        assert_eq!(flow.sections()[0].block_index(), 2);
    }

    #[test]
    fn first_section_gets_no_leading_break() {
        let mut flow = DocumentFlow::new();
        flow.start_section("Introduction");
        assert!(flow.blocks().is_empty());
        assert_eq!(flow.sections()[0].block_index(), 0);
    }

    #[test]
    fn break_page_does_not_duplicate() {
        let mut flow = DocumentFlow::new();
        flow.push(ContentBlock::Spacer { height_mm: 5.0 });
        flow.break_page();
        flow.break_page();
        assert_eq!(flow.len(), 2);
    }

    #[test]
    fn table_rejects_mismatched_row() {
        let err = TableBlock::new(
            vec![1, 2],
            vec![cell("a"), cell("b")],
            vec![vec![cell("only one")]],
        )
        .unwrap_err();
        match err {
            BuildError::ColumnMismatch { row, got, expected } => {
                assert_eq!((row, got, expected), (1, 1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn table_rejects_mismatched_header() {
        let err = TableBlock::new(vec![1, 1, 1], vec![cell("a")], Vec::new()).unwrap_err();
        assert!(matches!(err, BuildError::ColumnMismatch { row: 0, .. }));
    }

    #[test]
    fn table_rejects_empty_columns() {
        let err = TableBlock::new(Vec::new(), Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, BuildError::EmptyTable));
    }

    #[test]
    fn table_accepts_consistent_shape() {
        let table = TableBlock::new(
            vec![2, 3],
            vec![cell("Color"), cell("Usage")],
            vec![vec![cell("Brown"), cell("Headers")]],
        )
        .expect("valid table");
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.column_weights(), &[2, 3]);
    }
}
