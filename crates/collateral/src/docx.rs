//! Writing a [`DocumentFlow`] as a Word document.
//!
//! The sales proposal ships as DOCX rather than PDF.  Word owns pagination,
//! so none of the two-pass machinery applies here; blocks map directly onto
//! `docx-rs` paragraphs, tables, and inline pictures.

use std::fs;
use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Pic, Run, Table, TableCell, TableRow};
use log::warn;
use thiserror::Error;

use crate::model::{self, ContentBlock, DocumentFlow, ImageSource, TableBlock};
use crate::richtext::Span;
use crate::theme::{hex, BrandTheme, StyleName, StyleSpec};

/// EMU per millimetre (914400 EMU per inch / 25.4).
const EMU_PER_MM: f64 = 36_000.0;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("failed to package docx archive: {0}")]
    Pack(String),
}

fn alignment(value: model::Alignment) -> AlignmentType {
    match value {
        model::Alignment::Left => AlignmentType::Left,
        model::Alignment::Center => AlignmentType::Center,
        model::Alignment::Right => AlignmentType::Right,
        model::Alignment::Justified => AlignmentType::Both,
    }
}

/// Serializes flows into DOCX bytes using the theme's style registry.
pub struct DocxWriter<'a> {
    theme: &'a BrandTheme,
}

impl<'a> DocxWriter<'a> {
    pub fn new(theme: &'a BrandTheme) -> Self {
        Self { theme }
    }

    /// Writes the whole flow and returns the packaged DOCX bytes.
    pub fn write(&self, flow: &DocumentFlow) -> Result<Vec<u8>, DocxError> {
        let mut docx = Docx::new();
        for block in flow.blocks() {
            docx = self.append_block(docx, block);
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|err| DocxError::Pack(err.to_string()))?;
        Ok(cursor.into_inner())
    }

    fn run(&self, span: &Span, spec: &StyleSpec) -> Run {
        let mut run = Run::new()
            .add_text(span.text())
            .size(usize::from(spec.font_size) * 2)
            .color(hex(span.color().unwrap_or(spec.color)));
        if spec.bold || span.is_bold() {
            run = run.bold();
        }
        if spec.italic || span.is_italic() {
            run = run.italic();
        }
        if span.is_underlined() {
            run = run.underline("single");
        }
        run
    }

    fn paragraph(&self, spans: &[Span], spec: &StyleSpec) -> Paragraph {
        let mut paragraph = Paragraph::new().align(alignment(spec.alignment));
        for span in spans {
            paragraph = paragraph.add_run(self.run(span, spec));
        }
        paragraph
    }

    fn table(&self, table: &TableBlock) -> Table {
        let header_spec = self.theme.style(StyleName::TableHeader);
        let cell_spec = self.theme.style(StyleName::TableCell);

        let mut rows = Vec::with_capacity(table.rows().len() + 1);
        let header_cells = table
            .header()
            .iter()
            .map(|cell| TableCell::new().add_paragraph(self.paragraph(cell, header_spec)))
            .collect();
        rows.push(TableRow::new(header_cells));

        for cells in table.rows() {
            let row = cells
                .iter()
                .map(|cell| TableCell::new().add_paragraph(self.paragraph(cell, cell_spec)))
                .collect();
            rows.push(TableRow::new(row));
        }

        // Letter body width (~165 mm inside margins) split by column weight,
        // expressed in twips.
        let total_weight: usize = table.column_weights().iter().sum();
        let total_twips = 9360usize;
        let grid = table
            .column_weights()
            .iter()
            .map(|weight| total_twips * weight / total_weight.max(1))
            .collect();
        Table::new(rows).set_grid(grid)
    }

    fn picture(&self, block: &model::ImageBlock) -> Option<Run> {
        let bytes = match block.source() {
            ImageSource::Bytes(bytes) => bytes.clone(),
            ImageSource::Path(path) => match fs::read(path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(
                        "skipping docx image {}: {}",
                        path.display(),
                        err
                    );
                    return None;
                }
            },
        };

        let dimensions = match image::load_from_memory(&bytes) {
            Ok(decoded) => image::GenericImageView::dimensions(&decoded),
            Err(err) => {
                warn!("skipping undecodable docx image: {}", err);
                return None;
            }
        };

        let mut pic = Pic::new(&bytes);
        if let Some(width_mm) = block.width_mm() {
            let (px_width, px_height) = dimensions;
            if px_width > 0 {
                let height_mm = width_mm * f64::from(px_height) / f64::from(px_width);
                pic = pic.size(
                    (width_mm * EMU_PER_MM) as u32,
                    (height_mm * EMU_PER_MM) as u32,
                );
            }
        }
        Some(Run::new().add_image(pic))
    }

    fn append_block(&self, docx: Docx, block: &ContentBlock) -> Docx {
        match block {
            ContentBlock::Heading { level, spans } => {
                docx.add_paragraph(self.paragraph(spans, self.theme.style(level.style())))
            }
            ContentBlock::Paragraph { style, spans } => {
                docx.add_paragraph(self.paragraph(spans, self.theme.style(*style)))
            }
            ContentBlock::BulletList { items } => {
                let spec = self.theme.style(StyleName::Bullet);
                let mut docx = docx;
                for item in items {
                    let mut paragraph = Paragraph::new().align(alignment(spec.alignment));
                    paragraph = paragraph.add_run(
                        Run::new()
                            .add_text("\u{2022} ")
                            .size(usize::from(spec.font_size) * 2)
                            .color(hex(spec.color)),
                    );
                    for span in item {
                        paragraph = paragraph.add_run(self.run(span, spec));
                    }
                    docx = docx.add_paragraph(paragraph);
                }
                docx
            }
            ContentBlock::Table(table) => docx.add_table(self.table(table)),
            ContentBlock::Image(image) => match self.picture(image) {
                Some(run) => {
                    let picture = Paragraph::new()
                        .align(alignment(image.alignment()))
                        .add_run(run);
                    let docx = docx.add_paragraph(picture);
                    match image.caption() {
                        Some(caption) => docx.add_paragraph(
                            self.paragraph(caption, self.theme.style(StyleName::Caption)),
                        ),
                        None => docx,
                    }
                }
                None => docx.add_paragraph(self.paragraph(
                    &[Span::new("[ image unavailable ]").italic()],
                    self.theme.style(StyleName::Caption),
                )),
            },
            ContentBlock::Spacer { .. } => docx.add_paragraph(Paragraph::new()),
            ContentBlock::PageBreak => {
                docx.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders;
    use crate::model::HeadingLevel;

    fn sample_flow(theme: &BrandTheme) -> DocumentFlow {
        let mut flow = DocumentFlow::new();
        flow.push(builders::heading(theme, HeadingLevel::H1, "DEPENDABLE HOME IMPROVEMENT").unwrap());
        flow.push(builders::body(theme, "Premium **Website Redesign** Proposal.").unwrap());
        flow.push(builders::bullets(theme, &["No hidden fees", "No surprise charges"]).unwrap());
        flow.push(
            builders::table(
                theme,
                vec![1, 2],
                &["Phase", "Scope"],
                &[&["Discovery", "Brand audit and sitemap"]],
            )
            .unwrap(),
        );
        flow.push(ContentBlock::PageBreak);
        flow
    }

    #[test]
    fn writes_a_zip_container() {
        let theme = BrandTheme::dependable();
        let flow = sample_flow(&theme);
        let bytes = DocxWriter::new(&theme).write(&flow).expect("pack docx");
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn missing_path_image_degrades_to_placeholder() {
        let theme = BrandTheme::dependable();
        let mut flow = DocumentFlow::new();
        flow.push(ContentBlock::Image(
            model::ImageBlock::new(ImageSource::Path("/nonexistent/logo.jpg".into()))
                .with_width_mm(80.0),
        ));
        let bytes = DocxWriter::new(&theme).write(&flow).expect("pack docx");
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn generated_swatch_embeds_as_picture() {
        let theme = BrandTheme::dependable();
        let mut flow = DocumentFlow::new();
        flow.push(builders::palette_strip(&theme, 120.0).expect("strip"));
        let bytes = DocxWriter::new(&theme).write(&flow).expect("pack docx");
        assert_eq!(&bytes[0..2], b"PK");
    }
}
