//! Builders that turn semantic content into [`ContentBlock`]s.
//!
//! Every function is pure with respect to its inputs: the same theme and
//! content always produce the same blocks.  The only environment access is
//! the existence check for image paths, which downgrades a missing file to a
//! placeholder block instead of failing the whole build.

use std::io::Cursor;
use std::path::Path;

use genpdf::style::Color;
use image::{DynamicImage, ImageBuffer, ImageOutputFormat, Rgb};
use log::warn;

use crate::model::{
    Alignment, BuildError, ContentBlock, HeadingLevel, ImageBlock, ImageSource, TableBlock,
};
use crate::richtext::{parse_markup, Span};
use crate::theme::{hex, BrandTheme, StyleName};

/// Builds a heading block from inline markup.
pub fn heading(
    theme: &BrandTheme,
    level: HeadingLevel,
    markup: &str,
) -> Result<ContentBlock, BuildError> {
    Ok(ContentBlock::Heading {
        level,
        spans: parse_markup(markup, theme.palette())?,
    })
}

/// Builds a paragraph with an explicit named style.
pub fn styled(
    theme: &BrandTheme,
    style: StyleName,
    markup: &str,
) -> Result<ContentBlock, BuildError> {
    Ok(ContentBlock::Paragraph {
        style,
        spans: parse_markup(markup, theme.palette())?,
    })
}

/// Builds a body paragraph.
pub fn body(theme: &BrandTheme, markup: &str) -> Result<ContentBlock, BuildError> {
    styled(theme, StyleName::Body, markup)
}

/// Builds a framed value-proposition box: a bold brown title followed by the
/// body copy, inside one callout block.
pub fn callout(theme: &BrandTheme, title: &str, markup: &str) -> Result<ContentBlock, BuildError> {
    let mut spans = vec![
        Span::new(title).bold().colored(theme.palette().brown),
        Span::new("  "),
    ];
    spans.extend(parse_markup(markup, theme.palette())?);
    Ok(ContentBlock::Paragraph {
        style: StyleName::Callout,
        spans,
    })
}

/// Builds a framed note box.
pub fn note(theme: &BrandTheme, markup: &str) -> Result<ContentBlock, BuildError> {
    styled(theme, StyleName::Note, markup)
}

/// Builds a bullet list, parsing each item as markup.
pub fn bullets(theme: &BrandTheme, items: &[&str]) -> Result<ContentBlock, BuildError> {
    let items = items
        .iter()
        .map(|item| parse_markup(item, theme.palette()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ContentBlock::BulletList { items })
}

/// Builds a vertical gap.
pub fn spacer(height_mm: f64) -> ContentBlock {
    ContentBlock::Spacer { height_mm }
}

/// Builds a table block; cells are parsed as markup and the shape is validated
/// against the column weights.
pub fn table(
    theme: &BrandTheme,
    column_weights: Vec<usize>,
    header: &[&str],
    rows: &[&[&str]],
) -> Result<ContentBlock, BuildError> {
    let parse_row = |cells: &[&str]| -> Result<Vec<Vec<Span>>, BuildError> {
        cells
            .iter()
            .map(|cell| parse_markup(cell, theme.palette()).map_err(BuildError::from))
            .collect()
    };
    let header = parse_row(header)?;
    let rows = rows
        .iter()
        .map(|row| parse_row(row))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ContentBlock::Table(TableBlock::new(
        column_weights,
        header,
        rows,
    )?))
}

/// A visible stand-in for an asset that could not be used.
pub fn placeholder(text: &str) -> ContentBlock {
    ContentBlock::Paragraph {
        style: StyleName::Caption,
        spans: vec![Span::new(format!("[ {} ]", text)).italic()],
    }
}

/// Builds an image block from a file path, substituting a placeholder when
/// the file does not exist.  Draft content regularly references assets that
/// are not present on every machine; the document must still build.
pub fn image_or_placeholder(
    theme: &BrandTheme,
    path: impl AsRef<Path>,
    width_mm: f64,
    alignment: Alignment,
    caption: Option<&str>,
) -> Result<ContentBlock, BuildError> {
    let path = path.as_ref();
    if !path.is_file() {
        warn!(
            "image {} not found; substituting placeholder",
            path.display()
        );
        return Ok(placeholder(&format!("image: {}", path.display())));
    }

    let caption = caption
        .map(|markup| parse_markup(markup, theme.palette()))
        .transpose()?;
    Ok(ContentBlock::Image(
        ImageBlock::new(ImageSource::Path(path.to_path_buf()))
            .with_width_mm(width_mm)
            .with_alignment(alignment)
            .with_caption(caption),
    ))
}

fn channels(color: Color) -> [u8; 3] {
    match color {
        Color::Rgb(r, g, b) => [r, g, b],
        Color::Greyscale(v) => [v, v, v],
        #[allow(unreachable_patterns)]
        _ => [0, 0, 0],
    }
}

/// Renders a horizontal strip of solid color bands into an in-memory PNG.
///
/// genpdf draws strokes and text only, so palette swatches are generated as
/// image blocks instead of filled rectangles.
fn banded_png(colors: &[Color], band_px: u32, height_px: u32) -> Result<Vec<u8>, BuildError> {
    let width_px = band_px * colors.len() as u32;
    let buffer = ImageBuffer::from_fn(width_px, height_px, |x, _y| {
        let band = (x / band_px) as usize;
        Rgb(channels(colors[band.min(colors.len() - 1)]))
    });

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

/// Builds the palette swatch strip: one centered image with a band per brand
/// color, captioned with the color names and hex values.
pub fn palette_strip(theme: &BrandTheme, width_mm: f64) -> Result<ContentBlock, BuildError> {
    let palette = theme.palette();
    let colors = [
        ("Dependable Brown", palette.brown),
        ("Premium Gold", palette.gold),
        ("Warm Cream", palette.cream),
        ("Charcoal", palette.charcoal),
    ];

    let bands: Vec<Color> = colors.iter().map(|(_, color)| *color).collect();
    let bytes = banded_png(&bands, 180, 140)?;

    let caption = colors
        .iter()
        .map(|(name, color)| format!("{} #{}", name, hex(*color)))
        .collect::<Vec<_>>()
        .join("   ·   ");

    Ok(ContentBlock::Image(
        ImageBlock::new(ImageSource::Bytes(bytes))
            .with_width_mm(width_mm)
            .with_alignment(Alignment::Center)
            .with_caption(Some(vec![Span::new(caption)])),
    ))
}

/// Builds a single solid-color swatch image.
pub fn swatch(color: Color, width_mm: f64) -> Result<ContentBlock, BuildError> {
    let bytes = banded_png(&[color], 160, 120)?;
    Ok(ContentBlock::Image(
        ImageBlock::new(ImageSource::Bytes(bytes))
            .with_width_mm(width_mm)
            .with_alignment(Alignment::Center),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> BrandTheme {
        BrandTheme::dependable()
    }

    #[test]
    fn builders_are_deterministic() {
        let theme = theme();
        let a = body(&theme, "We serve **Bergen County**.").expect("build");
        let b = body(&theme, "We serve **Bergen County**.").expect("build");
        assert_eq!(a, b);
    }

    #[test]
    fn callout_leads_with_bold_brown_title() {
        let theme = theme();
        let block = callout(&theme, "Brand Essence:", "Houses into homes.").expect("build");
        let ContentBlock::Paragraph { style, spans } = block else {
            panic!("expected a paragraph");
        };
        assert_eq!(style, StyleName::Callout);
        assert!(spans[0].is_bold());
        assert_eq!(spans[0].color(), Some(theme.palette().brown));
    }

    #[test]
    fn missing_image_becomes_placeholder() {
        let theme = theme();
        let block = image_or_placeholder(
            &theme,
            "/nonexistent/upload/LOGO.jpeg",
            100.0,
            Alignment::Center,
            None,
        )
        .expect("build");
        assert!(matches!(block, ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn table_builder_rejects_ragged_rows() {
        let theme = theme();
        let err = table(
            &theme,
            vec![1, 1],
            &["Color", "Hex"],
            &[&["Brown", "#654321"], &["Gold"]],
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::ColumnMismatch { row: 2, .. }));
    }

    #[test]
    fn palette_strip_is_a_png_image() {
        let theme = theme();
        let block = palette_strip(&theme, 160.0).expect("build");
        let ContentBlock::Image(image) = block else {
            panic!("expected an image");
        };
        let ImageSource::Bytes(bytes) = image.source() else {
            panic!("expected in-memory bytes");
        };
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
