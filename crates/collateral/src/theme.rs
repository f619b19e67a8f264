//! Brand themes: the named colors and paragraph styles shared by every
//! generated artifact.
//!
//! A [`BrandTheme`] is an explicit value handed to the builder functions
//! instead of a set of module-level constants, so several themes can coexist
//! in one process without leaking colors into each other's documents.

use std::collections::BTreeMap;

use genpdf::style::{Color, Style};

use crate::model::Alignment;

/// Millimetres per PostScript point.
pub const PT_TO_MM: f64 = 0.352_778;

/// The named brand colors used throughout a theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub brown: Color,
    pub gold: Color,
    pub cream: Color,
    pub charcoal: Color,
    pub white: Color,
    pub grey: Color,
}

impl Palette {
    /// The Dependable Home Improvement palette.
    pub fn dependable() -> Self {
        Self {
            brown: Color::Rgb(0x65, 0x43, 0x21),
            gold: Color::Rgb(0xb8, 0x86, 0x0b),
            cream: Color::Rgb(0xf5, 0xf5, 0xdc),
            charcoal: Color::Rgb(0x36, 0x45, 0x4f),
            white: Color::Rgb(0xff, 0xff, 0xff),
            grey: Color::Greyscale(0x80),
        }
    }

    /// Resolves a palette color by its name, as used by the inline markup
    /// (`[color=gold]{...}`).
    pub fn named(&self, name: &str) -> Option<Color> {
        match name {
            "brown" => Some(self.brown),
            "gold" => Some(self.gold),
            "cream" => Some(self.cream),
            "charcoal" => Some(self.charcoal),
            "white" => Some(self.white),
            "grey" | "gray" => Some(self.grey),
            _ => None,
        }
    }
}

/// Formats a color as an RRGGBB hex string (no leading `#`), the form the
/// DOCX writer expects.
pub fn hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("{:02X}{:02X}{:02X}", r, g, b),
        Color::Greyscale(v) => format!("{:02X}{:02X}{:02X}", v, v, v),
        #[allow(unreachable_patterns)]
        _ => String::from("000000"),
    }
}

/// Identifiers for the fixed set of paragraph styles a theme provides.
///
/// The closed enum makes "unknown style" a compile-time impossibility on the
/// typed path; [`BrandTheme::by_name`] covers the dynamic path and treats an
/// unknown name as a programmer error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleName {
    CoverTitle,
    CoverSubtitle,
    CoverTagline,
    H1,
    H2,
    H3,
    H4,
    Body,
    Bullet,
    Callout,
    Note,
    Caption,
    TableHeader,
    TableCell,
    Footer,
    Disclaimer,
    PageNumber,
}

impl StyleName {
    const ALL: &'static [(&'static str, StyleName)] = &[
        ("cover-title", StyleName::CoverTitle),
        ("cover-subtitle", StyleName::CoverSubtitle),
        ("cover-tagline", StyleName::CoverTagline),
        ("h1", StyleName::H1),
        ("h2", StyleName::H2),
        ("h3", StyleName::H3),
        ("h4", StyleName::H4),
        ("body", StyleName::Body),
        ("bullet", StyleName::Bullet),
        ("callout", StyleName::Callout),
        ("note", StyleName::Note),
        ("caption", StyleName::Caption),
        ("table-header", StyleName::TableHeader),
        ("table-cell", StyleName::TableCell),
        ("footer", StyleName::Footer),
        ("disclaimer", StyleName::Disclaimer),
        ("page-number", StyleName::PageNumber),
    ];

    fn from_name(name: &str) -> Option<StyleName> {
        Self::ALL
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, style)| *style)
    }
}

/// A fixed formatting specification for one named style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSpec {
    /// Font size in points.
    pub font_size: u8,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub alignment: Alignment,
    /// Line height as a factor of the font size.
    pub line_spacing: f64,
    /// Vertical gap inserted after the block, in millimetres.
    pub space_after_mm: f64,
    /// Boxed callouts are rendered inside a frame.
    pub framed: bool,
}

impl StyleSpec {
    fn new(font_size: u8, color: Color) -> Self {
        Self {
            font_size,
            color,
            bold: false,
            italic: false,
            alignment: Alignment::Left,
            line_spacing: 1.2,
            space_after_mm: 0.0,
            framed: false,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn leading(mut self, factor: f64) -> Self {
        self.line_spacing = factor;
        self
    }

    fn space_after(mut self, pt: f64) -> Self {
        self.space_after_mm = pt * PT_TO_MM;
        self
    }

    fn framed(mut self) -> Self {
        self.framed = true;
        self
    }

    /// The base text style for this spec, ready to be applied to spans.
    pub fn text_style(&self) -> Style {
        let mut style = Style::new();
        style.set_font_size(self.font_size);
        style.set_color(self.color);
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style.set_line_spacing(self.line_spacing);
        style
    }
}

/// A complete brand theme: palette plus the style registry.
#[derive(Clone, Debug)]
pub struct BrandTheme {
    name: String,
    palette: Palette,
    styles: BTreeMap<StyleName, StyleSpec>,
}

impl BrandTheme {
    /// Creates a theme with the default style registry derived from `palette`.
    ///
    /// The registry mirrors the paragraph styles of the original brand book:
    /// large centered cover typography, brown/gold heading hierarchy, justified
    /// charcoal body text, and framed callout and note boxes.
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        let mut styles = BTreeMap::new();

        styles.insert(
            StyleName::CoverTitle,
            StyleSpec::new(48, palette.brown)
                .bold()
                .aligned(Alignment::Center)
                .leading(1.2)
                .space_after(20.0),
        );
        styles.insert(
            StyleName::CoverSubtitle,
            StyleSpec::new(28, palette.gold)
                .bold()
                .aligned(Alignment::Center)
                .leading(1.2)
                .space_after(15.0),
        );
        styles.insert(
            StyleName::CoverTagline,
            StyleSpec::new(20, palette.brown)
                .italic()
                .aligned(Alignment::Center)
                .leading(1.2),
        );
        styles.insert(
            StyleName::H1,
            StyleSpec::new(32, palette.brown)
                .bold()
                .leading(1.2)
                .space_after(20.0),
        );
        styles.insert(
            StyleName::H2,
            StyleSpec::new(22, palette.gold)
                .bold()
                .leading(1.2)
                .space_after(14.0),
        );
        styles.insert(
            StyleName::H3,
            StyleSpec::new(16, palette.brown)
                .bold()
                .leading(1.2)
                .space_after(6.0),
        );
        styles.insert(
            StyleName::H4,
            StyleSpec::new(13, palette.charcoal)
                .bold()
                .leading(1.25)
                .space_after(8.0),
        );
        styles.insert(
            StyleName::Body,
            StyleSpec::new(11, palette.charcoal)
                .aligned(Alignment::Justified)
                .leading(1.45)
                .space_after(12.0),
        );
        styles.insert(
            StyleName::Bullet,
            StyleSpec::new(11, palette.charcoal)
                .leading(1.35)
                .space_after(10.0),
        );
        styles.insert(
            StyleName::Callout,
            StyleSpec::new(11, palette.charcoal)
                .leading(1.35)
                .space_after(14.0)
                .framed(),
        );
        styles.insert(
            StyleName::Note,
            StyleSpec::new(10, palette.charcoal)
                .leading(1.4)
                .space_after(12.0)
                .framed(),
        );
        styles.insert(
            StyleName::Caption,
            StyleSpec::new(9, palette.charcoal)
                .aligned(Alignment::Center)
                .leading(1.3)
                .space_after(8.0),
        );
        styles.insert(
            StyleName::TableHeader,
            StyleSpec::new(9, palette.brown).bold().leading(1.3),
        );
        styles.insert(
            StyleName::TableCell,
            StyleSpec::new(9, palette.charcoal).leading(1.3),
        );
        styles.insert(
            StyleName::Footer,
            StyleSpec::new(12, palette.charcoal)
                .aligned(Alignment::Center)
                .leading(1.2),
        );
        styles.insert(
            StyleName::Disclaimer,
            StyleSpec::new(8, palette.grey)
                .aligned(Alignment::Center)
                .leading(1.3),
        );
        styles.insert(
            StyleName::PageNumber,
            StyleSpec::new(9, palette.grey).aligned(Alignment::Right),
        );

        Self {
            name: name.into(),
            palette,
            styles,
        }
    }

    /// The Dependable Home Improvement theme.
    pub fn dependable() -> Self {
        Self::new("Dependable Home Improvement", Palette::dependable())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Looks up the spec registered for `name`.
    ///
    /// Every theme constructed through [`BrandTheme::new`] carries a complete
    /// registry; a missing entry can only result from removing one, which is a
    /// programmer error.
    pub fn style(&self, name: StyleName) -> &StyleSpec {
        self.styles
            .get(&name)
            .unwrap_or_else(|| panic!("style {:?} missing from theme '{}'", name, self.name))
    }

    /// Looks up a spec by its string key (`"h1"`, `"body"`, ...), panicking on
    /// an unknown name.
    pub fn by_name(&self, name: &str) -> &StyleSpec {
        let key = StyleName::from_name(name)
            .unwrap_or_else(|| panic!("unknown style name '{}' in theme '{}'", name, self.name));
        self.style(key)
    }

    /// Replaces one style spec, for callers deriving a variant theme.
    pub fn set_style(&mut self, name: StyleName, spec: StyleSpec) {
        self.styles.insert(name, spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_yields_identical_spec() {
        let theme = BrandTheme::dependable();
        assert_eq!(theme.style(StyleName::Body), theme.style(StyleName::Body));
        assert_eq!(
            theme.style(StyleName::Body).text_style(),
            theme.style(StyleName::Body).text_style()
        );
    }

    #[test]
    fn by_name_resolves_every_registered_key() {
        let theme = BrandTheme::dependable();
        for (key, style) in StyleName::ALL {
            assert_eq!(theme.by_name(key), theme.style(*style));
        }
    }

    #[test]
    #[should_panic(expected = "unknown style name")]
    fn by_name_panics_on_unknown_key() {
        BrandTheme::dependable().by_name("marquee");
    }

    #[test]
    fn dependable_palette_matches_brand_hex() {
        let palette = Palette::dependable();
        assert_eq!(hex(palette.brown), "654321");
        assert_eq!(hex(palette.gold), "B8860B");
        assert_eq!(hex(palette.cream), "F5F5DC");
        assert_eq!(hex(palette.charcoal), "36454F");
    }

    #[test]
    fn named_lookup_covers_aliases() {
        let palette = Palette::dependable();
        assert_eq!(palette.named("gold"), Some(palette.gold));
        assert_eq!(palette.named("gray"), palette.named("grey"));
        assert_eq!(palette.named("teal"), None);
    }

    #[test]
    fn cover_title_is_centered_and_bold() {
        let theme = BrandTheme::dependable();
        let spec = theme.style(StyleName::CoverTitle);
        assert!(spec.bold);
        assert_eq!(spec.alignment, Alignment::Center);
        assert_eq!(spec.font_size, 48);
    }
}
