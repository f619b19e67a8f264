//! Inline rich-text spans and the compact markup they are parsed from.
//!
//! Document content is written as plain strings with a small markdown-inspired
//! syntax (`**bold**`, `*italic*`, `__underline__`, `[color=...]{...}`), which
//! the builders parse into [`Span`] values against a theme palette.  Colors may
//! be given as `#RRGGBB` or as a palette name (`[color=gold]{...}`), so the
//! content never repeats raw hex values.

use genpdf::style::{Color, Style, StyledString};
use thiserror::Error;

use crate::theme::Palette;

/// A text fragment with inline style attributes layered over a base style.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
    underline: bool,
    color: Option<Color>,
}

impl Span {
    /// Creates an unstyled span.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// The underline flag survives into the DOCX writer; the PDF renderer has
    /// no underline primitive and ignores it.
    pub fn is_underlined(&self) -> bool {
        self.underline
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Marks the span bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the span italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Marks the span underlined.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Assigns an explicit color.
    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Layers this span's attributes over `base`.
    pub fn apply_to(&self, mut base: Style) -> Style {
        if self.bold {
            base.set_bold();
        }
        if self.italic {
            base.set_italic();
        }
        if let Some(color) = self.color {
            base.set_color(color);
        }
        base
    }

    /// Produces the styled string for rendering with the given base style.
    pub fn styled_string(&self, base: &Style) -> StyledString {
        StyledString::new(self.text.clone(), self.apply_to(base.clone()))
    }
}

/// Parse errors with the byte position where the problem was detected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} (at byte {index})")]
pub struct ParseError {
    index: usize,
    message: String,
}

impl ParseError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct SpanState {
    bold: bool,
    italic: bool,
    underline: bool,
    color: Option<Color>,
}

impl SpanState {
    fn to_span(self, text: impl Into<String>) -> Span {
        Span {
            text: text.into(),
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            color: self.color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
    Underline,
    Color,
}

impl Marker {
    fn closing_token(self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "*",
            Marker::Underline => "__",
            Marker::Color => "}",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Marker::Bold => "bold span",
            Marker::Italic => "italic span",
            Marker::Underline => "underline span",
            Marker::Color => "color span",
        }
    }
}

/// Parses the inline markup into a list of [`Span`]s.
///
/// Supported constructs:
///
/// - `**bold**`
/// - `*italic*`
/// - `__underline__`
/// - `[color=#RRGGBB]{text}` or `[color=<palette name>]{text}`
///
/// Markers nest, and the parser reports malformed input as [`ParseError`] with
/// positional information rather than guessing at intent.
pub fn parse_markup(input: &str, palette: &Palette) -> Result<Vec<Span>, ParseError> {
    let (spans, idx) = parse_inner(input, 0, SpanState::default(), None, palette)?;
    debug_assert_eq!(idx, input.len());
    Ok(spans)
}

fn parse_inner(
    input: &str,
    mut index: usize,
    state: SpanState,
    closing_marker: Option<Marker>,
    palette: &Palette,
) -> Result<(Vec<Span>, usize), ParseError> {
    let mut spans = Vec::new();
    let mut buffer = String::new();

    while index < input.len() {
        if let Some(marker) = closing_marker {
            if input[index..].starts_with(marker.closing_token()) {
                flush_buffer(&mut buffer, &mut spans, state);
                index += marker.closing_token().len();
                return Ok((spans, index));
            }
        }

        if input[index..].starts_with("**") {
            flush_buffer(&mut buffer, &mut spans, state);
            index += 2;
            let mut nested = state;
            nested.bold = true;
            let (inner, next) = parse_inner(input, index, nested, Some(Marker::Bold), palette)?;
            spans.extend(inner);
            index = next;
            continue;
        }

        if input[index..].starts_with("__") {
            flush_buffer(&mut buffer, &mut spans, state);
            index += 2;
            let mut nested = state;
            nested.underline = true;
            let (inner, next) =
                parse_inner(input, index, nested, Some(Marker::Underline), palette)?;
            spans.extend(inner);
            index = next;
            continue;
        }

        if input[index..].starts_with('*') {
            flush_buffer(&mut buffer, &mut spans, state);
            index += 1;
            let mut nested = state;
            nested.italic = true;
            let (inner, next) = parse_inner(input, index, nested, Some(Marker::Italic), palette)?;
            spans.extend(inner);
            index = next;
            continue;
        }

        if input[index..].starts_with("[color=") {
            let (color, after_directive) = parse_color_directive(input, index, palette)?;
            flush_buffer(&mut buffer, &mut spans, state);
            let mut nested = state;
            nested.color = Some(color);
            index = after_directive;
            let (inner, next) = parse_inner(input, index, nested, Some(Marker::Color), palette)?;
            spans.extend(inner);
            index = next;
            continue;
        }

        if input[index..].starts_with('}') {
            return Err(ParseError::new(
                index,
                "unexpected closing token `}` without matching `[color=...]`",
            ));
        }

        if input[index..].starts_with('[') {
            return Err(ParseError::new(
                index,
                "unsupported directive; expected `[color=...]{...}`",
            ));
        }

        let ch = input[index..]
            .chars()
            .next()
            .expect("index is on a character boundary");
        buffer.push(ch);
        index += ch.len_utf8();
    }

    if let Some(marker) = closing_marker {
        Err(ParseError::new(
            index,
            format!("unterminated {}", marker.description()),
        ))
    } else {
        flush_buffer(&mut buffer, &mut spans, state);
        Ok((spans, index))
    }
}

fn flush_buffer(buffer: &mut String, spans: &mut Vec<Span>, state: SpanState) {
    if buffer.is_empty() {
        return;
    }
    spans.push(state.to_span(std::mem::take(buffer)));
}

fn parse_color_directive(
    input: &str,
    index: usize,
    palette: &Palette,
) -> Result<(Color, usize), ParseError> {
    const PREFIX: &str = "[color=";
    let value_start = index + PREFIX.len();
    let Some(rel_end) = input[value_start..].find(']') else {
        return Err(ParseError::new(
            value_start,
            "expected `]` to close color directive",
        ));
    };
    let value_end = value_start + rel_end;
    let value = &input[value_start..value_end];

    let color = if let Some(hexdigits) = value.strip_prefix('#') {
        parse_hex_color(hexdigits, value_start + 1)?
    } else {
        palette.named(value).ok_or_else(|| {
            ParseError::new(
                value_start,
                format!("unknown palette color '{}'", value),
            )
        })?
    };

    let brace_index = value_end + 1;
    if !input[brace_index..].starts_with('{') {
        return Err(ParseError::new(
            brace_index,
            "expected `{` to start the colored text",
        ));
    }

    Ok((color, brace_index + 1))
}

fn parse_hex_color(hexdigits: &str, index: usize) -> Result<Color, ParseError> {
    if hexdigits.len() != 6 || !hexdigits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::new(
            index,
            "invalid RGB specification; expected 6 hexadecimal digits",
        ));
    }
    let r = u8::from_str_radix(&hexdigits[0..2], 16).expect("validated hex digits");
    let g = u8::from_str_radix(&hexdigits[2..4], 16).expect("validated hex digits");
    let b = u8::from_str_radix(&hexdigits[4..6], 16).expect("validated hex digits");
    Ok(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::dependable()
    }

    #[test]
    fn parse_plain_text() {
        let spans = parse_markup("Crafting Excellence", &palette()).expect("parse succeeds");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "Crafting Excellence");
        assert!(!spans[0].is_bold());
    }

    #[test]
    fn parse_nested_styles() {
        let spans = parse_markup("We are **very *proud***!", &palette()).expect("parse succeeds");
        assert_eq!(spans.len(), 4);
        assert!(spans[1].is_bold());
        assert!(spans[2].is_bold() && spans[2].is_italic());
        assert_eq!(spans[3].text(), "!");
    }

    #[test]
    fn parse_underline_marker() {
        let spans = parse_markup("visit __our site__ today", &palette()).expect("parse succeeds");
        assert_eq!(spans.len(), 3);
        assert!(spans[1].is_underlined());
        assert_eq!(spans[1].text(), "our site");
    }

    #[test]
    fn parse_hex_color_directive() {
        let spans = parse_markup("[color=#654321]{Brown} text", &palette()).expect("parse");
        assert_eq!(spans[0].color(), Some(Color::Rgb(0x65, 0x43, 0x21)));
        assert_eq!(spans[1].text(), " text");
    }

    #[test]
    fn parse_named_color_directive() {
        let spans = parse_markup("[color=gold]{Premium Gold}", &palette()).expect("parse");
        assert_eq!(spans[0].color(), Some(palette().gold));
    }

    #[test]
    fn error_on_unknown_palette_color() {
        let err = parse_markup("[color=maroon]{x}", &palette()).unwrap_err();
        assert!(err.message().contains("unknown palette color"));
    }

    #[test]
    fn error_on_unterminated_bold() {
        let err = parse_markup("**oops", &palette()).unwrap_err();
        assert!(err.message().contains("unterminated bold"));
    }

    #[test]
    fn error_on_invalid_hex() {
        let err = parse_markup("[color=#12FG34]{x}", &palette()).unwrap_err();
        assert!(err.message().contains("invalid RGB"));
    }

    #[test]
    fn span_overrides_layer_over_base_style() {
        let span = Span::new("x").bold().colored(Color::Rgb(1, 2, 3));
        let styled = span.styled_string(&Style::new());
        assert!(styled.style.is_bold());
        assert_eq!(styled.style.color(), Some(Color::Rgb(1, 2, 3)));
    }
}
