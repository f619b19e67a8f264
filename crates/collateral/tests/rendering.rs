use collateral::builders;
use collateral::documents::{brand_book, BrandBookOptions};
use collateral::fonts;
use collateral::model::{ContentBlock, DocumentFlow, HeadingLevel, ImageBlock, ImageSource};
use collateral::render::{render, LayoutPass, Orientation, PageGeometry, StampPass};
use collateral::theme::{BrandTheme, StyleName};
use sha2::{Digest, Sha256};

fn geometry() -> PageGeometry {
    PageGeometry::letter(Orientation::Portrait)
}

fn fonts_available_or_skip(test: &str) -> bool {
    if fonts::default_fonts_available() {
        true
    } else {
        eprintln!(
            "Skipping {}: no font family found. Set COLLATERAL_FONTS_DIR or install DejaVu Sans.",
            test
        );
        false
    }
}

fn scenario_flow(theme: &BrandTheme) -> DocumentFlow {
    let mut flow = DocumentFlow::new();
    flow.start_section("Intro");
    flow.push(builders::heading(theme, HeadingLevel::H1, "Intro").expect("heading"));
    flow.push(builders::body(theme, "Hello").expect("paragraph"));
    flow.start_section("Colors");
    flow.push(builders::heading(theme, HeadingLevel::H1, "Colors").expect("heading"));
    flow
}

fn page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes)
        .expect("parse rendered PDF")
        .get_pages()
        .len()
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            if let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            {
                let start_index = offset + start_pos + start.len();
                if let Some(end_pos) = data[start_index..]
                    .windows(end.len())
                    .position(|window| window == end)
                {
                    for byte in &mut data[start_index..start_index + end_pos] {
                        if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                            *byte = b'0';
                        }
                    }
                    offset = start_index + end_pos + end.len();
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    scrub_xml(&mut normalized, b"<xmp:CreateDate>", b"</xmp:CreateDate>");
    scrub_xml(&mut normalized, b"<xmp:ModifyDate>", b"</xmp:ModifyDate>");
    scrub_xml(&mut normalized, b"<xmp:MetadataDate>", b"</xmp:MetadataDate>");
    scrub_xml(&mut normalized, b"<xmpMM:DocumentID>", b"</xmpMM:DocumentID>");
    scrub_xml(&mut normalized, b"<xmpMM:InstanceID>", b"</xmpMM:InstanceID>");
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(scrub_pdf(bytes)).into()
}

#[test]
fn renders_non_empty_output() {
    if !fonts_available_or_skip("renders_non_empty_output") {
        return;
    }

    let theme = BrandTheme::dependable();
    let flow = scenario_flow(&theme);
    let rendered = render(&flow, &theme, &geometry(), "Scenario").expect("render");

    assert!(rendered.bytes.starts_with(b"%PDF"));
    assert!(rendered.bytes.len() > 1024);
}

#[test]
fn scenario_flow_breaks_onto_two_pages() {
    if !fonts_available_or_skip("scenario_flow_breaks_onto_two_pages") {
        return;
    }

    let theme = BrandTheme::dependable();
    let flow = scenario_flow(&theme);

    let layout = LayoutPass::run(&flow, &theme, &geometry(), "Scenario").expect("layout pass");
    assert_eq!(layout.page_count(), 2);
    assert_eq!(layout.section_pages(), &[Some(1), Some(2)]);

    let rendered =
        StampPass::run(&flow, &theme, &geometry(), "Scenario", layout).expect("stamp pass");
    assert_eq!(page_count(&rendered.bytes), 2);
}

#[test]
fn stamped_page_count_matches_layout_capture() {
    if !fonts_available_or_skip("stamped_page_count_matches_layout_capture") {
        return;
    }

    let theme = BrandTheme::dependable();
    let flow = brand_book(&theme, &BrandBookOptions::default()).expect("build brand book");
    let rendered = render(&flow, &theme, &geometry(), "Brand Book").expect("render");

    assert_eq!(page_count(&rendered.bytes), rendered.layout.page_count());
    assert!(rendered.layout.page_count() > 5);

    // Every section resolved to a page, in non-decreasing order, none on the cover.
    let mut previous = 1;
    for page in rendered.layout.section_pages() {
        let page = page.expect("section rendered");
        assert!(page >= previous);
        assert!(page > 1, "sections must start after the cover");
        previous = page;
    }
}

#[test]
fn rendering_is_deterministic() {
    if !fonts_available_or_skip("rendering_is_deterministic") {
        return;
    }

    let theme = BrandTheme::dependable();
    let options = BrandBookOptions::default();

    let render_once = || {
        let flow = brand_book(&theme, &options).expect("build brand book");
        render(&flow, &theme, &geometry(), "Brand Book")
            .expect("render")
            .bytes
    };

    let bytes_a = render_once();
    let bytes_b = render_once();

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn missing_image_still_produces_a_valid_pdf() {
    if !fonts_available_or_skip("missing_image_still_produces_a_valid_pdf") {
        return;
    }

    let theme = BrandTheme::dependable();
    let mut flow = DocumentFlow::new();
    flow.push(builders::heading(&theme, HeadingLevel::H1, "Gallery").expect("heading"));
    flow.push(
        builders::image_or_placeholder(
            &theme,
            "/home/nobody/upload/after-photo.jpeg",
            120.0,
            collateral::model::Alignment::Center,
            Some("Figure 1"),
        )
        .expect("builder tolerates missing path"),
    );
    // A path that vanishes between build and render degrades at render time.
    flow.push(ContentBlock::Image(
        ImageBlock::new(ImageSource::Path("/home/nobody/upload/gone.png".into()))
            .with_width_mm(80.0),
    ));

    let rendered = render(&flow, &theme, &geometry(), "Gallery").expect("render");
    assert!(rendered.bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&rendered.bytes), 1);
}

#[test]
fn landscape_geometry_renders() {
    if !fonts_available_or_skip("landscape_geometry_renders") {
        return;
    }

    let theme = BrandTheme::dependable();
    let mut flow = DocumentFlow::new();
    flow.push(builders::styled(&theme, StyleName::CoverTitle, "Logo Design Concepts").unwrap());
    let landscape = PageGeometry::letter(Orientation::Landscape);
    let rendered = render(&flow, &theme, &landscape, "Logo Concepts").expect("render");
    assert_eq!(page_count(&rendered.bytes), 1);
}

#[cfg(feature = "bookmarks")]
#[test]
fn bookmarks_embed_section_outline() {
    if !fonts_available_or_skip("bookmarks_embed_section_outline") {
        return;
    }

    let theme = BrandTheme::dependable();
    let flow = scenario_flow(&theme);
    let rendered = render(&flow, &theme, &geometry(), "Scenario").expect("render");

    let bytes = collateral::bookmarks::apply_section_bookmarks(
        &rendered.bytes,
        flow.sections(),
        rendered.layout.section_pages(),
    )
    .expect("apply bookmarks");

    let document = lopdf::Document::load_mem(&bytes).expect("parse bookmarked PDF");
    let catalog = document.catalog().expect("catalog");
    assert!(catalog.get(b"Outlines").is_ok());
}
