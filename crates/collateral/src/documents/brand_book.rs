//! The Dependable Home Improvement brand-guideline book.
//!
//! One parameterized manifest replaces the stack of near-identical draft
//! scripts this content went through: orientation, logo artwork, and the
//! edition line are options, everything else is the consolidated "final"
//! content.

use std::path::PathBuf;

use crate::builders::{
    body, bullets, callout, heading, image_or_placeholder, note, palette_strip, spacer, styled,
    table,
};
use crate::model::{Alignment, BuildError, DocumentFlow, HeadingLevel};
use crate::render::Orientation;
use crate::theme::{BrandTheme, StyleName};

/// Title used for PDF metadata and bookmarks.
pub const TITLE: &str = "Dependable Home Improvement Brand Book";

/// Caller-supplied knobs for the brand book build.
#[derive(Clone, Debug)]
pub struct BrandBookOptions {
    pub orientation: Orientation,
    /// Agency logo for the cover and closing page; missing files degrade to a
    /// placeholder block.
    pub logo_path: Option<PathBuf>,
    pub prepared_by: String,
    /// Shown on the cover; supplied by the caller so repeated builds stay
    /// byte-identical.
    pub edition: String,
}

impl Default for BrandBookOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            logo_path: None,
            prepared_by: "Prepared by Cascadia Managing Brands".into(),
            edition: "Brand Identity and Design Standards".into(),
        }
    }
}

/// Builds the complete brand book flow.
pub fn brand_book(
    theme: &BrandTheme,
    options: &BrandBookOptions,
) -> Result<DocumentFlow, BuildError> {
    let mut flow = DocumentFlow::new();

    cover(&mut flow, theme, options)?;
    contents(&mut flow, theme)?;
    introduction(&mut flow, theme)?;
    brand_values(&mut flow, theme)?;
    identity_and_logo(&mut flow, theme)?;
    color_palette(&mut flow, theme)?;
    typography(&mut flow, theme)?;
    voice_and_messaging(&mut flow, theme)?;
    visual_identity(&mut flow, theme)?;
    applications(&mut flow, theme)?;
    standards(&mut flow, theme, options)?;

    Ok(flow)
}

fn cover(
    flow: &mut DocumentFlow,
    theme: &BrandTheme,
    options: &BrandBookOptions,
) -> Result<(), BuildError> {
    flow.push(spacer(25.0));

    if let Some(logo) = &options.logo_path {
        flow.push(image_or_placeholder(
            theme,
            logo,
            100.0,
            Alignment::Center,
            None,
        )?);
        flow.push(spacer(12.0));
    }

    flow.push(styled(
        theme,
        StyleName::CoverTitle,
        "DEPENDABLE HOME IMPROVEMENT",
    )?);
    flow.push(spacer(8.0));
    flow.push(styled(theme, StyleName::CoverSubtitle, &options.edition)?);
    flow.push(spacer(5.0));
    flow.push(styled(
        theme,
        StyleName::CoverTagline,
        "Crafting Excellence. Building Trust.",
    )?);
    flow.push(spacer(18.0));
    flow.push(styled(theme, StyleName::Footer, &options.prepared_by)?);

    Ok(())
}

fn contents(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Table of Contents");
    flow.push(heading(theme, HeadingLevel::H1, "Table of Contents")?);
    flow.push(spacer(10.0));
    flow.push(table(
        theme,
        vec![1, 3],
        &["Section", "Description"],
        &[
            &["Introduction", "Brand overview, values, mission, and positioning"],
            &["Brand Identity & Logo", "Logo usage guidelines, variations, and specifications"],
            &["Color Palette", "Primary and secondary colors with complete specifications"],
            &["Typography System", "Comprehensive font specifications for all applications"],
            &["Brand Voice & Messaging", "Tone of voice, messaging pillars, and taglines"],
            &["Visual Identity", "Photography style, imagery guidelines, and presentations"],
            &["Brand Applications", "Website, print materials, signage, social media"],
            &["Brand Standards", "Maintaining consistency and quality control"],
        ],
    )?);
    Ok(())
}

fn introduction(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Introduction");
    flow.push(heading(theme, HeadingLevel::H1, "Introduction")?);
    flow.push(spacer(6.0));

    flow.push(heading(theme, HeadingLevel::H2, "About Dependable Home Improvement")?);
    flow.push(body(
        theme,
        "Dependable Home Improvement is a premier home improvement and handyman service \
         serving Bergen County, New Jersey, and surrounding areas. Established in 2004, the \
         company has built an exceptional reputation for craftsmanship, reliability, and \
         customer service over more than 20 years of operation. With over 1,500 completed \
         projects and 500 satisfied clients, Dependable Home Improvement has become a trusted \
         name in Bergen County home services.",
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Core Services")?);
    flow.push(bullets(
        theme,
        &[
            "**General Handyman Services** - comprehensive repairs, installations, and ongoing \
             maintenance for residential properties",
            "**Professional Carpentry** - custom woodwork, trim installation, deck construction, \
             and structural carpentry projects",
            "**Interior & Exterior Painting** - complete painting solutions including surface \
             preparation, priming, and finishing",
            "**Complete Home Renovations** - full-scale remodeling projects including kitchens, \
             bathrooms, and whole-home transformations",
        ],
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Service Area")?);
    flow.push(body(
        theme,
        "Dependable Home Improvement serves a 25-mile radius around Bergen County, New Jersey, \
         with dedicated presence in Hackensack, Teaneck, Fort Lee, Fair Lawn, Bergenfield, \
         Paramus, Ridgewood, Englewood, and surrounding communities. This focused service area \
         allows for rapid response times and personalized local service.",
    )?);

    flow.break_page();
    flow.push(heading(theme, HeadingLevel::H2, "Brand Overview")?);
    flow.push(body(
        theme,
        "Dependable Home Improvement positions itself as a premium, trustworthy home \
         improvement service that combines traditional craftsmanship with modern \
         professionalism. The brand appeals to homeowners who value quality workmanship, \
         transparent communication, reliable service, and fair pricing. Unlike commodity \
         contractors competing solely on price, Dependable Home Improvement differentiates \
         through expertise, reliability, and exceptional customer experience.",
    )?);
    flow.push(spacer(6.0));
    flow.push(callout(
        theme,
        "Brand Essence:",
        "Dependable Home Improvement transforms houses into homes through expert \
         craftsmanship and unwavering commitment to customer satisfaction.",
    )?);
    flow.push(callout(
        theme,
        "Brand Promise:",
        "Every project, regardless of size, receives the same level of attention, expertise, \
         and dedication. We don't just complete projects; we build lasting relationships with \
         our clients.",
    )?);

    Ok(())
}

fn brand_values(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Brand Values");
    flow.push(heading(theme, HeadingLevel::H1, "Brand Values")?);
    flow.push(spacer(6.0));

    flow.push(callout(
        theme,
        "Excellence in Craftsmanship",
        "We take pride in delivering superior workmanship on every project. Our team consists \
         of skilled professionals who treat each home as if it were their own. Every detail \
         matters, from precise measurements to clean finishes to proper material selection. We \
         don't cut corners, and we don't compromise on quality.",
    )?);
    flow.push(callout(
        theme,
        "Reliability & Dependability",
        "Our name reflects our core commitment. Clients can count on us to show up on time, \
         complete work as promised, and stand behind our results with a 100% satisfaction \
         guarantee. When we commit to something, we deliver.",
    )?);
    flow.push(callout(
        theme,
        "Transparency & Trust",
        "We believe in honest communication, fair pricing, and clear expectations. No hidden \
         fees, no surprise charges, no confusing contracts; just straightforward, professional \
         service from start to finish.",
    )?);
    flow.push(callout(
        theme,
        "Community Connection",
        "As a local Bergen County business, we're invested in our community. We're not a \
         national franchise or out-of-state contractor; we live here, work here, and care \
         about this community.",
    )?);
    flow.push(callout(
        theme,
        "Continuous Improvement",
        "We stay current with industry best practices, materials, and techniques to provide \
         our clients with the best possible solutions for their homes. The home improvement \
         industry evolves, and we evolve with it to serve our clients better.",
    )?);

    Ok(())
}

fn identity_and_logo(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Brand Identity & Logo");
    flow.push(heading(theme, HeadingLevel::H1, "Brand Identity & Logo")?);
    flow.push(spacer(6.0));

    flow.push(heading(theme, HeadingLevel::H2, "Logo")?);
    flow.push(body(
        theme,
        "The Dependable Home Improvement logo is the company's existing brand mark, \
         representing over 20 years of trusted service in Bergen County. The logo combines \
         traditional craftsmanship imagery with professional aesthetics, representing \
         stability, expertise, and quality construction.",
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Logo Elements")?);
    flow.push(bullets(
        theme,
        &[
            "**Symbol:** geometric design suggesting structure, foundation, and precision in \
             construction",
            "**Wordmark:** \"Dependable Home Improvement\" in clear, professional typography",
            "**Tagline:** \"Premium Quality Since 2004\" reinforces heritage and excellence",
        ],
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Minimum Size Requirements")?);
    flow.push(bullets(
        theme,
        &[
            "**Print materials:** minimum width of 2 inches for business cards, brochures, and \
             flyers",
            "**Digital and web:** minimum width of 200 pixels for general use",
            "**Website navigation:** 96-115 pixels height for optimal visibility and balance",
            "**Social media profile:** 400x400 pixels minimum for platform requirements",
        ],
    )?);

    flow.break_page();
    flow.push(heading(theme, HeadingLevel::H2, "Logo Usage Guidelines")?);

    flow.push(heading(theme, HeadingLevel::H3, "DO:")?);
    flow.push(bullets(
        theme,
        &[
            "Use the logo on clean, uncluttered backgrounds",
            "Maintain proper clear space around the logo, equal to the height of the letter 'D'",
            "Use approved color variations only: full color, brown, white, black",
            "Use high-resolution files for print applications and maintain aspect ratio when \
             resizing",
        ],
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "DON'T:")?);
    flow.push(bullets(
        theme,
        &[
            "Distort, stretch, or alter logo proportions in any way",
            "Place the logo on busy, patterned, or conflicting backgrounds",
            "Change logo colors outside the approved palette",
            "Add effects, shadows, glows, or outlines, or rotate the logo at angles",
            "Recreate or redraw the logo, or use low-resolution versions",
        ],
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Clear Space Requirements")?);
    flow.push(callout(
        theme,
        "Clear space:",
        "Maintain clear space around the logo equal to the height of the letter 'D' in \
         'Dependable' on all sides. No text, graphics, borders, or other elements should \
         intrude into this protected space. This requirement applies to all applications: \
         print, digital, signage, and promotional materials.",
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Logo Variations")?);
    flow.push(body(
        theme,
        "**Full color logo:** primary application for most uses, featuring the brown and gold \
         color scheme on white or light cream backgrounds. **Monochrome brown:** for \
         single-color applications such as embroidery or engraving. **Monochrome white:** for \
         dark backgrounds including brown, charcoal, or photography. **Monochrome black:** for \
         black-and-white printing and photocopies.",
    )?);

    Ok(())
}

fn color_palette(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Color Palette");
    flow.push(heading(theme, HeadingLevel::H1, "Color Palette")?);
    flow.push(spacer(6.0));

    flow.push(heading(theme, HeadingLevel::H2, "Primary Brand Colors")?);
    flow.push(body(
        theme,
        "The Dependable Home Improvement color palette was strategically selected to convey \
         reliability, craftsmanship, and premium quality. The brown and gold combination \
         creates a warm, professional, and trustworthy brand identity that differentiates \
         from competitors who typically use blue or green color schemes.",
    )?);
    flow.push(spacer(4.0));
    flow.push(palette_strip(theme, 150.0)?);
    flow.push(spacer(4.0));

    flow.push(table(
        theme,
        vec![3, 2, 3, 3, 2, 5],
        &["Color Name", "Hex", "RGB", "CMYK", "Pantone", "Primary Usage"],
        &[
            &[
                "Dependable Brown",
                "#654321",
                "101, 67, 33",
                "0, 34, 67, 60",
                "4625 C",
                "Primary backgrounds, headers, main text",
            ],
            &[
                "Premium Gold",
                "#B8860B",
                "184, 134, 11",
                "0, 27, 94, 28",
                "7551 C",
                "Accents, CTAs, highlights, headings",
            ],
            &[
                "Warm Cream",
                "#F5F5DC",
                "245, 245, 220",
                "0, 0, 10, 4",
                "7499 C",
                "Backgrounds, sections, cards, boxes",
            ],
            &[
                "Charcoal",
                "#36454F",
                "54, 69, 79",
                "32, 13, 0, 69",
                "432 C",
                "Body text, secondary headings",
            ],
            &[
                "White",
                "#FFFFFF",
                "255, 255, 255",
                "0, 0, 0, 0",
                "n/a",
                "Backgrounds, text on dark backgrounds",
            ],
        ],
    )?);

    flow.break_page();
    flow.push(heading(theme, HeadingLevel::H2, "Color Psychology & Strategic Rationale")?);
    flow.push(body(
        theme,
        "**[color=brown]{Brown}** represents earthiness, stability, natural materials, and \
         traditional craftsmanship. It creates an immediate psychological connection to wood, \
         construction materials, and the foundation of quality work, and it differentiates \
         Dependable Home Improvement from the overused blue and green of the service industry.",
    )?);
    flow.push(body(
        theme,
        "**[color=gold]{Gold}** conveys premium service, excellence, value, and achievement. \
         It elevates the brand positioning from commodity contractor to premium service \
         provider while highlighting important elements like calls-to-action.",
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Accessibility Guidelines")?);
    flow.push(body(
        theme,
        "All color combinations must meet WCAG AA contrast standards: minimum 4.5:1 for normal \
         text and 3:1 for large text of 18pt and above. Approved text combinations:",
    )?);
    flow.push(bullets(
        theme,
        &[
            "Charcoal text on white background: 12.6:1 contrast ratio",
            "White text on brown background: 8.2:1 contrast ratio",
            "Brown text on cream background: 7.1:1 contrast ratio",
            "Gold text on brown background: 4.8:1 contrast ratio",
        ],
    )?);
    flow.push(note(
        theme,
        "**Avoid:** gold text on cream background (insufficient contrast, 2.1:1) and brown \
         text on gold background (poor readability, 1.7:1).",
    )?);

    Ok(())
}

fn typography(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Typography System");
    flow.push(heading(theme, HeadingLevel::H1, "Typography System")?);
    flow.push(spacer(6.0));

    flow.push(heading(theme, HeadingLevel::H2, "Font Overview")?);
    flow.push(body(
        theme,
        "Dependable Home Improvement uses a two-font system that balances elegance with \
         readability. **Playfair Display** (serif) provides sophisticated, distinctive \
         headlines that convey heritage and quality, while **Helvetica/Arial** (sans-serif) \
         ensures clean, highly readable body text across all applications. Never use more \
         than these two font families in a single design.",
    )?);

    flow.push(heading(theme, HeadingLevel::H2, "Website & Digital Specifications")?);
    flow.push(table(
        theme,
        vec![3, 3, 2, 2, 2, 4],
        &["Element", "Font", "Size", "Weight", "Color", "Usage"],
        &[
            &["H1 Headlines", "Playfair Display", "48-64px", "Bold", "Brown/White", "Page titles, hero headlines"],
            &["H2 Headings", "Playfair Display", "36-48px", "Bold", "Brown/Gold", "Major section divisions"],
            &["H3 Subheadings", "Playfair Display", "24-32px", "Regular", "Brown/Charcoal", "Content subsections"],
            &["Body Text", "Helvetica/Arial", "16-18px", "Regular", "Charcoal", "Paragraphs, descriptions"],
            &["Navigation", "Helvetica/Arial", "16px", "Regular", "Brown/White", "Menu items, links"],
            &["Buttons", "Helvetica/Arial", "16-18px", "Bold", "White on Gold", "Call-to-action buttons"],
            &["Captions", "Helvetica/Arial", "14px", "Regular", "Charcoal", "Image captions, footnotes"],
            &["Tagline", "Playfair Display", "18-24px", "Italic", "Gold", "Taglines, pull quotes"],
        ],
    )?);
    flow.push(note(
        theme,
        "**Responsive scaling:** desktop uses full sizes, tablet 90% and mobile 80% of desktop \
         with adjusted line heights; never below 14px on mobile.",
    )?);

    flow.break_page();
    flow.push(heading(theme, HeadingLevel::H2, "Print Materials Specifications")?);
    flow.push(table(
        theme,
        vec![4, 3, 2, 2, 5],
        &["Element", "Font", "Size", "Weight", "Usage"],
        &[
            &["Business Card Name", "Playfair Display", "18-24pt", "Bold", "Company name on cards, letterhead"],
            &["Business Card Contact", "Helvetica/Arial", "9-11pt", "Regular", "Phone, email, address, website"],
            &["Brochure Headlines", "Playfair Display", "24-36pt", "Bold", "Front cover, section titles"],
            &["Brochure Body", "Helvetica/Arial", "10-12pt", "Regular", "Descriptions, service details"],
            &["Flyer Headlines", "Playfair Display", "36-48pt", "Bold", "Primary promotional message"],
            &["Estimate/Invoice Body", "Helvetica/Arial", "10-11pt", "Regular", "Item descriptions, details"],
        ],
    )?);

    flow.push(heading(theme, HeadingLevel::H2, "Signage & Vehicle Wrap Typography")?);
    flow.push(table(
        theme,
        vec![4, 4, 2, 6],
        &["Element", "Font", "Min Size", "Guidelines"],
        &[
            &["Vehicle - Company Name", "Playfair Display Bold", "6\" height", "Readable from 60 feet and beyond"],
            &["Vehicle - Phone Number", "Helvetica Bold", "3\" height", "Most important; readable from 50 feet"],
            &["Yard Sign - Company Name", "Playfair Display Bold", "3-4\"", "Maximum readability from the street"],
            &["Storefront Sign", "Playfair Display Bold", "12\" plus", "Visible from distance; illuminate if possible"],
        ],
    )?);
    flow.push(note(
        theme,
        "**Distance formula:** for every inch of letter height, text is readable at roughly \
         10 feet. Test visibility from typical viewing distances.",
    )?);

    flow.break_page();
    flow.push(heading(theme, HeadingLevel::H2, "Typography Best Practices")?);
    flow.push(bullets(
        theme,
        &[
            "**Establish clear hierarchy:** headlines should be at least twice the size of \
             body text",
            "**Line height:** body text reads best at 1.6-1.8 line height; headlines can use \
             a tighter 1.2-1.4",
            "**Line length:** optimal lines run 50-75 characters; longer lines reduce \
             readability",
            "**Alignment:** left-align body text; center headlines only for visual impact",
            "**Contrast:** keep a minimum 4.5:1 ratio for body text and avoid all-caps for \
             long passages",
        ],
    )?);
    flow.push(note(
        theme,
        "**When in doubt:** default to Playfair Display Bold for headlines, Helvetica Regular \
         for body text, generous spacing, and high-contrast colors. This combination works in \
         95% of applications and maintains brand consistency.",
    )?);

    Ok(())
}

fn voice_and_messaging(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Brand Voice & Messaging");
    flow.push(heading(theme, HeadingLevel::H1, "Brand Voice & Messaging")?);
    flow.push(spacer(6.0));

    flow.push(heading(theme, HeadingLevel::H2, "Tone of Voice")?);
    flow.push(body(
        theme,
        "Dependable Home Improvement's brand voice is **professional yet approachable, \
         confident yet humble, expert yet educational**. We communicate with expertise while \
         remaining accessible to homeowners.",
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Brand Messaging Pillars")?);
    flow.push(callout(
        theme,
        "1. Craftsmanship Excellence:",
        "We don't just complete projects; we craft solutions. Every detail matters, every \
         corner is finished properly.",
    )?);
    flow.push(callout(
        theme,
        "2. Reliability You Can Count On:",
        "Our name says it all. When we commit to a timeline, we meet it. When we quote a \
         price, we honor it.",
    )?);
    flow.push(callout(
        theme,
        "3. Transparent Partnership:",
        "No hidden fees. No surprise charges. Just honest communication, fair pricing, and \
         straightforward service.",
    )?);
    flow.push(callout(
        theme,
        "4. Local Community Connection:",
        "We're your Bergen County neighbors. We live here, work here, and care about this \
         community.",
    )?);
    flow.push(callout(
        theme,
        "5. Experience That Shows:",
        "Twenty years of transforming houses into homes. Over 1,500 completed projects. \
         Hundreds of satisfied clients.",
    )?);

    Ok(())
}

fn visual_identity(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Visual Identity");
    flow.push(heading(theme, HeadingLevel::H1, "Visual Identity")?);
    flow.push(spacer(6.0));

    flow.push(heading(theme, HeadingLevel::H2, "Photography Style")?);
    flow.push(body(
        theme,
        "Dependable Home Improvement's visual identity relies on authentic project photography \
         that demonstrates real work, real results, and real craftsmanship. Use actual project \
         photos rather than stock imagery.",
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Photography Principles")?);
    flow.push(bullets(
        theme,
        &[
            "**Authenticity over perfection:** real before/after transformations build more \
             credibility than staged photography",
            "**Well-lit and clear:** all photos should use natural or supplemental lighting",
            "**Detail shots:** highlight craftsmanship details such as clean corners, smooth \
             finishes, and precise cuts",
            "**Context and scale:** show full room views that help prospects visualize \
             transformations",
        ],
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Before/After Presentations")?);
    flow.push(callout(
        theme,
        "Before/after galleries",
        "are the most powerful marketing tool. Present images side-by-side, not as sliders, \
         for immediate visual comparison. Always label them clearly as BEFORE and AFTER and \
         include project details.",
    )?);

    Ok(())
}

fn applications(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.start_section("Brand Applications");
    flow.push(heading(theme, HeadingLevel::H1, "Brand Applications")?);
    flow.push(spacer(6.0));

    flow.push(heading(theme, HeadingLevel::H2, "Website & Digital")?);
    flow.push(body(
        theme,
        "The website serves as the primary digital presence with a video background hero \
         section, left-aligned logo, sticky navigation, multi-language support, before/after \
         galleries, an interactive service area map, and review platform integration.",
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Print Materials")?);
    flow.push(bullets(
        theme,
        &[
            "**Business cards:** brown background, gold accents, white text, premium cardstock",
            "**Brochures:** tri-fold format, brown and cream colors, high-quality project \
             photos",
            "**Flyers:** eye-catching Playfair Display headlines with before/after imagery",
            "**Estimates and invoices:** professional letterhead with clear itemized pricing",
        ],
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Social Media")?);
    flow.push(bullets(
        theme,
        &[
            "**Profile images:** the Dependable logo on a white background",
            "**Cover photos:** project photography with a brown overlay and gold text",
            "**Platforms:** Facebook for community, Instagram for the visual portfolio, \
             LinkedIn for professional presence",
        ],
    )?);

    flow.push(heading(theme, HeadingLevel::H3, "Vehicle Wraps & Signage")?);
    flow.push(callout(
        theme,
        "Visibility:",
        "Use brown and gold on a white background for maximum visibility. Company name at \
         minimum 6 inch height, phone number at minimum 3 inch height for readability from \
         50 feet. Keep the design clean and uncluttered.",
    )?);

    Ok(())
}

fn standards(
    flow: &mut DocumentFlow,
    theme: &BrandTheme,
    options: &BrandBookOptions,
) -> Result<(), BuildError> {
    flow.start_section("Brand Standards");
    flow.push(heading(theme, HeadingLevel::H1, "Maintaining Brand Consistency")?);
    flow.push(spacer(6.0));

    flow.push(body(
        theme,
        "The Dependable Home Improvement brand represents over 20 years of commitment to \
         excellence, reliability, and customer satisfaction. These brand guidelines ensure \
         that every interaction, whether digital, print, or in person, reinforces the values \
         and quality that have made Dependable Home Improvement a trusted name in Bergen \
         County.",
    )?);
    flow.push(body(
        theme,
        "By maintaining consistency in visual identity, messaging, and customer experience, we \
         strengthen brand recognition, build trust, and differentiate Dependable Home \
         Improvement in a competitive marketplace.",
    )?);
    flow.push(callout(
        theme,
        "Remember:",
        "Every project is a brand ambassador. Every customer interaction is a brand \
         experience. Every material we produce represents our commitment to excellence.",
    )?);
    flow.push(spacer(15.0));

    if let Some(logo) = &options.logo_path {
        flow.push(image_or_placeholder(
            theme,
            logo,
            75.0,
            Alignment::Center,
            None,
        )?);
        flow.push(spacer(5.0));
    }
    flow.push(styled(theme, StyleName::Footer, &options.prepared_by)?);
    flow.push(spacer(4.0));
    flow.push(styled(
        theme,
        StyleName::Disclaimer,
        "This brand book is proprietary and confidential. Provided for exclusive use of \
         Dependable Home Improvement and authorized partners.",
    )?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_every_top_level_section() {
        let theme = BrandTheme::dependable();
        let flow = brand_book(&theme, &BrandBookOptions::default()).expect("build");
        let titles: Vec<&str> = flow.sections().iter().map(|mark| mark.title()).collect();
        assert_eq!(
            titles,
            [
                "Table of Contents",
                "Introduction",
                "Brand Values",
                "Brand Identity & Logo",
                "Color Palette",
                "Typography System",
                "Brand Voice & Messaging",
                "Visual Identity",
                "Brand Applications",
                "Brand Standards",
            ]
        );
    }

    #[test]
    fn build_is_deterministic() {
        let theme = BrandTheme::dependable();
        let options = BrandBookOptions::default();
        let a = brand_book(&theme, &options).expect("build");
        let b = brand_book(&theme, &options).expect("build");
        assert_eq!(a.blocks(), b.blocks());
    }

    #[test]
    fn missing_logo_still_builds() {
        let theme = BrandTheme::dependable();
        let options = BrandBookOptions {
            logo_path: Some("/home/nobody/upload/LOGOCASCADIA2025.jpg.jpeg".into()),
            ..BrandBookOptions::default()
        };
        let flow = brand_book(&theme, &options).expect("build tolerates missing logo");
        assert!(!flow.is_empty());
    }
}
