//! The website-redesign sales proposal, written as a DOCX flow.

use std::path::PathBuf;

use crate::builders::{body, bullets, heading, image_or_placeholder, styled, table};
use crate::model::{Alignment, BuildError, ContentBlock, DocumentFlow, HeadingLevel};
use crate::theme::{BrandTheme, StyleName};

/// Base name of the generated proposal document.
pub const TITLE: &str = "Dependable Home Improvement Website Proposal";

/// Hyperlink blue used by Word for followed-style links.
const LINK_COLOR: &str = "#0563C1";

/// Options for the proposal build.
#[derive(Clone, Debug, Default)]
pub struct ProposalOptions {
    /// Agency logo placed above the title; skipped when missing.
    pub logo_path: Option<PathBuf>,
}

/// Builds the proposal flow for the DOCX writer.
pub fn proposal(theme: &BrandTheme, options: &ProposalOptions) -> Result<DocumentFlow, BuildError> {
    let mut flow = DocumentFlow::new();

    if let Some(logo) = &options.logo_path {
        flow.push(image_or_placeholder(
            theme,
            logo,
            90.0,
            Alignment::Center,
            None,
        )?);
    }

    flow.push(styled(
        theme,
        StyleName::CoverTitle,
        "[color=brown]{DEPENDABLE HOME IMPROVEMENT}",
    )?);
    flow.push(styled(
        theme,
        StyleName::CoverSubtitle,
        "[color=gold]{Premium Website Redesign Proposal}",
    )?);
    flow.push(ContentBlock::Spacer { height_mm: 6.0 });

    executive_summary(&mut flow, theme)?;
    design_philosophy(&mut flow, theme)?;
    feature_plan(&mut flow, theme)?;
    technical_excellence(&mut flow, theme)?;
    investment_value(&mut flow, theme)?;
    long_term_benefits(&mut flow, theme)?;
    implementation(&mut flow, theme)?;
    next_steps(&mut flow, theme)?;
    conclusion(&mut flow, theme)?;

    Ok(flow)
}

fn executive_summary(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(theme, HeadingLevel::H1, "Executive Summary")?);
    flow.push(body(
        theme,
        "Cascadia Managing Brands is excited to propose a comprehensive transformation of \
         Dependable Home Improvement's digital presence. This document outlines our vision \
         for a website redesign that will elevate the online presence from a basic \
         informational site to a sophisticated, conversion-optimized digital marketing \
         platform valued at over $15,000 in professional development services.",
    )?);
    flow.push(body(
        theme,
        &format!(
            "This premium redesign will position Dependable Home Improvement as the premier \
             home improvement service in Bergen County, New Jersey, with advanced features \
             typically found on enterprise-level websites costing upwards of $100,000. For \
             reference, [color={}]{{__LiquidDeath.com__}} represents the caliber of design \
             and functionality that commands six-figure budgets in the industry.",
            LINK_COLOR
        ),
    )?);
    flow.push(body(
        theme,
        "We will be providing this exceptional website at no charge as part of our commitment \
         to supporting quality businesses in our community.",
    )?);
    Ok(())
}

fn design_philosophy(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(theme, HeadingLevel::H1, "Design Philosophy & Color Scheme")?);
    flow.push(heading(
        theme,
        HeadingLevel::H2,
        "Brown & Gold Palette: The Psychology of Premium",
    )?);
    flow.push(body(
        theme,
        "The website will carry the brand's [color=brown]{brown} and [color=gold]{gold} \
         palette throughout: brown grounds the design in stability and craftsmanship, while \
         gold signals premium service and draws the eye to calls-to-action. Warm cream \
         section backgrounds and charcoal body text keep long-form content readable while \
         staying unmistakably on-brand.",
    )?);
    Ok(())
}

fn feature_plan(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(theme, HeadingLevel::H1, "Comprehensive Feature Plan")?);

    let features: &[(&str, &str)] = &[
        (
            "1. Dynamic Hero Section with Video Background",
            "A full-width hero with looping project footage, an overlaid value proposition in \
             Playfair Display, and a gold primary call-to-action that follows visitors as \
             they scroll.",
        ),
        (
            "2. Animated Statistics Counter",
            "Twenty years in business, 1,500 completed projects, and 500 satisfied clients \
             counted up on scroll, turning the company's track record into an immediate \
             trust signal.",
        ),
        (
            "3. Intelligent Sticky Navigation with Multi-Language Support",
            "A left-aligned logo, persistent contact button, and full English, Russian, and \
             Spanish translations serving Bergen County's communities.",
        ),
        (
            "4. Professional Before/After Project Gallery",
            "Side-by-side labeled comparisons, filterable by service type, with project \
             details that help prospects visualize their own transformation.",
        ),
        (
            "5. Interactive Service Area Map",
            "A Google Maps visualization of the 25-mile service radius with dedicated pins \
             for Hackensack, Teaneck, Fort Lee, Fair Lawn, Paramus, Ridgewood, and Englewood.",
        ),
        (
            "6. Advanced Multi-Step Contact Form",
            "A four-step flow that qualifies the project type, scope, timeline, and contact \
             details, raising completion rates over a single long form.",
        ),
        (
            "7. Dynamic Testimonials & Review Platform Integration",
            "A managed testimonial carousel combined with live Google and Yelp review feeds \
             for third-party credibility.",
        ),
        (
            "8. Content Marketing Blog with Category Filtering",
            "A publishing foundation for seasonal maintenance guides and project spotlights, \
             filterable by service category and optimized for long-tail search.",
        ),
        (
            "9. Detailed Case Studies & Project Transformations",
            "Long-form write-ups pairing photography with budgets, timelines, and material \
             choices to pre-answer the questions serious prospects ask.",
        ),
        (
            "10. Newsletter Signup & Email List Building",
            "Footer and exit-intent capture flows feeding a segmented list for seasonal \
             promotions and referral campaigns.",
        ),
    ];

    for (title, description) in features {
        flow.push(heading(theme, HeadingLevel::H2, title)?);
        flow.push(body(theme, description)?);
    }

    flow.push(body(
        theme,
        "The full plan also covers seasonal promotion banners, location-specific landing \
         pages, an FAQ page with schema markup, a services showcase, team and culture pages, \
         social and WhatsApp integration, a video how-to library, downloadable PDF resources, \
         a customer referral program, analytics instrumentation, structured data, legal \
         pages, and complete sitemap and breadcrumb navigation.",
    )?);
    Ok(())
}

fn technical_excellence(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(
        theme,
        HeadingLevel::H1,
        "Technical Excellence & Performance Optimization",
    )?);
    flow.push(bullets(
        theme,
        &[
            "**Core Web Vitals:** sub-2.5s largest contentful paint through image \
             optimization and deferred scripts",
            "**Mobile-first responsive design:** layouts designed for phones first, where \
             most local service searches happen",
            "**WebP imagery and lazy loading:** modern formats with graceful fallbacks keep \
             galleries fast",
            "**Accessibility compliance:** WCAG AA contrast, keyboard navigation, and \
             descriptive alt text throughout",
        ],
    )?);
    Ok(())
}

fn investment_value(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(theme, HeadingLevel::H1, "Investment Value & Market Comparison")?);
    flow.push(table(
        theme,
        vec![4, 3, 5],
        &["Tier", "Typical Cost", "What It Buys"],
        &[
            &[
                "Template website",
                "$3,000 - $5,000",
                "Stock theme, minimal customization, no conversion strategy",
            ],
            &[
                "Professional custom build",
                "$15,000+",
                "The scope of this proposal: custom design, galleries, multi-step forms, SEO \
                 foundation",
            ],
            &[
                "Enterprise-level build",
                "$100,000+",
                "The caliber of interaction design this proposal draws from",
            ],
        ],
    )?);
    flow.push(heading(theme, HeadingLevel::H2, "Cascadia Managing Brands' Commitment")?);
    flow.push(body(
        theme,
        "We deliver this engagement at no charge. Dependable Home Improvement's twenty-year \
         reputation deserves a digital presence to match, and we are committed to the \
         businesses that anchor our community.",
    )?);
    Ok(())
}

fn long_term_benefits(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(theme, HeadingLevel::H1, "Long-Term Benefits & Strategic Value")?);
    flow.push(bullets(
        theme,
        &[
            "**Continuous SEO improvement:** the blog and location pages compound search \
             visibility month over month",
            "**Scalable foundation:** new services, staff, and galleries slot in without a \
             redesign",
            "**Competitive advantage:** no Bergen County competitor operates at this level of \
             digital polish",
            "**Lead generation engine:** every feature funnels visitors toward the multi-step \
             contact form",
        ],
    )?);
    Ok(())
}

fn implementation(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(theme, HeadingLevel::H1, "Implementation Approach")?);
    flow.push(table(
        theme,
        vec![2, 4, 3],
        &["Phase", "Scope", "Duration"],
        &[
            &[
                "Discovery",
                "Brand audit, content inventory, sitemap, and wireframes",
                "Week 1-2",
            ],
            &[
                "Design",
                "High-fidelity mockups for desktop and mobile, photography selection",
                "Week 3-4",
            ],
            &[
                "Build",
                "Development, content migration, integrations, multi-language setup",
                "Week 5-8",
            ],
            &[
                "Launch",
                "QA, performance tuning, analytics verification, go-live, training",
                "Week 9",
            ],
        ],
    )?);
    Ok(())
}

fn next_steps(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(theme, HeadingLevel::H1, "Recommended Next Steps")?);
    flow.push(bullets(
        theme,
        &[
            "Review this proposal and the accompanying brand book",
            "Approve the feature plan and confirm the preferred logo concept",
            "Schedule the discovery workshop and photography walkthrough",
            "Provide access to existing domain, hosting, and review platform accounts",
        ],
    )?);
    Ok(())
}

fn conclusion(flow: &mut DocumentFlow, theme: &BrandTheme) -> Result<(), BuildError> {
    flow.push(heading(theme, HeadingLevel::H1, "Conclusion")?);
    flow.push(body(
        theme,
        "This redesign pairs Dependable Home Improvement's hard-earned reputation with a \
         digital platform built to convert. We look forward to building it together.",
    )?);
    flow.push(body(theme, "**Cascadia Managing Brands**")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::DocxWriter;

    #[test]
    fn proposal_builds_and_packs() {
        let theme = BrandTheme::dependable();
        let flow = proposal(&theme, &ProposalOptions::default()).expect("build");
        assert!(flow.len() > 30);
        let bytes = DocxWriter::new(&theme).write(&flow).expect("pack");
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn link_text_is_underlined_and_colored() {
        let theme = BrandTheme::dependable();
        let flow = proposal(&theme, &ProposalOptions::default()).expect("build");
        let linked = flow.blocks().iter().any(|block| match block {
            ContentBlock::Paragraph { spans, .. } => spans
                .iter()
                .any(|span| span.is_underlined() && span.color().is_some()),
            _ => false,
        });
        assert!(linked, "expected an underlined, colored link span");
    }
}
