//! The landscape logo-concept presentation.

use std::path::PathBuf;

use crate::builders::{body, heading, image_or_placeholder, note, spacer, styled};
use crate::model::{Alignment, BuildError, DocumentFlow, HeadingLevel};
use crate::theme::{BrandTheme, StyleName};

/// Title used for PDF metadata.
pub const TITLE: &str = "Dependable Logo Concepts Presentation";

/// Options for the logo sheet build.
#[derive(Clone, Debug)]
pub struct LogoSheetOptions {
    /// Directory holding `Dependable_Logo_Concept_<n>.png`; concepts whose
    /// file is missing render as placeholders.
    pub concept_dir: Option<PathBuf>,
    pub agency_logo: Option<PathBuf>,
    pub prepared_by: String,
    pub dated: String,
}

impl Default for LogoSheetOptions {
    fn default() -> Self {
        Self {
            concept_dir: None,
            agency_logo: None,
            prepared_by: "Prepared by Cascadia Managing Brands".into(),
            dated: "November 2025".into(),
        }
    }
}

struct Concept {
    number: usize,
    label: &'static str,
    width_mm: f64,
    description: &'static str,
}

const CONCEPTS: &[Concept] = &[
    Concept {
        number: 1,
        label: "Concept 1: Horizontal Layout",
        width_mm: 82.0,
        description: "Clean, professional design with elegant typography. Suitable for \
                      website headers and business cards.",
    },
    Concept {
        number: 2,
        label: "Concept 2: Badge/Emblem Style",
        width_mm: 64.0,
        description: "Heritage-inspired badge design conveying 20 years of trusted service \
                      and reliability.",
    },
    Concept {
        number: 3,
        label: "Concept 3: Contemporary Geometric",
        width_mm: 64.0,
        description: "Modern geometric mark that is memorable and works at any size. \
                      Contemporary sophistication.",
    },
];

/// Builds the logo presentation flow (intended for landscape letter pages).
pub fn logo_sheet(
    theme: &BrandTheme,
    options: &LogoSheetOptions,
) -> Result<DocumentFlow, BuildError> {
    let mut flow = DocumentFlow::new();

    flow.push(spacer(20.0));
    if let Some(logo) = &options.agency_logo {
        flow.push(image_or_placeholder(
            theme,
            logo,
            75.0,
            Alignment::Center,
            None,
        )?);
        flow.push(spacer(10.0));
    }
    flow.push(styled(theme, StyleName::CoverTitle, "Logo Design Concepts")?);
    flow.push(styled(
        theme,
        StyleName::CoverSubtitle,
        "Dependable Home Improvement",
    )?);
    flow.push(spacer(6.0));
    flow.push(styled(
        theme,
        StyleName::Footer,
        "Three Modern Logo Concepts for Your Review",
    )?);
    flow.push(styled(theme, StyleName::Footer, &options.dated)?);

    flow.start_section("Logo Concept Options");
    flow.push(heading(theme, HeadingLevel::H1, "Logo Concept Options")?);
    flow.push(spacer(6.0));

    for concept in CONCEPTS {
        flow.push(heading(theme, HeadingLevel::H3, concept.label)?);
        match &options.concept_dir {
            Some(dir) => {
                let path = dir.join(format!("Dependable_Logo_Concept_{}.png", concept.number));
                flow.push(image_or_placeholder(
                    theme,
                    path,
                    concept.width_mm,
                    Alignment::Center,
                    None,
                )?);
            }
            None => flow.push(crate::builders::placeholder(&format!(
                "logo concept {}",
                concept.number
            ))),
        }
        flow.push(body(theme, concept.description)?);
        flow.push(spacer(4.0));
    }

    flow.push(note(
        theme,
        "All concepts use the Dependable Home Improvement brand colors, \
         [color=brown]{Brown #654321} and [color=gold]{Gold #B8860B}, with Playfair Display \
         typography to align with the sophisticated brand identity.",
    )?);
    flow.push(spacer(6.0));
    flow.push(styled(theme, StyleName::Footer, &options.prepared_by)?);

    Ok(flow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_any_assets() {
        let theme = BrandTheme::dependable();
        let flow = logo_sheet(&theme, &LogoSheetOptions::default()).expect("build");
        assert_eq!(flow.sections().len(), 1);
        assert!(!flow.is_empty());
    }

    #[test]
    fn missing_concept_files_become_placeholders() {
        let theme = BrandTheme::dependable();
        let options = LogoSheetOptions {
            concept_dir: Some("/home/nobody/dependable_premium".into()),
            ..LogoSheetOptions::default()
        };
        let flow = logo_sheet(&theme, &options).expect("build");
        assert!(!flow.is_empty());
    }
}
