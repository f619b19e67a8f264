use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use collateral::docx::DocxWriter;
use collateral::documents::{
    brand_book, logo_sheet, proposal, BrandBookOptions, LogoSheetOptions, ProposalOptions,
};
use collateral::export::write_artifact;
use collateral::render::{render, Orientation, PageGeometry};
use collateral::theme::BrandTheme;

/// Generates the Dependable Home Improvement collateral from the command line.
///
/// PDF rendering needs a font family; bundle one under `assets/fonts` next to
/// the binary or set `COLLATERAL_FONTS_DIR` (a system DejaVu Sans install also
/// works).
#[derive(Parser)]
#[command(author, version, about = "Brand collateral generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the brand-guideline book PDF.
    #[command(name = "brand-book", aliases = ["brandbook", "book"])]
    BrandBook {
        /// Use landscape letter pages instead of portrait.
        #[arg(long)]
        landscape: bool,
        /// Agency logo for the cover; a missing file degrades to a placeholder.
        #[arg(long)]
        logo: Option<PathBuf>,
        /// Embed a section outline into the finished PDF.
        #[arg(long)]
        bookmarks: bool,
        #[arg(long, default_value = "Dependable_Home_Improvement_Brand_Book.pdf")]
        output: PathBuf,
    },

    /// Render the landscape logo-concept presentation PDF.
    #[command(name = "logo-sheet", aliases = ["logosheet", "logos"])]
    LogoSheet {
        /// Directory containing the Dependable_Logo_Concept_<n>.png files.
        #[arg(long)]
        concepts: Option<PathBuf>,
        #[arg(long)]
        logo: Option<PathBuf>,
        #[arg(long, default_value = "Dependable_Logo_Concepts_Presentation.pdf")]
        output: PathBuf,
    },

    /// Write the website-redesign proposal DOCX.
    #[command(name = "proposal")]
    Proposal {
        #[arg(long)]
        logo: Option<PathBuf>,
        #[arg(long, default_value = "Dependable_Home_Improvement_Website_Proposal.docx")]
        output: PathBuf,
    },

    /// Render every artifact into one directory.
    #[command(name = "run-all", aliases = ["run_all", "all"])]
    RunAll {
        #[arg(long, default_value = "target/collateral")]
        output_dir: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::BrandBook {
            landscape,
            logo,
            bookmarks,
            output,
        } => run_brand_book(landscape, logo, bookmarks, &output),
        Commands::LogoSheet {
            concepts,
            logo,
            output,
        } => run_logo_sheet(concepts, logo, &output),
        Commands::Proposal { logo, output } => run_proposal(logo, &output),
        Commands::RunAll { output_dir } => run_all(&output_dir),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}

fn run_brand_book(
    landscape: bool,
    logo: Option<PathBuf>,
    bookmarks: bool,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let theme = BrandTheme::dependable();
    let options = BrandBookOptions {
        orientation: if landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        },
        logo_path: logo,
        ..BrandBookOptions::default()
    };

    let flow = brand_book(&theme, &options)?;
    let geometry = PageGeometry::letter(options.orientation);
    let rendered = render(&flow, &theme, &geometry, collateral::documents::brand_book::TITLE)?;

    let bytes = if bookmarks {
        collateral::bookmarks::apply_section_bookmarks(
            &rendered.bytes,
            flow.sections(),
            rendered.layout.section_pages(),
        )?
    } else {
        rendered.bytes
    };

    write_artifact(&bytes, output)?;
    println!(
        "Generated {} ({} bytes, {} pages)",
        output.display(),
        bytes.len(),
        rendered.layout.page_count()
    );
    Ok(())
}

fn run_logo_sheet(
    concepts: Option<PathBuf>,
    logo: Option<PathBuf>,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let theme = BrandTheme::dependable();
    let options = LogoSheetOptions {
        concept_dir: concepts,
        agency_logo: logo,
        ..LogoSheetOptions::default()
    };

    let flow = logo_sheet(&theme, &options)?;
    let geometry = PageGeometry::letter(Orientation::Landscape);
    let rendered = render(&flow, &theme, &geometry, collateral::documents::logo_sheet::TITLE)?;

    write_artifact(&rendered.bytes, output)?;
    println!(
        "Generated {} ({} bytes, {} pages)",
        output.display(),
        rendered.bytes.len(),
        rendered.layout.page_count()
    );
    Ok(())
}

fn run_proposal(logo: Option<PathBuf>, output: &Path) -> Result<(), Box<dyn Error>> {
    let theme = BrandTheme::dependable();
    let options = ProposalOptions { logo_path: logo };

    let flow = proposal(&theme, &options)?;
    let bytes = DocxWriter::new(&theme).write(&flow)?;

    write_artifact(&bytes, output)?;
    println!("Generated {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}

fn run_all(output_dir: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(output_dir)?;

    run_brand_book(
        false,
        None,
        true,
        &output_dir.join("Dependable_Home_Improvement_Brand_Book.pdf"),
    )?;
    run_logo_sheet(
        None,
        None,
        &output_dir.join("Dependable_Logo_Concepts_Presentation.pdf"),
    )?;
    run_proposal(
        None,
        &output_dir.join("Dependable_Home_Improvement_Website_Proposal.docx"),
    )?;

    println!("All renders completed successfully.");
    Ok(())
}
