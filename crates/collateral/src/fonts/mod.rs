//! Font resolution for the PDF renderer.
//!
//! The bundled Liberation Sans family (metric-compatible with the Helvetica
//! the original collateral was set in) is searched first: an explicit
//! `COLLATERAL_FONTS_DIR` override, then `assets/fonts` next to the running
//! executable, then the crate-relative `assets/fonts`.  When the bundled files
//! are absent the resolver falls back to common system families (DejaVu Sans
//! on Linux, Arial on Windows) so the renderer keeps working on machines that
//! never ran the asset setup.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::warn;

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "LiberationSans";

const FONT_FILES: &[&str] = &[
    "LiberationSans-Regular.ttf",
    "LiberationSans-Bold.ttf",
    "LiberationSans-Italic.ttf",
    "LiberationSans-BoldItalic.ttf",
];

struct FallbackFontFiles {
    label: &'static str,
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

const DEJAVU_FONT_FILES: FallbackFontFiles = FallbackFontFiles {
    label: "DejaVu Sans",
    regular: "DejaVuSans.ttf",
    bold: "DejaVuSans-Bold.ttf",
    italic: "DejaVuSans-Oblique.ttf",
    bold_italic: "DejaVuSans-BoldOblique.ttf",
};

const ARIAL_FONT_FILES: FallbackFontFiles = FallbackFontFiles {
    label: "Arial",
    regular: "arial.ttf",
    bold: "arialbd.ttf",
    italic: "ariali.ttf",
    bold_italic: "arialbi.ttf",
};

const DEJAVU_DIRECTORIES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
];

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn bundled_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path("COLLATERAL_FONTS_DIR") {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.iter().any(|existing| existing == &candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    if !candidates
        .iter()
        .any(|existing| existing == &manifest_candidate)
    {
        candidates.push(manifest_candidate);
    }

    candidates
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_bundled_directory() -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in bundled_directory_candidates() {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate);

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };

    Err(Error::new(
        format!(
            "Unable to locate bundled font directory. Checked: {}. See assets/fonts/README.md or set COLLATERAL_FONTS_DIR.",
            summary
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts directory not found"),
    ))
}

fn load_bundled_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_bundled_directory()?;

    fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                DEFAULT_FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

fn load_fallback_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load fallback {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn load_fallback_family(
    directory: &Path,
    files: &FallbackFontFiles,
) -> Result<FontFamily<FontData>, Error> {
    Ok(FontFamily {
        regular: load_fallback_font(directory, files.regular, "regular")?,
        bold: load_fallback_font(directory, files.bold, "bold")?,
        italic: load_fallback_font(directory, files.italic, "italic")?,
        bold_italic: load_fallback_font(directory, files.bold_italic, "bold italic")?,
    })
}

fn fallback_candidates() -> Vec<(PathBuf, &'static FallbackFontFiles)> {
    let mut candidates: Vec<(PathBuf, &'static FallbackFontFiles)> = Vec::new();

    if let Some(path) = env_path("COLLATERAL_FALLBACK_FONTS_DIR") {
        candidates.push((path.clone(), &DEJAVU_FONT_FILES));
        candidates.push((path, &ARIAL_FONT_FILES));
    }

    for directory in DEJAVU_DIRECTORIES {
        candidates.push((PathBuf::from(directory), &DEJAVU_FONT_FILES));
    }

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                candidates.push((root.join("Fonts"), &ARIAL_FONT_FILES));
            }
        }
    }

    candidates
}

fn fallback_available(directory: &Path, files: &FallbackFontFiles) -> bool {
    [files.regular, files.bold, files.italic, files.bold_italic]
        .iter()
        .all(|file| directory.join(file).is_file())
}

fn load_system_fallback() -> Result<FontFamily<FontData>, Error> {
    let mut last_error: Option<Error> = None;

    for (directory, files) in fallback_candidates() {
        if !fallback_available(&directory, files) {
            continue;
        }
        match load_fallback_family(&directory, files) {
            Ok(family) => {
                warn!(
                    "Bundled fonts unavailable; using system '{}' family from {}.",
                    files.label,
                    directory.display()
                );
                return Ok(family);
            }
            Err(err) => last_error = Some(err),
        }
    }

    Err(last_error.unwrap_or_else(|| {
        Error::new(
            "No system fallback font family found",
            io::Error::new(io::ErrorKind::NotFound, "system fonts not found"),
        )
    }))
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

/// Returns the bundled font family, falling back to a system family when the
/// bundled files are missing.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    match load_bundled_font_family() {
        Ok(family) => Ok(family),
        Err(err) if fonts_missing(&err) => load_system_fallback().map_err(|fallback_err| {
            Error::new(
                format!(
                    "Bundled fonts unavailable ({}) and system fallback failed: {}",
                    err, fallback_err
                ),
                io::Error::new(io::ErrorKind::NotFound, "no usable font family"),
            )
        }),
        Err(err) => Err(err),
    }
}

/// Indicates whether some usable font family is present on this machine.
///
/// Render-dependent tests skip when this returns `false`.
pub fn default_fonts_available() -> bool {
    if resolve_bundled_directory().is_ok() {
        return true;
    }
    fallback_candidates()
        .iter()
        .any(|(directory, files)| fallback_available(directory, files))
}
