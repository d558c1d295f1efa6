//! Theme stylesheet assembly.
//!
//! Reads the known token files from a tokens directory, runs range tokens
//! through the clamp generator, flattens every group and renders a single
//! `@theme { ... }` block of CSS custom properties.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::clamp::generate_clamps;
use crate::error::{Result, TokenError};
use crate::flatten::flatten;
use crate::schema::parse_file;
use crate::types::{
    DEFAULT_ROOT_SIZE, MappableToken, RangeToken, TokenGroup, ViewportTokens,
};

/// File holding the viewport bracket used by every range file.
pub const VIEWPORTS_FILE: &str = "viewports.json";

/// First line of every generated stylesheet.
pub const GENERATED_HEADER: &str =
    "/* This file is generated from design tokens. Do not edit it directly. */";

/// How the items of a token file become CSS values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Named values used verbatim
    Mappable,
    /// Pixel ranges turned into fluid clamps
    Range,
}

/// A token file known to the theme generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFile {
    pub file_name: &'static str,
    /// Custom property namespace, e.g. `color` for `--color-primary`
    pub prefix: &'static str,
    pub kind: TokenKind,
}

/// Token files in the order their sections appear in the stylesheet.
pub const TOKEN_FILES: &[TokenFile] = &[
    TokenFile {
        file_name: "colors.json",
        prefix: "color",
        kind: TokenKind::Mappable,
    },
    TokenFile {
        file_name: "fonts.json",
        prefix: "font",
        kind: TokenKind::Mappable,
    },
    TokenFile {
        file_name: "text-weights.json",
        prefix: "font-weight",
        kind: TokenKind::Mappable,
    },
    TokenFile {
        file_name: "text-leading.json",
        prefix: "leading",
        kind: TokenKind::Mappable,
    },
    TokenFile {
        file_name: "text-sizes.json",
        prefix: "text",
        kind: TokenKind::Range,
    },
    TokenFile {
        file_name: "spacing.json",
        prefix: "spacing",
        kind: TokenKind::Range,
    },
];

/// One flattened group of custom properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSection {
    pub prefix: &'static str,
    pub entries: IndexMap<String, String>,
}

/// All sections of a theme, in stylesheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub sections: Vec<ThemeSection>,
}

impl Theme {
    /// Load and transform every token file present in `tokens_dir`.
    ///
    /// The directory itself must exist; a missing or unreadable directory is a
    /// [`TokenError::Io`]. Individual token files are optional and skipped when
    /// absent. The viewport file is only read when at least one range file is
    /// present.
    pub fn load(tokens_dir: &Path) -> Result<Self> {
        ensure_directory(tokens_dir)?;

        let mut viewport: Option<ViewportTokens> = None;
        let mut sections = Vec::new();

        for file in TOKEN_FILES {
            if !tokens_dir.join(file.file_name).is_file() {
                debug!(file = file.file_name, "Token file not present, skipping");
                continue;
            }

            let tokens: Vec<MappableToken> = match file.kind {
                TokenKind::Mappable => {
                    parse_file::<TokenGroup<MappableToken>>(tokens_dir, file.file_name)?.items
                }
                TokenKind::Range => {
                    let group: TokenGroup<RangeToken> = parse_file(tokens_dir, file.file_name)?;
                    let viewport = match viewport {
                        Some(viewport) => viewport,
                        None => {
                            let loaded = load_viewport(tokens_dir, file.file_name)?;
                            viewport = Some(loaded);
                            loaded
                        }
                    };
                    generate_clamps(&group.items, &viewport, DEFAULT_ROOT_SIZE)?
                        .into_iter()
                        .map(MappableToken::from)
                        .collect()
                }
            };

            let entries = flatten(&tokens)?;
            debug!(file = file.file_name, count = entries.len(), "Flattened token group");
            sections.push(ThemeSection {
                prefix: file.prefix,
                entries,
            });
        }

        Ok(Self { sections })
    }

    /// Render the theme as CSS text.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        css.push_str(GENERATED_HEADER);
        css.push_str("\n\n@theme {\n");
        for section in &self.sections {
            for (slug, value) in &section.entries {
                css.push_str(&format!("  --{}-{}: {};\n", section.prefix, slug, value));
            }
        }
        css.push_str("}\n");
        css
    }

    /// Total number of custom properties across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn ensure_directory(tokens_dir: &Path) -> Result<()> {
    let io_error = |source| TokenError::Io {
        path: tokens_dir.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(tokens_dir).map_err(io_error)?;
    if !metadata.is_dir() {
        return Err(io_error(io::Error::new(
            ErrorKind::NotADirectory,
            "tokens path is not a directory",
        )));
    }
    Ok(())
}

fn load_viewport(tokens_dir: &Path, requested_by: &'static str) -> Result<ViewportTokens> {
    if !tokens_dir.join(VIEWPORTS_FILE).is_file() {
        return Err(TokenError::MissingViewports {
            file: requested_by,
            viewports: VIEWPORTS_FILE,
        });
    }
    parse_file(tokens_dir, VIEWPORTS_FILE)
}

/// Build the stylesheet text for a tokens directory.
pub fn generate_theme_css(tokens_dir: &Path) -> Result<String> {
    Ok(Theme::load(tokens_dir)?.to_css())
}

/// Outcome of [`write_theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeWrite {
    /// Whether the output file content changed
    pub written: bool,
}

/// Generate the stylesheet and write it to `output_path` if it differs from
/// what is already there.
///
/// Parent directories are created as needed. Running this twice with the same
/// tokens leaves the file untouched and reports `written: false`.
pub fn write_theme(tokens_dir: &Path, output_path: &Path) -> Result<ThemeWrite> {
    let css = generate_theme_css(tokens_dir)?;

    let io_error = |source| TokenError::Io {
        path: output_path.to_path_buf(),
        source,
    };

    match fs::read_to_string(output_path) {
        Ok(existing) if existing == css => {
            debug!(path = %output_path.display(), "Theme unchanged, skipping write");
            return Ok(ThemeWrite { written: false });
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(io_error(e)),
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(output_path, css).map_err(io_error)?;
    info!(path = %output_path.display(), "Wrote theme stylesheet");

    Ok(ThemeWrite { written: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory_renders_empty_block() {
        let dir = TempDir::new().unwrap();
        let theme = Theme::load(dir.path()).unwrap();
        assert!(theme.is_empty());
        assert_eq!(
            theme.to_css(),
            format!("{}\n\n@theme {{\n}}\n", GENERATED_HEADER)
        );
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("design-tokns");

        let err = Theme::load(&missing).unwrap_err();
        assert!(matches!(err, TokenError::Io { ref path, .. } if *path == missing));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_file_in_place_of_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("tokens");
        std::fs::write(&file, "{}").unwrap();

        let err = Theme::load(&file).unwrap_err();
        assert!(matches!(err, TokenError::Io { ref path, .. } if *path == file));
    }

    #[test]
    fn test_range_file_without_viewports() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("spacing.json"),
            r#"{"items": [{"name": "s", "min": 8, "max": 12}]}"#,
        )
        .unwrap();

        let err = Theme::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            TokenError::MissingViewports {
                file: "spacing.json",
                ..
            }
        ));
    }

    #[test]
    fn test_manifest_prefixes_are_unique() {
        let mut prefixes: Vec<&str> = TOKEN_FILES.iter().map(|f| f.prefix).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), TOKEN_FILES.len());
    }
}
