//! Theme binary - generates and watches the design-token stylesheet

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use theme_dev::ThemeOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "theme")]
#[command(version, about = "Generate a theme stylesheet from design tokens")]
struct Cli {
    /// Project root that relative paths are resolved against (defaults to current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Config file, relative to the current directory (defaults to theme.toml in the project root, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the stylesheet once and exit (fails on any token error)
    Build {
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Generate the stylesheet, then regenerate whenever token files change
    Dev {
        #[command(flatten)]
        options: OptionArgs,

        /// Debounce window for filesystem events in milliseconds
        #[arg(long, value_name = "MS")]
        debounce_ms: Option<u64>,
    },
}

/// Command line overrides for the theme config.
#[derive(Args, Debug, Default)]
struct OptionArgs {
    /// Glob matching the token files to watch
    #[arg(long, value_name = "GLOB")]
    tokens_glob: Option<String>,

    /// Path of the generated stylesheet
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Directory the token files are read from
    #[arg(long, value_name = "DIR")]
    tokens_dir: Option<String>,
}

impl OptionArgs {
    fn into_options(self, debounce_ms: Option<u64>) -> ThemeOptions {
        ThemeOptions {
            tokens_glob: self.tokens_glob,
            output_path: self.output,
            tokens_dir: self.tokens_dir,
            debounce_ms,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "theme=info,theme_dev=info,theme_tokens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Build { options } => commands::build::execute(commands::ThemeArgs {
            root,
            config: cli.config,
            overrides: options.into_options(None),
        }),
        Commands::Dev {
            options,
            debounce_ms,
        } => commands::dev::execute(commands::ThemeArgs {
            root,
            config: cli.config,
            overrides: options.into_options(debounce_ms),
        }),
    }
}
