//! CLI definitions and command dispatch.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use fontface_core::config::{
    DEFAULT_FALLBACK, DEFAULT_FONTS_ROOT, DEFAULT_STANDARD_CSS, DEFAULT_TAILWIND_CSS,
};
use log::LevelFilter;

use crate::commands::{list_families, run_standard, run_tailwind};

#[derive(Parser)]
#[command(name = "fontface", version)]
#[command(about = "Generate @font-face rules and Tailwind theme tokens from a fonts directory")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root that relative paths resolve against
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn run(self) -> Result<()> {
        self.command.run(&self.root)
    }
}

/// Where to look for fonts and which families to use.
#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// Directory holding one subdirectory per font family
    #[arg(long, default_value = DEFAULT_FONTS_ROOT)]
    pub fonts_root: PathBuf,

    /// Family directory to include (repeatable; all families when omitted)
    #[arg(short, long = "family")]
    pub families: Vec<String>,

    /// Only look at files directly inside each family directory
    #[arg(long)]
    pub flat: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Write the file extension as the format() hint instead of the CSS keyword
    #[arg(long)]
    pub raw_format: bool,

    /// Generic family listed after each generated face
    #[arg(long, default_value = DEFAULT_FALLBACK)]
    pub fallback: String,

    /// Print the resulting stylesheet instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Update @theme tokens and @font-face rules in an existing Tailwind stylesheet
    Tailwind {
        #[command(flatten)]
        scan: ScanArgs,
        #[command(flatten)]
        render: RenderArgs,
        /// Tailwind stylesheet to update (must already exist)
        #[arg(long, default_value = DEFAULT_TAILWIND_CSS)]
        css: PathBuf,
        /// Remove the generated blocks for the selected families instead
        #[arg(long)]
        clean: bool,
        /// Write theme tokens as `font-*` instead of `--font-*`
        #[arg(long)]
        bare_tokens: bool,
    },
    /// Write a standalone stylesheet of @font-face rules and utility classes
    Standard {
        #[command(flatten)]
        scan: ScanArgs,
        #[command(flatten)]
        render: RenderArgs,
        /// Output stylesheet (created or overwritten)
        #[arg(short, long, default_value = DEFAULT_STANDARD_CSS)]
        out: PathBuf,
        /// Skip the .font-* utility classes
        #[arg(long)]
        no_classes: bool,
    },
    /// List family directories and the styles inferred for them
    Families {
        #[command(flatten)]
        scan: ScanArgs,
    },
}

impl Commands {
    pub fn run(self, root: &Path) -> Result<()> {
        match self {
            Commands::Tailwind { scan, render, css, clean, bare_tokens } => {
                run_tailwind(root, &scan, &render, &css, clean, bare_tokens)?;
            }
            Commands::Standard { scan, render, out, no_classes } => {
                run_standard(root, &scan, &render, &out, !no_classes)?;
            }
            Commands::Families { scan } => {
                list_families(root, &scan)?;
            }
        }
        Ok(())
    }
}
