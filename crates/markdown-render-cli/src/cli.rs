use std::{fmt, path::PathBuf};

use clap::Parser;
use markdown_render_config::Config;
use markdown_render_engine::Format;

/// Convert a Markdown file to HTML or ANSI terminal text.
#[derive(Debug, Parser)]
#[command(name = "markdown-render", version, about)]
pub struct Cli {
    /// Path to the input Markdown file.
    pub input_file: PathBuf,

    /// Write output to this file instead of standard output.
    #[arg(long = "out", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Output format: html or ansi [default: html with --out, ansi otherwise].
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<Format>,

    /// Config file [default: ~/.config/markdown-render/config.toml].
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress to standard error.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the chosen output format came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSource {
    Flag,
    Config,
    Builtin,
}

impl fmt::Display for FormatSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormatSource::Flag => "--format",
            FormatSource::Config => "config file",
            FormatSource::Builtin => "built-in default",
        })
    }
}

impl Cli {
    pub fn writes_to_file(&self) -> bool {
        self.output_file.is_some()
    }

    /// Picks the output format: `--format`, then the config default for the
    /// destination, then `html` for files and `ansi` for standard output.
    pub fn resolve_format(&self, config: Option<&Config>) -> (Format, FormatSource) {
        if let Some(format) = self.format {
            return (format, FormatSource::Flag);
        }
        if let Some(format) = config.and_then(|c| c.default_format(self.writes_to_file())) {
            return (format, FormatSource::Config);
        }
        let format = if self.writes_to_file() {
            Format::Html
        } else {
            Format::Ansi
        };
        (format, FormatSource::Builtin)
    }
}
