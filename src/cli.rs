//! CLI Argument Parsing
//!
//! Flag names follow the camelCase spelling of the configuration file
//! (`--outDir`, `--outFile`) so the two read alike.

use std::path::PathBuf;

use clap::Parser;
use njk::config::CliFlags;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// njk - render or precompile templates, optionally watching for changes
#[derive(Parser, Debug)]
#[command(name = "njk")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: njk '**/*.njk' data.json -p src -D dist -r -w")]
pub struct Cli {
    /// Glob pattern selecting templates, relative to --path
    pub pattern: String,

    /// JSON file whose object becomes the render context
    pub data: Option<PathBuf>,

    /// Template root directory
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output root directory (defaults to the template root)
    #[arg(short = 'D', long = "outDir", visible_alias = "out")]
    pub out_dir: Option<PathBuf>,

    /// Bundle every precompiled template into one file (precompile only)
    #[arg(long = "outFile")]
    pub out_file: Option<PathBuf>,

    /// Re-render on changes (render mode only)
    #[arg(short, long)]
    pub watch: bool,

    /// Render templates instead of precompiling them
    #[arg(short, long)]
    pub render: bool,

    /// Output file extension (default: html when rendering, js when precompiling)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Extension modules to load, in order (built-in name or JSON file)
    #[arg(short = 'E', long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// JSON configuration file
    #[arg(short = 'O', long)]
    pub options: Option<PathBuf>,

    /// Disable HTML autoescaping
    #[arg(short, long = "unsafe")]
    pub unsafe_output: bool,

    /// Basename prefix marking layout files
    #[arg(long)]
    pub layout_prefix: Option<String>,

    /// Output events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn flags(&self) -> CliFlags {
        CliFlags {
            pattern: self.pattern.clone(),
            data_file: self.data.clone(),
            path: self.path.clone(),
            out_dir: self.out_dir.clone(),
            out_file: self.out_file.clone(),
            watch: self.watch,
            render: self.render,
            extension: self.extension.clone(),
            extensions: self.extensions.clone(),
            options: self.options.clone(),
            unsafe_output: self.unsafe_output,
            layout_prefix: self.layout_prefix.clone(),
        }
    }
}
