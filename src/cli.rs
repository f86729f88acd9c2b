//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use n_icon::{Blake3, HashError, IconHash, Options, Sha1};

/// Render a deterministic identicon as SVG
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hex hash (11+ digits) or any value to hash first
    pub value: String,

    /// Icon width and height in pixels
    #[arg(short, long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Digest for values that are not already a hex hash
    #[arg(long = "hash", value_enum, default_value = "sha1")]
    pub hash_fn: HashKind,

    /// Emit a base64 `data:image/svg+xml` URI instead of raw SVG
    #[arg(long)]
    pub data_uri: bool,

    /// Write the SVG here instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Style options file (TOML, or JSON by extension)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Padding as a fraction of the icon size
    #[arg(long)]
    pub padding: Option<f64>,

    /// Background color: #rgb, #rgba, #rrggbb or #rrggbbaa
    #[arg(long)]
    pub back_color: Option<String>,

    /// Allowed hue in degrees; repeat to allow several
    #[arg(long = "hue", value_name = "DEG")]
    pub hues: Vec<f64>,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

/// Digests selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    Sha1,
    Blake3,
}

impl HashKind {
    /// Use `value` as the hash if it is one, otherwise digest it.
    pub fn icon_hash(self, value: &str) -> Result<IconHash, HashError> {
        match self {
            Self::Sha1 => IconHash::from_value(value, &Sha1),
            Self::Blake3 => IconHash::from_value(value, &Blake3),
        }
    }
}

impl Cli {
    /// Style overrides given directly on the command line.
    pub fn options(&self) -> Options {
        Options {
            hues: (!self.hues.is_empty()).then(|| self.hues.clone()),
            back_color: self.back_color.clone(),
            padding: self.padding,
            ..Options::default()
        }
    }
}
