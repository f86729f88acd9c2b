// SPDX-License-Identifier: MIT
//
// n-ident — render a deterministic identicon as SVG.
//
// This is the main binary that wires the two library crates together:
//
//   n-icon → hash validation, configuration, palette, shape layout
//   n-draw → the Renderer trait and the SVG backend
//
// One invocation renders one icon:
//
//   VALUE ─→ IconHash::from_value (SHA-1 unless already a hex hash)
//   -C file + style flags ─→ Options::merge ─→ Config::resolve
//   generate(SvgRenderer) ─→ SVG or --data-uri ─→ stdout or --output

mod cli;
mod logger;

use std::fs;
use std::io::{Write, stdout};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use n_draw::color::parse_color;
use n_draw::{Renderer, SvgRenderer};
use n_icon::{Config, Options, generate, svg_data_uri};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    logger::init(cli.verbose);

    let svg = render(&cli)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &svg).with_context(|| format!("failed to write `{}`", path.display()))?;
            log::info!("wrote {} ({} bytes)", path.display(), svg.len());
        }
        None => {
            let mut out = stdout().lock();
            writeln!(out, "{svg}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Resolve the hash and style from the command line and draw the icon.
fn render(cli: &Cli) -> Result<String> {
    let hash = cli
        .hash_fn
        .icon_hash(&cli.value)
        .with_context(|| format!("cannot derive an icon hash from {:?}", cli.value))?;
    log::debug!("hash: {hash}");

    let config = Config::resolve(Some(&options(cli)?));

    let mut renderer = SvgRenderer::with_size(cli.size);
    generate(&mut renderer, &hash, &config);
    log::debug!("rendered {}px icon", renderer.icon_size());

    let svg = renderer.into_writer().into_svg();
    Ok(if cli.data_uri { svg_data_uri(&svg) } else { svg })
}

/// File options with command-line flags layered on top.
fn options(cli: &Cli) -> Result<Options> {
    let file = match &cli.config {
        Some(path) => {
            let options = Options::load(path)
                .with_context(|| format!("failed to load config `{}`", path.display()))?;
            log::debug!("loaded options from {}", path.display());
            options
        }
        None => Options::default(),
    };

    let merged = file.merge(cli.options());
    if let Some(color) = merged.back_color.as_deref().filter(|c| parse_color(c).is_empty()) {
        log::warn!("unrecognized background color {color:?}, drawing without background");
    }
    Ok(merged)
}
