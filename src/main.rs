// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus CLI entrypoint.
//!
//! By default this runs the interactive TUI. `--list` and `--print` write to stdout and exit.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;

use proteus::model::{Catalog, CategoryKind};
use proteus::navigation::Navigator;
use proteus::render::render_scene_plain;
use proteus::scene::RendererRegistry;
use proteus::sequencer::{Clock, SequencerConfig, Speed, SystemClock};
use proteus::tui::{self, TuiTheme};

#[derive(Debug, Parser)]
#[command(
    name = "proteus",
    version,
    about = "Step through animated diagrams of software design patterns."
)]
struct Cli {
    /// Pattern id to start on (unknown ids fall back to the first pattern).
    #[arg(long, value_name = "ID")]
    pattern: Option<String>,

    /// Category to start in: creational, structural, behavioral or architectural.
    #[arg(long, value_name = "KIND")]
    category: Option<CategoryKind>,

    /// Initial autoplay speed multiplier.
    #[arg(long, value_name = "1|2", default_value = "1", value_parser = parse_speed)]
    speed: Speed,

    /// Base autoplay interval in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Load the catalog from a JSON file instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Write tracing output to this file (filter via PROTEUS_LOG).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the catalog and exit.
    #[arg(long, conflicts_with = "print")]
    list: bool,

    /// Print the selected pattern's scene and exit.
    #[arg(long)]
    print: bool,

    /// Step to print with --print.
    #[arg(long, value_name = "N", requires = "print")]
    step: Option<usize>,
}

impl Cli {
    fn sequencer_config(&self) -> SequencerConfig {
        let config = SequencerConfig::default().with_speed(self.speed);
        match self.tick_ms {
            Some(tick_ms) => config.with_tick_ms(tick_ms),
            None => config,
        }
    }
}

fn parse_speed(value: &str) -> Result<Speed, String> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(Speed::from_multiplier)
        .ok_or_else(|| format!("invalid speed `{value}` (expected 1 or 2)"))
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog from {}", path.display())),
        None => Catalog::builtin().context("loading built-in catalog"),
    }
}

fn apply_selection<C: Clock + Clone>(navigator: &mut Navigator<C>, cli: &Cli) {
    if let Some(kind) = cli.category {
        navigator.select_category(kind);
    }
    if let Some(id) = cli.pattern.as_deref() {
        navigator.select_pattern(id);
    }
}

fn catalog_listing(catalog: &Catalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        let _ = writeln!(out, "{}", category.kind().label());
        for pattern in category.patterns() {
            let steps = pattern.visual_steps().len();
            let _ = writeln!(out, "  {:<24} {:<32} {steps} steps", pattern.id(), pattern.name());
        }
    }
    out
}

/// Scene text for the active pattern at `step`, followed by the step caption.
fn scene_printout<C: Clock + Clone>(
    navigator: &mut Navigator<C>,
    step: usize,
) -> anyhow::Result<String> {
    let sequencer = navigator.sequencer_mut();
    for _ in 0..step.min(sequencer.max_position()) {
        sequencer.seek_next();
    }

    let scene = navigator.scene();
    let text = render_scene_plain(&scene)
        .with_context(|| format!("painting scene `{}`", scene.title()))?;
    let sequencer = navigator.sequencer();
    let pattern = navigator.active_pattern();

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", pattern.name(), pattern.category().label());
    let _ = writeln!(out);
    let _ = writeln!(out, "{text}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "[{}/{}] {}",
        sequencer.current_position(),
        sequencer.max_position(),
        sequencer.current_caption()
    );
    Ok(out)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(path) = cli.log_file.as_deref() {
        proteus::logging::init_file_logging(path)?;
    }

    let catalog = load_catalog(cli.catalog.as_deref())?;
    if cli.list {
        print!("{}", catalog_listing(&catalog));
        return Ok(());
    }

    let mut navigator = Navigator::new(
        Arc::new(catalog),
        Arc::new(RendererRegistry::builtin()),
        cli.sequencer_config(),
        SystemClock,
    );
    apply_selection(&mut navigator, &cli);

    if cli.print {
        print!("{}", scene_printout(&mut navigator, cli.step.unwrap_or(0))?);
        return Ok(());
    }

    let theme = TuiTheme::from_env()?;
    tui::run(navigator, theme).context("terminal UI failed")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use clap::Parser;

    use super::{apply_selection, catalog_listing, scene_printout, Cli};
    use proteus::model::{Catalog, CategoryKind};
    use proteus::navigation::Navigator;
    use proteus::scene::RendererRegistry;
    use proteus::sequencer::{ManualClock, Speed, MAX_TICK_MS};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("proteus").chain(args.iter().copied()))
    }

    fn navigator(cli: &Cli) -> Navigator<ManualClock> {
        let mut navigator = Navigator::new(
            Arc::new(Catalog::builtin().expect("catalog")),
            Arc::new(RendererRegistry::builtin()),
            cli.sequencer_config(),
            ManualClock::new(),
        );
        apply_selection(&mut navigator, cli);
        navigator
    }

    #[test]
    fn parses_empty_args() {
        let cli = parse(&[]).expect("parse");
        assert_eq!(cli.speed, Speed::Normal);
        assert!(cli.pattern.is_none());
        assert!(!cli.list && !cli.print);
    }

    #[test]
    fn parses_selection_and_timing() {
        let cli = parse(&[
            "--pattern",
            "observer",
            "--category",
            "Behavioral",
            "--speed",
            "2",
            "--tick-ms",
            "999999",
        ])
        .expect("parse");
        assert_eq!(cli.pattern.as_deref(), Some("observer"));
        assert_eq!(cli.category, Some(CategoryKind::Behavioral));

        let config = cli.sequencer_config();
        assert_eq!(config.initial_speed, Speed::Fast);
        assert_eq!(config.base_interval.as_millis() as u64, MAX_TICK_MS);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["--speed", "3"]).is_err());
        assert!(parse(&["--category", "quantum"]).is_err());
        assert!(parse(&["--step", "2"]).is_err());
        assert!(parse(&["--list", "--print"]).is_err());
    }

    #[test]
    fn pattern_wins_over_category() {
        let cli = parse(&["--category", "structural", "--pattern", "observer"]).expect("parse");
        let navigator = navigator(&cli);
        assert_eq!(navigator.active_pattern().id().as_str(), "observer");
        assert_eq!(navigator.active_category(), CategoryKind::Behavioral);
    }

    #[test]
    fn listing_names_every_category() {
        let listing = catalog_listing(&Catalog::builtin().expect("catalog"));
        for kind in CategoryKind::ALL {
            assert!(listing.contains(kind.label()), "{kind} missing");
        }
        assert!(listing.contains("singleton"));
    }

    #[test]
    fn printout_clamps_step_and_shows_caption() {
        let cli = parse(&["--print", "--pattern", "singleton", "--step", "99"]).expect("parse");
        let mut navigator = navigator(&cli);
        let out = scene_printout(&mut navigator, 99).expect("printout");
        let max = navigator.sequencer().max_position();
        assert_eq!(navigator.sequencer().current_position(), max);
        assert!(out.starts_with("Singleton (Creational)"));
        assert!(out.contains(&format!("[{max}/{max}]")));
    }
}
