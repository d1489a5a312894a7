//! Command-line front end for the wander kernel.
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use wander::{init_logging, EntityFrame, FrameTick, PointerState, SceneDriver, WanderSettings};

/// Noise-driven floating shapes with soft collisions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// TOML file layered over the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the scene headlessly and print one JSON line per tick
    Simulate {
        /// Number of frames to advance
        #[arg(long, default_value_t = 600)]
        ticks: u32,
        /// Seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        delta: f32,
        /// Fixed pointer in NDC, as `x,y`
        #[arg(long, value_parser = parse_pointer)]
        pointer: Option<PointerState>,
        /// Camera aspect ratio (width / height)
        #[arg(long)]
        aspect: Option<f32>,
    },
    /// Print the effective configuration as JSON
    Scene,
    /// Fetch and print the project feed as JSON
    #[cfg(feature = "projects")]
    Projects,
}

#[derive(Serialize)]
struct TickRecord<'a> {
    tick: u32,
    elapsed: f64,
    entities: &'a [EntityFrame],
}

fn parse_pointer(raw: &str) -> Result<PointerState, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{raw}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate `{part}`: {e}"))
    };
    Ok(PointerState::new(parse(x)?, parse(y)?))
}

fn simulate(
    settings: &WanderSettings,
    ticks: u32,
    delta: f32,
    pointer: Option<PointerState>,
    out: &mut impl Write,
) -> Result<()> {
    let mut driver = SceneDriver::from_settings(settings)?;
    let viewport = driver.viewport();
    info!(
        "simulating {} entities for {ticks} ticks at {delta}s",
        driver.len()
    );

    for tick in 1..=ticks {
        let elapsed = f64::from(tick) * f64::from(delta);
        let frames = driver.tick(FrameTick::new(elapsed, delta), pointer, viewport);
        let record = TickRecord {
            tick,
            elapsed,
            entities: &frames,
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut settings = WanderSettings::load(args.config.as_deref())
        .with_context(|| "failed to load configuration")?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Command::Simulate {
            ticks,
            delta,
            pointer,
            aspect,
        } => {
            if let Some(ratio) = aspect {
                settings.camera = settings.camera.with_aspect(ratio);
            }
            simulate(&settings, ticks, delta, pointer, &mut out)?;
        }
        Command::Scene => {
            serde_json::to_writer_pretty(&mut out, &settings)?;
            writeln!(out)?;
        }
        #[cfg(feature = "projects")]
        Command::Projects => {
            let source = wander::projects::HttpRepoSource::new()?;
            let projects = wander::fetch_projects(&source, &settings.projects);
            serde_json::to_writer_pretty(&mut out, &projects)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.5,-0.25", PointerState::new(0.5, -0.25))]
    #[case(" 1 , 0 ", PointerState::new(1.0, 0.0))]
    fn pointers_parse_from_pairs(#[case] raw: &str, #[case] expected: PointerState) {
        assert_eq!(parse_pointer(raw), Ok(expected));
    }

    #[rstest]
    #[case("0.5")]
    #[case("left,0")]
    fn malformed_pointers_are_rejected(#[case] raw: &str) {
        assert!(parse_pointer(raw).is_err());
    }

    #[test]
    fn simulate_writes_one_line_per_tick() {
        let mut out = Vec::new();
        simulate(&WanderSettings::default(), 3, 0.1, None, &mut out).expect("simulate");
        let text = String::from_utf8(out).expect("utf-8 output");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        let last: serde_json::Value = serde_json::from_str(lines[2]).expect("json line");
        assert_eq!(last["tick"], 3);
        assert_eq!(last["entities"].as_array().map(Vec::len), Some(6));
    }
}
