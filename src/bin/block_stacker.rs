//! Block Stacker - Headless Presenter
//!
//! Replays a click script against the placement core and prints what a
//! windowed presenter would show: one status line per click, then the
//! placed-cell listing. The final scene mesh size is logged.
//!
//! Run with: `cargo run --bin block_stacker -- [--config cfg.json] [--json] [script.txt]`
//!
//! Without a script path, clicks are read from stdin. `RUST_LOG=debug` shows
//! every state transition.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};

use block_stacker_engine::game::builder::IDLE_STATUS;
use block_stacker_engine::game::{PlacementStateMachine, StackerConfig, parse_click_script};
use block_stacker_engine::render::format_hex_color;

struct Args {
    config: Option<PathBuf>,
    json: bool,
    script: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config: None,
        json: false,
        script: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--json" => args.json = true,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => {
                if args.script.is_some() {
                    bail!("only one script path may be given");
                }
                args.script = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => StackerConfig::load(path)?,
        None => StackerConfig::default(),
    };
    let mut stacker = PlacementStateMachine::from_config(&config)?;

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read clicks from stdin")?;
            buf
        }
    };
    let clicks = parse_click_script(&script)?;

    let bounds = stacker.bounds();
    let palette = stacker.palette();
    log::info!(
        "Lattice [{}, {}] x [{}, {}] x [0, {}]: {} markers, axes to +/-{}, {} clicks",
        bounds.min_xyz,
        bounds.max_xyz,
        bounds.min_xyz,
        bounds.max_xyz,
        bounds.max_xyz,
        bounds.lattice_len(),
        bounds.axis_extent(),
        clicks.len()
    );
    log::info!(
        "Palette: edges {}, faces {}",
        format_hex_color(palette.edge),
        format_hex_color(palette.face)
    );

    if !args.json {
        println!("{IDLE_STATUS}");
    }

    let mut accepted = 0usize;
    for point in clicks {
        let response = stacker.on_click(point);
        if response.outcome.is_accepted() {
            accepted += 1;
        }
        if args.json {
            println!("{}", serde_json::to_string(&response)?);
        } else {
            println!("{}", response.status);
        }
    }

    if !args.json {
        println!();
        println!("{}", stacker.listing());
    }
    log::info!(
        "{} placed, {} blocks in scene",
        accepted,
        stacker.current_occupied_cells().len()
    );

    let mesh = stacker.scene_mesh();
    if mesh.is_empty() {
        log::info!("Scene mesh: empty");
    } else {
        log::info!(
            "Scene mesh: {} vertices ({} bytes), {} indices ({} bytes), {} edge vertices",
            mesh.vertices.len(),
            mesh.vertex_bytes().len(),
            mesh.indices.len(),
            mesh.index_bytes().len(),
            stacker.scene_edges().len()
        );
    }
    Ok(())
}
