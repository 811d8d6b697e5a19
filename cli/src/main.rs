use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use floorplan::config::EditorConfig;
use floorplan::dimension::SideOverrides;
use floorplan::engine::{Action, EngineCore};
use floorplan::error::EditorError;
use floorplan::geometry::Point;
use floorplan::input::{Button, Modifiers, WheelDelta};
use floorplan::wall::{FloorBounds, WallStore};
use serde::Deserialize;
use serde_json::{Value, json};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "floorplan-cli", about = "Replay and inspect floor-plan editing sessions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted pointer session and print every action.
    Replay(ReplayArgs),
    /// Print floor bounds, wall endpoints and annotation sides.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct Viewport {
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// JSON array of walls, floor included.
    #[arg(long)]
    walls: PathBuf,
    /// JSON array of pointer events.
    #[arg(long)]
    script: PathBuf,
    /// Optional JSON tuning object.
    #[arg(long, env = "FLOORPLAN_CONFIG")]
    config: Option<PathBuf>,
    #[command(flatten)]
    viewport: Viewport,
}

#[derive(Args, Debug)]
struct InspectArgs {
    #[arg(long)]
    walls: PathBuf,
    #[command(flatten)]
    viewport: Viewport,
}

/// One scripted input event, in view pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ScriptEvent {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up,
    Leave,
    Wheel {
        #[serde(default)]
        dx: f64,
        dy: f64,
    },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Replay(args) => run_replay(&args),
        Command::Inspect(args) => run_inspect(&args),
    }
}

fn run_replay(args: &ReplayArgs) -> Result<(), CliError> {
    let walls = read(&args.walls)?;
    let script = read(&args.script)?;
    let config = match &args.config {
        Some(path) => EditorConfig::from_json(&read(path)?)?,
        None => EditorConfig::default(),
    };
    let (actions, store) = replay(&walls, &script, config, &args.viewport)?;
    for action in &actions {
        println!("{}", serde_json::to_string(action)?);
    }
    println!("{}", serde_json::to_string_pretty(store.walls())?);
    Ok(())
}

fn run_inspect(args: &InspectArgs) -> Result<(), CliError> {
    let store = WallStore::from_json(&read(&args.walls)?)?;
    let report = inspect(&store, &args.viewport);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Feed `script` through an engine over `walls_json`, applying each action as a host would.
fn replay(
    walls_json: &str,
    script_json: &str,
    config: EditorConfig,
    viewport: &Viewport,
) -> Result<(Vec<Action>, WallStore), CliError> {
    let mut store = WallStore::from_json(walls_json)?;
    if store.is_empty() {
        tracing::warn!("no walls loaded");
    }
    let events: Vec<ScriptEvent> = serde_json::from_str(script_json)?;
    let mut core = EngineCore::with_config(config);

    let mut log = core.load(store.walls());
    log.extend(core.set_viewport(store.walls(), viewport.width, viewport.height));
    store.apply_all(&log);

    for event in events {
        let actions = match event {
            ScriptEvent::Down { x, y, button, modifiers } => {
                core.on_pointer_down(store.walls(), Point::new(x, y), button, modifiers)
            }
            ScriptEvent::Move { x, y } => core.on_pointer_move(store.walls(), Point::new(x, y)),
            ScriptEvent::Up => core.on_pointer_up(),
            ScriptEvent::Leave => core.on_pointer_leave(),
            ScriptEvent::Wheel { dx, dy } => core.on_wheel(store.walls(), WheelDelta { dx, dy }),
        };
        store.apply_all(&actions);
        log.extend(actions);
    }
    tracing::debug!(events = log.len(), "replay finished");
    Ok((log, store))
}

fn inspect(store: &WallStore, viewport: &Viewport) -> Value {
    let found = FloorBounds::find(store.walls());
    let bounds = found.unwrap_or_default();
    let mut core = EngineCore::new();
    core.set_viewport(store.walls(), viewport.width, viewport.height);
    let annotations = core.dimension_annotations(store.walls(), &SideOverrides::new());

    let walls: Vec<Value> = store
        .walls()
        .iter()
        .filter(|w| !w.is_floor())
        .zip(&annotations)
        .map(|(wall, ann)| {
            let (a, b) = wall.endpoints();
            json!({
                "id": wall.id,
                "width": wall.width,
                "a": a,
                "b": b,
                "side": ann.side,
            })
        })
        .collect();

    json!({
        "floorFound": found.is_some(),
        "wallCount": store.len(),
        "bounds": {
            "minX": bounds.min_x,
            "maxX": bounds.max_x,
            "minZ": bounds.min_z,
            "maxZ": bounds.max_z,
        },
        "walls": walls,
    })
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}
