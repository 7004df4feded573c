//! Box Placement CLI
//!
//! Usage:
//!   box-placement [OPTIONS] [SCENE]
//!
//! Reads a scene (layout snapshot plus `[place]` request, TOML) from a file
//! or stdin, applies command-line overrides, and prints the placement
//! result as TOML. Set `RUST_LOG=box_placement=debug` to trace the
//! measured geometry on stderr.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use box_placement::scene::parse_subject;
use box_placement::{
    AnchorPair, BoxRef, CollisionStrategy, PlaceRequest, Scene, SceneError,
};

#[derive(Parser)]
#[command(name = "box-placement")]
#[command(about = "Position a box relative to another box using anchor points")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    scene: Option<PathBuf>,

    /// Element to place (overrides `place.element`)
    #[arg(long)]
    element: Option<String>,

    /// Anchor on the element, e.g. "right top"
    #[arg(long)]
    my: Option<String>,

    /// Anchor on the target, e.g. "left bottom"
    #[arg(long)]
    at: Option<String>,

    /// Target: a reference name, "x,y" or "x,y,frame"
    #[arg(long)]
    of: Option<String>,

    /// Container: a reference name, "x,y" or "x,y,frame"
    #[arg(long)]
    within: Option<String>,

    /// Extra horizontal offset in pixels
    #[arg(long, allow_hyphen_values = true)]
    offset_x: Option<f64>,

    /// Extra vertical offset in pixels
    #[arg(long, allow_hyphen_values = true)]
    offset_y: Option<f64>,

    /// Collision strategy for a side, e.g. "left=push" (repeatable)
    #[arg(short, long, value_name = "SIDE=STRATEGY")]
    collision: Vec<String>,

    /// Print the measurement of a reference instead of placing
    #[arg(long, value_name = "REF")]
    measure: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.scene.is_none() && io::stdin().is_terminal() {
        eprintln!("Error: no scene given (pass a file or pipe TOML on stdin)");
        std::process::exit(2);
    }

    let source = match &cli.scene {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match run(&cli, &source) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, source: &str) -> Result<String, SceneError> {
    let mut scene = Scene::from_str(source)?;

    if let Some(reference) = &cli.measure {
        let measurement = scene.measure(&BoxRef::from(reference.as_str()))?;
        return Ok(toml::to_string_pretty(&measurement)?);
    }

    scene.request = Some(apply_overrides(cli, scene.request.take())?);
    let result = scene.place()?;
    Ok(toml::to_string_pretty(&result)?)
}

fn apply_overrides(cli: &Cli, request: Option<PlaceRequest>) -> Result<PlaceRequest, SceneError> {
    let mut request = match (request, &cli.element) {
        (Some(mut request), Some(element)) => {
            request.element = BoxRef::from(element.as_str());
            request
        }
        (Some(request), None) => request,
        (None, Some(element)) => PlaceRequest::new(BoxRef::from(element.as_str())),
        (None, None) => return Err(SceneError::MissingElement),
    };

    if let Some(my) = &cli.my {
        request.my = AnchorPair::parse(my);
    }
    if let Some(at) = &cli.at {
        request.at = AnchorPair::parse(at);
    }
    if let Some(of) = &cli.of {
        request.of = parse_subject(of);
    }
    if let Some(within) = &cli.within {
        request.within = Some(parse_subject(within));
    }
    if let Some(offset_x) = cli.offset_x {
        request.offset_x = offset_x;
    }
    if let Some(offset_y) = cli.offset_y {
        request.offset_y = offset_y;
    }
    for entry in &cli.collision {
        let (side, strategy) = entry.split_once('=').unwrap_or((entry.as_str(), "none"));
        if !request
            .collision
            .set_side(side, CollisionStrategy::from_keyword(strategy))
        {
            tracing::warn!(side, "ignoring collision override for unknown side");
        }
    }

    Ok(request)
}
