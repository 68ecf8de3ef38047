mod config;
mod script;
mod surface;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::Parser;
use picker::bridge::{RenderBridge, SurfaceEvent};
use picker::geo::RawCoordinate;
use picker::marker::{Marker, MarkerCollection};
use picker::model::{MarkerStateModel, ModeKind, WidgetInit};
use picker::notify::Notification;
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::MapConfig;
use crate::script::ScriptCommand;
use crate::surface::JsonSurface;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mappicker", about = "Drive a map-picker widget from a script and print its events as JSON lines")]
struct Cli {
    /// Initial latitude (number or numeric text; blank means none).
    #[arg(long, env = "MAPPICKER_LATITUDE", allow_hyphen_values = true)]
    latitude: Option<String>,

    /// Initial longitude (number or numeric text; blank means none).
    #[arg(long, env = "MAPPICKER_LONGITUDE", allow_hyphen_values = true)]
    longitude: Option<String>,

    /// Initial single marker as JSON, e.g. '{"lat": 1, "lng": 2, "label": "Home"}'.
    #[arg(long)]
    marker: Option<String>,

    /// Path to a JSON array of markers; takes priority over --marker.
    #[arg(long)]
    markers: Option<String>,

    #[arg(long, default_value_t = false)]
    non_interactive: bool,

    #[arg(long)]
    show_label: Option<bool>,

    #[arg(long)]
    show_paste_button: Option<bool>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    zoom: Option<u8>,

    #[arg(long, default_value = "-", help = "Script file path, or - for stdin")]
    script: String,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MapConfig::from_env()?;
    let model = MarkerStateModel::initialize(widget_init(&cli, &config)?);
    let options = model.options();

    info!(
        mode = ?model.mode().kind(),
        interactive = options.interactive,
        zoom = options.zoom,
        "widget initialized"
    );
    print_json(&json!({
        "init": {
            "center": model.display_center(config.default_center),
            "zoom": options.zoom,
            "height": options.height,
            "interactive": options.interactive,
            "showLabel": options.show_label,
            "showPasteButton": options.show_paste_button,
            "tileLayer": &config.tile_layer,
        }
    }))?;

    let mut bridge = RenderBridge::new(model);
    bridge.attach(JsonSurface::new(true));
    flush_surface(&mut bridge)?;

    let reader = open_script(&cli.script)?;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io { path: cli.script.clone(), source })?;
        let line_no = index + 1;
        match script::parse_line(&line) {
            Ok(Some(command)) => run_command(&mut bridge, command)?,
            Ok(None) => {}
            Err(e) => {
                warn!(line = line_no, error = %e, "script line skipped");
                print_json(&json!({ "error": e.to_string(), "line": line_no }))?;
            }
        }
    }
    Ok(())
}

fn widget_init(cli: &Cli, config: &MapConfig) -> Result<WidgetInit, CliError> {
    let markers = match &cli.markers {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io { path: path.clone(), source })?;
            Some(serde_json::from_str::<MarkerCollection>(&raw)?)
        }
        None => None,
    };
    let marker = cli.marker.as_deref().map(serde_json::from_str::<Marker>).transpose()?;

    let mut options = config.widget;
    if cli.non_interactive {
        options.interactive = false;
    }
    if let Some(show_label) = cli.show_label {
        options.show_label = show_label;
    }
    if let Some(show_paste_button) = cli.show_paste_button {
        options.show_paste_button = show_paste_button;
    }
    if let Some(height) = cli.height {
        options.height = height;
    }
    if let Some(zoom) = cli.zoom {
        options.zoom = zoom;
    }

    Ok(WidgetInit {
        latitude: cli.latitude.clone().map(RawCoordinate::from),
        longitude: cli.longitude.clone().map(RawCoordinate::from),
        marker,
        markers,
        options,
    })
}

fn open_script(path: &str) -> Result<Box<dyn BufRead>, CliError> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
    Ok(Box::new(BufReader::new(file)))
}

fn run_command(bridge: &mut RenderBridge<JsonSurface>, command: ScriptCommand) -> Result<(), CliError> {
    let notifications: Vec<Notification> = match command {
        ScriptCommand::Click { lat, lng } => bridge.handle_event(SurfaceEvent::PointClicked { lat, lng }),
        ScriptCommand::Drag { lat, lng } => bridge.handle_event(SurfaceEvent::MarkerDragEnded { lat, lng }),
        ScriptCommand::Toggle => {
            bridge.toggle_input_visibility();
            Vec::new()
        }
        ScriptCommand::Type(text) => {
            bridge.set_input_text(text);
            Vec::new()
        }
        ScriptCommand::Apply(text) => {
            let out = match text {
                Some(text) => bridge.apply_text(&text),
                None => bridge.apply_input(),
            };
            if let Some(error) = bridge.model().input().error().filter(|_| out.is_empty()) {
                print_json(&json!({ "validation": { "field": error.field, "message": error.message() } }))?;
            }
            out
        }
        ScriptCommand::Add(marker) => {
            bridge.add_marker(marker);
            Vec::new()
        }
        ScriptCommand::Remove(index) => {
            if bridge.remove_marker(index).is_none() {
                print_json(&json!({ "ignored": "remove", "index": index }))?;
            }
            Vec::new()
        }
        ScriptCommand::Clear => {
            bridge.clear();
            Vec::new()
        }
        ScriptCommand::State => {
            print_json(&state_json(bridge.model()))?;
            Vec::new()
        }
        ScriptCommand::Ready(ready) => {
            if let Some(surface) = bridge.surface_mut() {
                surface.set_ready(ready);
            }
            if ready {
                bridge.sync_view();
            }
            Vec::new()
        }
    };

    for notification in &notifications {
        print_json(&json!({ "notification": notification }))?;
    }
    flush_surface(bridge)
}

fn state_json(model: &MarkerStateModel) -> Value {
    let mode = match model.mode().kind() {
        ModeKind::Empty => "empty",
        ModeKind::Single => "single",
        ModeKind::Multi => "multi",
    };
    let input = model.input();
    json!({
        "state": {
            "mode": mode,
            "latitude": model.latitude(),
            "longitude": model.longitude(),
            "markers": model.project_render_data(),
            "input": {
                "visible": input.is_visible(),
                "text": input.text(),
                "error": input.error().map(picker::error::FieldError::message),
            },
        }
    })
}

fn flush_surface(bridge: &mut RenderBridge<JsonSurface>) -> Result<(), CliError> {
    let commands = bridge.surface_mut().map(JsonSurface::drain).unwrap_or_default();
    for command in commands {
        print_json(&json!({ "surface": command }))?;
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string(value)?;
    println!("{rendered}");
    Ok(())
}
