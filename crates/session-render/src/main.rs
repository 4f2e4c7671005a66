//! Binary entrypoint: render one session variable from a JSON store.
use std::{fs, path::PathBuf, process};

use clap::Parser;
use serde_json::Value as JsonValue;
use session_value::{SessionStore, SessionValueConfig, SessionValueRenderer, Value};
use tracing::debug;

/// Error type for the binary.
mod error;

use crate::error::Error;

#[derive(Parser, Debug)]
#[command(
    name = "session-render",
    about = "Render a session variable through a layout token",
    version
)]
/// Command-line interface for the `session-render` binary.
struct Cli {
    /// JSON file whose top-level object seeds the session
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Insert one session entry; VALUE is JSON, or plain text if it does not parse
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Layout token, e.g. '${session:a.b:evaluateAsNestedProperties=true}'
    #[arg(long, conflicts_with_all = ["variable", "nested", "padding", "culture"])]
    layout: Option<String>,

    /// Variable to render when no layout token is given
    #[arg(long)]
    variable: Option<String>,

    /// Walk the variable as a dotted member path
    #[arg(long)]
    nested: bool,

    /// Pad to this width (negative pads on the right)
    #[arg(long, allow_hyphen_values = true)]
    padding: Option<i32>,

    /// Culture for numbers and dates, e.g. en-GB
    #[arg(long)]
    culture: Option<String>,

    /// Logging controls
    #[command(flatten)]
    log: logging::LogArgs,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log);

    match run(&cli) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("session-render: {e}");
            process::exit(1);
        }
    }
}

/// Load the session, build the renderer and render.
fn run(cli: &Cli) -> Result<String, Error> {
    let session = load_session(cli)?;
    let renderer = SessionValueRenderer::new(build_config(cli)?);
    debug!(layout = %renderer.config(), entries = session.len(), "rendering");
    Ok(renderer.render(&session))
}

/// Renderer configuration from `--layout`, or from the discrete flags.
fn build_config(cli: &Cli) -> Result<SessionValueConfig, Error> {
    if let Some(token) = &cli.layout {
        return Ok(token.parse()?);
    }
    let mut config = SessionValueConfig {
        variable: cli.variable.clone(),
        ..SessionValueConfig::default()
    }
    .nested(cli.nested);
    if let Some(padding) = cli.padding {
        config = config.padding(padding);
    }
    if let Some(culture) = &cli.culture {
        config = config.culture(culture.as_str());
    }
    Ok(config)
}

/// Build the session from `--store` then apply each `--set` in order.
fn load_session(cli: &Cli) -> Result<SessionStore, Error> {
    let mut session = SessionStore::new();
    if let Some(path) = &cli.store {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let json: JsonValue =
            serde_json::from_str(&text).map_err(|source| Error::Json {
                path: path.clone(),
                source,
            })?;
        let JsonValue::Object(entries) = json else {
            return Err(Error::NotAnObject { path: path.clone() });
        };
        for (key, value) in entries {
            session.insert(key, Value::from(value));
        }
    }
    for arg in &cli.set {
        let (key, value) = parse_assignment(arg)?;
        session.insert(key, value);
    }
    Ok(session)
}

/// Split `KEY=VALUE`, reading VALUE as JSON when it parses.
fn parse_assignment(arg: &str) -> Result<(String, Value), Error> {
    let (key, raw) = arg
        .split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| Error::Assignment {
            arg: arg.to_string(),
        })?;
    let value = serde_json::from_str::<JsonValue>(raw)
        .map_or_else(|_| Value::from(raw), Value::from);
    Ok((key.to_string(), value))
}
