//! Line-oriented interaction scripts.
//!
//! Each non-blank line is one user interaction, processed to completion
//! before the next, which is the serialization the widget model expects:
//!
//! ```text
//! # comments and blank lines are skipped
//! click 40.4168 -3.7038        point clicked on the map
//! drag 40.42 -3.70             marker drag ended
//! toggle                       show/hide the coordinate entry
//! type 40.416775, -3.703790    replace the entry text
//! apply                        apply the entry text
//! apply 1.5, 2.5               apply the given text directly
//! add 51.5074 -0.1278 London   add a marker (label optional)
//! add {"lat": 1, "lng": 2}     add a marker from JSON
//! remove 0                     remove by index
//! clear
//! state                        print the current widget state
//! ready off                    surface stops accepting commands (`on` resumes)
//! ```

use picker::marker::Marker;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` is missing its {arg} argument")]
    MissingArgument { command: &'static str, arg: &'static str },
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    #[error("`{0}` is not a marker index")]
    InvalidIndex(String),
    #[error("invalid marker: {0}")]
    InvalidMarker(String),
    #[error("`{0}` is not `on` or `off`")]
    InvalidSwitch(String),
    #[error("`{command}` takes no argument `{arg}`")]
    UnexpectedArgument { command: &'static str, arg: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Click { lat: f64, lng: f64 },
    Drag { lat: f64, lng: f64 },
    Toggle,
    Type(String),
    /// Apply the given text, or the buffered entry text when `None`.
    Apply(Option<String>),
    Add(Marker),
    Remove(usize),
    Clear,
    State,
    Ready(bool),
}

/// Parse one script line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
    let rest = rest.trim();

    let command = match verb {
        "click" => {
            let (lat, lng) = parse_pair("click", rest)?;
            ScriptCommand::Click { lat, lng }
        }
        "drag" => {
            let (lat, lng) = parse_pair("drag", rest)?;
            ScriptCommand::Drag { lat, lng }
        }
        "toggle" => ScriptCommand::Toggle,
        "type" => ScriptCommand::Type(rest.to_string()),
        "apply" => ScriptCommand::Apply((!rest.is_empty()).then(|| rest.to_string())),
        "add" => ScriptCommand::Add(parse_marker(rest)?),
        "remove" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument { command: "remove", arg: "index" });
            }
            let index = rest.parse::<usize>().map_err(|_| ScriptError::InvalidIndex(rest.to_string()))?;
            ScriptCommand::Remove(index)
        }
        "clear" => ScriptCommand::Clear,
        "state" => ScriptCommand::State,
        "ready" => match rest {
            "on" => ScriptCommand::Ready(true),
            "off" => ScriptCommand::Ready(false),
            "" => return Err(ScriptError::MissingArgument { command: "ready", arg: "on/off" }),
            other => return Err(ScriptError::InvalidSwitch(other.to_string())),
        },
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// Raw surface coordinates are passed through unvalidated; the model checks them.
fn parse_pair(command: &'static str, rest: &str) -> Result<(f64, f64), ScriptError> {
    let mut parts = rest.split_whitespace();
    let lat = parts.next().ok_or(ScriptError::MissingArgument { command, arg: "latitude" })?;
    let lng = parts.next().ok_or(ScriptError::MissingArgument { command, arg: "longitude" })?;
    if let Some(extra) = parts.next() {
        return Err(ScriptError::UnexpectedArgument { command, arg: extra.to_string() });
    }
    Ok((parse_number(lat)?, parse_number(lng)?))
}

fn parse_number(raw: &str) -> Result<f64, ScriptError> {
    raw.parse::<f64>().map_err(|_| ScriptError::InvalidNumber(raw.to_string()))
}

fn parse_marker(rest: &str) -> Result<Marker, ScriptError> {
    if rest.starts_with('{') {
        return serde_json::from_str(rest).map_err(|e| ScriptError::InvalidMarker(e.to_string()));
    }

    let mut parts = rest.splitn(3, char::is_whitespace);
    let lat = parts.next().filter(|p| !p.is_empty()).ok_or(ScriptError::MissingArgument { command: "add", arg: "latitude" })?;
    let lng = parts.next().ok_or(ScriptError::MissingArgument { command: "add", arg: "longitude" })?;
    let marker = Marker::new(parse_number(lat)?, parse_number(lng)?).map_err(|e| ScriptError::InvalidMarker(e.to_string()))?;

    Ok(match parts.next().map(str::trim).filter(|label| !label.is_empty()) {
        Some(label) => marker.with_label(label),
        None => marker,
    })
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
