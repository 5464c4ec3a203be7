//! Named events exchanged with the server.
//!
//! Outbound [`Command`]s are one-way notifications pushed over the live page
//! socket; inbound [`Cue`]s arrive the same way in the other direction. Both
//! carry a snake_case name and a JSON object payload. Nothing here is
//! acknowledged or retried.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Error returned by [`Cue::parse`].
#[derive(Debug, thiserror::Error)]
pub enum CueError {
    /// No cue is known under this name.
    #[error("unknown cue: {0}")]
    Unknown(String),
    /// The payload did not match the cue's expected shape.
    #[error("malformed payload for cue {name}: {source}")]
    Payload {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A client → server notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pan the camera by an inverted cursor delta.
    Pan { dx: f64, dy: f64 },
    /// Zoom around a viewport coordinate.
    Zoom { delta: f64, x: f64, y: f64 },
    /// One movement-loop step; `normalized` marks a diagonal-scaled vector.
    Move { dx: f64, dy: f64, normalized: bool },
    OpenCreateNode,
    CloseCreateNode,
    DeselectNode,
    EnterSelectedNode,
    NavigateToNode { id: String },
    EnableCameraFollow,
    TypingStart,
    TypingStop,
    RestoreBuckets { bucket_ids: Vec<Option<String>> },
}

impl Command {
    /// Event name as the server expects it.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pan { .. } => "pan",
            Self::Zoom { .. } => "zoom",
            Self::Move { .. } => "move",
            Self::OpenCreateNode => "open_create_node",
            Self::CloseCreateNode => "close_create_node",
            Self::DeselectNode => "deselect_node",
            Self::EnterSelectedNode => "enter_selected_node",
            Self::NavigateToNode { .. } => "navigate_to_node",
            Self::EnableCameraFollow => "enable_camera_follow",
            Self::TypingStart => "typing_start",
            Self::TypingStop => "typing_stop",
            Self::RestoreBuckets { .. } => "restore_buckets",
        }
    }

    /// Event payload; commands without data send an empty object.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Pan { dx, dy } => json!({ "dx": dx, "dy": dy }),
            Self::Zoom { delta, x, y } => json!({ "delta": delta, "x": x, "y": y }),
            Self::Move { dx, dy, normalized } => json!({ "dx": dx, "dy": dy, "normalized": normalized }),
            Self::NavigateToNode { id } => json!({ "id": id }),
            Self::RestoreBuckets { bucket_ids } => json!({ "bucket_ids": bucket_ids }),
            Self::OpenCreateNode
            | Self::CloseCreateNode
            | Self::DeselectNode
            | Self::EnterSelectedNode
            | Self::EnableCameraFollow
            | Self::TypingStart
            | Self::TypingStop => Value::Object(Map::new()),
        }
    }
}

/// Kind of feedback given on a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Affirm,
    Dismiss,
}

impl FeedbackKind {
    /// CSS class toggled on the message element for the flash.
    #[must_use]
    pub fn flash_class(self) -> &'static str {
        match self {
            Self::Affirm => "flash-affirm",
            Self::Dismiss => "flash-dismiss",
        }
    }

    /// Toast text shown for this feedback.
    #[must_use]
    pub fn toast_text(self) -> &'static str {
        match self {
            Self::Affirm => "✓ Affirmed",
            Self::Dismiss => "✗ Dismissed",
        }
    }
}

/// A server → client notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    /// The server confirmed entry into a node; play the transition, then navigate.
    EnterNode { node_id: String },
    /// Dwell on a node was cancelled. Nothing to do client-side.
    CancelDwell,
    FeedbackGiven { message_id: String, kind: FeedbackKind },
    ClearInput { id: String },
    /// The bucket list changed; slots are already normalized to optional ids.
    BucketsUpdated { buckets: Vec<Option<String>> },
}

#[derive(Deserialize)]
struct NodePayload {
    node_id: Value,
}

#[derive(Deserialize)]
struct FeedbackPayload {
    message_id: Value,
    #[serde(rename = "type")]
    kind: FeedbackKind,
}

#[derive(Deserialize)]
struct ClearInputPayload {
    id: Value,
}

#[derive(Deserialize)]
struct BucketsPayload {
    buckets: Vec<Value>,
}

impl Cue {
    /// Interpret a named cue and its JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`CueError::Unknown`] for names this client does not handle and
    /// [`CueError::Payload`] when a known cue's payload has the wrong shape.
    pub fn parse(name: &str, payload: Value) -> Result<Self, CueError> {
        let bad = |source| CueError::Payload { name: name.to_owned(), source };
        match name {
            "confirm_enter_node" | "entering_node" => {
                let p: NodePayload = serde_json::from_value(payload).map_err(bad)?;
                let node_id = id_string(&p.node_id).ok_or_else(|| bad(missing_id("node_id")))?;
                Ok(Self::EnterNode { node_id })
            }
            "cancel_dwell" => Ok(Self::CancelDwell),
            "feedback_given" => {
                let p: FeedbackPayload = serde_json::from_value(payload).map_err(bad)?;
                let message_id = id_string(&p.message_id).ok_or_else(|| bad(missing_id("message_id")))?;
                Ok(Self::FeedbackGiven { message_id, kind: p.kind })
            }
            "clear_input" => {
                let p: ClearInputPayload = serde_json::from_value(payload).map_err(bad)?;
                let id = id_string(&p.id).ok_or_else(|| bad(missing_id("id")))?;
                Ok(Self::ClearInput { id })
            }
            "buckets_updated" => {
                let p: BucketsPayload = serde_json::from_value(payload).map_err(bad)?;
                Ok(Self::BucketsUpdated { buckets: p.buckets.iter().map(bucket_slot).collect() })
            }
            other => Err(CueError::Unknown(other.to_owned())),
        }
    }
}

/// Reduce an opaque server id (string or number) to its string form.
///
/// Empty strings, nulls, and structured values are not ids.
#[must_use]
pub fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalize one bucket slot: `{id: ...}` objects reduce to their id, empty
/// slots become `None`.
#[must_use]
pub fn bucket_slot(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => map.get("id").and_then(id_string),
        other => id_string(other),
    }
}

fn missing_id(field: &str) -> serde_json::Error {
    <serde_json::Error as serde::de::Error>::custom(format!("`{field}` is not a usable id"))
}
