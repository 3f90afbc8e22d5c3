use serde::{Deserialize, Serialize};

use super::interaction::{Actor, RoomRef};
use super::ui::View;

/// A chat message as seen by the message hooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Actor,
    pub room: RoomRef,
    #[serde(default)]
    pub text: Option<String>,
}

/// Message the host should post into a room looked up by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayMessage {
    pub room_name: String,
    pub text: String,
}

/// A slash command invocation forwarded by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    #[serde(default)]
    pub args: Vec<String>,
    pub sender: Actor,
    pub room: RoomRef,
    #[serde(default)]
    pub trigger_id: Option<String>,
}

/// What the host should do after a slash command ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CommandOutcome {
    /// Post a message into the room as the sender
    #[serde(rename_all = "camelCase")]
    Message { room_id: String, text: String },
    /// Show an ephemeral notification to the sender only
    #[serde(rename_all = "camelCase")]
    Notify {
        user_id: String,
        room_id: String,
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    OpenContextualBar {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trigger_id: Option<String>,
        view: View,
    },
}
