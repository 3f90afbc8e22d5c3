use crate::models::{ChatMessage, RelayMessage};

/// Messages in this room are neither blocked nor relayed
pub const GENERAL_ROOM: &str = "general";

const BLOCKED_WORD: &str = "test";

/// Whether the host should refuse to send the message
pub fn prevents(message: &ChatMessage) -> bool {
    if message.room.is_slug(GENERAL_ROOM) {
        return false;
    }
    message
        .text
        .as_deref()
        .is_some_and(|text| text.contains(BLOCKED_WORD))
}

/// Copy of a sent message for the general room, unless it was sent there
pub fn relay(message: &ChatMessage) -> Option<RelayMessage> {
    if message.room.is_slug(GENERAL_ROOM) {
        return None;
    }

    let room_name = message
        .room
        .display_name
        .as_deref()
        .or(message.room.slug.as_deref())
        .unwrap_or(&message.room.id);

    Some(RelayMessage {
        room_name: GENERAL_ROOM.to_string(),
        text: format!(
            "@{} said \"{}\" in #{}",
            message.sender.username,
            message.text.as_deref().unwrap_or_default(),
            room_name
        ),
    })
}
