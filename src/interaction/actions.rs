use crate::pipeline::presenter::CLOSE_ACTION_PREFIX;

/// Action id of the registered room action button
pub const SHOW_AGENTS_ACTION: &str = "livechat-agents-action";
/// Action id of the contextual bar's "Refresh" button
pub const REFRESH_CLOCK_ACTION: &str = "date";

/// Known action identifiers, parsed from the raw id the host sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionId {
    ShowAgents,
    CloseRoom(String),
    RefreshClock,
    Unknown(String),
}

impl ActionId {
    pub fn parse(raw: &str) -> Self {
        match raw {
            SHOW_AGENTS_ACTION => ActionId::ShowAgents,
            REFRESH_CLOCK_ACTION => ActionId::RefreshClock,
            _ => match raw.strip_prefix(CLOSE_ACTION_PREFIX) {
                Some(room_id) if !room_id.is_empty() => ActionId::CloseRoom(room_id.to_string()),
                _ => ActionId::Unknown(raw.to_string()),
            },
        }
    }
}
