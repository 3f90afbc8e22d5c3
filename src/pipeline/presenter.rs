use crate::models::{AgentStatusLine, Block, BlockElement, ButtonStyle, TextObject, View};

pub const TITLE_PREFIX: &str = "Agents of selected department: ";
pub const CLOSE_ACTION_PREFIX: &str = "close-";
pub const CLOSE_BLOCK_ID: &str = "close-forward";

/// Build the agents modal: a title, one section per agent line and, when the
/// room is known, a "Close Chat" button bound to that room.
pub fn present(department_name: &str, lines: &[AgentStatusLine], room_id: Option<&str>) -> View {
    let mut view = View::new(format!("{}{}", TITLE_PREFIX, department_name));

    view.blocks.extend(
        lines
            .iter()
            .map(|line| Block::section(TextObject::plain(line.as_str()))),
    );

    if let Some(room_id) = room_id {
        view.blocks.push(Block::Actions {
            block_id: CLOSE_BLOCK_ID.to_string(),
            elements: vec![
                BlockElement::button(close_action_id(room_id), "Close Chat")
                    .with_style(ButtonStyle::Primary),
            ],
        });
    }

    view
}

pub fn close_action_id(room_id: &str) -> String {
    format!("{}{}", CLOSE_ACTION_PREFIX, room_id)
}
