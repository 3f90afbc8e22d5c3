use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{Block, BlockElement, TextObject, View};

use super::actions::REFRESH_CLOCK_ACTION;

pub const DEFAULT_VIEW_ID: &str = "contextualbarId";

/// Contextual bar showing the given time with a "Refresh" button
pub fn clock_view(now: DateTime<Utc>, view_id: Option<&str>) -> View {
    let date = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut view = View::new("Contextual Bar");
    view.id = Some(view_id.unwrap_or(DEFAULT_VIEW_ID).to_string());
    view.submit = Some(BlockElement::submit("Submit"));
    view.blocks.push(Block::Section {
        text: TextObject::markdown(format!("The current date-time is\n{}", date)),
        accessory: Some(BlockElement::button(REFRESH_CLOCK_ACTION, "Refresh").with_value(date)),
    });
    view
}
