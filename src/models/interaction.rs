use serde::{Deserialize, Serialize};

use super::ui::View;

// ============================================================================
// Host references
// ============================================================================

/// The user who triggered an interaction or sent a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Actor {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomRef {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl RoomRef {
    pub fn is_slug(&self, slug: &str) -> bool {
        self.slug.as_deref() == Some(slug)
    }
}

// ============================================================================
// Interaction Events
// ============================================================================

/// The triggering UI event as delivered by the host; read-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InteractionContext {
    #[serde(default)]
    pub action_id: String,
    #[serde(default)]
    pub trigger_id: Option<String>,
    #[serde(default)]
    pub user: Actor,
    #[serde(default)]
    pub room: Option<RoomRef>,
    /// Id of the surface the action came from (contextual bar, modal)
    #[serde(default)]
    pub container_id: Option<String>,
    /// Submitted or closed view, for view events
    #[serde(default)]
    pub view: Option<View>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InteractionEvent {
    ActionButton(InteractionContext),
    BlockAction(InteractionContext),
    ViewSubmit(InteractionContext),
    ViewClosed(InteractionContext),
}

impl InteractionEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            InteractionEvent::ActionButton(_) => "actionButton",
            InteractionEvent::BlockAction(_) => "blockAction",
            InteractionEvent::ViewSubmit(_) => "viewSubmit",
            InteractionEvent::ViewClosed(_) => "viewClosed",
        }
    }

    pub fn context(&self) -> &InteractionContext {
        match self {
            InteractionEvent::ActionButton(ctx)
            | InteractionEvent::BlockAction(ctx)
            | InteractionEvent::ViewSubmit(ctx)
            | InteractionEvent::ViewClosed(ctx) => ctx,
        }
    }
}

// ============================================================================
// Interaction Response
// ============================================================================

/// Surface the host should open or update in reply to an interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Surface {
    Modal { view: View },
    UpdateContextualBar { view: View },
}

/// Acknowledgment returned to the host for every interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<Surface>,
}

impl InteractionResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
            surface: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            surface: None,
        }
    }

    pub fn open_modal(view: View) -> Self {
        Self {
            surface: Some(Surface::Modal { view }),
            ..Self::success()
        }
    }

    pub fn update_contextual_bar(view: View) -> Self {
        Self {
            surface: Some(Surface::UpdateContextualBar { view }),
            ..Self::success()
        }
    }
}
