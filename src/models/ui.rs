//! UI block structures returned to the host for rendering.
//!
//! The JSON shape follows the UIKit block format the host understands:
//! text objects and blocks are tagged by `type`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Text
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        TextObject::PlainText { text: text.into() }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            TextObject::PlainText { text } | TextObject::Mrkdwn { text } => text,
        }
    }
}

// ============================================================================
// Elements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockElement {
    Button {
        #[serde(rename = "actionId", skip_serializing_if = "Option::is_none")]
        action_id: Option<String>,
        text: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ButtonStyle>,
    },
}

impl BlockElement {
    pub fn button(action_id: impl Into<String>, text: impl Into<String>) -> Self {
        BlockElement::Button {
            action_id: Some(action_id.into()),
            text: TextObject::plain(text),
            value: None,
            style: None,
        }
    }

    /// A button without an action id, used for view submit buttons
    pub fn submit(text: impl Into<String>) -> Self {
        BlockElement::Button {
            action_id: None,
            text: TextObject::plain(text),
            value: None,
            style: None,
        }
    }

    pub fn with_style(self, new_style: ButtonStyle) -> Self {
        match self {
            BlockElement::Button {
                action_id,
                text,
                value,
                ..
            } => BlockElement::Button {
                action_id,
                text,
                value,
                style: Some(new_style),
            },
        }
    }

    pub fn with_value(self, new_value: impl Into<String>) -> Self {
        match self {
            BlockElement::Button {
                action_id,
                text,
                style,
                ..
            } => BlockElement::Button {
                action_id,
                text,
                value: Some(new_value.into()),
                style,
            },
        }
    }

    pub fn action_id(&self) -> Option<&str> {
        match self {
            BlockElement::Button { action_id, .. } => action_id.as_deref(),
        }
    }
}

// ============================================================================
// Blocks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        text: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<BlockElement>,
    },
    Actions {
        #[serde(rename = "blockId")]
        block_id: String,
        elements: Vec<BlockElement>,
    },
}

impl Block {
    pub fn section(text: TextObject) -> Self {
        Block::Section {
            text,
            accessory: None,
        }
    }
}

// ============================================================================
// View
// ============================================================================

/// A modal or contextual bar surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: TextObject,
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<BlockElement>,
}

impl View {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: TextObject::plain(title),
            blocks: Vec::new(),
            submit: None,
        }
    }

    /// Texts of all section blocks, in order
    pub fn section_texts(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Section { text, .. } => Some(text.text()),
                Block::Actions { .. } => None,
            })
            .collect()
    }

    /// Action ids of every element in the view
    pub fn action_ids(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .flat_map(|block| match block {
                Block::Section { accessory, .. } => accessory.iter().collect::<Vec<_>>(),
                Block::Actions { elements, .. } => elements.iter().collect(),
            })
            .filter_map(BlockElement::action_id)
            .collect()
    }
}
