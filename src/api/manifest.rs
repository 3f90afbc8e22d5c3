//! What the host registers for this app: the room action button, the slash
//! commands and the settings form.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::warn;

use crate::api::AppState;
use crate::interaction::actions::SHOW_AGENTS_ACTION;
use crate::interaction::commands::{CONTEXTUAL_BAR_COMMAND, HELLO_COMMAND};
use crate::models::Department;
use crate::pipeline;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonRegistration {
    pub action_id: &'static str,
    pub label_i18n: &'static str,
    pub context: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRegistration {
    pub command: &'static str,
    pub i18n_description: &'static str,
    pub i18n_params_example: &'static str,
    pub provides_preview: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Select,
    String,
    Password,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectValue {
    pub key: String,
    pub i18n_label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingDescriptor {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: SettingType,
    pub required: bool,
    pub public: bool,
    pub package_value: String,
    pub i18n_label: &'static str,
    pub i18n_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<SelectValue>>,
}

impl SettingDescriptor {
    fn new(id: &'static str, kind: SettingType) -> Self {
        Self {
            id,
            kind,
            required: false,
            public: true,
            package_value: String::new(),
            i18n_label: id,
            i18n_description: format!("{}_desc", id),
            values: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppManifest {
    pub buttons: Vec<ButtonRegistration>,
    pub commands: Vec<CommandRegistration>,
    pub settings: Vec<SettingDescriptor>,
}

/// Build the manifest; `departments` fill the department selector
pub fn manifest(departments: &[Department]) -> AppManifest {
    let department_values = departments
        .iter()
        .map(|department| SelectValue {
            key: department.id.clone(),
            i18n_label: department.name.clone(),
        })
        .collect();

    AppManifest {
        buttons: vec![ButtonRegistration {
            action_id: SHOW_AGENTS_ACTION,
            label_i18n: "livechat-agents-action-name",
            context: "roomAction",
        }],
        commands: vec![
            CommandRegistration {
                command: HELLO_COMMAND,
                i18n_description: "livechat_hellocommand_description",
                i18n_params_example: "",
                provides_preview: false,
            },
            CommandRegistration {
                command: CONTEXTUAL_BAR_COMMAND,
                i18n_description: "slashcommand_description",
                i18n_params_example: "slashcommand_params",
                provides_preview: false,
            },
        ],
        settings: vec![
            SettingDescriptor {
                required: true,
                values: Some(department_values),
                ..SettingDescriptor::new("livechat_department", SettingType::Select)
            },
            SettingDescriptor::new("livechat_admin_userid", SettingType::String),
            SettingDescriptor::new("livechat_admin_user_pat", SettingType::Password),
            SettingDescriptor::new("livechat_admin_username", SettingType::String),
            SettingDescriptor::new("livechat_admin_user_pass", SettingType::Password),
        ],
    }
}

/// GET /api/app - App registration for the host
pub async fn get_manifest(State(state): State<AppState>) -> Json<AppManifest> {
    let departments =
        match pipeline::selectable_departments(state.app.client(), state.app.settings()).await {
            Ok(departments) => departments,
            Err(e) => {
                warn!(error = %e, "could not enumerate departments, selector left empty");
                Vec::new()
            }
        };

    Json(manifest(&departments))
}
