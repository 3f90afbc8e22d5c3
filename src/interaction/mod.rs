pub mod actions;
pub mod commands;
pub mod contextual_bar;
pub mod hooks;

use chrono::Utc;
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

use crate::Result;
use crate::client::ChatClient;
use crate::config::ApplicationSettings;
use crate::models::{
    Block, CommandOutcome, CommandRequest, InteractionContext, InteractionEvent,
    InteractionResponse,
};
use crate::pipeline;

use self::actions::ActionId;

/// Everything an interaction needs: the chat server client and the settings
/// captured when the app started.
#[derive(Debug, Clone)]
pub struct App {
    client: ChatClient,
    settings: ApplicationSettings,
}

impl App {
    pub fn new(client: ChatClient, settings: ApplicationSettings) -> Self {
        Self { client, settings }
    }

    pub fn from_settings(settings: ApplicationSettings) -> Result<Self> {
        let client = ChatClient::from_settings(&settings)?;
        Ok(Self::new(client, settings))
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    pub fn settings(&self) -> &ApplicationSettings {
        &self.settings
    }

    /// Handle an interaction event. Never fails: errors become a failure
    /// acknowledgment for the host.
    pub async fn dispatch(&self, event: InteractionEvent) -> InteractionResponse {
        let interaction_id = Uuid::new_v4();
        let span = info_span!(
            "interaction",
            %interaction_id,
            kind = event.kind(),
            action_id = %event.context().action_id,
        );

        async move {
            match self.handle(event).await {
                Ok(response) => response,
                Err(e) => {
                    error!(error = %e, "interaction failed");
                    InteractionResponse::failure(e.to_string())
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn handle(&self, event: InteractionEvent) -> Result<InteractionResponse> {
        match event {
            InteractionEvent::ActionButton(ctx) | InteractionEvent::BlockAction(ctx) => {
                self.handle_action(&ctx).await
            }
            InteractionEvent::ViewSubmit(ctx) => {
                let submitted = ctx.view.as_ref().and_then(|view| {
                    view.blocks.iter().find_map(|block| match block {
                        Block::Section { text, .. } => Some(text.text().to_string()),
                        Block::Actions { .. } => None,
                    })
                });
                debug!(text = ?submitted, "view submitted");
                Ok(InteractionResponse::success())
            }
            InteractionEvent::ViewClosed(_) => Ok(InteractionResponse::success()),
        }
    }

    async fn handle_action(&self, ctx: &InteractionContext) -> Result<InteractionResponse> {
        match ActionId::parse(&ctx.action_id) {
            ActionId::ShowAgents => {
                let report = pipeline::department_report(&self.client, &self.settings).await?;
                info!(
                    department = %report.department_id,
                    agents = report.lines.len(),
                    "showing department agents"
                );
                let room_id = ctx.room.as_ref().map(|room| room.id.as_str());
                Ok(InteractionResponse::open_modal(report.into_view(room_id)))
            }
            ActionId::CloseRoom(room_id) => {
                pipeline::close_conversation(&self.client, &self.settings, &room_id).await?;
                Ok(InteractionResponse::success())
            }
            ActionId::RefreshClock => Ok(InteractionResponse::update_contextual_bar(
                contextual_bar::clock_view(Utc::now(), ctx.container_id.as_deref()),
            )),
            ActionId::Unknown(action_id) => {
                debug!(action_id = %action_id, "ignoring unknown action");
                Ok(InteractionResponse::success())
            }
        }
    }

    pub async fn command(&self, command: &str, request: &CommandRequest) -> CommandOutcome {
        commands::execute(command, request, self.client.http()).await
    }
}
