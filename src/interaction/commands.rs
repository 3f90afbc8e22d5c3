//! Slash commands: `/hello` and `/contextualbar`.

use chrono::Utc;
use tracing::{debug, warn};

use crate::models::{CommandOutcome, CommandRequest};

use super::contextual_bar;

pub const HELLO_COMMAND: &str = "hello";
pub const CONTEXTUAL_BAR_COMMAND: &str = "contextualbar";

#[derive(Debug, Clone, PartialEq, Eq)]
enum HelloSubcommand<'a> {
    Text,
    Call,
    Url(Option<&'a str>),
    Missing,
    Unknown,
}

impl<'a> HelloSubcommand<'a> {
    fn parse(args: &'a [String]) -> Self {
        match args.first().map(String::as_str) {
            None => HelloSubcommand::Missing,
            Some("text") => HelloSubcommand::Text,
            Some("call") => HelloSubcommand::Call,
            Some("url") => HelloSubcommand::Url(args.get(1).map(String::as_str)),
            Some(_) => HelloSubcommand::Unknown,
        }
    }
}

/// Run a slash command. `http` is used by `/hello url` to fetch the given URL.
pub async fn execute(command: &str, request: &CommandRequest, http: &reqwest::Client) -> CommandOutcome {
    debug!(command = %command, args = ?request.args, "executing slash command");

    match command {
        HELLO_COMMAND => hello(request, http).await,
        CONTEXTUAL_BAR_COMMAND => CommandOutcome::OpenContextualBar {
            trigger_id: request.trigger_id.clone(),
            view: contextual_bar::clock_view(Utc::now(), None),
        },
        _ => notify(request, "Unknown command"),
    }
}

async fn hello(request: &CommandRequest, http: &reqwest::Client) -> CommandOutcome {
    match HelloSubcommand::parse(&request.args) {
        HelloSubcommand::Missing => notify(request, "Needs argument"),
        HelloSubcommand::Text => message(request, "Texting!"),
        HelloSubcommand::Call => message(request, "Calling!"),
        HelloSubcommand::Url(None) => notify(request, "It needs a url value to call"),
        HelloSubcommand::Url(Some(url)) => match fetch_pretty(http, url).await {
            Ok(body) => message(request, format!("```\n{}\n```", body)),
            Err(e) => {
                warn!(url = %url, error = %e, "url fetch failed");
                notify(request, format!("Request to {} failed: {}", url, e))
            }
        },
        HelloSubcommand::Unknown => notify(request, "Unknown subcommand"),
    }
}

/// GET the URL; JSON bodies come back pretty-printed, anything else verbatim
async fn fetch_pretty(http: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    let body = http.get(url).send().await?.text().await?;
    Ok(pretty_json(&body))
}

fn pretty_json(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}

fn message(request: &CommandRequest, text: impl Into<String>) -> CommandOutcome {
    CommandOutcome::Message {
        room_id: request.room.id.clone(),
        text: text.into(),
    }
}

fn notify(request: &CommandRequest, text: impl Into<String>) -> CommandOutcome {
    CommandOutcome::Notify {
        user_id: request.sender.id.clone(),
        room_id: request.room.id.clone(),
        text: text.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Actor, RoomRef};

    fn request(args: &[&str]) -> CommandRequest {
        CommandRequest {
            args: args.iter().map(|a| a.to_string()).collect(),
            sender: Actor {
                id: "u1".into(),
                username: "alice".into(),
            },
            room: RoomRef {
                id: "R1".into(),
                ..Default::default()
            },
            trigger_id: Some("trig".into()),
        }
    }

    fn text_of(outcome: &CommandOutcome) -> &str {
        match outcome {
            CommandOutcome::Message { text, .. } | CommandOutcome::Notify { text, .. } => text,
            CommandOutcome::OpenContextualBar { .. } => "",
        }
    }

    #[tokio::test]
    async fn hello_text_and_call_post_messages() {
        let http = reqwest::Client::new();

        let outcome = execute("hello", &request(&["text"]), &http).await;
        assert!(matches!(outcome, CommandOutcome::Message { .. }));
        assert_eq!(text_of(&outcome), "Texting!");

        let outcome = execute("hello", &request(&["call"]), &http).await;
        assert_eq!(text_of(&outcome), "Calling!");
    }

    #[tokio::test]
    async fn hello_without_arguments_notifies_sender() {
        let http = reqwest::Client::new();

        let outcome = execute("hello", &request(&[]), &http).await;
        assert!(matches!(outcome, CommandOutcome::Notify { .. }));
        assert_eq!(text_of(&outcome), "Needs argument");

        let outcome = execute("hello", &request(&["url"]), &http).await;
        assert_eq!(text_of(&outcome), "It needs a url value to call");

        let outcome = execute("hello", &request(&["dance"]), &http).await;
        assert_eq!(text_of(&outcome), "Unknown subcommand");
    }

    #[tokio::test]
    async fn contextual_bar_command_opens_clock() {
        let outcome = execute("contextualbar", &request(&[]), &reqwest::Client::new()).await;
        match outcome {
            CommandOutcome::OpenContextualBar { trigger_id, view } => {
                assert_eq!(trigger_id.as_deref(), Some("trig"));
                assert_eq!(view.action_ids(), vec!["date"]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn pretty_json_falls_back_to_raw_body() {
        assert_eq!(pretty_json("{\"a\":1}"), "{\n  \"a\": 1\n}");
        assert_eq!(pretty_json("plain text"), "plain text");
    }
}
