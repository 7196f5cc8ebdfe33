use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    constants::generation_policy::{student_message, SYSTEM_POLICY},
};

/// Turns a student's description into the text of an HTML document.
///
/// `None` means the upstream call produced nothing usable: a transport or
/// API error, a malformed body, or a response without text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HtmlGenerator: Send + Sync {
    async fn generate(&self, prompt_text: &str) -> Option<String>;
}

pub struct OpenAiHtmlGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f64,
}

impl OpenAiHtmlGenerator {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(config.openai_api_base.as_str());

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
        }
    }

    fn build_request(&self, prompt_text: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_POLICY },
                { "role": "user", "content": student_message(prompt_text) },
            ],
            "temperature": self.temperature,
        })
    }
}

#[async_trait]
impl HtmlGenerator for OpenAiHtmlGenerator {
    async fn generate(&self, prompt_text: &str) -> Option<String> {
        let request = self.build_request(prompt_text);

        let response: ChatCompletionResponse =
            match self.client.chat().create_byot(request).await {
                Ok(response) => response,
                Err(err) => {
                    log::warn!("Generation request to model '{}' failed: {}", self.model, err);
                    return None;
                }
            };

        let text = response.into_text();
        if text.is_none() {
            log::warn!("Generation response from model '{}' had no text content", self.model);
        }
        text
    }
}

// Only the parts of a chat completion we read. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<MessageContent>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice. Array content keeps only non-empty text
    /// parts, joined by newlines.
    pub fn into_text(self) -> Option<String> {
        let content = self.choices.into_iter().next()?.message?.content?;

        match content {
            MessageContent::Text(text) => Some(text),
            MessageContent::Parts(parts) => Some(
                parts
                    .into_iter()
                    .filter(|part| part.kind == "text")
                    .filter_map(|part| part.text.filter(|t| !t.is_empty()))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            MessageContent::Other(value) => {
                log::debug!("Ignoring unsupported message content: {}", value);
                None
            }
        }
    }
}
