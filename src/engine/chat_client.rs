use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::model::mood::PetMood;

const CHAT_URL: &str = "http://localhost:1234/v1/chat/completions";

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Persona prompt for the pet, colored by its current mood.
pub fn persona_prompt(mood: PetMood) -> String {
    format!(
        "You are a playful virtual pet dog in a mining-themed game. \
         You are feeling {} right now. Reply to your owner in one short, \
         cheerful sentence, in character, with at most one emoji.",
        mood.label().to_lowercase()
    )
}

/// One round of pet chat against the local completion endpoint.
pub fn pet_reply(mood: PetMood) -> Result<String> {
    let client = Client::new();

    let req = ChatCompletionRequest {
        model: "local-model".into(),
        temperature: 0.7,
        messages: vec![ChatMessage {
            role: "system".into(),
            content: persona_prompt(mood),
        }],
    };

    let resp: ChatCompletionResponse = client.post(CHAT_URL).json(&req).send()?.json()?;

    resp.choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| anyhow!("chat endpoint returned no choices"))
}
