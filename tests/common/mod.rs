#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use hangtube_server::{
    errors::ProviderError,
    models::domain::RawLine,
    services::{
        prompt_builder::ChatPrompt,
        providers::{ChatCompleter, TranscriptFetcher},
    },
};

#[derive(Clone)]
pub struct StubTranscriptFetcher {
    pub lines: Vec<RawLine>,
    pub fail_with: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StubTranscriptFetcher {
    pub fn new(lines: Vec<RawLine>) -> Self {
        Self {
            lines,
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            lines: Vec::new(),
            fail_with: Some(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TranscriptFetcher for StubTranscriptFetcher {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<RawLine>, ProviderError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        match &self.fail_with {
            Some(message) => Err(ProviderError::new(message.clone())),
            None => Ok(self.lines.clone()),
        }
    }
}

#[derive(Clone)]
pub struct StubChatCompleter {
    pub reply: String,
    pub prompts: Arc<Mutex<Vec<ChatPrompt>>>,
}

impl StubChatCompleter {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompleter for StubChatCompleter {
    async fn complete_chat(&self, prompt: &ChatPrompt) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> String {
        "stub-model".to_string()
    }
}

/// `[{start:0.0, duration:1.5, text:"hello"}, {start:1.5, text:"world"}]`
pub fn hello_world_lines() -> Vec<RawLine> {
    vec![
        RawLine::from(json!({ "start": 0.0, "duration": 1.5, "text": "hello" })),
        RawLine::from(json!({ "start": 1.5, "text": "world" })),
    ]
}

pub fn four_question_quiz() -> String {
    let questions: Vec<_> = [
        "Which planet do spoons migrate to in winter?",
        "How loud is a purple thought?",
        "What does a cloud keep in its pockets?",
        "Who taught the moon to whistle?",
    ]
    .iter()
    .map(|question| {
        json!({
            "question": question,
            "choices": { "A": "Neptune", "B": "Very", "C": "Nobody" },
            "correctAnswer": "A"
        })
    })
    .collect();

    json!({ "questions": questions }).to_string()
}
