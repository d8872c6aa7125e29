use crate::{
    constants::prompts::{
        FREE_TEXT_INSTRUCTIONS, FREE_TEXT_SYSTEM_PROMPT, MULTIPLE_CHOICE_INSTRUCTIONS,
        MULTIPLE_CHOICE_SYSTEM_PROMPT, TRANSCRIPT_HEADER,
    },
    models::domain::QuizPayload,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptMode {
    FreeText,
    MultipleChoice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatPrompt {
    pub mode: PromptMode,
    pub system_message: String,
    pub user_message: String,
}

/// Renders the prompt for `mode`. The transcript text always closes the user message, untouched.
pub fn build(flattened_text: &str, mode: PromptMode) -> ChatPrompt {
    match mode {
        PromptMode::FreeText => ChatPrompt {
            mode,
            system_message: FREE_TEXT_SYSTEM_PROMPT.to_string(),
            user_message: format!("{}\n{}", FREE_TEXT_INSTRUCTIONS, flattened_text),
        },
        PromptMode::MultipleChoice => ChatPrompt {
            mode,
            system_message: MULTIPLE_CHOICE_SYSTEM_PROMPT.to_string(),
            user_message: format!(
                "{}{}\n\n{}{}",
                MULTIPLE_CHOICE_INSTRUCTIONS,
                QuizPayload::json_schema(),
                TRANSCRIPT_HEADER,
                flattened_text
            ),
        },
    }
}
