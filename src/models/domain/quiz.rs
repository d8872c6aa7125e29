use std::{collections::BTreeMap, fmt};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
pub enum ChoiceLabel {
    A,
    B,
    C,
}

impl ChoiceLabel {
    pub const ALL: [ChoiceLabel; 3] = [ChoiceLabel::A, ChoiceLabel::B, ChoiceLabel::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceLabel::A => "A",
            ChoiceLabel::B => "B",
            ChoiceLabel::C => "C",
        }
    }

    /// Exact match only: `"a"` or `" A"` are not labels.
    pub fn from_label(label: &str) -> Option<Self> {
        ChoiceLabel::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == label)
    }
}

impl fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizQuestion {
    pub question: String,
    pub choices: BTreeMap<ChoiceLabel, String>, // always exactly A, B and C
    #[serde(rename = "correctAnswer")]
    pub correct_answer: ChoiceLabel,
}

impl QuizQuestion {
    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(&self.correct_answer).map(String::as_str)
    }
}

/// Shape the model is asked to reply with.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizPayload {
    pub questions: Vec<QuizQuestion>,
}

impl QuizPayload {
    pub fn json_schema() -> String {
        let schema = schemars::schema_for!(QuizPayload);
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    transcript_id: String,
    questions: Vec<QuizQuestion>,
    count: usize,
}

impl QuizResult {
    pub fn new(transcript_id: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            transcript_id: transcript_id.into(),
            count: questions.len(),
            questions,
        }
    }

    pub fn transcript_id(&self) -> &str {
        &self.transcript_id
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
