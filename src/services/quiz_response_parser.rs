use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    constants::prompts::FREE_TEXT_QUESTION_COUNT,
    errors::{PipelineError, PipelineResult},
    models::domain::{ChoiceLabel, QuizQuestion, QuizResult},
};

/// Strictly validates a multiple-choice reply. One bad question rejects the whole reply.
pub fn parse(transcript_id: &str, raw_response: &str) -> PipelineResult<QuizResult> {
    let root: Value = serde_json::from_str(raw_response.trim()).map_err(|e| {
        PipelineError::schema(format!("response is not valid JSON: {}", e), raw_response)
    })?;

    let entries = root
        .get("questions")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            PipelineError::schema("response lacks a `questions` array", raw_response)
        })?;

    if entries.is_empty() {
        return Err(PipelineError::schema(
            "response contains no questions",
            raw_response,
        ));
    }

    let questions = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            parse_question(entry)
                .map_err(|reason| format!("question {}: {}", index + 1, reason))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|message| PipelineError::schema(message, raw_response))?;

    Ok(QuizResult::new(transcript_id, questions))
}

fn parse_question(entry: &Value) -> Result<QuizQuestion, String> {
    let entry = entry.as_object().ok_or("entry is not an object")?;

    let question = entry
        .get("question")
        .and_then(Value::as_str)
        .ok_or("missing `question` text")?;

    let choices = entry
        .get("choices")
        .and_then(Value::as_object)
        .ok_or("missing `choices` object")?;
    let choices = parse_choices(choices)?;

    let correct_answer = entry
        .get("correctAnswer")
        .and_then(Value::as_str)
        .ok_or("missing `correctAnswer`")?;
    let correct_answer = ChoiceLabel::from_label(correct_answer)
        .filter(|label| choices.contains_key(label))
        .ok_or_else(|| {
            format!(
                "`correctAnswer` must be one of A, B, C, got {:?}",
                correct_answer
            )
        })?;

    Ok(QuizQuestion {
        question: question.to_string(),
        choices,
        correct_answer,
    })
}

fn parse_choices(choices: &Map<String, Value>) -> Result<BTreeMap<ChoiceLabel, String>, String> {
    if choices.len() != ChoiceLabel::ALL.len() {
        return Err(format!(
            "`choices` must have exactly the keys A, B, C, got {} entries",
            choices.len()
        ));
    }

    choices
        .iter()
        .map(|(label, text)| {
            let label = ChoiceLabel::from_label(label)
                .ok_or_else(|| format!("unexpected choice label {:?}", label))?;
            let text = text
                .as_str()
                .ok_or_else(|| format!("choice {} is not a string", label))?;
            Ok((label, text.to_string()))
        })
        .collect()
}

/// Free-text mode: the reply must hold exactly five non-empty lines.
pub fn parse_free_text(raw_response: &str) -> PipelineResult<Vec<String>> {
    let questions: Vec<String> = raw_response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if questions.len() != FREE_TEXT_QUESTION_COUNT {
        return Err(PipelineError::schema(
            format!(
                "expected {} non-empty lines, got {}",
                FREE_TEXT_QUESTION_COUNT,
                questions.len()
            ),
            raw_response,
        ));
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"questions":[{"question":"Q1","choices":{"A":"x","B":"y","C":"z"},"correctAnswer":"B"}]}"#;

    fn assert_schema_error(result: PipelineResult<QuizResult>) {
        assert!(
            matches!(result, Err(PipelineError::Schema { .. })),
            "expected schema error, got {:?}",
            result
        );
    }

    #[test]
    fn parses_valid_response() {
        let result = parse("abc123", VALID).expect("response is valid");

        assert_eq!(result.count(), 1);
        assert_eq!(result.transcript_id(), "abc123");
        assert_eq!(result.questions()[0].correct_answer, ChoiceLabel::B);
        assert_eq!(result.questions()[0].correct_choice(), Some("y"));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let padded = format!("\n  {}\n", VALID);
        assert!(parse("abc123", &padded).is_ok());
    }

    #[test]
    fn rejects_non_json_and_keeps_raw_text() {
        match parse("abc123", "not json") {
            Err(PipelineError::Schema { raw, .. }) => assert_eq!(raw, "not json"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_prose_around_json() {
        assert_schema_error(parse("abc123", &format!("Sure! Here you go: {}", VALID)));
    }

    #[test]
    fn rejects_missing_questions_array() {
        assert_schema_error(parse("abc123", r#"{"items":[]}"#));
        assert_schema_error(parse("abc123", r#"{"questions":"many"}"#));
        assert_schema_error(parse("abc123", r#"[1, 2, 3]"#));
    }

    #[test]
    fn rejects_empty_question_list() {
        assert_schema_error(parse("abc123", r#"{"questions":[]}"#));
    }

    #[test]
    fn rejects_two_choices() {
        assert_schema_error(parse(
            "abc123",
            r#"{"questions":[{"question":"Q1","choices":{"A":"x","B":"y"},"correctAnswer":"A"}]}"#,
        ));
    }

    #[test]
    fn rejects_wrong_choice_labels() {
        assert_schema_error(parse(
            "abc123",
            r#"{"questions":[{"question":"Q1","choices":{"A":"x","B":"y","D":"z"},"correctAnswer":"A"}]}"#,
        ));
        assert_schema_error(parse(
            "abc123",
            r#"{"questions":[{"question":"Q1","choices":{"A":"x","B":"y","C":3},"correctAnswer":"A"}]}"#,
        ));
    }

    #[test]
    fn rejects_unknown_correct_answer() {
        assert_schema_error(parse(
            "abc123",
            r#"{"questions":[{"question":"Q1","choices":{"A":"x","B":"y","C":"z"},"correctAnswer":"D"}]}"#,
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        assert_schema_error(parse(
            "abc123",
            r#"{"questions":[{"choices":{"A":"x","B":"y","C":"z"},"correctAnswer":"A"}]}"#,
        ));
        assert_schema_error(parse(
            "abc123",
            r#"{"questions":[{"question":"Q1","correctAnswer":"A"}]}"#,
        ));
        assert_schema_error(parse(
            "abc123",
            r#"{"questions":[{"question":"Q1","choices":{"A":"x","B":"y","C":"z"}}]}"#,
        ));
    }

    #[test]
    fn one_bad_question_fails_the_whole_reply() {
        let raw = r#"{"questions":[
            {"question":"Q1","choices":{"A":"x","B":"y","C":"z"},"correctAnswer":"A"},
            {"question":"Q2","choices":{"A":"x","B":"y","C":"z"},"correctAnswer":"E"}
        ]}"#;

        match parse("abc123", raw) {
            Err(PipelineError::Schema { message, .. }) => assert!(message.starts_with("question 2")),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn free_text_requires_five_lines() {
        let raw = "Why?\n\n  How many?  \nWho ate the moon?\nWhen?\nWhere is my left shoe?\n";
        let questions = parse_free_text(raw).expect("five non-empty lines");

        assert_eq!(questions.len(), 5);
        assert_eq!(questions[1], "How many?");

        assert!(matches!(
            parse_free_text("only\ntwo"),
            Err(PipelineError::Schema { .. })
        ));
    }
}
