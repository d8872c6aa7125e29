#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use crate::models::domain::RawLine;

    /// Two caption lines, the second without a duration.
    pub fn sample_raw_lines() -> Vec<RawLine> {
        vec![
            RawLine::from(json!({ "start": 0.0, "duration": 1.5, "text": "hello" })),
            RawLine::from(json!({ "start": 1.5, "text": "world" })),
        ]
    }

    /// A well-formed multiple-choice reply with `count` questions.
    pub fn quiz_json(count: usize) -> String {
        let questions: Vec<_> = (1..=count)
            .map(|n| {
                json!({
                    "question": format!("Absurd question {}?", n),
                    "choices": { "A": "Yes", "B": "No", "C": "Only on Tuesdays" },
                    "correctAnswer": "C"
                })
            })
            .collect();

        json!({ "questions": questions }).to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::quiz_response_parser::parse;

    #[test]
    fn test_fixtures_quiz_json_is_valid() {
        let result = parse("abc123", &quiz_json(4)).expect("fixture should parse");
        assert_eq!(result.count(), 4);
    }

    #[test]
    fn test_fixtures_sample_raw_lines() {
        assert_eq!(sample_raw_lines().len(), 2);
    }
}
