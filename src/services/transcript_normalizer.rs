use serde_json::Value;

use crate::models::domain::{RawLine, TranscriptLine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Start,
    Duration,
    Text,
}

impl Field {
    fn key(self) -> &'static str {
        match self {
            Field::Start => "start",
            Field::Duration => "duration",
            Field::Text => "text",
        }
    }

    fn position(self) -> usize {
        match self {
            Field::Start => 0,
            Field::Duration => 1,
            Field::Text => 2,
        }
    }
}

enum Lookup<'a> {
    Seconds(f64),
    Text(&'a str),
    Json(&'a Value),
}

/// Turns a provider line of any shape into a [`TranscriptLine`]. Never fails.
///
/// Each field is resolved on its own: snippet attribute, then mapping key, then
/// array position. The first present value wins; if it does not convert, the
/// field falls back to its default (`0.0`, `None`, `""`).
pub fn normalize(raw: &RawLine) -> TranscriptLine {
    TranscriptLine {
        start: resolve(raw, Field::Start)
            .and_then(to_seconds)
            .unwrap_or(0.0),
        duration: resolve(raw, Field::Duration).and_then(to_seconds),
        text: resolve(raw, Field::Text).map(to_text).unwrap_or_default(),
    }
}

fn resolve(raw: &RawLine, field: Field) -> Option<Lookup<'_>> {
    attribute(raw, field)
        .or_else(|| mapping_key(raw, field))
        .or_else(|| indexed(raw, field))
}

fn attribute(raw: &RawLine, field: Field) -> Option<Lookup<'_>> {
    let RawLine::Snippet(snippet) = raw else {
        return None;
    };
    match field {
        Field::Start => snippet.start.map(Lookup::Seconds),
        Field::Duration => snippet.duration.map(Lookup::Seconds),
        Field::Text => snippet.text.as_deref().map(Lookup::Text),
    }
}

fn mapping_key(raw: &RawLine, field: Field) -> Option<Lookup<'_>> {
    match raw {
        RawLine::Json(Value::Object(map)) => map
            .get(field.key())
            .filter(|value| !value.is_null())
            .map(Lookup::Json),
        _ => None,
    }
}

fn indexed(raw: &RawLine, field: Field) -> Option<Lookup<'_>> {
    match raw {
        RawLine::Json(Value::Array(items)) => items
            .get(field.position())
            .filter(|value| !value.is_null())
            .map(Lookup::Json),
        _ => None,
    }
}

fn to_seconds(lookup: Lookup<'_>) -> Option<f64> {
    let seconds = match lookup {
        Lookup::Seconds(seconds) => seconds,
        Lookup::Text(text) => text.trim().parse().ok()?,
        Lookup::Json(Value::Number(number)) => number.as_f64()?,
        Lookup::Json(Value::String(text)) => text.trim().parse().ok()?,
        Lookup::Json(_) => return None,
    };
    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}

fn to_text(lookup: Lookup<'_>) -> String {
    match lookup {
        Lookup::Text(text) => text.to_string(),
        Lookup::Json(Value::String(text)) => text.clone(),
        // zero is falsy, like an empty string
        Lookup::Json(Value::Number(number)) if number.as_f64() == Some(0.0) => String::new(),
        Lookup::Json(Value::Number(number)) => number.to_string(),
        Lookup::Seconds(_) | Lookup::Json(_) => String::new(),
    }
}
