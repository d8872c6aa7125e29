use crate::{
    models::domain::{RawLine, Transcript},
    services::transcript_normalizer::normalize,
};

pub fn assemble(
    video_id: impl Into<String>,
    raw_lines: impl IntoIterator<Item = RawLine>,
) -> Transcript {
    let lines = raw_lines.into_iter().map(|raw| normalize(&raw)).collect();
    Transcript::from_lines(video_id.into(), lines)
}

/// All caption texts joined by a single space, in caption order.
pub fn flatten(transcript: &Transcript) -> String {
    transcript
        .lines()
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps at most `max_chars` characters, cutting at the last whitespace when there is one.
pub fn clamp_to_budget(text: &str, max_chars: usize) -> &str {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text;
    };
    let head = &text[..cut];
    match head.rfind(char::is_whitespace) {
        Some(space) if space > 0 => head[..space].trim_end(),
        _ => head,
    }
}
