pub const FREE_TEXT_QUESTION_COUNT: usize = 5;
pub const MULTIPLE_CHOICE_QUESTION_COUNT: usize = 4;

pub const FREE_TEXT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const FREE_TEXT_INSTRUCTIONS: &str = "Using the following transcript, generate exactly 5 absurd, funny, and completely ridiculous questions that have no relation to the actual content.

Please provide only the 5 questions, one per line, with no numbering, no additional text and no explanations.

The transcript is:
";

pub const MULTIPLE_CHOICE_SYSTEM_PROMPT: &str = "You are a creative quiz generator. Given a video transcript, you produce absurd, funny and surprising multiple-choice questions. You respond only with properly formatted JSON and nothing else: no prose, no markdown, no code fences.";

pub const MULTIPLE_CHOICE_INSTRUCTIONS: &str = "Generate exactly 4 absurd multiple-choice questions about the video described by the transcript below.

### Rules
- Be playful and surprising; the questions may be intentionally silly or unexpected.
- Every question has exactly 3 choices labeled \"A\", \"B\" and \"C\".
- \"correctAnswer\" is the label of the correct choice and must be one of \"A\", \"B\" or \"C\".
- Reply with a single JSON object with a \"questions\" array and no surrounding prose.

### Example
{\"questions\":[{\"question\":\"What colour is the narrator's invisible hat?\",\"choices\":{\"A\":\"Plaid\",\"B\":\"Transparent\",\"C\":\"Loud\"},\"correctAnswer\":\"B\"}]}

### JSON schema
";

pub const TRANSCRIPT_HEADER: &str = "### Transcript
";

pub const IP_BLOCKING_HINT: &str = "If you see IP blocking, consider using a VPN or proxies.";

pub const HTTP_ERROR_HINT: &str =
    "If you're getting HTTP errors, you might need to use a VPN or wait a while before trying again.";

pub const RATE_LIMIT_HINT: &str =
    "The model provider is rate limiting requests; wait a while before trying again.";
