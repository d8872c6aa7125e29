pub mod patterns;
pub mod prompts;
