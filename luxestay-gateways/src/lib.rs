pub mod gemini;
pub mod json_file_session;
