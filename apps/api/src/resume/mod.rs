// Resume analysis: multipart upload, PDF/DOCX text extraction, ATS report prompt.

pub mod extract;
pub mod handlers;
pub mod prompts;
