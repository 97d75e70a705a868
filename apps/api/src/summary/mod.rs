// Free-text profile summary analysis: a short bullet-point review.

pub mod handlers;
pub mod prompts;
