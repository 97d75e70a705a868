// GitHub profile analysis: fetch profile + repositories, build the recruiter-style
// prompt, hand it to the completion client.

pub mod client;
pub mod handlers;
pub mod prompts;
