// LeetCode profile analysis: solve counts and topic tags from the public GraphQL
// endpoint, turned into an interview-readiness prompt.

pub mod client;
pub mod handlers;
pub mod prompts;
