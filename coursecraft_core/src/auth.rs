use std::collections::HashMap;

/// Credential and option values for one provider, keyed by field name
/// (e.g. `api_key`, `model`, `timeout_secs`).
pub type AuthDetails = HashMap<String, String>;

/// Provider key for the video search and detail API.
pub const YOUTUBE_PROVIDER: &str = "youtube";
/// Provider key for the lesson generation API.
pub const GEMINI_PROVIDER: &str = "gemini";

pub const KNOWN_PROVIDERS: [&str; 2] = [YOUTUBE_PROVIDER, GEMINI_PROVIDER];

pub fn is_known_provider(name: &str) -> bool {
    KNOWN_PROVIDERS.contains(&name)
}
