use regex::Regex;

pub const UNKNOWN: &str = "Unknown";

/// Account fields extracted from one webhook message. Request-scoped:
/// created per inbound message, kept only while its copy buttons live.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub username: String,
    pub uuid: String,
    pub session_token: String,
}

impl AccountRecord {
    /// Best-effort extraction of the labeled fields from raw message text.
    /// Labels match case-insensitively in any order; the value is the first
    /// whitespace-delimited token after the label. A record without a
    /// username or session token is not actionable and yields `None`; a
    /// missing UUID falls back to the `Unknown` sentinel.
    pub fn parse(content: &str) -> Option<Self> {
        let username = capture(content, r"(?i)username:\s*(\S+)")?;
        let session_token = capture(content, r"(?i)session token:\s*(\S+)")?;
        let uuid =
            capture(content, r"(?i)uuid:\s*([0-9a-f-]+)").unwrap_or_else(|| UNKNOWN.to_string());

        Some(Self {
            username,
            uuid,
            session_token,
        })
    }
}

fn capture(content: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(content)?.get(1).map(|m| m.as_str().to_string())
}
