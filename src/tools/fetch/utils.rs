use reqwest::StatusCode;

const DENIED_PATTERNS: [&str; 2] = ["access denied", "permission denied"];

const CHALLENGE_PATTERNS: [&str; 10] = [
    "verify you are a human",
    "please complete the captcha",
    "captcha challenge",
    "cf-browser-verification",
    "cf-captcha-container",
    "px-captcha",
    "blocked by cloudflare",
    "please enable javascript and cookies",
    "bot detection",
    "perimeterx",
];

/// Accept a response only if it is a successful, real HTML page.
///
/// Returns the reason on rejection.
pub(super) fn validate_response(status: StatusCode, body: &str) -> Result<(), String> {
    if !status.is_success() {
        let label = match status {
            StatusCode::TOO_MANY_REQUESTS => "rate limited",
            StatusCode::FORBIDDEN => "forbidden",
            StatusCode::NOT_FOUND => "not found",
            StatusCode::UNAUTHORIZED => "unauthorized",
            s if s.is_server_error() => "server error",
            _ => "unexpected status",
        };
        return Err(format!("status {} ({label})", status.as_u16()));
    }

    let lower = body.to_ascii_lowercase();
    if !lower.contains("<html") && !lower.contains("<!doctype") && !lower.contains("<body") {
        return Err("not an HTML page".into());
    }
    if let Some(pattern) = DENIED_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(format!("access denied - {pattern}"));
    }
    if let Some(pattern) = CHALLENGE_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(format!("bot challenge - {pattern}"));
    }
    Ok(())
}
