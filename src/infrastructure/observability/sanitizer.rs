const PREVIEW_CHARS: usize = 120;

/// Prepare learner text for logging: cap the preview length and mask
/// anything that looks like an OpenAI credential.
pub fn sanitize_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "[empty]".to_string();
    }

    let redacted = redact_api_keys(trimmed);
    let total = redacted.chars().count();
    if total > PREVIEW_CHARS {
        let preview: String = redacted.chars().take(PREVIEW_CHARS).collect();
        format!("{}... ({} chars total)", preview, total)
    } else {
        redacted
    }
}

fn redact_api_keys(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find("sk-") {
        out.push_str(&rest[..idx]);
        out.push_str("sk-[redacted]");
        let tail = &rest[idx + 3..];
        let token_len = tail
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(tail.len());
        rest = &tail[token_len..];
    }
    out.push_str(rest);
    out
}
