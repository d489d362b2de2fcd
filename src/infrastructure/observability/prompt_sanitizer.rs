const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_PREFIXES: [&str; 6] = [
    "Bearer ",
    "api-key:",
    "api_key=",
    "password=",
    "secret=",
    "token=",
];

/// Shortens prompt or oracle text to a loggable preview and redacts anything
/// that looks like a credential. Counts are in characters.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let preview = if total > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{visible}... ({total} chars total)")
    } else {
        trimmed.to_string()
    };

    redact_secrets(&preview)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for prefix in SECRET_PREFIXES {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(prefix) {
            let value_start = search_from + found + prefix.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ','))
                .map_or(result.len(), |i| value_start + i);

            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }

    result
}
