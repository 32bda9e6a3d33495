// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;`) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// True for cells like `1,234.50`, `-2.31%`, `+0.4`, `3.2x`.
/// Used only for alignment; values stay strings everywhere.
pub fn looks_numeric(s: &str) -> bool {
    let t = s.trim();
    let t = t.strip_prefix(['+', '-', '−']).unwrap_or(t);
    let t = t.strip_suffix(['%', 'x', 'X']).unwrap_or(t);
    !t.is_empty()
        && t.chars().any(|c| c.is_ascii_digit())
        && t.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}
