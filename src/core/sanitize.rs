// src/core/sanitize.rs

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

/// Text inside the last `( … )` pair, e.g. `"Age Group Results (M40-49)"` → `"M40-49"`.
pub fn last_parenthesized(s: &str) -> Option<String> {
    let close = s.rfind(')')?;
    let open = s[..close].rfind('(')?;
    let inner = s[open + 1..close].trim();
    if inner.is_empty() { None } else { Some(s!(inner)) }
}

/// Bib out of a cache file name such as `page_for_bib_123.html`.
pub fn bib_from_file_name<'a>(name: &'a str, prefix: &str, ext: &str) -> Option<&'a str> {
    let bib = name.strip_prefix(prefix)?.strip_suffix(ext)?;
    if bib.is_empty() || bib.chars().any(char::is_whitespace) { None } else { Some(bib) }
}
