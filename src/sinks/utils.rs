use std::borrow::Cow;

/// Cuts `text` to at most `max_chars` characters, the last one being `…`
/// when anything was dropped. Counts chars, not bytes.
pub fn trim_with_ellipsis(text: &str, max_chars: usize) -> Cow<'_, str> {
    if max_chars == 0 {
        return Cow::Borrowed("");
    }
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some(_) => {
            let keep = text
                .char_indices()
                .nth(max_chars - 1)
                .map(|(i, _)| i)
                .unwrap_or(text.len());
            Cow::Owned(format!("{}…", &text[..keep]))
        }
    }
}

pub fn apply_limit(text: &str, max_chars: Option<usize>) -> Cow<'_, str> {
    match max_chars {
        Some(n) => trim_with_ellipsis(text, n),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
pub static CONSOLE_TEST_SINK: once_cell::sync::Lazy<Mutex<Vec<String>>> = once_cell::sync::Lazy::new(|| Mutex::new(Vec::new()));
