/// Render `text` as a JSON string literal, the way diagnostics quote source
/// text.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("{:?}", text))
}
