/// Formats a score in [0,1] as a percentage with one decimal, e.g. `0.95` -> `95.0%`.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Keeps tokens out of logs beyond their first few characters.
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    if prefix.len() < token.len() {
        format!("{}...", prefix)
    } else {
        "****".to_string()
    }
}
