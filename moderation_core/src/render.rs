use crate::{
    helpers::{dto::ModerationResult, utils::format_percent},
    session::dto::ViewState,
};

pub fn render(view: &ViewState) -> String {
    match view {
        ViewState::Idle => String::new(),
        ViewState::Pending => "Moderating...".to_string(),
        ViewState::Errored(message) => format!("Error: {}", message),
        ViewState::Displaying(result) => render_result(result),
    }
}

pub fn render_result(result: &ModerationResult) -> String {
    let mut lines = vec![
        "Moderation Results".to_string(),
        format!(
            "Overall Status: {}",
            if result.safe { "Safe" } else { "Unsafe" }
        ),
        "Categories:".to_string(),
    ];

    for (category, score) in &result.categories {
        lines.push(format!("{}: {}", category, format_percent(*score)));
    }

    lines.push(format!("Confidence: {}", format_percent(result.confidence)));

    if !result.labels.is_empty() {
        lines.push(format!("Labels: {}", result.labels.join(", ")));
    }

    lines.join("\n")
}
