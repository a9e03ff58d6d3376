//! Static pieces of the card markup.
//!
//! The stylesheet is embedded at compile time using `include_str!`.

/// Inline stylesheet for layout and priority colors.
pub const CARD_STYLESHEET: &str = include_str!("card.css");

/// Opening of the card wrapper and its content area.
pub const CARD_OPEN: &str = r#"<ha-card><div class="wrap">"#;

/// Closing of the content area and card wrapper.
pub const CARD_CLOSE: &str = "</div></ha-card>";

/// Placeholder shown when the project has no tasks at all.
pub const NO_TASKS: &str = r#"<div class="empty">No tasks</div>"#;

/// Wrap rendered content in the card and append the stylesheet.
pub fn card_document(content: &str) -> String {
    let mut html = String::with_capacity(
        CARD_OPEN.len() + content.len() + CARD_CLOSE.len() + CARD_STYLESHEET.len() + 16,
    );
    html.push_str(CARD_OPEN);
    html.push_str(content);
    html.push_str(CARD_CLOSE);
    html.push_str("<style>");
    html.push_str(CARD_STYLESHEET);
    html.push_str("</style>");
    html
}
