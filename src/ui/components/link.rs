//! Link styling

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// A link as an inline span; the focused link is shown reversed
pub fn link_span(text: String, is_focused: bool) -> Span<'static> {
    let mut style = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED);
    if is_focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}
