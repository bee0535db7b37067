//! Radio group rendering for option fields

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw every option of `field` on one row, marking the selected one.
/// The field label is only shown when it is non-empty, and the border is
/// dropped when `area` is a single row.
pub fn draw_radio(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let selected = field.selected_option();
    let mut spans = Vec::new();
    for (idx, option) in field.spec.options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let is_selected = selected == Some(idx);
        let marker = if is_selected { "(•) " } else { "( ) " };
        let style = match (is_selected, is_active) {
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
            (false, _) => Style::default().fg(Color::Gray),
        };
        spans.push(Span::styled(format!("{marker}{}", option.label), style));
    }

    let border_color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let borders = if area.height < 3 {
        Borders::NONE
    } else {
        Borders::ALL
    };
    let mut block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(border_color));
    if !field.label().is_empty() {
        block = block.title(format!(" {} ", field.label()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
