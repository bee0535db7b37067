//! Text input rendering

use crate::state::{password, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

/// Input height in rows (top border + content + bottom border)
pub const INPUT_HEIGHT: u16 = 3;

/// Draw a single-line input for `field`.
///
/// A field with a validation error gets a red border and the message on the
/// bottom edge. Password values are masked unless `reveal` is set.
pub fn draw_input(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, reveal: bool) {
    let border_style = match (&field.error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.display_value(reveal), text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.block(block), area);
}

/// Draw a one-row strength meter for a password value
pub fn draw_strength_meter(frame: &mut Frame, area: Rect, value: &str) {
    let percent = password::meter_percent(value);
    let color = match percent {
        0..=32 => Color::Red,
        33..=65 => Color::Yellow,
        _ => Color::Green,
    };
    let gauge = LineGauge::default()
        .ratio(f64::from(percent) / 100.0)
        .label("Strength ")
        .filled_style(Style::default().fg(color))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, area);
}
