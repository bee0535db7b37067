//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_PASSWORD_SHORTCUT};
use crate::state::{FocusTarget, PASSWORD};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_focus_hints(app.signup.focus(), app.signup.is_focus_on_choice());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if app.is_submitting {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " Esc:cancel ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused element
fn get_focus_hints(focus: FocusTarget, on_choice: bool) -> String {
    match focus {
        _ if on_choice => format!("←/→:choose  Tab:next  {SUBMIT_SHORTCUT}:submit"),
        FocusTarget::Field(PASSWORD) => format!(
            "Tab:next  {TOGGLE_PASSWORD_SHORTCUT}:show/hide  Enter:submit"
        ),
        FocusTarget::Field(_) => "Tab:next  Shift+Tab:prev  Enter:submit".to_string(),
        FocusTarget::SubmitButton => "Enter:create account  Tab:next".to_string(),
        FocusTarget::TermsLink | FocusTarget::PrivacyLink => {
            "Enter:open in browser  Tab:next".to_string()
        }
        FocusTarget::LoginLink => "Enter:sign in instead  Tab:next".to_string(),
    }
}
