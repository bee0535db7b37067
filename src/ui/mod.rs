//! UI module for rendering the TUI

mod components;
mod layout;
mod signup_form;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    signup_form::draw(
        frame,
        content_area,
        &app.signup,
        &app.props(),
        app.localizer.as_ref(),
    );

    layout::draw_status_bar(frame, status_area, app);
}
