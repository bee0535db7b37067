//! Reusable UI components

mod button;
mod link;
mod radio;
mod text_input;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use link::link_span;
pub use radio::draw_radio;
pub use text_input::{draw_input, draw_strength_meter, INPUT_HEIGHT};
