//! Signup form rendering

use crate::i18n::{messages, Localizer};
use crate::state::{
    FocusTarget, SignupForm, SignupProps, ACCOUNT_TYPE, EMAIL, FIRSTNAME, LASTNAME,
    ORGANIZATION, PASSWORD,
};
use crate::ui::components::{
    draw_input, draw_radio, draw_strength_meter, link_span, render_submit_button, BUTTON_HEIGHT,
    INPUT_HEIGHT,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Widest the form grows on large terminals
const FORM_WIDTH: u16 = 64;

/// One vertical slot of the form
#[derive(Debug, PartialEq, Eq)]
enum Row {
    Headline,
    /// A compact account type row is drawn without its border
    AccountType { compact: bool },
    Names,
    Email,
    Password,
    Strength,
    Organization,
    Error(String),
    Submit,
    Legal,
    Spacer,
    Login,
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Headline | Row::Strength | Row::Spacer | Row::Login => 1,
            Row::AccountType { compact: true } => 1,
            Row::Error(_) | Row::Legal => 2,
            Row::Submit => BUTTON_HEIGHT,
            Row::AccountType { compact: false }
            | Row::Names
            | Row::Email
            | Row::Password
            | Row::Organization => {
                INPUT_HEIGHT
            }
        }
    }
}

/// Rows to render for the current form state and props
fn rows(form: &SignupForm, props: &SignupProps, localizer: &dyn Localizer) -> Vec<Row> {
    let mut rows = vec![
        Row::Headline,
        Row::AccountType { compact: false },
        Row::Names,
        Row::Email,
        Row::Password,
        Row::Strength,
    ];
    if form.shows_organization() {
        rows.push(Row::Organization);
    }
    if let Some(message) = props.error_message(localizer) {
        rows.push(Row::Error(message));
    }
    rows.extend([Row::Submit, Row::Legal, Row::Spacer, Row::Login]);
    rows
}

fn total_height(rows: &[Row]) -> u16 {
    rows.iter().map(Row::height).sum()
}

/// Shed decoration until `rows` fit in `height`.
///
/// Inputs, the button and the links keep their full height; the spacer, the
/// headline, the radio border and the strength meter go first, in that order.
fn fit_rows(mut rows: Vec<Row>, height: u16) -> Vec<Row> {
    if total_height(&rows) > height {
        rows.retain(|row| *row != Row::Spacer);
    }
    if total_height(&rows) > height {
        rows.retain(|row| *row != Row::Headline);
    }
    if total_height(&rows) > height {
        for row in rows.iter_mut() {
            if let Row::AccountType { compact } = row {
                *compact = true;
            }
        }
    }
    if total_height(&rows) > height {
        rows.retain(|row| *row != Row::Strength);
    }
    rows
}

/// Draw the signup form centered in `area`
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    props: &SignupProps,
    localizer: &dyn Localizer,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .split(area);

    let block = Block::default()
        .title(" Franz ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);

    let rows = fit_rows(rows(form, props, localizer), inner.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            rows.iter()
                .map(|row| Constraint::Length(row.height()))
                .chain([Constraint::Min(0)]),
        )
        .horizontal_margin(1)
        .split(inner);

    for (row, area) in rows.iter().zip(chunks.iter().copied()) {
        draw_row(frame, area, row, form, props, localizer);
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    row: &Row,
    form: &SignupForm,
    props: &SignupProps,
    localizer: &dyn Localizer,
) {
    let input = |frame: &mut Frame, area: Rect, key: &'static str| {
        if let Some(field) = form.field(key) {
            let reveal = form.password_visible();
            draw_input(frame, area, field, form.is_focused(FocusTarget::Field(key)), reveal);
        }
    };

    match row {
        Row::Headline => {
            let headline = Paragraph::new(localizer.format_message(&messages::HEADLINE))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(headline, area);
        }
        Row::AccountType { .. } => {
            if let Some(field) = form.field(ACCOUNT_TYPE) {
                draw_radio(
                    frame,
                    area,
                    field,
                    form.is_focused(FocusTarget::Field(ACCOUNT_TYPE)),
                );
            }
        }
        Row::Names => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            input(frame, halves[0], FIRSTNAME);
            input(frame, halves[1], LASTNAME);
        }
        Row::Email => input(frame, area, EMAIL),
        Row::Password => input(frame, area, PASSWORD),
        Row::Strength => draw_strength_meter(frame, area, form.form().value(PASSWORD)),
        Row::Organization => input(frame, area, ORGANIZATION),
        Row::Error(message) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(error, area);
        }
        Row::Submit => {
            let button = props.submit_button(localizer);
            render_submit_button(
                frame,
                area,
                &button,
                form.is_focused(FocusTarget::SubmitButton),
            );
        }
        Row::Legal => {
            let legal = Paragraph::new(vec![
                Line::from(localizer.format_message(&messages::LEGAL_INFO)),
                Line::from(vec![
                    link_span(
                        localizer.format_message(&messages::TERMS),
                        form.is_focused(FocusTarget::TermsLink),
                    ),
                    Span::raw(" & "),
                    link_span(
                        localizer.format_message(&messages::PRIVACY),
                        form.is_focused(FocusTarget::PrivacyLink),
                    ),
                    Span::raw("."),
                ]),
            ])
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
            frame.render_widget(legal, area);
        }
        Row::Spacer => {}
        Row::Login => {
            let login = Paragraph::new(Line::from(link_span(
                localizer.format_message(&messages::LOGIN_LINK),
                form.is_focused(FocusTarget::LoginLink),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(login, area);
        }
    }
}
