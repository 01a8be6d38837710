//! Sign-up form view

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::{FieldId, SubmissionState, FIELD_ORDER};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SUBMIT_LABEL: &str = "Entrar na lista de espera";
const SUBMITTING_LABEL: &str = "Enviando...";
const SUCCESS_BANNER: &str = "Inscrição enviada com sucesso! Em breve entraremos em contato.";

/// Draw the sign-up view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Entre na lista de espera ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let has_banner = matches!(
        app.state.submission,
        SubmissionState::Submitted | SubmissionState::Error(_)
    );

    let mut constraints = vec![
        Constraint::Length(2), // Subtitle
        Constraint::Min(0),    // Field stack
    ];
    if has_banner {
        constraints.push(Constraint::Length(3));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let subtitle = Paragraph::new(Line::from(
        "Ganhe prioridade, onboarding guiado e condições de early adopter.",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(subtitle, chunks[0]);

    draw_fields(frame, chunks[1], app);

    if has_banner {
        draw_banner(frame, chunks[2], &app.state.submission);
    }
}

/// Draw the window of fields that fits on screen, keeping the active field
/// fully visible
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.state.form.active_field_index;
    let first = first_visible_field(active, area.height);

    let mut y = area.y;
    for (offset, &field) in FIELD_ORDER[first..].iter().enumerate() {
        let height = field_height(field);
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let is_active = first + offset == active;

        if field == FieldId::Submit {
            let submitting = app.state.submission.is_submitting();
            let label = if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            };
            render_button(frame, rect, label, is_active, !submitting);
        } else {
            let error = app.state.field_errors.get(&field).copied();
            draw_field(frame, rect, &app.state.form, field, is_active, error);
        }

        y += height;
    }
}

/// First field of the visible window: walks forward until the span from it
/// to the active field fits in the view
fn first_visible_field(active_index: usize, view_height: u16) -> usize {
    let mut first = 0;
    while first < active_index {
        let needed: u16 = FIELD_ORDER[first..=active_index]
            .iter()
            .map(|f| field_height(*f))
            .sum();
        if needed <= view_height {
            break;
        }
        first += 1;
    }
    first
}

fn draw_banner(frame: &mut Frame, area: Rect, submission: &SubmissionState) {
    let (text, color) = match submission {
        SubmissionState::Submitted => (SUCCESS_BANNER.to_string(), Color::Green),
        SubmissionState::Error(message) => (format!("Ops, algo deu errado: {message}"), Color::Red),
        _ => return,
    };

    let banner = Paragraph::new(text).style(Style::default().fg(color)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(banner, area);
}
