//! Field rendering for the sign-up form
//!
//! Each field kind gets its own widget shape: bordered single-line inputs,
//! multiline text areas with a trailing cursor, left/right selects,
//! checklist multi-selects and the consent checkbox. A field carrying a
//! validation message renders with a red border and the message appended to
//! its title.

use crate::state::{FieldId, FieldKind, SignupForm};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows each field occupies in the form stack, borders included
pub fn field_height(field: FieldId) -> u16 {
    match field.kind() {
        FieldKind::Text | FieldKind::Select | FieldKind::Button => 3,
        FieldKind::TextArea => 5,
        FieldKind::MultiSelect => field.options().map_or(0, |opts| opts.len()) as u16 + 2,
        FieldKind::Checkbox => 5,
    }
}

/// Draw one field of the sign-up form
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    field: FieldId,
    is_active: bool,
    error: Option<&str>,
) {
    match field.kind() {
        FieldKind::Text => draw_text(frame, area, form, field, is_active, error, false),
        FieldKind::TextArea => draw_text(frame, area, form, field, is_active, error, true),
        FieldKind::Select => draw_select(frame, area, form, field, is_active, error),
        FieldKind::MultiSelect => draw_multi_select(frame, area, form, field, is_active, error),
        FieldKind::Checkbox => draw_checkbox(frame, area, form, field, is_active, error),
        // The submit button is drawn by the form view itself
        FieldKind::Button => {}
    }
}

/// Block around a field: red when it has an error, cyan when active
fn field_block(field: FieldId, is_active: bool, error: Option<&str>) -> Block<'static> {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title_spans = vec![Span::raw(format!(" {} ", field.label()))];
    if let Some(message) = error {
        title_spans.push(Span::styled(
            format!("{message} "),
            Style::default().fg(Color::Red),
        ));
    }

    Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn draw_text(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    field: FieldId,
    is_active: bool,
    error: Option<&str>,
    is_multiline: bool,
) {
    let value = form.text_value(field);
    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() && !is_active {
        // Placeholder text while the field is untouched
        Paragraph::new(Line::from(Span::styled(
            field.placeholder().unwrap_or("").to_string(),
            Style::default().fg(Color::DarkGray),
        )))
    } else if is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::raw(value.to_string()),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(field, is_active, error);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn draw_select(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    field: FieldId,
    is_active: bool,
    error: Option<&str>,
) {
    let value = form.text_value(field);

    let line = if value.is_empty() {
        Line::from(Span::styled(
            if is_active { "◄ Selecione... ►" } else { "Selecione..." }.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else if is_active {
        Line::from(vec![
            Span::styled("◄ ", Style::default().fg(Color::Cyan)),
            Span::raw(value.to_string()),
            Span::styled(" ►", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(value.to_string())
    };

    let block = field_block(field, is_active, error);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_multi_select(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    field: FieldId,
    is_active: bool,
    error: Option<&str>,
) {
    let options = field.options().unwrap_or_default();
    let selected = form.selections(field).unwrap_or_default();

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_cursor_row = is_active && idx == form.option_cursor;
            let is_checked = selected.iter().any(|s| s == option);

            let marker = if is_checked { "[x] " } else { "[ ] " };
            let pointer = if is_cursor_row { "▸ " } else { "  " };

            let style = if is_cursor_row {
                Style::default().fg(Color::Cyan)
            } else if is_checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(pointer, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{marker}{option}"), style),
            ])
        })
        .collect();

    let block = field_block(field, is_active, error);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    field: FieldId,
    is_active: bool,
    error: Option<&str>,
) {
    let marker = if form.consent { "[x] " } else { "[ ] " };
    let marker_style = if form.consent {
        Style::default().fg(Color::Green)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(marker, marker_style),
            Span::raw(
                "Concordo em receber comunicações sobre atualizações, materiais informativos \
                 e convites relacionados ao produto.",
            ),
        ]),
        Line::from(Span::styled(
            "    Você pode revogar o consentimento quando quiser.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = field_block(field, is_active, error);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
