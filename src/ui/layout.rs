//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar items with their shortcut digits
const SIDEBAR_ITEMS: &[(&str, &str)] = &[
    ("1", "Início"),
    ("2", "Inscrição"),
    ("3", "Privacidade"),
];

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    // Vertical layout for button boxes (centered vertically)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(BUTTON_HEIGHT), // Início
            Constraint::Length(BUTTON_HEIGHT), // Inscrição
            Constraint::Length(BUTTON_HEIGHT), // Privacidade
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(area);

    for (idx, (key, label)) in SIDEBAR_ITEMS.iter().enumerate() {
        let is_selected = idx == app.state.sidebar_index;
        render_sidebar_button(frame, chunks[idx + 1], key, label, is_selected);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // Webhook status
    let webhook_status = if app.webhook_configured() {
        Span::styled(" ● Sheets: configurado ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ Sheets: modo local ", Style::default().fg(Color::Yellow))
    };
    spans.push(webhook_status);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:sair ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Splash => "Pressione qualquer tecla para pular".to_string(),
        View::Landing => "1/2/3:nav  j/k:rolar  Enter:inscrição  q:sair".to_string(),
        View::Signup => {
            format!("Tab:próximo  Espaço:marcar  {SUBMIT_SHORTCUT}:enviar  Esc:voltar")
        }
        View::Privacy => "j/k:rolar  d/u:página  Esc:voltar".to_string(),
    }
}
