//! Landing view with the product pitch and waitlist call-to-action

use crate::app::App;
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Public demo deployment shown on the landing page
const DEMO_LINK: &str = "https://coophub-app-demo.vercel.app/";

/// Draw the landing view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let year = chrono::Local::now().year();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Gestão de cooperativas simples, rápida e transparente.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Centralize operações, financeiro, documentos e governança em um único hub. \
             Menos retrabalho, mais resultado.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "─".repeat(40),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Protótipo",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Acessar Protótipo: "),
            Span::styled(DEMO_LINK, Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Entre na lista de espera",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Ganhe prioridade, onboarding guiado e condições de early adopter."),
        Line::from(vec![
            Span::raw("Pressione "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" para abrir a inscrição."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "─".repeat(40),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "CoopHub",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("O hub que organiza as operações da sua cooperativa."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Contato: ", Style::default().fg(Color::DarkGray)),
            Span::styled("contato@coophub.app", Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled("LGPD: ", Style::default().fg(Color::DarkGray)),
            Span::raw("pressione 3 para o aviso de privacidade"),
        ]),
        Line::from(""),
    ];

    content.push(Line::from(Span::styled(
        format!("© {year} CoopHub. Todos os direitos reservados."),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" CoopHub ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}
