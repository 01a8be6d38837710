//! Privacy notice view (LGPD)

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Draw the LGPD privacy notice
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Aviso de Privacidade (LGPD)",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Controlador"),
        Line::from("CoopHub — contato: contato@coophub.app. Encarregado (DPO): dpo@coophub.app."),
        Line::from(""),
        heading("Finalidades"),
        Line::from(
            "Gerenciar a lista de espera, contatar interessados, organizar entrevistas de \
             descoberta e comunicar atualizações do produto.",
        ),
        Line::from(""),
        heading("Bases legais"),
        Line::from(
            "Consentimento do titular (art. 7º, I) e procedimentos preliminares a contrato a \
             pedido do titular (art. 7º, V).",
        ),
        Line::from(""),
        heading("Direitos do titular"),
        Line::from(
            "Confirmação do tratamento, acesso, correção, portabilidade, \
             anonimização/eliminação, informação sobre compartilhamento, revogação do \
             consentimento e oposição. Para exercer, escreva para dpo@coophub.app.",
        ),
        Line::from(""),
        heading("Compartilhamento e transferências internacionais"),
        Line::from(
            "Podemos utilizar operadores (ex.: provedores de formulários, e-mail e analytics) \
             que tratam dados em nosso nome, inclusive fora do Brasil, com salvaguardas \
             contratuais adequadas.",
        ),
        Line::from(""),
        heading("Retenção"),
        Line::from(
            "Manteremos os dados pelo tempo necessário às finalidades acima ou até a revogação \
             do consentimento, o que ocorrer primeiro.",
        ),
        Line::from(""),
        heading("Segurança"),
        Line::from(
            "Adotamos medidas técnicas e organizacionais para proteger os dados. Saiba mais na \
             nossa política resumida.",
        ),
        Line::from(""),
        heading("Revogação de consentimento"),
        Line::from(
            "Você pode revogar a qualquer momento enviando um e-mail para dpo@coophub.app com \
             o assunto “Revogar consentimento”.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Lei nº 13.709/2018 (LGPD) — jurisdição Brasil.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Privacidade ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}
