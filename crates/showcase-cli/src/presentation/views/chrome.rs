//! Shared chrome: navigation bar, status bar, notices, and the
//! access-restricted placeholder.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use showcase_app::Screen;

use crate::presentation::view_models::{NoticeViewModel, ScreenViewModel};

pub struct NavBarView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> NavBarView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }

    fn entry(&self, key: &str, label: &str, screen: Screen) -> Vec<Span<'static>> {
        let active = self.model.screen == screen;
        let style = if active {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        vec![
            Span::styled(format!("[{}]", key), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{} ", label), style),
        ]
    }
}

impl<'a> Widget for NavBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        spans.extend(self.entry("i", "Inicio", Screen::Landing));
        spans.extend(self.entry("v", "Videos", Screen::Videos));
        spans.extend(self.entry("r", "Rankings", Screen::Rankings));
        if self.model.authenticated {
            spans.extend(self.entry("d", "Panel", Screen::Dashboard));
            spans.extend(self.entry("u", "Subir", Screen::Upload));
            spans.extend(self.entry("p", "Perfil", Screen::Profile));
        } else {
            spans.extend(self.entry("l", "Entrar", Screen::Login));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Rising Stars Showcase"),
        );
        bar.render(area, buf);
    }
}

pub struct StatusBarView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = match &self.model.user_name {
            Some(name) => format!("Sesión: {}", name),
            None => "Sin sesión".to_string(),
        };
        let line = Line::from(vec![
            Span::raw(session),
            Span::raw(" | "),
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("salir "),
            Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
            Span::raw("mover "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw("abrir"),
        ]);
        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

pub struct NoticeView<'a> {
    model: &'a NoticeViewModel,
}

impl<'a> NoticeView<'a> {
    pub fn new(model: &'a NoticeViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NoticeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = if self.model.is_error {
            Color::Red
        } else {
            Color::Green
        };
        Paragraph::new(Span::styled(
            self.model.text.as_str(),
            Style::default().fg(color),
        ))
        .block(Block::default().borders(Borders::ALL).title("Aviso"))
        .render(area, buf);
    }
}

/// Placeholder shown on session-only screens when nobody is logged in.
pub struct RestrictedView;

impl Widget for RestrictedView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "Acceso Restringido",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Inicia sesión para ver esta sección."),
            Line::from(Span::styled(
                "Pulsa [l] para iniciar sesión",
                Style::default().fg(Color::Yellow),
            )),
        ];
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
