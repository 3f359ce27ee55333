use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ScreenViewModel;

pub struct LandingView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> LandingView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for LandingView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Rising Stars Showcase",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Demuestra tu talento en la cancha."),
            Line::from("Sube tu mejor video, recibe votos y sube en el ranking de tu ciudad."),
            Line::from(""),
        ];

        if let Some(name) = &self.model.user_name {
            lines.push(Line::from(format!("Bienvenido de nuevo, {}.", name)));
            lines.push(Line::from(Span::styled(
                "Pulsa [d] para ir a tu panel",
                Style::default().fg(Color::Yellow),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Pulsa [l] para iniciar sesión o [v] para ver los videos",
                Style::default().fg(Color::Yellow),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
