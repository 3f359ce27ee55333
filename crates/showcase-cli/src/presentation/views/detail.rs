use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::VideoDetailViewModel;

pub struct VideoDetailView<'a> {
    model: &'a VideoDetailViewModel,
}

impl<'a> VideoDetailView<'a> {
    pub fn new(model: &'a VideoDetailViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for VideoDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.model.title.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Jugador: {}", self.model.owner)),
            Line::from(format!("Ciudad:  {}", self.model.city)),
            Line::from(format!("Estado:  {}", self.model.status)),
            Line::from(format!("Votos:   {}", self.model.votes)),
        ];
        if let Some(uploaded) = &self.model.uploaded_at {
            lines.push(Line::from(format!("Subido:  {}", uploaded)));
        }
        lines.push(Line::from(""));

        if self.model.voted {
            lines.push(Line::from(Span::styled(
                "Ya votaste por este video ✓",
                Style::default().fg(Color::Green),
            )));
        } else if self.model.votable {
            lines.push(Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
                Span::raw(" votar por este video"),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                "Este video no acepta votos",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" volver a la lista"),
        ]));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Video"))
            .render(area, buf);
    }
}
