use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ProfileViewModel;

pub struct ProfileView<'a> {
    model: Option<&'a ProfileViewModel>,
}

impl<'a> ProfileView<'a> {
    pub fn new(model: Option<&'a ProfileViewModel>) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProfileView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Perfil");

        let Some(profile) = self.model else {
            Paragraph::new("Cargando perfil...")
                .block(block)
                .render(area, buf);
            return;
        };

        let lines = vec![
            Line::from(Span::styled(
                profile.name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Correo:  {}", profile.email)),
            Line::from(format!("Ciudad:  {}", profile.city)),
            Line::from(format!("País:    {}", profile.country)),
            Line::from(""),
            Line::from(vec![
                Span::styled("[o]", Style::default().fg(Color::Yellow)),
                Span::raw(" cerrar sesión"),
            ]),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
