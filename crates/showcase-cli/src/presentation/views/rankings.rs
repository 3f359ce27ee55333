use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use crate::presentation::view_models::RankingsViewModel;

pub struct RankingsView<'a> {
    model: &'a RankingsViewModel,
}

impl<'a> RankingsView<'a> {
    pub fn new(model: &'a RankingsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for RankingsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let refresh_hint = if self.model.refreshing {
            "actualizando..."
        } else {
            "[a] actualizar"
        };
        let title = format!(
            "Rankings: {} ({} jugadores)  [c] cambiar ciudad  {}",
            self.model.city, self.model.total, refresh_hint
        );
        let block = Block::default().borders(Borders::ALL).title(title);

        if self.model.loading {
            Widget::render(block.title_bottom("Cargando..."), area, buf);
            return;
        }
        if self.model.rows.is_empty() {
            Widget::render(block.title_bottom("Sin datos de ranking"), area, buf);
            return;
        }

        let rows = self.model.rows.iter().map(|row| {
            let style = match row.position {
                1 => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                2 | 3 => Style::default().fg(Color::Cyan),
                _ => Style::default(),
            };
            Row::new(vec![
                Cell::from(format!("#{}", row.position)),
                Cell::from(row.name.clone()),
                Cell::from(row.city.clone()),
                Cell::from(row.votes.to_string()),
            ])
            .style(style)
        });

        Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(45),
                Constraint::Percentage(30),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec!["Pos", "Jugador", "Ciudad", "Votos"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(block)
        .render(area, buf);
    }
}
