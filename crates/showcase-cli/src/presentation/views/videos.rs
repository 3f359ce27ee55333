use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::presentation::view_models::VideoListViewModel;

/// Table of videos, used for both the public list and the owner's list.
pub struct VideoListView<'a> {
    model: &'a VideoListViewModel,
    title: &'a str,
    selected: usize,
}

impl<'a> VideoListView<'a> {
    pub fn new(model: &'a VideoListViewModel, title: &'a str, selected: usize) -> Self {
        Self {
            model,
            title,
            selected,
        }
    }
}

impl<'a> Widget for VideoListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(self.title);

        if self.model.loading {
            Widget::render(block.title_bottom("Cargando..."), area, buf);
            return;
        }
        if self.model.rows.is_empty() {
            Widget::render(block.title_bottom("No hay videos todavía"), area, buf);
            return;
        }

        let rows = self.model.rows.iter().map(|row| {
            let vote_mark = if row.voted {
                "✓"
            } else if row.votable {
                "♥"
            } else {
                " "
            };
            Row::new(vec![
                Cell::from(row.title.clone()),
                Cell::from(row.owner.clone()),
                Cell::from(row.city.clone()),
                Cell::from(row.status.clone()),
                Cell::from(format!("{} {}", row.votes, vote_mark)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Percentage(15),
                Constraint::Percentage(13),
                Constraint::Percentage(12),
            ],
        )
        .header(
            Row::new(vec!["Título", "Jugador", "Ciudad", "Estado", "Votos"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

        let mut state = TableState::default();
        state.select(Some(self.selected.min(self.model.rows.len().saturating_sub(1))));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
