use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ScreenViewModel;

use super::{RankingsView, VideoListView};

/// Dashboard page: own-video aggregates plus the public list and the
/// rankings side by side.
pub struct DashboardView<'a> {
    model: &'a ScreenViewModel,
    selected: usize,
}

impl<'a> DashboardView<'a> {
    pub fn new(model: &'a ScreenViewModel, selected: usize) -> Self {
        Self { model, selected }
    }
}

impl<'a> Widget for DashboardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(8)]).split(area);

        let stats = &self.model.dashboard;
        let summary = vec![
            Line::from(vec![
                Span::raw("Mis videos: "),
                Span::styled(
                    stats.video_count.to_string(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw("   Procesados: "),
                Span::styled(
                    stats.processed_count.to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("   Votos recibidos: "),
                Span::styled(
                    stats.total_votes.to_string(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("   Tu posición: "),
                Span::styled(
                    match stats.own_rank {
                        Some(rank) => format!("#{}", rank),
                        None => "—".to_string(),
                    },
                    Style::default().fg(Color::Magenta),
                ),
            ]),
            Line::from(Span::styled(
                "[u] subir un nuevo video",
                Style::default().fg(Color::Yellow),
            )),
        ];
        Paragraph::new(summary)
            .block(Block::default().borders(Borders::ALL).title("Mi Panel"))
            .render(chunks[0], buf);

        let content =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);

        VideoListView::new(&self.model.public_videos, "Videos de Competencia", self.selected)
            .render(content[0], buf);
        RankingsView::new(&self.model.rankings).render(content[1], buf);
    }
}
