use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::presentation::view_models::UploadViewModel;

/// Renderer-owned input state for the upload form.
#[derive(Debug, Default)]
pub struct UploadFormState {
    pub focus: usize,
    pub title: String,
    pub path: String,
}

impl UploadFormState {
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % 2;
    }

    pub fn active_buffer(&mut self) -> &mut String {
        if self.focus == 0 {
            &mut self.title
        } else {
            &mut self.path
        }
    }
}

pub struct UploadView<'a> {
    model: &'a UploadViewModel,
    form: &'a UploadFormState,
}

impl<'a> UploadView<'a> {
    pub fn new(model: &'a UploadViewModel, form: &'a UploadFormState) -> Self {
        Self { model, form }
    }

    fn field(&self, index: usize, label: &str, value: &str) -> Line<'static> {
        let style = if self.form.focus == index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if self.form.focus == index { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:<16}", label), style),
            Span::raw(format!("{}{}", value, cursor)),
        ])
    }
}

impl<'a> Widget for UploadView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Failure takes over the whole screen as a modal-style panel.
        if let Some(failure) = &self.model.failure {
            let mut lines = vec![
                Line::from(Span::styled(
                    failure.title.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(failure.message.clone()),
                Line::from(""),
            ];
            for suggestion in &failure.suggestions {
                lines.push(Line::from(format!("  • {}", suggestion)));
            }
            if let Some(technical) = &failure.technical {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Detalle: {}", technical),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("[r]", Style::default().fg(Color::Yellow)),
                Span::raw(" reintentar  "),
                Span::styled("[n]", Style::default().fg(Color::Yellow)),
                Span::raw(" elegir otro archivo"),
            ]));
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Error"))
                .render(area, buf);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

        let visibility = if self.model.is_public {
            "Público"
        } else {
            "Privado"
        };
        let file_line = match &self.model.file_name {
            Some(name) => format!("Archivo: {}", name),
            None => "Archivo: (ninguno, escribe la ruta y pulsa Enter)".to_string(),
        };

        let lines = vec![
            self.field(0, "Título:", &self.form.title),
            self.field(1, "Ruta del video:", &self.form.path),
            Line::from(file_line),
            Line::from(format!("Visibilidad: {} (cambia con Ctrl+T)", visibility)),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
                Span::raw(" confirmar campo  "),
                Span::styled("[F5]", Style::default().fg(Color::Yellow)),
                Span::raw(" subir  "),
                Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
                Span::raw(" siguiente campo"),
            ]),
            Line::from(Span::raw("Solo MP4, máximo 100MB.")),
        ];

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Subir Video"))
            .render(chunks[0], buf);

        let gauge_color = if self.model.in_flight {
            Color::Cyan
        } else {
            Color::Green
        };
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(self.model.phase_label.clone()))
            .gauge_style(Style::default().fg(gauge_color))
            .percent(u16::from(self.model.progress))
            .render(chunks[1], buf);
    }
}
