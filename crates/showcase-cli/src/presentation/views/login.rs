use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renderer-owned input state for the combined login/signup form.
///
/// Text buffers live here, not in the app state; only a submitted form
/// crosses the channel to the controller.
#[derive(Debug, Default)]
pub struct LoginFormState {
    pub signup_mode: bool,
    pub focus: usize,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub password2: String,
    pub city_index: usize,
}

impl LoginFormState {
    pub fn field_count(&self) -> usize {
        if self.signup_mode {
            6
        } else {
            2
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    pub fn active_buffer(&mut self) -> Option<&mut String> {
        if self.signup_mode {
            match self.focus {
                0 => Some(&mut self.first_name),
                1 => Some(&mut self.last_name),
                2 => Some(&mut self.email),
                3 => Some(&mut self.password),
                4 => Some(&mut self.password2),
                _ => None, // city is picked with arrows, not typed
            }
        } else {
            match self.focus {
                0 => Some(&mut self.email),
                1 => Some(&mut self.password),
                _ => None,
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        self.signup_mode = !self.signup_mode;
        self.focus = 0;
    }
}

pub struct LoginView<'a> {
    form: &'a LoginFormState,
    cities: &'a [&'a str],
}

impl<'a> LoginView<'a> {
    pub fn new(form: &'a LoginFormState, cities: &'a [&'a str]) -> Self {
        Self { form, cities }
    }

    fn field(&self, index: usize, label: &str, value: &str, masked: bool) -> Line<'static> {
        let shown = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let style = if self.form.focus == index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if self.form.focus == index { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:<18}", label), style),
            Span::raw(format!("{}{}", shown, cursor)),
        ])
    }
}

impl<'a> Widget for LoginView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.form.signup_mode {
            "Crear cuenta"
        } else {
            "Iniciar Sesión"
        };

        let mut lines = Vec::new();
        if self.form.signup_mode {
            lines.push(self.field(0, "Nombre:", &self.form.first_name, false));
            lines.push(self.field(1, "Apellido:", &self.form.last_name, false));
            lines.push(self.field(2, "Correo:", &self.form.email, false));
            lines.push(self.field(3, "Contraseña:", &self.form.password, true));
            lines.push(self.field(4, "Confirmar:", &self.form.password2, true));
            let city = self
                .cities
                .get(self.form.city_index)
                .copied()
                .unwrap_or_default();
            let city_style = if self.form.focus == 5 {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<18}", "Ciudad (←/→):"), city_style),
                Span::raw(city.to_string()),
            ]));
        } else {
            lines.push(self.field(0, "Correo:", &self.form.email, false));
            lines.push(self.field(1, "Contraseña:", &self.form.password, true));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" enviar  "),
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw(" siguiente campo  "),
            Span::styled("[F2]", Style::default().fg(Color::Yellow)),
            Span::raw(if self.form.signup_mode {
                " ya tengo cuenta"
            } else {
                " crear cuenta"
            }),
        ]));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}
