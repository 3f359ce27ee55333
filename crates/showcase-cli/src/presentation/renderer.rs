//! TUI renderer.
//!
//! Runs on its own thread. Owns UI-only state (input buffers, list cursor),
//! receives [`ScreenViewModel`] updates from the controller, and translates
//! keyboard input into [`Intent`]s. It holds no domain state and makes no
//! network calls.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame, Terminal,
};
use showcase_app::{Screen, CITIES};
use tokio::sync::mpsc::UnboundedSender;

use crate::controller::{Intent, UiEvent};
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::{
    DashboardView, LandingView, LoginFormState, LoginView, NavBarView, NoticeView, ProfileView,
    RankingsView, RestrictedView, StatusBarView, UploadFormState, UploadView, VideoDetailView,
    VideoListView,
};

pub struct TuiRenderer {
    current: Option<ScreenViewModel>,
    intent_tx: UnboundedSender<Intent>,
    should_quit: bool,
    login_form: LoginFormState,
    upload_form: UploadFormState,
    list_cursor: usize,
}

impl TuiRenderer {
    pub fn new(intent_tx: UnboundedSender<Intent>) -> Self {
        Self {
            current: None,
            intent_tx,
            should_quit: false,
            login_form: LoginFormState::default(),
            upload_form: UploadFormState::default(),
            list_cursor: 0,
        }
    }

    /// Terminal setup, event loop, terminal teardown.
    pub fn run(mut self, rx: Receiver<UiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<UiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            while let Ok(UiEvent::Update(view_model)) = rx.try_recv() {
                self.apply_update(*view_model);
            }

            if self.should_quit {
                let _ = self.intent_tx.send(Intent::Quit);
                break;
            }
        }
        Ok(())
    }

    fn apply_update(&mut self, view_model: ScreenViewModel) {
        let rows = view_model.public_videos.rows.len();
        if rows == 0 {
            self.list_cursor = 0;
        } else if self.list_cursor >= rows {
            self.list_cursor = rows - 1;
        }
        self.current = Some(view_model);
    }

    fn send(&self, intent: Intent) {
        let _ = self.intent_tx.send(intent);
    }

    // ---- input ---------------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let Some(screen) = self.current.as_ref().map(|vm| vm.screen) else {
            if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        };
        let restricted = self.current.as_ref().map(|vm| vm.restricted).unwrap_or(false);

        match screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Upload if !restricted => self.handle_upload_key(key),
            _ => self.handle_browse_key(key, screen),
        }
    }

    /// Keys on screens without text entry.
    fn handle_browse_key(&mut self, key: KeyEvent, screen: Screen) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('i') => self.send(Intent::Navigate(Screen::Landing)),
            KeyCode::Char('v') => self.send(Intent::Navigate(Screen::Videos)),
            KeyCode::Char('r') => self.send(Intent::Navigate(Screen::Rankings)),
            KeyCode::Char('d') => self.send(Intent::Navigate(Screen::Dashboard)),
            KeyCode::Char('u') => self.send(Intent::Navigate(Screen::Upload)),
            KeyCode::Char('p') => self.send(Intent::Navigate(Screen::Profile)),
            KeyCode::Char('l') => self.send(Intent::Navigate(Screen::Login)),
            KeyCode::Char('o') => self.send(Intent::Logout),
            KeyCode::Char('c') => self.cycle_city(),
            KeyCode::Char('a') if screen.loads_rankings() => {
                let refreshing = self
                    .current
                    .as_ref()
                    .map(|vm| vm.rankings.refreshing)
                    .unwrap_or(false);
                if !refreshing {
                    self.send(Intent::RefreshRankings);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let rows = self
                    .current
                    .as_ref()
                    .map(|vm| vm.public_videos.rows.len())
                    .unwrap_or(0);
                if self.list_cursor + 1 < rows {
                    self.list_cursor += 1;
                }
            }
            KeyCode::Enter => match screen {
                Screen::Videos | Screen::Dashboard => {
                    let video_id = self.current.as_ref().and_then(|vm| {
                        vm.public_videos
                            .rows
                            .get(self.list_cursor)
                            .map(|row| row.video_id.clone())
                    });
                    if let Some(video_id) = video_id {
                        self.send(Intent::ExpandVideo(video_id));
                    }
                }
                Screen::VideoExpanded => {
                    let video_id = self
                        .current
                        .as_ref()
                        .and_then(|vm| vm.expanded.as_ref())
                        .map(|d| d.video_id.clone());
                    if let Some(video_id) = video_id {
                        self.send(Intent::Vote(video_id));
                    }
                }
                _ => {}
            },
            KeyCode::Esc => {
                if screen == Screen::VideoExpanded {
                    self.send(Intent::CollapseVideo);
                } else {
                    self.send(Intent::DismissNotice);
                }
            }
            _ => {}
        }
    }

    fn cycle_city(&mut self) {
        let current = self
            .current
            .as_ref()
            .map(|vm| vm.rankings.city.clone())
            .unwrap_or_default();
        let index = CITIES.iter().position(|c| *c == current).unwrap_or(0);
        let next = CITIES[(index + 1) % CITIES.len()];
        self.send(Intent::SelectCity(next.to_string()));
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.login_form = LoginFormState::default();
                self.send(Intent::Navigate(Screen::Landing));
            }
            KeyCode::Tab => self.login_form.next_field(),
            KeyCode::F(2) => self.login_form.toggle_mode(),
            KeyCode::Left if self.login_form.signup_mode && self.login_form.focus == 5 => {
                // Skip "Todas"; it is a filter value, not a home city.
                let options = CITIES.len() - 1;
                self.login_form.city_index =
                    (self.login_form.city_index + options - 1) % options;
            }
            KeyCode::Right if self.login_form.signup_mode && self.login_form.focus == 5 => {
                let options = CITIES.len() - 1;
                self.login_form.city_index = (self.login_form.city_index + 1) % options;
            }
            KeyCode::Enter => self.submit_login_form(),
            KeyCode::Backspace => {
                if let Some(buffer) = self.login_form.active_buffer() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.login_form.active_buffer() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_login_form(&mut self) {
        if self.login_form.signup_mode {
            let city = CITIES
                .get(self.login_form.city_index + 1)
                .copied()
                .unwrap_or("Bogotá");
            self.send(Intent::SubmitSignup {
                first_name: self.login_form.first_name.clone(),
                last_name: self.login_form.last_name.clone(),
                email: self.login_form.email.clone(),
                password1: self.login_form.password.clone(),
                password2: self.login_form.password2.clone(),
                city: city.to_string(),
            });
        } else {
            self.send(Intent::SubmitLogin {
                email: self.login_form.email.clone(),
                password: self.login_form.password.clone(),
            });
        }
    }

    fn handle_upload_key(&mut self, key: KeyEvent) {
        let failed = self
            .current
            .as_ref()
            .map(|vm| vm.upload.failure.is_some())
            .unwrap_or(false);
        if failed {
            match key.code {
                KeyCode::Char('r') => self.send(Intent::UploadRetry),
                KeyCode::Char('n') => {
                    self.upload_form = UploadFormState::default();
                    self.send(Intent::UploadDiscardFile);
                }
                KeyCode::Esc => self.send(Intent::Navigate(Screen::Dashboard)),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.send(Intent::Navigate(Screen::Dashboard)),
            KeyCode::Tab => self.upload_form.next_field(),
            KeyCode::F(5) => {
                self.send(Intent::UploadSetTitle(self.upload_form.title.clone()));
                self.send(Intent::UploadSubmit);
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.send(Intent::UploadToggleVisibility);
            }
            KeyCode::Enter => {
                if self.upload_form.focus == 0 {
                    self.send(Intent::UploadSetTitle(self.upload_form.title.clone()));
                    self.upload_form.next_field();
                } else if !self.upload_form.path.trim().is_empty() {
                    self.send(Intent::UploadPickFile(PathBuf::from(
                        self.upload_form.path.trim(),
                    )));
                }
            }
            KeyCode::Backspace => {
                self.upload_form.active_buffer().pop();
            }
            KeyCode::Char(c) => {
                self.upload_form.active_buffer().push(c);
            }
            _ => {}
        }
    }

    // ---- drawing -------------------------------------------------------

    fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        let Some(vm) = &self.current else {
            let loading = Paragraph::new("Conectando...")
                .block(Block::default().borders(Borders::ALL).title("Rising Stars"));
            f.render_widget(loading, size);
            return;
        };

        let has_notice = vm.notice.is_some();
        let constraints = if has_notice {
            vec![
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ]
        } else {
            vec![
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ]
        };
        let chunks = Layout::vertical(constraints).split(size);

        f.render_widget(NavBarView::new(vm), chunks[0]);

        let mut next = 1;
        if let Some(notice) = &vm.notice {
            f.render_widget(NoticeView::new(notice), chunks[next]);
            next += 1;
        }
        let content = chunks[next];
        let status = chunks[next + 1];

        if vm.restricted {
            RestrictedView.render(content, f.buffer_mut());
        } else {
            match vm.screen {
                Screen::Landing => f.render_widget(LandingView::new(vm), content),
                Screen::Login => {
                    f.render_widget(LoginView::new(&self.login_form, &CITIES[1..]), content)
                }
                Screen::Dashboard => {
                    f.render_widget(DashboardView::new(vm, self.list_cursor), content)
                }
                Screen::Videos => f.render_widget(
                    VideoListView::new(&vm.public_videos, "Videos de Competencia", self.list_cursor),
                    content,
                ),
                Screen::Rankings => f.render_widget(RankingsView::new(&vm.rankings), content),
                Screen::Upload => {
                    f.render_widget(UploadView::new(&vm.upload, &self.upload_form), content)
                }
                Screen::Profile => {
                    f.render_widget(ProfileView::new(vm.profile.as_ref()), content)
                }
                Screen::VideoExpanded => {
                    if let Some(detail) = &vm.expanded {
                        f.render_widget(VideoDetailView::new(detail), content);
                    }
                }
            }
        }

        f.render_widget(StatusBarView::new(vm), status);
    }
}
