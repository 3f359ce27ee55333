//! Controller for the interactive session.
//!
//! Owns the [`AppState`] and the API client. Receives [`Intent`]s from the
//! renderer thread, applies the matching state transition, executes the
//! returned [`Command`]s as async tasks, and pushes a fresh view model to
//! the renderer after every change. The renderer never touches state or the
//! network.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use showcase_app::{AppState, Command, Screen, SelectedFile};
use showcase_client::ApiClient;
use showcase_types::{RankingsPage, SignupRequest, UserProfile, Video};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::media::media_type_for;
use crate::presentation::presenter::build_screen;
use crate::presentation::view_models::ScreenViewModel;

const RANKINGS_PAGE_SIZE: u64 = 50;
const PROGRESS_TICK_MS: u64 = 500;
const PROCESSING_WAIT_SECS: u64 = 3;

/// User actions sent by the renderer thread.
#[derive(Debug, Clone)]
pub enum Intent {
    Navigate(Screen),
    SubmitLogin {
        email: String,
        password: String,
    },
    SubmitSignup {
        first_name: String,
        last_name: String,
        email: String,
        password1: String,
        password2: String,
        city: String,
    },
    SelectCity(String),
    RefreshRankings,
    ExpandVideo(String),
    CollapseVideo,
    Vote(String),
    Unvote(String),
    UploadSetTitle(String),
    UploadToggleVisibility,
    UploadPickFile(PathBuf),
    UploadSubmit,
    UploadRetry,
    UploadDiscardFile,
    DismissNotice,
    Logout,
    Quit,
}

/// Screen updates pushed to the renderer thread.
pub enum UiEvent {
    Update(Box<ScreenViewModel>),
}

/// Async completions and timer firings routed back into the state machine.
enum AppEvent {
    PublicVideos {
        seq: u64,
        result: std::result::Result<Vec<Video>, String>,
    },
    MyVideos {
        seq: u64,
        result: std::result::Result<Vec<Video>, String>,
    },
    Rankings {
        seq: u64,
        result: std::result::Result<RankingsPage, String>,
    },
    RankingsRefreshed {
        result: std::result::Result<(), String>,
    },
    LoggedIn {
        result: std::result::Result<UserProfile, String>,
    },
    SignedUp {
        result: std::result::Result<UserProfile, String>,
    },
    LoggedOut,
    Voted {
        video_id: String,
        result: std::result::Result<(), String>,
    },
    Unvoted {
        video_id: String,
        result: std::result::Result<(), String>,
    },
    UploadFinished {
        epoch: u64,
        result: std::result::Result<(), String>,
    },
    ProgressTick {
        epoch: u64,
    },
    ProcessingElapsed {
        epoch: u64,
    },
}

struct Controller {
    state: AppState,
    client: Arc<ApiClient>,
    events_tx: UnboundedSender<AppEvent>,
    ui_tx: Sender<UiEvent>,
    progress_ticker: Option<JoinHandle<()>>,
}

/// Run the controller loop until the renderer asks to quit or disconnects.
pub async fn run(
    client: ApiClient,
    mut intent_rx: UnboundedReceiver<Intent>,
    ui_tx: Sender<UiEvent>,
) -> Result<()> {
    let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();

    let mut controller = Controller {
        state: AppState::new(),
        client: Arc::new(client),
        events_tx,
        ui_tx,
        progress_ticker: None,
    };

    controller.restore_session().await;
    let start = if controller.state.is_authenticated() {
        Screen::Dashboard
    } else {
        Screen::Landing
    };
    let commands = controller.state.navigate(start);
    controller.execute_all(commands);
    controller.push_update();

    loop {
        tokio::select! {
            intent = intent_rx.recv() => {
                match intent {
                    Some(Intent::Quit) | None => break,
                    Some(intent) => {
                        controller.handle_intent(intent);
                        controller.push_update();
                    }
                }
            }
            event = events_rx.recv() => {
                // The controller always holds a sender, so this never ends.
                if let Some(event) = event {
                    controller.handle_event(event);
                    controller.push_update();
                }
            }
        }
    }

    if let Some(handle) = controller.progress_ticker.take() {
        handle.abort();
    }
    Ok(())
}

impl Controller {
    /// Validate any stored credential at startup. A rejected token is
    /// dropped silently; the user simply starts logged out.
    async fn restore_session(&mut self) {
        if !self.client.is_authenticated() {
            return;
        }
        match self.client.profile().await {
            Ok(profile) => {
                tracing::info!(user = %profile.display_name(), "session restored");
                self.state.session_restored(profile);
            }
            Err(e) if e.is_auth_error() => {
                tracing::info!("stored credential rejected, clearing it");
                if let Err(e) = self.client.logout().await {
                    tracing::warn!(error = %e, "could not clear credential");
                }
                self.state.session_invalid();
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile fetch failed at startup");
            }
        }
    }

    fn handle_intent(&mut self, intent: Intent) {
        let commands = match intent {
            Intent::Navigate(screen) => self.state.navigate(screen),
            Intent::SubmitLogin { email, password } => {
                self.state.login_submitted(email, password)
            }
            Intent::SubmitSignup {
                first_name,
                last_name,
                email,
                password1,
                password2,
                city,
            } => self.state.signup_submitted(SignupRequest::new(
                first_name, last_name, email, password1, password2, city,
            )),
            Intent::SelectCity(city) => self.state.select_city(city),
            Intent::RefreshRankings => self.state.refresh_rankings_requested(),
            Intent::ExpandVideo(video_id) => {
                match self
                    .state
                    .public_videos()
                    .iter()
                    .find(|v| v.video_id == video_id)
                    .cloned()
                {
                    Some(video) => self.state.expand_video(video),
                    None => Vec::new(),
                }
            }
            Intent::CollapseVideo => self.state.collapse_video(),
            Intent::Vote(video_id) => self.state.vote_requested(&video_id),
            Intent::Unvote(video_id) => self.state.unvote_requested(&video_id),
            Intent::UploadSetTitle(title) => {
                self.state.set_upload_title(title);
                Vec::new()
            }
            Intent::UploadToggleVisibility => {
                self.state.toggle_upload_visibility();
                Vec::new()
            }
            Intent::UploadPickFile(path) => {
                self.pick_upload_file(&path);
                Vec::new()
            }
            Intent::UploadSubmit => self.state.upload_submitted(),
            Intent::UploadRetry => self.state.upload_retry(),
            Intent::UploadDiscardFile => {
                self.state.upload_pick_new_file();
                Vec::new()
            }
            Intent::DismissNotice => {
                self.state.clear_notice();
                Vec::new()
            }
            Intent::Logout => {
                self.stop_progress_ticker();
                self.state.logout_requested()
            }
            Intent::Quit => Vec::new(),
        };
        self.execute_all(commands);
    }

    fn pick_upload_file(&mut self, path: &Path) {
        let size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read file");
                return;
            }
        };
        self.state.select_upload_file(SelectedFile {
            name: path.display().to_string(),
            size,
            media_type: media_type_for(path).to_string(),
        });
    }

    fn handle_event(&mut self, event: AppEvent) {
        let commands = match event {
            AppEvent::PublicVideos { seq, result } => {
                match result {
                    Ok(videos) => self.state.public_videos_loaded(seq, videos),
                    Err(message) => self.state.public_videos_failed(seq, message),
                }
                Vec::new()
            }
            AppEvent::MyVideos { seq, result } => {
                match result {
                    Ok(videos) => self.state.my_videos_loaded(seq, videos),
                    Err(message) => self.state.my_videos_failed(seq, message),
                }
                Vec::new()
            }
            AppEvent::Rankings { seq, result } => {
                match result {
                    Ok(page) => self.state.rankings_loaded(seq, page),
                    Err(message) => self.state.rankings_failed(seq, message),
                }
                Vec::new()
            }
            AppEvent::RankingsRefreshed { result } => match result {
                Ok(()) => self.state.rankings_refresh_succeeded(),
                Err(message) => {
                    self.state.rankings_refresh_failed(message);
                    Vec::new()
                }
            },
            AppEvent::LoggedIn { result } => match result {
                Ok(profile) => self.state.login_succeeded(profile),
                Err(message) => {
                    self.state.login_failed(message);
                    Vec::new()
                }
            },
            AppEvent::SignedUp { result } => match result {
                Ok(profile) => self.state.signup_succeeded(profile),
                Err(message) => {
                    self.state.signup_failed(message);
                    Vec::new()
                }
            },
            AppEvent::LoggedOut => Vec::new(),
            AppEvent::Voted { video_id, result } => match result {
                Ok(()) => self.state.vote_succeeded(&video_id),
                Err(message) => {
                    self.state.vote_failed(message);
                    Vec::new()
                }
            },
            AppEvent::Unvoted { video_id, result } => match result {
                Ok(()) => self.state.unvote_succeeded(&video_id),
                Err(message) => {
                    self.state.vote_failed(message);
                    Vec::new()
                }
            },
            AppEvent::UploadFinished { epoch, result } => {
                self.stop_progress_ticker();
                match result {
                    Ok(()) => self.state.upload_accepted(epoch),
                    Err(raw) => {
                        self.state.upload_failed(epoch, &raw);
                        Vec::new()
                    }
                }
            }
            AppEvent::ProgressTick { epoch } => {
                let increment = rand::thread_rng().gen_range(1..15);
                self.state.upload_progress_tick(epoch, increment);
                Vec::new()
            }
            AppEvent::ProcessingElapsed { epoch } => self.state.upload_processing_elapsed(epoch),
        };
        self.execute_all(commands);
    }

    fn execute_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();

        match command {
            Command::FetchPublicVideos { seq } => {
                tokio::spawn(async move {
                    let result = client.public_videos().await.map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::PublicVideos { seq, result });
                });
            }
            Command::FetchMyVideos { seq } => {
                tokio::spawn(async move {
                    let result = client.my_videos().await.map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::MyVideos { seq, result });
                });
            }
            Command::FetchRankings { city, seq } => {
                tokio::spawn(async move {
                    let result = client
                        .rankings(RANKINGS_PAGE_SIZE, &city, 1)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::Rankings { seq, result });
                });
            }
            Command::Login { email, password } => {
                tokio::spawn(async move {
                    let result = async {
                        client.login(&email, &password).await?;
                        client.profile().await
                    }
                    .await
                    .map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::LoggedIn { result });
                });
            }
            Command::Signup { request } => {
                tokio::spawn(async move {
                    let result = async {
                        client.signup(&request).await?;
                        // The backend may answer signup with a profile
                        // envelope and no token; log in with the new
                        // credentials before fetching the profile.
                        if !client.is_authenticated() {
                            client.login(&request.email, &request.password1).await?;
                        }
                        client.profile().await
                    }
                    .await
                    .map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::SignedUp { result });
                });
            }
            Command::Logout => {
                tokio::spawn(async move {
                    if let Err(e) = client.logout().await {
                        tracing::warn!(error = %e, "logout cleanup failed");
                    }
                    let _ = tx.send(AppEvent::LoggedOut);
                });
            }
            Command::SubmitUpload {
                title,
                file,
                is_public,
                epoch,
            } => {
                tokio::spawn(async move {
                    let result = upload(&client, &title, &file, is_public).await;
                    let _ = tx.send(AppEvent::UploadFinished { epoch, result });
                });
            }
            Command::StartProgressTicker { epoch } => {
                self.stop_progress_ticker();
                self.progress_ticker = Some(tokio::spawn(async move {
                    let mut interval =
                        tokio::time::interval(Duration::from_millis(PROGRESS_TICK_MS));
                    interval.tick().await;
                    loop {
                        interval.tick().await;
                        if tx.send(AppEvent::ProgressTick { epoch }).is_err() {
                            break;
                        }
                    }
                }));
            }
            Command::ScheduleProcessingCheck { epoch } => {
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_secs(PROCESSING_WAIT_SECS)).await;
                    let _ = tx.send(AppEvent::ProcessingElapsed { epoch });
                });
            }
            Command::Vote { video_id } => {
                tokio::spawn(async move {
                    let result = client.vote(&video_id).await.map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::Voted { video_id, result });
                });
            }
            Command::Unvote { video_id } => {
                tokio::spawn(async move {
                    let result = client.unvote(&video_id).await.map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::Unvoted { video_id, result });
                });
            }
            Command::RefreshRankings => {
                tokio::spawn(async move {
                    let result = client.refresh_rankings().await.map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::RankingsRefreshed { result });
                });
            }
        }
    }

    fn stop_progress_ticker(&mut self) {
        if let Some(handle) = self.progress_ticker.take() {
            handle.abort();
        }
    }

    fn push_update(&self) {
        let view_model = build_screen(&self.state);
        // Renderer may already have quit; nothing to do then.
        let _ = self.ui_tx.send(UiEvent::Update(Box::new(view_model)));
    }
}

/// Read the selected file and send it as the multipart upload.
async fn upload(
    client: &ApiClient,
    title: &str,
    file: &SelectedFile,
    is_public: bool,
) -> std::result::Result<(), String> {
    let path = PathBuf::from(&file.name);
    let payload = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("No se pudo leer el archivo: {}", e))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("video.mp4")
        .to_string();

    client
        .upload_video(title, &file_name, payload, is_public)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
