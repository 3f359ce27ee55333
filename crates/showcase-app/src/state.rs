//! The single application state and its transitions.
//!
//! Transitions mutate `AppState` and return the [`Command`]s the runtime must
//! execute. Responses come back through the `*_loaded` / `*_failed` methods,
//! each tagged with the sequence number of the request that produced them so
//! a slow response can never overwrite a newer one.

use std::collections::HashSet;

use showcase_types::{RankingsPage, SignupRequest, UserProfile, Video};

use crate::explain::{explain_upload_error, ErrorExplanation};
use crate::screen::Screen;
use crate::upload::{SelectedFile, UploadFlow, UploadPhase};

/// Effect the runtime must perform on behalf of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchPublicVideos { seq: u64 },
    FetchMyVideos { seq: u64 },
    FetchRankings { city: String, seq: u64 },
    Login { email: String, password: String },
    Signup { request: SignupRequest },
    Logout,
    SubmitUpload {
        title: String,
        file: SelectedFile,
        is_public: bool,
        epoch: u64,
    },
    StartProgressTicker { epoch: u64 },
    ScheduleProcessingCheck { epoch: u64 },
    Vote { video_id: String },
    Unvote { video_id: String },
    RefreshRankings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient banner shown at the top of the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// All client state. Fields are private; mutation goes through transitions.
#[derive(Debug)]
pub struct AppState {
    screen: Screen,
    authenticated: bool,
    profile: Option<UserProfile>,

    public_videos: Vec<Video>,
    my_videos: Vec<Video>,
    rankings: RankingsPage,
    selected_city: String,

    // Request sequence numbers, one per list. A response is applied only if
    // it carries the latest sequence for its list.
    public_seq: u64,
    my_seq: u64,
    rankings_seq: u64,

    loading_public: bool,
    loading_my: bool,
    loading_rankings: bool,
    refreshing_rankings: bool,

    expanded: Option<Video>,
    voted: HashSet<String>,
    upload: UploadFlow,
    notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Landing,
            authenticated: false,
            profile: None,
            public_videos: Vec::new(),
            my_videos: Vec::new(),
            rankings: RankingsPage::default(),
            selected_city: crate::CITIES[0].to_string(),
            public_seq: 0,
            my_seq: 0,
            rankings_seq: 0,
            loading_public: false,
            loading_my: false,
            loading_rankings: false,
            refreshing_rankings: false,
            expanded: None,
            voted: HashSet::new(),
            upload: UploadFlow::default(),
            notice: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn public_videos(&self) -> &[Video] {
        &self.public_videos
    }

    pub fn my_videos(&self) -> &[Video] {
        &self.my_videos
    }

    pub fn rankings(&self) -> &RankingsPage {
        &self.rankings
    }

    pub fn selected_city(&self) -> &str {
        &self.selected_city
    }

    pub fn is_loading_public(&self) -> bool {
        self.loading_public
    }

    pub fn is_loading_my(&self) -> bool {
        self.loading_my
    }

    pub fn is_loading_rankings(&self) -> bool {
        self.loading_rankings
    }

    pub fn is_refreshing_rankings(&self) -> bool {
        self.refreshing_rankings
    }

    pub fn expanded_video(&self) -> Option<&Video> {
        self.expanded.as_ref()
    }

    pub fn has_voted(&self, video_id: &str) -> bool {
        self.voted.contains(video_id)
    }

    pub fn upload(&self) -> &UploadFlow {
        &self.upload
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Whether the current screen is being shown as the access-restricted
    /// placeholder instead of its real content.
    pub fn access_restricted(&self) -> bool {
        self.screen.requires_session() && !self.authenticated
    }

    // ---- navigation ----------------------------------------------------

    /// Switch screens and return the entry fetches for the target.
    ///
    /// Guarded screens without a session still switch, but render the
    /// restricted placeholder and trigger no fetches. Leaving the upload
    /// screen abandons any attempt in progress.
    pub fn navigate(&mut self, target: Screen) -> Vec<Command> {
        if self.screen == Screen::Upload && target != Screen::Upload {
            self.upload.reset();
        }
        if self.screen == Screen::VideoExpanded && target != Screen::VideoExpanded {
            self.expanded = None;
        }
        self.screen = target;
        self.notice = None;
        self.entry_commands(target)
    }

    fn entry_commands(&mut self, target: Screen) -> Vec<Command> {
        if self.access_restricted() {
            return Vec::new();
        }

        let mut commands = Vec::new();
        if target.loads_public_videos() {
            commands.push(self.begin_public_fetch());
        }
        if target.loads_rankings() {
            commands.push(self.begin_rankings_fetch());
        }
        if target == Screen::Dashboard && self.authenticated {
            commands.push(self.begin_my_fetch());
        }
        commands
    }

    fn begin_public_fetch(&mut self) -> Command {
        self.public_seq += 1;
        self.loading_public = true;
        Command::FetchPublicVideos {
            seq: self.public_seq,
        }
    }

    fn begin_my_fetch(&mut self) -> Command {
        self.my_seq += 1;
        self.loading_my = true;
        Command::FetchMyVideos { seq: self.my_seq }
    }

    fn begin_rankings_fetch(&mut self) -> Command {
        self.rankings_seq += 1;
        self.loading_rankings = true;
        Command::FetchRankings {
            city: self.selected_city.clone(),
            seq: self.rankings_seq,
        }
    }

    /// Change the city filter. Refetches rankings when a rankings view is
    /// on screen, otherwise just records the choice for the next entry.
    pub fn select_city(&mut self, city: impl Into<String>) -> Vec<Command> {
        self.selected_city = city.into();
        if self.screen.loads_rankings() && !self.access_restricted() {
            vec![self.begin_rankings_fetch()]
        } else {
            Vec::new()
        }
    }

    // ---- session -------------------------------------------------------

    /// A stored token was validated at startup.
    pub fn session_restored(&mut self, profile: UserProfile) {
        self.authenticated = true;
        self.profile = Some(profile);
    }

    /// The stored token was rejected. Silent soft logout, no notice.
    pub fn session_invalid(&mut self) {
        self.authenticated = false;
        self.profile = None;
        self.voted.clear();
    }

    pub fn login_submitted(&mut self, email: String, password: String) -> Vec<Command> {
        if email.trim().is_empty() || password.is_empty() {
            self.notice = Some(Notice::error("Correo y contraseña son obligatorios"));
            return Vec::new();
        }
        vec![Command::Login { email, password }]
    }

    pub fn login_succeeded(&mut self, profile: UserProfile) -> Vec<Command> {
        self.authenticated = true;
        self.profile = Some(profile);
        self.navigate(Screen::Dashboard)
    }

    pub fn login_failed(&mut self, message: String) {
        self.notice = Some(Notice::error(message));
    }

    /// Validate the signup form locally before anything leaves the client.
    pub fn signup_submitted(&mut self, request: SignupRequest) -> Vec<Command> {
        if request.first_name.trim().is_empty()
            || request.last_name.trim().is_empty()
            || request.email.trim().is_empty()
        {
            self.notice = Some(Notice::error("Completa todos los campos"));
            return Vec::new();
        }
        if request.password1 != request.password2 {
            self.notice = Some(Notice::error("Las contraseñas no coinciden"));
            return Vec::new();
        }
        vec![Command::Signup { request }]
    }

    pub fn signup_succeeded(&mut self, profile: UserProfile) -> Vec<Command> {
        self.login_succeeded(profile)
    }

    pub fn signup_failed(&mut self, message: String) {
        self.notice = Some(Notice::error(message));
    }

    /// Clear the session locally and fire the best-effort server logout.
    pub fn logout_requested(&mut self) -> Vec<Command> {
        self.authenticated = false;
        self.profile = None;
        self.my_videos.clear();
        self.voted.clear();
        self.upload.reset();
        let mut commands = vec![Command::Logout];
        commands.extend(self.navigate(Screen::Landing));
        commands
    }

    // ---- list responses ------------------------------------------------

    pub fn public_videos_loaded(&mut self, seq: u64, videos: Vec<Video>) {
        if seq != self.public_seq {
            return;
        }
        self.loading_public = false;
        self.public_videos = videos;
    }

    pub fn public_videos_failed(&mut self, seq: u64, message: String) {
        if seq != self.public_seq {
            return;
        }
        self.loading_public = false;
        self.public_videos = Vec::new();
        self.notice = Some(Notice::error(message));
    }

    pub fn my_videos_loaded(&mut self, seq: u64, videos: Vec<Video>) {
        if seq != self.my_seq {
            return;
        }
        self.loading_my = false;
        self.my_videos = videos;
    }

    pub fn my_videos_failed(&mut self, seq: u64, message: String) {
        if seq != self.my_seq {
            return;
        }
        self.loading_my = false;
        self.my_videos = Vec::new();
        self.notice = Some(Notice::error(message));
    }

    pub fn rankings_loaded(&mut self, seq: u64, page: RankingsPage) {
        if seq != self.rankings_seq {
            return;
        }
        self.loading_rankings = false;
        self.rankings = page;
    }

    pub fn rankings_failed(&mut self, seq: u64, message: String) {
        if seq != self.rankings_seq {
            return;
        }
        self.loading_rankings = false;
        self.rankings = RankingsPage::default();
        self.notice = Some(Notice::error(message));
    }

    /// Ask the backend to recompute the rankings, then reload them. Only one
    /// refresh may be in flight at a time.
    pub fn refresh_rankings_requested(&mut self) -> Vec<Command> {
        if self.refreshing_rankings {
            return Vec::new();
        }
        self.refreshing_rankings = true;
        vec![Command::RefreshRankings]
    }

    pub fn rankings_refresh_succeeded(&mut self) -> Vec<Command> {
        self.refreshing_rankings = false;
        vec![self.begin_rankings_fetch()]
    }

    pub fn rankings_refresh_failed(&mut self, message: String) {
        self.refreshing_rankings = false;
        self.notice = Some(Notice::error(message));
    }

    // ---- expanded video and voting -------------------------------------

    pub fn expand_video(&mut self, video: Video) -> Vec<Command> {
        self.expanded = Some(video);
        self.navigate(Screen::VideoExpanded)
    }

    pub fn collapse_video(&mut self) -> Vec<Command> {
        self.navigate(Screen::Videos)
    }

    /// Request a vote. No command is produced for anonymous users, videos
    /// that are not votable, or videos already voted for in this session.
    pub fn vote_requested(&mut self, video_id: &str) -> Vec<Command> {
        if !self.authenticated {
            self.notice = Some(Notice::error("Inicia sesión para votar"));
            return Vec::new();
        }
        if self.voted.contains(video_id) {
            return Vec::new();
        }
        let votable = self
            .find_video(video_id)
            .map(|v| v.status.is_votable())
            .unwrap_or(false);
        if !votable {
            return Vec::new();
        }
        vec![Command::Vote {
            video_id: video_id.to_string(),
        }]
    }

    pub fn vote_succeeded(&mut self, video_id: &str) -> Vec<Command> {
        self.voted.insert(video_id.to_string());
        if let Some(video) = self.expanded.as_mut() {
            if video.video_id == video_id {
                video.votes += 1;
            }
        }
        if let Some(video) = self.public_videos.iter_mut().find(|v| v.video_id == video_id) {
            video.votes += 1;
        }
        self.notice = Some(Notice::info("¡Voto registrado!"));
        vec![self.begin_public_fetch()]
    }

    pub fn vote_failed(&mut self, message: String) {
        self.notice = Some(Notice::error(message));
    }

    /// Withdraw a vote cast earlier in this session.
    pub fn unvote_requested(&mut self, video_id: &str) -> Vec<Command> {
        if !self.authenticated || !self.voted.contains(video_id) {
            return Vec::new();
        }
        vec![Command::Unvote {
            video_id: video_id.to_string(),
        }]
    }

    pub fn unvote_succeeded(&mut self, video_id: &str) -> Vec<Command> {
        self.voted.remove(video_id);
        if let Some(video) = self.expanded.as_mut() {
            if video.video_id == video_id {
                video.votes = video.votes.saturating_sub(1);
            }
        }
        vec![self.begin_public_fetch()]
    }

    fn find_video(&self, video_id: &str) -> Option<&Video> {
        self.expanded
            .as_ref()
            .filter(|v| v.video_id == video_id)
            .or_else(|| self.public_videos.iter().find(|v| v.video_id == video_id))
    }

    // ---- upload --------------------------------------------------------

    pub fn set_upload_title(&mut self, title: impl Into<String>) {
        self.upload.set_title(title);
    }

    pub fn toggle_upload_visibility(&mut self) {
        self.upload.toggle_visibility();
    }

    pub fn select_upload_file(&mut self, file: SelectedFile) {
        self.upload.select_file(file);
    }

    /// Validate and start the upload. Local rejections become a notice and
    /// produce no commands.
    pub fn upload_submitted(&mut self) -> Vec<Command> {
        if !self.authenticated {
            return Vec::new();
        }
        match self.upload.submit() {
            Ok(epoch) => self.upload_commands(epoch),
            Err(reason) => {
                self.notice = Some(Notice::error(reason));
                Vec::new()
            }
        }
    }

    pub fn upload_retry(&mut self) -> Vec<Command> {
        match self.upload.retry() {
            Ok(epoch) => self.upload_commands(epoch),
            Err(reason) => {
                self.notice = Some(Notice::error(reason));
                Vec::new()
            }
        }
    }

    pub fn upload_pick_new_file(&mut self) {
        self.upload.select_new_file();
    }

    fn upload_commands(&self, epoch: u64) -> Vec<Command> {
        // submit() only succeeds with a file present
        let file = match self.upload.file() {
            Some(file) => file.clone(),
            None => return Vec::new(),
        };
        vec![
            Command::SubmitUpload {
                title: self.upload.title().trim().to_string(),
                file,
                is_public: self.upload.is_public(),
                epoch,
            },
            Command::StartProgressTicker { epoch },
        ]
    }

    pub fn upload_progress_tick(&mut self, epoch: u64, increment: u8) {
        self.upload.tick_progress(epoch, increment);
    }

    /// The server accepted the upload. Schedules the processing check and
    /// refreshes the user's own list.
    pub fn upload_accepted(&mut self, epoch: u64) -> Vec<Command> {
        if epoch != self.upload.epoch() {
            return Vec::new();
        }
        self.upload.transfer_complete(epoch);
        let mut commands = vec![Command::ScheduleProcessingCheck { epoch }];
        if self.authenticated {
            commands.push(self.begin_my_fetch());
        }
        commands
    }

    pub fn upload_processing_elapsed(&mut self, epoch: u64) -> Vec<Command> {
        let was_processing = matches!(self.upload.phase(), UploadPhase::Processing)
            && epoch == self.upload.epoch();
        self.upload.processing_elapsed(epoch);
        if was_processing && self.authenticated {
            vec![self.begin_my_fetch()]
        } else {
            Vec::new()
        }
    }

    pub fn upload_failed(&mut self, epoch: u64, raw_error: &str) {
        if epoch != self.upload.epoch() {
            return;
        }
        self.upload.fail(explain_upload_error(raw_error));
    }

    pub fn upload_failure(&self) -> Option<&ErrorExplanation> {
        match self.upload.phase() {
            UploadPhase::Failed(explanation) => Some(explanation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "u1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ríos".to_string(),
            email: "ana@example.com".to_string(),
            city: "Cali".to_string(),
            country: "Colombia".to_string(),
        }
    }

    fn processed_video(id: &str) -> Video {
        Video {
            video_id: id.to_string(),
            title: "clip".to_string(),
            status: showcase_types::VideoStatus::Processed,
            ..Default::default()
        }
    }

    fn logged_in() -> AppState {
        let mut state = AppState::new();
        state.session_restored(profile());
        state
    }

    #[test]
    fn dashboard_entry_fetches_all_three_lists() {
        let mut state = logged_in();
        let commands = state.navigate(Screen::Dashboard);
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], Command::FetchPublicVideos { .. }));
        assert!(matches!(commands[1], Command::FetchRankings { .. }));
        assert!(matches!(commands[2], Command::FetchMyVideos { .. }));
    }

    #[test]
    fn guarded_screen_without_session_fetches_nothing() {
        let mut state = AppState::new();
        let commands = state.navigate(Screen::Dashboard);
        assert!(commands.is_empty());
        assert_eq!(state.screen(), Screen::Dashboard);
        assert!(state.access_restricted());
    }

    #[test]
    fn videos_screen_is_public() {
        let mut state = AppState::new();
        let commands = state.navigate(Screen::Videos);
        assert_eq!(commands.len(), 1);
        assert!(!state.access_restricted());
    }

    #[test]
    fn stale_list_response_is_dropped() {
        let mut state = AppState::new();
        let first = state.navigate(Screen::Videos);
        let first_seq = match first[0] {
            Command::FetchPublicVideos { seq } => seq,
            _ => panic!("expected public fetch"),
        };

        // Second navigation supersedes the first request.
        let second = state.navigate(Screen::Videos);
        let second_seq = match second[0] {
            Command::FetchPublicVideos { seq } => seq,
            _ => panic!("expected public fetch"),
        };

        state.public_videos_loaded(second_seq, vec![processed_video("new")]);
        state.public_videos_loaded(first_seq, vec![processed_video("old")]);

        assert_eq!(state.public_videos().len(), 1);
        assert_eq!(state.public_videos()[0].video_id, "new");
    }

    #[test]
    fn list_failure_resets_to_empty() {
        let mut state = AppState::new();
        let commands = state.navigate(Screen::Videos);
        let seq = match commands[0] {
            Command::FetchPublicVideos { seq } => seq,
            _ => panic!(),
        };
        state.public_videos_loaded(seq, vec![processed_video("a")]);

        let commands = state.navigate(Screen::Videos);
        let seq = match commands[0] {
            Command::FetchPublicVideos { seq } => seq,
            _ => panic!(),
        };
        state.public_videos_failed(seq, "boom".to_string());
        assert!(state.public_videos().is_empty());
        assert!(matches!(
            state.notice().map(|n| n.level),
            Some(NoticeLevel::Error)
        ));
    }

    #[test]
    fn city_change_refetches_only_on_rankings_views() {
        let mut state = AppState::new();
        state.navigate(Screen::Rankings);
        let commands = state.select_city("Cali");
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            Command::FetchRankings { city, .. } => assert_eq!(city, "Cali"),
            other => panic!("unexpected command {other:?}"),
        }

        state.navigate(Screen::Landing);
        assert!(state.select_city("Bogotá").is_empty());
        assert_eq!(state.selected_city(), "Bogotá");
    }

    #[test]
    fn rankings_refresh_is_single_flight_then_reloads() {
        let mut state = AppState::new();
        state.navigate(Screen::Rankings);

        let commands = state.refresh_rankings_requested();
        assert_eq!(commands, vec![Command::RefreshRankings]);
        assert!(state.is_refreshing_rankings());

        // A second request while one is in flight does nothing.
        assert!(state.refresh_rankings_requested().is_empty());

        let commands = state.rankings_refresh_succeeded();
        assert!(!state.is_refreshing_rankings());
        assert!(matches!(commands[0], Command::FetchRankings { .. }));
    }

    #[test]
    fn login_success_lands_on_dashboard() {
        let mut state = AppState::new();
        let commands = state.login_succeeded(profile());
        assert_eq!(state.screen(), Screen::Dashboard);
        assert!(state.is_authenticated());
        assert_eq!(commands.len(), 3);
    }

    #[test]
    fn signup_rejects_password_mismatch_locally() {
        let mut state = AppState::new();
        let request = SignupRequest::new("Ana", "Ríos", "a@b.co", "one", "two", "Cali");
        let commands = state.signup_submitted(request);
        assert!(commands.is_empty());
        assert_eq!(
            state.notice().map(|n| n.text.as_str()),
            Some("Las contraseñas no coinciden")
        );
    }

    #[test]
    fn logout_clears_session_and_lands_on_landing() {
        let mut state = logged_in();
        state.navigate(Screen::Dashboard);
        let commands = state.logout_requested();
        assert_eq!(commands[0], Command::Logout);
        assert!(!state.is_authenticated());
        assert_eq!(state.screen(), Screen::Landing);
        assert!(state.my_videos().is_empty());
    }

    #[test]
    fn vote_requires_session() {
        let mut state = AppState::new();
        let commands = state.navigate(Screen::Videos);
        let seq = match commands[0] {
            Command::FetchPublicVideos { seq } => seq,
            _ => panic!(),
        };
        state.public_videos_loaded(seq, vec![processed_video("v1")]);
        assert!(state.vote_requested("v1").is_empty());
    }

    #[test]
    fn vote_is_idempotent_within_session() {
        let mut state = logged_in();
        let commands = state.navigate(Screen::Videos);
        let seq = match commands[0] {
            Command::FetchPublicVideos { seq } => seq,
            _ => panic!(),
        };
        state.public_videos_loaded(seq, vec![processed_video("v1")]);

        assert_eq!(state.vote_requested("v1").len(), 1);
        state.vote_succeeded("v1");
        assert!(state.has_voted("v1"));
        assert!(state.vote_requested("v1").is_empty());
    }

    #[test]
    fn vote_rejects_unprocessed_videos() {
        let mut state = logged_in();
        let commands = state.navigate(Screen::Videos);
        let seq = match commands[0] {
            Command::FetchPublicVideos { seq } => seq,
            _ => panic!(),
        };
        let mut video = processed_video("v1");
        video.status = showcase_types::VideoStatus::Processing;
        state.public_videos_loaded(seq, vec![video]);
        assert!(state.vote_requested("v1").is_empty());
    }

    #[test]
    fn vote_success_bumps_expanded_count() {
        let mut state = logged_in();
        state.expand_video(processed_video("v1"));
        state.vote_requested("v1");
        state.vote_succeeded("v1");
        assert_eq!(state.expanded_video().unwrap().votes, 1);
    }

    #[test]
    fn unvote_only_after_a_session_vote() {
        let mut state = logged_in();
        assert!(state.unvote_requested("v1").is_empty());
        state.vote_succeeded("v1");
        assert_eq!(state.unvote_requested("v1").len(), 1);
        state.unvote_succeeded("v1");
        assert!(!state.has_voted("v1"));
    }

    #[test]
    fn upload_submit_produces_request_and_ticker() {
        let mut state = logged_in();
        state.navigate(Screen::Upload);
        state.set_upload_title("Mi video");
        state.select_upload_file(SelectedFile {
            name: "clip.mp4".to_string(),
            size: 1024,
            media_type: "video/mp4".to_string(),
        });
        let commands = state.upload_submitted();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], Command::SubmitUpload { .. }));
        assert!(matches!(commands[1], Command::StartProgressTicker { .. }));
    }

    #[test]
    fn upload_local_rejection_produces_no_commands() {
        let mut state = logged_in();
        state.navigate(Screen::Upload);
        state.set_upload_title("Mi video");
        let commands = state.upload_submitted();
        assert!(commands.is_empty());
        assert!(state.notice().is_some());
    }

    #[test]
    fn upload_acceptance_schedules_processing_check() {
        let mut state = logged_in();
        state.navigate(Screen::Upload);
        state.set_upload_title("Mi video");
        state.select_upload_file(SelectedFile {
            name: "clip.mp4".to_string(),
            size: 1024,
            media_type: "video/mp4".to_string(),
        });
        let epoch = match &state.upload_submitted()[0] {
            Command::SubmitUpload { epoch, .. } => *epoch,
            _ => panic!(),
        };
        let commands = state.upload_accepted(epoch);
        assert!(matches!(
            commands[0],
            Command::ScheduleProcessingCheck { .. }
        ));
        let commands = state.upload_processing_elapsed(epoch);
        assert_eq!(state.upload().phase(), &UploadPhase::Completed);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn navigating_away_abandons_upload() {
        let mut state = logged_in();
        state.navigate(Screen::Upload);
        state.set_upload_title("Mi video");
        state.select_upload_file(SelectedFile {
            name: "clip.mp4".to_string(),
            size: 1024,
            media_type: "video/mp4".to_string(),
        });
        let epoch = match &state.upload_submitted()[0] {
            Command::SubmitUpload { epoch, .. } => *epoch,
            _ => panic!(),
        };
        state.navigate(Screen::Dashboard);
        assert!(state.upload_accepted(epoch).is_empty());
        assert_eq!(state.upload().phase(), &UploadPhase::Idle);
    }

    #[test]
    fn upload_failure_is_classified() {
        let mut state = logged_in();
        state.navigate(Screen::Upload);
        state.set_upload_title("Mi video");
        state.select_upload_file(SelectedFile {
            name: "clip.mp4".to_string(),
            size: 1024,
            media_type: "video/mp4".to_string(),
        });
        let epoch = match &state.upload_submitted()[0] {
            Command::SubmitUpload { epoch, .. } => *epoch,
            _ => panic!(),
        };
        state.upload_failed(epoch, "invalid file extension: .mov");
        let failure = state.upload_failure().expect("failure recorded");
        assert_eq!(failure.title, "Formato no válido");
    }
}
