//! View models rendered by the TUI.
//!
//! Plain display data only. Built by the presenter from the app state and
//! sent to the renderer thread, which never sees the state itself.

use showcase_app::Screen;

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenViewModel {
    pub screen: Screen,
    pub title: String,
    pub authenticated: bool,
    pub restricted: bool,
    pub user_name: Option<String>,
    pub notice: Option<NoticeViewModel>,
    pub dashboard: DashboardViewModel,
    pub public_videos: VideoListViewModel,
    pub my_videos: VideoListViewModel,
    pub rankings: RankingsViewModel,
    pub upload: UploadViewModel,
    pub profile: Option<ProfileViewModel>,
    pub expanded: Option<VideoDetailViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeViewModel {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRowViewModel {
    pub video_id: String,
    pub title: String,
    pub owner: String,
    pub city: String,
    pub status: String,
    pub votes: u64,
    pub votable: bool,
    pub voted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoListViewModel {
    pub rows: Vec<VideoRowViewModel>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRowViewModel {
    pub position: u64,
    pub name: String,
    pub city: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingsViewModel {
    pub rows: Vec<RankingRowViewModel>,
    pub loading: bool,
    pub refreshing: bool,
    pub city: String,
    pub total: u64,
}

/// Aggregates over the session owner's videos, shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardViewModel {
    pub video_count: usize,
    pub processed_count: usize,
    pub total_votes: u64,
    /// The owner's position in the currently loaded rankings, if present.
    pub own_rank: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadViewModel {
    pub title: String,
    pub file_name: Option<String>,
    pub is_public: bool,
    pub phase_label: String,
    pub progress: u8,
    pub in_flight: bool,
    pub failure: Option<FailureViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureViewModel {
    pub title: String,
    pub message: String,
    pub technical: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileViewModel {
    pub name: String,
    pub email: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetailViewModel {
    pub video_id: String,
    pub title: String,
    pub owner: String,
    pub city: String,
    pub status: String,
    pub votes: u64,
    pub votable: bool,
    pub voted: bool,
    pub uploaded_at: Option<String>,
}
