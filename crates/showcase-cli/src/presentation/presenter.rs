//! Pure functions building the screen view model from the app state.

use showcase_app::{AppState, NoticeLevel, UploadPhase};
use showcase_types::{Video, VideoStatus};

use super::view_models::{
    DashboardViewModel, FailureViewModel, NoticeViewModel, ProfileViewModel, RankingsViewModel,
    RankingRowViewModel, ScreenViewModel, UploadViewModel, VideoDetailViewModel,
    VideoListViewModel, VideoRowViewModel,
};

pub fn build_screen(state: &AppState) -> ScreenViewModel {
    ScreenViewModel {
        screen: state.screen(),
        title: state.screen().title().to_string(),
        authenticated: state.is_authenticated(),
        restricted: state.access_restricted(),
        user_name: state.profile().map(|p| p.display_name()),
        notice: state.notice().map(|n| NoticeViewModel {
            text: n.text.clone(),
            is_error: n.level == NoticeLevel::Error,
        }),
        dashboard: build_dashboard(state),
        public_videos: build_video_list(state, state.public_videos(), state.is_loading_public()),
        my_videos: build_video_list(state, state.my_videos(), state.is_loading_my()),
        rankings: build_rankings(state),
        upload: build_upload(state),
        profile: state.profile().map(|p| ProfileViewModel {
            name: p.display_name(),
            email: p.email.clone(),
            city: p.city.clone(),
            country: p.country.clone(),
        }),
        expanded: state.expanded_video().map(|v| build_detail(state, v)),
    }
}

fn build_dashboard(state: &AppState) -> DashboardViewModel {
    let my_videos = state.my_videos();
    let own_rank = state.profile().and_then(|profile| {
        state
            .rankings()
            .rankings
            .iter()
            .find(|entry| !profile.user_id.is_empty() && entry.user_id == profile.user_id)
            .map(|entry| entry.ranking)
    });

    DashboardViewModel {
        video_count: my_videos.len(),
        processed_count: my_videos
            .iter()
            .filter(|v| v.status == VideoStatus::Processed)
            .count(),
        total_votes: my_videos.iter().map(|v| v.votes).sum(),
        own_rank,
    }
}

fn build_video_list(state: &AppState, videos: &[Video], loading: bool) -> VideoListViewModel {
    VideoListViewModel {
        rows: videos.iter().map(|v| build_row(state, v)).collect(),
        loading,
    }
}

fn build_row(state: &AppState, video: &Video) -> VideoRowViewModel {
    VideoRowViewModel {
        video_id: video.video_id.clone(),
        title: video.title.clone(),
        owner: video.owner_name(),
        city: video.user_city.clone(),
        status: video.status.label().to_string(),
        votes: video.votes,
        votable: state.is_authenticated()
            && video.status.is_votable()
            && !state.has_voted(&video.video_id),
        voted: state.has_voted(&video.video_id),
    }
}

fn build_detail(state: &AppState, video: &Video) -> VideoDetailViewModel {
    VideoDetailViewModel {
        video_id: video.video_id.clone(),
        title: video.title.clone(),
        owner: video.owner_name(),
        city: video.user_city.clone(),
        status: video.status.label().to_string(),
        votes: video.votes,
        votable: state.is_authenticated()
            && video.status.is_votable()
            && !state.has_voted(&video.video_id),
        voted: state.has_voted(&video.video_id),
        uploaded_at: video
            .uploaded_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
    }
}

fn build_rankings(state: &AppState) -> RankingsViewModel {
    let page = state.rankings();
    RankingsViewModel {
        rows: page
            .rankings
            .iter()
            .map(|entry| RankingRowViewModel {
                position: entry.ranking,
                name: entry.display_name(),
                city: entry.display_city().to_string(),
                votes: entry.total_votes,
            })
            .collect(),
        loading: state.is_loading_rankings(),
        refreshing: state.is_refreshing_rankings(),
        city: state.selected_city().to_string(),
        total: page.total,
    }
}

fn build_upload(state: &AppState) -> UploadViewModel {
    let flow = state.upload();
    let (phase_label, in_flight) = match flow.phase() {
        UploadPhase::Idle => ("Listo para subir".to_string(), false),
        UploadPhase::Uploading { progress } => (format!("Subiendo... {}%", progress), true),
        UploadPhase::Processing => ("Procesando video...".to_string(), true),
        UploadPhase::Completed => ("¡Video subido con éxito!".to_string(), false),
        UploadPhase::Failed(_) => ("Error al subir".to_string(), false),
    };

    UploadViewModel {
        title: flow.title().to_string(),
        file_name: flow.file().map(|f| f.name.clone()),
        is_public: flow.is_public(),
        phase_label,
        progress: flow.progress_percent(),
        in_flight,
        failure: state.upload_failure().map(|f| FailureViewModel {
            title: f.title.clone(),
            message: f.message.clone(),
            technical: f.technical.clone(),
            suggestions: f.suggestions.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_app::Screen;
    use showcase_types::UserProfile;

    fn video(id: &str, status: VideoStatus, votes: u64) -> Video {
        Video {
            video_id: id.to_string(),
            title: format!("video {}", id),
            status,
            votes,
            ..Default::default()
        }
    }

    #[test]
    fn restricted_flag_set_for_anonymous_dashboard() {
        let mut state = AppState::new();
        state.navigate(Screen::Dashboard);
        let vm = build_screen(&state);
        assert!(vm.restricted);
        assert!(!vm.authenticated);
    }

    #[test]
    fn dashboard_aggregates_own_videos() {
        let mut state = AppState::new();
        state.session_restored(UserProfile::default());
        let commands = state.navigate(Screen::Dashboard);
        let seq = commands
            .iter()
            .find_map(|c| match c {
                showcase_app::Command::FetchMyVideos { seq } => Some(*seq),
                _ => None,
            })
            .unwrap();
        state.my_videos_loaded(
            seq,
            vec![
                video("a", VideoStatus::Processed, 10),
                video("b", VideoStatus::Processing, 0),
                video("c", VideoStatus::Processed, 5),
            ],
        );

        let vm = build_screen(&state);
        assert_eq!(vm.dashboard.video_count, 3);
        assert_eq!(vm.dashboard.processed_count, 2);
        assert_eq!(vm.dashboard.total_votes, 15);
        assert_eq!(vm.dashboard.own_rank, None);
    }

    #[test]
    fn own_rank_comes_from_loaded_rankings() {
        let mut state = AppState::new();
        state.session_restored(UserProfile {
            user_id: "u7".to_string(),
            ..Default::default()
        });
        let commands = state.navigate(Screen::Rankings);
        let seq = match commands[0] {
            showcase_app::Command::FetchRankings { seq, .. } => seq,
            _ => panic!(),
        };
        state.rankings_loaded(
            seq,
            showcase_types::RankingsPage {
                rankings: vec![showcase_types::RankingEntry {
                    user_id: "u7".to_string(),
                    ranking: 4,
                    ..Default::default()
                }],
                total: 1,
                page: 1,
                page_size: 50,
                total_pages: 1,
            },
        );

        let vm = build_screen(&state);
        assert_eq!(vm.dashboard.own_rank, Some(4));
    }

    #[test]
    fn voted_rows_are_not_votable() {
        let mut state = AppState::new();
        state.session_restored(UserProfile::default());
        let commands = state.navigate(Screen::Videos);
        let seq = match commands[0] {
            showcase_app::Command::FetchPublicVideos { seq } => seq,
            _ => panic!(),
        };
        state.public_videos_loaded(seq, vec![video("a", VideoStatus::Processed, 3)]);
        state.vote_succeeded("a");

        let vm = build_screen(&state);
        assert!(vm.public_videos.rows[0].voted);
        assert!(!vm.public_videos.rows[0].votable);
    }

    #[test]
    fn anonymous_rows_are_never_votable() {
        let mut state = AppState::new();
        let commands = state.navigate(Screen::Videos);
        let seq = match commands[0] {
            showcase_app::Command::FetchPublicVideos { seq } => seq,
            _ => panic!(),
        };
        state.public_videos_loaded(seq, vec![video("a", VideoStatus::Processed, 3)]);

        let vm = build_screen(&state);
        assert!(!vm.public_videos.rows[0].votable);
    }
}
