mod chrome;
mod dashboard;
mod detail;
mod landing;
mod login;
mod profile;
mod rankings;
mod upload;
mod videos;

pub use chrome::{NavBarView, NoticeView, RestrictedView, StatusBarView};
pub use dashboard::DashboardView;
pub use detail::VideoDetailView;
pub use landing::LandingView;
pub use login::{LoginFormState, LoginView};
pub use profile::ProfileView;
pub use rankings::RankingsView;
pub use upload::{UploadFormState, UploadView};
pub use videos::VideoListView;
