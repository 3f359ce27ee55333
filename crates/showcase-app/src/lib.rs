//! View-state machine for the showcase client.
//!
//! Everything here is pure: transitions mutate the single [`AppState`] and
//! return [`Command`] values describing the network and timer effects the
//! caller must execute. No I/O happens in this crate.

pub mod explain;
pub mod screen;
pub mod state;
pub mod upload;

pub use explain::{explain_upload_error, ErrorExplanation};
pub use screen::Screen;
pub use state::{AppState, Command, Notice, NoticeLevel};
pub use upload::{SelectedFile, UploadFlow, UploadPhase, MAX_UPLOAD_BYTES};

/// Cities offered by the contest, first entry meaning "no filter".
pub const CITIES: [&str; 8] = [
    "Todas",
    "Bogotá",
    "Medellín",
    "Cali",
    "Barranquilla",
    "Cartagena",
    "Bucaramanga",
    "Pereira",
];
