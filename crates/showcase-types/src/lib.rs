pub mod ranking;
pub mod user;
pub mod video;

pub use ranking::*;
pub use user::*;
pub use video::*;

/// Display name used when a user record carries no usable name fields.
pub const ANONYMOUS_NAME: &str = "Usuario Anónimo";

/// City filter value meaning "no city filter".
pub const ALL_CITIES: &str = "todas";
