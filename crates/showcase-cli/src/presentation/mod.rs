pub mod presenter;
pub mod renderer;
pub mod view_models;
pub mod views;
