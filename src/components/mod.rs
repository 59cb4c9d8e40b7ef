pub mod auth_nav;
pub mod footer;
pub mod image_generator;
pub mod ui;
