pub mod app;
pub mod components;
pub mod pages;
pub mod utils;

pub use app::App;
