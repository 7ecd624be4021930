mod api;
mod app;
mod busy;
mod components;
mod config;
mod error;
mod message;
mod model;
mod panel;
mod render;
mod utils;
mod views;

pub fn main() -> iced::Result {
    app::run()
}
