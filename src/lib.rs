pub mod app;
pub mod button;
pub mod clock;
pub mod collision;
pub mod config;
pub mod entities;
pub mod event;
pub mod fleet;
pub mod game;
pub mod geometry;
pub mod host;
pub mod input;
pub mod settings;
pub mod stats;
pub mod terminal;
pub mod ui;
