pub mod app;
pub mod audio;
pub mod button;
pub mod cli;
pub mod entities;
pub mod event;
pub mod game;
pub mod geometry;
pub mod scoreboard;
pub mod scores;
pub mod settings;
pub mod stats;
pub mod terminal;
pub mod ui;
