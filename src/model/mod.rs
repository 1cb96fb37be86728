pub mod action;
pub mod catalog;
pub mod game_save;
pub mod game_state;
pub mod mood;
