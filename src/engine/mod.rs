pub mod engine;
pub mod protocol;
pub mod apply_action;

pub mod calendar;
pub mod decay;
pub mod rewards;

pub mod save_io;
pub mod chat_client;
pub mod image_client;
