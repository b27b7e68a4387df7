// Module exports for models

pub mod event;
pub mod resource;
pub mod state;
