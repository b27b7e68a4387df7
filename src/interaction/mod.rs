// Interaction module exports

pub mod gesture;
