// Service module exports

pub mod storage;
pub mod store;
