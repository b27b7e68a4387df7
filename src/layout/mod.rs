// Layout module exports

pub mod coords;
pub mod grid;
pub mod lanes;
