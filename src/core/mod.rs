pub mod config;
pub mod model;
pub mod share;
pub mod slot;
pub mod storage;
pub mod utils;
