pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod preview;
pub mod protocol;
pub mod scale;
pub mod selection;
pub mod service;
pub mod session;
