//! Team view infrastructure

mod service;

pub use service::TeamViewService;
