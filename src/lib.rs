pub mod config;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod output;
pub mod service;
pub mod slug;
pub mod transport;
