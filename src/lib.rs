pub mod config;
pub mod error;
pub mod feeds;
pub mod pipeline;
pub mod sentiment;
pub mod store;
pub mod twitter_message;
pub mod twitter_parser;
pub mod ui;
