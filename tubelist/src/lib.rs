pub mod catalog;
pub mod config;
pub mod error;
pub mod extractor;
pub mod html_generator;
pub mod models;
pub mod server;
pub mod storage;

#[cfg(test)]
pub mod mock;
