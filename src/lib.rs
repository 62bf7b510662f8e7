pub mod config;
pub mod error;
pub mod geometry;
pub mod header;
pub mod labels;
pub mod layouts;
pub mod verifier;
// reports is a binary module (see main.rs).
