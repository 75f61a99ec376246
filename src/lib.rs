//! Blogstore - Minimal blog content store
//!
//! This library crate exposes configuration loading and the demo sequence
//! for the binary and for integration testing. Storage lives in
//! `blogstore-db`.

pub mod config;
pub mod demo;
