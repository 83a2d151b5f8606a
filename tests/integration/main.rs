//! Integration tests for authbox
//!
//! Each test drives the real router or database layer over its own
//! database.

#[path = "../common/mod.rs"]
mod common;

mod database;
