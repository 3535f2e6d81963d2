//! projdash: a terminal project board.
//!
//! Projects are entered through a validated form, kept in an in-memory
//! [`engine::ProjectStore`], and shown in live "active" and "finished" lists
//! that redraw whenever the store changes.

pub mod config;
pub mod engine;
pub mod ui;
