//! # Studyhall
//!
//! Administrative command-line tools for the Studyhall learning platform.
//!
//! The binary talks to the remote platform API through the typed client in
//! `studyhall-client`; nothing here touches a database directly. Commands
//! cover course and admin account management, lecture content ordering,
//! quiz generation with a live progress display, and demo-data seeding.

pub mod cli;
pub mod logging;
