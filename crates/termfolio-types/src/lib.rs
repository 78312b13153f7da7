//! Foundation types for termfolio.
//!
//! This crate contains the platform-agnostic types shared by the interpreter
//! and the desktop front end: error types, input events, theme state, and
//! configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod theme;
