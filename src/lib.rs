//! tunesort: move audio files into an `artist/album/track` tree built from
//! their embedded tags.
//!
//! The pipeline is walk -> junk filter -> tag reading -> compilation
//! detection -> destination path -> move, with optional cleanup of emptied
//! source directories. Every failure is local to one file.

pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod organize;
pub mod runtime;
