//! VoxShift CLI library.
//!
//! This crate provides the core functionality for the VoxShift CLI: input
//! loading, the directory export sink, logging setup, and the subcommands.

pub mod commands;
pub mod input;
pub mod logging;
pub mod sink;
