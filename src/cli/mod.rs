//! CLI infrastructure for the dataset generator
//!
//! This module provides the command-line interface for generating,
//! visualizing and inspecting labeled trajectory datasets.

pub mod commands;
pub mod config;
pub mod output;
