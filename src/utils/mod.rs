//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `teamcast` application.
//!
//! This module centralizes reusable components, such as the hub's error types
//! and the logging setup, to promote code consistency and reduce duplication.

pub mod error;
pub mod logging;
