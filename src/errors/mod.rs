//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each violated expectation
//! - Short names and suggestion tips for rendering

pub mod errors;
