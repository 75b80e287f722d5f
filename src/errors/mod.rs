//! Error types and error handling.
//!
//! This module defines the error type shared by the scanner and the
//! parser. It includes:
//!
//! - An error structure carrying the source line and location
//! - Specific error variants for the scanning and parsing phases
//! - Diagnostic formatting in the shape consumed by test harnesses:
//!   `(parser)[line: <line> at <location>] error: <message>`

pub mod errors;
