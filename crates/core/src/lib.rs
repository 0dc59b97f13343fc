//! Core library for toolbelt
//!
//! This crate implements the **Functional Core** of the toolbelt application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The toolbelt project uses a two-crate architecture to enforce separation of
//! concerns:
//!
//! - **`toolbelt_core`** (this crate): Pure transformation functions with zero I/O
//! - **`toolbelt`**: Argument parsing and terminal rendering (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Even the wall-clock-dependent timestamp operations take
//!   the current instant as an explicit parameter
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by operation family:
//!
//! - [`base`]: Numeric radix conversion (binary, octal, decimal, hexadecimal)
//! - [`case`]: Text casing transformations (upper, camel, snake, ...)
//! - [`text`]: Word, character, and line statistics
//! - [`json`]: JSON pretty-printing and minification
//! - [`hash`]: Digest generation (MD5, SHA family, Base64)
//! - [`jwt`]: Structural JSON Web Token decoding
//! - [`time`]: Unix epoch conversion with relative-time phrasing
//! - [`finance`]: EMI, SIP, and GST calculators
//! - [`engine`]: Uniform operation dispatch over all of the above
//!
//! Every fallible operation returns a `Result` whose error type is
//! [`error::Error`]; failures are values, never panics, and each call is
//! independent of every other call.
//!
//! # Example Usage
//!
//! ```rust
//! use toolbelt_core::base::{convert, Base};
//!
//! let output = convert("255", Base::Decimal, Base::Hexadecimal).unwrap();
//! assert_eq!(output, "FF");
//! ```

pub mod base;
pub mod case;
pub mod engine;
pub mod error;
pub mod finance;
pub mod hash;
pub mod json;
pub mod jwt;
pub mod text;
pub mod time;
