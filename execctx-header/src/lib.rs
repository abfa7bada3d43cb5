//! # execctx-header
//!
//! Generates the "32-bit pointers" variant of the `AICExecContext_` struct.
//!
//! A 64-bit host describes the memory layout a 32-bit device sees, so every
//! pointer and function-pointer field of the execution context is rewritten to
//! a fixed-width integer. The pipeline is:
//!
//!   source header
//!     ├── extract      struct block between two literal delimiters, renamed
//!     ├── pointers     pointer-type tokens rewritten to the destination type
//!     ├── guard        include guard from the output file name
//!     └── banner       copyright block comment
//!
//! [`generate::generate`] runs all of it against the filesystem;
//! [`generate::render_header`] is the same transformation on in-memory text.

pub mod banner;
pub mod error;
pub mod extract;
pub mod generate;
pub mod guard;
pub mod io;
pub mod pointers;

pub use banner::Banner;
pub use error::GenerateError;
pub use generate::{generate, render_header, GenerateOptions};
pub use guard::IncludeGuard;
