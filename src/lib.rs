//! Ember Runtime - native support library for compiled Ember programs
//!
//! The Ember compiler emits object code and hands it to the system linker
//! together with this library, so generated programs can perform primitive
//! console output without carrying their own I/O code.
//!
//! # Features
//!
//! - **Primitive output bridge**: `print_int`, `print_float` and
//!   `print_byte`, exported at the C ABI boundary for generated code
//! - **Bootstrap entry point**: with the `standalone` cargo feature, a
//!   process `main` that runs the program's link-time `__ember_init` and
//!   `__ember_main` hooks
//! - **Writer-generic core**: the formatting contract is implemented over
//!   `std::io::Write`, so it can be exercised against in-memory buffers
//!
//! # Link modes
//!
//! The crate builds as `staticlib` and `cdylib` for the system linker, and
//! as `rlib` for Rust embedders and tests. The `standalone` feature must
//! only be enabled for the final link of an Ember executable: it defines
//! the `main` symbol and requires both hooks to be resolvable.
//!
//! # Example
//!
//! ```rust
//! use ember_runtime::write_int;
//!
//! let mut buf = Vec::new();
//! write_int(&mut buf, 42).unwrap();
//! assert_eq!(buf, b"42\n");
//! ```

#![warn(clippy::all)]

pub mod bootstrap;
pub mod output;

// Re-export commonly used functions
pub use bootstrap::run_hooks;
pub use output::{print_byte, print_float, print_int, write_byte, write_float, write_int};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
