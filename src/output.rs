//! Primitive output bridge for compiled Ember programs.
//!
//! Exposes the runtime's console output at the C ABI boundary so generated
//! code can print primitive values. Numeric values are written as one line
//! each and left to the stream's own buffering discipline; byte output is
//! flushed after every byte so interactive character streams become visible
//! immediately, even when stdout is redirected.
//!
//! Every operation is fire-and-forget: nothing is returned to the caller
//! and write failures are not surfaced. Each call locks stdout for the
//! duration of one value, so a single value's bytes are never torn;
//! ordering across concurrent callers is the embedding program's problem.

use std::io::{self, Write};

use libc::{c_char, c_double, c_int};

/// Fractional digits in fixed-point float output
const FLOAT_FRACTION_DIGITS: usize = 6;

/// Write the decimal representation of `x` followed by a newline.
pub fn write_int<W: Write>(out: &mut W, x: i32) -> io::Result<()> {
    writeln!(out, "{}", x)
}

/// Write `x` in fixed-point notation with 6 fractional digits, rounded to
/// nearest, followed by a newline.
pub fn write_float<W: Write>(out: &mut W, x: f64) -> io::Result<()> {
    writeln!(out, "{:.*}", FLOAT_FRACTION_DIGITS, x)
}

/// Write the single byte `c` with no newline, then flush the stream.
pub fn write_byte<W: Write>(out: &mut W, c: u8) -> io::Result<()> {
    out.write_all(&[c])?;
    out.flush()
}

// ========== External C ABI functions for compiled Ember code ==========

/// Decimal integer output - called from compiled Ember code
#[no_mangle]
pub extern "C" fn print_int(x: c_int) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write_int(&mut handle, x);
}

/// Fixed-point float output - called from compiled Ember code
#[no_mangle]
pub extern "C" fn print_float(x: c_double) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write_float(&mut handle, x);
}

/// Unbuffered single-byte output - called from compiled Ember code
///
/// The parameter is the platform `char`; it is reinterpreted as `u8` so the
/// emitted byte is the argument's exact bit pattern on every target.
#[no_mangle]
pub extern "C" fn print_byte(c: c_char) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write_byte(&mut handle, c as u8);
}
