//! Process bootstrap for standalone Ember executables.
//!
//! When the runtime is linked into a standalone executable rather than a
//! library (`standalone` cargo feature), this module provides the process
//! entry point: it runs the compiler-emitted initialization hook, then the
//! program's main hook, and the main hook's result becomes the exit status.
//!
//! Both hooks are resolved at link time. A missing hook is a link error
//! reported by the toolchain, never a runtime condition, so the feature
//! must be off for every link that is not a standalone Ember executable
//! (host binaries and test harnesses define their own `main`).

use libc::c_int;

#[cfg(feature = "standalone")]
extern "C" {
    /// Process-wide setup emitted by the Ember compiler; runs before user code.
    fn __ember_init();
    /// The compiled program's entry function.
    fn __ember_main() -> c_int;
}

/// Run the init hook, then the main hook, returning the main hook's result.
///
/// No recovery and no logging: whatever failure either hook produces
/// propagates unmodified. Rust embedders that drive an Ember program
/// without the standalone entry point can sequence their hooks through
/// this directly.
pub fn run_hooks(init: impl FnOnce(), entry: impl FnOnce() -> c_int) -> c_int {
    init();
    entry()
}

/// Process entry point for standalone Ember executables.
#[cfg(feature = "standalone")]
#[no_mangle]
pub extern "C" fn main() -> c_int {
    run_hooks(|| unsafe { __ember_init() }, || unsafe { __ember_main() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn test_init_runs_before_main() {
        static COUNTER: AtomicI32 = AtomicI32::new(0);

        let exit = run_hooks(
            || COUNTER.store(1, Ordering::SeqCst),
            || COUNTER.load(Ordering::SeqCst),
        );
        assert_eq!(exit, 1, "init hook must complete before the main hook runs");
    }

    #[test]
    fn test_exit_code_passthrough() {
        let exit = run_hooks(|| {}, || 42);
        assert_eq!(exit, 42);
    }
}
