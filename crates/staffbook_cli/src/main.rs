//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // A tiny probe keeps core crate wiring verifiable without the UI shell
    // or FFI runtime in the loop.
    println!("staffbook_core ping={}", staffbook_core::ping());
    println!("staffbook_core version={}", staffbook_core::core_version());
}
