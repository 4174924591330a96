//! # Voxel Sandbox Entry Point
//!
//! Calls into the library's `run()`.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- settings.json
//! ```

fn main() {
    if let Err(e) = voxel_sandbox::run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
