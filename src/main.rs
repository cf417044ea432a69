//! Native binary: `clickpoints [CONFIG.yaml]`.
//!
//! Without an argument the defaults are used. Set `RUST_LOG=debug` to log
//! every recorded point.

#[cfg(not(target_arch = "wasm32"))]
use clickpoints::{run_recorder, RecorderConfig};

// The browser build starts from `wasm_bindgen(start)` in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = match std::env::args_os().nth(1) {
        Some(path) => RecorderConfig::from_yaml_file(path)?,
        None => RecorderConfig::default(),
    };

    run_recorder(cfg)?;
    Ok(())
}
