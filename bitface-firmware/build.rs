//! Build script for bitface-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates watch.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate watch.toml with a real TOML parser before the on-target
/// subset parser ever sees it
fn validate_config() {
    println!("cargo:rerun-if-changed=watch.toml");

    let content = fs::read_to_string("watch.toml")
        .expect("watch.toml not found next to Cargo.toml; the firmware embeds it");

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => panic!("watch.toml is not valid TOML: {e}"),
    };

    if let Some(style) = config.get("face").and_then(|f| f.get("hour_style")) {
        match style.as_str() {
            Some("12h") | Some("24h") => {}
            _ => panic!("[face] hour_style must be \"12h\" or \"24h\", got {style}"),
        }
    }

    if let Some(hobbit) = config.get("face").and_then(|f| f.get("hobbit_text")) {
        if !hobbit.is_bool() {
            panic!("[face] hobbit_text must be a boolean, got {hobbit}");
        }
    }

    if let Some(ticks) = config.get("panel").and_then(|p| p.get("vcom_every_ticks")) {
        match ticks.as_integer() {
            Some(n) if (0..=60).contains(&n) => {}
            _ => panic!("[panel] vcom_every_ticks must be an integer 0-60, got {ticks}"),
        }
    }
}
