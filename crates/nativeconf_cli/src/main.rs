//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `nativeconf_core` linkage from a standalone binary.
//! - Print deterministic output: core version and the properties rendering
//!   of an empty collection session.

use nativeconf_core::{render_native_image_properties, InitializationDescriptor};

fn main() {
    println!("nativeconf_core version={}", nativeconf_core::core_version());
    print!(
        "{}",
        render_native_image_properties(&InitializationDescriptor::new())
    );
}
