// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage of the typed registry.
//!
//! Builds a chain of environment variables, an optional YAML file and built-in
//! defaults, then reads typed values from it.
//!
//! Run with:
//! ```sh
//! DEMO_SERVER_PORT=9090 cargo run --example basic_usage -- config.yaml
//! ```

use typed_registry::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let defaults = MapSource::new()
        .with_value("server.host", "127.0.0.1")
        .with_value("server.port", 8080)
        .with_value("server.workers", RawValue::Null)
        .with_value("features", vec!["metrics", "tracing"]);

    let mut builder = ChainSource::builder().with_env_prefix("DEMO_");
    if let Some(path) = std::env::args().nth(1) {
        builder = builder.with_yaml_file(path)?;
    }
    let registry = TypedRegistry::new(builder.with_source(defaults).build());

    println!("=== Typed Registry Demo ===\n");

    let host = registry.get_string("server.host")?;
    println!("server.host    = {}", host);

    // Environment values are strings; an exported port is never an int.
    match registry.get_int("server.port") {
        Ok(port) => println!("server.port    = {}", port),
        Err(e) => println!("server.port    ! {}", e),
    }

    let workers = registry.get_nullable_int("server.workers")?;
    println!("server.workers = {:?}", workers);

    let debug = registry.get_bool_or("server.debug", false);
    println!("server.debug   = {}", debug);

    let features = registry.get_string_list("features")?;
    println!("features       = {:?}", features);

    Ok(())
}
