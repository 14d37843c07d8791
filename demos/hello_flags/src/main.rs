//! Demo entry-point: bind flags onto `GreetConfig` and print the greeting.
//!
//! Set `HELLO_FLAGS_STRICT=1` to fail on unknown flags or bad values instead
//! of ignoring them. Diagnostics go to stderr and honour `RUST_LOG`.

use std::io::{self, Write};

use flagbind::Settings;
use hello_flags::error::Result;
use hello_flags::{GreetConfig, render};
use tracing_subscriber::EnvFilter;

const STRICT_ENV: &str = "HELLO_FLAGS_STRICT";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    run().map_err(color_eyre::eyre::Report::from)
}

fn strict_requested() -> bool {
    std::env::var(STRICT_ENV).is_ok_and(|value| matches!(value.as_str(), "1" | "true"))
}

fn run() -> Result<()> {
    let settings = Settings::new("hello-flags", "--");
    let mut config = GreetConfig::default();
    if strict_requested() {
        let report = flagbind::initialize_strict(&mut config, &settings)?;
        tracing::info!(bound = report.bound(), "strict binding succeeded");
    } else {
        flagbind::initialize(&mut config, &settings);
    }
    let mut stdout = io::stdout().lock();
    stdout.write_all(render(&config).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
