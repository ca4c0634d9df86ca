//! RPS CLI Binary
//!
//! ## Usage
//!
//! ```bash
//! # Inspect a rotor
//! rps rotor 0
//!
//! # Export the icosahedron as JSON
//! rps solid icosahedron --format json --output ico.json
//!
//! # Verify with a looser tolerance and debug logging
//! RUST_LOG=rps_core=debug RPS_EDGE_TOLERANCE=1e-4 rps verify dodecahedron
//! ```

use clap::Parser;
use rps_cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rps_cli=info,rps_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&cli, &mut out) {
        tracing::error!(code = e.error_code(), "{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
