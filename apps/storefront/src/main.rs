//! # Font Store CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse the command line
//! 2. Initialize tracing (stderr, so command output stays clean)
//! 3. Load storefront and commerce configuration
//! 4. Open the cart database and restore the cart
//! 5. Run the command
//!
//! The actual setup is in lib.rs for better testability.

use clap::Parser;
use fontstore_storefront::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    fontstore_storefront::init_tracing(cli.verbose);
    fontstore_storefront::run(cli)
}
