//! # Font Store Storefront
//!
//! Command-line surface over the cart store and the commerce backend.
//!
//! ## Module Organization
//! ```text
//! fontstore_storefront/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── StorefrontConfig, currency formatting
//! ├── error.rs        ◄─── CliError for command handlers
//! └── commands/
//!     ├── catalog.rs  ◄─── list / show / categories / tags
//!     ├── cart.rs     ◄─── show / add / remove / update / clear
//!     ├── checkout.rs ◄─── place order, clear cart
//!     └── orders.rs   ◄─── order history
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load StorefrontConfig ─────── FONTSTORE_DB_PATH / --db / data dir   │
//! │  2. Load CommerceConfig ───────── FONTSTORE_COMMERCE_URL, credentials   │
//! │  3. Open SqliteCartStorage ────── WAL, migrations                       │
//! │  4. CartStore::open ───────────── restore cart (empty on bad snapshot)  │
//! │  5. Build tokio Runtime ───────── commerce calls only                   │
//! │  6. Dispatch command, print response                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use anyhow::Context;
use fontstore_commerce::{Commerce, CommerceConfig};
use fontstore_core::CartStore;
use fontstore_db::{DbConfig, SqliteCartStorage};
use tokio::runtime::Runtime;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{CartCommand, CatalogCommand, Cli, Command};
use commands::{cart, catalog, checkout, format_output, orders, Render};
use config::StorefrontConfig;
use error::CliResult;

/// Runs one storefront command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(db) = &cli.db {
        config = config.with_db_path(db);
    }

    let mut commerce_config = CommerceConfig::from_env().context("Invalid commerce configuration")?;
    if cli.mock {
        commerce_config.use_mock_data = true;
    }
    let api = Commerce::from_config(&commerce_config)?;

    info!(db_path = %config.db_path.display(), "Opening cart database");
    let storage = SqliteCartStorage::open(DbConfig::new(&config.db_path))
        .with_context(|| format!("Failed to open cart database at {}", config.db_path.display()))?;
    let mut store = CartStore::open(storage);

    let rt = command_runtime().context("Failed to start async runtime")?;

    debug!(command = ?cli.command, "Dispatching");
    let json = cli.json;

    let result = match cli.command {
        Command::Catalog(sub) => match sub {
            CatalogCommand::List(args) => emit(catalog::list(&rt, &api, &args), json, &config),
            CatalogCommand::Show { id } => emit(catalog::show(&rt, &api, id), json, &config),
            CatalogCommand::Categories => emit(catalog::categories(&rt, &api), json, &config),
            CatalogCommand::Tags => emit(catalog::tags(&rt, &api), json, &config),
        },
        Command::Cart(sub) => match sub {
            CartCommand::Show => emit(Ok(cart::show(&store)), json, &config),
            CartCommand::Add {
                product_id,
                license,
            } => emit(
                cart::add(&rt, &api, &mut store, product_id, license),
                json,
                &config,
            ),
            CartCommand::Remove { product_id } => {
                emit(cart::remove(&mut store, &product_id), json, &config)
            }
            CartCommand::Update {
                product_id,
                quantity,
            } => emit(cart::update(&mut store, &product_id, quantity), json, &config),
            CartCommand::Clear => emit(Ok(cart::clear(&mut store)), json, &config),
        },
        Command::Checkout(args) => {
            let details = args.into();
            emit(checkout::run(&rt, &api, &mut store, &details), json, &config)
        }
        Command::Orders(args) => emit(orders::list(&rt, &api, args), json, &config),
    };

    rt.shutdown_background();
    result
}

/// Prints a command result; errors go to stderr and fail the process.
fn emit<R: Render>(result: CliResult<R>, json: bool, config: &StorefrontConfig) -> anyhow::Result<()> {
    match result {
        Ok(response) => {
            print!("{}", format_output(&response, json, config)?);
            Ok(())
        }
        Err(err) => {
            if json {
                eprintln!("{}", serde_json::to_string_pretty(&err)?);
            }
            Err(err.into())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output can be piped.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fontstore=trace` - Show trace for fontstore crates only
/// - Default: warnings only, `-v` for `info,fontstore=debug,sqlx=warn`,
///   `-vv` for trace
pub fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info,fontstore=debug,sqlx=warn",
        _ => "debug,fontstore=trace,sqlx=info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runtime the command handlers drive commerce calls on.
pub fn command_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontstore_commerce::MockCommerce;
    use fontstore_core::LicenseTier;

    #[test]
    fn test_cart_survives_between_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fontstore.db");
        let rt = command_runtime().unwrap();
        let api = MockCommerce::new();

        {
            let storage = SqliteCartStorage::open(DbConfig::new(&path)).unwrap();
            let mut store = CartStore::open(storage);
            cart::add(&rt, &api, &mut store, 62, LicenseTier::Commercial).unwrap();
            cart::add(&rt, &api, &mut store, 45, LicenseTier::Personal).unwrap();
        }

        let storage = SqliteCartStorage::open(DbConfig::new(&path)).unwrap();
        let mut store = CartStore::open(storage);
        let shown = cart::show(&store);
        assert_eq!(shown.totals.total_items, 2);
        assert_eq!(shown.totals.total_price.cents(), 5800 + 4500);

        cart::clear(&mut store);
        drop(store);

        let storage = SqliteCartStorage::open(DbConfig::new(&path)).unwrap();
        assert!(cart::show(&CartStore::open(storage)).lines.is_empty());
    }
}
