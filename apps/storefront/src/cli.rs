//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fontstore_commerce::{OrderBy, SortOrder};
use fontstore_core::LicenseTier;

/// Font Store: browse fonts, manage the cart, check out.
#[derive(Debug, Parser)]
#[command(name = "fontstore", version, about)]
pub struct Cli {
    /// Cart database file (overrides FONTSTORE_DB_PATH).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Print command results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Serve the built-in fixture catalog instead of calling the shop.
    #[arg(long, global = true)]
    pub mock: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the font catalog.
    #[command(subcommand)]
    Catalog(CatalogCommand),

    /// Inspect and change the cart.
    #[command(subcommand)]
    Cart(CartCommand),

    /// Place an order for the cart contents.
    Checkout(CheckoutArgs),

    /// Show order history.
    Orders(PageArgs),
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List fonts.
    List(ListArgs),

    /// Show one font with its license prices.
    Show {
        /// Product id.
        id: u64,
    },

    /// List categories.
    Categories,

    /// List tags.
    Tags,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Search name and description.
    #[arg(long)]
    pub search: Option<String>,

    /// Category slug or name.
    #[arg(long)]
    pub category: Option<String>,

    /// Tag slug or id.
    #[arg(long)]
    pub tag: Option<String>,

    /// Only featured fonts.
    #[arg(long)]
    pub featured: bool,

    /// Only fonts on sale.
    #[arg(long)]
    pub on_sale: bool,

    /// Minimum price, e.g. 25 or 25.50.
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price.
    #[arg(long)]
    pub max_price: Option<String>,

    /// Sort key: date, id, title, price, popularity or rating.
    #[arg(long)]
    pub orderby: Option<OrderBy>,

    /// Sort direction: asc or desc.
    #[arg(long)]
    pub order: Option<SortOrder>,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Debug, Clone, Copy, Default, Args)]
pub struct PageArgs {
    /// Page number, starting at 1.
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page (1-100).
    #[arg(long)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,

    /// Add a font to the cart.
    Add {
        /// Product id.
        product_id: u64,

        /// License tier: personal, commercial or extended.
        #[arg(long, default_value = "personal")]
        license: LicenseTier,
    },

    /// Remove every line for a font.
    Remove {
        /// Product id.
        product_id: String,
    },

    /// Set the quantity of a font's lines (0 or less removes them).
    Update {
        /// Product id.
        product_id: String,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Empty the cart.
    Clear,
}

#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Street address.
    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub city: String,

    /// State or province code, if the country has one.
    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub postcode: String,

    /// Two-letter country code.
    #[arg(long)]
    pub country: String,

    #[arg(long)]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_add_with_license() {
        let cli = Cli::try_parse_from(["fontstore", "cart", "add", "62", "--license", "extended"])
            .unwrap();
        match cli.command {
            Command::Cart(CartCommand::Add { product_id, license }) => {
                assert_eq!(product_id, 62);
                assert_eq!(license, LicenseTier::Extended);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_quantity_and_sorting() {
        let cli = Cli::try_parse_from(["fontstore", "cart", "update", "62", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Cart(CartCommand::Update { quantity: -1, .. })
        ));

        let cli = Cli::try_parse_from([
            "fontstore", "--json", "catalog", "list", "--orderby", "price", "--order", "desc",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Catalog(CatalogCommand::List(args)) => {
                assert_eq!(args.orderby, Some(OrderBy::Price));
                assert_eq!(args.order, Some(SortOrder::Desc));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_license_is_rejected() {
        assert!(Cli::try_parse_from(["fontstore", "cart", "add", "62", "--license", "gold"]).is_err());
    }
}
