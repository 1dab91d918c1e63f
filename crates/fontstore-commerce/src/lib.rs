//! # fontstore-commerce: Shop Backend Client
//!
//! Catalog reads, order placement and order history against a WooCommerce
//! v3 REST API, or against an in-process fixture catalog when
//! `FONTSTORE_USE_MOCK_DATA` is set.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Commerce Data Flow                                │
//! │                                                                         │
//! │   storefront ──► Commerce::from_config(&CommerceConfig)                 │
//! │                        │                                                │
//! │            ┌───────────┴────────────┐                                   │
//! │            ▼                        ▼                                   │
//! │     HttpCommerce              MockCommerce                              │
//! │     reqwest + basic auth      fixtures + filters                        │
//! │            │                        │                                   │
//! │            └───────────┬────────────┘                                   │
//! │                        ▼                                                │
//! │               RemoteProduct / RemoteOrder                               │
//! │                        │                                                │
//! │          convert::font_from_product ──► fontstore_core::Font           │
//! │          checkout::place_order ◄────── fontstore_core::Cart            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - `CommerceApi` trait, HTTP backend, backend selection
//! - [`mock`] - Fixture backend
//! - [`models`] - REST payloads
//! - [`query`] - Typed list parameters
//! - [`convert`] - Product to `Font` mapping
//! - [`checkout`] - Cart to order
//! - [`config`] - Environment configuration
//! - [`error`] - Error types

pub mod checkout;
pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod mock;
pub mod models;
pub mod query;

pub use checkout::{build_order, place_order, CheckoutDetails};
pub use client::{Commerce, CommerceApi, HttpCommerce};
pub use config::{CommerceConfig, ConfigError};
pub use convert::{font_from_product, fonts_from_products};
pub use error::{CommerceError, CommerceResult};
pub use mock::MockCommerce;
pub use models::{Category, NewOrder, RemoteOrder, RemoteProduct, Tag};
pub use query::{OrderBy, OrderQuery, ProductQuery, SortOrder};
