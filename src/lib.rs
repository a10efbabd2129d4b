// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # shipcalc — Shipping cost estimation
//!
//! Prices a shipment from its weight, dimensions, destination zone, and
//! shipping method, using fixed rate tables.
//!
//! ## Core Concept
//!
//! The billing basis is the **chargeable weight**: the greater of the actual
//! weight and the volumetric weight (volume / 5000), so bulky-but-light
//! packages are charged for the space they occupy. The total is
//!
//! ```text
//! base_rate(method) + chargeable_weight × weight_multiplier(method) × zone_multiplier(zone)
//! ```
//!
//! rounded to whole cents.
//!
//! ## Quick Start
//!
//! ```rust
//! use shipcalc::{calculate, Dimensions, ShipmentRequest};
//!
//! let request = ShipmentRequest {
//!     weight_kg: 2.0,
//!     dimensions: Dimensions::new(30.0, 20.0, 15.0),
//!     zone: 1,
//!     method: "economy".to_string(),
//! };
//!
//! let quote = calculate(&request).unwrap();
//! assert_eq!(quote.total, 7.00);
//! assert_eq!(quote.console_line(), "Estimated Shipping Cost: $7.00");
//! ```
//!
//! ## Validation
//!
//! `calculate` is the single validation point. Checks run in a fixed order
//! (weight, dimensions, zone, method) and the first failing check decides the
//! error variant. Zone and method travel raw in the request (a number and a
//! case-insensitive string) so invalid identifiers are representable and
//! rejected here, never silently coerced.
//!
//! ## Rate Tables
//!
//! | method   | base rate | weight multiplier |
//! |----------|-----------|-------------------|
//! | economy  | $5.00     | 1.0               |
//! | standard | $8.00     | 1.5               |
//! | express  | $12.00    | 2.0               |
//!
//! | zone | multiplier | meaning       |
//! |------|------------|---------------|
//! | 1    | 1.0        | Local         |
//! | 2    | 1.5        | Regional      |
//! | 3    | 2.0        | National      |
//! | 4    | 3.0        | International |
//!
//! The tables are compiled-in constants; there is no rate persistence,
//! currency handling, or versioning.

// Core modules
pub mod error;
pub mod quote;
pub mod rates;

// Re-exports
pub use error::{Error, Result};
pub use quote::{calculate, round_to_cents, Dimensions, Quote, ShipmentRequest, VOLUMETRIC_DIVISOR};
pub use rates::{Method, MethodRate, RateCard, Zone, ZoneRate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
