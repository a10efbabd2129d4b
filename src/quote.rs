//! Quote calculation
//!
//! Pure pricing of a shipment request against the fixed rate tables:
//! - Volumetric weight from the package dimensions
//! - Chargeable weight = max(actual, volumetric)
//! - cost = base rate + chargeable weight x method factor x zone factor
//!
//! Validation happens here, in a fixed order (weight, dimensions, zone,
//! method); the first failing check decides the error variant.

use crate::error::{Error, Result};
use crate::rates::{Method, Zone};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Divisor converting package volume in cm3 to volumetric weight in kg.
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Package dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Dimensions {
            length_cm,
            width_cm,
            height_cm,
        }
    }

    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }

    /// Dimensional-weight proxy: bulky-but-light packages are charged by
    /// volume rather than mass.
    pub fn volumetric_weight_kg(&self) -> f64 {
        self.volume_cm3() / VOLUMETRIC_DIVISOR
    }
}

impl FromStr for Dimensions {
    type Err = Error;

    /// Parse the console form `LxWxH` (e.g. `30x20x15`), split on `x`.
    ///
    /// Tokens are parsed before the count is checked, so a non-numeric token
    /// reports as malformed input while a wrong number of values reports as
    /// invalid dimensions. Positivity is left to [`calculate`] so the
    /// calculator's validation order stays authoritative.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split('x')
            .map(|token| {
                token.trim().parse::<f64>().map_err(|_| {
                    Error::MalformedInput(format!("'{}' is not a number", token.trim()))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() != 3 {
            return Err(Error::InvalidDimensions(format!(
                "must be three values in the form LxWxH (got {})",
                values.len()
            )));
        }

        Ok(Dimensions::new(values[0], values[1], values[2]))
    }
}

/// A shipment to be priced.
///
/// Zone and method are carried raw (number and string) so that the calculator
/// boundary is the single validation point for all four fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShipmentRequest {
    /// Actual package weight in kilograms.
    pub weight_kg: f64,
    /// Package dimensions in centimeters.
    pub dimensions: Dimensions,
    /// Destination zone identifier (1-4).
    pub zone: u8,
    /// Shipping method name, case-insensitive.
    pub method: String,
}

/// A priced shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Quote {
    pub method: Method,
    pub zone: Zone,
    pub actual_weight_kg: f64,
    pub volumetric_weight_kg: f64,
    pub chargeable_weight_kg: f64,
    pub base_rate: f64,
    /// Total cost, rounded to whole cents.
    pub total: f64,
}

impl Quote {
    /// The single line the console flow prints on success.
    pub fn console_line(&self) -> String {
        format!("Estimated Shipping Cost: ${:.2}", self.total)
    }

    /// Human-readable rendering of the quote.
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Quote: {} → Zone {} ({})\n",
            self.method,
            self.zone.number(),
            self.zone
        ));
        out.push_str(&format!("Actual weight:     {:.2} kg\n", self.actual_weight_kg));
        out.push_str(&format!(
            "Volumetric weight: {:.2} kg\n",
            self.volumetric_weight_kg
        ));
        out.push_str(&format!(
            "Chargeable weight: {:.2} kg\n",
            self.chargeable_weight_kg
        ));
        out.push_str(&format!("{}\n", self.console_line()));

        out
    }
}

/// Round a cost to whole cents, ties to even.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Price a shipment request against the rate tables.
///
/// Checks run in a fixed order (weight, dimensions, zone, method) and the
/// first failure is returned. Valid requests always price at or above the
/// method's base rate.
pub fn calculate(request: &ShipmentRequest) -> Result<Quote> {
    if !request.weight_kg.is_finite() || request.weight_kg <= 0.0 {
        return Err(Error::InvalidWeight(format!(
            "must be greater than zero (got {})",
            request.weight_kg
        )));
    }

    let dims = &request.dimensions;
    let sides = [dims.length_cm, dims.width_cm, dims.height_cm];
    if sides.iter().any(|side| !side.is_finite() || *side <= 0.0) {
        return Err(Error::InvalidDimensions(format!(
            "all dimensions must be greater than zero (got {}x{}x{})",
            dims.length_cm, dims.width_cm, dims.height_cm
        )));
    }

    let zone = Zone::from_number(request.zone)?;
    let method = request.method.parse::<Method>()?;

    let volumetric = dims.volumetric_weight_kg();
    let chargeable = request.weight_kg.max(volumetric);
    let cost = method.base_rate() + chargeable * method.weight_multiplier() * zone.multiplier();

    Ok(Quote {
        method,
        zone,
        actual_weight_kg: request.weight_kg,
        volumetric_weight_kg: volumetric,
        chargeable_weight_kg: chargeable,
        base_rate: method.base_rate(),
        total: round_to_cents(cost),
    })
}
