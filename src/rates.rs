//! Fixed rate tables
//!
//! The method and zone tables are compiled-in constants; every quote is
//! priced off the same card. There is no rate persistence or versioning.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shipping method — selects the base rate and the weight multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Economy,
    Standard,
    Express,
}

impl Method {
    /// All methods, in menu order.
    pub const ALL: [Method; 3] = [Method::Economy, Method::Standard, Method::Express];

    /// Flat charge applied before the weight-based component.
    pub fn base_rate(&self) -> f64 {
        match self {
            Method::Economy => 5.00,
            Method::Standard => 8.00,
            Method::Express => 12.00,
        }
    }

    /// Per-kilogram factor applied to the chargeable weight.
    pub fn weight_multiplier(&self) -> f64 {
        match self {
            Method::Economy => 1.0,
            Method::Standard => 1.5,
            Method::Express => 2.0,
        }
    }

    /// Canonical lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Economy => "economy",
            Method::Standard => "standard",
            Method::Express => "express",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Method names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "economy" => Ok(Method::Economy),
            "standard" => Ok(Method::Standard),
            "express" => Ok(Method::Express),
            _ => Err(Error::InvalidMethod(format!(
                "must be one of economy, standard, express (got '{}')",
                s
            ))),
        }
    }
}

/// Destination zone — a coarse distance tier with a price multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Zone {
    Local,
    Regional,
    National,
    International,
}

impl Zone {
    /// All zones, in menu order.
    pub const ALL: [Zone; 4] = [
        Zone::Local,
        Zone::Regional,
        Zone::National,
        Zone::International,
    ];

    /// Numeric identifier used in requests and at the console.
    pub fn number(&self) -> u8 {
        match self {
            Zone::Local => 1,
            Zone::Regional => 2,
            Zone::National => 3,
            Zone::International => 4,
        }
    }

    /// Resolve a numeric zone identifier against the table.
    pub fn from_number(n: u8) -> Result<Zone> {
        match n {
            1 => Ok(Zone::Local),
            2 => Ok(Zone::Regional),
            3 => Ok(Zone::National),
            4 => Ok(Zone::International),
            _ => Err(Error::InvalidZone(format!("must be 1-4 (got {})", n))),
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Zone::Local => 1.0,
            Zone::Regional => 1.5,
            Zone::National => 2.0,
            Zone::International => 3.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Local => "Local",
            Zone::Regional => "Regional",
            Zone::National => "National",
            Zone::International => "International",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the method table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MethodRate {
    pub method: Method,
    pub base_rate: f64,
    pub weight_multiplier: f64,
}

/// One row of the zone table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ZoneRate {
    pub zone: u8,
    pub label: String,
    pub multiplier: f64,
}

/// Snapshot of both tables, for display and JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RateCard {
    pub methods: Vec<MethodRate>,
    pub zones: Vec<ZoneRate>,
}

impl RateCard {
    /// Build the card from the compiled-in tables.
    pub fn current() -> Self {
        RateCard {
            methods: Method::ALL
                .iter()
                .map(|m| MethodRate {
                    method: *m,
                    base_rate: m.base_rate(),
                    weight_multiplier: m.weight_multiplier(),
                })
                .collect(),
            zones: Zone::ALL
                .iter()
                .map(|z| ZoneRate {
                    zone: z.number(),
                    label: z.label().to_string(),
                    multiplier: z.multiplier(),
                })
                .collect(),
        }
    }

    /// Human-readable rendering of both tables.
    pub fn to_report(&self) -> String {
        let mut out = String::new();

        out.push_str("Shipping Methods:\n");
        for rate in &self.methods {
            out.push_str(&format!(
                "  {:<10} base ${:>5.2}  x{:.1}/kg\n",
                rate.method, rate.base_rate, rate.weight_multiplier
            ));
        }

        out.push_str("\nZones:\n");
        for rate in &self.zones {
            out.push_str(&format!(
                "  {}  {:<15} x{:.1}\n",
                rate.zone, rate.label, rate.multiplier
            ));
        }

        out
    }
}
