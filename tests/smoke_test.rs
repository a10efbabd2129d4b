//! Smoke test to verify basic functionality

use pretty_assertions::assert_eq;
use shipcalc::{calculate, Dimensions, RateCard, ShipmentRequest};

fn request(weight: f64, dims: (f64, f64, f64), zone: u8, method: &str) -> ShipmentRequest {
    ShipmentRequest {
        weight_kg: weight,
        dimensions: Dimensions::new(dims.0, dims.1, dims.2),
        zone,
        method: method.to_string(),
    }
}

#[test]
fn smoke_test_basic_quote() {
    let quote = calculate(&request(1.0, (10.0, 10.0, 10.0), 4, "express")).unwrap();

    assert_eq!(quote.total, 18.00);
    assert_eq!(quote.base_rate, 12.00);
    assert_eq!(quote.console_line(), "Estimated Shipping Cost: $18.00");
}

#[test]
fn smoke_test_report_rendering() {
    let quote = calculate(&request(10.0, (50.0, 40.0, 30.0), 3, "standard")).unwrap();

    assert_eq!(
        quote.to_report(),
        "Quote: standard → Zone 3 (National)\n\
         Actual weight:     10.00 kg\n\
         Volumetric weight: 12.00 kg\n\
         Chargeable weight: 12.00 kg\n\
         Estimated Shipping Cost: $44.00\n"
    );
}

#[test]
fn smoke_test_quote_json_shape() {
    let quote = calculate(&request(2.0, (30.0, 20.0, 15.0), 1, "economy")).unwrap();
    let json = serde_json::to_value(&quote).unwrap();

    // Methods serialize as their lowercase console names
    assert_eq!(json["method"], "economy");
    assert_eq!(json["zone"], "Local");
    assert_eq!(json["total"], 7.0);
}

#[test]
fn smoke_test_rate_card_json_shape() {
    let card = RateCard::current();
    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["methods"].as_array().unwrap().len(), 3);
    assert_eq!(json["zones"].as_array().unwrap().len(), 4);
    assert_eq!(json["methods"][0]["method"], "economy");
    assert_eq!(json["methods"][0]["base_rate"], 5.0);
    assert_eq!(json["zones"][3]["zone"], 4);
    assert_eq!(json["zones"][3]["multiplier"], 3.0);
}
