//! Property-based tests for the quote calculator
//!
//! Uses proptest to generate requests and verify pricing invariants

use proptest::prelude::*;
use shipcalc::{calculate, Dimensions, Error, Method, ShipmentRequest};

proptest! {
    #[test]
    fn test_total_at_least_base_rate(request in any_valid_request()) {
        let quote = calculate(&request).unwrap();
        let method = request.method.parse::<Method>().unwrap();
        prop_assert!(quote.total >= method.base_rate());
    }

    #[test]
    fn test_calculate_idempotent(request in any_valid_request()) {
        let first = calculate(&request).unwrap();
        let second = calculate(&request).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_chargeable_weight_is_max(request in any_valid_request()) {
        let quote = calculate(&request).unwrap();
        let expected = request
            .weight_kg
            .max(request.dimensions.volumetric_weight_kg());
        prop_assert_eq!(quote.chargeable_weight_kg, expected);
        prop_assert!(quote.chargeable_weight_kg >= request.weight_kg);
    }

    #[test]
    fn test_total_has_whole_cents(request in any_valid_request()) {
        let quote = calculate(&request).unwrap();
        let cents = quote.total * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6);
    }

    #[test]
    fn test_nonpositive_weight_always_rejected(
        weight in -500.0f64..=0.0,
        request in any_valid_request(),
    ) {
        let bad = ShipmentRequest { weight_kg: weight, ..request };
        let err = calculate(&bad).unwrap_err();
        prop_assert!(matches!(err, Error::InvalidWeight(_)));
    }

    #[test]
    fn test_unknown_zone_always_rejected(
        zone in 5u8..,
        request in any_valid_request(),
    ) {
        let bad = ShipmentRequest { zone, ..request };
        let err = calculate(&bad).unwrap_err();
        prop_assert!(matches!(err, Error::InvalidZone(_)));
    }

    #[test]
    fn test_unknown_method_always_rejected(
        method in "[a-z]{3,12}",
        request in any_valid_request(),
    ) {
        prop_assume!(!["economy", "standard", "express"].contains(&method.as_str()));
        let bad = ShipmentRequest { method, ..request };
        let err = calculate(&bad).unwrap_err();
        prop_assert!(matches!(err, Error::InvalidMethod(_)));
    }
}

fn any_valid_request() -> impl Strategy<Value = ShipmentRequest> {
    (
        0.01f64..500.0,
        0.1f64..200.0,
        0.1f64..200.0,
        0.1f64..200.0,
        1u8..=4,
        prop_oneof![Just("economy"), Just("standard"), Just("express")],
    )
        .prop_map(|(weight, length, width, height, zone, method)| ShipmentRequest {
            weight_kg: weight,
            dimensions: Dimensions::new(length, width, height),
            zone,
            method: method.to_string(),
        })
}
