// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! End-to-end calculator scenarios
//!
//! Drives the kernel exactly as the front end does: JSON in, JSON out.

use crate::kernel::BrewKernel;
use serde_json::{json, Value};

fn specs_for(selection: Value, month: u32, region: &str) -> Value {
    let out = BrewKernel::compute_specs(&selection.to_string(), month, region);
    let response: Value = serde_json::from_str(&out).unwrap();
    println!(" Response: {}", response);
    response["result"]["specs"].clone()
}

fn assert_close(actual: &Value, expected: f64, field: &str) {
    let v = actual[field].as_f64().unwrap();
    assert!((v - expected).abs() < 1e-9, "{}: expected {}, got {}", field, expected, v);
}

#[test]
fn test_one_soybean_one_rice_koji() {
    let s = specs_for(json!(["soybean", "rice-koji"]), 6, "関東");
    assert_eq!(s["kojiRatio"], 10);
    assert_close(&s, 0.0, "waterAmount");
    assert_close(&s, 11.4, "saltRatio");
    assert_close(&s, 1030.0, "totalWeight");
    assert_eq!(s["materialPeriod"], 90);
    assert_close(&s, 43.8, "moistureRatio");
}

#[test]
fn test_two_soybean_one_rice_koji() {
    let s = specs_for(json!([{ "materialId": "soybean", "count": 2 }, "rice-koji"]), 6, "関東");
    assert_eq!(s["kojiRatio"], 5);
    assert_close(&s, 0.0, "waterAmount");
    assert_close(&s, 1790.0, "totalWeight");
    assert_close(&s, 48.1, "moistureRatio");
    assert_close(&s, 13.2, "saltRatio");
    assert_eq!(s["materialPeriod"], 180);
}

#[test]
fn test_two_soybean_three_rice_koji_adds_water() {
    let s = specs_for(
        json!([
            { "materialId": "soybean", "count": 2 },
            { "materialId": "rice-koji", "count": 3 }
        ]),
        6,
        "関東",
    );
    assert_eq!(s["kojiRatio"], 15);
    assert_close(&s, 150.0, "waterAmount");
    assert_close(&s, 2480.0, "totalWeight");
    assert_close(&s, 44.0, "moistureRatio");
    assert_close(&s, 9.5, "saltRatio");
    assert_eq!(s["materialPeriod"], 60);
}

#[test]
fn test_soybean_only() {
    let s = specs_for(json!(["soybean"]), 6, "関東");
    assert_eq!(s["kojiRatio"], 0);
    assert_eq!(s["materialPeriod"], 0);
    assert_close(&s, 760.0, "totalWeight");
    assert_close(&s, 54.0, "moistureRatio");
    assert_close(&s, 15.5, "saltRatio");
}

#[test]
fn test_missing_inputs_return_zero_specs() {
    for (selection, month, region) in [
        (json!([]), 6, "関東"),
        (json!(["soybean", "rice-koji"]), 0, "関東"),
        (json!(["soybean", "rice-koji"]), 6, ""),
    ] {
        let s = specs_for(selection, month, region);
        for (field, value) in s.as_object().unwrap() {
            assert_eq!(value.as_f64(), Some(0.0), "{} should be zero", field);
        }
    }
}

#[test]
fn test_water_floor_holds_as_koji_grows() {
    for rice in 3..=12 {
        let s = specs_for(
            json!([
                { "materialId": "soybean", "count": 2 },
                { "materialId": "rice-koji", "count": rice }
            ]),
            6,
            "関東",
        );
        assert!(s["kojiRatio"].as_u64().unwrap() > 10);
        assert!(s["waterAmount"].as_f64().unwrap() > 0.0, "rice={}", rice);
        assert!(s["moistureRatio"].as_f64().unwrap() >= 44.0, "rice={}", rice);
    }
}

#[test]
fn test_matched_reference_miso() {
    let out = BrewKernel::compute_specs(&json!(["soybean", "rice-koji"]).to_string(), 6, "関東");
    let response: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(response["result"]["miso"]["name"], "加賀味噌");
    assert_eq!(response["result"]["miso"]["kojiRequire"], json!(["米麹"]));

    let kyushu = BrewKernel::match_miso(
        &json!(["soybean", "rice-koji", "barley-koji"]).to_string(),
        &json!({ "kojiRatio": 25, "saltRatio": 11.5 }).to_string(),
    );
    let kyushu: Value = serde_json::from_str(&kyushu).unwrap();
    assert_eq!(kyushu["name"], "九州合わせ味噌");

    let none = BrewKernel::match_miso(
        &json!(["soybean", "rice-koji"]).to_string(),
        &json!({ "kojiRatio": 16, "saltRatio": 12.3 }).to_string(),
    );
    assert_eq!(none, "null");
}

#[test]
fn test_selection_order_does_not_change_result() {
    let forward = BrewKernel::compute_specs(
        &json!(["soybean", "rice-koji", "barley-koji", "rice-koji"]).to_string(),
        4,
        "九州",
    );
    let backward = BrewKernel::compute_specs(
        &json!(["rice-koji", "barley-koji", "rice-koji", "soybean"]).to_string(),
        4,
        "九州",
    );
    let f: Value = serde_json::from_str(&forward).unwrap();
    let b: Value = serde_json::from_str(&backward).unwrap();
    assert_eq!(f["result"]["miso"], b["result"]["miso"]);
    assert_eq!(f["result"]["specs"]["kojiRatio"], b["result"]["specs"]["kojiRatio"]);
    assert_eq!(f["result"]["specs"]["saltRatio"], b["result"]["specs"]["saltRatio"]);
    assert_eq!(f["result"]["specs"]["waterAmount"], b["result"]["specs"]["waterAmount"]);
}
