#![allow(dead_code)]

use serde_json::{json, Value};

use sylva_lib::Zone;

/// Zone rows shaped the way PostgREST returns them for the joined select.
pub fn zone_rows() -> Value {
    json!([
        {
            "id": 1,
            "zone_name": "Atlas Foothills",
            "region": "Morocco",
            "wui_distance_km": 1.2,
            "wui_structures_estimate": 50,
            "primary_fuel_code": "PH",
            "fuel_types": {
                "fuel_name": "Pinus halepensis",
                "validation_pod": 0.81,
                "weight_wind": 0.4,
                "weight_dfm": 0.3
            }
        },
        {
            "id": 2,
            "zone_name": "Sierra de Mijas",
            "region": "Spain",
            "wui_distance_km": 2.1,
            "wui_structures_estimate": null,
            "primary_fuel_code": "MQ",
            "fuel_types": null
        }
    ])
}

pub fn fuel_type_rows() -> Value {
    json!([
        {"id": "MQ", "fuel_name": "Mediterranean maquis", "validation_pod": 0.77, "weight_wind": 0.35, "weight_dfm": 0.25},
        {"id": "PH", "fuel_name": "Pinus halepensis", "validation_pod": 0.81, "weight_wind": 0.4, "weight_dfm": 0.3}
    ])
}

pub fn zone(region: &str, distance: Option<f64>, structures: Option<f64>) -> Zone {
    Zone {
        region: Some(region.to_string()),
        wui_distance_km: distance,
        wui_structures_estimate: structures,
        ..Zone::new(format!("{region} zone"))
    }
}
