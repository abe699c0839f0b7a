mod common;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sylva_lib::supabase::{FUEL_TYPES_ORDER, ZONES_ORDER, ZONES_SELECT};
use sylva_lib::{zone_overview, Error, ErrorKind, SupabaseClient, SupabaseSettings, SylvaConfig};

const KEY: &str = "service-role-key";

fn config_for(server: &MockServer) -> SylvaConfig {
    SylvaConfig::default().with_supabase(server.uri(), KEY)
}

async fn mount_zones(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/fire_zones"))
        .and(query_param("select", ZONES_SELECT))
        .and(query_param("order", ZONES_ORDER))
        .and(header("apikey", KEY))
        .and(header("authorization", format!("Bearer {KEY}").as_str()))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_fuel_types(server: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/fuel_types"))
        .and(query_param("select", "*"))
        .and(query_param("order", FUEL_TYPES_ORDER))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn overview_returns_rows_and_stats() {
    let server = MockServer::start().await;
    mount_zones(
        &server,
        ResponseTemplate::new(200).set_body_json(common::zone_rows()),
    )
    .await;
    mount_fuel_types(
        &server,
        ResponseTemplate::new(200).set_body_json(common::fuel_type_rows()),
        1,
    )
    .await;

    let data = zone_overview(&config_for(&server)).await.expect("overview");

    assert_eq!(data.zones.len(), 2);
    assert_eq!(data.zones[0].name(), "Atlas Foothills");
    assert_eq!(data.fuel_types.len(), 2);
    assert_eq!(data.stats.total_zones, 2);
    assert_eq!(data.stats.north_africa_zones, 1);
    assert_eq!(data.stats.total_structures, 50.0);
    assert_eq!(data.stats.fuel_types_count, 2);
    assert_eq!(data.stats.risk_distribution.critical, 1);
    assert_eq!(data.stats.risk_distribution.high, 1);
}

#[tokio::test]
async fn null_bodies_are_empty_results() {
    let server = MockServer::start().await;
    mount_zones(&server, ResponseTemplate::new(200).set_body_json(json!(null))).await;
    mount_fuel_types(&server, ResponseTemplate::new(200).set_body_json(json!([])), 1).await;

    let data = zone_overview(&config_for(&server)).await.expect("overview");
    assert!(data.zones.is_empty());
    assert!(data.fuel_types.is_empty());
    assert_eq!(data.stats.total_zones, 0);
    assert_eq!(data.stats.risk_distribution.total(), 0);
}

#[tokio::test]
async fn rows_without_names_are_counted() {
    let server = MockServer::start().await;
    mount_zones(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "zone_name": null, "region": "Tunisia", "wui_distance_km": 0.8, "wui_structures_estimate": 30},
            {"id": 2, "zone_name": "Sierra de Mijas", "region": "Spain", "wui_distance_km": 2.2}
        ])),
    )
    .await;
    mount_fuel_types(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": "UN", "fuel_name": null, "weight_wind": 0.1}
        ])),
        1,
    )
    .await;

    let data = zone_overview(&config_for(&server)).await.expect("overview");

    assert_eq!(data.zones.len(), 2);
    assert!(data.zones[0].zone_name.is_none());
    assert!(data.fuel_types[0].fuel_name.is_none());
    assert_eq!(data.stats.total_zones, 2);
    assert_eq!(data.stats.north_africa_countries.get("Tunisia"), Some(&1));
    assert_eq!(data.stats.total_structures, 30.0);
    assert_eq!(data.stats.fuel_types_count, 1);
    assert_eq!(data.stats.risk_distribution.critical, 1);
    assert_eq!(data.stats.risk_distribution.high, 1);
}

#[tokio::test]
async fn zone_failure_skips_fuel_query_and_keeps_message() {
    let server = MockServer::start().await;
    mount_zones(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({
            "code": "PGRST200",
            "details": null,
            "hint": null,
            "message": "Could not find a relationship between 'fire_zones' and 'fuel_types'"
        })),
    )
    .await;
    mount_fuel_types(&server, ResponseTemplate::new(200).set_body_json(json!([])), 0).await;

    let err = zone_overview(&config_for(&server)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(
        err.to_string(),
        "Could not find a relationship between 'fire_zones' and 'fuel_types'"
    );
}

#[tokio::test]
async fn fuel_failure_discards_zone_rows() {
    let server = MockServer::start().await;
    mount_zones(
        &server,
        ResponseTemplate::new(200).set_body_json(common::zone_rows()),
    )
    .await;
    mount_fuel_types(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({"message": "permission denied for table fuel_types"})),
        1,
    )
    .await;

    let err = zone_overview(&config_for(&server)).await.unwrap_err();
    match err {
        Error::Upstream {
            table,
            status,
            message,
        } => {
            assert_eq!(table, "fuel_types");
            assert_eq!(status, 500);
            assert_eq!(message, "permission denied for table fuel_types");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_credentials_never_reach_the_network() {
    let server = MockServer::start().await;
    let config = SylvaConfig {
        supabase: SupabaseSettings {
            url: Some(server.uri()),
            service_role_key: None,
        },
        ..SylvaConfig::default()
    };

    let err = zone_overview(&config).await.unwrap_err();
    assert!(matches!(err, Error::MissingCredentials));
    assert!(err.to_string().contains("credentials"));

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn malformed_rows_are_unexpected_errors() {
    let server = MockServer::start().await;
    mount_zones(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})),
    )
    .await;
    mount_fuel_types(&server, ResponseTemplate::new(200).set_body_json(json!([])), 0).await;

    let client = SupabaseClient::from_settings(&config_for(&server).supabase).unwrap();
    let err = client.fetch_snapshot().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}
