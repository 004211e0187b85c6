use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_counts_growth_and_snapshots() {
    let server = common::server_with_token("tok").await;

    Mock::given(method("GET"))
        .and(path("/stats/counts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "stats", "attributes": {
                "generatedAt": "2024-05-01T00:00:00Z",
                "counts": [
                    {"entityType": "cards", "total": 1000},
                    {"entityType": "players", "total": 250}
                ]
            }}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stats/growth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"attributes": {
                "period": "30d",
                "growth": [{
                    "entity_type": "cards",
                    "current": 1000,
                    "previous": 800,
                    "change": 200,
                    "percent_change": 25.0
                }]
            }}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stats/snapshots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"attributes": {"snapshots": [
                {"entity_type": "cards", "date": "2024-04-30", "total": 990}
            ]}}
        })))
        .mount(&server)
        .await;

    let client = common::client(&server);

    let counts = client.counts().await.unwrap();
    assert_eq!(counts.generated_at, "2024-05-01T00:00:00Z");
    assert_eq!(counts.get_by_entity_type("players").unwrap().total, 250);

    let growth = client.growth().await.unwrap();
    let cards = growth.get_by_entity_type("cards").unwrap();
    assert_eq!(cards.change, 200);
    assert_eq!(cards.percent_change, 25.0);

    let snapshots = client.snapshots().await.unwrap();
    assert_eq!(snapshots.get_by_entity_type("cards").unwrap().date, "2024-04-30");
}

#[tokio::test]
async fn test_counts_missing_from_response() {
    let server = common::server_with_token("tok").await;

    Mock::given(method("GET"))
        .and(path("/stats/counts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"attributes": {"generated_at": "2024-05-01"}}
        })))
        .mount(&server)
        .await;

    let counts = common::client(&server).counts().await.unwrap();
    assert!(counts.counts.is_empty());
    assert!(counts.get_by_entity_type("cards").is_none());
}
