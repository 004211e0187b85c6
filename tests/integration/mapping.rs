use serde_json::json;
use tcapi_sdk::jsonapi::Payload;
use tcapi_sdk::ResourceKind;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_card_with_included_set() {
    let server = common::server_with_token("tok").await;

    Mock::given(method("GET"))
        .and(path("/cards/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "9", "type": "cards", "attributes": {"name": "Ace"}},
            "included": [{"id": "5", "type": "sets", "attributes": {"name": "1990 Set"}}],
            "links": {"self": "/cards/9"}
        })))
        .mount(&server)
        .await;

    let client = common::client(&server);
    let doc = client.resource(ResourceKind::Card).find("9").await.unwrap();

    let card = doc.single().expect("single payload");
    assert_eq!(card.id(), "9");
    assert_eq!(card.get_str("name"), Some("Ace"));
    assert_eq!(card.get_str("id"), Some("9"));

    let sets = card.related("sets");
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].id(), "5");
    assert_eq!(sets[0].get_str("name"), Some("1990 Set"));
    assert_eq!(doc.links["self"], json!("/cards/9"));
}

#[tokio::test]
async fn test_checklist_collection_maps_to_cards() {
    let server = common::server_with_token("tok").await;

    Mock::given(method("GET"))
        .and(path("/cards"))
        .and(query_param("filter[set]", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "1", "type": "checklist", "attributes": {"number": "1"}},
                {"id": "2", "type": "checklist", "attributes": {"number": "2"}},
                {"id": "3", "type": "cards", "attributes": {"number": "3"}}
            ],
            "included": [{"id": "5", "type": "subset", "attributes": {"name": "Inserts"}}],
            "meta": {"total": 3}
        })))
        .mount(&server)
        .await;

    let client = common::client(&server);
    let doc = client
        .resource(ResourceKind::Card)
        .list_with(&[("filter[set]", "5")])
        .await
        .unwrap();

    assert_eq!(doc.meta["total"], json!(3));
    match &doc.payload {
        Payload::Collection(cards) => {
            assert_eq!(cards.len(), 3);
            assert!(cards.iter().all(|c| c.kind() == ResourceKind::Card));
            assert_eq!(cards[0].id(), "1");
            assert_eq!(cards[2].id(), "3");
            assert_eq!(cards[1].related("subset")[0].kind(), ResourceKind::Set);
        }
        other => panic!("expected collection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_same_document_maps_equal_twice() {
    let server = common::server_with_token("tok").await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 12, "type": "players", "attributes": {"name": "Ken"}}],
            "included": [{"id": "3", "type": "teams", "attributes": {"name": "Mariners"}}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let players = common::client(&server);
    let first = players.resource(ResourceKind::Player).list().await.unwrap();
    let second = players.resource(ResourceKind::Player).list().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.collection().unwrap()[0].id(), "12");
}
