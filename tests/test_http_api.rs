//! HTTP surface test: serve the router in-process and exercise every route with reqwest.

mod support;

use grocery_list::ItemStore;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn list_returns_seeded_items_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/api/items", base_url)).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Value = resp.json().await?;
    assert_eq!(
        items,
        json!([
            { "id": 1, "name": "Milk", "quantity": 2, "category": "Dairy", "purchased": false },
            { "id": 2, "name": "Bread", "quantity": 1, "category": "Bakery", "purchased": false },
            { "id": 3, "name": "Eggs", "quantity": 12, "category": "Dairy", "purchased": true }
        ])
    );
    Ok(())
}

#[tokio::test]
async fn create_assigns_next_id_and_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "Milk", "quantity": 2 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await?;
    assert_eq!(
        created,
        json!({ "id": 4, "name": "Milk", "quantity": 2, "category": "Other", "purchased": false })
    );

    // Quantity sent as a form string is coerced.
    let resp = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "Rice", "quantity": "3", "category": "Pantry" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await?;
    assert_eq!(created["id"], 5);
    assert_eq!(created["quantity"], 3);
    assert_eq!(created["category"], "Pantry");
    Ok(())
}

#[tokio::test]
async fn create_without_name_or_quantity_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "quantity": 1 }),
        json!({ "name": "", "quantity": 1 }),
        json!({ "name": "Tea" }),
        json!({ "name": "Tea", "quantity": "lots" }),
    ] {
        let resp = client
            .post(format!("{}/api/items", base_url))
            .json(&body)
            .send()
            .await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");
        let err: Value = resp.json().await?;
        assert!(err["error"].is_string());
    }

    let resp = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "Tea" }))
        .send()
        .await?;
    let err: Value = resp.json().await?;
    assert_eq!(err["error"], "Name and quantity are required");

    let items: Vec<Value> = client
        .get(format!("{}/api/items", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(items.len(), 3);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_unprocessable() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/items", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn partial_update_preserves_other_fields() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    let before: Value = client
        .get(format!("{}/api/items/2", base_url))
        .send()
        .await?
        .json()
        .await?;

    let resp = client
        .put(format!("{}/api/items/2", base_url))
        .json(&json!({ "purchased": true }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let after: Value = resp.json().await?;

    let mut expected = before.clone();
    expected["purchased"] = json!(true);
    assert_eq!(after, expected);

    // The id in the path wins over any id in the body.
    let resp = client
        .put(format!("{}/api/items/2", base_url))
        .json(&json!({ "id": 77, "quantity": 4 }))
        .send()
        .await?;
    let after: Value = resp.json().await?;
    assert_eq!(after["id"], 2);
    assert_eq!(after["quantity"], 4);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    for path in ["99", "abc", "0"] {
        let url = format!("{}/api/items/{}", base_url, path);
        assert_eq!(client.get(&url).send().await?.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            client
                .put(&url)
                .json(&json!({ "name": "x" }))
                .send()
                .await?
                .status(),
            StatusCode::NOT_FOUND
        );
        let resp = client.delete(&url).send().await?;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let err: Value = resp.json().await?;
        assert_eq!(err["error"], "Grocery item not found");
    }

    let items: Vec<Value> = client
        .get(format!("{}/api/items", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(items.len(), 3);
    Ok(())
}

#[tokio::test]
async fn update_on_unknown_id_is_not_found_whatever_the_body() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/items/99", base_url);

    let resp = client.put(&url).json(&json!({ "quantity": "lots" })).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .put(&url)
        .header("content-type", "application/json")
        .body("{bad")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: Value = resp.json().await?;
    assert_eq!(err["error"], "Grocery item not found");

    // On a known id the same bodies are still rejected.
    let url = format!("{}/api/items/1", base_url);
    let resp = client.put(&url).json(&json!({ "quantity": "lots" })).send().await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let resp = client
        .put(&url)
        .header("content-type", "application/json")
        .body("{bad")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn blank_name_on_update_keeps_stored_name() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{}/api/items/1", base_url))
        .json(&json!({ "name": "   ", "quantity": 3 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await?;
    assert_eq!(updated["name"], "Milk");
    assert_eq!(updated["quantity"], 3);
    Ok(())
}

#[tokio::test]
async fn whole_valued_float_quantity_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "Flour", "quantity": 2.0 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await?;
    assert_eq!(created["quantity"], 2);

    let resp = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "Flour", "quantity": 2.5 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn delete_returns_snapshot_and_never_reuses_id() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{}/api/items/3", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body["message"], "Grocery item deleted");
    assert_eq!(body["item"]["name"], "Eggs");

    let items: Vec<Value> = client
        .get(format!("{}/api/items", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(items.len(), 2);

    let created: Value = client
        .post(format!("{}/api/items", base_url))
        .json(&json!({ "name": "Butter", "quantity": 1 }))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(created["id"], 4);
    Ok(())
}

#[tokio::test]
async fn health_reports_item_count() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = support::spawn_server(ItemStore::new()).await;
    let body: Value = reqwest::get(format!("{}/health", base_url)).await?.json().await?;
    assert_eq!(body, json!({ "status": "ok", "items": 0 }));
    Ok(())
}
