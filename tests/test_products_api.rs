//! End-to-end product API flow against an in-process server on an ephemeral port.

use reqwest::StatusCode;
use serde_json::{json, Value as JsonValue};
use storefront_api::transport::http::{create_router, ApiResponse, AppState};
use storefront_api::AppConfig;

const KEY: &str = "secret-api-key-123";

async fn spawn_api() -> Result<String, Box<dyn std::error::Error>> {
    let router = create_router(AppState::seeded(AppConfig::default()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

fn ids(data: &JsonValue) -> Vec<u64> {
    data.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_then_list_then_delete() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await?;
    let client = reqwest::Client::new();

    let before: ApiResponse = client
        .get(format!("{}/api/products", base_url))
        .header("X-API-Key", KEY)
        .send()
        .await?
        .json()
        .await?;
    let previous_count = before.data.as_ref().unwrap().as_array().unwrap().len() as u64;

    // --- CREATE ---
    let resp = client
        .post(format!("{}/api/products", base_url))
        .header("X-API-Key", KEY)
        .json(&json!({ "name": "Mouse", "description": "Wireless", "price": 100 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: ApiResponse = resp.json().await?;
    assert!(created.success);
    assert_eq!(created.message, "product added");
    let product = created.data.unwrap();
    assert_eq!(product["id"], json!(previous_count + 1));
    assert_eq!(product["name"], "Mouse");
    assert_eq!(product["price"], json!(100.0));

    // --- GET BY ID returns exactly the stored record ---
    let resp = client
        .get(format!("{}/api/products/{}", base_url, previous_count + 1))
        .header("X-API-Key", KEY)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: ApiResponse = resp.json().await?;
    assert_eq!(fetched.data.unwrap(), product);

    // --- DELETE returns the pre-delete snapshot ---
    let resp = client
        .delete(format!("{}/api/products/2", base_url))
        .header("X-API-Key", KEY)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: ApiResponse = resp.json().await?;
    let snapshot = deleted.data.unwrap();
    assert_eq!(snapshot["id"], 2);
    assert_eq!(snapshot["name"], "Keyboard Mekanikal");

    let after: ApiResponse = client
        .get(format!("{}/api/products", base_url))
        .header("X-API-Key", KEY)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(ids(after.data.as_ref().unwrap()), vec![1, 3, 4]);

    // --- DELETE again: 404 envelope ---
    let resp = client
        .delete(format!("{}/api/products/2", base_url))
        .header("X-API-Key", KEY)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ApiResponse = resp.json().await?;
    assert!(!body.success);
    assert_eq!(body.message, "product not found");

    Ok(())
}

#[tokio::test]
async fn test_unknown_id_lookup_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await?;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/products/999", base_url))
        .header("X-API-Key", KEY)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ApiResponse = resp.json().await?;
    assert!(!body.success);
    assert!(body.message.contains("not found"));
    // Not development mode: no stack exposed.
    assert!(body.errors.is_none());

    let resp = client
        .get(format!("{}/api/products/abc", base_url))
        .header("X-API-Key", KEY)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["message"], "validation failed");
    assert_eq!(body["errors"][0]["field"], "id");

    Ok(())
}

#[tokio::test]
async fn test_validation_failures() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await?;
    let client = reqwest::Client::new();

    // Missing name, non-numeric and non-positive price, all reported together.
    let resp = client
        .post(format!("{}/api/products", base_url))
        .header("X-API-Key", KEY)
        .json(&json!({ "description": "Wireless", "price": "abc" }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: JsonValue = resp.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "validation failed");
    assert!(body.get("data").is_none());
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "name", "price", "price"]);

    // Zero price on update: price entry even though price is numeric.
    let resp = client
        .put(format!("{}/api/products/1", base_url))
        .header("X-API-Key", KEY)
        .json(&json!({ "name": "Laptop", "description": "Fast", "price": 0 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: JsonValue = resp.json().await?;
    assert_eq!(
        body["errors"],
        json!([{ "field": "price", "message": "price must be greater than 0" }])
    );

    // Update without a name: the name rules run on PUT as on POST.
    let resp = client
        .put(format!("{}/api/products/1", base_url))
        .header("X-API-Key", KEY)
        .json(&json!({ "description": "Fast", "price": 10 }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: JsonValue = resp.json().await?;
    assert_eq!(
        body["errors"],
        json!([
            { "field": "name", "message": "product name is required" },
            { "field": "name", "message": "product name must be at least 3 characters" }
        ])
    );

    // Nothing was created.
    let list: ApiResponse = client
        .get(format!("{}/api/products", base_url))
        .header("X-API-Key", KEY)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(ids(list.data.as_ref().unwrap()), vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_update_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await?;
    let client = reqwest::Client::new();
    let body = json!({ "nama": "  Laptop Pro  ", "deskripsi": "Intel i9", "harga": "20000000" });

    let mut states = Vec::new();
    for _ in 0..2 {
        let resp = client
            .put(format!("{}/api/products/1", base_url))
            .header("X-API-Key", KEY)
            .json(&body)
            .send()
            .await?;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: ApiResponse = client
            .get(format!("{}/api/products/1", base_url))
            .header("X-API-Key", KEY)
            .send()
            .await?
            .json()
            .await?;
        states.push(fetched.data.unwrap());
    }

    assert_eq!(states[0], states[1]);
    assert_eq!(
        states[0],
        json!({ "id": 1, "name": "Laptop Pro", "description": "Intel i9", "price": 20000000.0 })
    );

    let resp = client
        .put(format!("{}/api/products/42", base_url))
        .header("X-API-Key", KEY)
        .json(&body)
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_search_filters() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await?;
    let client = reqwest::Client::new();

    let search = |query: &'static str| {
        let client = client.clone();
        let url = format!("{}/api/search{}", base_url, query);
        async move {
            let resp = client.get(url).header("X-API-Key", KEY).send().await?;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: ApiResponse = resp.json().await?;
            Ok::<Vec<u64>, reqwest::Error>(ids(body.data.as_ref().unwrap()))
        }
    };

    assert_eq!(search("?name=mouse").await?, vec![3]);
    assert_eq!(search("?max_price=800000").await?, vec![2, 3]);
    assert_eq!(search("?name=o&max_price=800000").await?, vec![2, 3]);
    assert_eq!(search("?name=laptop&max_price=100").await?, Vec::<u64>::new());
    assert_eq!(search("").await?, vec![1, 2, 3]);

    Ok(())
}
