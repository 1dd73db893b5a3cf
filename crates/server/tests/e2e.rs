use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Each test gets its own store and listener on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::in_memory("aoi");
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = server::startup::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_get_returns_body_unchanged() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let payload = json!({"item": "My item", "tags": ["a", "b"], "meta": {"n": 1}});

    let res = c.post(app.url("/items")).json(&payload).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created, json!({"id": 1, "item": payload}));

    let res = c.get(app.url("/items/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, payload);
    Ok(())
}

#[tokio::test]
async fn e2e_list_items_keyed_by_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(app.url("/items")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({}));

    c.post(app.url("/items")).json(&json!({"a": 1})).send().await?;
    c.post(app.url("/items")).json(&json!({"b": 2})).send().await?;

    let body = c.get(app.url("/items")).send().await?.json::<Value>().await?;
    assert_eq!(body, json!({"1": {"a": 1}, "2": {"b": 2}}));
    Ok(())
}

#[tokio::test]
async fn e2e_missing_item_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let not_found = json!({"error": "Item not found"});

    let res = c.get(app.url("/items/42")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, not_found);

    let res = c.patch(app.url("/items/42")).json(&json!({"k": "v"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, not_found);

    let res = c.delete(app.url("/items/42")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, not_found);

    let res = c.delete(app.url("/tasks/42")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, not_found);
    Ok(())
}

#[tokio::test]
async fn e2e_patch_merges_without_removing_keys() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    c.post(app.url("/items")).json(&json!({"a": 1, "k": "old"})).send().await?;

    let res = c.patch(app.url("/items/1")).json(&json!({"k": "v", "new": true})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let expected = json!({"a": 1, "k": "v", "new": true});
    assert_eq!(res.json::<Value>().await?, expected);

    let stored = c.get(app.url("/items/1")).send().await?.json::<Value>().await?;
    assert_eq!(stored, expected);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_item_then_recreate_does_not_overwrite() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let a = c
        .post(app.url("/items"))
        .json(&json!({"name": "A"}))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let b = c
        .post(app.url("/items"))
        .json(&json!({"name": "B"}))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!((a["id"].clone(), b["id"].clone()), (json!(1), json!(2)));

    let res = c.delete(app.url("/items/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Item deleted"}));

    let created = c
        .post(app.url("/items"))
        .json(&json!({"name": "C"}))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(created["id"], 3);

    let b_now = c.get(app.url("/items/2")).send().await?.json::<Value>().await?;
    assert_eq!(b_now, json!({"name": "B"}));
    let res = c.get(app.url("/items/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_put_and_delete_task() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.put(app.url("/tasks")).json(&json!({"x": 1})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?, json!({"id": 1, "tasks": {"x": 1}}));

    // tasks and items allocate ids independently
    let item = c.post(app.url("/items")).json(&json!({})).send().await?.json::<Value>().await?;
    assert_eq!(item["id"], 1);

    let res = c.delete(app.url("/tasks/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Task deleted"}));

    let res = c.delete(app.url("/tasks/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_change_name_echoes_latest_value() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let current = c.get(app.url("/name")).send().await?.json::<Value>().await?;
    assert_eq!(current, json!({"Name": "aoi"}));

    let res = c.patch(app.url("/name")).json(&json!({"Name": "Foo"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"Name": "Foo"}));

    let res = c.patch(app.url("/name")).json(&json!({"Name": "Matheus"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"Name": "Matheus"}));

    let current = c.get(app.url("/name")).send().await?.json::<Value>().await?;
    assert_eq!(current, json!({"Name": "Matheus"}));
    Ok(())
}

#[tokio::test]
async fn e2e_change_name_without_key_is_server_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.patch(app.url("/name")).json(&json!({"name": "wrong case"})).send().await?;
    let status = res.status();
    assert!(status.is_server_error(), "unexpected status {status}");
    let body = res.json::<Value>().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("Name"));

    let current = c.get(app.url("/name")).send().await?.json::<Value>().await?;
    assert_eq!(current, json!({"Name": "aoi"}));
    Ok(())
}

#[tokio::test]
async fn e2e_non_integer_id_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/items/abc")).send().await?;
    assert!(res.status().is_client_error());
    Ok(())
}

#[tokio::test]
async fn e2e_non_object_bodies_are_unprocessable() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(app.url("/items")).json(&json!([1, 2, 3])).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

    let res = c.put(app.url("/tasks")).json(&json!(1)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

    // rejected bodies never reach the store
    let items = c.get(app.url("/items")).send().await?.json::<Value>().await?;
    assert_eq!(items, json!({}));
    let res = c.put(app.url("/tasks")).json(&json!({"x": 1})).send().await?;
    assert_eq!(res.json::<Value>().await?["id"], 1);
    Ok(())
}

#[tokio::test]
async fn e2e_change_name_with_non_string_is_server_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.patch(app.url("/name")).json(&json!({"Name": 7})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("Name"));

    let current = c.get(app.url("/name")).send().await?.json::<Value>().await?;
    assert_eq!(current, json!({"Name": "aoi"}));
    Ok(())
}
