mod common;

use chrono::Utc;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::collections::HashSet;

fn domains_of(body: &Value) -> HashSet<String> {
    body["domains"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test]
async fn test_get_domains_without_params(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/visited_domains").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "status": "Parameters 'from' and 'to' are required" }));
}

#[sqlx::test]
async fn test_get_domains_with_wrong_params(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .get("/visited_domains")
        .add_query_param("from", "2024-01-24T09:00:34Z")
        .add_query_param("to", "2024-01-24T10:00:34Z")
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "status": "Values of parameters must be timestamps" }));
}

#[sqlx::test]
async fn test_get_domains_with_from_greater(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/visited_domains?from=100&to=1").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "status": "Parameter 'from' is greater than parameter 'to'" }));
}

#[sqlx::test]
async fn test_get_domains_ok(pool: PgPool) {
    let server = common::make_server(pool);

    let time_before = Utc::now().timestamp() - 1;
    server
        .post("/visited_links")
        .json(&json!({
            "links": [
                "https://ya.ru/",
                "https://ya.ru/search/?text=мемы+с+котиками",
                "https://sber.ru",
                "https://stackoverflow.com/questions/65724760/how-it-is",
                "https://www.stackoverflow.com/"
            ]
        }))
        .await
        .assert_status_ok();
    let time_after = Utc::now().timestamp() + 1;

    let response = server
        .get("/visited_domains")
        .add_query_param("from", time_before)
        .add_query_param("to", time_after)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");

    let expected: HashSet<String> = ["ya.ru", "sber.ru", "stackoverflow.com"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(domains_of(&body), expected);
    assert_eq!(body["domains"].as_array().unwrap().len(), 3);
}

#[sqlx::test]
async fn test_www_and_bare_host_collapse(pool: PgPool) {
    let server = common::make_server(pool);

    let time_before = Utc::now().timestamp() - 1;
    server
        .post("/visited_links")
        .json(&json!({
            "links": ["https://www.stackoverflow.com/", "https://stackoverflow.com/q/1"]
        }))
        .await
        .assert_status_ok();
    let time_after = Utc::now().timestamp() + 1;

    let response = server
        .get("/visited_domains")
        .add_query_param("from", time_before)
        .add_query_param("to", time_after)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "domains": ["stackoverflow.com"], "status": "ok" }));
}

#[sqlx::test]
async fn test_repeated_query_returns_same_domains(pool: PgPool) {
    common::insert_link_at(&pool, "https://dzen.ru/x", common::at(1_000)).await;
    common::insert_link_at(&pool, "https://vk.com/feed", common::at(1_001)).await;
    let server = common::make_server(pool);

    let first = server
        .get("/visited_domains?from=1000&to=1001")
        .await
        .json::<Value>();
    let second = server
        .get("/visited_domains?from=1000&to=1001")
        .await
        .json::<Value>();

    assert_eq!(domains_of(&first), domains_of(&second));
    assert_eq!(domains_of(&first).len(), 2);
}

#[sqlx::test]
async fn test_window_excludes_other_visits(pool: PgPool) {
    common::insert_link_at(&pool, "https://old.com", common::at(10)).await;
    common::insert_link_at(&pool, "https://inside.com", common::at(20)).await;
    let server = common::make_server(pool);

    let response = server.get("/visited_domains?from=20&to=20").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "domains": ["inside.com"], "status": "ok" }));
}

#[sqlx::test]
async fn test_unparsable_link_yields_empty_domain(pool: PgPool) {
    common::insert_link_at(&pool, "not a url", common::at(30)).await;
    common::insert_link_at(&pool, "https://sber.ru", common::at(30)).await;
    let server = common::make_server(pool);

    let response = server.get("/visited_domains?from=30&to=30").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "domains": ["", "sber.ru"], "status": "ok" }));
}
