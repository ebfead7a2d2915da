mod common;

use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_add_empty_list(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/visited_links")
        .json(&json!({ "links": [] }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "status": "Empty list" }));
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_add_links(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let links = [
        "https://dzen.ru/news/quotes/1?issue_tld=ru",
        "https://vk.com/feed",
        "https://www.youtube.com/feed/subscriptions",
    ];

    let response = server
        .post("/visited_links")
        .json(&json!({ "links": links }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));

    let stored: Vec<String> = sqlx::query_scalar("SELECT link FROM visited_links ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(stored, links);
}

#[sqlx::test]
async fn test_add_links_with_blank_entry_stores_nothing(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/visited_links")
        .json(&json!({ "links": ["https://vk.com/feed", ""] }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "status": "Links must not be empty" }));
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_add_links_too_long_stores_nothing(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let too_long = format!("https://example.com/{}", "a".repeat(300));

    let response = server
        .post("/visited_links")
        .json(&json!({ "links": ["https://vk.com/feed", too_long] }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "status": "Link must not exceed 255 characters" }));
    assert_eq!(common::count_links(&pool).await, 0);
}
