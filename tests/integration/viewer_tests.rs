//! Integration tests for the viewer HTTP provider
//!
//! Each test serves exactly one canned HTTP response from a local socket and
//! inspects the request the client sent.

use crate::common::{DATABASE, caret, texts};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use yql_suggest::CatalogError;
use yql_suggest::catalog::{
    AutocompleteRequest, CatalogProvider, EntityType, ViewerClient, fetch_entities,
};
use yql_suggest::config::{Settings, ViewerEndpoint};
use yql_suggest::context::ParsedContext;
use yql_suggest::suggest::{SuggestRequest, Suggester};

const ENTITIES: &str = r#"{
    "Success": true,
    "Result": {
        "Entities": [
            {"Name": "orders", "Type": "table"},
            {"Name": "shop", "Type": "dir"}
        ],
        "Total": 2
    }
}"#;

/// Serve one response; the handle yields the raw request text
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 16 * 1024];
        let n = socket.read(&mut buf).await.unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).into_owned();

        let response = format!(
            "HTTP/1.1 {}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}", addr), handle)
}

fn client(base: &str, token: Option<&str>) -> ViewerClient {
    ViewerClient::with_url(
        format!("{}/viewer/json/autocomplete", base),
        Duration::from_secs(5),
        token,
    )
    .unwrap()
}

#[tokio::test]
async fn test_prefix_lookup() {
    let (base, server) = serve_once("200 OK", ENTITIES).await;
    let client = client(&base, Some("OAuth t0k"));

    let response = client
        .autocomplete(&AutocompleteRequest::by_prefix(DATABASE, "shop/", 1000))
        .await
        .unwrap();
    let entities = response.into_entities().unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[1].entity_type, EntityType::Dir);

    let request = server.await.unwrap();
    let request_line = request.lines().next().unwrap();
    assert!(request_line.starts_with("GET /viewer/json/autocomplete?"));
    assert!(request_line.contains("database=%2Flocal"));
    assert!(request_line.contains("prefix=shop%2F"));
    assert!(request_line.contains("limit=1000"));
    assert!(!request_line.contains("table="));
    assert!(request.to_lowercase().contains("authorization: oauth t0k"));
}

#[tokio::test]
async fn test_table_lookup() {
    let body = r#"{"Success": true, "Result": {"Entities": []}}"#;
    let (base, server) = serve_once("200 OK", body).await;
    let client = client(&base, None);

    let request = AutocompleteRequest::by_tables(
        DATABASE,
        vec!["orders/".to_string(), "shop/items/".to_string()],
        50,
    );
    let entities = fetch_entities(&client, &request).await.unwrap();
    assert!(entities.is_empty());

    let request = server.await.unwrap();
    let request_line = request.lines().next().unwrap();
    assert!(request_line.contains("table=orders%2F%2Cshop%2Fitems%2F"));
    assert!(request_line.contains("limit=50"));
    assert!(!request_line.contains("prefix="));
    assert!(!request.to_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn test_endpoint_from_settings() {
    let (base, server) = serve_once("200 OK", ENTITIES).await;
    let settings = Settings {
        endpoint: ViewerEndpoint::from_url(&base).unwrap(),
        ..Settings::default()
    };
    let client = ViewerClient::new(&settings).unwrap();
    assert_eq!(client.url(), format!("{}/viewer/json/autocomplete", base));

    client
        .autocomplete(&AutocompleteRequest::by_prefix(DATABASE, "", 10))
        .await
        .unwrap();
    server.await.unwrap();
}

#[tokio::test]
async fn test_http_error_status() {
    let (base, server) = serve_once("500 Internal Server Error", "{}").await;
    let client = client(&base, None);

    let result = client
        .autocomplete(&AutocompleteRequest::by_prefix(DATABASE, "", 10))
        .await;
    assert!(matches!(result, Err(CatalogError::Status(500))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_malformed_body() {
    let (base, server) = serve_once("200 OK", "<html>not json</html>").await;
    let client = client(&base, None);

    let result = client
        .autocomplete(&AutocompleteRequest::by_prefix(DATABASE, "", 10))
        .await;
    assert!(matches!(result, Err(CatalogError::Decode(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        drop(socket);
    });

    let client = ViewerClient::with_url(
        format!("http://{}/viewer/json/autocomplete", addr),
        Duration::from_millis(100),
        None,
    )
    .unwrap();
    let result = client
        .autocomplete(&AutocompleteRequest::by_prefix(DATABASE, "", 10))
        .await;
    assert!(matches!(result, Err(CatalogError::Timeout)));
    server.abort();
}

#[tokio::test]
async fn test_suggest_over_http() {
    let (base, server) = serve_once("200 OK", ENTITIES).await;
    let suggester = Suggester::new(client(&base, None));
    let ctx = ParsedContext::from_json(r#"{"suggestEntity": ["table"]}"#).unwrap();

    let items = suggester
        .suggest(&ctx, &SuggestRequest::new(caret(), DATABASE))
        .await;

    assert_eq!(texts(&items), ["orders", "`shop/$0`"]);
    server.await.unwrap();
}

#[tokio::test]
async fn test_rejected_lookup_suggests_nothing() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"Success": false, "Error": ["Path does not exist"]}"#,
    )
    .await;
    let suggester = Suggester::new(client(&base, None));
    let ctx = ParsedContext::from_json(
        r#"{"suggestEntity": ["table"], "suggestKeywords": [{"value": "SELECT"}]}"#,
    )
    .unwrap();

    let items = suggester
        .suggest(&ctx, &SuggestRequest::new(caret(), DATABASE))
        .await;

    assert_eq!(texts(&items), ["SELECT"]);
    server.await.unwrap();
}
