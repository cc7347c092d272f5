use httpmock::prelude::*;
use scalingo_konnector::{
    FolderPersistence, KonnectorEngine, KonnectorError, ResolvedConfig, ScalingoConnector,
};

fn config(server: &MockServer, folder_path: &str) -> ResolvedConfig {
    ResolvedConfig {
        token: "secret".to_string(),
        folder_path: folder_path.to_string(),
        auth_endpoint: server.url("/v1/tokens/exchange"),
        invoices_endpoint: server.url("/v1/account/invoices"),
    }
}

fn engine(
    server: &MockServer,
    folder_path: &str,
) -> KonnectorEngine<ScalingoConnector<FolderPersistence, ResolvedConfig>> {
    let connector =
        ScalingoConnector::new(FolderPersistence::new(), config(server, folder_path)).unwrap();
    KonnectorEngine::new(connector)
}

fn mock_auth(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1/tokens/exchange")
            .header_exists("authorization");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"token": "bearer-123"}));
    })
}

#[tokio::test]
async fn test_full_run_saves_normalized_bills() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("bills");

    let auth_mock = mock_auth(&server);
    let invoices_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/account/invoices")
            .header("authorization", "Bearer bearer-123");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "invoices": [
                    {
                        "invoice_number": "INV-1",
                        "total_price_with_vat": 42.5,
                        "pdf_url": "https://x/1.pdf",
                        "billing_month": "2023-01"
                    },
                    {
                        "invoice_number": "INV-2",
                        "billing_month": "2023-02"
                    }
                ]
            }));
    });

    let saved = engine(&server, folder.to_str().unwrap())
        .run("secret")
        .await
        .unwrap();

    auth_mock.assert();
    invoices_mock.assert();
    assert_eq!(saved, 2);

    let raw = std::fs::read_to_string(folder.join("bills.json")).unwrap();
    let bills: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let documents = bills["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 2);

    assert_eq!(documents[0]["title"], "INV-1");
    assert_eq!(documents[0]["amount"], 42.5);
    assert_eq!(documents[0]["fileurl"], "https://x/1.pdf");
    assert_eq!(documents[0]["filename"], "2023-01.pdf");
    assert_eq!(documents[0]["date"], "2023-01");
    assert_eq!(documents[0]["currency"], "€");
    assert_eq!(documents[0]["vendor"], "template");
    assert_eq!(documents[0]["metadata"]["version"], 1);
    assert!(documents[0]["metadata"]["importDate"].is_string());

    // the sparse invoice keeps its absent attributes absent
    let sparse = documents[1].as_object().unwrap();
    assert_eq!(sparse["title"], "INV-2");
    assert!(!sparse.contains_key("amount"));
    assert!(!sparse.contains_key("fileurl"));
    assert_eq!(sparse["filename"], "2023-02.pdf");

    assert_eq!(bills["options"]["identifiers"][0], "magic");
}

#[tokio::test]
async fn test_full_run_with_empty_invoice_list() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("bills");

    mock_auth(&server);
    server.mock(|when, then| {
        when.method(GET).path("/v1/account/invoices");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"invoices": []}));
    });

    let saved = engine(&server, folder.to_str().unwrap())
        .run("secret")
        .await
        .unwrap();

    assert_eq!(saved, 0);
    let raw = std::fs::read_to_string(folder.join("bills.json")).unwrap();
    let bills: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(bills["documents"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_failed_token_exchange_aborts_before_persistence() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("bills");

    server.mock(|when, then| {
        when.method(POST).path("/v1/tokens/exchange");
        then.status(401);
    });

    let err = engine(&server, folder.to_str().unwrap())
        .run("bad-token")
        .await
        .unwrap_err();

    assert!(matches!(err, KonnectorError::Authentication { .. }));
    assert!(!folder.exists());
}

#[tokio::test]
async fn test_failed_invoice_listing_aborts_before_persistence() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("bills");

    mock_auth(&server);
    server.mock(|when, then| {
        when.method(GET).path("/v1/account/invoices");
        then.status(500);
    });

    let err = engine(&server, folder.to_str().unwrap())
        .run("secret")
        .await
        .unwrap_err();

    assert!(matches!(err, KonnectorError::Fetch { .. }));
    assert!(!folder.exists());
}

#[tokio::test]
async fn test_token_exchange_without_token_field_aborts() {
    let server = MockServer::start();
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("bills");

    server.mock(|when, then| {
        when.method(POST).path("/v1/tokens/exchange");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "tk-1"}));
    });

    let err = engine(&server, folder.to_str().unwrap())
        .run("secret")
        .await
        .unwrap_err();

    assert!(matches!(err, KonnectorError::Authentication { .. }));
    assert!(!folder.exists());
}
