use super::*;

fn test_client(base_url: &str) -> SupplierClient {
    SupplierClient::new(base_url, 5, "supplierdb-test/0.1").expect("client construction should not fail")
}

#[test]
fn base_url_gets_single_trailing_slash() {
    let client = test_client("http://localhost:8800//");
    assert_eq!(client.base_url.as_str(), "http://localhost:8800/");
}

#[test]
fn item_url_appends_id_segment() {
    let client = test_client("http://localhost:8800");
    assert_eq!(
        client.item_url("42").unwrap().as_str(),
        "http://localhost:8800/42"
    );
}

#[test]
fn item_url_keeps_base_path() {
    let client = test_client("https://api.example.com/suppliers/");
    assert_eq!(
        client.item_url("42").unwrap().as_str(),
        "https://api.example.com/suppliers/42"
    );
}

#[test]
fn item_url_encodes_id_as_one_segment() {
    let client = test_client("http://localhost:8800");
    let url = client.item_url("a/b c").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8800/a%2Fb%20c");
}

#[test]
fn rejects_non_http_base_url() {
    assert!(matches!(
        SupplierClient::new("not a url", 5, "ua"),
        Err(ClientError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        SupplierClient::new("mailto:someone@example.com", 5, "ua"),
        Err(ClientError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn record_fields_are_recognised_only_on_objects() {
    use serde_json::json;

    assert!(carries_record_fields(&json!({"id": "42", "name": "Bruno"})));
    assert!(carries_record_fields(&json!({"typeFornecedor": "Atacadista"})));
    assert!(!carries_record_fields(&json!({"message": "updated"})));
    assert!(!carries_record_fields(&json!({"id": "42"})));
    assert!(!carries_record_fields(&json!("Usuário atualizado com sucesso.")));
    assert!(!carries_record_fields(&json!([{"name": "Bruno"}])));
}
