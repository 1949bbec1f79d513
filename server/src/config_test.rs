use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

const AZURE: [(&str, &str); 3] = [
    ("AZURE_STORAGE_ACCOUNT_NAME", "tutorme"),
    ("AZURE_STORAGE_CONTAINER_NAME", "uploads"),
    ("AZURE_STORAGE_SAS_TOKEN", "?sv=2022&sig=abc"),
];

#[test]
fn defaults_without_any_env() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upload_max_bytes, DEFAULT_UPLOAD_MAX_BYTES);
    assert!(cfg.blob.is_none());
}

#[test]
fn parses_port_and_upload_limit() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("UPLOAD_MAX_BYTES", "2048")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upload_max_bytes, 2048);
}

#[test]
fn bad_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn blob_config_uses_default_endpoint_and_strips_sas_prefix() {
    let blob = ServerConfig::from_lookup(lookup(&AZURE)).unwrap().blob.unwrap();
    assert_eq!(blob.account, "tutorme");
    assert_eq!(blob.endpoint, "https://tutorme.blob.core.windows.net");
    assert_eq!(blob.sas_token, "sv=2022&sig=abc");
    assert_eq!(blob.request_timeout_secs, DEFAULT_BLOB_REQUEST_TIMEOUT_SECS);
    assert_eq!(blob.container_url(), "https://tutorme.blob.core.windows.net/uploads");
}

#[test]
fn blob_endpoint_override_trims_trailing_slash() {
    let mut pairs = AZURE.to_vec();
    pairs.push(("AZURE_STORAGE_ENDPOINT", "http://127.0.0.1:10000/devstoreaccount1/"));
    pairs.push(("BLOB_REQUEST_TIMEOUT_SECS", "5"));
    let blob = ServerConfig::from_lookup(lookup(&pairs)).unwrap().blob.unwrap();
    assert_eq!(blob.container_url(), "http://127.0.0.1:10000/devstoreaccount1/uploads");
    assert_eq!(blob.request_timeout_secs, 5);
}

#[test]
fn partial_blob_config_errors() {
    let err = ServerConfig::from_lookup(lookup(&AZURE[..2])).unwrap_err();
    assert_eq!(err, ConfigError::IncompleteBlob { var: "AZURE_STORAGE_SAS_TOKEN" });
}

#[test]
fn blank_blob_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("AZURE_STORAGE_ACCOUNT_NAME", " "),
        ("AZURE_STORAGE_CONTAINER_NAME", ""),
        ("AZURE_STORAGE_SAS_TOKEN", ""),
    ]))
    .unwrap();
    assert!(cfg.blob.is_none());
}
