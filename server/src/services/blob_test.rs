use super::*;

fn config() -> BlobConfig {
    BlobConfig {
        account: "tutorme".into(),
        container: "uploads".into(),
        sas_token: "sv=2022&sig=abc".into(),
        endpoint: "https://tutorme.blob.core.windows.net".into(),
        request_timeout_secs: 5,
    }
}

#[test]
fn blob_key_prefixes_timestamp() {
    assert_eq!(blob_key(1_700_000_000_123, "past-paper.pdf"), "1700000000123-past-paper.pdf");
}

#[test]
fn blob_key_now_is_timestamp_prefixed() {
    let key = blob_key_now("cover.png");
    let (millis, name) = key.split_once('-').unwrap();
    assert!(millis.parse::<i128>().unwrap() > 1_600_000_000_000);
    assert_eq!(name, "cover.png");
}

#[test]
fn sanitize_replaces_unsafe_characters() {
    assert_eq!(sanitize_file_name("Grade 10 Maths (2023).pdf"), "Grade_10_Maths__2023_.pdf");
}

#[test]
fn sanitize_drops_directories_and_leading_dots() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_file_name("C:\\Users\\me\\notes.txt"), "notes.txt");
    assert_eq!(sanitize_file_name(".env"), "env");
}

#[test]
fn sanitize_falls_back_when_empty() {
    assert_eq!(sanitize_file_name(""), "file");
    assert_eq!(sanitize_file_name("uploads/"), "file");
    assert_eq!(sanitize_file_name("..."), "file");
}

#[test]
fn public_url_excludes_sas_token() {
    let store = AzureBlobStore::new(&config()).unwrap();
    let url = store.public_url("1-a.pdf");
    assert_eq!(url, "https://tutorme.blob.core.windows.net/uploads/1-a.pdf");
    assert!(!url.contains("sig="));
}

#[test]
fn blob_error_messages() {
    let err = BlobError::Rejected { status: 403, body: "AuthenticationFailed".into() };
    assert_eq!(err.to_string(), "blob store returned 403: AuthenticationFailed");
}
