use chrono::{TimeZone, Utc};
use docfixture::storage::load_document;
use docfixture::{Document, FixtureError, PageStatus};
use tempfile::tempdir;

// A fixture as the mock server serves it, written by hand.
const HAND_WRITTEN: &str = r#"{
  "id": "7-K16813-1026-X",
  "title": "quia dolor velit",
  "description": "Nisi ut aliquid ex ea commodi.",
  "updatedAt": "2026-02-11T08:15:42.512Z",
  "createdAt": "2025-12-01T23:59:59.001Z",
  "pages": [
    {
      "id": "7-K16813-1026-X-1",
      "index": "7-1-7",
      "src": "https://images.u10.teba-saki.net/7-K16813-1026/X.png",
      "status": "PREPROCESSED",
      "updatedAt": "2026-05-05T05:05:05.005Z",
      "createdAt": "2026-04-04T04:04:04.004Z"
    }
  ]
}"#;

#[tokio::test]
async fn test_load_hand_written_fixture() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("data_7-K16813-1026-X.json");
    std::fs::write(&path, HAND_WRITTEN).unwrap();

    let document = load_document(&path).await.expect("Failed to load fixture");

    assert_eq!(document.id, "7-K16813-1026-X");
    assert_eq!(document.page_count(), 1);
    assert_eq!(
        document.updated_at,
        Utc.with_ymd_and_hms(2026, 2, 11, 8, 15, 42).unwrap() + chrono::Duration::milliseconds(512)
    );

    let page = document.page(1).unwrap();
    assert_eq!(page.status, PageStatus::Preprocessed);
    assert_eq!(page.index, "7-1-7");
}

#[test]
fn test_hand_written_fixture_round_trips_byte_for_byte() {
    let document = Document::from_json(HAND_WRITTEN).unwrap();
    assert_eq!(document.to_json_pretty().unwrap(), HAND_WRITTEN);
}

#[tokio::test]
async fn test_load_rejects_unknown_status() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("bad.json");
    std::fs::write(&path, HAND_WRITTEN.replace("PREPROCESSED", "DONE")).unwrap();

    let err = load_document(&path).await.unwrap_err();
    assert!(matches!(err, FixtureError::Json(_)));
}
