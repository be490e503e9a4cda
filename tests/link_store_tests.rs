//! Link store tests
//!
//! Covers both slot backends and the `url-stats` slot layout.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use quicklink::storage::{
    FileBackend, LINKS_SLOT_KEY, LinkRecord, LinkStore, MemoryBackend, SlotBackend,
};

fn record(code: &str, hour: u32) -> LinkRecord {
    LinkRecord::new(
        format!("https://example.com/{}", code),
        format!("http://localhost:3000/{}", code),
        Utc.with_ymd_and_hms(2030, 6, 1, hour, 0, 0).unwrap(),
    )
}

fn memory_store() -> (Arc<MemoryBackend>, LinkStore) {
    let backend = Arc::new(MemoryBackend::new());
    let store = LinkStore::new(backend.clone());
    (backend, store)
}

#[cfg(test)]
mod memory_backend_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_loads_nothing() {
        let (_, store) = memory_store();
        assert!(store.load_all().await.is_empty());
        assert!(store.find_by_shortcode("abc").await.is_none());
        assert_eq!(store.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_append_then_load_round_trip() {
        let (_, store) = memory_store();
        let first = vec![record("aaa", 1), record("bbb", 2)];
        store.append_all(&first).await.unwrap();

        let r = record("ccc", 3);
        store.append_all(std::slice::from_ref(&r)).await.unwrap();

        let all = store.load_all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all.last(), Some(&r));
        assert_eq!(&all[..2], &first[..]);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let (_, store) = memory_store();
        store
            .append_all(&[record("one", 1), record("two", 2)])
            .await
            .unwrap();

        let a = store.load_all().await;
        let b = store.load_all().await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_empty_append_writes_nothing() {
        let (backend, store) = memory_store();
        store.append_all(&[]).await.unwrap();
        assert!(backend.load(LINKS_SLOT_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_slot_reads_as_empty() {
        let (backend, store) = memory_store();
        backend.save(LINKS_SLOT_KEY, "{not json").await.unwrap();
        assert!(store.load_all().await.is_empty());

        // wrong shape is corruption too
        backend
            .save(LINKS_SLOT_KEY, r#"{"longUrl": "https://a.com"}"#)
            .await
            .unwrap();
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_replaces_corrupt_slot() {
        let (backend, store) = memory_store();
        backend.save(LINKS_SLOT_KEY, "garbage").await.unwrap();

        let r = record("fresh", 4);
        store.append_all(std::slice::from_ref(&r)).await.unwrap();

        assert_eq!(store.load_all().await, vec![r]);
    }

    #[tokio::test]
    async fn test_slot_uses_wire_field_names() {
        let (backend, store) = memory_store();
        store.append_all(&[record("wire", 5)]).await.unwrap();

        let raw = backend.load(LINKS_SLOT_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value.as_array().unwrap()[0];
        assert_eq!(entry["longUrl"], "https://example.com/wire");
        assert_eq!(entry["shortUrl"], "http://localhost:3000/wire");
        assert_eq!(entry["expiry"], "2030-06-01T05:00:00.000Z");
    }

    #[tokio::test]
    async fn test_reads_browser_written_slot() {
        let (backend, store) = memory_store();
        backend
            .save(
                LINKS_SLOT_KEY,
                r#"[{"longUrl":"https://a.com","shortUrl":"http://localhost:3000/k3j9x1","expiry":"2030-06-01T10:30:00.123Z"}]"#,
            )
            .await
            .unwrap();

        let found = store.find_by_shortcode("k3j9x1").await.unwrap();
        assert_eq!(found.long_url, "https://a.com");
        assert_eq!(found.expiry.timestamp_subsec_millis(), 123);
    }

    #[tokio::test]
    async fn test_find_returns_first_match() {
        let (_, store) = memory_store();
        let mut first = record("dup", 1);
        first.long_url = "https://first.example".to_string();
        let mut second = record("dup", 2);
        second.long_url = "https://second.example".to_string();
        store.append_all(&[first.clone(), second]).await.unwrap();

        assert_eq!(store.find_by_shortcode("dup").await, Some(first));
    }

    #[tokio::test]
    async fn test_find_matches_whole_segment_only() {
        let (_, store) = memory_store();
        store.append_all(&[record("abc123", 1)]).await.unwrap();

        assert!(store.find_by_shortcode("abc123").await.is_some());
        assert!(store.find_by_shortcode("c123").await.is_none());
        assert!(store.find_by_shortcode("abc").await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let (_, store) = memory_store();
        let store = Arc::new(store);

        let mut handles = Vec::new();
        for i in 0..20u32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .append_all(&[record(&format!("c{}", i), i % 24)])
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.load_all().await.len(), 20);
    }
}

#[cfg(test)]
mod file_backend_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path().join("nested"));
        assert!(backend.load(LINKS_SLOT_KEY).await.unwrap().is_none());

        let store = LinkStore::new(Arc::new(backend));
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let backend = FileBackend::new(&data_dir);

        backend.save(LINKS_SLOT_KEY, "[]").await.unwrap();

        let path = data_dir.join("url-stats.json");
        assert_eq!(backend.data_dir(), data_dir.as_path());
        assert_eq!(backend.slot_path(LINKS_SLOT_KEY), path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(!data_dir.join("url-stats.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_records_survive_new_store_instance() {
        let temp_dir = TempDir::new().unwrap();

        let r = record("persist", 7);
        {
            let store = LinkStore::new(Arc::new(FileBackend::new(temp_dir.path())));
            store.append_all(std::slice::from_ref(&r)).await.unwrap();
        }

        let store = LinkStore::new(Arc::new(FileBackend::new(temp_dir.path())));
        assert_eq!(store.backend_name(), "file");
        assert_eq!(store.load_all().await, vec![r.clone()]);
        assert_eq!(store.find_by_shortcode("persist").await, Some(r));
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("url-stats.json"), "[{]").unwrap();

        let store = LinkStore::new(Arc::new(FileBackend::new(temp_dir.path())));
        assert!(store.load_all().await.is_empty());
    }
}
