//! Tests for provider module

use super::*;
use crate::error::Error;
use crate::types::FolderId;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample(orgs: &[OrgId]) -> Vec<Folder> {
    // Interleave organizations so filtering has to preserve relative order.
    (0..6)
        .map(|n| {
            let org = orgs[n % orgs.len()];
            Folder::new(FolderId::new_v4(), format!("folder-{n}"), org)
        })
        .collect()
}

// ============================================================================
// InMemoryProvider Tests
// ============================================================================

#[tokio::test]
async fn test_in_memory_filters_by_org() {
    let org_a = OrgId::new_v4();
    let org_b = OrgId::new_v4();
    let data = sample(&[org_a, org_b]);
    let provider = InMemoryProvider::new(data.clone());

    let folders = provider.fetch_all_by_organization(org_a).await.unwrap();
    let expected: Vec<Folder> = data.iter().filter(|f| f.org_id == org_a).cloned().collect();
    assert_eq!(folders, expected);
    assert_eq!(folders.len(), 3);
    assert_eq!(provider.len(), 6);
}

#[tokio::test]
async fn test_in_memory_unknown_org_is_empty() {
    let provider: InMemoryProvider = sample(&[OrgId::new_v4()]).into_iter().collect();

    let folders = provider
        .fetch_all_by_organization(OrgId::new_v4())
        .await
        .unwrap();
    assert!(folders.is_empty());
}

#[tokio::test]
async fn test_arc_provider_delegates() {
    let org = OrgId::new_v4();
    let provider: Arc<dyn FolderProvider> = Arc::new(InMemoryProvider::new(sample(&[org])));

    let folders = provider.fetch_all_by_organization(org).await.unwrap();
    assert_eq!(folders.len(), 6);
}

// ============================================================================
// JsonFileProvider Tests
// ============================================================================

#[tokio::test]
async fn test_json_file_provider_reads_and_filters() {
    let org_a = OrgId::new_v4();
    let org_b = OrgId::new_v4();
    let data = sample(&[org_a, org_b]);

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&data).unwrap().as_bytes())
        .unwrap();

    let provider = JsonFileProvider::new(file.path());
    let folders = provider.fetch_all_by_organization(org_b).await.unwrap();
    let expected: Vec<Folder> = data.into_iter().filter(|f| f.org_id == org_b).collect();
    assert_eq!(folders, expected);
}

#[tokio::test]
async fn test_json_file_provider_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let provider = JsonFileProvider::new(dir.path().join("missing.json"));

    let err = provider.load().await.unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));

    let err = provider
        .fetch_all_by_organization(OrgId::new_v4())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[tokio::test]
async fn test_json_file_provider_bad_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    let provider = JsonFileProvider::new(file.path());
    let err = provider.load().await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}
