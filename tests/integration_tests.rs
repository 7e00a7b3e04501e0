//! Integration tests through the public API
//!
//! Covers the engine end to end over the bundled providers, and the HTTP
//! router driven in-process with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use folder_pager::cli::router;
use folder_pager::config::PaginationSettings;
use folder_pager::{
    fetch_all, fetch_page, Error, FetchFolderPageRequest, FetchFolderRequest, Folder, FolderId,
    FolderPager, FolderProvider, InMemoryProvider, JsonFileProvider, OrgId,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;
use tower::ServiceExt;

fn org_folders(org: OrgId, count: usize) -> Vec<Folder> {
    (1..=count)
        .map(|n| Folder::new(FolderId::new_v4(), format!("F{n}"), org))
        .collect()
}

/// Two organizations with interleaved folders
fn two_orgs() -> (OrgId, OrgId, Vec<Folder>) {
    let org_a = OrgId::new_v4();
    let org_b = OrgId::new_v4();
    let a = org_folders(org_a, 4);
    let b = org_folders(org_b, 3);

    let mut all = Vec::new();
    for i in 0..4 {
        all.push(a[i].clone());
        if let Some(f) = b.get(i) {
            all.push(f.clone());
        }
    }
    (org_a, org_b, all)
}

// ============================================================================
// Engine over Providers
// ============================================================================

#[tokio::test]
async fn test_fetch_all_scoped_to_org() {
    let (org_a, org_b, all) = two_orgs();
    let provider = InMemoryProvider::new(all);

    let a = fetch_all(Some(&FetchFolderRequest::new(org_a)), &provider)
        .await
        .unwrap();
    assert_eq!(a.folders.len(), 4);
    assert!(a.folders.iter().all(|f| f.org_id == org_a));

    let b = fetch_all(Some(&FetchFolderRequest::new(org_b)), &provider)
        .await
        .unwrap();
    let names: Vec<&str> = b.folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["F1", "F2", "F3"]);
}

#[tokio::test]
async fn test_page_chain_over_json_file() {
    let (org_a, _, all) = two_orgs();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(&all).unwrap().as_bytes())
        .unwrap();
    let provider = JsonFileProvider::new(file.path());

    let first = fetch_page(Some(&FetchFolderPageRequest::new(org_a, 2)), &provider)
        .await
        .unwrap();
    let names: Vec<&str> = first.folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["F1", "F2"]);

    let request = FetchFolderPageRequest::new(org_a, 2).starting_at(first.next);
    let second = fetch_page(Some(&request), &provider).await.unwrap();
    let names: Vec<&str> = second.folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["F3", "F4"]);
    assert!(second.is_last());
}

#[tokio::test]
async fn test_cursor_vanishes_between_calls() {
    let org = OrgId::new_v4();
    let data = org_folders(org, 4);

    let before = InMemoryProvider::new(data.clone());
    let first = fetch_page(Some(&FetchFolderPageRequest::new(org, 2)), &before)
        .await
        .unwrap();
    let cursor = first.next.unwrap();

    // The folder the cursor names is gone from the next snapshot.
    let after = InMemoryProvider::new(data.into_iter().filter(|f| f.id != cursor).collect());
    let request = FetchFolderPageRequest::new(org, 2).starting_at(Some(cursor));
    let result = fetch_page(Some(&request), &after).await;
    assert!(matches!(result, Err(Error::InvalidCursor { .. })));
}

#[tokio::test]
async fn test_pager_shared_across_tasks() {
    let org = OrgId::new_v4();
    let data = org_folders(org, 9);
    let provider: Arc<dyn FolderProvider> = Arc::new(InMemoryProvider::new(data.clone()));
    let pager = Arc::new(FolderPager::new(provider));

    let handles: Vec<_> = (1..=4)
        .map(|size| {
            let pager = Arc::clone(&pager);
            tokio::spawn(async move { pager.walk(org, size, None).await })
        })
        .collect();

    for handle in handles {
        let pages = handle.await.unwrap().unwrap();
        let flattened: Vec<Folder> = pages.into_iter().flat_map(|p| p.folders).collect();
        assert_eq!(flattened, data);
    }
}

// ============================================================================
// HTTP Router
// ============================================================================

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn app(folders: Vec<Folder>) -> axum::Router {
    router(
        Arc::new(InMemoryProvider::new(folders)),
        PaginationSettings {
            default_page_size: 2,
            max_page_size: 3,
        },
    )
}

#[tokio::test]
async fn test_http_health() {
    let (status, body) = get_json(app(Vec::new()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_http_list_folders() {
    let (org_a, _, all) = two_orgs();

    let (status, body) = get_json(app(all), &format!("/orgs/{org_a}/folders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["folders"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_http_page_chain() {
    let org = OrgId::new_v4();
    let data = org_folders(org, 3);

    let (status, body) = get_json(app(data.clone()), &format!("/orgs/{org}/folders/page")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["folders"].as_array().unwrap().len(), 2);
    let next = body["data"]["next"].as_str().unwrap().to_string();
    assert_eq!(next, data[2].id.to_string());

    let uri = format!("/orgs/{org}/folders/page?size=3&starting_at={next}");
    let (status, body) = get_json(app(data), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["folders"][0]["name"], "F3");
    assert!(body["data"]["next"].is_null());
}

#[tokio::test]
async fn test_http_size_zero_points_at_start() {
    let org = OrgId::new_v4();
    let data = org_folders(org, 3);

    let uri = format!("/orgs/{org}/folders/page?size=0");
    let (status, body) = get_json(app(data.clone()), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["folders"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["next"], data[0].id.to_string());
}

#[tokio::test]
async fn test_http_client_errors() {
    let org = OrgId::new_v4();
    let data = org_folders(org, 3);

    let uri = format!("/orgs/{org}/folders/page?starting_at={}", FolderId::new_v4());
    let (status, body) = get_json(app(data.clone()), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Cursor"));

    let uri = format!("/orgs/{org}/folders/page?size=4");
    let (status, _) = get_json(app(data.clone()), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(app(data), "/orgs/not-a-uuid/folders").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_http_provider_failure() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(JsonFileProvider::new(dir.path().join("missing.json")));
    let app = router(provider, PaginationSettings::default());

    let (status, body) = get_json(app, &format!("/orgs/{}/folders", OrgId::new_v4())).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("missing.json"));
}

#[tokio::test]
async fn test_http_nil_org_is_listable() {
    let nil = OrgId::from_uuid(uuid::Uuid::nil());
    let data = org_folders(nil, 2);

    let (status, body) = get_json(app(data), &format!("/orgs/{nil}/folders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["folders"].as_array().unwrap().len(), 2);
}
