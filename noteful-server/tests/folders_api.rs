//! Folder endpoints driven through the full router

mod common;

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use common::{app, create_folder, create_note, send};

#[tokio::test]
async fn create_and_list_folders() {
    let app = app();

    let res = send(
        &app,
        Method::POST,
        "/api/noteful/folders",
        Some(json!({ "folder_name": "Important" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body, json!({ "id": 1, "folder_name": "Important" }));
    assert_eq!(
        res.headers[header::LOCATION].to_str().unwrap(),
        "/api/noteful/folder/1"
    );

    create_folder(&app, "Super").await;
    let res = send(&app, Method::GET, "/api/noteful/folders", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!([
            { "id": 1, "folder_name": "Important" },
            { "id": 2, "folder_name": "Super" },
        ])
    );
}

#[tokio::test]
async fn create_without_name_is_400() {
    let app = app();
    let res = send(&app, Method::POST, "/api/noteful/folders", Some(json!({}))).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body,
        json!({ "error": { "message": "Missing 'folder_name' in request body" } })
    );
}

#[tokio::test]
async fn get_folder_escapes_name() {
    let app = app();
    let id = create_folder(&app, "<img src=x onerror=alert(1)>").await;

    let res = send(&app, Method::GET, &format!("/api/noteful/folder/{}", id), None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "id": id, "folder_name": "&lt;img src=x onerror=alert(1)&gt;" })
    );
}

#[tokio::test]
async fn unknown_folder_is_404() {
    let app = app();
    for method in [Method::GET, Method::DELETE] {
        let res = send(&app, method, "/api/noteful/folder/999", None).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.body, json!({ "error": { "message": "Folder doesn't exist" } }));
    }
}

#[tokio::test]
async fn patch_unknown_folder_is_404() {
    let app = app();
    let res = send(
        &app,
        Method::PATCH,
        "/api/noteful/folder/999",
        Some(json!({ "folder_name": "New" })),
    )
    .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": { "message": "Folder doesn't exist" } }));
}

#[tokio::test]
async fn patch_renames_folder() {
    let app = app();
    let id = create_folder(&app, "Old").await;
    let uri = format!("/api/noteful/folder/{}", id);

    let res = send(&app, Method::PATCH, &uri, Some(json!({ "folder_name": "New" }))).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let res = send(&app, Method::GET, &uri, None).await;
    assert_eq!(res.body["folder_name"], "New");
}

#[tokio::test]
async fn patch_without_name_is_400() {
    let app = app();
    let id = create_folder(&app, "Old").await;
    let uri = format!("/api/noteful/folder/{}", id);

    let res = send(&app, Method::PATCH, &uri, Some(json!({ "name": "wrong key" }))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body,
        json!({ "error": { "message": "Request body must contain either 'folder_name'" } })
    );

    let res = send(&app, Method::GET, &uri, None).await;
    assert_eq!(res.body["folder_name"], "Old");
}

#[tokio::test]
async fn delete_folder_keeps_notes_unfiled() {
    let app = app();
    let id = create_folder(&app, "Temp").await;
    let note = create_note(&app, "kept", "still here", id).await;

    let res = send(&app, Method::DELETE, &format!("/api/noteful/folder/{}", id), None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let res = send(&app, Method::GET, &format!("/api/noteful/{}", note["id"]), None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["folder_id"], serde_json::Value::Null);
}
