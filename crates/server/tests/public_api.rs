mod support;

use serde_json::{json, Value};

use support::{ids, png_part, spawn_app};

#[tokio::test]
async fn health_and_openapi() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let health = app.get_json("/health").await?;
    assert_eq!(health, json!({ "status": "ok" }));

    let doc = app.get_json("/api-docs/openapi.json").await?;
    assert!(doc["paths"]["/admin/sliders/{id}/move"].is_object());
    assert!(doc["paths"]["/api/news"].is_object());
    Ok(())
}

#[tokio::test]
async fn slider_upload_list_delete() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    for name in ["one.png", "two.png"] {
        let form = reqwest::multipart::Form::new().part("file", png_part(name));
        let res = app.client.post(app.url("/api/sliders")).multipart(form).send().await?;
        assert_eq!(res.status(), 200);
    }
    let listed = app.get_json("/api/sliders").await?;
    assert_eq!(listed["success"], true);
    let rows = listed["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["order_index"], 0);
    assert_eq!(rows[1]["order_index"], 1);
    assert_eq!(app.storage.object_count(), 2);

    let first = &rows[0];
    let res = app
        .client
        .delete(app.url("/api/sliders"))
        .query(&[
            ("id", first["id"].to_string()),
            ("imageUrl", first["image_url"].as_str().unwrap_or_default().to_string()),
        ])
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(ids(&app.get_json("/api/sliders").await?).len(), 1);
    assert_eq!(app.storage.object_count(), 1);
    Ok(())
}

#[tokio::test]
async fn slider_upload_without_file_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let form = reqwest::multipart::Form::new().text("caption", "no image");
    let res = app.client.post(app.url("/api/sliders")).multipart(form).send().await?;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "success": false, "error": "No file provided" }));
    Ok(())
}

#[tokio::test]
async fn slider_upload_of_non_image_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let part = reqwest::multipart::Part::bytes(vec![0x4d, 0x5a, 0x90, 0x00])
        .file_name("notes.exe")
        .mime_str("application/x-msdownload")?;
    let form = reqwest::multipart::Form::new().part("file", part);
    let res = app.client.post(app.url("/api/sliders")).multipart(form).send().await?;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(app.storage.object_count(), 0);
    assert!(ids(&app.get_json("/api/sliders").await?).is_empty());
    Ok(())
}

#[tokio::test]
async fn slider_delete_requires_both_params() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    for query in ["?id=1", "?imageUrl=x", "?id=abc&imageUrl=x", ""] {
        let res = app.client.delete(app.url(&format!("/api/sliders{query}"))).send().await?;
        assert_eq!(res.status(), 400, "query {query:?}");
        let body: Value = res.json().await?;
        assert_eq!(body["error"], "Missing required parameters");
    }

    let res = app.client.delete(app.url("/api/sliders?id=77&imageUrl=x")).send().await?;
    assert_eq!(res.status(), 404);
    Ok(())
}

#[tokio::test]
async fn storage_failure_is_reported_generically() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.storage.fail_uploads(true);
    let form = reqwest::multipart::Form::new().part("file", png_part("x.png"));
    let res = app.client.post(app.url("/api/sliders")).multipart(form).send().await?;
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "success": false, "error": "Failed to upload slider" }));
    Ok(())
}

#[tokio::test]
async fn branches_follow_requested_language() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login().await?;
    for (en, si) in [("Kandy", "මහනුවර"), ("Matale", "මාතලේ")] {
        let res = app
            .client
            .post(app.url("/admin/branches"))
            .json(&json!({ "title": en, "title_si": si }))
            .send()
            .await?;
        assert_eq!(res.status(), 200);
    }

    let si = app.get_json("/api/branches?lang=si").await?;
    assert_eq!(si["data"][0]["title"], "මහනුවර");
    let en = app.get_json("/api/branches?lang=fr").await?;
    assert_eq!(en["data"][0]["title"], "Kandy");
    assert_eq!(en["data"][1]["title"], "Matale");
    Ok(())
}

#[tokio::test]
async fn public_lists_start_empty() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    for path in ["/api/services", "/api/news", "/api/branches"] {
        let body = app.get_json(path).await?;
        assert_eq!(body, json!({ "success": true, "data": [] }), "{path}");
    }
    Ok(())
}
