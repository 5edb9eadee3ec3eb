#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use models::{branch, news, service_item, slider};
use server::routes;
use server::state::AppState;
use service::admin_gate::AdminGate;
use service::catalog;
use service::content::mock::MemoryRepository;
use service::news::NewsService;
use service::slider::SliderService;
use service::storage::memory::MemoryStorage;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "letmein";

pub struct TestApp {
    pub base_url: String,
    pub storage: Arc<MemoryStorage>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self) -> anyhow::Result<()> {
        let res = self
            .client
            .post(self.url("/admin/login"))
            .json(&json!({ "username": USERNAME, "password": PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == 200, "login failed with {}", res.status());
        Ok(())
    }

    pub async fn get_json(&self, path: &str) -> anyhow::Result<Value> {
        Ok(self.client.get(self.url(path)).send().await?.json().await?)
    }
}

fn memory_state(storage: Arc<MemoryStorage>) -> AppState {
    AppState {
        sliders: Arc::new(SliderService::new(
            Arc::new(MemoryRepository::<slider::Model>::default()),
            storage.clone(),
            "slider-images",
        )),
        branches: Arc::new(catalog::branch_service(Arc::new(MemoryRepository::<branch::Model>::default()))),
        services: Arc::new(catalog::service_catalog(Arc::new(MemoryRepository::<service_item::Model>::default()))),
        news: Arc::new(NewsService::new(
            Arc::new(MemoryRepository::<news::Model>::default()),
            storage,
            "news-images",
        )),
        gate: Arc::new(AdminGate::new(USERNAME, PASSWORD, 24)),
    }
}

/// Client keeping cookies and surfacing redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("reqwest client")
}

pub async fn spawn_app() -> anyhow::Result<TestApp> {
    let storage = Arc::new(MemoryStorage::default());
    let state = memory_state(storage.clone());
    let server_cfg = configs::ServerConfig {
        static_dir: "target/test-static-missing".into(),
        ..configs::ServerConfig::default()
    };
    let app: Router = routes::build_router(state, CorsLayer::very_permissive(), &server_cfg);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()), storage, client: client() })
}

pub fn png_part(name: &str) -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(vec![0x89, b'P', b'N', b'G'])
        .file_name(name.to_string())
        .mime_str("image/png")
        .expect("valid mime")
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .map(|rows| rows.iter().filter_map(|r| r["id"].as_i64()).collect())
        .unwrap_or_default()
}
