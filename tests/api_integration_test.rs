use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use techforge_server::adapters::json_store::INQUIRIES_FILE;
use techforge_server::domain::model::Inquiry;
use techforge_server::domain::ports::Notifier;
use techforge_server::utils::error::NotificationError;
use techforge_server::{build_router, AppState, JsonFileStore, ServerConfig};
use tempfile::TempDir;
use tokio::net::TcpListener;

const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";

struct TestApp {
    base_url: String,
    data_dir: TempDir,
    _dist_dir: TempDir,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn submit(&self, body: Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/contact"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn inquiries(&self) -> Value {
        self.client
            .get(self.url("/api/inquiries"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

fn dist_dir() -> TempDir {
    let dist = TempDir::new().unwrap();
    std::fs::write(dist.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dist.path().join("assets")).unwrap();
    std::fs::write(dist.path().join("assets").join("app.js"), "console.log('hi');").unwrap();
    dist
}

async fn start(state: Arc<AppState>, data_dir: TempDir, dist: TempDir) -> TestApp {
    let router = build_router(state, dist.path());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{}", address),
        data_dir,
        _dist_dir: dist,
        client: reqwest::Client::new(),
    }
}

async fn spawn_app() -> TestApp {
    let data_dir = TempDir::new().unwrap();
    let dist = dist_dir();

    let config = ServerConfig {
        data_dir: data_dir.path().to_string_lossy().to_string(),
        dist_dir: dist.path().to_string_lossy().to_string(),
        ..ServerConfig::default()
    };
    let state = AppState::from_config(&config).await.unwrap();
    start(state, data_dir, dist).await
}

async fn spawn_app_with_notifier(notifier: Arc<dyn Notifier>) -> TestApp {
    let data_dir = TempDir::new().unwrap();
    let dist = dist_dir();

    let store = JsonFileStore::open(data_dir.path()).await.unwrap();
    let state = AppState::new(Arc::new(store), Some(notifier), &ServerConfig::default());
    start(state, data_dir, dist).await
}

fn jane() -> Value {
    json!({
        "name": "Jane",
        "email": "jane@x.com",
        "projectType": "AI/ML",
        "requirements": "Build a chatbot"
    })
}

#[tokio::test]
async fn test_first_submission_is_listed() {
    let app = spawn_app().await;

    let response = app.submit(jane()).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Inquiry submitted successfully");
    let inquiry_id = body["inquiryId"].as_str().unwrap().to_string();

    let listed = app.inquiries().await;
    assert_eq!(listed["success"], true);
    let inquiries = listed["inquiries"].as_array().unwrap();
    assert_eq!(inquiries.len(), 1);
    assert_eq!(inquiries[0]["id"], inquiry_id.as_str());
    assert_eq!(inquiries[0]["name"], "Jane");
    assert_eq!(inquiries[0]["email"], "jane@x.com");
    assert_eq!(inquiries[0]["projectType"], "AI/ML");
    assert_eq!(inquiries[0]["requirements"], "Build a chatbot");
    assert!(inquiries[0]["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_submissions_are_listed_in_order() {
    let app = spawn_app().await;

    let mut first = jane();
    first["budget"] = json!("₹1,500");
    app.submit(first).await;

    let mut second = jane();
    second["name"] = json!("John");
    second["timeline"] = json!("2 weeks");
    app.submit(second).await;

    let listed = app.inquiries().await;
    let inquiries = listed["inquiries"].as_array().unwrap();
    assert_eq!(inquiries.len(), 2);
    assert_eq!(inquiries[0]["name"], "Jane");
    assert_eq!(inquiries[0]["budget"], "₹1,500");
    assert_eq!(inquiries[1]["name"], "John");
    assert_eq!(inquiries[1]["timeline"], "2 weeks");
    assert_ne!(inquiries[0]["id"], inquiries[1]["id"]);

    // reads without writes in between see the same collection
    assert_eq!(app.inquiries().await, listed);
}

#[tokio::test]
async fn test_document_on_disk_is_a_json_array() {
    let app = spawn_app().await;
    app.submit(jane()).await;
    let mut blank = jane();
    blank["budget"] = json!("");
    app.submit(blank).await;

    let content = std::fs::read_to_string(app.data_dir.path().join(INQUIRIES_FILE)).unwrap();
    let stored: Vec<Inquiry> = serde_json::from_str(&content).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].budget, None);
    assert_eq!(stored[1].budget.as_deref(), Some(""));

    let raw: Vec<Value> = serde_json::from_str(&content).unwrap();
    assert!(raw[0].get("budget").is_none());
    assert_eq!(raw[1]["budget"], "");
}

#[tokio::test]
async fn test_blank_optional_fields_round_trip() {
    let app = spawn_app().await;

    let mut body = jane();
    body["budget"] = json!("");
    body["timeline"] = json!("  ");
    let response = app.submit(body).await;
    assert_eq!(response.status(), 200);

    let listed = app.inquiries().await;
    let inquiry = &listed["inquiries"][0];
    assert_eq!(inquiry["budget"], "");
    assert_eq!(inquiry["timeline"], "  ");
}

#[tokio::test]
async fn test_unchecked_records_survive_new_submissions() {
    let app = spawn_app().await;
    let existing = json!([
        {
            "id": 1700000000000u64,
            "name": "Old",
            "email": null,
            "projectType": "Web",
            "requirements": "Legacy site",
            "timestamp": "2024-01-01T00:00:00.000Z",
            "referrer": "newsletter"
        }
    ]);
    let file = app.data_dir.path().join(INQUIRIES_FILE);
    std::fs::write(&file, serde_json::to_vec_pretty(&existing).unwrap()).unwrap();

    let listed = app.inquiries().await;
    assert_eq!(listed["success"], true);
    assert_eq!(listed["inquiries"][0]["id"], "1700000000000");
    assert_eq!(listed["inquiries"][0]["email"], "");
    assert_eq!(listed["inquiries"][0]["referrer"], "newsletter");

    let response = app.submit(jane()).await;
    assert_eq!(response.status(), 200);

    let on_disk: Vec<Value> = serde_json::from_slice(&std::fs::read(&file).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 2);
    assert_eq!(on_disk[0], existing[0]);
    assert_eq!(app.inquiries().await["inquiries"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_form_encoded_submission() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .form(&[
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("projectType", "Web Development"),
            ("requirements", "Landing page"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let listed = app.inquiries().await;
    assert_eq!(listed["inquiries"][0]["projectType"], "Web Development");
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let app = spawn_app().await;

    let mut body = jane();
    body.as_object_mut().unwrap().remove("email");
    let response = app.submit(body).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("email"));
    assert_eq!(app.inquiries().await["inquiries"], json!([]));
}

#[tokio::test]
async fn test_blank_required_field_is_rejected() {
    let app = spawn_app().await;

    let mut body = jane();
    body["name"] = json!("   ");
    let response = app.submit(body).await;

    assert_eq!(response.status(), 400);
    assert_eq!(app.inquiries().await["inquiries"], json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_corrupt_document_fails_submit_and_list() {
    let app = spawn_app().await;
    std::fs::write(app.data_dir.path().join(INQUIRIES_FILE), "not an array").unwrap();

    let response = app.submit(jane()).await;
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Failed to submit inquiry"}));

    let response = app.client.get(app.url("/api/inquiries")).send().await.unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Failed to retrieve inquiries"}));
}

#[tokio::test]
async fn test_projects_by_category() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/api/projects/ai-ml"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    let projects = body["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 5);
    assert_eq!(projects[0]["id"], 1);
    assert_eq!(projects[0]["technologies"][1], "TensorFlow");

    let response = app.client.get(app.url("/api/projects/unknown-key")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "projects": []}));
}

#[tokio::test]
async fn test_health_reports_email_disabled() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "OK");
    assert_eq!(body["emailConfigured"], false);
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_spa_fallback_serves_index() {
    let app = spawn_app().await;

    for path in ["/", "/projects/ai-ml", "/contact"] {
        let response = app.client.get(app.url(path)).send().await.unwrap();
        assert_eq!(response.status(), 200, "path {}", path);
        assert_eq!(response.text().await.unwrap(), INDEX_HTML);
    }

    let asset = app.client.get(app.url("/assets/app.js")).send().await.unwrap();
    assert_eq!(asset.status(), 200);
    assert_eq!(asset.text().await.unwrap(), "console.log('hi');");
}

struct RejectingNotifier;

#[async_trait]
impl Notifier for RejectingNotifier {
    async fn send(&self, _inquiry: &Inquiry) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_notification_failure_still_succeeds() {
    let app = spawn_app_with_notifier(Arc::new(RejectingNotifier)).await;

    let health: Value = app
        .client
        .get(app.url("/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["emailConfigured"], true);

    let response = app.submit(jane()).await;
    assert_eq!(response.status(), 200);
    assert_eq!(app.inquiries().await["inquiries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_data_dir_is_created() {
    let root = TempDir::new().unwrap();
    let data_dir = root.path().join("data");
    let config = ServerConfig {
        data_dir: data_dir.to_string_lossy().to_string(),
        ..ServerConfig::default()
    };

    AppState::from_config(&config).await.unwrap();
    assert!(Path::new(&data_dir).is_dir());
}
