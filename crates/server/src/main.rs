use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{Path as AxumPath, Query, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router, body};
use dashboard_app::{ApiError, AppError, AppState, SurveyDefinition, UploadListing};
use dashboard_core::{SURVEY_QUESTION_COUNT, SurveyAnswer};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

const NO_VALID_DATA: &str = "No valid data found.";
const ADMIN_TOKEN_HEADER: &str = "x-admin-token";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ADMIN_TTL_MINUTES: u64 = 30;

#[derive(Clone)]
struct ServerState {
    app: AppState,
    admin: Arc<AdminSessions>,
}

/// Shared-password admin gate. A successful login mints a random token that
/// expires after the configured lifetime.
struct AdminSessions {
    password: String,
    ttl: Duration,
    tokens: Mutex<HashMap<String, Instant>>,
}

impl AdminSessions {
    fn new(password: String, ttl: Duration) -> Self {
        Self {
            password,
            ttl,
            tokens: Mutex::new(HashMap::new()),
        }
    }

    fn login(&self, password: &str) -> Option<String> {
        if password != self.password {
            return None;
        }
        let token = generate_admin_token();
        let mut tokens = self.tokens.lock().expect("session mutex poisoned");
        tokens.insert(token.clone(), Instant::now() + self.ttl);
        Some(token)
    }

    fn verify(&self, token: &str) -> bool {
        let mut tokens = self.tokens.lock().expect("session mutex poisoned");
        let now = Instant::now();
        tokens.retain(|_, expires_at| *expires_at > now);
        tokens.contains_key(token)
    }
}

fn generate_admin_token() -> String {
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[derive(Deserialize)]
struct UploadQuery {
    filename: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct UploadResponse {
    filename: String,
}

#[derive(Deserialize)]
struct AdminLoginPayload {
    password: String,
}

#[derive(Serialize, Deserialize)]
struct AdminLoginResponse {
    token: String,
    expires_in_minutes: u64,
}

#[derive(Serialize, Deserialize)]
struct SurveyPayload {
    key: String,
    q1: String,
    q2: String,
    q3: String,
    q4: String,
}

impl SurveyPayload {
    fn answers(&self) -> [String; SURVEY_QUESTION_COUNT] {
        [
            self.q1.clone(),
            self.q2.clone(),
            self.q3.clone(),
            self.q4.clone(),
        ]
    }
}

#[derive(Deserialize)]
struct SurveyEditPayload {
    q1: String,
    q2: String,
    q3: String,
    q4: String,
}

fn resolve_upload_dir() -> PathBuf {
    let env_override = std::env::var_os("DASHBOARD_UPLOAD_DIR").map(PathBuf::from);
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from));
    resolve_upload_dir_with(env_override, exe_dir)
}

fn resolve_upload_dir_with(env_override: Option<PathBuf>, exe_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_override {
        return dir;
    }
    if let Some(dir) = exe_dir {
        return dir.join("uploads");
    }
    PathBuf::from("uploads")
}

fn resolve_dist_dir() -> PathBuf {
    let env_override = std::env::var_os("DASHBOARD_DIST").map(PathBuf::from);
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from));
    resolve_dist_dir_with(env_override, exe_dir)
}

fn resolve_dist_dir_with(env_override: Option<PathBuf>, exe_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_override {
        return dir;
    }
    if let Some(dir) = exe_dir {
        let candidate = dir.join("dist");
        if candidate.is_dir() {
            return candidate;
        }
    }
    PathBuf::from("web/dist")
}

fn resolve_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn resolve_admin_ttl() -> Duration {
    let minutes = std::env::var("DASHBOARD_ADMIN_TTL_MINUTES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_ADMIN_TTL_MINUTES);
    Duration::from_secs(minutes * 60)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(admin_password) = std::env::var("DASHBOARD_ADMIN_PASSWORD")
        .ok()
        .filter(|value| !value.is_empty())
    else {
        eprintln!("DASHBOARD_ADMIN_PASSWORD environment variable must be set for admin access");
        std::process::exit(1);
    };

    let upload_dir = resolve_upload_dir();
    let app = AppState::new(upload_dir.clone());
    if let Err(err) = app.initialize() {
        eprintln!("failed to create upload dir {}: {}", upload_dir.display(), err);
        std::process::exit(1);
    }
    let state = ServerState {
        app,
        admin: Arc::new(AdminSessions::new(admin_password, resolve_admin_ttl())),
    };
    let router = build_app(state);

    let port = resolve_port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind server");
    tracing::info!(port, upload_dir = %upload_dir.display(), "dashboard listening");
    axum::serve(listener, router).await.expect("serve");
}

fn build_app(state: ServerState) -> Router {
    let admin_api = Router::new()
        .route("/api/survey/answers", get(survey_answers))
        .route("/api/survey/:key", put(survey_edit).delete(survey_delete))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    let api = Router::new()
        .route("/api/health", get(health))
        .route("/api/uploads", get(uploads_list))
        .route("/api/upload", post(upload))
        .route("/api/charts/:filename", get(charts))
        .route("/api/survey/questions", get(survey_questions))
        .route("/api/survey", post(survey_submit))
        .route("/api/admin/login", post(admin_login))
        .merge(admin_api)
        .with_state(state);

    // The original adds these CORS headers to every response for AJAX
    // submissions from mobile clients.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(ADMIN_TOKEN_HEADER),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    let dist_dir = resolve_dist_dir();
    let static_service =
        ServeDir::new(&dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    api.fallback_service(static_service).layer(cors)
}

async fn require_admin(
    State(state): State<ServerState>,
    req: Request<body::Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let token = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    match token {
        Some(token) if state.admin.verify(token) => Ok(next.run(req).await),
        _ => Err(to_api_error(AppError::Unauthorized(
            "admin login required".to_string(),
        ))),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn uploads_list(
    State(state): State<ServerState>,
) -> Result<Json<UploadListing>, (StatusCode, Json<ApiError>)> {
    state
        .app
        .services
        .uploads
        .list()
        .map(Json)
        .map_err(to_api_error)
}

async fn upload(
    State(state): State<ServerState>,
    Query(query): Query<UploadQuery>,
    bytes: body::Bytes,
) -> Result<Json<UploadResponse>, (StatusCode, Json<ApiError>)> {
    let filename = query.filename.unwrap_or_default();
    let saved = state
        .app
        .services
        .uploads
        .save(&filename, &bytes)
        .map_err(to_api_error)?;
    tracing::info!(filename = %saved, bytes = bytes.len(), "dataset uploaded");
    Ok(Json(UploadResponse { filename: saved }))
}

async fn charts(
    State(state): State<ServerState>,
    AxumPath(filename): AxumPath<String>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let app = state.app.clone();
    let result = tokio::task::spawn_blocking(move || app.services.analytics.charts_for(&filename))
        .await
        .map_err(|err| {
            to_api_error(AppError::InvalidInput(format!("derivation task failed: {}", err)))
        })?;
    match result {
        Ok(Some(data)) => Ok(Json(data).into_response()),
        Ok(None) => Ok(Json(serde_json::json!({ "message": NO_VALID_DATA })).into_response()),
        Err(err) => Err(to_api_error(err)),
    }
}

async fn survey_questions(State(state): State<ServerState>) -> Json<SurveyDefinition> {
    Json(state.app.services.survey.definition())
}

async fn survey_submit(
    State(state): State<ServerState>,
    Json(payload): Json<SurveyPayload>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    let answer = SurveyAnswer {
        key: payload.key.trim().to_string(),
        answers: payload.answers(),
    };
    state
        .app
        .services
        .survey
        .submit(&answer)
        .map_err(to_api_error)?;
    Ok(Json(serde_json::json!({
        "message": format!("Survey answers for {} saved.", answer.key)
    })))
}

async fn admin_login(
    State(state): State<ServerState>,
    Json(payload): Json<AdminLoginPayload>,
) -> Result<Json<AdminLoginResponse>, (StatusCode, Json<ApiError>)> {
    match state.admin.login(&payload.password) {
        Some(token) => Ok(Json(AdminLoginResponse {
            token,
            expires_in_minutes: state.admin.ttl.as_secs() / 60,
        })),
        None => {
            tracing::warn!("rejected admin login attempt");
            Err(to_api_error(AppError::Unauthorized(
                "Incorrect password.".to_string(),
            )))
        }
    }
}

async fn survey_answers(
    State(state): State<ServerState>,
) -> Result<Json<Vec<SurveyAnswer>>, (StatusCode, Json<ApiError>)> {
    state
        .app
        .services
        .survey
        .answers()
        .map(Json)
        .map_err(to_api_error)
}

async fn survey_edit(
    State(state): State<ServerState>,
    AxumPath(key): AxumPath<String>,
    Json(payload): Json<SurveyEditPayload>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    let answers = [payload.q1, payload.q2, payload.q3, payload.q4];
    state
        .app
        .services
        .survey
        .edit(&key, &answers)
        .map_err(to_api_error)?;
    Ok(Json(serde_json::json!({
        "message": format!("Edited survey for {}.", key)
    })))
}

async fn survey_delete(
    State(state): State<ServerState>,
    AxumPath(key): AxumPath<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    state
        .app
        .services
        .survey
        .delete(&key)
        .map_err(to_api_error)?;
    Ok(Json(serde_json::json!({
        "message": format!("Deleted survey for {}.", key)
    })))
}

fn to_api_error(err: AppError) -> (StatusCode, Json<ApiError>) {
    let api_error = ApiError::from(err);
    let status =
        StatusCode::from_u16(api_error.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(api_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use dashboard_app::DashboardCharts;
    use http::{Request as HttpRequest, StatusCode as HttpStatus};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    const CSV: &str = "\
key,created_date,started_date,completed_date,active_duration,total_duration,ios,android,tvos,roku,xbox,tizen,design_changes,config_changes,store_changes
APP-1,2024-01-01,2024-01-02,2024-01-05,3.5,9,1,,,,,,2,,1
APP-2,2024-01-01,2024-01-04,,1.0,2.0,,,,,,,,,
APP-3,2024-02-01,,,,,,,,,,,,,
";

    const ADMIN_PASSWORD: &str = "hunter2";

    struct TestServer {
        router: Router,
        _dir: tempfile::TempDir,
    }

    fn setup() -> TestServer {
        let dir = tempfile::tempdir().expect("temp dir");
        let app = AppState::new(dir.path().join("uploads"));
        app.initialize().expect("initialize");
        let state = ServerState {
            app,
            admin: Arc::new(AdminSessions::new(
                ADMIN_PASSWORD.to_string(),
                Duration::from_secs(60),
            )),
        };
        TestServer {
            router: build_app(state),
            _dir: dir,
        }
    }

    async fn send(router: &Router, req: HttpRequest<Body>) -> (HttpStatus, serde_json::Value) {
        let response = router.clone().oneshot(req).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse body")
        };
        (status, value)
    }

    fn post_json(uri: &str, payload: serde_json::Value) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    async fn upload_csv(router: &Router, filename: &str, contents: &str) {
        let request = HttpRequest::builder()
            .method("POST")
            .uri(format!("/api/upload?filename={}", filename))
            .body(Body::from(contents.to_string()))
            .expect("request");
        let (status, body) = send(router, request).await;
        assert_eq!(status, HttpStatus::OK, "{body}");
    }

    async fn login(router: &Router) -> String {
        let (status, body) = send(
            router,
            post_json("/api/admin/login", serde_json::json!({ "password": ADMIN_PASSWORD })),
        )
        .await;
        assert_eq!(status, HttpStatus::OK);
        body["token"].as_str().expect("token").to_string()
    }

    fn sample_survey(key: &str) -> serde_json::Value {
        serde_json::json!({
            "key": key,
            "q1": "<1 day",
            "q2": "Often",
            "q3": "Satisfied",
            "q4": "Well",
        })
    }

    #[test]
    fn resolve_upload_dir_prefers_env_override() {
        let dir = tempfile::tempdir().expect("temp dir");
        let resolved = resolve_upload_dir_with(Some(dir.path().to_path_buf()), None);
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn resolve_upload_dir_defaults_next_to_exe() {
        let resolved = resolve_upload_dir_with(None, Some(PathBuf::from("/opt/dash")));
        assert_eq!(resolved, PathBuf::from("/opt/dash/uploads"));
        assert_eq!(resolve_upload_dir_with(None, None), PathBuf::from("uploads"));
    }

    #[test]
    fn resolve_dist_dir_falls_back_to_repo_dist() {
        let dir = tempfile::tempdir().expect("temp dir");
        let resolved = resolve_dist_dir_with(None, Some(dir.path().to_path_buf()));
        assert_eq!(resolved, PathBuf::from("web/dist"));
    }

    #[test]
    fn admin_sessions_expire() {
        let sessions = AdminSessions::new("pw".to_string(), Duration::from_millis(10));
        let token = sessions.login("pw").expect("token");
        assert!(sessions.verify(&token));
        std::thread::sleep(Duration::from_millis(20));
        assert!(!sessions.verify(&token));
        assert!(sessions.login("wrong").is_none());
    }

    #[tokio::test]
    async fn upload_then_charts_returns_payload() {
        let server = setup();
        upload_csv(&server.router, "tasks.csv", CSV).await;

        let request = HttpRequest::builder()
            .uri("/api/charts/tasks.csv")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::OK);
        let charts: DashboardCharts = serde_json::from_value(body).expect("charts payload");
        assert_eq!(charts.task_count, 2);
        assert_eq!(charts.filename, "tasks.csv");
        assert_eq!(charts.survey_pies.len(), 4);
    }

    #[tokio::test]
    async fn charts_for_unknown_dataset_is_404() {
        let server = setup();
        let request = HttpRequest::builder()
            .uri("/api/charts/absent.csv")
            .body(Body::empty())
            .expect("request");
        let (status, _) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::NOT_FOUND);
    }

    #[tokio::test]
    async fn charts_without_valid_rows_reports_empty_state() {
        let server = setup();
        upload_csv(&server.router, "empty.csv", "key,created_date,started_date\nA,,\n").await;

        let request = HttpRequest::builder()
            .uri("/api/charts/empty.csv")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::OK);
        assert_eq!(body["message"], NO_VALID_DATA);
    }

    #[tokio::test]
    async fn upload_requires_filename_and_body() {
        let server = setup();
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/api/upload")
            .body(Body::from(CSV))
            .expect("request");
        let (status, _) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::BAD_REQUEST);

        let request = HttpRequest::builder()
            .method("POST")
            .uri("/api/upload?filename=tasks.csv")
            .body(Body::empty())
            .expect("request");
        let (status, _) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::BAD_REQUEST);
    }

    #[tokio::test]
    async fn uploads_listing_tracks_latest() {
        let server = setup();
        upload_csv(&server.router, "tasks.csv", CSV).await;

        let request = HttpRequest::builder()
            .uri("/api/uploads")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::OK);
        let listing: UploadListing = serde_json::from_value(body).expect("listing");
        assert_eq!(listing.files, vec!["tasks.csv"]);
        assert_eq!(listing.latest.as_deref(), Some("tasks.csv"));
    }

    #[tokio::test]
    async fn survey_submit_rejects_duplicates_and_blanks() {
        let server = setup();
        let (status, _) = send(&server.router, post_json("/api/survey", sample_survey("ana"))).await;
        assert_eq!(status, HttpStatus::OK);

        let (status, body) =
            send(&server.router, post_json("/api/survey", sample_survey("ana"))).await;
        assert_eq!(status, HttpStatus::CONFLICT);
        assert_eq!(body["message"], "User 'ana' already has a survey.");

        let mut blank = sample_survey("ben");
        blank["q3"] = serde_json::json!("");
        let (status, body) = send(&server.router, post_json("/api/survey", blank)).await;
        assert_eq!(status, HttpStatus::BAD_REQUEST);
        assert_eq!(body["message"], "Please answer all questions.");
    }

    #[tokio::test]
    async fn admin_routes_require_valid_token() {
        let server = setup();
        let request = HttpRequest::builder()
            .uri("/api/survey/answers")
            .body(Body::empty())
            .expect("request");
        let (status, _) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::UNAUTHORIZED);

        let (status, _) = send(
            &server.router,
            post_json("/api/admin/login", serde_json::json!({ "password": "wrong" })),
        )
        .await;
        assert_eq!(status, HttpStatus::UNAUTHORIZED);

        let token = login(&server.router).await;
        let request = HttpRequest::builder()
            .uri("/api/survey/answers")
            .header(ADMIN_TOKEN_HEADER, token)
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn admin_can_edit_and_delete_surveys() {
        let server = setup();
        let (status, _) = send(&server.router, post_json("/api/survey", sample_survey("ana"))).await;
        assert_eq!(status, HttpStatus::OK);
        let token = login(&server.router).await;

        let edit = serde_json::json!({
            "q1": "2+ weeks",
            "q2": "Always",
            "q3": "Neutral",
            "q4": "Slightly",
        });
        let request = HttpRequest::builder()
            .method("PUT")
            .uri("/api/survey/ana")
            .header("content-type", "application/json")
            .header(ADMIN_TOKEN_HEADER, token.clone())
            .body(Body::from(edit.to_string()))
            .expect("request");
        let (status, body) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::OK);
        assert_eq!(body["message"], "Edited survey for ana.");

        let request = HttpRequest::builder()
            .uri("/api/survey/answers")
            .header(ADMIN_TOKEN_HEADER, token.clone())
            .body(Body::empty())
            .expect("request");
        let (_, body) = send(&server.router, request).await;
        assert_eq!(body[0]["answers"][0], "2+ weeks");

        let request = HttpRequest::builder()
            .method("DELETE")
            .uri("/api/survey/ana")
            .header(ADMIN_TOKEN_HEADER, token.clone())
            .body(Body::empty())
            .expect("request");
        let (status, _) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::OK);

        let request = HttpRequest::builder()
            .method("DELETE")
            .uri("/api/survey/ana")
            .header(ADMIN_TOKEN_HEADER, token)
            .body(Body::empty())
            .expect("request");
        let (status, _) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::NOT_FOUND);
    }

    #[tokio::test]
    async fn reupload_with_same_name_invalidates_cache() {
        let server = setup();
        upload_csv(&server.router, "tasks.csv", CSV).await;
        let request = HttpRequest::builder()
            .uri("/api/charts/tasks.csv")
            .body(Body::empty())
            .expect("request");
        let (_, body) = send(&server.router, request).await;
        assert_eq!(body["task_count"], 2);

        let replacement = "\
key,created_date,started_date,completed_date,active_duration,total_duration,ios,android,tvos,roku,xbox,tizen,design_changes,config_changes,store_changes
APP-9,2024-03-01,2024-03-02,,,,,,,,,,,,
";
        upload_csv(&server.router, "tasks.csv", replacement).await;
        let request = HttpRequest::builder()
            .uri("/api/charts/tasks.csv")
            .body(Body::empty())
            .expect("request");
        let (_, body) = send(&server.router, request).await;
        assert_eq!(body["task_count"], 1);
    }

    #[tokio::test]
    async fn cors_headers_are_present() {
        let server = setup();
        let request = HttpRequest::builder()
            .uri("/api/health")
            .header("origin", "http://example.com")
            .body(Body::empty())
            .expect("request");
        let response = server.router.clone().oneshot(request).await.expect("response");
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn survey_questions_match_definition() {
        let server = setup();
        let request = HttpRequest::builder()
            .uri("/api/survey/questions")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(&server.router, request).await;
        assert_eq!(status, HttpStatus::OK);
        let definition: SurveyDefinition = serde_json::from_value(body).expect("definition");
        assert_eq!(definition.questions.len(), 4);
        assert!(definition.options.iter().all(|options| options.len() == 5));
    }
}
