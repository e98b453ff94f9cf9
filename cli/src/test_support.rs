//! Mock Pulse backend (axum) and mock Socket.IO server (tokio-tungstenite)
//! bound to ephemeral local ports.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;

pub const TOKEN: &str = "tok-123";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "ana@pulse.dev" && body["password"] == "secret" {
        (StatusCode::OK, Json(json!({ "token": TOKEN, "user": { "username": "ana" } })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "invalid credentials" })))
    }
}

async fn register(Json(body): Json<Value>) -> StatusCode {
    if body["username"] == "taken" { StatusCode::CONFLICT } else { StatusCode::CREATED }
}

async fn posts(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "no token" })));
    }
    (
        StatusCode::OK,
        Json(json!([
            { "_id": "p2", "author": { "_id": "u1", "username": "ana" }, "content": "newest", "mediaUrl": "https://cdn/p2.png" },
            { "_id": "p1", "author": { "username": "bo" }, "content": "older" },
        ])),
    )
}

async fn profile(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "u1" {
        (StatusCode::OK, Json(json!({ "_id": "u1", "username": "ana", "bio": "hello there" })))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "error": "no such user" })))
    }
}

async fn analytics() -> Json<Value> {
    Json(json!({ "totalUsers": 12, "totalPosts": 40 }))
}

async fn notifications() -> Json<Value> {
    Json(json!([{ "text": "ana liked your post" }, { "text": "bo followed you" }]))
}

/// Start the mock REST backend; returns its API base URL.
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/posts", get(posts))
        .route("/api/users/{id}", get(profile))
        .route("/api/analytics", get(analytics))
        .route("/api/notifications", get(notifications))
        .route("/api/echo", post(echo));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}/api")
}

async fn echo(headers: HeaderMap, body: String) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    };
    Json(json!({
        "authorization": header("authorization"),
        "content_type": header("content-type"),
        "body": body,
    }))
}

pub type ServerSocket = WebSocketStream<tokio::net::TcpStream>;

pub const OPEN: &str = r#"0{"sid":"eio-1","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#;

/// Start a one-connection WebSocket server that completes the Socket.IO
/// handshake and then hands the socket to `script`. Returns the HTTP origin
/// and the first frame the client sent (its connect packet).
pub async fn spawn_socket_server<F, Fut>(script: F) -> (String, tokio::task::JoinHandle<String>)
where
    F: FnOnce(ServerSocket) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let server = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.expect("accept");
        let mut socket = tokio_tungstenite::accept_async(tcp).await.expect("handshake");
        socket.send(Message::Text(OPEN.into())).await.expect("open");
        let connect = next_text(&mut socket).await.unwrap_or_default();
        socket
            .send(Message::Text(r#"40{"sid":"sio-1"}"#.into()))
            .await
            .expect("connected");
        script(socket).await;
        connect
    });
    (format!("http://{addr}"), server)
}

/// Next text frame from the client, or `None` once it closed.
pub async fn next_text(socket: &mut ServerSocket) -> Option<String> {
    while let Some(message) = socket.next().await {
        match message.ok()? {
            Message::Text(text) => return Some(text.as_str().to_owned()),
            Message::Close(_) => return None,
            _ => {}
        }
    }
    None
}

/// Fresh token-file path unique to this test process and call.
pub fn scratch_token_file() -> PathBuf {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("pulse-cli-{}-{n}", std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}
