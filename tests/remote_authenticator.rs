//! Remote authenticator against an in-process registry API stand-in.

use anyhow::Result;
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use hwr_portal::authenticator::{AuthResponse, Authenticator, RemoteAuthenticator};
use hwr_portal::errors::{TransportError, LOGIN_FAILED_MESSAGE};
use hwr_portal::login::{submit, Credentials, LoginForm, LoginOutcome};
use hwr_portal::session::SessionStore;
use hwr_portal::storage::MemoryStorage;
use serde_json::{json, Value};
use tokio::net::TcpListener;

const LOGIN_PATH: &str = "/api/auth/login";

async fn login(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    match (body["username"].as_str(), body["password"].as_str()) {
        (Some("registrar"), Some("s3cret")) => (
            [(header::SET_COOKIE, "hwr_session=abc; Path=/")],
            Json(json!({
                "token": "remote-token",
                "user": { "id": 42, "name": "Registrar", "cookie": cookie },
            })),
        )
            .into_response(),
        (Some("empty"), _) => Json(json!({ "token": "", "user": {} })).into_response(),
        (Some("broken"), _) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Account not found" })),
        )
            .into_response(),
    }
}

async fn spawn_api() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new().route(LOGIN_PATH, post(login));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn granted_login_returns_token_and_user() -> Result<()> {
    let base = spawn_api().await?;
    let remote = RemoteAuthenticator::new(&base, LOGIN_PATH)?;

    let response = remote
        .authenticate(&Credentials::new("registrar", "s3cret"))
        .await?;

    let AuthResponse::Granted(grant) = response else {
        panic!("expected grant");
    };
    assert_eq!(grant.token, "remote-token");
    assert_eq!(grant.user["name"], "Registrar");
    Ok(())
}

#[tokio::test]
async fn rejection_surfaces_server_message() -> Result<()> {
    let base = spawn_api().await?;
    let remote = RemoteAuthenticator::new(&base, LOGIN_PATH)?;

    let response = remote
        .authenticate(&Credentials::new("registrar", "wrong"))
        .await?;

    assert_eq!(
        response,
        AuthResponse::Rejected {
            message: Some("Account not found".to_string())
        }
    );
    Ok(())
}

#[tokio::test]
async fn error_without_message_falls_back() -> Result<()> {
    let base = spawn_api().await?;
    let remote = RemoteAuthenticator::new(&base, LOGIN_PATH)?;
    let store = SessionStore::new(MemoryStorage::new());
    let form = LoginForm {
        username: "broken".to_string(),
        password: "x".to_string(),
        remember: false,
    };

    let outcome = submit(&form, &remote, &store, None).await;

    let LoginOutcome::Failed(err) = outcome else {
        panic!("expected failure");
    };
    assert_eq!(err.to_string(), LOGIN_FAILED_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn empty_token_is_a_transport_failure() -> Result<()> {
    let base = spawn_api().await?;
    let remote = RemoteAuthenticator::new(&base, LOGIN_PATH)?;

    let result = remote
        .authenticate(&Credentials::new("empty", "x"))
        .await;

    assert!(matches!(result, Err(TransportError::Decode(_))));
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let remote = RemoteAuthenticator::new(&format!("http://{addr}"), LOGIN_PATH)?;
    let result = remote
        .authenticate(&Credentials::new("registrar", "s3cret"))
        .await;

    assert!(matches!(result, Err(TransportError::Request(_))));
    Ok(())
}

#[tokio::test]
async fn cookies_are_sent_back_on_later_requests() -> Result<()> {
    let base = spawn_api().await?;
    let remote = RemoteAuthenticator::new(&base, LOGIN_PATH)?;
    let credentials = Credentials::new("registrar", "s3cret");

    let AuthResponse::Granted(first) = remote.authenticate(&credentials).await? else {
        panic!("expected grant");
    };
    assert!(first.user["cookie"].is_null());

    let AuthResponse::Granted(second) = remote.authenticate(&credentials).await? else {
        panic!("expected grant");
    };
    assert_eq!(second.user["cookie"], "hwr_session=abc");
    Ok(())
}

#[tokio::test]
async fn remote_login_persists_session() -> Result<()> {
    let base = spawn_api().await?;
    let remote = RemoteAuthenticator::new(&base, LOGIN_PATH)?;
    let store = SessionStore::new(MemoryStorage::new());
    let form = LoginForm {
        username: "registrar".to_string(),
        password: "s3cret".to_string(),
        remember: true,
    };

    let outcome = submit(&form, &remote, &store, None).await;

    assert!(matches!(outcome, LoginOutcome::Succeeded(_)));
    let session = store.load();
    assert_eq!(session.token.as_deref(), Some("remote-token"));
    assert_eq!(session.display_name(), Some("Registrar"));
    assert_eq!(store.remembered_username().as_deref(), Some("registrar"));
    Ok(())
}
