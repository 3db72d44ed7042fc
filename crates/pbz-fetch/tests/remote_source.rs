//! Remote fetching against a mock PocketBase server.
//!
//! `tiny_http` serves on a random local port from a plain thread; each test
//! supplies a routing closure.

use std::io::Read;
use std::sync::{Arc, Mutex};

use pbz_core::{CollectionType, FieldKind};
use pbz_fetch::{FetchError, PocketBaseClient, SchemaSource};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

struct Request {
    method: String,
    url: String,
    authorization: Option<String>,
    body: String,
}

type Route = dyn Fn(&Request) -> (u16, Value) + Send + Sync;

struct MockPocketBase {
    base_url: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockPocketBase {
    fn start(route: impl Fn(&Request) -> (u16, Value) + Send + Sync + 'static) -> Self {
        let route: Arc<Route> = Arc::new(route);
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
        let port = server.server_addr().to_ip().expect("ip listener").port();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        std::thread::spawn(move || {
            for mut incoming in server.incoming_requests() {
                let mut body = String::new();
                let _ = incoming.as_reader().read_to_string(&mut body);
                let request = Request {
                    method: incoming.method().to_string(),
                    url: incoming.url().to_string(),
                    authorization: incoming
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Authorization"))
                        .map(|h| h.value.as_str().to_string()),
                    body,
                };
                log.lock()
                    .unwrap()
                    .push(format!("{} {}", request.method, request.url));

                let (status, payload) = route(&request);
                let response =
                    tiny_http::Response::from_string(payload.to_string()).with_status_code(status);
                let _ = incoming.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            seen,
        }
    }

    fn requests(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

fn summary(name: &str) -> Value {
    json!({ "name": name, "type": "base", "fields": [] })
}

fn detail(name: &str, kind: &str) -> Value {
    json!({
        "name": name,
        "type": kind,
        "fields": [
            { "name": "title", "type": "text", "required": true },
            { "name": "owner", "type": "relation", "maxSelect": 1 }
        ]
    })
}

fn collections_api(request: &Request) -> (u16, Value) {
    if request.authorization.as_deref() != Some("secret-token") {
        return (401, json!({ "message": "The request requires valid admin authorization token." }));
    }
    match request.url.as_str() {
        "/api/collections?page=1&perPage=200" => (
            200,
            json!({ "page": 1, "perPage": 200, "totalPages": 2, "items": [summary("posts"), summary("users")] }),
        ),
        "/api/collections?page=2&perPage=200" => (
            200,
            json!({ "page": 2, "perPage": 200, "totalPages": 2, "items": [summary("audit log")] }),
        ),
        "/api/collections/posts" => (200, detail("posts", "base")),
        "/api/collections/users" => (200, detail("users", "auth")),
        "/api/collections/audit%20log" => (500, json!({ "message": "boom" })),
        _ => (404, json!({ "message": "not found" })),
    }
}

#[tokio::test]
async fn token_source_lists_all_pages_with_details() {
    let server = MockPocketBase::start(collections_api);
    let source = SchemaSource::RemoteToken {
        url: server.base_url.clone(),
        token: "secret-token".into(),
    };

    let collections = source.fetch().await.unwrap();
    let names: Vec<&str> = collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["posts", "users", "audit log"]);

    let users = &collections[1];
    assert_eq!(users.kind, CollectionType::Auth);
    let fields = users.fields.as_ref().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].kind, FieldKind::Relation);
    assert_eq!(fields[1].max_select(), Some(1));

    // Detail failed: the list entry is kept as-is.
    let audit = &collections[2];
    assert_eq!(audit.kind, CollectionType::Base);
    assert_eq!(audit.fields.as_deref(), Some(&[][..]));

    let requests = server.requests();
    assert!(requests.contains(&"GET /api/collections?page=2&perPage=200".to_string()));
    assert!(requests.contains(&"GET /api/collections/audit%20log".to_string()));
}

#[tokio::test]
async fn wrong_token_is_an_api_error() {
    let server = MockPocketBase::start(collections_api);
    let client = PocketBaseClient::new(&server.base_url).unwrap();

    let err = client.list_collections("wrong").await.unwrap_err();
    assert!(matches!(err, FetchError::Api { status: 401, .. }), "{err:?}");
}

#[tokio::test]
async fn password_source_authenticates_first() {
    let server = MockPocketBase::start(|request| {
        if request.method == "POST" && request.url == "/api/admins/auth-with-password" {
            let body: Value = serde_json::from_str(&request.body).unwrap_or_default();
            if body["identity"] == "admin@example.com" && body["password"] == "hunter22" {
                return (200, json!({ "token": "secret-token", "admin": {} }));
            }
            return (400, json!({ "message": "Failed to authenticate." }));
        }
        collections_api(request)
    });

    let source = SchemaSource::RemotePassword {
        url: format!("{}/", server.base_url),
        email: "admin@example.com".into(),
        password: "hunter22".into(),
    };
    let collections = source.fetch().await.unwrap();
    assert_eq!(collections.len(), 3);
    assert_eq!(server.requests()[0], "POST /api/admins/auth-with-password");
}

#[tokio::test]
async fn rejected_credentials_are_auth_errors() {
    let server = MockPocketBase::start(|_| (400, json!({ "message": "Failed to authenticate." })));
    let client = PocketBaseClient::new(&server.base_url).unwrap();

    let err = client
        .authenticate_with_password("admin@example.com", "bad")
        .await
        .unwrap_err();
    match err {
        FetchError::Auth(message) => assert!(message.contains("Failed to authenticate")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn superuser_endpoint_is_used_when_admin_endpoint_is_missing() {
    let server = MockPocketBase::start(|request| match request.url.as_str() {
        "/api/collections/_superusers/auth-with-password" => {
            (200, json!({ "token": "superuser-token" }))
        }
        _ => (404, json!({ "message": "not found" })),
    });
    let client = PocketBaseClient::new(&server.base_url).unwrap();

    let token = client
        .authenticate_with_password("root@example.com", "pw")
        .await
        .unwrap();
    assert_eq!(token, "superuser-token");
    assert_eq!(
        server.requests(),
        [
            "POST /api/admins/auth-with-password",
            "POST /api/collections/_superusers/auth-with-password",
        ]
    );
}

#[tokio::test]
async fn missing_token_in_auth_response_is_rejected() {
    let server = MockPocketBase::start(|_| (200, json!({ "admin": {} })));
    let client = PocketBaseClient::new(&server.base_url).unwrap();

    let err = client.authenticate_with_password("a@b.c", "pw").await.unwrap_err();
    assert!(matches!(err, FetchError::Auth(_)));
}
