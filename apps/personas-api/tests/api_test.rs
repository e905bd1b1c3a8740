//! Integration tests for the person CRUD endpoints
//!
//! These tests drive the full axum router against an in-memory repository,
//! injected through the same seam production uses for the MongoDB adapter.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use personas_api::{routes::create_router, AppState};
use personas_domain::{Person, PersonError, PersonRepository, PersonService};

// In-memory repository standing in for the MongoDB adapter
#[derive(Clone, Default)]
struct InMemoryRepository {
    people: Arc<Mutex<HashMap<String, Person>>>,
}

impl PersonRepository for InMemoryRepository {
    fn insert(&self, person: &Person) -> impl Future<Output = Result<(), PersonError>> + Send {
        let person = person.clone();
        let people = self.people.clone();

        async move {
            people
                .lock()
                .unwrap()
                .insert(person.document.clone(), person);
            Ok(())
        }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Person>, PersonError>> + Send {
        let people = self.people.clone();

        async move { Ok(people.lock().unwrap().values().cloned().collect()) }
    }

    fn find_by_document(
        &self,
        document: &str,
    ) -> impl Future<Output = Result<Person, PersonError>> + Send {
        let document = document.to_string();
        let people = self.people.clone();

        async move {
            people
                .lock()
                .unwrap()
                .get(&document)
                .cloned()
                .ok_or(PersonError::NotFound)
        }
    }

    fn update(
        &self,
        document: &str,
        person: &Person,
    ) -> impl Future<Output = Result<(), PersonError>> + Send {
        let document = document.to_string();
        let person = person.clone();
        let people = self.people.clone();

        async move {
            let mut map = people.lock().unwrap();
            if map.contains_key(&document) {
                map.insert(document, person);
            }
            Ok(())
        }
    }

    fn delete(&self, document: &str) -> impl Future<Output = Result<(), PersonError>> + Send {
        let document = document.to_string();
        let people = self.people.clone();

        async move {
            people.lock().unwrap().remove(&document);
            Ok(())
        }
    }
}

fn test_router() -> Router {
    let service = PersonService::new(InMemoryRepository::default());
    create_router(AppState::new(service))
}

fn ana() -> Value {
    json!({
        "document": "123456",
        "firstName": "Ana",
        "lastName": "Diaz",
        "age": 25,
        "email": "ana@example.com",
        "phone": "1234567",
        "address": "Calle Falsa 123"
    })
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let router = test_router();

    let (status, body) = send(&router, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let router = test_router();

    let (status, body) = send(&router, Method::POST, "/people", Some(ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(as_json(&body), json!({ "message": "created" }));

    let (status, body) = send(&router, Method::GET, "/people/123456", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), ana());
}

#[tokio::test]
async fn test_create_duplicate_document_is_rejected() {
    let router = test_router();

    let (status, _) = send(&router, Method::POST, "/people", Some(ana())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&router, Method::POST, "/people", Some(ana())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        as_json(&body),
        json!({ "error": "a person with this document already exists" })
    );
}

#[tokio::test]
async fn test_create_invalid_person_is_rejected() {
    let router = test_router();

    let mut payload = ana();
    payload["age"] = json!(0);

    let (status, body) = send(&router, Method::POST, "/people", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        as_json(&body),
        json!({ "error": "age must be a positive integer" })
    );
}

#[tokio::test]
async fn test_list_returns_created_people() {
    let router = test_router();

    let (status, body) = send(&router, Method::GET, "/people", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([]));

    send(&router, Method::POST, "/people", Some(ana())).await;

    let (status, body) = send(&router, Method::GET, "/people", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([ana()]));
}

#[tokio::test]
async fn test_get_unknown_document_returns_not_found() {
    let router = test_router();

    let (status, body) = send(&router, Method::GET, "/people/000000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&body), json!({ "error": "person not found" }));
}

#[tokio::test]
async fn test_get_blank_document_is_rejected() {
    let router = test_router();

    let (status, body) = send(&router, Method::GET, "/people/%20", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        as_json(&body),
        json!({ "error": "the document must not be empty" })
    );
}

#[tokio::test]
async fn test_update_changes_fields() {
    let router = test_router();
    send(&router, Method::POST, "/people", Some(ana())).await;

    let mut payload = ana();
    payload["phone"] = json!("7654321");

    let (status, body) = send(&router, Method::PUT, "/people/123456", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({ "message": "updated" }));

    let (_, body) = send(&router, Method::GET, "/people/123456", None).await;
    assert_eq!(as_json(&body), payload);
}

#[tokio::test]
async fn test_update_document_change_is_rejected() {
    let router = test_router();
    send(&router, Method::POST, "/people", Some(ana())).await;

    let mut payload = ana();
    payload["document"] = json!("999999");

    let (status, body) = send(&router, Method::PUT, "/people/123456", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        as_json(&body),
        json!({ "error": "the document of a person cannot be changed" })
    );
}

#[tokio::test]
async fn test_update_unknown_document_returns_not_found() {
    let router = test_router();

    let (status, body) = send(&router, Method::PUT, "/people/123456", Some(ana())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&body), json!({ "error": "person not found" }));
}

#[tokio::test]
async fn test_delete_removes_person() {
    let router = test_router();
    send(&router, Method::POST, "/people", Some(ana())).await;

    let (status, body) = send(&router, Method::DELETE, "/people/123456", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({ "message": "deleted" }));

    let (status, _) = send(&router, Method::GET, "/people/123456", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_document_is_rejected() {
    let router = test_router();

    let (status, body) = send(&router, Method::DELETE, "/people/000000", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&body), json!({ "error": "person not found" }));
}
