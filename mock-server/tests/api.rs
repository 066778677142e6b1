use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Dev, Engineer};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_engineers_empty() {
    let resp = app().oneshot(empty_request("GET", "/engineers")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let engineers: Vec<Engineer> = body_json(resp).await;
    assert!(engineers.is_empty());
}

#[tokio::test]
async fn list_devs_empty() {
    let resp = app().oneshot(empty_request("GET", "/dev")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let devs: Vec<Dev> = body_json(resp).await;
    assert!(devs.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_engineer_returns_201_with_server_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/engineers",
            r#"{"id":"","name":"sloane","email":"sloane@finches.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let engineer: Engineer = body_json(resp).await;
    assert_eq!(engineer.name, "sloane");
    assert_eq!(engineer.id.len(), 5);
}

#[tokio::test]
async fn create_engineer_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/engineers", r#"{"name":"no email"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_engineer_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/engineers/id/NOPE1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"engineer NOPE1 not found");
}

#[tokio::test]
async fn get_dev_not_found() {
    let resp = app().oneshot(empty_request("GET", "/dev/id/NOPE1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update / delete ---

#[tokio::test]
async fn update_dev_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/dev/NOPE1",
            r#"{"id":"NOPE1","name":"x","engineers":[]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_engineer_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/engineers/NOPE1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- attach ---

#[tokio::test]
async fn attach_to_missing_dev_returns_404() {
    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/engineers",
            r#"{"name":"sloane","email":"sloane@finches.com"}"#,
        ))
        .await
        .unwrap();
    let engineer: Engineer = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/dev/NOPE1",
            &format!(r#"{{"id":"{}"}}"#, engineer.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn engineer_and_dev_lifecycle() {
    let mut app = app().into_service();

    // create two engineers
    let mut engineers = Vec::new();
    for (name, email) in [("sloane", "sloane@finches.com"), ("ari", "ari@finches.com")] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/engineers",
                &format!(r#"{{"id":"","name":"{name}","email":"{email}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let engineer: Engineer = body_json(resp).await;
        engineers.push(engineer);
    }

    // create a dev
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/dev",
            r#"{"id":"","name":"platform","engineers":[]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let dev: Dev = body_json(resp).await;
    assert!(dev.engineers.is_empty());

    // attach both, second first
    for engineer in engineers.iter().rev() {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                &format!("/dev/{}", dev.id),
                &format!(r#"{{"id":"{}"}}"#, engineer.id),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // get keeps attach order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/dev/id/{}", dev.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Dev = body_json(resp).await;
    assert_eq!(fetched.engineers, vec![engineers[1].clone(), engineers[0].clone()]);

    // update the engineer
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/engineers/{}", engineers[0].id),
            r#"{"name":"sloane","email":"sloane@dunlins.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Engineer = body_json(resp).await;
    assert_eq!(updated.email, "sloane@dunlins.com");

    // delete the dev
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/dev/{}", dev.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // list devs after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/dev"))
        .await
        .unwrap();
    let devs: Vec<Dev> = body_json(resp).await;
    assert!(devs.is_empty());

    // engineers survive the dev
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/engineers"))
        .await
        .unwrap();
    let remaining: Vec<Engineer> = body_json(resp).await;
    assert_eq!(remaining.len(), 2);
}
