use axum::routing::{delete, post, put};
use axum::{Router, routing::get};

use super::handlers;
use super::state::AppState;

pub fn build_routes() -> Router {
    routes(AppState::new())
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs", post(handlers::jobs::create))
        .route("/jobs/filter", get(handlers::jobs::filter))
        .route("/jobs/{id}", get(handlers::jobs::get))
        .route("/jobs/{id}", put(handlers::jobs::update))
        .route("/jobs/{id}", delete(handlers::jobs::delete))
        .route("/auth/login", post(handlers::auth::login))
        .route("/healthz", get(handlers::probes::healthz))
        .route("/livez", get(handlers::probes::livez))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::routes;
    use crate::pkg::server::state::AppState;

    fn app() -> Router {
        routes(AppState::new())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn valid_posting() -> Value {
        json!({
            "title": "Closing Coordinator",
            "department": "operations",
            "location": "dallas",
            "type": "contract",
            "salary": "$40,000 - $55,000",
            "summary": "Coordinate closings.",
            "description": "Coordinate loan closings end to end.",
            "requirements": "• Attention to detail",
            "niceToHave": "• Prior closing experience"
        })
    }

    #[tokio::test]
    async fn listing_returns_seeded_postings_newest_first() {
        let app = app();
        let (status, body) = send(app, get("/jobs")).await;
        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), 8);
        assert_eq!(jobs[0]["id"], 8);
        assert_eq!(jobs[7]["id"], 1);
        assert_eq!(jobs[7]["title"], "Processor");
    }

    #[tokio::test]
    async fn fetching_distinguishes_malformed_id_from_missing_id() {
        let app = app();
        let (status, body) = send(app.clone(), get("/jobs/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);

        let (status, body) = send(app.clone(), get("/jobs/999999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Job not found");

        let (status, body) = send(app, get("/jobs/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid job ID");
    }

    #[tokio::test]
    async fn creating_assigns_id_and_posted_date_and_round_trips() {
        let app = app();
        let (status, created) = send(app.clone(), json_request("POST", "/jobs", &valid_posting())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 9);
        assert_eq!(created["type"], "contract");
        assert!(!created["postedDate"].as_str().unwrap().is_empty());

        let (status, fetched) = send(app, get("/jobs/9")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn creating_with_missing_field_is_rejected_and_stores_nothing() {
        let app = app();
        let mut posting = valid_posting();
        posting.as_object_mut().unwrap().remove("title");
        let (status, body) = send(app.clone(), json_request("POST", "/jobs", &posting)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (_, jobs) = send(app, get("/jobs")).await;
        assert_eq!(jobs.as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn creating_with_empty_required_field_reports_the_violation() {
        let app = app();
        let mut posting = valid_posting();
        posting["title"] = json!("");
        let (status, body) = send(app, json_request("POST", "/jobs", &posting)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid job data");
        assert!(body["errors"]["title"].is_array());
    }

    #[tokio::test]
    async fn creating_with_unknown_type_is_rejected() {
        let app = app();
        let mut posting = valid_posting();
        posting["type"] = json!("weekend");
        let (status, _) = send(app, json_request("POST", "/jobs", &posting)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn updating_changes_only_supplied_fields() {
        let app = app();
        let (_, before) = send(app.clone(), get("/jobs/1")).await;

        let patch = json!({"title": "Senior Processor"});
        let (status, updated) = send(app.clone(), json_request("PUT", "/jobs/1", &patch)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Senior Processor");
        assert_eq!(updated["id"], before["id"]);
        assert_eq!(updated["department"], before["department"]);
        assert_eq!(updated["salary"], before["salary"]);
        assert_eq!(updated["postedDate"], before["postedDate"]);

        let (_, fetched) = send(app, get("/jobs/1")).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn updating_rejects_store_assigned_fields() {
        let app = app();
        let patch = json!({"id": 99, "title": "clobbered"});
        let (status, _) = send(app.clone(), json_request("PUT", "/jobs/1", &patch)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, job) = send(app, get("/jobs/1")).await;
        assert_eq!(job["title"], "Processor");
    }

    #[tokio::test]
    async fn updating_missing_or_malformed_id_fails() {
        let app = app();
        let patch = json!({"title": "anything"});
        let (status, _) = send(app.clone(), json_request("PUT", "/jobs/999999", &patch)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app, json_request("PUT", "/jobs/abc", &patch)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_removes_the_posting() {
        let app = app();
        let (status, body) = send(app.clone(), delete("/jobs/3")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(app.clone(), get("/jobs/3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app, delete("/jobs/3")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reassigned() {
        let app = app();
        let (status, _) = send(app.clone(), delete("/jobs/8")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, created) = send(app, json_request("POST", "/jobs", &valid_posting())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 9);
    }

    #[tokio::test]
    async fn filtering_matches_all_supplied_criteria() {
        let app = app();
        let (status, body) = send(app.clone(), get("/jobs/filter?department=operations")).await;
        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), 3);
        assert!(jobs.iter().all(|j| j["department"] == "operations"));

        let (_, body) = send(
            app.clone(),
            get("/jobs/filter?department=sales&location=remote"),
        )
        .await;
        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0]["title"], "Mortgage Loan Originator");

        let (_, body) = send(app, get("/jobs/filter?department=marketing")).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_and_all_criteria_impose_no_constraint() {
        let app = app();
        let (_, unfiltered) = send(app.clone(), get("/jobs/filter")).await;
        assert_eq!(unfiltered.as_array().unwrap().len(), 8);

        let (_, body) = send(app, get("/jobs/filter?department=all&location=&type=all")).await;
        assert_eq!(body, unfiltered);
    }

    #[traced_test]
    #[tokio::test]
    async fn login_checks_credentials_by_equality() {
        let app = app();
        let (status, body) = send(
            app.clone(),
            json_request(
                "POST",
                "/auth/login",
                &json!({"username": "admin", "password": "admin123"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["username"], "admin");
        assert_eq!(body["user"]["isAdmin"], true);
        assert_eq!(body["user"]["id"], 1);
        assert!(body["user"].get("password").is_none());

        let (status, body) = send(
            app.clone(),
            json_request(
                "POST",
                "/auth/login",
                &json!({"username": "admin", "password": "wrong"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");

        let (status, _) = send(
            app,
            json_request(
                "POST",
                "/auth/login",
                &json!({"username": "ghost", "password": "admin123"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn listing_an_unseeded_store_returns_an_empty_array() {
        let app = routes(AppState::with_store(
            crate::pkg::internal::store::MemStore::new(),
        ));
        let (status, body) = send(app, get("/jobs")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn probes_respond_ok() {
        let app = app();
        let (status, _) = send(app.clone(), get("/livez")).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(app, get("/healthz")).await;
        assert_eq!(status, StatusCode::OK);
    }
}
