//! Unit tests for Portfolio crate

use auth::application::{RegisterInput, RegisterUseCase};
use auth::{AuthAppState, AuthConfig, StoreUserRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use kernel::id::{ExperienceId, ProjectId};
use platform::password::PasswordCost;
use serde_json::{Value, json};
use std::sync::Arc;
use storage::MemoryItemStore;
use tower::ServiceExt;

use crate::application::{ExperienceService, ProjectService};
use crate::domain::input::{ExperienceDraft, ExperiencePatch, ProjectDraft, ProjectPatch};
use crate::error::PortfolioError;
use crate::infra::item_store::StorePortfolioRepository;
use crate::presentation::{experience_router, project_router};

type Repo = StorePortfolioRepository<MemoryItemStore>;

fn experience(company: &str, order: i64) -> ExperienceDraft {
    ExperienceDraft {
        company: company.to_string(),
        role: "Engineer".to_string(),
        location: "Remote".to_string(),
        start_date: "Jan. 2024".to_string(),
        end_date: "Present".to_string(),
        bullets: vec!["Built things".to_string()],
        logo_url: None,
        order,
    }
}

fn project(title: &str, order: i64) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        tech_stack: "Rust, PostgreSQL".to_string(),
        date_range: "Feb. 2025 - May 2025".to_string(),
        bullets: vec!["Shipped".to_string()],
        github_url: None,
        live_url: None,
        cover_image_url: None,
        order,
    }
}

// ============================================================================
// Services
// ============================================================================

mod service_tests {
    use super::*;

    #[tokio::test]
    async fn test_experiences_listed_by_order() {
        let service = ExperienceService::new(Arc::new(Repo::new(MemoryItemStore::new())));

        service.create(experience("Second", 2)).await.unwrap();
        service.create(experience("First", 1)).await.unwrap();

        let companies: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.company)
            .collect();
        assert_eq!(companies, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_projects_listed_by_order_with_ties() {
        use crate::domain::repository::ProjectRepository;

        let repo = Arc::new(Repo::new(MemoryItemStore::new()));
        let service = ProjectService::new(repo.clone());

        service.create(project("c", 5)).await.unwrap();
        service.create(project("a", 0)).await.unwrap();
        service.create(project("b", 0)).await.unwrap();
        service.create(project("d", 0)).await.unwrap();

        let listed: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| (p.order, p.title))
            .collect();

        // Ties keep the store's scan order
        let tied_in_scan_order: Vec<_> = repo
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .filter(|p| p.order == 0)
            .map(|p| (0, p.title))
            .collect();

        assert_eq!(listed.len(), 4);
        assert_eq!(listed[..3], tied_in_scan_order[..]);
        assert_eq!(listed[3], (5, "c".to_string()));
    }

    #[tokio::test]
    async fn test_experience_partial_update() {
        let service = ExperienceService::new(Arc::new(Repo::new(MemoryItemStore::new())));
        let created = service.create(experience("Acme", 3)).await.unwrap();

        let patch = ExperiencePatch {
            end_date: Some("Dec. 2025".to_string()),
            ..Default::default()
        };
        let updated = service.update(&created.experience_id, patch).await.unwrap();

        assert_eq!(updated.experience_id, created.experience_id);
        assert_eq!(updated.end_date, "Dec. 2025");
        assert_eq!(updated.company, "Acme");
        assert_eq!(updated.order, 3);
        assert_eq!(updated.bullets, created.bullets);
    }

    #[tokio::test]
    async fn test_empty_patch_returns_current_project() {
        let service = ProjectService::new(Arc::new(Repo::new(MemoryItemStore::new())));
        let created = service.create(project("Site", 1)).await.unwrap();

        let unchanged = service
            .update(&created.project_id, ProjectPatch::default())
            .await
            .unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn test_missing_entries() {
        let repo = Arc::new(Repo::new(MemoryItemStore::new()));
        let experiences = ExperienceService::new(repo.clone());
        let projects = ProjectService::new(repo);

        assert!(matches!(
            experiences.get(&ExperienceId::new()).await,
            Err(PortfolioError::ExperienceNotFound)
        ));
        assert!(matches!(
            experiences
                .update(&ExperienceId::new(), ExperiencePatch::default())
                .await,
            Err(PortfolioError::ExperienceNotFound)
        ));
        assert!(matches!(
            projects.delete(&ProjectId::new()).await,
            Err(PortfolioError::ProjectNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let service = ProjectService::new(Arc::new(Repo::new(MemoryItemStore::new())));
        let created = service.create(project("Gone", 0)).await.unwrap();

        service.delete(&created.project_id).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
        assert!(matches!(
            service.get(&created.project_id).await,
            Err(PortfolioError::ProjectNotFound)
        ));
    }
}

// ============================================================================
// HTTP
// ============================================================================

mod http_tests {
    use super::*;

    struct TestApp {
        router: Router,
        admin_token: String,
        user_token: String,
    }

    async fn test_app() -> TestApp {
        let store = MemoryItemStore::new();
        let config = AuthConfig {
            token_secret: "test-secret".to_string(),
            admin_emails: vec!["admin@example.com".to_string()],
            password_cost: PasswordCost {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
            ..Default::default()
        };
        let auth_state = AuthAppState::new(StoreUserRepository::new(store.clone()), config).unwrap();

        let mut tokens = Vec::new();
        for email in ["admin@example.com", "user@example.com"] {
            let output = RegisterUseCase::new(
                auth_state.repo.clone(),
                auth_state.tokens.clone(),
                auth_state.config.clone(),
            )
            .execute(RegisterInput {
                email: email.to_string(),
                display_name: "Someone".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await
            .unwrap();
            tokens.push(output.token.token);
        }

        let repo = StorePortfolioRepository::new(store);
        let router = Router::new()
            .nest("/api/experiences", experience_router(repo.clone(), auth_state.guard()))
            .nest("/api/projects", project_router(repo, auth_state.guard()));

        let user_token = tokens.pop().unwrap();
        let admin_token = tokens.pop().unwrap();
        TestApp {
            router,
            admin_token,
            user_token,
        }
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    fn experience_body(company: &str, order: i64) -> Value {
        json!({
            "company": company,
            "role": "Engineer",
            "location": "Remote",
            "start_date": "Jan. 2024",
            "end_date": "Present",
            "bullets": ["Built things"],
            "order": order,
        })
    }

    #[tokio::test]
    async fn test_experience_lifecycle() {
        let app = test_app().await;
        let admin = Some(app.admin_token.as_str());

        let (status, second) = send(
            &app.router,
            request("POST", "/api/experiences", admin, Some(experience_body("Second", 2))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(second["logo_url"].is_null());

        send(
            &app.router,
            request("POST", "/api/experiences", admin, Some(experience_body("First", 1))),
        )
        .await;

        let (status, listed) = send(&app.router, request("GET", "/api/experiences", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["count"], 2);
        assert_eq!(listed["experiences"][0]["company"], "First");
        assert_eq!(listed["experiences"][1]["company"], "Second");

        let uri = format!("/api/experiences/{}", second["experience_id"].as_str().unwrap());

        let (status, updated) = send(
            &app.router,
            request("PUT", &uri, admin, Some(json!({ "order": 0, "role": "Lead" }))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["role"], "Lead");
        assert_eq!(updated["company"], "Second");

        let (_, listed) = send(&app.router, request("GET", "/api/experiences", None, None)).await;
        assert_eq!(listed["experiences"][0]["company"], "Second");

        let (status, _) = send(&app.router, request("DELETE", &uri, admin, None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app.router, request("GET", &uri, None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Experience not found.");
    }

    #[tokio::test]
    async fn test_project_writes_require_admin() {
        let app = test_app().await;
        let body = json!({
            "title": "Site",
            "tech_stack": "Rust",
            "date_range": "2025",
            "bullets": ["b"],
        });

        let (status, _) = send(&app.router, request("POST", "/api/projects", None, Some(body.clone()))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app.router,
            request("POST", "/api/projects", Some(&app.user_token), Some(body.clone())),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, created) = send(
            &app.router,
            request("POST", "/api/projects", Some(&app.admin_token), Some(body)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["order"], 0);

        let uri = format!("/api/projects/{}", created["project_id"].as_str().unwrap());
        let (status, _) = send(&app.router, request("DELETE", &uri, Some(&app.user_token), None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, fetched) = send(&app.router, request("GET", &uri, None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_project_validation_error() {
        let app = test_app().await;
        let (status, body) = send(
            &app.router,
            request(
                "POST",
                "/api/projects",
                Some(&app.admin_token),
                Some(json!({
                    "title": "Site",
                    "tech_stack": "Rust",
                    "date_range": "2025",
                    "bullets": [],
                })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "bullets must contain at least 1 item(s)");
    }

    #[tokio::test]
    async fn test_experience_missing_field_is_bad_request() {
        let app = test_app().await;
        let mut body = experience_body("Acme", 1);
        body.as_object_mut().unwrap().remove("company");

        let (status, body) = send(
            &app.router,
            request("POST", "/api/experiences", Some(&app.admin_token), Some(body)),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("missing field `company`"));
    }

    #[tokio::test]
    async fn test_project_wrong_field_type_is_bad_request() {
        let app = test_app().await;
        let (status, body) = send(
            &app.router,
            request(
                "POST",
                "/api/projects",
                Some(&app.admin_token),
                Some(json!({
                    "title": "Site",
                    "tech_stack": "Rust",
                    "date_range": "2025",
                    "bullets": "not a list",
                })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("bullets"));
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let app = test_app().await;

        let (status, _) = send(&app.router, request("GET", "/api/projects/nope", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let uri = format!("/api/projects/{}", ProjectId::new());
        let (status, body) = send(
            &app.router,
            request("PUT", &uri, Some(&app.admin_token), Some(json!({ "title": "x" }))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Project not found.");
    }
}
