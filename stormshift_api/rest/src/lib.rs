use std::net::IpAddr;

use axum::{
    http::{header, Method},
    Router,
};
use stormshift_core_contact_contracts::ContactFeatureService;
use stormshift_core_health_contracts::HealthFeatureService;
use stormshift_di::Build;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            // The site is served from a different origin than the api.
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::POST])
                    .allow_headers([header::CONTENT_TYPE]),
            );
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::panic_handler::add(router)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use stormshift_core_contact_contracts::{ContactSubmitFormError, MockContactFeatureService};
    use stormshift_core_health_contracts::{HealthStatus, MockHealthFeatureService};
    use stormshift_models::contact::{ContactForm, FieldViolation, SubmissionField};
    use tower::ServiceExt;

    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "This is a long enough message.".into(),
        }
    }

    fn contact_request(body: Body) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn submit_ok() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit_form(form(), Ok(()));
        let router = RestServer {
            health: MockHealthFeatureService::new(),
            contact,
        }
        .router();

        // Act
        let response = router
            .oneshot(contact_request(Body::from(
                serde_json::to_vec(&form()).unwrap(),
            )))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": "Message sent successfully"})
        );
    }

    #[tokio::test]
    async fn submit_validation_error() {
        // Arrange
        let violations = vec![
            FieldViolation {
                field: SubmissionField::Email,
                message: "Valid email is required",
            },
            FieldViolation {
                field: SubmissionField::Message,
                message: "Message must be at least 10 characters",
            },
        ];
        let contact = MockContactFeatureService::new().with_submit_form(
            ContactForm {
                email: "not-an-email".into(),
                message: "short".into(),
                ..form()
            },
            Err(ContactSubmitFormError::Validation(violations)),
        );
        let router = RestServer {
            health: MockHealthFeatureService::new(),
            contact,
        }
        .router();

        // Act
        let response = router
            .oneshot(contact_request(Body::from(
                serde_json::to_vec(&json!({
                    "name": "Ada",
                    "email": "not-an-email",
                    "subject": "Hello",
                    "message": "short",
                }))
                .unwrap(),
            )))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "message": "Validation error",
                "errors": [
                    {"field": "email", "message": "Valid email is required"},
                    {"field": "message", "message": "Message must be at least 10 characters"},
                ],
            })
        );
    }

    #[tokio::test]
    async fn submit_missing_fields_reach_the_service_as_empty_strings() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit_form(
            ContactForm {
                name: "Ada".into(),
                ..Default::default()
            },
            Err(ContactSubmitFormError::Validation(vec![FieldViolation {
                field: SubmissionField::Email,
                message: "Valid email is required",
            }])),
        );
        let router = RestServer {
            health: MockHealthFeatureService::new(),
            contact,
        }
        .router();

        // Act
        let response = router
            .oneshot(contact_request(Body::from(
                serde_json::to_vec(&json!({"name": "Ada"})).unwrap(),
            )))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn submit_dispatch_failure() {
        // Arrange
        let contact = MockContactFeatureService::new()
            .with_submit_form(form(), Err(ContactSubmitFormError::Send));
        let router = RestServer {
            health: MockHealthFeatureService::new(),
            contact,
        }
        .router();

        // Act
        let response = router
            .oneshot(contact_request(Body::from(
                serde_json::to_vec(&form()).unwrap(),
            )))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "message": "Failed to send message. Please try again later.",
            })
        );
    }

    #[tokio::test]
    async fn submit_transport_error_is_not_leaked() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit_form(
            form(),
            Err(anyhow::anyhow!("smtp auth failed: hunter2 rejected").into()),
        );
        let router = RestServer {
            health: MockHealthFeatureService::new(),
            contact,
        }
        .router();

        // Act
        let response = router
            .oneshot(contact_request(Body::from(
                serde_json::to_vec(&form()).unwrap(),
            )))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Failed to send message. Please try again later.",
            })
        );
    }

    #[tokio::test]
    async fn submit_invalid_json() {
        // Arrange
        let router = RestServer {
            health: MockHealthFeatureService::new(),
            contact: MockContactFeatureService::new(),
        }
        .router();

        // Act
        let response = router
            .oneshot(contact_request(Body::from("not json")))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Invalid JSON data", "errors": []})
        );
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_origin() {
        // Arrange
        let router = RestServer {
            health: MockHealthFeatureService::new(),
            contact: MockContactFeatureService::new(),
        }
        .router();

        // Act
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/contact")
                    .header(header::ORIGIN, "https://stormshiftlabs.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    }

    #[tokio::test]
    async fn health_ok() {
        // Arrange
        let router = RestServer {
            health: MockHealthFeatureService::new().with_get_status(HealthStatus { email: true }),
            contact: MockContactFeatureService::new(),
        }
        .router();

        // Act
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"http": true, "email": true})
        );
    }

    #[tokio::test]
    async fn health_degraded() {
        // Arrange
        let router = RestServer {
            health: MockHealthFeatureService::new().with_get_status(HealthStatus { email: false }),
            contact: MockContactFeatureService::new(),
        }
        .router();

        // Act
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"http": true, "email": false})
        );
    }

    #[tokio::test]
    async fn request_id_header_is_set() {
        // Arrange
        let router = RestServer {
            health: MockHealthFeatureService::new().with_get_status(HealthStatus { email: true }),
            contact: MockContactFeatureService::new(),
        }
        .router();

        // Act
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Assert
        assert!(response.headers().contains_key("X-Request-Id"));
    }
}
