//! Runner provisioning endpoints

use corral_core::dto::pool::CreateRunnersSpec;

use crate::FleetClient;
use crate::error::Result;

impl FleetClient {
    /// Ask the fleet service to launch new runner hosts
    ///
    /// The call returns once the fleet service accepts the order; the
    /// machines boot and register with GitHub on their own afterwards.
    /// Accepted instances show up in [`FleetClient::list_instances`]
    /// right away, as booting capacity.
    ///
    /// # Arguments
    /// * `spec` - Exact number of hosts to launch and where they register
    pub async fn create_runners(&self, spec: &CreateRunnersSpec) -> Result<()> {
        let url = format!("{}/api/runners", self.base_url);
        let response = self.client.post(&url).json(spec).send().await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FleetError;
    use corral_core::domain::scope::Scope;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_runners_posts_exact_count() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/runners"))
            .and(body_json(json!({
                "number_of_runners": 3,
                "scope": {"kind": "Organization", "owner": "acme"},
                "enterprise_base_url": null
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = FleetClient::new(server.uri());
        let spec = CreateRunnersSpec {
            number_of_runners: 3,
            scope: Scope::organization("acme"),
            enterprise_base_url: None,
        };

        client.create_runners(&spec).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_runners_carries_enterprise_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/runners"))
            .and(body_json(json!({
                "number_of_runners": 1,
                "scope": {"kind": "Repository", "owner": "acme/widgets"},
                "enterprise_base_url": "https://github.example.com"
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = FleetClient::new(server.uri());
        let spec = CreateRunnersSpec {
            number_of_runners: 1,
            scope: Scope::repository("acme/widgets"),
            enterprise_base_url: Some("https://github.example.com".to_string()),
        };

        client.create_runners(&spec).await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_order_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/runners"))
            .respond_with(ResponseTemplate::new(503).set_body_string("no capacity"))
            .mount(&server)
            .await;

        let client = FleetClient::new(server.uri());
        let spec = CreateRunnersSpec {
            number_of_runners: 2,
            scope: Scope::organization("acme"),
            enterprise_base_url: None,
        };

        let err = client.create_runners(&spec).await.unwrap_err();
        match err {
            FleetError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert!(message.contains("no capacity"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
