//! Mock Papers NG platform backed by wiremock

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the proposal view page on the mock server
pub const VIEW_PATH: &str = "/papers_ng/activity/view";

/// Mock platform serving one response per proposal id
pub struct MockPlatform {
    server: MockServer,
}

impl MockPlatform {
    /// Start an empty platform; unknown ids answer 404
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure the crawler with
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), VIEW_PATH)
    }

    /// Serve `body` with status 200 for `id`
    pub async fn page(&self, id: u64, body: impl Into<String>) -> &Self {
        self.respond(id, ResponseTemplate::new(200).set_body_string(body.into()))
            .await
    }

    /// Answer `id` with an empty response carrying `status`
    pub async fn status(&self, id: u64, status: u16) -> &Self {
        self.respond(id, ResponseTemplate::new(status)).await
    }

    async fn respond(&self, id: u64, template: ResponseTemplate) -> &Self {
        Mock::given(method("GET"))
            .and(path(VIEW_PATH))
            .and(query_param("id", id.to_string()))
            .respond_with(template)
            .expect(1)
            .mount(&self.server)
            .await;
        self
    }

    /// Ids requested so far, in request order
    pub async fn requested_ids(&self) -> Vec<u64> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| {
                request
                    .url
                    .query_pairs()
                    .find(|(key, _)| key == "id")
                    .and_then(|(_, value)| value.parse().ok())
            })
            .collect()
    }
}
