//! Unit tests for HTTP client functionality

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> FplClient {
    FplClient::new(resolve_base_url(Some(format!("{}/api", server.uri()))).unwrap()).unwrap()
}

#[cfg(test)]
mod base_url_tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_gets_trailing_slash() {
        let url = resolve_base_url(Some("http://localhost:9000/api".to_string())).unwrap();
        assert_eq!(url, "http://localhost:9000/api/");
    }

    #[test]
    fn test_explicit_base_url_kept_when_slashed() {
        let url = resolve_base_url(Some("https://example.test/api/".to_string())).unwrap();
        assert_eq!(url, "https://example.test/api/");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = resolve_base_url(Some("ftp://example.test/".to_string()));
        match result {
            Err(FplError::InvalidBaseUrl { url }) => assert_eq!(url, "ftp://example.test/"),
            other => panic!("Expected InvalidBaseUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_env_fallback_and_default() {
        // Both env cases live in one test so they cannot race each other
        std::env::set_var(BASE_URL_ENV_VAR, "http://127.0.0.1:1234/fpl");
        assert_eq!(resolve_base_url(None).unwrap(), "http://127.0.0.1:1234/fpl/");

        // Explicit value wins over the environment
        let url = resolve_base_url(Some("http://other.test/".to_string())).unwrap();
        assert_eq!(url, "http://other.test/");

        std::env::remove_var(BASE_URL_ENV_VAR);
        assert_eq!(resolve_base_url(None).unwrap(), FPL_BASE_URL);
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_bootstrap_success() {
        let mock_server = MockServer::start().await;

        let mock_response = json!({
            "events": [{ "id": 1, "is_current": true }],
            "teams": [],
            "elements": [{ "id": 99, "web_name": "Saka" }]
        });

        Mock::given(method("GET"))
            .and(path("/api/bootstrap-static/"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&mock_server)
            .await;

        let value = client_for(&mock_server).fetch_bootstrap().await.unwrap();
        assert_eq!(value, mock_response);
    }

    #[tokio::test]
    async fn test_fetch_json_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).fetch_bootstrap().await;
        match result {
            Err(FplError::Status { url, status }) => {
                assert!(url.ends_with("/api/bootstrap-static/"));
                assert_eq!(status.as_u16(), 503);
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_json_invalid_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fixtures/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).fetch_all_fixtures().await;
        assert!(matches!(result, Err(FplError::Http(_))));
    }

    #[tokio::test]
    async fn test_fetch_fixtures_filters_by_gameweek() {
        let mock_server = MockServer::start().await;

        let mock_response = json!([
            { "id": 1, "event": 7, "team_h": 1, "team_a": 2 },
            { "id": 2, "event": 8, "team_h": 3, "team_a": 4 },
            { "id": 3, "event": null, "team_h": 5, "team_a": 6 },
            { "id": 4, "event": 8, "team_h": 7, "team_a": 8 }
        ]);

        Mock::given(method("GET"))
            .and(path("/api/fixtures/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .mount(&mock_server)
            .await;

        let fixtures = client_for(&mock_server)
            .fetch_fixtures(Gameweek::new(8))
            .await
            .unwrap();

        let ids: Vec<u32> = fixtures.iter().map(|f| f.id.as_u32()).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[tokio::test]
    async fn test_fetch_fixtures_none_in_gameweek() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/fixtures/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "id": 1, "event": 1, "team_h": 1, "team_a": 2 }])),
            )
            .mount(&mock_server)
            .await;

        let fixtures = client_for(&mock_server)
            .fetch_fixtures(Gameweek::new(39))
            .await
            .unwrap();
        assert!(fixtures.is_empty());
    }
}
