    use super::*;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    fn plan_response(text: &str) -> String {
        serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": text}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 100,
                "candidatesTokenCount": 20,
                "totalTokenCount": 120
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_generate_content_success() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/models/gemini-1.5-flash:generateContent"))
            .and(matchers::query_param("key", "test-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(plan_response(r##"[{"action":"click","selector":"#go"}]"##)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url("test-key".to_string(), mock_server.uri());
        let request = GenerateContentRequest {
            contents: vec![Content::user("do something")],
            generation_config: None,
        };

        let response = client
            .generate_content("gemini-1.5-flash", request)
            .await
            .unwrap();
        assert_eq!(response.text(), r##"[{"action":"click","selector":"#go"}]"##);
    }

    #[tokio::test]
    async fn test_generate_content_auth_error() {
        let mock_server = MockServer::start().await;

        let error_body = r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/models/gemini-1.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(403).set_body_string(error_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url("bad-key".to_string(), mock_server.uri());
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            generation_config: None,
        };

        let result = client.generate_content("gemini-1.5-flash", request).await;
        match result.unwrap_err() {
            ProviderError::AuthenticationFailed(message) => {
                assert!(message.contains("API key not valid"));
            }
            other => panic!("Expected AuthenticationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_content_rate_limited() {
        let mock_server = MockServer::start().await;

        let error_body = r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/models/gemini-1.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(429).set_body_string(error_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url("test-key".to_string(), mock_server.uri());
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            generation_config: None,
        };

        let result = client.generate_content("gemini-1.5-flash", request).await;
        match result.unwrap_err() {
            ProviderError::RateLimited(message) => {
                assert!(message.contains("exhausted"));
            }
            other => panic!("Expected RateLimited, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_content_server_error_plain_body() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/models/gemini-1.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url("test-key".to_string(), mock_server.uri());
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            generation_config: None,
        };

        let result = client.generate_content("gemini-1.5-flash", request).await;
        match result.unwrap_err() {
            ProviderError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("Internal Server Error"));
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_content_malformed_success_body() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/models/gemini-1.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url("test-key".to_string(), mock_server.uri());
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            generation_config: None,
        };

        let result = client.generate_content("gemini-1.5-flash", request).await;
        match result.unwrap_err() {
            ProviderError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("Failed to parse response"));
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_content_sends_request_body() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/models/gemini-1.5-flash:generateContent"))
            .and(matchers::body_partial_json(serde_json::json!({
                "generationConfig": {
                    "temperature": 0.0,
                    "responseMimeType": "application/json"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(plan_response("[]")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GeminiClient::with_base_url("test-key".to_string(), mock_server.uri());
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.0),
                response_mime_type: Some("application/json".to_string()),
            }),
        };

        let result = client.generate_content("gemini-1.5-flash", request).await;
        assert!(result.is_ok());
    }
