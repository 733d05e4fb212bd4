use std::io::Read;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tiny_http::{Response, Server};
use visionworks_imagegen::{
    AspectRatio, Config, GeminiClient, GenerateError, GenerationJob, ImageGenerator, run_batch,
};

/// What the mock saw for one request
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    url: String,
    api_key: Option<String>,
    body: String,
}

struct MockGemini {
    base: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockGemini {
    /// Serve on an ephemeral port; `reply` maps a request url to (status, body)
    fn start(reply: fn(&str) -> (u16, String)) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let api_key = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("x-goog-api-key"))
                    .map(|h| h.value.as_str().to_string());
                log.lock().unwrap().push(Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    api_key,
                    body,
                });
                let (status, text) = reply(request.url());
                let _ = request.respond(Response::from_string(text).with_status_code(status));
            }
        });
        Self {
            base: format!("http://{addr}/v1beta"),
            requests,
        }
    }

    fn client(&self) -> GeminiClient {
        let mut config = Config::with_api_key("test-key");
        config.api_base = self.base.clone();
        GeminiClient::new(&config)
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

const IMAGE_RESPONSE: &str =
    r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"iVBORw0K"}}]}}]}"#;

fn happy(url: &str) -> (u16, String) {
    if url.ends_with(":generateContent") {
        (200, IMAGE_RESPONSE.to_string())
    } else {
        (
            200,
            r#"{"models":[{"name":"models/nano-banana-pro-preview","displayName":"Nano Banana Pro","supportedGenerationMethods":["generateContent"]},{"name":"models/bare"}]}"#
                .to_string(),
        )
    }
}

fn rate_limited(_: &str) -> (u16, String) {
    (429, r#"{"error":{"code":429,"message":"quota"}}"#.to_string())
}

fn job(name: &'static str) -> GenerationJob {
    GenerationJob {
        name,
        prompt: "glowing cyan veins",
        aspect_ratio: AspectRatio::Portrait,
    }
}

#[tokio::test]
async fn generate_posts_prompt_and_decodes_image() {
    let mock = MockGemini::start(happy);

    let bytes = mock.client().generate(&job("hero-bg")).await.unwrap();
    assert_eq!(bytes, b"\x89PNG\r\n");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.method, "POST");
    assert_eq!(sent.url, "/v1beta/models/nano-banana-pro-preview:generateContent");
    assert_eq!(sent.api_key.as_deref(), Some("test-key"));
    let body: serde_json::Value = serde_json::from_str(&sent.body).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "glowing cyan veins");
    assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "3:4");
}

#[tokio::test]
async fn non_success_status_carries_body() {
    let mock = MockGemini::start(rate_limited);

    match mock.client().generate(&job("hero-bg")).await {
        Err(GenerateError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert!(body.contains("quota"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_models_parses_optional_fields() {
    let mock = MockGemini::start(happy);

    let models = mock.client().list_models().await.unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].display_name.as_deref(), Some("Nano Banana Pro"));
    assert_eq!(models[0].supported_generation_methods, vec!["generateContent"]);
    assert!(models[1].display_name.is_none());
    assert_eq!(mock.requests()[0].url, "/v1beta/models");
}

#[tokio::test]
async fn batch_against_mock_writes_files() {
    let mock = MockGemini::start(happy);
    let dir = tempfile::tempdir().unwrap();

    let report = run_batch(
        &mock.client(),
        &[job("one"), job("two")],
        dir.path(),
        Duration::from_millis(1),
    )
    .await;

    assert_eq!(report.generated, vec!["one", "two"]);
    assert_eq!(std::fs::read(dir.path().join("two.png")).unwrap(), b"\x89PNG\r\n");
}
