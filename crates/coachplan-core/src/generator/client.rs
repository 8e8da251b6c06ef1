//! HTTP client for the chat-completion API.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{build_prompt, parse_generated_plan, GenerationRequest, GeneratorConfig, SYSTEM_PROMPT};
use crate::{
    error::{CoachError, GenerationResultExt, Result},
    models::Plan,
};

/// Client that asks a hosted model for a plan.
#[derive(Debug, Clone)]
pub struct PlanGenerator {
    http: reqwest::Client,
    config: GeneratorConfig,
}

impl PlanGenerator {
    /// Creates a generator with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoachError::configuration(format!("HTTP client setup failed: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Requests a plan for `request`.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::Generation` on transport failure, a non-success
    /// status, a reply without content, or content that is not a plan.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Plan> {
        let url = self.config.completions_url();
        info!(
            "Requesting {}-minute {} plan from {}",
            request.duration_minutes, request.sport, self.config.model
        );

        let prompt = build_prompt(request);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .generation_context("request failed")?;

        let reply: ChatResponse = self.check_response_json(response).await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| CoachError::generation("response contained no message content"))?;

        debug!("Received {} bytes of plan content", content.len());
        parse_generated_plan(&content, request)
    }

    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Plan generation returned HTTP {status}");
            return Err(CoachError::generation(format!(
                "HTTP {status}: {}",
                body.trim()
            )));
        }

        response.json().await.generation_context("JSON parse error")
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Serves one HTTP response on a local port and returns the base URL.
    ///
    /// The request is read in full before replying so the client never sees
    /// a reset while it is still sending.
    async fn serve_once(status: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local port");
        let addr = listener.local_addr().expect("local address");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let read = socket.read(&mut chunk).await.expect("read request");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/v1")
    }

    fn request_complete(request: &[u8]) -> bool {
        let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let length = String::from_utf8_lossy(&request[..head_end])
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() - (head_end + 4) >= length
    }

    fn generator_for(base_url: String) -> PlanGenerator {
        let config = GeneratorConfig {
            base_url,
            timeout: Duration::from_secs(5),
            ..GeneratorConfig::new("sk-test")
        };
        PlanGenerator::new(config).expect("client builds")
    }

    fn completion(content: &str) -> String {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_error_status_is_generation_error() {
        let base_url = serve_once(
            "500 Internal Server Error",
            r#"{"error": "overloaded"}"#.to_string(),
        )
        .await;
        let err = generator_for(base_url)
            .generate(&request())
            .await
            .expect_err("server error");

        assert!(matches!(err, CoachError::Generation { .. }));
        let message = err.to_string();
        assert!(message.contains("HTTP 500"), "{message}");
        assert!(message.contains("overloaded"), "{message}");
    }

    #[tokio::test]
    async fn test_first_choice_content_becomes_plan() {
        let content = "```json\n{\"title\": \"Serve ladder\", \"mainActivities\": [{\"name\": \"Targets\", \"duration\": \"12 minutes\"}]}\n```";
        let base_url = serve_once("200 OK", completion(content)).await;
        let plan = generator_for(base_url)
            .generate(&request())
            .await
            .expect("plan from reply");

        assert_eq!(plan.title.as_deref(), Some("Serve ladder"));
        assert_eq!(plan.sport.as_deref(), Some("Tennis"));
        assert_eq!(plan.duration, Some(30));
        assert_eq!(plan.main_activities()[0].duration_label(), Some("12 minutes"));
    }

    #[tokio::test]
    async fn test_empty_content_is_generation_error() {
        let base_url = serve_once("200 OK", completion("   ")).await;
        let err = generator_for(base_url)
            .generate(&request())
            .await
            .expect_err("blank content");

        assert!(matches!(err, CoachError::Generation { .. }));
        assert!(err.to_string().contains("no message content"));
    }

    #[tokio::test]
    async fn test_missing_choices_is_generation_error() {
        let base_url = serve_once("200 OK", "{}".to_string()).await;
        let err = generator_for(base_url)
            .generate(&request())
            .await
            .expect_err("no choices");
        assert!(err.to_string().contains("no message content"));
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            sport: "Tennis".to_string(),
            level: "Beginner".to_string(),
            duration_minutes: 30,
            group_size: "1 (Individual)".to_string(),
            equipment: None,
            objectives: None,
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_generation_error() {
        let config = GeneratorConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            ..GeneratorConfig::new("sk-test")
        };
        let generator = PlanGenerator::new(config).expect("client builds");
        let err = generator
            .generate(&request())
            .await
            .expect_err("nothing listens on the discard port");
        assert!(matches!(err, CoachError::Generation { .. }));
        assert!(err.to_string().starts_with("Plan generation failed: request failed"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_reply_without_content_deserializes() {
        let reply: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#)
                .expect("reply parses");
        assert!(reply.choices[0].message.content.is_none());
    }
}
