use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};

/// Chat-completion capability consumed by the request handler.
///
/// Implementations must be thread-safe; the handler holds one shared
/// instance across all requests.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, OllamaError>;
}

#[derive(Debug)]
pub enum OllamaError {
    Timeout,
    Unreachable(reqwest::Error),
    BackendStatus { status: u16, body: String },
    MalformedResponse(String),
}

impl fmt::Display for OllamaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "ollama request timed out"),
            Self::Unreachable(err) => write!(f, "failed to reach ollama: {err}"),
            Self::BackendStatus { status, body } => {
                write!(f, "ollama returned status {status}: {body}")
            }
            Self::MalformedResponse(detail) => {
                write!(f, "ollama reply missing message content: {detail}")
            }
        }
    }
}

impl Error for OllamaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unreachable(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

pub struct OllamaClient {
    http: reqwest::Client,
    chat_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_url: format!("{}/api/chat", base_url.trim_end_matches('/')),
            model: model.into(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompletion for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, OllamaError> {
        let payload = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let fut = self.http.post(&self.chat_url).json(&payload).send();
        let response = timeout(self.timeout, fut)
            .await
            .map_err(|_| OllamaError::Timeout)?
            .map_err(OllamaError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(OllamaError::BackendStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| OllamaError::MalformedResponse(e.to_string()))?;
        reply_text(&body)
    }
}

fn reply_text(body: &str) -> Result<String, OllamaError> {
    let reply: ChatReply = serde_json::from_str(body)
        .map_err(|e| OllamaError::MalformedResponse(e.to_string()))?;
    reply
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| OllamaError::MalformedResponse("no message.content field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::reply_text;

    #[test]
    fn extracts_message_content() {
        let body = r#"{"model":"qwen3:8b","message":{"role":"assistant","content":"hello"},"done":true}"#;
        assert_eq!(reply_text(body).unwrap(), "hello");
    }

    #[test]
    fn missing_content_is_malformed() {
        assert!(reply_text(r#"{"message":{"role":"assistant"}}"#).is_err());
        assert!(reply_text(r#"{"done":true}"#).is_err());
        assert!(reply_text("not json").is_err());
    }
}
