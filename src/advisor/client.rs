//! Async advisor client
//!
//! HTTP client for an OpenAI-compatible chat-completions API. Advice is
//! flavor, not state: every public method resolves to a fallback string
//! on failure instead of propagating an error into game logic.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::progression::practitioner::Practitioner;

const FALLBACK_ADVICE: &str = "Tiên sư hiện tại không thể truyền đạt được. Hãy thử lại sau!";
const FALLBACK_GUILD_ADVICE: &str = "Trưởng lão hiện tại đang tĩnh tâm. Hãy thử lại sau!";

const ADVISOR_SYSTEM_PROMPT: &str = "Bạn là một vị Tiên sư chuyên gia về tu luyện. \
Hãy đưa ra lời khuyên chiến lược về tu luyện dựa trên thông tin hiện tại. \
Trả lời bằng tiếng Việt với phong cách cổ điển tu tiên.";

const GUILD_SYSTEM_PROMPT: &str = "Bạn là một vị Trưởng lão am hiểu về quản lý bang hội. \
Đưa ra lời khuyên về quản lý bang hội, phát triển tổ chức, và chiến lược hợp tác. \
Trả lời bằng tiếng Việt với phong cách cổ điển tu tiên.";

/// Async client for remote cultivation advice
pub struct AdvisorClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl AdvisorClient {
    /// Create a client with explicit configuration
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
        }
    }

    /// Create a client from environment variables
    ///
    /// Required: ADVISOR_API_KEY
    /// Optional: ADVISOR_API_URL (defaults to the Perplexity API)
    /// Optional: ADVISOR_MODEL
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ADVISOR_API_KEY")
            .map_err(|_| EngineError::AdvisorError("ADVISOR_API_KEY not set".into()))?;
        let api_url = std::env::var("ADVISOR_API_URL")
            .unwrap_or_else(|_| "https://api.perplexity.ai/chat/completions".into());
        let model = std::env::var("ADVISOR_MODEL")
            .unwrap_or_else(|_| "llama-3.1-sonar-small-128k-online".into());

        Ok(Self::new(api_key, api_url, model))
    }

    /// Personalized cultivation strategy; falls back on any failure
    pub async fn cultivation_advice(&self, practitioner: &Practitioner) -> String {
        let query = format!(
            "Hiện tại ta đang ở cảnh giới {} với {} điểm linh lực. \
             Tài nguyên hiện có: {} linh thạch, {} đan dược, {} pháp bảo. \
             Hãy tư vấn chiến lược tu luyện tốt nhất cho giai đoạn hiện tại.",
            practitioner.level,
            practitioner.spiritual_power,
            practitioner.spiritual_stones,
            practitioner.pills,
            practitioner.artifacts,
        );

        match self.complete(ADVISOR_SYSTEM_PROMPT, &query).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "advisor request failed, using fallback");
                FALLBACK_ADVICE.into()
            }
        }
    }

    /// Guild management advice; falls back on any failure
    pub async fn guild_advice(&self, guild_name: &str, level: u32, treasury: u64) -> String {
        let query = format!(
            "Bang hội {guild_name} hiện ở cấp độ {level}, kho bạc {treasury} linh thạch. \
             Hãy tư vấn chiến lược phát triển bang hội phù hợp với quy mô hiện tại."
        );

        match self.complete(GUILD_SYSTEM_PROMPT, &query).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "advisor request failed, using fallback");
                FALLBACK_GUILD_ADVICE.into()
            }
        }
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: system.into(),
                },
                Message {
                    role: "user".into(),
                    content: user.into(),
                },
            ],
            temperature: 0.2,
            max_tokens: 1000,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| EngineError::AdvisorError(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(EngineError::AdvisorError(format!("API error: {}", error_text)));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| EngineError::AdvisorError(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| EngineError::AdvisorError("Empty response".into()))
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
