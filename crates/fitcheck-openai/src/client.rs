//! OpenAI chat completions client implementing [`StyleModel`]

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::time::timeout;

use fitcheck_core::scoring::clamp_score;
use fitcheck_core::{
    Aesthetic, Error, ImprovementAreas, ImprovementRequest, ModelAnalysis, ModelConfig, Result,
    StyleModel,
};

use crate::config::OpenAiConfig;

/// OpenAI style model client
pub struct OpenAiClient {
    config: OpenAiConfig,
    auth_header: String,
    client: Client,
    model_config: ModelConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
    response_format: Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    refusal: Option<String>,
}

/// Shape the model is asked to return; scores are wide so out-of-range values still parse
#[derive(Debug, Deserialize)]
struct StructuredAnalysis {
    overall_score: i64,
    feedback: String,
    suggestions: Vec<String>,
    improvement_areas: StructuredAreas,
}

#[derive(Debug, Deserialize)]
struct StructuredAreas {
    fit: i64,
    color: i64,
    accessories: i64,
    layering: i64,
}

fn clamp_wide(score: i64) -> u8 {
    clamp_score(score.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

impl StructuredAnalysis {
    fn into_analysis(self, aesthetic: Aesthetic) -> ModelAnalysis {
        ModelAnalysis {
            overall_score: clamp_wide(self.overall_score),
            feedback: self.feedback,
            suggestions: self.suggestions,
            improvement_areas: ImprovementAreas {
                fit: clamp_wide(self.improvement_areas.fit),
                color: clamp_wide(self.improvement_areas.color),
                accessories: clamp_wide(self.improvement_areas.accessories),
                layering: clamp_wide(self.improvement_areas.layering),
            },
        }
        .sanitized(aesthetic)
    }
}

impl OpenAiClient {
    /// Create a new client from configuration
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        let model_config = ModelConfig {
            model_id: config.model.clone(),
            ..Default::default()
        };

        Ok(Self {
            auth_header: format!("Bearer {}", config.api_key),
            config,
            client,
            model_config,
        })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.model_config.timeout = request_timeout;
        self
    }

    pub(crate) fn analysis_request(&self, image_ref: &str, aesthetic: Aesthetic) -> ChatRequest {
        let system = format!(
            "You are an expert fashion stylist specializing in the {name} aesthetic. \
             Rate the outfit in the image from 1 to 10, weighing fit (30%), color harmony (25%), \
             accessories (20%), layering (15%) and {name} alignment (10%). \
             Give a 2-3 sentence assessment and up to four specific, actionable suggestions \
             naming concrete items (\"add a silver chain necklace\", not \"add accessories\").",
            name = aesthetic.display_name()
        );

        let user = MessageContent::Parts(vec![
            ContentPart::Text {
                text: format!("Analyze this {} outfit.", aesthetic),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image_ref.to_string(),
                },
            },
        ]);

        self.build_request(&self.model_config, system, user)
    }

    pub(crate) fn evaluation_request(&self, request: &ImprovementRequest) -> ChatRequest {
        let system = format!(
            "You are evaluating a style improvement for the {} aesthetic. The user was given these \
             suggestions: {}. Compare the before and after outfits and score the after outfit on how many \
             suggestions were followed (40%), overall improvement (30%), aesthetic alignment (20%) and \
             execution quality (10%).",
            request.aesthetic.display_name(),
            request.original_suggestions.join("; ")
        );

        let user = MessageContent::Parts(vec![
            ContentPart::Text {
                text: "Before:".to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: request.before_image.clone(),
                },
            },
            ContentPart::Text {
                text: "After:".to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: request.after_image.clone(),
                },
            },
        ]);

        self.build_request(&self.model_config.for_evaluation(), system, user)
    }

    fn build_request(&self, config: &ModelConfig, system: String, user: MessageContent) -> ChatRequest {
        ChatRequest {
            model: config.model_id.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(system),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            response_format: response_schema(),
        }
    }

    /// Send a request and parse the structured answer
    async fn complete(&self, body: &ChatRequest, aesthetic: Aesthetic) -> Result<ModelAnalysis> {
        let url = self.config.completions_url();
        tracing::debug!(model = %body.model, %url, "sending style analysis request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication("OpenAI rejected the API key".to_string()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Model(format!(
                "OpenAI API request failed with status {}: {}",
                status, error_text
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        parse_completion(&response_text, aesthetic)
    }
}

/// JSON schema the model must answer with
fn response_schema() -> Value {
    // strict mode rejects range keywords, so scores are clamped after parsing
    let score = json!({ "type": "integer" });

    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "style_analysis",
            "strict": true,
            "schema": {
                "type": "object",
                "additionalProperties": false,
                "required": ["overall_score", "feedback", "suggestions", "improvement_areas"],
                "properties": {
                    "overall_score": score,
                    "feedback": { "type": "string" },
                    "suggestions": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "improvement_areas": {
                        "type": "object",
                        "additionalProperties": false,
                        "required": ["fit", "color", "accessories", "layering"],
                        "properties": {
                            "fit": score,
                            "color": score,
                            "accessories": score,
                            "layering": score
                        }
                    }
                }
            }
        }
    })
}

/// Parse a chat completions response body into a sanitized analysis
pub(crate) fn parse_completion(body: &str, aesthetic: Aesthetic) -> Result<ModelAnalysis> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| Error::Serialization(e.to_string()))?;

    let message = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| Error::Model("OpenAI response contained no choices".to_string()))?;

    if let Some(refusal) = message.refusal {
        return Err(Error::Model(format!("Model refused the request: {}", refusal)));
    }

    let content = message
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| Error::Model("Empty response from OpenAI".to_string()))?;

    let structured: StructuredAnalysis =
        serde_json::from_str(&content).map_err(|e| Error::Serialization(e.to_string()))?;

    Ok(structured.into_analysis(aesthetic))
}

#[async_trait]
impl StyleModel for OpenAiClient {
    async fn analyze(&self, image_ref: &str, aesthetic: Aesthetic) -> Result<ModelAnalysis> {
        let body = self.analysis_request(image_ref, aesthetic);

        match timeout(self.model_config.timeout, self.complete(&body, aesthetic)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout("Style analysis request timed out".to_string())),
        }
    }

    async fn evaluate_improvement(&self, request: &ImprovementRequest) -> Result<ModelAnalysis> {
        let body = self.evaluation_request(request);

        match timeout(self.model_config.timeout, self.complete(&body, request.aesthetic)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout("Improvement evaluation timed out".to_string())),
        }
    }

    fn model_id(&self) -> &str {
        &self.model_config.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(content: &str) -> String {
        json!({
            "id": "chatcmpl-1",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        })
        .to_string()
    }

    #[test]
    fn test_parse_structured_answer() {
        let content = json!({
            "overall_score": 8,
            "feedback": "Crisp tailoring and a calm palette.",
            "suggestions": ["Add a gold watch", "Swap sneakers for loafers"],
            "improvement_areas": { "fit": 9, "color": 8, "accessories": 6, "layering": 7 }
        })
        .to_string();

        let analysis = parse_completion(&completion(&content), Aesthetic::OldMoney).unwrap();
        assert_eq!(analysis.overall_score, 8);
        assert_eq!(analysis.suggestions.len(), 2);
        assert_eq!(analysis.improvement_areas.accessories, 6);
    }

    #[test]
    fn test_parse_clamps_out_of_range_scores() {
        let content = json!({
            "overall_score": 42,
            "feedback": "",
            "suggestions": [],
            "improvement_areas": { "fit": -3, "color": 0, "accessories": 11, "layering": 5 }
        })
        .to_string();

        let analysis = parse_completion(&completion(&content), Aesthetic::Y2k).unwrap();
        assert_eq!(analysis.overall_score, 10);
        assert_eq!(analysis.improvement_areas.fit, 1);
        assert_eq!(analysis.improvement_areas.color, 1);
        assert_eq!(analysis.improvement_areas.accessories, 10);
        assert_eq!(analysis.feedback, "Good Y2k foundation with room for improvement.");
    }

    #[test]
    fn test_parse_rejects_prose() {
        let body = completion("Overall Score: 7/10\nBrief Assessment: nice");
        assert!(matches!(
            parse_completion(&body, Aesthetic::Y2k),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        let empty = json!({ "choices": [] }).to_string();
        assert!(matches!(parse_completion(&empty, Aesthetic::Y2k), Err(Error::Model(_))));

        let refusal = json!({
            "choices": [{ "message": { "content": null, "refusal": "I can't help with that." } }]
        })
        .to_string();
        assert!(matches!(parse_completion(&refusal, Aesthetic::Y2k), Err(Error::Model(_))));

        assert!(matches!(
            parse_completion("<html>bad gateway</html>", Aesthetic::Y2k),
            Err(Error::Serialization(_))
        ));
    }
}
