use crate::config::ScoringConfig;
use crate::error::{AppError, AppResult};
use crate::models::EcoScoreRequest;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// Client for the generative text API used to estimate eco scores.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: ScoringConfig,
}

impl GeminiClient {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Ask the model for a sustainability rating and extract the integer
    /// from its free-text reply.
    pub async fn estimate_eco_score(&self, request: &EcoScoreRequest) -> AppResult<i32> {
        let prompt = build_prompt(request);
        let text = self.generate(&prompt).await?;

        log::debug!("Eco score raw model response: {}", text);

        parse_eco_score(&text).ok_or_else(|| {
            AppError::ExternalApiError(
                "Model response did not contain a parseable eco score".to_string(),
            )
        })
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalApiError(format!(
                "Text generation API returned {}",
                status
            )));
        }

        let result: GenerateContentResponse = response.json().await?;

        result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                AppError::ExternalApiError("Text generation API returned no candidates".to_string())
            })
    }
}

/// Build the scoring prompt from the six product attributes.
pub fn build_prompt(request: &EcoScoreRequest) -> String {
    format!(
        "Rate the environmental sustainability of the following product on a \
         scale of 1 to 100. Answer with a single line in the form \
         \"Eco Score: <number>\".\n\
         Name: {}\nDescription: {}\nCategory: {}\nMaterial: {}\n\
         Weight: {}\nPackaging: {}",
        request.name,
        request.description,
        request.category,
        request.material,
        request.weight,
        request.packaging
    )
}

/// Extract the score from the first line containing "Eco Score:".
///
/// Accepts both "Eco Score: 87" and "Eco Score: 87/100"; returns None when
/// no such line exists or the number does not parse.
pub fn parse_eco_score(text: &str) -> Option<i32> {
    let line = text.lines().find(|line| line.contains("Eco Score:"))?;
    let after_colon = line.splitn(2, ':').nth(1)?;
    let number = after_colon.split('/').next()?.trim();
    number.parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EcoScoreRequest {
        EcoScoreRequest {
            name: "Denim Jacket".to_string(),
            description: "Second-hand jacket".to_string(),
            category: "Clothing".to_string(),
            material: "Cotton".to_string(),
            weight: "500g".to_string(),
            packaging: "None".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_all_attributes() {
        let prompt = build_prompt(&request());
        for value in [
            "Denim Jacket",
            "Second-hand jacket",
            "Clothing",
            "Cotton",
            "500g",
            "None",
        ] {
            assert!(prompt.contains(value), "prompt missing {value}");
        }
    }

    #[test]
    fn test_parse_plain_score() {
        assert_eq!(parse_eco_score("Eco Score: 87"), Some(87));
    }

    #[test]
    fn test_parse_score_with_denominator() {
        assert_eq!(parse_eco_score("Eco Score: 87/100"), Some(87));
    }

    #[test]
    fn test_parse_skips_leading_prose() {
        let text = "Based on the given attributes:\n\nEco Score: 42/100\nReasoning: ...";
        assert_eq!(parse_eco_score(text), Some(42));
    }

    #[test]
    fn test_parse_missing_line() {
        assert_eq!(parse_eco_score("The product is fairly sustainable."), None);
    }

    #[test]
    fn test_parse_non_numeric_score() {
        assert_eq!(parse_eco_score("Eco Score: high"), None);
    }
}
