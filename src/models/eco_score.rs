use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product attributes fed to the scoring prompt. All six are free text;
/// sellers rarely fill every field, so the extras default to empty.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EcoScoreRequest {
    #[schema(example = "Recycled Denim Jacket")]
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub packaging: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EcoScoreResponse {
    pub eco_score: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SustainabilityResponse {
    pub sustainability_score: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DynamicPricingResponse {
    pub price: f64,
}
