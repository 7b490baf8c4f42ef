//! Crop recommendation service
//!
//! Builds the advisor prompts from a farm's conditions, asks the gateway for
//! three ranked crops, and turns the free-text answer into a
//! [`RecommendationBatch`]. Answers that cannot be parsed are replaced by a
//! static fallback batch rather than surfacing as errors.

use std::sync::Arc;

use shared::{CropRecommendation, RecommendationBatch, RecommendationInput};
use uuid::Uuid;

use crate::error::AppResult;
use crate::external::{ChatCompletion, ChatMessage};

pub const SYSTEM_PROMPT: &str = r#"You are an expert agricultural advisor for Indian farmers. Your role is to recommend the best crops based on soil conditions, climate, and irrigation methods.

You must provide exactly 3 crop recommendations ranked from most suitable to least suitable. Consider:
1. Soil type and pH compatibility
2. Water requirements vs irrigation type available
3. Local climate conditions (temperature, humidity, rainfall)
4. Traditional crops grown in the region
5. MSP (Minimum Support Price) availability in India

For each crop, provide:
- Crop name (common Indian crop names)
- Confidence score (percentage)
- Reason for recommendation
- Growing season (Kharif/Rabi/Zaid)
- Water requirement level (Low/Medium/High)

Always respond with valid JSON in this exact format:
{
  "recommendations": [
    {
      "rank": 1,
      "name": "Crop Name",
      "confidence": 85,
      "reason": "Brief explanation why this crop is suitable",
      "growingSeason": "Kharif/Rabi/Zaid",
      "waterRequirement": "Low/Medium/High"
    }
  ]
}"#;

/// Recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    completion: Arc<dyn ChatCompletion>,
}

impl RecommendationService {
    pub fn new(completion: Arc<dyn ChatCompletion>) -> Self {
        Self { completion }
    }

    /// Rank three crops for the given farm, most suitable first
    pub async fn recommend(&self, input: &RecommendationInput) -> AppResult<Vec<CropRecommendation>> {
        let request_id = Uuid::new_v4();
        tracing::info!(
            %request_id,
            state = %input.location.state,
            district = %input.location.district,
            soil = input.soil_type.as_str(),
            "Requesting crop recommendations"
        );

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(input)),
        ];
        let content = self.completion.complete(&messages).await?;
        tracing::debug!(%request_id, "AI response: {}", content);

        let batch = match parse_recommendations(&content) {
            Some(batch) => batch,
            None => {
                tracing::warn!(%request_id, "Failed to parse AI response, using fallback recommendations");
                RecommendationBatch::fallback()
            }
        };

        Ok(batch.into_ranked())
    }
}

/// Describe the farm's conditions for the advisor
pub fn build_user_prompt(input: &RecommendationInput) -> String {
    let location = &input.location;
    let weather = &input.weather;
    format!(
        "Please recommend the top 3 crops for a farmer with the following conditions:

SOIL CONDITIONS:
- Soil Type: {soil_type}
- Soil pH: {soil_ph}

IRRIGATION:
- Type: {irrigation}

LOCATION:
- State: {state}
- District: {district}
- Tehsil: {tehsil}
- Village: {village}

CURRENT WEATHER:
- Temperature: {temperature}°C
- Humidity: {humidity}%
- Rainfall: {rainfall}mm
- Wind Speed: {wind_speed} km/h
- Conditions: {description}

Provide 3 crop recommendations considering all these factors. Focus on crops commonly grown in {state} and suitable for the current season and conditions.",
        soil_type = input.soil_type.as_str(),
        soil_ph = input.soil_ph,
        irrigation = input.irrigation_type.as_str(),
        state = location.state,
        district = location.district,
        tehsil = location.tehsil,
        village = location.village,
        temperature = weather.temperature,
        humidity = weather.humidity,
        rainfall = weather.rainfall,
        wind_speed = weather.wind_speed,
        description = weather.description,
    )
}

/// Pull the JSON payload out of a reply that may wrap it in a markdown fence.
///
/// A ```` ```json ```` fence wins over a bare ```` ``` ```` fence; without
/// either the whole reply is used.
pub fn extract_json(content: &str) -> &str {
    let body = if let Some((_, rest)) = content.split_once("```json") {
        rest
    } else if let Some((_, rest)) = content.split_once("```") {
        rest
    } else {
        return content.trim();
    };

    body.split_once("```")
        .map_or(body, |(inner, _)| inner)
        .trim()
}

/// Parse a reply into a batch, or `None` when it is not a usable batch
pub fn parse_recommendations(content: &str) -> Option<RecommendationBatch> {
    let batch: RecommendationBatch = serde_json::from_str(extract_json(content)).ok()?;
    batch.is_well_formed().then_some(batch)
}
