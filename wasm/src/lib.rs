//! WebAssembly module for KrishiMitra
//!
//! Provides client-side computation for:
//! - Cascading location lists
//! - Soil pH labels and validation
//! - Simulated weather readings
//! - MSP lookups and price formatting
//! - The recommendation form state machine
//!
//! Structured values cross the boundary as JSON strings.

use chrono::Month;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::catalog;
use shared::simulator;
use shared::{FormEffect, FormEvent, FormState};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str("KrishiMitra WASM module loaded"));
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

// ============================================================================
// Catalogs
// ============================================================================

/// All states as a JSON array
#[wasm_bindgen]
pub fn list_states() -> String {
    to_json(&catalog::list_states())
}

#[wasm_bindgen]
pub fn list_districts(state: &str) -> String {
    to_json(&catalog::list_districts(state))
}

#[wasm_bindgen]
pub fn list_tehsils(state: &str, district: &str) -> String {
    to_json(&catalog::list_tehsils(state, district))
}

#[wasm_bindgen]
pub fn list_villages(state: &str, district: &str, tehsil: &str) -> String {
    to_json(&catalog::list_villages(state, district, tehsil))
}

/// MSP record for a crop name as JSON, or undefined when none matches
#[wasm_bindgen]
pub fn lookup_msp(crop_name: &str) -> Option<String> {
    catalog::find_msp(crop_name).map(to_json::<MspRecord>)
}

/// Format a price as Indian rupees, e.g. `₹2,275`
#[wasm_bindgen]
pub fn format_msp_price(msp: u32) -> String {
    catalog::format_msp(msp)
}

// ============================================================================
// Soil
// ============================================================================

/// Label shown beside the pH slider
#[wasm_bindgen]
pub fn ph_label(ph: f64) -> String {
    PhClass::classify(ph).to_string()
}

#[wasm_bindgen]
pub fn is_valid_soil_ph(ph: f64) -> bool {
    validate_soil_ph(ph).is_ok()
}

/// True in the near-neutral band, where the slider shows its "ideal" hint
#[wasm_bindgen]
pub fn is_ideal_soil_ph(ph: f64) -> bool {
    is_ideal_ph(ph)
}

// ============================================================================
// Weather
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn browser_month() -> Month {
    // Date::get_month is zero based
    let month = js_sys::Date::new_0().get_month() as u8 + 1;
    Month::try_from(month).unwrap_or(Month::January)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_month() -> Month {
    simulator::current_month()
}

/// Simulated reading for this month as JSON
#[wasm_bindgen]
pub fn simulate_weather(state: &str) -> String {
    to_json(&simulator::simulate(state, browser_month()))
}

/// Reproducible simulated reading for a month (1-12) as JSON
#[wasm_bindgen]
pub fn simulate_weather_seeded(state: &str, month: u8, seed: u32) -> Result<String, JsValue> {
    let month = Month::try_from(month).map_err(|e| js_error("Invalid month", e))?;
    let mut rng = StdRng::seed_from_u64(u64::from(seed));
    Ok(to_json(&simulator::simulate_with_rng(state, month, &mut rng)))
}

/// True when all four levels name a place in the catalog
#[wasm_bindgen]
pub fn is_known_location(state: &str, district: &str, tehsil: &str, village: &str) -> bool {
    validate_location_known(&Location::new(state, district, tehsil, village)).is_ok()
}

// ============================================================================
// Form Controller
// ============================================================================

/// One crop as rendered on the results page
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationCard<'a> {
    #[serde(flatten)]
    crop: &'a CropRecommendation,
    rank_label: String,
    msp: Option<&'static MspRecord>,
    msp_formatted: Option<String>,
}

impl<'a> RecommendationCard<'a> {
    fn from_crop(crop: &'a CropRecommendation) -> Self {
        let msp = catalog::find_msp(&crop.name);
        Self {
            crop,
            rank_label: crop.rank_label(),
            msp,
            msp_formatted: msp.map(|record| catalog::format_msp(record.msp)),
        }
    }
}

/// Holds one form session. Every mutating call returns the effects the page
/// must run, as a JSON array.
#[wasm_bindgen]
pub struct FormController {
    state: FormState,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    fn dispatch(&mut self, event: FormEvent) -> String {
        let transition = self.state.apply(event);
        self.state = transition.state;
        to_json::<[FormEffect]>(&transition.effects)
    }
}

#[wasm_bindgen]
impl FormController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
        }
    }

    pub fn select_state(&mut self, state: String) -> String {
        self.dispatch(FormEvent::SelectState(state))
    }

    pub fn select_district(&mut self, district: String) -> String {
        self.dispatch(FormEvent::SelectDistrict(district))
    }

    pub fn select_tehsil(&mut self, tehsil: String) -> String {
        self.dispatch(FormEvent::SelectTehsil(tehsil))
    }

    pub fn select_village(&mut self, village: String) -> String {
        self.dispatch(FormEvent::SelectVillage(village))
    }

    pub fn select_soil_type(&mut self, value: &str) -> Result<String, JsValue> {
        let soil_type: SoilType = value.parse().map_err(|e| js_error("Invalid soil type", e))?;
        Ok(self.dispatch(FormEvent::SelectSoilType(soil_type)))
    }

    pub fn set_soil_ph(&mut self, ph: f64) -> String {
        self.dispatch(FormEvent::SetSoilPh(ph))
    }

    pub fn select_irrigation(&mut self, value: &str) -> Result<String, JsValue> {
        let irrigation: IrrigationType = value
            .parse()
            .map_err(|e| js_error("Invalid irrigation type", e))?;
        Ok(self.dispatch(FormEvent::SelectIrrigation(irrigation)))
    }

    pub fn weather_loaded(&mut self, seq: u32, reading_json: &str) -> Result<String, JsValue> {
        let reading: WeatherReading = serde_json::from_str(reading_json)
            .map_err(|e| js_error("Invalid weather JSON", e))?;
        Ok(self.dispatch(FormEvent::WeatherLoaded {
            seq: u64::from(seq),
            reading,
        }))
    }

    pub fn weather_failed(&mut self, seq: u32, message: String) -> String {
        self.dispatch(FormEvent::WeatherFailed {
            seq: u64::from(seq),
            message,
        })
    }

    pub fn submit(&mut self) -> String {
        self.dispatch(FormEvent::Submit)
    }

    pub fn recommendations_loaded(&mut self, seq: u32, batch_json: &str) -> Result<String, JsValue> {
        let batch: RecommendationBatch = serde_json::from_str(batch_json)
            .map_err(|e| js_error("Invalid recommendations JSON", e))?;
        Ok(self.dispatch(FormEvent::RecommendationsLoaded {
            seq: u64::from(seq),
            recommendations: batch.into_ranked(),
        }))
    }

    pub fn recommendations_failed(&mut self, seq: u32, message: String) -> String {
        self.dispatch(FormEvent::RecommendationsFailed {
            seq: u64::from(seq),
            message,
        })
    }

    /// Current snapshot as JSON
    pub fn state_json(&self) -> String {
        to_json(&self.state)
    }

    pub fn stage(&self) -> String {
        to_json(&self.state.stage()).trim_matches('"').to_string()
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn weather_loading(&self) -> bool {
        self.state.weather_loading()
    }

    pub fn recommendation_loading(&self) -> bool {
        self.state.recommendation_loading()
    }

    /// Current batch as crop cards with badge text and MSP, as JSON
    pub fn recommendation_cards(&self) -> String {
        let cards: Vec<RecommendationCard> = self
            .state
            .recommendations()
            .iter()
            .map(RecommendationCard::from_crop)
            .collect();
        to_json(&cards)
    }

    /// "District, State" once a district is chosen
    pub fn location_label(&self) -> String {
        self.state.location().display_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn effects(json: &str) -> Vec<Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_catalog_exports() {
        let states: Vec<String> = serde_json::from_str(&list_states()).unwrap();
        assert_eq!(states.len(), 8);
        assert_eq!(list_districts("Kerala"), "[]");
        assert_eq!(list_tehsils("Gujarat", "Rajkot"), r#"["Rajkot","Morbi"]"#);
        let villages: Vec<String> =
            serde_json::from_str(&list_villages("Punjab", "Amritsar", "Amritsar-I")).unwrap();
        assert_eq!(villages, ["Majitha", "Rayya", "Verka", "Chheharta"]);
    }

    #[test]
    fn test_msp_exports() {
        let wheat: Value = serde_json::from_str(&lookup_msp("wheat").unwrap()).unwrap();
        assert_eq!(wheat["msp"], 2275);
        assert!(lookup_msp("Basmati").is_none());
        assert_eq!(format_msp_price(12100), "₹12,100");
    }

    #[test]
    fn test_ph_helpers() {
        assert_eq!(ph_label(7.0), "Neutral");
        assert_eq!(ph_label(4.2), "Strongly Acidic");
        assert!(is_valid_soil_ph(3.0));
        assert!(!is_valid_soil_ph(11.5));
        assert!(is_ideal_soil_ph(6.8));
        assert!(!is_ideal_soil_ph(8.4));
    }

    #[test]
    fn test_known_location() {
        assert!(is_known_location("Rajasthan", "Jodhpur", "Bilara", "Luni"));
        assert!(!is_known_location("Rajasthan", "Jodhpur", "Bilara", "Pune"));
    }

    #[test]
    fn test_winter_reading_keeps_cloud_icon() {
        let mut form = FormController::new();
        form.select_state("Punjab".into());
        let fetch = effects(&form.select_district("Ludhiana".into()));
        let seq = fetch[0]["seq"].as_u64().unwrap() as u32;
        let reading = simulate_weather_seeded("Punjab", 1, 3).unwrap();
        form.weather_loaded(seq, &reading).unwrap();
        let snapshot: Value = serde_json::from_str(&form.state_json()).unwrap();
        assert_eq!(snapshot["weather"]["description"], "Clear and cool");
        assert_eq!(snapshot["weather"]["icon"], "cloud");
    }

    #[test]
    fn test_seeded_weather_is_reproducible() {
        let a = simulate_weather_seeded("Karnataka", 7, 99).unwrap();
        let b = simulate_weather_seeded("Karnataka", 7, 99).unwrap();
        assert_eq!(a, b);
        let reading: WeatherReading = serde_json::from_str(&a).unwrap();
        assert_eq!(reading.icon, WeatherIcon::Rain);
    }

    #[test]
    fn test_form_controller_flow() {
        let mut form = FormController::new();
        assert_eq!(form.stage(), "empty");

        assert_eq!(form.select_state("Madhya Pradesh".into()), "[]");
        let fetch = effects(&form.select_district("Indore".into()));
        assert_eq!(fetch.len(), 1);
        assert_eq!(fetch[0]["type"], "fetchWeather");
        assert_eq!(fetch[0]["district"], "Indore");
        assert!(form.weather_loading());
        assert_eq!(form.location_label(), "Indore, Madhya Pradesh");

        form.select_tehsil("Rau".into());
        let fetch = effects(&form.select_village("Betma".into()));
        let seq = fetch[0]["seq"].as_u64().unwrap() as u32;

        form.select_soil_type("black").unwrap();
        form.select_irrigation("well").unwrap();
        assert_eq!(form.stage(), "location_and_soil_selected");

        let reading = simulate_weather_seeded("Madhya Pradesh", 1, 7).unwrap();
        form.weather_loaded(seq, &reading).unwrap();
        assert_eq!(form.stage(), "submittable");
        assert!(form.can_submit());

        let request = effects(&form.submit());
        assert_eq!(request[0]["type"], "requestRecommendations");
        assert_eq!(request[0]["input"]["soilType"], "black");
        assert_eq!(request[0]["input"]["location"]["village"], "Betma");
        assert!(form.recommendation_loading());
        assert!(!form.can_submit());

        let seq = request[0]["seq"].as_u64().unwrap() as u32;
        let batch = r#"{"recommendations":[
            {"rank":2,"name":"Gram","confidence":80,"reason":"Cool season pulse","growingSeason":"Rabi","waterRequirement":"Low"},
            {"rank":1,"name":"Wheat","confidence":90,"reason":"Black soil holds moisture","growingSeason":"Rabi","waterRequirement":"Medium"},
            {"rank":3,"name":"Linseed","confidence":61,"reason":"Hardy oilseed","growingSeason":"Rabi","waterRequirement":"Low"}
        ]}"#;
        form.recommendations_loaded(seq, batch).unwrap();
        let cards: Vec<Value> = serde_json::from_str(&form.recommendation_cards()).unwrap();
        assert_eq!(cards[0]["name"], "Wheat");
        assert_eq!(cards[0]["rankLabel"], "Most Recommended");
        assert_eq!(cards[0]["mspFormatted"], "₹2,275");
        assert_eq!(cards[1]["msp"]["name"], "Gram (Chana)");
        assert!(cards[2]["msp"].is_null());

        let request = effects(&form.submit());
        let seq = request[0]["seq"].as_u64().unwrap() as u32;
        form.recommendations_failed(seq, "AI service quota exceeded. Please try again later.".into());
        assert!(form.can_submit());
        let snapshot: Value = serde_json::from_str(&form.state_json()).unwrap();
        assert_eq!(
            snapshot["recommendation_error"],
            "AI service quota exceeded. Please try again later."
        );
    }
}
