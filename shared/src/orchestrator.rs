//! Form orchestration for the recommendation workflow
//!
//! The form is an immutable [`FormState`] snapshot. [`FormState::apply`] takes
//! an event (a selection, a fetch result, a submit click) and returns the next
//! snapshot together with the side effects the caller must run. Effects carry
//! a sequence number; results whose sequence number is not the one currently
//! awaited are dropped, so a slow stale weather fetch can never overwrite a
//! newer reading.

use serde::Serialize;

use crate::catalog::{list_districts, list_states, list_tehsils, list_villages};
use crate::models::{
    CropRecommendation, IrrigationType, RecommendationInput, SoilProfile, SoilType,
    WeatherReading, SOIL_PH_DEFAULT, SOIL_PH_MAX, SOIL_PH_MIN,
};
use crate::types::Location;

/// How far the farmer has progressed through the form
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormStage {
    /// No location chosen yet
    Empty,
    /// Some location chosen, inputs incomplete, no weather
    LocationSelected,
    /// Location and soil complete, weather still missing
    LocationAndSoilSelected,
    /// Weather present but location or soil incomplete
    WeatherReady,
    /// Everything present; the farmer may submit
    Submittable,
}

/// Something that happened in the UI or in a background task
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SelectState(String),
    SelectDistrict(String),
    SelectTehsil(String),
    SelectVillage(String),
    SelectSoilType(SoilType),
    SetSoilPh(f64),
    SelectIrrigation(IrrigationType),
    WeatherLoaded { seq: u64, reading: WeatherReading },
    WeatherFailed { seq: u64, message: String },
    Submit,
    RecommendationsLoaded {
        seq: u64,
        recommendations: Vec<CropRecommendation>,
    },
    RecommendationsFailed { seq: u64, message: String },
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEffect {
    FetchWeather {
        seq: u64,
        state: String,
        district: String,
    },
    RequestRecommendations {
        seq: u64,
        input: RecommendationInput,
    },
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: FormState,
    pub effects: Vec<FormEffect>,
}

impl Transition {
    /// New snapshot with no effects to run
    fn quiet(state: FormState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// Event ignored; the snapshot stays as it was
    fn unchanged(state: &FormState) -> Self {
        Self::quiet(state.clone())
    }
}

/// Snapshot of one farmer's form session
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormState {
    location: Location,
    soil_type: Option<SoilType>,
    soil_ph: f64,
    irrigation_type: Option<IrrigationType>,
    weather: Option<WeatherReading>,
    weather_error: Option<String>,
    recommendations: Vec<CropRecommendation>,
    recommendation_error: Option<String>,
    /// Sequence number of the weather fetch whose result we are waiting for
    awaiting_weather: Option<u64>,
    awaiting_recommendations: Option<u64>,
    /// Last sequence number handed out, shared by both kinds of request
    last_seq: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            location: Location::default(),
            soil_type: None,
            soil_ph: SOIL_PH_DEFAULT,
            irrigation_type: None,
            weather: None,
            weather_error: None,
            recommendations: Vec::new(),
            recommendation_error: None,
            awaiting_weather: None,
            awaiting_recommendations: None,
            last_seq: 0,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn soil_type(&self) -> Option<SoilType> {
        self.soil_type
    }

    pub fn soil_ph(&self) -> f64 {
        self.soil_ph
    }

    pub fn irrigation_type(&self) -> Option<IrrigationType> {
        self.irrigation_type
    }

    /// Soil inputs, once both selectors have a value
    pub fn soil_profile(&self) -> Option<SoilProfile> {
        Some(SoilProfile {
            soil_type: self.soil_type?,
            soil_ph: self.soil_ph,
            irrigation_type: self.irrigation_type?,
        })
    }

    pub fn weather(&self) -> Option<&WeatherReading> {
        self.weather.as_ref()
    }

    pub fn weather_error(&self) -> Option<&str> {
        self.weather_error.as_deref()
    }

    pub fn recommendations(&self) -> &[CropRecommendation] {
        &self.recommendations
    }

    pub fn recommendation_error(&self) -> Option<&str> {
        self.recommendation_error.as_deref()
    }

    pub fn weather_loading(&self) -> bool {
        self.awaiting_weather.is_some()
    }

    pub fn recommendation_loading(&self) -> bool {
        self.awaiting_recommendations.is_some()
    }

    fn inputs_complete(&self) -> bool {
        self.location.is_complete() && self.soil_type.is_some() && self.irrigation_type.is_some()
    }

    pub fn stage(&self) -> FormStage {
        match (self.inputs_complete(), self.weather.is_some()) {
            (true, true) => FormStage::Submittable,
            (true, false) => FormStage::LocationAndSoilSelected,
            (false, true) => FormStage::WeatherReady,
            (false, false) if self.location.is_empty() => FormStage::Empty,
            (false, false) => FormStage::LocationSelected,
        }
    }

    /// Submittable and not already waiting on the advisor
    pub fn can_submit(&self) -> bool {
        self.stage() == FormStage::Submittable && !self.recommendation_loading()
    }

    /// Apply one event, returning the next snapshot and any effects to run
    pub fn apply(&self, event: FormEvent) -> Transition {
        match event {
            FormEvent::SelectState(state) => {
                if state == self.location.state
                    || (!state.is_empty() && !list_states().contains(&state.as_str()))
                {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.location = Location {
                    state,
                    ..Location::default()
                };
                next.relocate()
            }
            FormEvent::SelectDistrict(district) => {
                if district == self.location.district
                    || self.location.state.is_empty()
                    || (!district.is_empty()
                        && !list_districts(&self.location.state).contains(&district.as_str()))
                {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.location.district = district;
                next.location.tehsil.clear();
                next.location.village.clear();
                next.relocate()
            }
            FormEvent::SelectTehsil(tehsil) => {
                if tehsil == self.location.tehsil
                    || self.location.district.is_empty()
                    || (!tehsil.is_empty()
                        && !list_tehsils(&self.location.state, &self.location.district)
                            .contains(&tehsil.as_str()))
                {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.location.tehsil = tehsil;
                next.location.village.clear();
                next.relocate()
            }
            FormEvent::SelectVillage(village) => {
                let location = &self.location;
                if village == location.village
                    || location.tehsil.is_empty()
                    || (!village.is_empty()
                        && !list_villages(&location.state, &location.district, &location.tehsil)
                            .contains(&village.as_str()))
                {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.location.village = village;
                next.relocate()
            }
            FormEvent::SelectSoilType(soil_type) => {
                let mut next = self.clone();
                next.soil_type = Some(soil_type);
                Transition::quiet(next)
            }
            FormEvent::SetSoilPh(ph) => {
                if ph.is_nan() {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.soil_ph = ph.clamp(SOIL_PH_MIN, SOIL_PH_MAX);
                Transition::quiet(next)
            }
            FormEvent::SelectIrrigation(irrigation_type) => {
                let mut next = self.clone();
                next.irrigation_type = Some(irrigation_type);
                Transition::quiet(next)
            }
            FormEvent::WeatherLoaded { seq, reading } => {
                if self.awaiting_weather != Some(seq) {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.awaiting_weather = None;
                next.weather = Some(reading);
                next.weather_error = None;
                Transition::quiet(next)
            }
            FormEvent::WeatherFailed { seq, message } => {
                if self.awaiting_weather != Some(seq) {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.awaiting_weather = None;
                next.weather = None;
                next.weather_error = Some(message);
                Transition::quiet(next)
            }
            FormEvent::Submit => {
                let (Some(weather), Some(soil)) = (self.weather.clone(), self.soil_profile()) else {
                    return Transition::unchanged(self);
                };
                if !self.can_submit() {
                    return Transition::unchanged(self);
                }

                let mut next = self.clone();
                let seq = next.issue_seq();
                next.awaiting_recommendations = Some(seq);
                next.recommendation_error = None;
                let input = RecommendationInput {
                    soil_type: soil.soil_type,
                    soil_ph: soil.soil_ph,
                    irrigation_type: soil.irrigation_type,
                    location: next.location.clone(),
                    weather,
                };
                Transition {
                    state: next,
                    effects: vec![FormEffect::RequestRecommendations { seq, input }],
                }
            }
            FormEvent::RecommendationsLoaded {
                seq,
                recommendations,
            } => {
                if self.awaiting_recommendations != Some(seq) {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.awaiting_recommendations = None;
                next.recommendations = recommendations;
                next.recommendation_error = None;
                Transition::quiet(next)
            }
            FormEvent::RecommendationsFailed { seq, message } => {
                if self.awaiting_recommendations != Some(seq) {
                    return Transition::unchanged(self);
                }
                let mut next = self.clone();
                next.awaiting_recommendations = None;
                next.recommendation_error = Some(message);
                Transition::quiet(next)
            }
        }
    }

    fn issue_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }

    /// Drop the current reading after a location change and, when a district
    /// is known, request a fresh one.
    fn relocate(mut self) -> Transition {
        self.weather = None;
        self.weather_error = None;
        self.awaiting_weather = None;

        if self.location.state.is_empty() || self.location.district.is_empty() {
            return Transition {
                state: self,
                effects: Vec::new(),
            };
        }

        let seq = self.issue_seq();
        self.awaiting_weather = Some(seq);
        let effect = FormEffect::FetchWeather {
            seq,
            state: self.location.state.clone(),
            district: self.location.district.clone(),
        };
        Transition {
            state: self,
            effects: vec![effect],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherIcon;

    fn reading(temperature: i32) -> WeatherReading {
        WeatherReading {
            temperature,
            humidity: 40,
            rainfall: 0,
            wind_speed: 10,
            description: "Clear and cool".to_string(),
            icon: WeatherIcon::Cloud,
        }
    }

    fn fetch_seq(transition: &Transition) -> u64 {
        match transition.effects.as_slice() {
            [FormEffect::FetchWeather { seq, .. }] => *seq,
            other => panic!("expected one weather fetch, got {:?}", other),
        }
    }

    /// Walk the form to the Submittable stage in Maharashtra
    fn submittable() -> FormState {
        let state = FormState::new()
            .apply(FormEvent::SelectState("Maharashtra".into()))
            .state;
        let t = state.apply(FormEvent::SelectDistrict("Pune".into()));
        let state = t
            .state
            .apply(FormEvent::SelectTehsil("Haveli".into()))
            .state;
        let t = state.apply(FormEvent::SelectVillage("Wagholi".into()));
        let seq = fetch_seq(&t);
        t.state
            .apply(FormEvent::SelectSoilType(SoilType::Black))
            .state
            .apply(FormEvent::SelectIrrigation(IrrigationType::Drip))
            .state
            .apply(FormEvent::WeatherLoaded {
                seq,
                reading: reading(24),
            })
            .state
    }

    #[test]
    fn test_initial_stage_is_empty() {
        let state = FormState::new();
        assert_eq!(state.stage(), FormStage::Empty);
        assert_eq!(state.soil_ph(), 7.0);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_state_selection_does_not_fetch_weather() {
        let t = FormState::new().apply(FormEvent::SelectState("Punjab".into()));
        assert!(t.effects.is_empty());
        assert_eq!(t.state.stage(), FormStage::LocationSelected);
    }

    #[test]
    fn test_district_selection_fetches_weather() {
        let state = FormState::new()
            .apply(FormEvent::SelectState("Punjab".into()))
            .state;
        let t = state.apply(FormEvent::SelectDistrict("Ludhiana".into()));
        assert_eq!(
            t.effects,
            vec![FormEffect::FetchWeather {
                seq: 1,
                state: "Punjab".to_string(),
                district: "Ludhiana".to_string(),
            }]
        );
        assert!(t.state.weather_loading());
    }

    #[test]
    fn test_reaches_submittable() {
        let state = submittable();
        assert_eq!(state.stage(), FormStage::Submittable);
        assert!(state.can_submit());
        assert!(!state.weather_loading());
    }

    #[test]
    fn test_changing_state_clears_lower_levels() {
        let state = submittable();
        let t = state.apply(FormEvent::SelectState("Punjab".into()));
        let location = t.state.location();
        assert_eq!(location.state, "Punjab");
        assert!(location.district.is_empty());
        assert!(location.tehsil.is_empty());
        assert!(location.village.is_empty());
        assert!(t.state.weather().is_none());
        assert_ne!(t.state.stage(), FormStage::Submittable);
        assert!(!t.state.can_submit());
    }

    #[test]
    fn test_changing_tehsil_invalidates_weather_and_refetches() {
        let state = submittable();
        let t = state.apply(FormEvent::SelectTehsil("Mulshi".into()));
        assert!(t.state.location().village.is_empty());
        assert!(t.state.weather().is_none());
        assert_eq!(t.effects.len(), 1);
        assert_eq!(t.state.stage(), FormStage::LocationSelected);
    }

    #[test]
    fn test_reselecting_same_value_is_noop() {
        let state = submittable();
        let t = state.apply(FormEvent::SelectDistrict("Pune".into()));
        assert!(t.effects.is_empty());
        assert_eq!(t.state, state);
    }

    #[test]
    fn test_unknown_selections_are_ignored() {
        let state = FormState::new()
            .apply(FormEvent::SelectState("Atlantis".into()))
            .state;
        assert_eq!(state.stage(), FormStage::Empty);

        let state = state.apply(FormEvent::SelectState("Punjab".into())).state;
        let t = state.apply(FormEvent::SelectDistrict("Pune".into()));
        assert!(t.effects.is_empty());
        assert!(t.state.location().district.is_empty());
    }

    #[test]
    fn test_district_before_state_is_ignored() {
        let t = FormState::new().apply(FormEvent::SelectDistrict("Pune".into()));
        assert_eq!(t.state, FormState::new());
    }

    #[test]
    fn test_stale_weather_result_is_discarded() {
        let state = FormState::new()
            .apply(FormEvent::SelectState("Maharashtra".into()))
            .state;
        let first = state.apply(FormEvent::SelectDistrict("Pune".into()));
        let stale_seq = fetch_seq(&first);
        let second = first.state.apply(FormEvent::SelectDistrict("Nashik".into()));
        let fresh_seq = fetch_seq(&second);
        assert!(fresh_seq > stale_seq);

        // Newer fetch lands first, then the slower stale one arrives
        let state = second
            .state
            .apply(FormEvent::WeatherLoaded {
                seq: fresh_seq,
                reading: reading(30),
            })
            .state;
        let state = state
            .apply(FormEvent::WeatherLoaded {
                seq: stale_seq,
                reading: reading(10),
            })
            .state;
        assert_eq!(state.weather().map(|w| w.temperature), Some(30));
    }

    #[test]
    fn test_result_after_state_reset_is_discarded() {
        let state = FormState::new()
            .apply(FormEvent::SelectState("Gujarat".into()))
            .state;
        let t = state.apply(FormEvent::SelectDistrict("Rajkot".into()));
        let seq = fetch_seq(&t);
        let state = t.state.apply(FormEvent::SelectState("Rajasthan".into())).state;
        assert!(!state.weather_loading());
        let state = state
            .apply(FormEvent::WeatherLoaded {
                seq,
                reading: reading(33),
            })
            .state;
        assert!(state.weather().is_none());
    }

    #[test]
    fn test_weather_failure_records_error() {
        let state = FormState::new()
            .apply(FormEvent::SelectState("Karnataka".into()))
            .state;
        let t = state.apply(FormEvent::SelectDistrict("Mysore".into()));
        let seq = fetch_seq(&t);
        let state = t
            .state
            .apply(FormEvent::WeatherFailed {
                seq,
                message: "Failed to fetch weather data".into(),
            })
            .state;
        assert_eq!(state.weather_error(), Some("Failed to fetch weather data"));
        assert!(!state.weather_loading());
    }

    #[test]
    fn test_submit_requires_completeness() {
        let state = FormState::new()
            .apply(FormEvent::SelectState("Punjab".into()))
            .state;
        let t = state.apply(FormEvent::Submit);
        assert!(t.effects.is_empty());
        assert!(!t.state.recommendation_loading());
    }

    #[test]
    fn test_submit_emits_request_once() {
        let state = submittable().apply(FormEvent::SetSoilPh(6.4)).state;
        let t = state.apply(FormEvent::Submit);
        let (seq, input) = match t.effects.as_slice() {
            [FormEffect::RequestRecommendations { seq, input }] => (*seq, input.clone()),
            other => panic!("expected a recommendation request, got {:?}", other),
        };
        assert_eq!(input.soil_type, SoilType::Black);
        assert_eq!(input.soil_ph, 6.4);
        assert_eq!(input.location.village, "Wagholi");
        assert_eq!(input.weather.temperature, 24);
        assert!(t.state.recommendation_loading());

        // A second click while the first is in flight does nothing
        let again = t.state.apply(FormEvent::Submit);
        assert!(again.effects.is_empty());

        let done = again
            .state
            .apply(FormEvent::RecommendationsLoaded {
                seq,
                recommendations: crate::models::RecommendationBatch::fallback().into_ranked(),
            })
            .state;
        assert_eq!(done.recommendations().len(), 3);
        assert!(done.can_submit());
    }

    #[test]
    fn test_failure_keeps_previous_batch_and_allows_resubmit() {
        let t = submittable().apply(FormEvent::Submit);
        let seq = match t.effects.as_slice() {
            [FormEffect::RequestRecommendations { seq, .. }] => *seq,
            other => panic!("unexpected effects {:?}", other),
        };
        let state = t
            .state
            .apply(FormEvent::RecommendationsLoaded {
                seq,
                recommendations: crate::models::RecommendationBatch::fallback().into_ranked(),
            })
            .state;

        let t = state.apply(FormEvent::Submit);
        let seq = match t.effects.as_slice() {
            [FormEffect::RequestRecommendations { seq, .. }] => *seq,
            other => panic!("unexpected effects {:?}", other),
        };
        let state = t
            .state
            .apply(FormEvent::RecommendationsFailed {
                seq,
                message: "Rate limit exceeded. Please try again in a moment.".into(),
            })
            .state;
        assert_eq!(state.recommendations().len(), 3);
        assert!(state.recommendation_error().is_some());
        assert!(state.can_submit());
    }

    #[test]
    fn test_soil_edits_update_snapshot_without_effects() {
        let state = FormState::new();
        let t = state.apply(FormEvent::SelectSoilType(SoilType::Laterite));
        assert!(t.effects.is_empty());
        assert_ne!(t.state, state);
        assert_eq!(t.state.soil_type(), Some(SoilType::Laterite));

        let t = t.state.apply(FormEvent::SetSoilPh(5.5));
        assert!(t.effects.is_empty());
        assert_eq!(t.state.soil_ph(), 5.5);
    }

    #[test]
    fn test_ph_is_clamped() {
        let state = FormState::new().apply(FormEvent::SetSoilPh(14.0)).state;
        assert_eq!(state.soil_ph(), 11.0);
        let state = state.apply(FormEvent::SetSoilPh(f64::NAN)).state;
        assert_eq!(state.soil_ph(), 11.0);
    }
}
