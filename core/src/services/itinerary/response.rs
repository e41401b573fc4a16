//! Parsing of generative backend responses
//!
//! Models are asked for bare JSON but routinely wrap it in markdown
//! fences or prose, so the first step carves out the outermost brace
//! block. The raw shape is then mapped onto the domain itinerary with
//! lenient time-of-day normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::domain::entities::trip::{Activity, DayPlan, Itinerary, ItineraryMeta, TimeOfDay};

use super::planner::PlannerError;

/// Widest brace-delimited block, across newlines
static JSON_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItinerary {
    destination: String,
    num_days: u32,
    style_keywords: Vec<String>,
    #[serde(default)]
    image_mood_summary: Option<String>,
    days: Vec<RawDayPlan>,
    meta: RawMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDayPlan {
    day_number: u32,
    #[serde(default)]
    date: Option<String>,
    theme: String,
    summary: String,
    activities: Vec<RawActivity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActivity {
    /// Free-form in the raw response; normalized during mapping
    time_of_day: String,
    title: String,
    description: String,
    location: String,
    category: String,
    estimated_cost: f64,
    booking_required: bool,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeta {
    currency: String,
    budget_level: String,
    notes: String,
}

/// Parse a backend response into a domain itinerary
///
/// # Arguments
///
/// * `raw` - The complete response text from the model
///
/// # Returns
///
/// * `Ok(Itinerary)` - The mapped itinerary
/// * `Err(PlannerError)` - The text held no parseable JSON, or the JSON
///   did not match the itinerary shape
pub(super) fn parse_backend_response(raw: &str) -> Result<Itinerary, PlannerError> {
    let json_text = extract_json_block(raw);

    let value: serde_json::Value =
        serde_json::from_str(json_text).map_err(|e| PlannerError::Parse(e.to_string()))?;

    let raw_itinerary: RawItinerary =
        serde_json::from_value(value).map_err(|e| PlannerError::Mapping(e.to_string()))?;

    Ok(raw_itinerary.into())
}

/// Carve the outermost brace block out of the response text
///
/// Falls back to the full text when no braces are found, leaving the
/// error to the JSON parser.
fn extract_json_block(raw: &str) -> &str {
    match JSON_BLOCK.find(raw) {
        Some(found) => found.as_str(),
        None => raw,
    }
}

/// Map a free-form time-of-day label onto the three supported slots
///
/// Anything mentioning "morning" is morning, "evening" or "night" is
/// evening, everything else (including labels like "late afternoon")
/// lands on afternoon.
fn normalize_time_of_day(raw: &str) -> TimeOfDay {
    let lowered = raw.to_lowercase();
    if lowered.contains("morning") {
        TimeOfDay::Morning
    } else if lowered.contains("evening") || lowered.contains("night") {
        TimeOfDay::Evening
    } else {
        TimeOfDay::Afternoon
    }
}

impl From<RawItinerary> for Itinerary {
    fn from(raw: RawItinerary) -> Self {
        Self {
            destination: raw.destination,
            num_days: raw.num_days,
            style_keywords: raw.style_keywords,
            image_mood_summary: raw.image_mood_summary,
            days: raw.days.into_iter().map(DayPlan::from).collect(),
            meta: ItineraryMeta {
                currency: raw.meta.currency,
                budget_level: raw.meta.budget_level,
                notes: raw.meta.notes,
            },
        }
    }
}

impl From<RawDayPlan> for DayPlan {
    fn from(raw: RawDayPlan) -> Self {
        Self {
            day_number: raw.day_number,
            date: raw.date,
            theme: raw.theme,
            summary: raw.summary,
            activities: raw.activities.into_iter().map(Activity::from).collect(),
        }
    }
}

impl From<RawActivity> for Activity {
    fn from(raw: RawActivity) -> Self {
        Self {
            time_of_day: normalize_time_of_day(&raw.time_of_day),
            title: raw.title,
            description: raw.description,
            location: raw.location,
            category: raw.category,
            estimated_cost: raw.estimated_cost,
            booking_required: raw.booking_required,
            latitude: raw.latitude,
            longitude: raw.longitude,
        }
    }
}
