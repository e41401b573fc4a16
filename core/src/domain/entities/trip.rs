//! Trip request and itinerary wire types.
//!
//! `TripRequest` is snake_case on the wire; the itinerary family is
//! camelCase. Both shapes are frozen - the web client and the generative
//! backend's JSON contract depend on them.

use serde::{Deserialize, Serialize};

/// A trip-planning request from the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Free-text description of the desired trip (required)
    pub trip_description: String,

    /// Explicit destination; overrides anything inferred from the description
    #[serde(default)]
    pub destination: Option<String>,

    /// Requested start date (opaque string, passed through)
    #[serde(default)]
    pub start_date: Option<String>,

    /// Explicit trip length in days; overrides inference
    #[serde(default)]
    pub days: Option<u32>,

    /// Budget level label (e.g. "Low", "Medium", "High")
    #[serde(default)]
    pub budget_level: Option<String>,

    /// Style tags selected in the client UI (e.g. "Adventure", "Relaxing")
    #[serde(default)]
    pub trip_tags: Vec<String>,

    /// Base64 inspiration image; treated as an opaque string
    #[serde(default)]
    pub inspiration_image: Option<String>,
}

/// Coarse time slot for an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// A single activity within a day plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time_of_day: TimeOfDay,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub estimated_cost: f64,
    pub booking_required: bool,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Planned activities for one day of the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based day number
    pub day_number: u32,
    /// Calendar date when known; the fallback planner leaves this unset
    #[serde(default)]
    pub date: Option<String>,
    pub theme: String,
    pub summary: String,
    pub activities: Vec<Activity>,
}

/// Itinerary metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryMeta {
    /// ISO currency code for estimated costs
    pub currency: String,
    pub budget_level: String,
    pub notes: String,
}

/// A complete multi-day travel itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: String,
    pub num_days: u32,
    pub style_keywords: Vec<String>,
    #[serde(default)]
    pub image_mood_summary: Option<String>,
    pub days: Vec<DayPlan>,
    pub meta: ItineraryMeta,
}
