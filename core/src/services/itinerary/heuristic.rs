//! Heuristic trip planner used when the generative backend is unavailable
//!
//! Produces a complete itinerary from the request alone: destination and
//! trip length are inferred from the free-text description, style
//! keywords from description and tags, and daily plans come from a small
//! built-in activity pool. The output is deterministic for a given
//! request.

use sha2::{Digest, Sha256};

use crate::domain::entities::trip::{
    Activity, DayPlan, Itinerary, ItineraryMeta, TimeOfDay, TripRequest,
};

use super::catalog;

/// Deterministic fallback planner
pub struct HeuristicPlanner;

impl HeuristicPlanner {
    /// Build an itinerary without calling any external service
    ///
    /// Explicit request fields win over inference; empty strings and a
    /// zero day count are treated as absent.
    pub fn plan(request: &TripRequest) -> Itinerary {
        let destination = request
            .destination
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| extract_destination(&request.trip_description));

        let num_days = request
            .days
            .filter(|&d| d > 0)
            .unwrap_or_else(|| estimate_days(&request.trip_description));

        let style_keywords = extract_style_keywords(&request.trip_description, &request.trip_tags);

        let image_mood_summary = request
            .inspiration_image
            .as_deref()
            .filter(|i| !i.is_empty())
            .map(interpret_image_mood);

        let days = (1..=num_days)
            .map(|day_number| build_day_plan(day_number, &destination, &request.trip_tags))
            .collect();

        let budget_level = request
            .budget_level
            .clone()
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| "Medium".to_string());

        let notes = format!(
            "This itinerary was generated using fallback logic based on your request for a {} \
             trip to {}. Powered by Gemini AI when available.",
            style_keywords.join(", "),
            destination
        );

        tracing::debug!(
            destination = %destination,
            num_days = num_days,
            event = "heuristic_plan_built",
            "Built itinerary from heuristics"
        );

        Itinerary {
            meta: ItineraryMeta {
                currency: determine_currency(&destination).to_string(),
                budget_level,
                notes,
            },
            destination,
            num_days,
            style_keywords,
            image_mood_summary,
            days,
        }
    }
}

/// Pick a destination out of the free-text description
///
/// Tries known names as substrings, then shorthand variations, then a
/// scan for capitalized words that clean up to a known name. Falls back
/// to Tokyo.
fn extract_destination(description: &str) -> String {
    let desc_lower = description.to_lowercase();

    for dest in catalog::DESTINATIONS {
        if desc_lower.contains(&dest.to_lowercase()) {
            return (*dest).to_string();
        }
    }

    for (canonical, variations) in catalog::DESTINATION_VARIATIONS {
        for variation in *variations {
            if desc_lower.contains(variation) {
                return (*canonical).to_string();
            }
        }
    }

    // Punctuation inside a word hides it from the substring passes,
    // so compare cleaned-up capitalized words against the known names
    for word in description.split_whitespace() {
        let clean: String = word.chars().filter(|c| c.is_alphabetic()).collect();
        if clean.len() > 2 && clean.chars().next().is_some_and(char::is_uppercase) {
            for dest in catalog::DESTINATIONS {
                if dest.eq_ignore_ascii_case(&clean) {
                    return (*dest).to_string();
                }
            }
        }
    }

    "Tokyo".to_string()
}

/// Estimate the trip length in days from the description
///
/// Numeric tokens between 1 and 30 win, then duration phrases, then
/// spelled-out numbers. Defaults to 5.
fn estimate_days(description: &str) -> u32 {
    let lowered = description.to_lowercase();

    for word in lowered.split_whitespace() {
        let clean: String = word
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();
        if !clean.is_empty() && clean.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(num) = clean.parse::<u32>() {
                if (1..=30).contains(&num) {
                    return num;
                }
            }
        }
    }

    for (phrase, days) in catalog::DAY_PHRASES {
        if lowered.contains(phrase) {
            return *days;
        }
    }

    for word in lowered.split_whitespace() {
        let clean: String = word.chars().filter(|c| c.is_alphabetic()).collect();
        if let Some((_, days)) = catalog::NUMBER_WORDS.iter().find(|(w, _)| *w == clean) {
            return *days;
        }
    }

    5
}

/// Classify the trip style from tags and description words
///
/// Each matched category contributes one keyword, capped at three, in
/// catalog order. Defaults to "Cultural" when nothing matches.
fn extract_style_keywords(description: &str, tags: &[String]) -> Vec<String> {
    let mut candidates: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    candidates.extend(
        description
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string),
    );

    let mut found = Vec::new();
    for (category, keywords) in catalog::STYLE_CATEGORIES {
        if keywords
            .iter()
            .any(|keyword| candidates.iter().any(|candidate| candidate == keyword))
        {
            found.push(capitalize(category));
        }
    }

    if found.is_empty() {
        found.push("Cultural".to_string());
    }
    found.truncate(3);
    found
}

/// Derive a stable mood summary from the inspiration image bytes
///
/// There is no vision model behind this: the image only selects one of
/// a fixed set of summaries, deterministically per input.
fn interpret_image_mood(image_data: &str) -> String {
    let digest = Sha256::digest(image_data.as_bytes());
    let index = digest[0] as usize % catalog::MOOD_DESCRIPTIONS.len();
    catalog::MOOD_DESCRIPTIONS[index].to_string()
}

fn build_day_plan(day_number: u32, destination: &str, tags: &[String]) -> DayPlan {
    let theme = catalog::DAY_THEMES[(day_number as usize - 1) % catalog::DAY_THEMES.len()];

    DayPlan {
        day_number,
        date: None,
        theme: theme.to_string(),
        summary: day_summary(day_number, destination),
        activities: build_activities(day_number, destination, tags),
    }
}

fn day_summary(day_number: u32, destination: &str) -> String {
    match (day_number as usize - 1) % 5 {
        0 => format!("Discover the highlights of {destination} on day {day_number}"),
        1 => format!("Immerse yourself in the local culture of {destination}"),
        2 => format!("Experience the natural beauty surrounding {destination}"),
        3 => format!("Taste the authentic flavors of {destination}"),
        _ => format!("Uncover the history and heritage of {destination}"),
    }
}

/// Assemble the activity pool for the trip and slice out one day of it
///
/// Days advance through the pool two activities at a time with a window
/// of three, so consecutive days overlap by one and long trips run out
/// of pool, leaving later days empty.
fn build_activities(day_number: u32, destination: &str, tags: &[String]) -> Vec<Activity> {
    let mut pool = if destination.contains("Karnataka") {
        karnataka_activities()
    } else if destination.contains("Andhra Pradesh") {
        andhra_pradesh_activities()
    } else {
        generic_activities(destination)
    };

    if tags.iter().any(|t| t == "Adventure") {
        pool.push(Activity {
            time_of_day: TimeOfDay::Morning,
            title: "Adventure Activity".to_string(),
            description: "Thrilling outdoor adventure experience.".to_string(),
            location: format!("{destination} Adventure Park"),
            category: "Adventure".to_string(),
            estimated_cost: 75.0,
            booking_required: true,
            latitude: None,
            longitude: None,
        });
    }
    if tags.iter().any(|t| t == "Relaxing") {
        pool.push(Activity {
            time_of_day: TimeOfDay::Afternoon,
            title: "Spa & Wellness".to_string(),
            description: "Relaxing spa treatment and wellness session.".to_string(),
            location: format!("Luxury Spa in {destination}"),
            category: "Wellness".to_string(),
            estimated_cost: 120.0,
            booking_required: true,
            latitude: None,
            longitude: None,
        });
    }
    if tags.iter().any(|t| t == "Romantic") {
        pool.push(Activity {
            time_of_day: TimeOfDay::Evening,
            title: "Romantic Dinner".to_string(),
            description: "Intimate dinner for two at a romantic venue.".to_string(),
            location: format!("Romantic Restaurant in {destination}"),
            category: "Dining".to_string(),
            estimated_cost: 150.0,
            booking_required: true,
            latitude: None,
            longitude: None,
        });
    }

    let start = (day_number as usize - 1) * 2;
    pool.into_iter().skip(start).take(3).collect()
}

fn generic_activities(destination: &str) -> Vec<Activity> {
    vec![
        Activity {
            time_of_day: TimeOfDay::Morning,
            title: format!("Morning Exploration in {destination}"),
            description: format!(
                "Start your day with a guided tour of {destination}'s iconic landmarks."
            ),
            location: format!("Downtown {destination}"),
            category: "Sightseeing".to_string(),
            estimated_cost: 0.0,
            booking_required: false,
            latitude: None,
            longitude: None,
        },
        Activity {
            time_of_day: TimeOfDay::Afternoon,
            title: "Local Cuisine Experience".to_string(),
            description: "Enjoy a traditional meal at a renowned local restaurant.".to_string(),
            location: format!("Local Restaurant in {destination}"),
            category: "Food & Drink".to_string(),
            estimated_cost: 25.0,
            booking_required: true,
            latitude: None,
            longitude: None,
        },
        Activity {
            time_of_day: TimeOfDay::Evening,
            title: "Evening Entertainment".to_string(),
            description: "Experience the nightlife and entertainment options.".to_string(),
            location: format!("{destination} Entertainment District"),
            category: "Entertainment".to_string(),
            estimated_cost: 30.0,
            booking_required: false,
            latitude: None,
            longitude: None,
        },
    ]
}

fn karnataka_activities() -> Vec<Activity> {
    vec![
        Activity {
            time_of_day: TimeOfDay::Morning,
            title: "Visit Mysore Palace".to_string(),
            description: "Explore the magnificent Mysore Palace, a symbol of the city's rich heritage."
                .to_string(),
            location: "Mysore Palace, Mysore".to_string(),
            category: "Historical Site".to_string(),
            estimated_cost: 50.0,
            booking_required: false,
            latitude: Some(12.3051),
            longitude: Some(76.6555),
        },
        Activity {
            time_of_day: TimeOfDay::Afternoon,
            title: "Explore Coorg's Coffee Plantations".to_string(),
            description:
                "Take a guided tour of coffee plantations and learn about the coffee-making process."
                    .to_string(),
            location: "Coorg Coffee Plantations".to_string(),
            category: "Nature & Adventure".to_string(),
            estimated_cost: 75.0,
            booking_required: true,
            latitude: Some(12.3375),
            longitude: Some(75.8019),
        },
        Activity {
            time_of_day: TimeOfDay::Evening,
            title: "Stroll along Lalbagh Botanical Garden".to_string(),
            description:
                "Enjoy the beautiful gardens and glass house in this historic botanical garden."
                    .to_string(),
            location: "Lalbagh Botanical Garden, Bangalore".to_string(),
            category: "Nature".to_string(),
            estimated_cost: 30.0,
            booking_required: false,
            latitude: Some(12.9791),
            longitude: Some(77.5704),
        },
    ]
}

fn andhra_pradesh_activities() -> Vec<Activity> {
    vec![
        Activity {
            time_of_day: TimeOfDay::Morning,
            title: "Visit Araku Valley".to_string(),
            description:
                "Explore the scenic hill station with coffee plantations and tribal villages."
                    .to_string(),
            location: "Araku Valley".to_string(),
            category: "Nature & Adventure".to_string(),
            estimated_cost: 80.0,
            booking_required: true,
            latitude: Some(18.3991),
            longitude: Some(83.3434),
        },
        Activity {
            time_of_day: TimeOfDay::Afternoon,
            title: "Tour Amaravati Buddhist Stupa".to_string(),
            description: "Discover the ancient Buddhist stupa and archaeological museum.".to_string(),
            location: "Amaravati Buddhist Stupa".to_string(),
            category: "Historical Site".to_string(),
            estimated_cost: 40.0,
            booking_required: false,
            latitude: Some(16.5333),
            longitude: Some(80.3667),
        },
        Activity {
            time_of_day: TimeOfDay::Evening,
            title: "Relax at Rushikonda Beach".to_string(),
            description:
                "Enjoy the sunset and water sports at this pristine beach in Visakhapatnam."
                    .to_string(),
            location: "Rushikonda Beach, Visakhapatnam".to_string(),
            category: "Beach & Recreation".to_string(),
            estimated_cost: 25.0,
            booking_required: false,
            latitude: Some(17.7667),
            longitude: Some(83.3333),
        },
    ]
}

fn determine_currency(destination: &str) -> &'static str {
    catalog::CURRENCIES
        .iter()
        .find(|(city, _)| *city == destination)
        .map(|(_, currency)| *currency)
        .unwrap_or("USD")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
