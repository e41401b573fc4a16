//! Prompt construction for the generative backend

use crate::domain::entities::trip::TripRequest;

/// JSON schema the model is told to match, embedded verbatim in the prompt
const ITINERARY_SCHEMA: &str = r#"{
    "destination": "string",
    "numDays": "integer",
    "styleKeywords": ["string"],
    "imageMoodSummary": "string or null",
    "days": [
        {
            "dayNumber": "integer",
            "date": "string or null",
            "theme": "string",
            "summary": "string",
            "activities": [
                {
                    "timeOfDay": "morning|afternoon|evening",
                    "title": "string",
                    "description": "string",
                    "location": "string",
                    "category": "string",
                    "estimatedCost": "number",
                    "bookingRequired": "boolean",
                    "latitude": "number or null (approximate GPS latitude of the location)",
                    "longitude": "number or null (approximate GPS longitude of the location)"
                }
            ]
        }
    ],
    "meta": {
        "currency": "string",
        "budgetLevel": "string",
        "notes": "string"
    }
}"#;

/// Build the planning prompt for a trip request
///
/// The inspiration image itself is never sent, only whether one was
/// provided; absent optional fields render as "Not specified".
pub(super) fn build_prompt(request: &TripRequest) -> String {
    let destination = field_or_not_specified(request.destination.as_deref());
    let start_date = field_or_not_specified(request.start_date.as_deref());
    let days = request
        .days
        .filter(|&d| d > 0)
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Not specified".to_string());
    let budget_level = field_or_not_specified(request.budget_level.as_deref());
    let image_hint = if request
        .inspiration_image
        .as_deref()
        .is_some_and(|i| !i.is_empty())
    {
        "Provided (base64 encoded)"
    } else {
        "Not provided"
    };

    format!(
        "You are an AI travel planner. Generate a detailed, realistic travel itinerary as JSON \
         only, matching this exact schema:\n\
         \n\
         {schema}\n\
         \n\
         User trip description: {description}\n\
         Destination: {destination}\n\
         Start date: {start_date}\n\
         Days: {days}\n\
         Budget level: {budget_level}\n\
         Trip tags: {tags:?}\n\
         Image mood hint: {image_hint}\n\
         \n\
         Important instructions:\n\
         1. Respond ONLY with valid JSON that matches the schema exactly\n\
         2. Do not include any markdown, explanations, or other text\n\
         3. Make the itinerary realistic and engaging\n\
         4. Ensure all fields are populated appropriately\n\
         5. For estimated costs, use reasonable values in the local currency\n\
         6. Activities should be appropriate for the destination and trip type\n\
         7. Include 2-4 activities per day\n\
         8. Use the destination provided above, not the one mentioned in the trip description\n\
         9. Generate specific tourist attractions and activities for the given destination\n\
         10. Include approximate latitude and longitude coordinates for each activity location\n\
         11. If you don't know the exact coordinates, estimate them based on the location name \
         and destination\n",
        schema = ITINERARY_SCHEMA,
        description = request.trip_description,
        destination = destination,
        start_date = start_date,
        days = days,
        budget_level = budget_level,
        tags = request.trip_tags,
        image_hint = image_hint,
    )
}

fn field_or_not_specified(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "Not specified",
    }
}
