//! Lookup tables for the heuristic planner
//!
//! These tables drive destination recognition, trip-length estimation,
//! style classification and currency selection when no generative
//! backend is available. Match order is significant throughout: the
//! first hit wins.

/// Recognized destination names, matched case-insensitively as substrings
pub(super) const DESTINATIONS: &[&str] = &[
    "Paris",
    "Tokyo",
    "New York",
    "London",
    "Rome",
    "Barcelona",
    "Bangkok",
    "Dubai",
    "Sydney",
    "Bali",
    "Hawaii",
    "Swiss Alps",
    "Amsterdam",
    "Prague",
    "Vienna",
    "Berlin",
    "Madrid",
    "Lisbon",
    "Athens",
    "Istanbul",
    "Cairo",
    "Marrakech",
    "Cape Town",
    "Santorini",
    "Buenos Aires",
    "Rio de Janeiro",
    "Mexico City",
    "Los Angeles",
    "San Francisco",
    "Toronto",
    "Vancouver",
    "Seoul",
    "Singapore",
    "Hong Kong",
    "Shanghai",
    "Beijing",
    "Moscow",
    "Stockholm",
    "Oslo",
    "Helsinki",
    "Copenhagen",
    "Dublin",
    "Edinburgh",
    "Andhra Pradesh",
];

/// Common shorthand and country names mapped to a canonical destination
pub(super) const DESTINATION_VARIATIONS: &[(&str, &[&str])] = &[
    ("New York", &["new york", "nyc", "new york city"]),
    ("Los Angeles", &["los angeles", "la", "l.a."]),
    ("San Francisco", &["san francisco", "sf", "sfo"]),
    ("London", &["london", "england", "uk", "united kingdom"]),
    ("Paris", &["paris", "france"]),
    ("Tokyo", &["tokyo", "japan"]),
    ("Sydney", &["sydney", "australia"]),
    ("Rome", &["rome", "italy"]),
    ("Berlin", &["berlin", "germany"]),
    ("Madrid", &["madrid", "spain"]),
];

/// Duration phrases and the trip length they imply
///
/// Longer phrases come first so "weekend" is not shadowed by "week".
pub(super) const DAY_PHRASES: &[(&str, u32)] = &[
    ("weekend", 3),
    ("fortnight", 14),
    ("week", 7),
    ("month", 30),
];

/// Spelled-out numbers recognized as trip lengths
pub(super) const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
];

/// Style categories and the words that signal them
///
/// Candidates are compared by exact equality after lowercasing, one
/// keyword hit claims the whole category.
pub(super) const STYLE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "relaxing",
        &["relax", "relaxing", "chill", "peaceful", "serene", "calm", "spa", "beach"],
    ),
    (
        "adventure",
        &["adventure", "thrill", "exciting", "explore", "hiking", "trekking", "outdoor"],
    ),
    (
        "luxury",
        &["luxury", "luxurious", "expensive", "high-end", "premium", "five-star"],
    ),
    (
        "budget",
        &["budget", "cheap", "affordable", "low-cost", "economical"],
    ),
    ("family", &["family", "kids", "children", "parents"]),
    ("romantic", &["romantic", "couple", "honeymoon", "love", "date"]),
    (
        "cultural",
        &["cultural", "culture", "museum", "art", "heritage", "local"],
    ),
    (
        "historical",
        &["historical", "history", "ancient", "historic", "monument"],
    ),
    ("beach", &["beach", "coast", "ocean", "sea", "sand", "surf"]),
    ("mountain", &["mountain", "hills", "peak", "summit", "alpine"]),
    ("city", &["city", "urban", "metropolitan", "downtown"]),
    ("nature", &["nature", "wildlife", "forest", "park", "natural"]),
];

/// Mood summaries assigned to inspiration images by hash
pub(super) const MOOD_DESCRIPTIONS: &[&str] = &[
    "Vibrant and colorful atmosphere",
    "Serene and peaceful setting",
    "Urban and modern landscape",
    "Natural and rustic environment",
    "Luxurious and elegant ambiance",
    "Adventurous and exotic locale",
];

/// Day themes, cycled by day number
pub(super) const DAY_THEMES: &[&str] = &[
    "Exploring the City",
    "Cultural Immersion",
    "Scenic Adventures",
    "Local Experiences",
    "Historical Journey",
    "Gastronomic Delights",
];

/// Local currency per recognized destination, defaulting to USD
pub(super) const CURRENCIES: &[(&str, &str)] = &[
    ("Paris", "EUR"),
    ("Tokyo", "JPY"),
    ("New York", "USD"),
    ("London", "GBP"),
    ("Rome", "EUR"),
    ("Barcelona", "EUR"),
    ("Bangkok", "THB"),
    ("Dubai", "AED"),
    ("Sydney", "AUD"),
    ("Bali", "IDR"),
    ("Hawaii", "USD"),
];
