//! Tests for the itinerary planning module
