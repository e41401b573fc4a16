//! Tests for the generative AI module
