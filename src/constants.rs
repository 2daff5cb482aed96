// ABOUTME: Application constants for the FitTrack client
// ABOUTME: Endpoint paths, request defaults, and fixed fallback identity values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Constants shared across the client modules.

/// Backend endpoint paths, relative to the configured base URL
pub mod endpoints {
    /// User registration
    pub const AUTH_SIGNUP: &str = "/api/auth/signup/";
    /// Credential sign-in
    pub const AUTH_LOGIN: &str = "/api/auth/login/";
    /// Current-user identity endpoint (may be unimplemented on some deployments)
    pub const AUTH_ME: &str = "/api/auth/me/";
    /// Password reset request
    pub const AUTH_PASSWORD_RESET: &str = "/api/auth/password-reset/";

    /// Food category listing
    pub const NUTRITION_CATEGORIES: &str = "/api/nutrition/categories/";
    /// Food item collection (list, create)
    pub const NUTRITION_FOODS: &str = "/api/nutrition/foods/";
    /// Food search by name, brand, or barcode fragment
    pub const NUTRITION_FOOD_SEARCH: &str = "/api/nutrition/foods/search/";
    /// Exact barcode lookup
    pub const NUTRITION_FOOD_BARCODE: &str = "/api/nutrition/foods/barcode/";
    /// Favorite foods for the current user
    pub const NUTRITION_FOOD_FAVORITES: &str = "/api/nutrition/foods/favorites/";
    /// Custom foods created by the current user
    pub const NUTRITION_FOOD_CUSTOM: &str = "/api/nutrition/foods/custom/";
    /// Meal type listing (Breakfast, Lunch, ...)
    pub const NUTRITION_MEAL_TYPES: &str = "/api/nutrition/meal-types/";
    /// Meal entry collection (create)
    pub const NUTRITION_MEALS: &str = "/api/nutrition/meals/";
    /// Meal entries for one date
    pub const NUTRITION_MEALS_DAILY: &str = "/api/nutrition/meals/daily/";
    /// Server-computed daily nutrition summary
    pub const NUTRITION_MEALS_SUMMARY: &str = "/api/nutrition/meals/summary/";
    /// Per-day macro totals for the trailing week
    pub const NUTRITION_MEALS_WEEKLY: &str = "/api/nutrition/meals/weekly/";
    /// Most frequently logged foods
    pub const NUTRITION_MEALS_FREQUENT: &str = "/api/nutrition/meals/frequently-used/";
    /// Current nutrition goal (backend creates defaults on first call)
    pub const NUTRITION_GOALS_CURRENT: &str = "/api/nutrition/goals/current/";
    /// Nutrition goal collection, `{id}/` appended for updates
    pub const NUTRITION_GOALS: &str = "/api/nutrition/goals/";
}

/// Request defaults
pub mod limits {
    /// Default result cap for food search
    pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
    /// Default result cap for frequently-used foods
    pub const DEFAULT_FREQUENT_LIMIT: u32 = 10;
}

/// Date and time wire formats expected by the backend
pub mod formats {
    /// Calendar dates: `YYYY-MM-DD`
    pub const DATE: &str = "%Y-%m-%d";
    /// Times of day: `HH:MM:SS`
    pub const TIME: &str = "%H:%M:%S";
}

/// Placeholder identity used when the backend cannot confirm who the user is.
///
/// Sessions in the degraded-authenticated state substitute these values so
/// the app stays usable against deployments without an identity endpoint.
pub mod fallback_user {
    /// Placeholder user id
    pub const ID: &str = "1";
    /// Placeholder email
    pub const EMAIL: &str = "user@example.com";
    /// Placeholder display name
    pub const DISPLAY_NAME: &str = "User";
}

/// Fixed user-facing error messages
pub mod error_messages {
    /// Sign-in rejected by the backend
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
    /// Search invoked with neither a query nor a category
    pub const EMPTY_SEARCH: &str = "Please provide a search query or category";
    /// Barcode lookup invoked with an empty code
    pub const EMPTY_BARCODE: &str = "Please provide a barcode";
    /// Meal entry servings failed local validation
    pub const INVALID_SERVINGS: &str = "Servings must be a positive number";
}
