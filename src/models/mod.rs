// ABOUTME: Common data models for the FitTrack client
// ABOUTME: Serde DTOs for users, foods, meal entries, goals, and nutrition summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Data models shared across the API surface.
//!
//! All entities are owned by the backend; the client holds ephemeral,
//! re-fetchable copies. Two wire-format quirks are absorbed here so the
//! rest of the crate sees clean types:
//!
//! - decimal fields arrive as JSON strings (`"150.00"`) from DRF's default
//!   decimal coercion, but as numbers from other deployments - both parse
//! - ids mix integer keys (auth users) and UUID strings (nutrition rows) -
//!   the client treats every id as an opaque string

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod wire;

use wire::{decimal, id_string, opt_id_string};

/// Authenticated user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Opaque user id
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Account email address
    pub email: String,
    /// Display name, when the user has set one
    #[serde(default)]
    pub display_name: Option<String>,
    /// Avatar image URL, when the user has set one
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Sign-in / sign-up response: the user plus their credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Authenticated user
    pub user: UserProfile,
    /// Opaque credential string for subsequent requests
    pub token: String,
}

/// Food category (Fruits, Vegetables, Proteins, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCategory {
    /// Opaque category id
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Category name
    pub name: String,
    /// Optional longer description
    #[serde(default)]
    pub description: String,
}

/// A food item with per-serving nutritional information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Opaque food id
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Food name
    pub name: String,
    /// Brand name; empty for generic foods
    #[serde(default)]
    pub brand: Option<String>,
    /// Category id, if categorized
    #[serde(default, deserialize_with = "opt_id_string")]
    pub category: Option<String>,
    /// Category name, denormalized by the backend
    #[serde(default)]
    pub category_name: Option<String>,
    /// Serving size in `serving_unit` units
    #[serde(deserialize_with = "decimal")]
    pub serving_size: f64,
    /// Unit for the serving size (g, ml, oz, ...)
    pub serving_unit: String,
    /// Calories per serving
    pub calories: i32,
    /// Protein per serving, grams
    #[serde(deserialize_with = "decimal")]
    pub protein: f64,
    /// Carbohydrates per serving, grams
    #[serde(deserialize_with = "decimal")]
    pub carbs: f64,
    /// Fat per serving, grams
    #[serde(deserialize_with = "decimal")]
    pub fat: f64,
    /// Fiber per serving, grams
    #[serde(default, deserialize_with = "decimal")]
    pub fiber: f64,
    /// Sugar per serving, grams
    #[serde(default, deserialize_with = "decimal")]
    pub sugar: f64,
    /// Sodium per serving, milligrams
    #[serde(default, deserialize_with = "decimal")]
    pub sodium: f64,
    /// Whether an admin verified this food's data
    #[serde(default)]
    pub is_verified: bool,
    /// Whether a user created this food
    #[serde(default)]
    pub is_custom: bool,
    /// UPC/EAN barcode, when known
    #[serde(default)]
    pub barcode: Option<String>,
}

/// Payload for creating a custom food item.
///
/// The backend marks the new food as custom and owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct NewFoodItem {
    /// Food name
    pub name: String,
    /// Brand name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Category id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Serving size in `serving_unit` units
    pub serving_size: f64,
    /// Unit for the serving size
    pub serving_unit: String,
    /// Calories per serving
    pub calories: i32,
    /// Protein per serving, grams
    pub protein: f64,
    /// Carbohydrates per serving, grams
    pub carbs: f64,
    /// Fat per serving, grams
    pub fat: f64,
    /// Fiber per serving, grams
    pub fiber: f64,
    /// Sugar per serving, grams
    pub sugar: f64,
    /// Sodium per serving, milligrams
    pub sodium: f64,
    /// UPC/EAN barcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

/// A named meal slot (Breakfast, Lunch, Dinner, Snack)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealType {
    /// Opaque meal type id
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Meal name
    pub name: String,
    /// Chronological position within a day
    #[serde(default)]
    pub order: i32,
}

/// A food item logged for a specific meal and date.
///
/// Nutrient totals are computed by the backend as food nutrients times
/// servings. Entries are created and deleted, never edited in place by the
/// observed UI flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    /// Opaque entry id
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Id of the logged food
    #[serde(deserialize_with = "id_string")]
    pub food_item: String,
    /// Full food record, denormalized by the backend
    #[serde(default)]
    pub food_item_details: Option<FoodItem>,
    /// Id of the meal slot
    #[serde(deserialize_with = "id_string")]
    pub meal_type: String,
    /// Meal slot name, denormalized by the backend
    #[serde(default)]
    pub meal_type_name: Option<String>,
    /// Calendar date the food was eaten
    pub date: NaiveDate,
    /// Time of day the food was eaten
    pub time: NaiveTime,
    /// Number of servings logged
    #[serde(deserialize_with = "decimal")]
    pub servings: f64,
    /// Total calories for this entry
    pub calories: i32,
    /// Total protein, grams
    #[serde(deserialize_with = "decimal")]
    pub protein: f64,
    /// Total carbohydrates, grams
    #[serde(deserialize_with = "decimal")]
    pub carbs: f64,
    /// Total fat, grams
    #[serde(deserialize_with = "decimal")]
    pub fat: f64,
    /// Total fiber, grams
    #[serde(default, deserialize_with = "decimal")]
    pub fiber: f64,
    /// Total sugar, grams
    #[serde(default, deserialize_with = "decimal")]
    pub sugar: f64,
    /// Total sodium, milligrams
    #[serde(default, deserialize_with = "decimal")]
    pub sodium: f64,
    /// Free-form note attached by the user
    #[serde(default)]
    pub notes: String,
}

/// Weight goal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Calorie deficit
    Lose,
    /// Calorie maintenance
    Maintain,
    /// Calorie surplus
    Gain,
}

/// Daily intake targets. One active goal per user, updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionGoal {
    /// Opaque goal id
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// Daily calorie target
    pub calorie_target: i32,
    /// Daily protein target, grams
    #[serde(deserialize_with = "decimal")]
    pub protein_target: f64,
    /// Daily carbohydrate target, grams
    #[serde(deserialize_with = "decimal")]
    pub carbs_target: f64,
    /// Daily fat target, grams
    #[serde(deserialize_with = "decimal")]
    pub fat_target: f64,
    /// Daily fiber target, grams
    #[serde(default, deserialize_with = "decimal")]
    pub fiber_target: f64,
    /// Daily sugar ceiling, grams
    #[serde(default, deserialize_with = "decimal")]
    pub sugar_target: f64,
    /// Daily sodium ceiling, milligrams
    #[serde(default, deserialize_with = "decimal")]
    pub sodium_target: f64,
    /// Goal direction
    pub goal_type: GoalType,
}

/// Partial update for a nutrition goal
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoalPatch {
    /// New daily calorie target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_target: Option<i32>,
    /// New daily protein target, grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_target: Option<f64>,
    /// New daily carbohydrate target, grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_target: Option<f64>,
    /// New daily fat target, grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_target: Option<f64>,
    /// New goal direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
}

/// Server-computed aggregate of one user-date's logged meals.
///
/// The backend is the source of truth for aggregation; the client renders
/// these figures unmodified. Progress values are integer percentages of the
/// matching goal and may exceed 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNutritionSummary {
    /// Date the summary covers
    pub date: NaiveDate,
    /// Total calories consumed
    pub total_calories: i32,
    /// Total protein consumed, grams
    #[serde(deserialize_with = "decimal")]
    pub total_protein: f64,
    /// Total carbohydrates consumed, grams
    #[serde(deserialize_with = "decimal")]
    pub total_carbs: f64,
    /// Total fat consumed, grams
    #[serde(deserialize_with = "decimal")]
    pub total_fat: f64,
    /// Total fiber consumed, grams
    #[serde(default, deserialize_with = "decimal")]
    pub total_fiber: f64,
    /// Total sugar consumed, grams
    #[serde(default, deserialize_with = "decimal")]
    pub total_sugar: f64,
    /// Total sodium consumed, milligrams
    #[serde(default, deserialize_with = "decimal")]
    pub total_sodium: f64,
    /// Calorie target the progress is measured against
    pub calorie_goal: i32,
    /// Protein target, grams
    #[serde(deserialize_with = "decimal")]
    pub protein_goal: f64,
    /// Carbohydrate target, grams
    #[serde(deserialize_with = "decimal")]
    pub carbs_goal: f64,
    /// Fat target, grams
    #[serde(deserialize_with = "decimal")]
    pub fat_goal: f64,
    /// Calories consumed as a percentage of the target; unclamped
    pub calorie_progress: i32,
    /// Protein consumed as a percentage of the target; unclamped
    pub protein_progress: i32,
    /// Carbohydrates consumed as a percentage of the target; unclamped
    pub carbs_progress: i32,
    /// Fat consumed as a percentage of the target; unclamped
    pub fat_progress: i32,
    /// Logged entries grouped by meal type name
    #[serde(default)]
    pub meals: HashMap<String, Vec<MealEntry>>,
}

/// One day's macro totals from the weekly endpoint.
///
/// The backend returns seven consecutive rows, zero-filling days with no
/// logged meals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMacroTotals {
    /// Calendar date
    pub date: NaiveDate,
    /// Total calories for the day
    pub calories: i32,
    /// Total protein, grams
    #[serde(deserialize_with = "decimal")]
    pub protein: f64,
    /// Total carbohydrates, grams
    #[serde(deserialize_with = "decimal")]
    pub carbs: f64,
    /// Total fat, grams
    #[serde(deserialize_with = "decimal")]
    pub fat: f64,
}
