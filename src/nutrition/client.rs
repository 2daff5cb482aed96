// ABOUTME: HTTP client for the FitTrack backend nutrition endpoints
// ABOUTME: Foods, meal entries, goals, summaries; local validation before any request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Nutrition endpoints client.
//!
//! Every request carries the authorization scheme resolved once per
//! session. Optional endpoints that older backend deployments lack
//! (favorites, custom foods, frequently-used) answer 403/404 there;
//! those yield an empty list instead of an error so the UI renders an
//! empty state rather than a banner.

use crate::config::{AuthScheme, ClientConfig};
use crate::constants::{endpoints, error_messages, formats, limits};
use crate::errors::{AppError, AppResult};
use crate::models::{
    DailyMacroTotals, DailyNutritionSummary, FoodCategory, FoodItem, GoalPatch, MealEntry,
    MealType, NewFoodItem, NutritionGoal,
};
use chrono::{Local, NaiveDate, NaiveTime};
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::client::failure_from_response;
use crate::auth::SessionManager;

/// A meal entry as entered by the user, before local validation.
///
/// `date` and `time` default to today/now when unset; `servings` must be a
/// positive number before anything is sent to the backend.
#[derive(Debug, Clone)]
pub struct MealEntryDraft {
    /// Id of the food being logged
    pub food_item: String,
    /// Id of the meal slot
    pub meal_type: String,
    /// Number of servings
    pub servings: f64,
    /// Date the food was eaten; today when unset
    pub date: Option<NaiveDate>,
    /// Time the food was eaten; now when unset
    pub time: Option<NaiveTime>,
    /// Free-form note
    pub notes: Option<String>,
}

impl MealEntryDraft {
    /// Draft for logging a food now
    #[must_use]
    pub fn new(food_item: impl Into<String>, meal_type: impl Into<String>, servings: f64) -> Self {
        Self {
            food_item: food_item.into(),
            meal_type: meal_type.into(),
            servings,
            date: None,
            time: None,
            notes: None,
        }
    }

    /// Draft with servings taken from raw text input.
    ///
    /// Coerces the text to a number here so non-numeric input fails before
    /// any request is constructed.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when the text is not a number.
    pub fn with_servings_text(
        food_item: impl Into<String>,
        meal_type: impl Into<String>,
        servings: &str,
    ) -> AppResult<Self> {
        let parsed: f64 = servings
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input(error_messages::INVALID_SERVINGS))?;
        Ok(Self::new(food_item, meal_type, parsed))
    }
}

/// Partial update for an existing meal entry
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealEntryPatch {
    /// New servings count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
    /// New meal slot id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    /// New note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Wire payload for meal entry creation
#[derive(Serialize)]
struct CreateMealEntryBody<'a> {
    food_item: &'a str,
    meal_type: &'a str,
    date: String,
    time: String,
    servings: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

/// HTTP client for the backend nutrition endpoints
pub struct NutritionClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: String,
    scheme: AuthScheme,
}

impl NutritionClient {
    /// Create a client with explicit credentials.
    ///
    /// # Errors
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(
        config: &ClientConfig,
        token: impl Into<String>,
        scheme: AuthScheme,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("building HTTP client: {e}")))?;
        Ok(Self {
            http,
            config: config.clone(),
            token: token.into(),
            scheme,
        })
    }

    /// Create a client bound to the active session's token and scheme.
    ///
    /// # Errors
    /// Returns [`AppError::AuthInvalid`] when no session is active.
    pub async fn for_session(config: &ClientConfig, session: &SessionManager) -> AppResult<Self> {
        let token = session
            .token()
            .await
            .ok_or_else(|| AppError::auth_invalid("no active session"))?;
        let scheme = session.auth_scheme().await;
        Self::new(config, token, scheme)
    }

    /// List food categories
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn categories(&self) -> AppResult<Vec<FoodCategory>> {
        self.get_json(endpoints::NUTRITION_CATEGORIES, &[]).await
    }

    /// List foods visible to the user: verified foods plus their own
    /// custom ones
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn foods(&self) -> AppResult<Vec<FoodItem>> {
        self.get_json(endpoints::NUTRITION_FOODS, &[]).await
    }

    /// Search foods by name, brand, or barcode fragment.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when both the query and the
    /// category filter are empty - the backend would reject the request
    /// with a 400, so it is never sent.
    pub async fn search_foods(
        &self,
        query: &str,
        category: Option<&str>,
        limit: Option<u32>,
    ) -> AppResult<Vec<FoodItem>> {
        if query.trim().is_empty() && category.is_none() {
            return Err(AppError::invalid_input(error_messages::EMPTY_SEARCH));
        }

        let mut params = vec![
            ("q".to_owned(), query.to_owned()),
            (
                "limit".to_owned(),
                limit.unwrap_or(limits::DEFAULT_SEARCH_LIMIT).to_string(),
            ),
        ];
        if let Some(category) = category {
            params.push(("category".to_owned(), category.to_owned()));
        }

        self.get_json(endpoints::NUTRITION_FOOD_SEARCH, &params)
            .await
    }

    /// Exact barcode lookup.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] for an empty code and
    /// [`AppError::NotFound`] when no food matches.
    pub async fn food_by_barcode(&self, code: &str) -> AppResult<FoodItem> {
        if code.trim().is_empty() {
            return Err(AppError::invalid_input(error_messages::EMPTY_BARCODE));
        }
        self.get_json(
            endpoints::NUTRITION_FOOD_BARCODE,
            &[("code".to_owned(), code.to_owned())],
        )
        .await
    }

    /// Favorite foods; empty on deployments without the endpoint
    ///
    /// # Errors
    /// Returns a classified error on request failure other than 403/404.
    pub async fn favorites(&self) -> AppResult<Vec<FoodItem>> {
        self.get_json_optional(endpoints::NUTRITION_FOOD_FAVORITES, &[], "favorites")
            .await
    }

    /// Custom foods created by the user; empty on deployments without the
    /// endpoint
    ///
    /// # Errors
    /// Returns a classified error on request failure other than 403/404.
    pub async fn custom_foods(&self) -> AppResult<Vec<FoodItem>> {
        self.get_json_optional(endpoints::NUTRITION_FOOD_CUSTOM, &[], "custom foods")
            .await
    }

    /// Create a custom food owned by the user
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn create_food(&self, food: &NewFoodItem) -> AppResult<FoodItem> {
        self.send_json(
            self.http
                .post(self.config.endpoint(endpoints::NUTRITION_FOODS))
                .json(food),
        )
        .await
    }

    /// Mark a food as a favorite
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn favorite(&self, food_id: &str) -> AppResult<()> {
        self.post_action(food_id, "favorite").await
    }

    /// Remove a food from favorites
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn unfavorite(&self, food_id: &str) -> AppResult<()> {
        self.post_action(food_id, "unfavorite").await
    }

    /// List meal slots ordered chronologically (Breakfast, Lunch, ...)
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn meal_types(&self) -> AppResult<Vec<MealType>> {
        self.get_json(endpoints::NUTRITION_MEAL_TYPES, &[]).await
    }

    /// Meal entries for one date; today when unset
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn meal_entries(&self, date: Option<NaiveDate>) -> AppResult<Vec<MealEntry>> {
        let params = date_param(date);
        self.get_json(endpoints::NUTRITION_MEALS_DAILY, &params).await
    }

    /// Log a food. Validates locally before any request: servings must be
    /// a positive number; date and time default to today and now.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] for non-positive or non-finite
    /// servings, else a classified error on request failure.
    pub async fn create_meal_entry(&self, draft: &MealEntryDraft) -> AppResult<MealEntry> {
        if !draft.servings.is_finite() || draft.servings <= 0.0 {
            return Err(AppError::invalid_input(error_messages::INVALID_SERVINGS));
        }

        let now = Local::now();
        let date = draft.date.unwrap_or_else(|| now.date_naive());
        let time = draft.time.unwrap_or_else(|| now.time());

        let body = CreateMealEntryBody {
            food_item: &draft.food_item,
            meal_type: &draft.meal_type,
            date: date.format(formats::DATE).to_string(),
            time: time.format(formats::TIME).to_string(),
            servings: draft.servings,
            notes: draft.notes.as_deref(),
        };

        self.send_json(
            self.http
                .post(self.config.endpoint(endpoints::NUTRITION_MEALS))
                .json(&body),
        )
        .await
    }

    /// Remove a logged meal entry
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn delete_meal_entry(&self, entry_id: &str) -> AppResult<()> {
        let url = format!(
            "{}{entry_id}/",
            self.config.endpoint(endpoints::NUTRITION_MEALS)
        );
        let response = self
            .authorize(self.http.delete(url))
            .send()
            .await
            .map_err(|e| AppError::network(self.config.platform, e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(failure_from_response(response).await)
        }
    }

    /// Update fields of a logged meal entry
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn update_meal_entry(
        &self,
        entry_id: &str,
        patch: &MealEntryPatch,
    ) -> AppResult<MealEntry> {
        let url = format!(
            "{}{entry_id}/",
            self.config.endpoint(endpoints::NUTRITION_MEALS)
        );
        self.send_json(self.http.patch(url).json(patch)).await
    }

    /// Server-computed nutrition summary for one date; today when unset.
    ///
    /// Totals and progress figures are returned exactly as the backend
    /// computed them; see [`crate::nutrition::summary`] for display
    /// shaping.
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn daily_summary(
        &self,
        date: Option<NaiveDate>,
    ) -> AppResult<DailyNutritionSummary> {
        let params = date_param(date);
        self.get_json(endpoints::NUTRITION_MEALS_SUMMARY, &params)
            .await
    }

    /// Per-day macro totals for the trailing week
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn weekly_summary(&self) -> AppResult<Vec<DailyMacroTotals>> {
        self.get_json(endpoints::NUTRITION_MEALS_WEEKLY, &[]).await
    }

    /// Most frequently logged foods; empty on deployments without the
    /// endpoint
    ///
    /// # Errors
    /// Returns a classified error on request failure other than 403/404.
    pub async fn frequently_used(&self, limit: Option<u32>) -> AppResult<Vec<FoodItem>> {
        let params = vec![(
            "limit".to_owned(),
            limit.unwrap_or(limits::DEFAULT_FREQUENT_LIMIT).to_string(),
        )];
        self.get_json_optional(endpoints::NUTRITION_MEALS_FREQUENT, &params, "frequent foods")
            .await
    }

    /// Current nutrition goal; the backend creates defaults on first call
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn current_goal(&self) -> AppResult<NutritionGoal> {
        self.get_json(endpoints::NUTRITION_GOALS_CURRENT, &[]).await
    }

    /// Replace fields of the active goal
    ///
    /// # Errors
    /// Returns a classified error on request failure.
    pub async fn update_goal(&self, goal_id: &str, patch: &GoalPatch) -> AppResult<NutritionGoal> {
        let url = format!(
            "{}{goal_id}/",
            self.config.endpoint(endpoints::NUTRITION_GOALS)
        );
        self.send_json(self.http.patch(url).json(patch)).await
    }

    /// Attach the session's authorization header
    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header(header::AUTHORIZATION, self.scheme.header_value(&self.token))
    }

    /// GET a typed JSON response
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> AppResult<T> {
        self.send_json(self.http.get(self.config.endpoint(path)).query(params))
            .await
    }

    /// GET a list from an endpoint that may not exist on this deployment.
    ///
    /// A [`AppError::FeatureUnavailable`] signal yields an empty list:
    /// multi-version backend tolerance, not an error the user can act on.
    async fn get_json_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        feature: &str,
    ) -> AppResult<Vec<T>> {
        match self.fetch_feature_list(path, params, feature).await {
            Err(e) if e.is_feature_unavailable() => {
                debug!(feature, "endpoint unavailable; returning empty list");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// GET a list, mapping 403/404 to the feature-unavailable signal
    async fn fetch_feature_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        feature: &str,
    ) -> AppResult<Vec<T>> {
        let response = self
            .authorize(self.http.get(self.config.endpoint(path)).query(params))
            .send()
            .await
            .map_err(|e| AppError::network(self.config.platform, e))?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::NOT_FOUND {
            return Err(AppError::FeatureUnavailable);
        }
        if !status.is_success() {
            return Err(failure_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("parsing {feature} response: {e}")))
    }

    /// Send an authorized request and decode the JSON response
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> AppResult<T> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| AppError::network(self.config.platform, e))?;

        if !response.status().is_success() {
            return Err(failure_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("parsing response body: {e}")))
    }

    /// POST to a per-food action endpoint, discarding the status body
    async fn post_action(&self, food_id: &str, action: &str) -> AppResult<()> {
        let url = format!(
            "{}{food_id}/{action}/",
            self.config.endpoint(endpoints::NUTRITION_FOODS)
        );
        let response = self
            .authorize(self.http.post(url))
            .send()
            .await
            .map_err(|e| AppError::network(self.config.platform, e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(failure_from_response(response).await)
        }
    }
}

/// Optional `date=` query parameter in the backend's wire format
fn date_param(date: Option<NaiveDate>) -> Vec<(String, String)> {
    date.map(|d| vec![("date".to_owned(), d.format(formats::DATE).to_string())])
        .unwrap_or_default()
}
