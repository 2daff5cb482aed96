// ABOUTME: Nutrition tracking module for the FitTrack client
// ABOUTME: API client for foods, meals, and goals plus display view models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! # Nutrition tracking
//!
//! [`client`] wraps the `/api/nutrition/` REST surface; [`summary`] turns
//! the server-computed daily summary into display-ready progress figures
//! and ordered meal sections. Aggregation itself always happens on the
//! backend - the client renders what it is given.

/// Nutrition endpoints client
pub mod client;
/// Daily summary view models
pub mod summary;

pub use client::{MealEntryDraft, MealEntryPatch, NutritionClient};
pub use summary::{DailySummaryView, MacroProgress, MealSection};
