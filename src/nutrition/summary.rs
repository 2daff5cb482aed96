// ABOUTME: Display view models for the daily nutrition summary
// ABOUTME: Clamped goal progress for rings/bars and meal sections ordered for tabs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack

//! Daily summary view models.
//!
//! The backend computes totals and progress; this module only shapes them
//! for display. Progress rendered into a ring or bar is clamped to
//! [0, 100] while the raw figure stays available for "X over goal" text -
//! the clamp is display-only and never alters the underlying data.

use crate::models::{DailyNutritionSummary, MealEntry, MealType};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Progress against one macro target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroProgress {
    /// Amount consumed
    pub consumed: f64,
    /// Daily target
    pub goal: f64,
    /// Server-computed percentage of the target; unclamped
    pub percent: i32,
}

impl MacroProgress {
    /// Percentage for ring/bar rendering, clamped to [0, 100]
    #[must_use]
    pub fn display_percent(&self) -> u8 {
        self.percent.clamp(0, 100) as u8
    }

    /// Amount consumed beyond the target, for "X over goal" text.
    ///
    /// `None` while at or under the target.
    #[must_use]
    pub fn amount_over_goal(&self) -> Option<f64> {
        (self.consumed > self.goal).then(|| self.consumed - self.goal)
    }
}

/// One meal tab: a named group of entries in chronological order
#[derive(Debug, Clone)]
pub struct MealSection {
    /// Meal type name (Breakfast, Lunch, ...)
    pub name: String,
    /// Chronological position from the meal type, when known
    pub order: Option<i32>,
    /// Entries logged under this meal, ordered by time
    pub entries: Vec<MealEntry>,
    /// Calorie subtotal for the section
    pub total_calories: i32,
}

/// Display-ready daily summary
#[derive(Debug, Clone)]
pub struct DailySummaryView {
    /// Date the summary covers
    pub date: NaiveDate,
    /// Calorie progress
    pub calories: MacroProgress,
    /// Protein progress
    pub protein: MacroProgress,
    /// Carbohydrate progress
    pub carbs: MacroProgress,
    /// Fat progress
    pub fat: MacroProgress,
    /// Meal tabs in display order
    pub sections: Vec<MealSection>,
}

impl DailySummaryView {
    /// Shape a server summary for display.
    ///
    /// Meal sections follow the chronological `order` of the passed meal
    /// types; names the backend returned that match no known meal type are
    /// appended alphabetically after the known ones.
    #[must_use]
    pub fn build(summary: DailyNutritionSummary, meal_types: &[MealType]) -> Self {
        let order_by_name: HashMap<&str, i32> = meal_types
            .iter()
            .map(|meal_type| (meal_type.name.as_str(), meal_type.order))
            .collect();

        let mut sections: Vec<MealSection> = summary
            .meals
            .into_iter()
            .map(|(name, mut entries)| {
                entries.sort_by_key(|entry| entry.time);
                let total_calories = entries.iter().map(|entry| entry.calories).sum();
                MealSection {
                    order: order_by_name.get(name.as_str()).copied(),
                    name,
                    entries,
                    total_calories,
                }
            })
            .collect();

        // Known meal types first in chronological order, unknowns after.
        sections.sort_by(|a, b| match (a.order, b.order) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.name.cmp(&b.name)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.name.cmp(&b.name),
        });

        Self {
            date: summary.date,
            calories: MacroProgress {
                consumed: f64::from(summary.total_calories),
                goal: f64::from(summary.calorie_goal),
                percent: summary.calorie_progress,
            },
            protein: MacroProgress {
                consumed: summary.total_protein,
                goal: summary.protein_goal,
                percent: summary.protein_progress,
            },
            carbs: MacroProgress {
                consumed: summary.total_carbs,
                goal: summary.carbs_goal,
                percent: summary.carbs_progress,
            },
            fat: MacroProgress {
                consumed: summary.total_fat,
                goal: summary.fat_goal,
                percent: summary.fat_progress,
            },
            sections,
        }
    }
}
