//! Menu Domain Models
//!
//! This module contains all data structures related to the restaurant menu
//! domain: dishes, courses, course selectors and the per-course averages.

use super::error::MenuError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// =============================================================================
// Menu Domain Models
// =============================================================================

/// Label the guest view uses for "no course selected".
pub const ALL_COURSES_LABEL: &str = "All Courses";

/// Menu category a dish belongs to. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Course {
    Starter,
    Main,
    Dessert,
    Beverage,
}

impl Course {
    pub const COUNT: usize = 4;

    /// Every course, in menu order.
    pub const ALL: [Course; Course::COUNT] = [
        Course::Starter,
        Course::Main,
        Course::Dessert,
        Course::Beverage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
            Course::Beverage => "Beverage",
        }
    }

    /// Dense slot index, used by the aggregation to avoid hashing.
    pub(crate) fn index(self) -> usize {
        match self {
            Course::Starter => 0,
            Course::Main => 1,
            Course::Dessert => 2,
            Course::Beverage => 3,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MenuError::UnknownCourse(s.to_string()))
    }
}

impl TryFrom<String> for Course {
    type Error = MenuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single menu entry. Never mutated once it is in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Opaque unique identifier
    pub id: String,

    /// Display name
    pub dish_name: String,

    /// Free-form text, may be empty
    #[serde(default)]
    pub description: String,

    pub course: Course,

    pub price: Decimal,
}

/// Caller input for a new dish, before it has been validated and given an id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishDraft {
    pub dish_name: String,

    #[serde(default)]
    pub description: String,

    pub course: Course,

    pub price: Decimal,
}

/// Average price of one course, formatted with exactly two decimals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseAverage {
    pub course: Course,
    pub average_price: String,
}

/// Menu-wide figures: how many dishes there are and what each course costs
/// on average.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuStatistics {
    pub total_items: usize,
    pub averages: Vec<CourseAverage>,
}

/// Which part of the menu a guest wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseSelector {
    #[default]
    All,
    Course(Course),
}

impl CourseSelector {
    /// Parses an optional selector; `None` selects the whole menu.
    pub fn parse(raw: Option<&str>) -> Result<Self, MenuError> {
        match raw {
            None => Ok(CourseSelector::All),
            Some(raw) => raw.parse(),
        }
    }

    pub fn matches(self, dish: &Dish) -> bool {
        match self {
            CourseSelector::All => true,
            CourseSelector::Course(course) => dish.course == course,
        }
    }
}

impl FromStr for CourseSelector {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case(ALL_COURSES_LABEL)
        {
            return Ok(CourseSelector::All);
        }
        trimmed.parse::<Course>().map(CourseSelector::Course)
    }
}

impl fmt::Display for CourseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseSelector::All => f.write_str(ALL_COURSES_LABEL),
            CourseSelector::Course(course) => course.fmt(f),
        }
    }
}

// =============================================================================
// Boundary Inputs
// =============================================================================

/// Query string / tool arguments for filtering the menu
#[derive(Debug, Default, Deserialize)]
pub struct FilterInput {
    /// Course name, `all`, or absent for the whole menu
    pub course: Option<String>,
}

/// Tool arguments naming a single dish
#[derive(Debug, Deserialize)]
pub struct DishIdInput {
    pub id: String,
}
