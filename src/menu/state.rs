//! Menu State Management
//!
//! This module owns the in-memory menu and the application state that shares
//! it with the HTTP and MCP handlers.

use super::{
    helpers::format_price,
    models::{Course, CourseAverage, CourseSelector, Dish, MenuStatistics},
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

// =============================================================================
// Menu Store
// =============================================================================

/// Ordered collection of dishes, most recently added first.
///
/// The store performs no validation and no duplicate-id checks; callers hand
/// it finished dishes (see [`super::helpers::build_dish`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuStore {
    dishes: Vec<Dish>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `dishes` in the given order.
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    /// The menu a fresh install starts with.
    pub fn sample() -> Self {
        let dish = |id: &str, name: &str, description: &str, course, price| Dish {
            id: id.to_string(),
            dish_name: name.to_string(),
            description: description.to_string(),
            course,
            price,
        };

        Self::with_dishes(vec![
            dish(
                "1",
                "Caprese Salad",
                "Fresh tomatoes, mozzarella, and basil.",
                Course::Starter,
                Decimal::new(8550, 2),
            ),
            dish(
                "2",
                "Beef Wellington",
                "Tender beef fillet baked in puff pastry.",
                Course::Main,
                Decimal::new(25000, 2),
            ),
            dish(
                "3",
                "Chocolate Lava Cake",
                "Warm cake with a molten chocolate center.",
                Course::Dessert,
                Decimal::new(9500, 2),
            ),
            dish(
                "4",
                "Iced Coffee",
                "Cold brewed coffee served over ice.",
                Course::Beverage,
                Decimal::new(4000, 2),
            ),
            dish(
                "5",
                "Spicy Prawns",
                "Prawns cooked in a peri-peri sauce.",
                Course::Starter,
                Decimal::new(12000, 2),
            ),
        ])
    }

    /// Current snapshot in store order.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Prepends `dish` so it is the first one subsequent reads observe.
    pub fn add(&mut self, dish: Dish) {
        self.dishes.insert(0, dish);
    }

    /// Removes the dish with `id`, keeping the order of the others.
    ///
    /// A missing id leaves the store untouched. Returns the removed dish.
    pub fn remove(&mut self, id: &str) -> Option<Dish> {
        let index = self.dishes.iter().position(|d| d.id == id)?;
        Some(self.dishes.remove(index))
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// Mean price of every course that currently has dishes, rounded to two
    /// decimals, in the order each course is first encountered.
    ///
    /// One pass accumulates `(total, count)` per course, a second pass over
    /// the (at most four) accumulated courses divides. A course whose total
    /// leaves the `Decimal` range is averaged as a saturating sum of
    /// `price / count` instead, so the call never fails.
    pub fn average_price_by_course(&self) -> Vec<CourseAverage> {
        let mut slots: [Option<usize>; Course::COUNT] = [None; Course::COUNT];
        let mut totals: Vec<(Course, Option<Decimal>, u32)> = Vec::with_capacity(Course::COUNT);

        for dish in &self.dishes {
            let i = *slots[dish.course.index()].get_or_insert_with(|| {
                totals.push((dish.course, Some(Decimal::ZERO), 0));
                totals.len() - 1
            });
            let (_, total, count) = &mut totals[i];
            *total = total.and_then(|t| t.checked_add(dish.price));
            *count += 1;
        }

        totals
            .into_iter()
            .map(|(course, total, count)| {
                let divisor = Decimal::from(count);
                let mean = match total {
                    Some(total) => total / divisor,
                    None => {
                        warn!(%course, count, "course total overflowed, averaging per dish");
                        self.dishes
                            .iter()
                            .filter(|d| d.course == course)
                            .fold(Decimal::ZERO, |acc, d| acc.saturating_add(d.price / divisor))
                    }
                };
                CourseAverage {
                    course,
                    average_price: format_price(mean),
                }
            })
            .collect()
    }

    /// Dish count alongside the per-course averages, as the home screen
    /// shows them.
    pub fn statistics(&self) -> MenuStatistics {
        MenuStatistics {
            total_items: self.dishes.len(),
            averages: self.average_price_by_course(),
        }
    }

    /// Dishes matching `selector`, in store order.
    pub fn filter(&self, selector: CourseSelector) -> Vec<&Dish> {
        self.dishes.iter().filter(|d| selector.matches(d)).collect()
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: the single owner of the menu.
///
/// Every handler takes the lock exactly once per operation, so store
/// operations never interleave.
#[derive(Debug, Default)]
pub struct AppState {
    pub menu: RwLock<MenuStore>,
}

impl AppState {
    /// Creates state with an empty menu
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MenuStore) -> Self {
        Self {
            menu: RwLock::new(store),
        }
    }

    /// Creates state holding [`MenuStore::sample`]
    pub fn seeded() -> Self {
        Self::with_store(MenuStore::sample())
    }
}
