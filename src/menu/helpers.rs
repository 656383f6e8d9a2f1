//! Menu Business Logic Helpers
//!
//! This module contains helper functions used by callers of the store:
//! draft validation, id generation and price formatting.

use super::{
    error::MenuError,
    models::{Dish, DishDraft},
};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

/// Largest price a draft may carry. Keeps course totals far from the
/// `Decimal` range and every mean representable with two decimals.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_215_752_191, 23, 0, false, 2);

/// Returns a fresh, globally unique dish identifier.
pub fn new_dish_id() -> String {
    Uuid::new_v4().to_string()
}

/// Formats an amount with exactly two decimals, rounding midpoints away from
/// zero (`10.005` becomes `"10.01"`).
pub fn format_price(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let mut text = rounded.to_string();
    // `rescale` stops short of two places when the integer part is too wide
    match rounded.scale() {
        0 => text.push_str(".00"),
        1 => text.push('0'),
        _ => {}
    }
    text
}

/// Checks a draft the way the manage-menu form does: a name is required and
/// the price must be strictly positive. Prices above [`MAX_PRICE`] are
/// rejected as well.
pub fn validate_draft(draft: &DishDraft) -> Result<(), MenuError> {
    if draft.dish_name.trim().is_empty() {
        return Err(MenuError::InvalidDishName);
    }
    if draft.price <= Decimal::ZERO || draft.price > MAX_PRICE {
        return Err(MenuError::InvalidPrice(draft.price));
    }
    Ok(())
}

/// Validates `draft` and turns it into a storable dish with a new id.
///
/// The store itself trusts whatever it is handed, so every boundary that
/// creates dishes goes through here.
pub fn build_dish(draft: DishDraft) -> Result<Dish, MenuError> {
    validate_draft(&draft)?;

    Ok(Dish {
        id: new_dish_id(),
        dish_name: draft.dish_name.trim().to_string(),
        description: draft.description,
        course: draft.course,
        price: draft.price,
    })
}

/// Produces a human-readable one-line summary for a list of dishes.
///
/// Example output: `"Caprese Salad (Starter) 85.50, Iced Coffee (Beverage) 40.00"`.
pub fn format_menu_summary<'a>(dishes: impl IntoIterator<Item = &'a Dish>) -> String {
    dishes
        .into_iter()
        .map(|d| format!("{} ({}) {}", d.dish_name, d.course, format_price(d.price)))
        .collect::<Vec<_>>()
        .join(", ")
}
