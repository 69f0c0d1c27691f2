//! Field-level validation for entities headed into the stores.
//!
//! The stores trust their inputs: data-shape contracts (lengths, ranges,
//! the color format) are enforced here by the caller before `add`/`update`,
//! not by the stores themselves.

use thiserror::Error;

use crate::domain::{Category, Transaction};

/// Upper bound accepted for a single transaction amount.
pub const MAX_AMOUNT: f64 = 1_000_000.0;

const MAX_NAME_CHARS: usize = 50;
const MAX_DESCRIPTION_CHARS: usize = 200;

/// A data-shape contract violated by an entity field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be between 1 and 50 characters")]
    Name,
    #[error("icon must be between 1 and 50 characters")]
    Icon,
    #[error("color must be `#` followed by six hex digits")]
    Color,
    #[error("amount must be greater than 0 and at most 1,000,000")]
    Amount,
    #[error("category id must be at least 1")]
    CategoryId,
    #[error("description must be between 1 and 200 characters")]
    Description,
}

/// Checks a category's field contracts.
pub fn validate_category(category: &Category) -> Result<(), ValidationError> {
    if !char_len_in(&category.name, 1, MAX_NAME_CHARS) {
        return Err(ValidationError::Name);
    }
    if !char_len_in(&category.icon, 1, MAX_NAME_CHARS) {
        return Err(ValidationError::Icon);
    }
    if !is_hex_color(&category.color) {
        return Err(ValidationError::Color);
    }
    Ok(())
}

/// Checks a transaction's field contracts.
///
/// The display-only `category` snapshot is not inspected.
pub fn validate_transaction(transaction: &Transaction) -> Result<(), ValidationError> {
    if !(transaction.amount > 0.0 && transaction.amount <= MAX_AMOUNT) {
        return Err(ValidationError::Amount);
    }
    if transaction.category_id < 1 {
        return Err(ValidationError::CategoryId);
    }
    if !char_len_in(&transaction.description, 1, MAX_DESCRIPTION_CHARS) {
        return Err(ValidationError::Description);
    }
    Ok(())
}

// Lengths are counted in characters, not bytes.
fn char_len_in(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

fn is_hex_color(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('#') {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    rest.len() == 6 && rest.iter().all(|c| c.is_ascii_hexdigit())
}
