//! In-memory store for transaction categories.

use tracing::debug;

use crate::core::signal::{ChangeSignal, Subscription};
use crate::domain::{Category, RecordId};

/// Owns the category collection; seeded with six defaults on construction.
///
/// Ids are assigned on [`add`](Self::add), increase monotonically, and are
/// never reused, including after [`remove`](Self::remove). Field-level
/// contracts are the caller's concern (see [`crate::validation`]); the
/// registry trusts its inputs.
#[derive(Debug)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    next_id: RecordId,
    changed: ChangeSignal,
}

impl CategoryRegistry {
    /// Creates a registry holding the six default categories under ids 1-6.
    pub fn new() -> Self {
        let mut registry = Self {
            categories: Vec::new(),
            next_id: 1,
            changed: ChangeSignal::new(),
        };
        registry.seed_defaults();
        registry
    }

    // Seeding happens before any subscriber can exist, so no signal fires.
    fn seed_defaults(&mut self) {
        let defaults = [
            ("Food", "restaurant", "#ff9800"),
            ("Transport", "directions_car", "#2196f3"),
            ("Entertainment", "movie", "#e91e63"),
            ("Shopping", "shopping_cart", "#9c27b0"),
            ("Bills", "receipt", "#f44336"),
            ("Other", "category", "#607d8b"),
        ];
        for (name, icon, color) in defaults {
            let mut category = Category::new(name).with_icon(icon).with_color(color);
            category.id = self.next_id;
            self.next_id += 1;
            self.categories.push(category);
        }
    }

    /// Read-only view of the live collection, insertion-ordered.
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Finds a category by id.
    pub fn get(&self, id: RecordId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Assigns the next id, appends, and notifies subscribers.
    ///
    /// Any caller-supplied id is overwritten and ignored. Returns the
    /// assigned id.
    pub fn add(&mut self, mut category: Category) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        category.id = id;
        self.categories.push(category);
        debug!(id, "category added");
        self.changed.emit();
        id
    }

    /// Replaces the category whose id matches `category.id` wholesale.
    ///
    /// Keeps the entry's position. Returns `false` (and stays silent) when
    /// no entry holds that id.
    pub fn update(&mut self, category: Category) -> bool {
        match self
            .categories
            .iter()
            .position(|existing| existing.id == category.id)
        {
            Some(index) => {
                debug!(id = category.id, "category updated");
                self.categories[index] = category;
                self.changed.emit();
                true
            }
            None => false,
        }
    }

    /// Removes the category under `id`, notifying only if one was present.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        if self.categories.len() == before {
            return false;
        }
        debug!(id, "category removed");
        self.changed.emit();
        true
    }

    /// Registers a handler fired after every applied mutation.
    pub fn subscribe(&mut self, handler: impl Fn() + 'static) -> Subscription {
        self.changed.subscribe(handler)
    }

    /// Removes a previously registered handler.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.changed.unsubscribe(subscription)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
