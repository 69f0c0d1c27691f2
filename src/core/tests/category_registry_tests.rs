use std::cell::Cell;
use std::rc::Rc;

use crate::core::CategoryRegistry;
use crate::domain::Category;

fn notification_counter(registry: &mut CategoryRegistry) -> Rc<Cell<usize>> {
    let counter = Rc::new(Cell::new(0));
    let handle = Rc::clone(&counter);
    registry.subscribe(move || handle.set(handle.get() + 1));
    counter
}

#[test]
fn fresh_registry_holds_the_six_defaults() {
    let registry = CategoryRegistry::new();

    let ids: Vec<_> = registry.all().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let food = registry.get(1).unwrap();
    assert_eq!(food.name, "Food");
    assert_eq!(food.icon, "restaurant");
    assert_eq!(food.color, "#ff9800");

    let other = registry.get(6).unwrap();
    assert_eq!(other.name, "Other");
    assert_eq!(other.icon, "category");
    assert_eq!(other.color, "#607d8b");
}

#[test]
fn add_continues_ids_from_seven() {
    let mut registry = CategoryRegistry::new();

    let first = registry.add(Category::new("Savings"));
    let second = registry.add(Category::new("Health"));

    assert_eq!(first, 7);
    assert_eq!(second, 8);
    assert_eq!(registry.len(), 8);
}

#[test]
fn add_overwrites_a_caller_supplied_id() {
    let mut registry = CategoryRegistry::new();
    let mut category = Category::new("Travel");
    category.id = 42;

    let id = registry.add(category);

    assert_eq!(id, 7);
    assert!(registry.get(42).is_none());
    assert_eq!(registry.get(7).unwrap().name, "Travel");
}

#[test]
fn get_returns_none_for_unknown_id() {
    let registry = CategoryRegistry::new();

    assert!(registry.get(999).is_none());
}

#[test]
fn update_replaces_in_place() {
    let mut registry = CategoryRegistry::new();
    let mut replacement = Category::new("Dining out").with_icon("restaurant").with_color("#ffa000");
    replacement.id = 1;

    assert!(registry.update(replacement));

    assert_eq!(registry.len(), 6);
    assert_eq!(registry.all()[0].name, "Dining out");
    assert_eq!(registry.get(1).unwrap().color, "#ffa000");
}

#[test]
fn update_with_unknown_id_is_a_silent_noop() {
    let mut registry = CategoryRegistry::new();
    let notifications = notification_counter(&mut registry);
    let mut stranger = Category::new("Nowhere");
    stranger.id = 99;

    assert!(!registry.update(stranger));

    assert_eq!(registry.len(), 6);
    assert_eq!(notifications.get(), 0);
}

#[test]
fn remove_deletes_the_entry_and_never_reuses_its_id() {
    let mut registry = CategoryRegistry::new();

    assert!(registry.remove(6));
    assert_eq!(registry.len(), 5);
    assert!(registry.get(6).is_none());

    let next = registry.add(Category::new("Gifts"));
    assert_eq!(next, 7);
}

#[test]
fn remove_with_unknown_id_is_a_silent_noop() {
    let mut registry = CategoryRegistry::new();
    let notifications = notification_counter(&mut registry);

    assert!(!registry.remove(999));

    assert_eq!(registry.len(), 6);
    assert_eq!(notifications.get(), 0);
}

#[test]
fn every_applied_mutation_notifies_once() {
    let mut registry = CategoryRegistry::new();
    let notifications = notification_counter(&mut registry);

    let id = registry.add(Category::new("Pets"));
    assert_eq!(notifications.get(), 1);

    let mut renamed = Category::new("Pet care");
    renamed.id = id;
    registry.update(renamed);
    assert_eq!(notifications.get(), 2);

    registry.remove(id);
    assert_eq!(notifications.get(), 3);
}

#[test]
fn all_subscribers_hear_the_same_mutation() {
    let mut registry = CategoryRegistry::new();
    let first = notification_counter(&mut registry);
    let second = notification_counter(&mut registry);

    registry.add(Category::new("Insurance"));

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn unsubscribed_handler_stays_silent() {
    let mut registry = CategoryRegistry::new();
    let notifications = Rc::new(Cell::new(0));
    let handle = Rc::clone(&notifications);
    let subscription = registry.subscribe(move || handle.set(handle.get() + 1));

    registry.add(Category::new("One"));
    assert!(registry.unsubscribe(subscription));
    registry.add(Category::new("Two"));

    assert_eq!(notifications.get(), 1);
}
