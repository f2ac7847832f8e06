//! Storefront scenarios in Gherkin
//!
//! ```bash
//! cargo test --test storefront
//! ```

use cucumber::gherkin::Step;
use cucumber::{given, then, when, World};
use larek::events::{AppEvent, EventEmitter, FieldId};
use larek::models::{AppState, Product};
use regex::Regex;
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(World)]
#[world(init = Self::new)]
pub struct StorefrontWorld {
    state: AppState,
    emitted: Arc<Mutex<Vec<String>>>,
}

impl StorefrontWorld {
    fn new() -> Self {
        let events = EventEmitter::new();
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&emitted);
        events.on(Regex::new(".*").unwrap(), move |event: &AppEvent| {
            recorder.lock().unwrap().push(event.name().to_string());
        });
        Self {
            state: AppState::new(events),
            emitted,
        }
    }

    fn product(&self, id: &str) -> Product {
        self.state
            .product(id)
            .cloned()
            .unwrap_or_else(|| panic!("No product '{id}' in the catalog"))
    }
}

impl fmt::Debug for StorefrontWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontWorld")
            .field("catalog", &self.state.catalog().len())
            .field("basket", &self.state.basket_count())
            .field("emitted", &self.emitted.lock().unwrap().len())
            .finish()
    }
}

fn field(name: &str) -> FieldId {
    FieldId::ALL
        .into_iter()
        .find(|field| field.as_str() == name)
        .unwrap_or_else(|| panic!("Unknown field '{name}'"))
}

#[given("an empty storefront")]
async fn empty_storefront(world: &mut StorefrontWorld) {
    assert!(world.state.catalog().is_empty());
    assert_eq!(world.state.basket_count(), 0);
}

#[given("the catalog is loaded with:")]
async fn catalog_loaded(world: &mut StorefrontWorld, step: &Step) {
    let table = step.table.as_ref().expect("Catalog table is required");
    let items = table
        .rows
        .iter()
        .skip(1)
        .map(|row| Product {
            id: row[0].clone(),
            title: row[1].clone(),
            category: "другое".to_string(),
            description: String::new(),
            image: format!("/{}.svg", row[0]),
            price: row[2].parse().ok(),
        })
        .collect();
    world.state.set_catalog(items);
    world.emitted.lock().unwrap().clear();
}

#[when(regex = r#"^I add product "([^"]+)" to the basket$"#)]
async fn add_product(world: &mut StorefrontWorld, id: String) {
    let product = world.product(&id);
    world.state.add_to_basket(product);
}

#[when(regex = r#"^I remove product "([^"]+)" from the basket$"#)]
async fn remove_product(world: &mut StorefrontWorld, id: String) {
    world.state.remove_from_basket(&id);
}

#[when(regex = r#"^I set "([^"]+)" to "([^"]*)"$"#)]
async fn set_field(world: &mut StorefrontWorld, name: String, value: String) {
    world.state.set_order_field(field(&name), &value);
}

#[then(regex = r"^the catalog has (\d+) products?$")]
async fn catalog_has(world: &mut StorefrontWorld, count: usize) {
    assert_eq!(world.state.catalog().len(), count);
}

#[then(regex = r"^the basket total is (\d+)$")]
async fn basket_total(world: &mut StorefrontWorld, total: u64) {
    assert_eq!(world.state.total(), total);
}

#[then(regex = r"^the basket holds (\d+) products?$")]
async fn basket_holds(world: &mut StorefrontWorld, count: usize) {
    assert_eq!(world.state.basket_count(), count);
}

#[then("the basket is empty")]
async fn basket_empty(world: &mut StorefrontWorld) {
    assert!(world.state.basket().is_empty());
}

#[then("the order is invalid")]
async fn order_invalid(world: &mut StorefrontWorld) {
    assert!(!world.state.validate_order());
}

#[then("the order is valid")]
async fn order_valid(world: &mut StorefrontWorld) {
    assert!(world.state.validate_order());
}

#[then(regex = r#"^errors are reported for "([^"]+)"$"#)]
async fn errors_reported(world: &mut StorefrontWorld, fields: String) {
    let expected: Vec<FieldId> = fields.split(", ").map(field).collect();
    assert_eq!(world.state.form_errors().fields(), expected);
}

#[then(regex = r#"^no "([^"]+)" event was emitted$"#)]
async fn no_event(world: &mut StorefrontWorld, name: String) {
    assert!(!world.emitted.lock().unwrap().contains(&name));
}

#[then(regex = r#"^the order request totals (\d+) for items "([^"]+)"$"#)]
async fn order_request_totals(world: &mut StorefrontWorld, total: u64, items: String) {
    let request = world.state.order_request().expect("Order should be complete");
    assert_eq!(request.total, total);
    assert_eq!(request.items, items.split(", ").map(str::to_string).collect::<Vec<_>>());
}

#[tokio::main]
async fn main() {
    StorefrontWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("features/storefront.feature")
        .await;
}
