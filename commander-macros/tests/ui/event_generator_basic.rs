use commander_domain::event_generator::EventGenerator;
use commander_macros::{domain_event, event_generator};

#[domain_event]
enum CartEvent {
    ItemAdded { sku: String },
}

#[event_generator(event = CartEvent)]
#[derive(Debug, Default)]
struct Cart {
    items: Vec<String>,
}

impl Cart {
    fn add(&mut self, sku: &str) {
        self.items.push(sku.to_string());
        self.raise(CartEvent::ItemAdded {
            sku: sku.to_string(),
        });
    }
}

fn main() {
    let mut cart = Cart::default();
    cart.add("pen");
    assert_eq!(cart.release_events().len(), 1);
    assert!(cart.release_events().is_empty());
}
