use commander_domain::domain_event::DomainEvent;
use commander_macros::domain_event;

// 单元、元组与具名变体
#[domain_event]
#[derive(Debug)]
enum OrderEvent {
    Placed { sku: String, quantity: u32 },
    Paid(u64),
    #[event(name = "orders.Cancelled")]
    Cancelled,
}

fn main() {
    let placed = OrderEvent::Placed {
        sku: "book".into(),
        quantity: 1,
    };
    assert!(placed.event_name().ends_with("OrderEvent.Placed"));
    assert!(OrderEvent::Paid(10).event_name().ends_with("OrderEvent.Paid"));
    assert_eq!(OrderEvent::Cancelled.event_name(), "orders.Cancelled");
    let _ = placed.clone();
}
