use async_trait::async_trait;
use commander_application::command::AnyCommand;
use commander_application::command_bus::CommandDecorator;
use commander_application::command_handler::CommandHandler;
use commander_application::command_validator::CommandValidator;
use commander_application::context::AppContext;
use commander_application::error::AppError;
use commander_application::{Command, Commander, Container};
use commander_domain::domain_event::BusinessContext;
use commander_domain::error::DomainError;
use commander_domain::event_generator::EventGenerator;
use commander_domain::eventing::{
    Dispatchable, EventDispatcher, EventListener, HandledEventType, InMemoryEventDispatcher,
};
use commander_macros::{domain_event, event_generator};
use std::sync::Arc;

#[domain_event]
enum OrderEvent {
    Placed { sku: String, quantity: u32 },
}

#[event_generator(event = OrderEvent)]
#[derive(Debug, Default)]
struct Order {
    sku: String,
    quantity: u32,
}

impl Order {
    fn place(sku: String, quantity: u32) -> Self {
        let mut order = Order {
            sku: sku.clone(),
            quantity,
            ..Default::default()
        };
        order.raise(OrderEvent::Placed { sku, quantity });
        order
    }
}

#[derive(Debug, Command)]
#[command(output = String)]
struct PlaceOrderCommand {
    sku: String,
    quantity: u32,
}

struct PlaceOrderValidator;

#[async_trait]
impl CommandValidator<PlaceOrderCommand> for PlaceOrderValidator {
    async fn validate(&self, _ctx: &AppContext, cmd: &PlaceOrderCommand) -> Result<(), AppError> {
        if cmd.quantity == 0 {
            return Err(DomainError::invalid_value("quantity must be positive").into());
        }
        Ok(())
    }
}

struct PlaceOrderCommandHandler {
    dispatcher: Arc<InMemoryEventDispatcher<OrderEvent>>,
}

impl Dispatchable<OrderEvent> for PlaceOrderCommandHandler {
    fn dispatcher(&self) -> &dyn EventDispatcher<OrderEvent> {
        self.dispatcher.as_ref()
    }
}

#[async_trait]
impl CommandHandler<PlaceOrderCommand> for PlaceOrderCommandHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: PlaceOrderCommand) -> Result<String, AppError> {
        let mut order = Order::place(cmd.sku, cmd.quantity);
        self.dispatch_events_for(&mut order).await?;
        Ok(format!("{} x {}", order.quantity, order.sku))
    }
}

struct AuditDecorator;

#[async_trait]
impl CommandDecorator for AuditDecorator {
    async fn execute(&self, ctx: &AppContext, cmd: &dyn AnyCommand) -> Result<(), AppError> {
        println!(
            "audit: {} (correlation={:?})",
            cmd.command_name(),
            ctx.correlation_id()
        );
        Ok(())
    }
}

struct ShippingListener;

#[async_trait]
impl EventListener<OrderEvent> for ShippingListener {
    fn listener_name(&self) -> &str {
        "shipping"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::One("Placed".into())
    }

    async fn handle(&self, event: &OrderEvent) -> anyhow::Result<()> {
        println!("shipping notified: {event:?}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let container = Arc::new(Container::new());
    container.singleton(
        InMemoryEventDispatcher::<OrderEvent>::new().with_listener(Arc::new(ShippingListener)),
    );

    let name = <PlaceOrderCommand as commander_application::command::Command>::NAME;
    let handler_id = commander_application::translator::handler_identifier(name);
    let validator_id = commander_application::translator::validator_identifier(name);

    container.bind_handler::<PlaceOrderCommand, _, _>(handler_id, |c| {
        Ok(PlaceOrderCommandHandler {
            dispatcher: c.service::<InMemoryEventDispatcher<OrderEvent>>()?,
        })
    });
    container.bind_validator::<PlaceOrderCommand, _, _>(validator_id, |_| Ok(PlaceOrderValidator));
    container.bind_decorator("audit", |_| Ok(AuditDecorator));

    let commander = Commander::new(container).decorate("audit");
    let ctx = AppContext::new(
        BusinessContext::builder()
            .correlation_id("cor-1".into())
            .build(),
    );

    let out = commander
        .execute(
            &ctx,
            PlaceOrderCommand {
                sku: "book".into(),
                quantity: 2,
            },
        )
        .await?;
    println!("placed: {out}");

    let rejected = commander
        .execute(
            &ctx,
            PlaceOrderCommand {
                sku: "book".into(),
                quantity: 0,
            },
        )
        .await;
    println!("rejected: {rejected:?}");

    Ok(())
}
