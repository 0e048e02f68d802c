use crate::{
    command::Command, command_bus::CommandBus, container::Container, context::AppContext,
    error::AppError, translator::CommandTranslator,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;

/// 默认命令总线
/// - 通过翻译器得到处理器标识，再从容器解析出处理器实例
/// - 处理器的返回值与错误均原样返回
#[derive(Clone)]
pub struct DefaultCommandBus {
    container: Arc<Container>,
    translator: Arc<dyn CommandTranslator>,
}

impl DefaultCommandBus {
    pub fn new(container: Arc<Container>, translator: Arc<dyn CommandTranslator>) -> Self {
        Self {
            container,
            translator,
        }
    }
}

#[async_trait]
impl CommandBus for DefaultCommandBus {
    async fn execute<C: Command>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError> {
        let handler_id = self.translator.to_command_handler(&cmd)?;
        let handler = self.container.make_handler::<C>(&handler_id)?;

        let span = tracing::debug_span!("handle", command = C::NAME, handler = %handler_id);
        handler.handle(ctx, cmd).instrument(span).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_handler::CommandHandler;
    use crate::translator::BasicCommandTranslator;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(crate::Command)]
    #[command(name = r"Foo\Bar\PlaceOrderCommand", output = String)]
    struct PlaceOrderCommand {
        sku: String,
    }

    struct PlaceOrderCommandHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CommandHandler<PlaceOrderCommand> for PlaceOrderCommandHandler {
        async fn handle(
            &self,
            _ctx: &AppContext,
            cmd: PlaceOrderCommand,
        ) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if cmd.sku.is_empty() {
                return Err(AppError::Infra("warehouse offline".into()));
            }
            Ok(format!("order:{}", cmd.sku))
        }
    }

    fn bus_with_handler(calls: &Arc<AtomicUsize>) -> DefaultCommandBus {
        let container = Arc::new(Container::new());
        let calls = calls.clone();
        container.bind_handler::<PlaceOrderCommand, _, _>(
            r"Foo\Bar\PlaceOrderCommandHandler",
            move |_| {
                Ok(PlaceOrderCommandHandler {
                    calls: calls.clone(),
                })
            },
        );
        let translator = Arc::new(BasicCommandTranslator::new(container.clone()));
        DefaultCommandBus::new(container, translator)
    }

    #[tokio::test]
    async fn returns_handler_result_unchanged() {
        let calls = Arc::new(AtomicUsize::new(0));
        let bus = bus_with_handler(&calls);

        let out = bus
            .execute(&AppContext::default(), PlaceOrderCommand { sku: "A1".into() })
            .await
            .unwrap();

        assert_eq!(out, "order:A1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn handler_errors_pass_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let bus = bus_with_handler(&calls);

        let err = bus
            .execute(&AppContext::default(), PlaceOrderCommand { sku: String::new() })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Infra(reason) if reason == "warehouse offline"));
    }

    #[tokio::test]
    async fn missing_handler_is_not_registered() {
        let container = Arc::new(Container::new());
        let translator = Arc::new(BasicCommandTranslator::new(container.clone()));
        let bus = DefaultCommandBus::new(container, translator);

        let err = bus
            .execute(&AppContext::default(), PlaceOrderCommand { sku: "A1".into() })
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::HandlerNotRegistered(id) if id == r"Foo\Bar\PlaceOrderCommandHandler")
        );
    }
}
