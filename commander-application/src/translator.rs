//! 命令翻译器（CommandTranslator）
//!
//! 按命名约定把命令映射为处理器与校验器的标识：
//! - `Foo\Bar\PlaceOrderCommand` → `Foo\Bar\PlaceOrderCommandHandler`
//! - `Foo\Bar\PlaceOrderCommand` → `Foo\Bar\PlaceOrderValidator`
//!
//! 替换点取名称中**最后一次**出现的 `Command`，其后的内容一并替换，
//! 因而命名空间里碰巧包含 `Command` 的片段不会被破坏。
//!
use crate::{command::AnyCommand, container::Container, error::AppError};
use std::sync::Arc;

const COMMAND: &str = "Command";
const HANDLER_SUFFIX: &str = "CommandHandler";
const VALIDATOR_SUFFIX: &str = "Validator";

/// 命令 → 处理器/校验器 标识的翻译协议
pub trait CommandTranslator: Send + Sync {
    /// 翻译为处理器标识；不存在对应处理器时返回 `HandlerNotRegistered`
    fn to_command_handler(&self, cmd: &dyn AnyCommand) -> Result<String, AppError>;

    /// 翻译为校验器标识；不检查是否存在，由调用方判断
    fn to_validator(&self, cmd: &dyn AnyCommand) -> String;
}

/// 按约定计算处理器标识
pub fn handler_identifier(command_name: &str) -> String {
    substitute_last_command(command_name, HANDLER_SUFFIX, "Handler")
}

/// 按约定计算校验器标识
pub fn validator_identifier(command_name: &str) -> String {
    substitute_last_command(command_name, VALIDATOR_SUFFIX, VALIDATOR_SUFFIX)
}

// 名称中没有 `Command` 时直接追加后缀
fn substitute_last_command(name: &str, replacement: &str, fallback_suffix: &str) -> String {
    match name.rfind(COMMAND) {
        Some(pos) => format!("{}{}", &name[..pos], replacement),
        None => format!("{name}{fallback_suffix}"),
    }
}

/// 基于容器绑定判断存在性的默认翻译器
#[derive(Clone)]
pub struct BasicCommandTranslator {
    container: Arc<Container>,
}

impl BasicCommandTranslator {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}

impl CommandTranslator for BasicCommandTranslator {
    fn to_command_handler(&self, cmd: &dyn AnyCommand) -> Result<String, AppError> {
        let handler = handler_identifier(cmd.command_name());

        if !self.container.has(&handler) {
            return Err(AppError::HandlerNotRegistered(handler));
        }

        Ok(handler)
    }

    fn to_validator(&self, cmd: &dyn AnyCommand) -> String {
        validator_identifier(cmd.command_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_replaces_trailing_command() {
        assert_eq!(
            handler_identifier(r"Foo\Bar\PlaceOrderCommand"),
            r"Foo\Bar\PlaceOrderCommandHandler"
        );
        assert_eq!(
            handler_identifier("shop::orders::PlaceOrderCommand"),
            "shop::orders::PlaceOrderCommandHandler"
        );
    }

    #[test]
    fn validator_replaces_trailing_command() {
        assert_eq!(
            validator_identifier(r"Foo\Bar\PlaceOrderCommand"),
            r"Foo\Bar\PlaceOrderValidator"
        );
    }

    #[test]
    fn rightmost_command_wins_over_namespace_segment() {
        assert_eq!(
            handler_identifier(r"App\CommandCenter\PingCommand"),
            r"App\CommandCenter\PingCommandHandler"
        );
        assert_eq!(
            validator_identifier("app::command_center::CommandCenterPingCommand"),
            "app::command_center::CommandCenterPingValidator"
        );
    }

    #[test]
    fn text_after_last_command_is_replaced() {
        assert_eq!(handler_identifier("CommandFoo"), "CommandHandler");
        assert_eq!(validator_identifier("RegisterCommandV2"), "RegisterValidator");
    }

    #[test]
    fn names_without_command_get_suffix() {
        assert_eq!(handler_identifier("Ping"), "PingHandler");
        assert_eq!(validator_identifier("Ping"), "PingValidator");
    }

    #[derive(crate::Command)]
    #[command(name = r"Foo\Bar\PlaceOrderCommand")]
    struct PlaceOrderCommand;

    #[test]
    fn basic_translator_checks_handler_binding() {
        let container = Arc::new(Container::new());
        let translator = BasicCommandTranslator::new(container.clone());

        match translator.to_command_handler(&PlaceOrderCommand).unwrap_err() {
            AppError::HandlerNotRegistered(id) => {
                assert_eq!(id, r"Foo\Bar\PlaceOrderCommandHandler")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        container.bind(r"Foo\Bar\PlaceOrderCommandHandler", |_| Ok(()));
        assert_eq!(
            translator.to_command_handler(&PlaceOrderCommand).unwrap(),
            r"Foo\Bar\PlaceOrderCommandHandler"
        );
    }

    #[test]
    fn basic_translator_never_fails_for_validator() {
        let translator = BasicCommandTranslator::new(Arc::new(Container::new()));
        assert_eq!(
            translator.to_validator(&PlaceOrderCommand),
            r"Foo\Bar\PlaceOrderValidator"
        );
    }
}
