use std::any::Any;

/// 应用层命令（Command）
///
/// 表达“意图”的纯数据对象，本身不含行为。
/// - 处理器由翻译器按 `NAME` 的命名约定定位：`...PlaceOrderCommand` → `...PlaceOrderCommandHandler`；
/// - 建议保持语义化的“动宾结构”命名，并以 `Command` 结尾，如 `PlaceOrderCommand`。
///
/// 关联项：
/// - `NAME`：命令的完全限定名称，用于路由、日志与追踪。可由 `#[derive(Command)]` 生成。
/// - `Output`：处理器的返回类型，总线原样返回给调用方。
pub trait Command: Send + Sync + 'static {
    /// 命令的完全限定名称（如 `shop::orders::PlaceOrderCommand`）
    const NAME: &'static str;

    /// 处理结果类型
    type Output: Send + 'static;
}

/// 类型擦除后的命令视图
///
/// 供翻译器与装饰器在不知道具体类型时读取命令名称，必要时再向下转型。
pub trait AnyCommand: Any + Send + Sync {
    fn command_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl<C> AnyCommand for C
where
    C: Command,
{
    fn command_name(&self) -> &'static str {
        C::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<'a> dyn AnyCommand + 'a {
    /// 尝试还原为具体命令类型
    pub fn downcast_ref<C: Command>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }

    pub fn is<C: Command>(&self) -> bool {
        self.as_any().is::<C>()
    }
}
