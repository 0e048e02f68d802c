//! 事件分发子系统（eventing）
//!
//! 提供实体事件被取出之后的分发协议与进程内实现：
//! - `EventDispatcher`：统一分发接口，接收一批已发生的事件；
//! - `EventListener`：按事件名订阅并处理事件；
//! - `InMemoryEventDispatcher`：按注册顺序同步调用监听器，并记录“已触发”日志；
//! - `Dispatchable`：命令处理器侧能力，从实体取出事件并交给分发器。
//!
//! 该模块仅定义协议与进程内实现，不绑定具体传输，可对接任意消息系统。
//!
pub mod dispatchable;
pub mod dispatcher;
pub mod dispatcher_inmemory;
pub mod listener;

pub use dispatchable::Dispatchable;
pub use dispatcher::EventDispatcher;
pub use dispatcher_inmemory::InMemoryEventDispatcher;
pub use listener::{EventListener, HandledEventType};
