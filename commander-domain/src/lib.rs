//! 领域层事件基础库（commander-domain）
//!
//! 为命令总线所驱动的领域模型提供“实体侧”的事件能力：
//! - 领域事件（`domain_event`）：事件载荷的最小接口与事件名约定
//! - 事件生成（`event_generator`）：实体内部的待发布事件缓冲，`raise` 追加、`release` 取空
//! - 事件分发（`eventing`）：分发器协议、进程内分发器、监听器与处理器侧的分发能力
//! - 业务上下文（`domain_event::BusinessContext`）：链路追踪与审计主体信息
//!
//! 本 crate 不关心事件如何传输或持久化，分发的具体机制由 `EventDispatcher`
//! 的实现决定，内置的 `InMemoryEventDispatcher` 仅用于进程内同步投递。
//!
//! 典型用法：
//! 1. 用 `#[domain_event]` 定义事件，用 `#[event_generator(event = ...)]` 标注实体；
//! 2. 实体方法内调用 `raise` 记录事件；
//! 3. 命令处理器实现 `Dispatchable`，在持久化后调用 `dispatch_events_for(&mut entity)`。
//!
pub mod domain_event;
pub mod error;
pub mod event_generator;
pub mod eventing;

// 允许在本 crate 内部通过 ::commander_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::commander_domain 路径。
extern crate self as commander_domain;
