//! 进程内事件分发器（InMemoryEventDispatcher）
//!
//! 按监听器注册顺序同步调用，满足 `EventDispatcher` 协议：
//! - 每个事件依次投递给所有订阅了该事件名的监听器；
//! - 每个事件投递完成后记录一条 `"<事件名> was fired."` 日志；
//! - 任一监听器失败即中止剩余投递并返回错误，不做重试。
//!
//! 典型用途：单体应用、测试环境与示例。

use crate::domain_event::DomainEvent;
use crate::error::{DomainError, DomainResult as Result};
use crate::eventing::{EventDispatcher, EventListener};
use async_trait::async_trait;
use std::sync::Arc;

/// 进程内事件分发器
pub struct InMemoryEventDispatcher<E>
where
    E: DomainEvent,
{
    listeners: Vec<Arc<dyn EventListener<E>>>,
}

impl<E> Default for InMemoryEventDispatcher<E>
where
    E: DomainEvent,
{
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<E> InMemoryEventDispatcher<E>
where
    E: DomainEvent,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册监听器（链式）
    pub fn with_listener(mut self, listener: Arc<dyn EventListener<E>>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// 已注册监听器名称（按注册顺序）
    pub fn listener_names(&self) -> Vec<&str> {
        self.listeners.iter().map(|l| l.listener_name()).collect()
    }
}

#[async_trait]
impl<E> EventDispatcher<E> for InMemoryEventDispatcher<E>
where
    E: DomainEvent,
{
    async fn dispatch(&self, events: Vec<E>) -> Result<()> {
        for event in &events {
            let event_name = event.event_name();

            for listener in &self.listeners {
                if !listener.handled_event_type().matches(&event_name) {
                    continue;
                }

                if let Err(err) = listener.handle(event).await {
                    tracing::warn!(
                        event = %event_name,
                        listener = listener.listener_name(),
                        error = %err,
                        "event listener failed"
                    );
                    return Err(DomainError::EventHandler {
                        handler: listener.listener_name().to_string(),
                        event: event_name,
                        reason: err.to_string(),
                    });
                }
            }

            tracing::info!(event = %event_name, "{event_name} was fired.");
        }

        Ok(())
    }
}
