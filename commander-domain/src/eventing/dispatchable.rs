//! 处理器侧的事件分发能力（Dispatchable）
//!
//! 命令处理器在完成业务操作后，从实体取出待发布事件并交给分发器。
//! 分发器通过构造注入持有，而不是在调用时临时查找。
//!
use crate::domain_event::DomainEvent;
use crate::error::DomainResult as Result;
use crate::event_generator::EventGenerator;
use crate::eventing::EventDispatcher;
use async_trait::async_trait;

#[async_trait]
pub trait Dispatchable<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理器所使用的事件分发器
    fn dispatcher(&self) -> &dyn EventDispatcher<E>;

    /// 取出实体的全部待发布事件并分发
    async fn dispatch_events_for<G>(&self, entity: &mut G) -> Result<()>
    where
        G: EventGenerator<Event = E> + Send,
    {
        let events = entity.release_events();
        self.dispatcher().dispatch(events).await
    }
}
