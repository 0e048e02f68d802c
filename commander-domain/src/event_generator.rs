//! 事件生成（EventGenerator）
//!
//! 实体在执行业务方法时记录“已发生的事实”，待命令处理器持久化后统一取出分发：
//! - `PendingEvents`：实体持有的待发布事件缓冲，取出即清空；
//! - `EventGenerator`：为实体提供 `raise` / `release_events`，
//!   通常由 `#[event_generator(event = ...)]` 宏生成实现。
//!
use crate::domain_event::DomainEvent;
use std::slice::Iter;

/// 待发布事件缓冲
///
/// 每个被 `raise` 的事件只会在一次 `release` 中被返回一次。
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEvents<E> {
    events: Vec<E>,
}

impl<E> Default for PendingEvents<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> PendingEvents<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个待发布事件
    pub fn raise(&mut self, event: E) {
        self.events.push(event);
    }

    /// 取出全部待发布事件并清空缓冲（按 raise 顺序）
    pub fn release(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 只读查看尚未取出的事件
    pub fn iter(&self) -> Iter<'_, E> {
        self.events.iter()
    }
}

/// 能够记录领域事件的实体
pub trait EventGenerator {
    /// 该实体产生的领域事件类型
    type Event: DomainEvent;

    /// 实体内部的事件缓冲
    fn pending_events(&self) -> &PendingEvents<Self::Event>;

    fn pending_events_mut(&mut self) -> &mut PendingEvents<Self::Event>;

    /// 记录一个已发生的事件
    fn raise(&mut self, event: Self::Event) {
        self.pending_events_mut().raise(event);
    }

    /// 取出全部待发布事件，实体缓冲随之清空
    fn release_events(&mut self) -> Vec<Self::Event> {
        self.pending_events_mut().release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commander_macros::{domain_event, event_generator};

    #[domain_event]
    enum AccountEvent {
        Opened { owner: String },
        Deposited { amount: u64 },
    }

    #[event_generator(event = AccountEvent)]
    #[derive(Debug, Default)]
    struct Account {
        balance: u64,
    }

    impl Account {
        fn open(owner: &str) -> Self {
            let mut account = Account::default();
            account.raise(AccountEvent::Opened {
                owner: owner.to_string(),
            });
            account
        }

        fn deposit(&mut self, amount: u64) {
            self.balance += amount;
            self.raise(AccountEvent::Deposited { amount });
        }
    }

    #[test]
    fn release_returns_raised_events_in_order() {
        let mut account = Account::open("alice");
        account.deposit(10);
        account.deposit(5);
        assert_eq!(account.pending_events().len(), 3);

        let events = account.release_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], AccountEvent::Opened { owner } if owner == "alice"));
        assert!(matches!(events[1], AccountEvent::Deposited { amount: 10 }));
        assert!(matches!(events[2], AccountEvent::Deposited { amount: 5 }));
        assert_eq!(account.balance, 15);
    }

    #[test]
    fn release_drains_exactly_once() {
        let mut account = Account::open("bob");
        assert_eq!(account.release_events().len(), 1);
        assert!(account.release_events().is_empty());
        assert!(account.pending_events().is_empty());

        account.deposit(1);
        let again = account.release_events();
        assert_eq!(again.len(), 1);
        assert!(matches!(again[0], AccountEvent::Deposited { amount: 1 }));
    }

    #[test]
    fn variant_event_names_are_dotted() {
        let ev = AccountEvent::Deposited { amount: 1 };
        assert!(ev.event_name().ends_with("AccountEvent.Deposited"));
    }

    #[test]
    fn buffer_can_be_used_directly() {
        let mut buf = PendingEvents::new();
        buf.raise(1u8);
        buf.raise(2u8);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(buf.release(), vec![1, 2]);
        assert!(buf.is_empty());
    }
}
