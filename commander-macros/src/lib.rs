use proc_macro::TokenStream;

mod command;
mod derive_utils;
mod domain_event;
mod event_generator;
mod field_utils;

/// 命令派生宏
/// - 为结构体/枚举实现 `::commander_application::command::Command`
/// - `NAME` 默认为 `module_path!() + "::" + 类型名`，可用 `#[command(name = "...")]` 覆写
/// - `Output` 默认为 `()`，可用 `#[command(output = Type)]` 指定处理器返回类型
#[proc_macro_derive(Command, attributes(command))]
pub fn command(item: TokenStream) -> TokenStream {
    command::expand(item)
}

/// 领域事件宏
/// - 合并/追加派生：`Debug`, `Clone`
/// - 实现 `::commander_domain::domain_event::DomainEvent`
/// - 结构体：事件名默认为点分类型路径，可用 `#[domain_event(name = "...")]` 覆写
/// - 枚举：事件名为 `<点分类型路径>.<变体名>`，变体可用 `#[event(name = "...")]` 覆写
#[proc_macro_attribute]
pub fn domain_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_event::expand(attr, item)
}

/// 事件生成宏
/// - 若缺失则追加字段 `pending_events: PendingEvents<E>`
/// - 自动实现 `::commander_domain::event_generator::EventGenerator`
/// - 参数：`#[event_generator(event = EventType)]`（必填）
#[proc_macro_attribute]
pub fn event_generator(attr: TokenStream, item: TokenStream) -> TokenStream {
    event_generator::expand(attr, item)
}
