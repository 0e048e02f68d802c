//! 命令总线应用层（commander-application）
//!
//! 命令是描述意图的纯数据，处理器执行具体工作，翻译器按命名约定把命令映射到
//! 处理器与校验器，总线负责编排“校验 → 装饰器 → 处理”的执行流程：
//! - `command` / `command_handler` / `command_validator`：能力契约
//! - `translator`：命名约定（`...Command` → `...CommandHandler` / `...Validator`）
//! - `container`：启动期显式注册的依赖容器，按标识解析处理器、校验器与装饰器
//! - `default_command_bus` / `validation_command_bus`：执行管线
//! - `commander`：面向调用方的门面，含输入映射与按需装饰
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod command_validator;
pub mod commander;
pub mod config;
pub mod container;
pub mod context;
pub mod default_command_bus;
pub mod error;
pub mod input;
pub mod translator;
pub mod validation_command_bus;

pub use commander::Commander;
pub use container::Container;
pub use default_command_bus::DefaultCommandBus;
pub use translator::BasicCommandTranslator;
pub use validation_command_bus::ValidationCommandBus;

pub use commander_macros::Command;

// 允许在本 crate 内部通过 ::commander_application 进行自引用，
// 以便派生宏在本 crate 的单元测试中也能解析到 ::commander_application 路径。
extern crate self as commander_application;
