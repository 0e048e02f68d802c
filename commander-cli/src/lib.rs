//! 命令脚手架（commander-cli）
//!
//! 根据类路径与属性列表生成一对命令与处理器源码文件：
//! - 输入解析（`input`）：`shop/orders/PlaceOrderCommand` + `"sku, quantity"` → `CommandInput`
//! - 模板渲染（`generator`）：Handlebars 渲染内置或自定义模板并写入磁盘
//! - 配置（`config`）：输出根目录、模板目录与日志设置
//! - 日志（`logging`）：基于 `tracing-subscriber` 的初始化
//!
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod logging;

pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::{CommandGenerator, GeneratedFiles};
pub use input::{CommandInput, CommandInputParser};
