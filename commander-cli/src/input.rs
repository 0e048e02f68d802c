//! 生成器输入解析
//!
//! 类路径允许 `/`、`\` 与 `::` 三种分隔符，最后一段是类型名，其余构成模块路径；
//! 属性以逗号分隔，两侧空白会被去掉，空项忽略。
//!
use crate::error::GeneratorError;
use commander_application::input::to_snake_case;
use serde::Serialize;

/// 一次生成所需的输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInput {
    /// 类型名，如 `PlaceOrderCommand`
    pub name: String,
    /// 模块路径，如 `shop::orders`（顶层时为空）
    pub namespace: String,
    /// 命令字段
    pub properties: Vec<String>,
}

impl CommandInput {
    /// 构造参数列表：`sku: String, quantity: String`
    pub fn arguments(&self) -> String {
        self.properties
            .iter()
            .map(|p| format!("{p}: String"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 字段简写初始化列表：`sku, quantity`
    pub fn field_list(&self) -> String {
        self.properties.join(", ")
    }

    /// 命令文件名（不含扩展名）
    pub fn file_stem(&self) -> String {
        to_snake_case(&self.name)
    }

    /// 与命令配对的处理器类型名
    pub fn handler_name(&self) -> String {
        format!("{}Handler", self.name)
    }

    pub fn handler_file_stem(&self) -> String {
        to_snake_case(&self.handler_name())
    }

    /// 模块路径对应的目录（逐段 snake_case）
    pub fn module_dirs(&self) -> Vec<String> {
        self.namespace
            .split("::")
            .filter(|s| !s.is_empty())
            .map(to_snake_case)
            .collect()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CommandInputParser;

impl CommandInputParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, path: &str, properties: &str) -> Result<CommandInput, GeneratorError> {
        let normalized = path.replace("::", "/").replace('\\', "/");
        let mut segments: Vec<String> = normalized
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let Some(name) = segments.pop() else {
            return Err(GeneratorError::InvalidPath(path.to_string()));
        };
        if !segments.iter().chain([&name]).all(|s| is_identifier(s)) {
            return Err(GeneratorError::InvalidPath(path.to_string()));
        }

        Ok(CommandInput {
            name,
            namespace: segments.join("::"),
            properties: parse_properties(properties)?,
        })
    }
}

fn parse_properties(raw: &str) -> Result<Vec<String>, GeneratorError> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if is_identifier(p) {
                Ok(p.to_string())
            } else {
                Err(GeneratorError::InvalidProperty(p.to_string()))
            }
        })
        .collect()
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
