//! 模板渲染与文件写出
//!
//! 渲染使用 Handlebars：关闭 HTML 转义（生成的是源码），开启严格模式
//! （模板引用了不存在的变量时报错，而不是静默输出空串）。
//!
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::input::CommandInput;
use handlebars::Handlebars;
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

const COMMAND_TEMPLATE: &str = include_str!("../templates/command.hbs");
const HANDLER_TEMPLATE: &str = include_str!("../templates/handler.hbs");

pub const COMMAND_TEMPLATE_FILE: &str = "command.hbs";
pub const HANDLER_TEMPLATE_FILE: &str = "handler.hbs";

/// 模板来源
#[derive(Debug, Clone)]
pub enum Template {
    Embedded(&'static str),
    File(PathBuf),
}

impl Template {
    pub fn command(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Template::File(dir.join(COMMAND_TEMPLATE_FILE)),
            None => Template::Embedded(COMMAND_TEMPLATE),
        }
    }

    pub fn handler(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Template::File(dir.join(HANDLER_TEMPLATE_FILE)),
            None => Template::Embedded(HANDLER_TEMPLATE),
        }
    }

    fn source(&self) -> Result<Cow<'static, str>, GeneratorError> {
        match self {
            Template::Embedded(src) => Ok(Cow::Borrowed(*src)),
            Template::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|e| GeneratorError::io(path, e)),
        }
    }
}

/// 一次生成写出的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub command: PathBuf,
    pub handler: PathBuf,
}

// 模板可见的变量
#[derive(Serialize)]
struct TemplateContext<'a> {
    name: &'a str,
    namespace: &'a str,
    properties: &'a [String],
    arguments: String,
    field_list: String,
    file_stem: String,
    handler_name: String,
    handler_file_stem: String,
}

impl<'a> From<&'a CommandInput> for TemplateContext<'a> {
    fn from(input: &'a CommandInput) -> Self {
        Self {
            name: &input.name,
            namespace: &input.namespace,
            properties: &input.properties,
            arguments: input.arguments(),
            field_list: input.field_list(),
            file_stem: input.file_stem(),
            handler_name: input.handler_name(),
            handler_file_stem: input.handler_file_stem(),
        }
    }
}

pub struct CommandGenerator {
    registry: Handlebars<'static>,
}

impl Default for CommandGenerator {
    fn default() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);
        Self { registry }
    }
}

impl CommandGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 渲染模板为字符串
    pub fn render(&self, input: &CommandInput, template: &Template) -> Result<String, GeneratorError> {
        let source = template.source()?;
        let rendered = self
            .registry
            .render_template(&source, &TemplateContext::from(input))?;
        Ok(rendered)
    }

    /// 渲染模板并写入目标文件，必要时创建父目录；已存在的文件会被覆盖
    pub fn make(
        &self,
        input: &CommandInput,
        template: &Template,
        destination: &Path,
    ) -> Result<(), GeneratorError> {
        let rendered = self.render(input, template)?;
        write_file(destination, &rendered)?;

        tracing::debug!(path = %destination.display(), command = %input.name, "file generated");
        Ok(())
    }

    /// 生成命令与处理器两个文件：`<base>/<模块目录>/<snake>.rs` 与 `<snake>_handler.rs`
    pub fn generate(
        &self,
        input: &CommandInput,
        config: &GeneratorConfig,
    ) -> Result<GeneratedFiles, GeneratorError> {
        let dir = input
            .module_dirs()
            .iter()
            .fold(config.base.clone(), |dir, m| dir.join(m));

        let files = GeneratedFiles {
            command: dir.join(format!("{}.rs", input.file_stem())),
            handler: dir.join(format!("{}.rs", input.handler_file_stem())),
        };

        // 两份模板都渲染成功后才落盘，避免只写出一半
        let templates = config.templates.as_deref();
        let command = self.render(input, &Template::command(templates))?;
        let handler = self.render(input, &Template::handler(templates))?;
        write_file(&files.command, &command)?;
        write_file(&files.handler, &handler)?;

        tracing::info!(
            command = %files.command.display(),
            handler = %files.handler.display(),
            "command and handler generated"
        );
        Ok(files)
    }
}

fn write_file(destination: &Path, contents: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
    }
    if destination.exists() {
        tracing::warn!(path = %destination.display(), "overwriting existing file");
    }
    fs::write(destination, contents).map_err(|e| GeneratorError::io(destination, e))
}
