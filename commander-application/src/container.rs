//! 依赖容器（Container）
//!
//! 启动期显式注册、运行期按标识解析：
//! - 标识绑定：把字符串标识（通常是约定得到的类型名）绑定到工厂函数，
//!   每次解析都会重新调用工厂，工厂可从容器中解析自身依赖；
//! - 类型服务：按类型登记的共享单例，供工厂做构造注入。
//!
//! 注册与解析都只需 `&self`，解析过程中工厂可以再次访问容器。
//!
use crate::{
    command::Command, command_bus::CommandDecorator, command_handler::CommandHandler,
    command_validator::CommandValidator, error::AppError,
};
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

type Instance = Box<dyn Any + Send + Sync>;

type Factory = Arc<dyn Fn(&Container) -> Result<Instance, AppError> + Send + Sync>;

type SharedService = Arc<dyn Any + Send + Sync>;

#[derive(Clone)]
struct Binding {
    // 工厂产出的具体类型，用于在调用工厂之前判断绑定种类
    type_id: TypeId,
    // 工厂产出的具体类型名，用于类型不匹配时的错误信息
    kind: &'static str,
    factory: Factory,
}

/// 依赖容器
pub struct Container {
    bindings: DashMap<String, Binding>,
    services: DashMap<TypeId, SharedService>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            bindings: DashMap::new(),
            services: DashMap::new(),
        }
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以标识绑定任意类型的工厂；重复绑定时后者覆盖前者
    pub fn bind<T, F>(&self, identifier: impl Into<String>, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Container) -> Result<T, AppError> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        let binding = Binding {
            type_id: TypeId::of::<T>(),
            kind: type_name::<T>(),
            factory: Arc::new(move |container| {
                factory(container).map(|value| Box::new(value) as Instance)
            }),
        };

        if self.bindings.insert(identifier.clone(), binding).is_some() {
            tracing::debug!(identifier = %identifier, "binding replaced");
        }
    }

    /// 绑定命令处理器
    pub fn bind_handler<C, H, F>(&self, identifier: impl Into<String>, factory: F)
    where
        C: Command,
        H: CommandHandler<C> + 'static,
        F: Fn(&Container) -> Result<H, AppError> + Send + Sync + 'static,
    {
        self.bind::<Arc<dyn CommandHandler<C>>, _>(identifier, move |container| {
            Ok(Arc::new(factory(container)?))
        });
    }

    /// 绑定命令校验器
    pub fn bind_validator<C, V, F>(&self, identifier: impl Into<String>, factory: F)
    where
        C: Command,
        V: CommandValidator<C> + 'static,
        F: Fn(&Container) -> Result<V, AppError> + Send + Sync + 'static,
    {
        self.bind::<Arc<dyn CommandValidator<C>>, _>(identifier, move |container| {
            Ok(Arc::new(factory(container)?))
        });
    }

    /// 绑定装饰器
    pub fn bind_decorator<D, F>(&self, identifier: impl Into<String>, factory: F)
    where
        D: CommandDecorator + 'static,
        F: Fn(&Container) -> Result<D, AppError> + Send + Sync + 'static,
    {
        self.bind::<Arc<dyn CommandDecorator>, _>(identifier, move |container| {
            Ok(Arc::new(factory(container)?))
        });
    }

    /// 标识是否已绑定（约定查找时的“类型是否存在”）
    pub fn has(&self, identifier: &str) -> bool {
        self.bindings.contains_key(identifier)
    }

    /// 绑定的工厂是否产出 `T`；只查看登记信息，不调用工厂
    pub fn binds_as<T>(&self, identifier: &str) -> Result<bool, AppError>
    where
        T: 'static,
    {
        self.bindings
            .get(identifier)
            .map(|b| b.type_id == TypeId::of::<T>())
            .ok_or_else(|| AppError::BindingNotFound(identifier.to_string()))
    }

    /// 确认标识绑定的是装饰器：未绑定为 `BindingNotFound`，其他种类为 `InvalidDecorator`
    pub fn ensure_decorator(&self, identifier: &str) -> Result<(), AppError> {
        if self.binds_as::<Arc<dyn CommandDecorator>>(identifier)? {
            Ok(())
        } else {
            Err(AppError::InvalidDecorator {
                identifier: identifier.to_string(),
            })
        }
    }

    /// 解析标识：调用工厂并还原为 `T`
    pub fn make<T>(&self, identifier: &str) -> Result<T, AppError>
    where
        T: 'static,
    {
        // 先克隆出绑定再调用工厂，避免工厂内部再次访问容器时持有分片锁
        let binding = self
            .bindings
            .get(identifier)
            .map(|b| b.clone())
            .ok_or_else(|| AppError::BindingNotFound(identifier.to_string()))?;

        let instance = (binding.factory)(self)?;

        instance
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| AppError::TypeMismatch {
                expected: type_name::<T>(),
                found: binding.kind,
            })
    }

    pub fn make_handler<C: Command>(
        &self,
        identifier: &str,
    ) -> Result<Arc<dyn CommandHandler<C>>, AppError> {
        self.make::<Arc<dyn CommandHandler<C>>>(identifier)
    }

    pub fn make_validator<C: Command>(
        &self,
        identifier: &str,
    ) -> Result<Arc<dyn CommandValidator<C>>, AppError> {
        self.make::<Arc<dyn CommandValidator<C>>>(identifier)
    }

    pub fn make_decorator(&self, identifier: &str) -> Result<Arc<dyn CommandDecorator>, AppError> {
        self.make::<Arc<dyn CommandDecorator>>(identifier)
    }

    /// 登记类型服务（共享单例）
    pub fn singleton<T>(&self, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.singleton_arc(Arc::new(value));
    }

    pub fn singleton_arc<T>(&self, value: Arc<T>)
    where
        T: Send + Sync + 'static,
    {
        self.services.insert(TypeId::of::<T>(), value as SharedService);
    }

    /// 按类型获取服务
    pub fn service<T>(&self) -> Result<Arc<T>, AppError>
    where
        T: Send + Sync + 'static,
    {
        let Some(shared) = self.services.get(&TypeId::of::<T>()).map(|s| s.clone()) else {
            return Err(AppError::ServiceNotFound(type_name::<T>()));
        };

        shared.downcast::<T>().map_err(|_| AppError::TypeMismatch {
            expected: type_name::<T>(),
            found: "unknown",
        })
    }

    /// 已绑定的标识（排序后的只读视图）
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.bindings.iter().map(|e| e.key().clone()).collect();
        ids.sort_unstable();
        ids
    }
}
