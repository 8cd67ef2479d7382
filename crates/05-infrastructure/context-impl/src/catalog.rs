//! 类型目录
//!
//! 上下文记录只携带类名，目录负责把类名映射为能创建对象的工厂。

use registry_common::{Bean, BeanRef, BoxError, ContextError, ContextResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// 对象工厂函数类型
///
/// 参数为记录中的 `properties`，记录未提供时为 `None`。
pub type BeanFactoryFn = Arc<dyn Fn(Option<&Value>) -> Result<BeanRef, BoxError> + Send + Sync>;

/// 类型目录
#[derive(Clone, Default)]
pub struct TypeCatalog {
    factories: HashMap<String, BeanFactoryFn>,
}

impl TypeCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 以 [`Bean::class_name`] 注册类型
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: Bean + DeserializeOwned,
    {
        self.register_as::<T>(T::class_name())
    }

    /// 以指定类名注册类型
    ///
    /// 属性通过 serde 解码。记录未提供属性时，先按空对象解码，
    /// 失败再按 `null` 解码，这样单元结构体与全部字段带默认值的结构体都能直接使用。
    pub fn register_as<T>(&mut self, class: impl Into<String>) -> &mut Self
    where
        T: Bean + DeserializeOwned,
    {
        self.register_factory(class, |properties: Option<&Value>| {
            let value = match properties {
                Some(properties) => T::deserialize(properties)?,
                None => T::deserialize(&Value::Object(Map::new()))
                    .or_else(|_| T::deserialize(&Value::Null))?,
            };
            Ok::<_, serde_json::Error>(BeanRef::new(value))
        })
    }

    /// 以自定义工厂注册类名
    pub fn register_factory<F, E>(&mut self, class: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(Option<&Value>) -> Result<BeanRef, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let class = class.into();
        let factory: BeanFactoryFn =
            Arc::new(move |properties: Option<&Value>| -> Result<BeanRef, BoxError> {
                factory(properties).map_err(Into::into)
            });

        if self.factories.insert(class.clone(), factory).is_some() {
            warn!("类名重复注册，覆盖之前的工厂: {}", class);
        } else {
            debug!("注册类: {}", class);
        }
        self
    }

    /// 是否注册了类名
    pub fn contains(&self, class: &str) -> bool {
        self.factories.contains_key(class)
    }

    /// 已注册的类名，按字母顺序
    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        classes.sort_unstable();
        classes
    }

    /// 已注册的类数量
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// 按类名创建对象
    pub fn create(&self, class: &str, properties: Option<&Value>) -> ContextResult<BeanRef> {
        let factory = self
            .factories
            .get(class)
            .ok_or_else(|| ContextError::UnknownClass {
                class: class.to_string(),
            })?;

        factory(properties).map_err(|source| ContextError::PropertyDecode {
            class: class.to_string(),
            source,
        })
    }
}

impl fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("classes", &self.classes())
            .finish()
    }
}
