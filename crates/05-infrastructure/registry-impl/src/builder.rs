//! 容器构建器
//!
//! 提供两个构建入口：从字节流构建、从资源定位符构建。
//! 构建器本身不做编目，只负责取得根对象序列并交给 [`DefaultContainer`]。

use crate::container::DefaultContainer;
use registry_abstractions::{ContextFormat, ObjectLoader, ResourceResolver};
use registry_common::{BeanRef, ContextError, ContextResult};
use std::io::Read;
use tracing::{debug, info};

/// 容器构建器
pub struct ContainerBuilder {
    /// 对象图加载器
    loader: Box<dyn ObjectLoader>,
    /// 资源解析器
    resolver: Option<Box<dyn ResourceResolver>>,
    /// 无法从定位符推断格式时使用的格式
    default_format: ContextFormat,
}

impl ContainerBuilder {
    /// 创建新的容器构建器
    pub fn new<L: ObjectLoader + 'static>(loader: L) -> Self {
        Self {
            loader: Box::new(loader),
            resolver: None,
            default_format: ContextFormat::default(),
        }
    }

    /// 配置资源解析器
    pub fn with_resolver<R: ResourceResolver + 'static>(mut self, resolver: R) -> Self {
        debug!("配置资源解析器: {}", resolver.name());
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// 配置默认上下文格式
    pub fn with_default_format(mut self, format: ContextFormat) -> Self {
        self.default_format = format;
        self
    }

    /// 从字节流构建容器，使用默认格式
    pub fn build_from_reader<R: Read>(&self, reader: R) -> ContextResult<DefaultContainer> {
        self.build_from_reader_as(reader, self.default_format)
    }

    /// 从字节流构建容器，使用指定格式
    pub fn build_from_reader_as<R: Read>(
        &self,
        mut reader: R,
        format: ContextFormat,
    ) -> ContextResult<DefaultContainer> {
        let beans = self.loader.load(&mut reader, format)?;
        Ok(Self::build_from_beans(beans))
    }

    /// 从资源定位符构建容器
    ///
    /// 空白定位符、未配置解析器、资源不存在或内容无效都返回 [`ContextError`]。
    pub fn build_from_locator(&self, locator: &str) -> ContextResult<DefaultContainer> {
        if locator.trim().is_empty() {
            return Err(ContextError::missing_input("资源定位符不能为空"));
        }

        let resolver = self
            .resolver
            .as_ref()
            .ok_or_else(|| ContextError::missing_input("未配置资源解析器"))?;

        let format = ContextFormat::from_locator(locator).unwrap_or(self.default_format);
        info!("从资源构建容器: {} ({})", locator, format.name());

        let reader = resolver.open(locator)?;
        self.build_from_reader_as(reader, format)
    }

    /// 直接从根对象序列构建容器
    pub fn build_from_beans<I>(beans: I) -> DefaultContainer
    where
        I: IntoIterator<Item = BeanRef>,
    {
        DefaultContainer::from_beans(beans)
    }
}

impl std::fmt::Debug for ContainerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerBuilder")
            .field("loader", &"<loader>")
            .field("resolver", &self.resolver.as_ref().map(|r| r.name()))
            .field("default_format", &self.default_format)
            .finish()
    }
}
