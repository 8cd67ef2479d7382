//! 资源解析器实现

use crate::options::LoaderOptions;
use registry_abstractions::{normalize_locator, ResourceResolver};
use registry_common::{ContextError, ContextResult};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// 类路径资源解析器
///
/// 定位符被视为相对于各个资源根目录的路径，按根目录顺序查找第一个存在的文件。
#[derive(Debug, Clone, Default)]
pub struct ClassPathResolver {
    roots: Vec<PathBuf>,
}

impl ClassPathResolver {
    /// 创建不含任何根目录的解析器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加资源根目录
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// 按加载器配置创建
    pub fn from_options(options: &LoaderOptions) -> Self {
        Self {
            roots: options.resource_roots.clone(),
        }
    }

    /// 资源根目录
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// 定位资源文件
    pub fn locate(&self, locator: &str) -> ContextResult<PathBuf> {
        let relative = normalize_locator(locator);
        if relative.is_empty() {
            return Err(ContextError::InvalidLocator {
                locator: locator.to_string(),
                reason: "资源路径为空".to_string(),
            });
        }

        // 定位符不能跳出资源根目录
        let relative_path = Path::new(&relative);
        if relative_path
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(ContextError::InvalidLocator {
                locator: locator.to_string(),
                reason: "只允许普通路径组成部分".to_string(),
            });
        }

        for root in &self.roots {
            let candidate = root.join(relative_path);
            trace!("检查资源路径: {}", candidate.display());
            if candidate.is_file() {
                debug!("定位资源: {} -> {}", locator, candidate.display());
                return Ok(candidate);
            }
        }

        Err(ContextError::ResourceNotFound {
            locator: locator.to_string(),
        })
    }
}

impl ResourceResolver for ClassPathResolver {
    fn open(&self, locator: &str) -> ContextResult<Box<dyn Read + Send>> {
        let path = self.locate(locator)?;
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn exists(&self, locator: &str) -> bool {
        self.locate(locator).is_ok()
    }

    fn name(&self) -> &str {
        "classpath"
    }
}

/// 内嵌资源解析器
///
/// 通常配合 `include_bytes!` 使用，把上下文文件编译进二进制。
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    resources: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加资源
    pub fn with_resource(
        mut self,
        locator: &str,
        content: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        self.insert(locator, content);
        self
    }

    /// 添加或替换资源
    pub fn insert(&mut self, locator: &str, content: impl Into<Cow<'static, [u8]>>) {
        self.resources
            .insert(normalize_locator(locator), content.into());
    }

    /// 资源数量
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceResolver for EmbeddedResources {
    fn open(&self, locator: &str) -> ContextResult<Box<dyn Read + Send>> {
        let content = self
            .resources
            .get(&normalize_locator(locator))
            .ok_or_else(|| ContextError::ResourceNotFound {
                locator: locator.to_string(),
            })?;
        Ok(Box::new(Cursor::new(content.clone().into_owned())))
    }

    fn exists(&self, locator: &str) -> bool {
        self.resources.contains_key(&normalize_locator(locator))
    }

    fn name(&self) -> &str {
        "embedded"
    }
}
