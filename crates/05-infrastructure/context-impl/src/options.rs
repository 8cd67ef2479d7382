//! 加载器配置
//!
//! 配置来源按优先级从低到高：默认值、TOML 配置文件、环境变量。

use registry_abstractions::ContextFormat;
use registry_common::{ContextError, ContextResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// 默认环境变量前缀
pub const DEFAULT_ENV_PREFIX: &str = "LORN_REGISTRY";

/// 加载器配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// 类路径资源根目录，按顺序查找
    pub resource_roots: Vec<PathBuf>,
    /// 无法从定位符推断格式时使用的格式
    pub default_format: ContextFormat,
    /// 单个上下文允许的最大记录数
    pub max_records: Option<usize>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            resource_roots: vec![PathBuf::from(".")],
            default_format: ContextFormat::Json,
            max_records: None,
        }
    }
}

impl LoaderOptions {
    /// 加载配置
    ///
    /// `file` 指定时必须存在。环境变量形如 `LORN_REGISTRY_MAX_RECORDS=100`，
    /// `LORN_REGISTRY_RESOURCE_ROOTS` 使用逗号分隔多个目录。
    pub fn load(file: Option<&Path>, env_prefix: &str) -> ContextResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            debug!("读取加载器配置文件: {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("resource_roots"),
            )
            .build()
            .map_err(|e| {
                error!("加载器配置构建失败: {}", e);
                ContextError::InvalidOptions {
                    source: Box::new(e),
                }
            })?;

        settings.try_deserialize().map_err(|e| {
            error!("加载器配置绑定失败: {}", e);
            ContextError::InvalidOptions {
                source: Box::new(e),
            }
        })
    }

    /// 仅从环境变量加载配置
    pub fn from_env() -> ContextResult<Self> {
        Self::load(None, DEFAULT_ENV_PREFIX)
    }
}
