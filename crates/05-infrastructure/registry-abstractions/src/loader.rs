//! 对象图加载器抽象接口

use registry_common::{BeanRef, ContextResult};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// 上下文格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextFormat {
    /// 由记录组成的 JSON 流
    #[default]
    Json,
    /// 含 `[[beans]]` 表数组的 TOML 文档
    Toml,
}

impl ContextFormat {
    /// 根据资源定位符的扩展名推断格式
    pub fn from_locator(locator: &str) -> Option<Self> {
        let extension = Path::new(locator).extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// 格式名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// 对象图加载器 trait
///
/// 将持久化的上下文反序列化为扁平的根对象序列。
/// 同一对象可以多次出现在序列中，去重由注册表负责。
pub trait ObjectLoader: Send + Sync {
    /// 从字节流加载根对象
    fn load(&self, reader: &mut dyn Read, format: ContextFormat) -> ContextResult<Vec<BeanRef>>;
}
