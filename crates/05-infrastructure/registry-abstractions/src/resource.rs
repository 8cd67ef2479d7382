//! 资源解析抽象接口

use registry_common::ContextResult;
use std::io::Read;

/// 资源定位符的类路径前缀
pub const CLASSPATH_PREFIX: &str = "classpath:";

/// 资源解析器 trait
///
/// 将资源定位符解析为可读字节流。
pub trait ResourceResolver: Send + Sync {
    /// 打开资源
    fn open(&self, locator: &str) -> ContextResult<Box<dyn Read + Send>>;

    /// 资源是否存在
    fn exists(&self, locator: &str) -> bool;

    /// 解析器名称
    fn name(&self) -> &str;
}

/// 规范化资源定位符
///
/// 去掉 `classpath:` 前缀和开头的 `/`，统一使用 `/` 作为分隔符。
pub fn normalize_locator(locator: &str) -> String {
    let trimmed = locator.trim();
    let without_prefix = trimmed.strip_prefix(CLASSPATH_PREFIX).unwrap_or(trimmed);
    without_prefix.replace('\\', "/").trim_start_matches('/').to_string()
}

/// 生成与模块同包的资源定位符
///
/// `resource_path_for_module("app::beans", "context.json")` 得到
/// `/app/beans/context.json`。
pub fn resource_path_for_module(module_path: &str, file_name: &str) -> String {
    let package = module_path.replace("::", "/");
    if package.is_empty() {
        format!("/{}", file_name)
    } else {
        format!("/{}/{}", package, file_name)
    }
}
