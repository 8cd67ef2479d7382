//! 元数据定义
//!
//! 提供可查询类型的标识信息

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 可查询类型
///
/// 既可以表示具体类型，也可以表示 `dyn Trait` 形式的能力。
/// 相等性与哈希只由 [`TypeId`] 决定，名称仅用于展示与按名查询。
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型键
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名称（包含模块路径）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    ///
    /// 能力类型保留 `dyn ` 前缀，例如 `dyn app::Greeter` 得到 `dyn Greeter`。
    pub fn short_name(&self) -> String {
        let (prefix, path) = match self.name.strip_prefix("dyn ") {
            Some(rest) => ("dyn ", rest),
            None => ("", self.name),
        };
        // 泛型参数里的 `::` 不参与截断
        let head_end = path.find('<').unwrap_or(path.len());
        let start = path[..head_end].rfind("::").map(|i| i + 2).unwrap_or(0);
        format!("{}{}", prefix, &path[start..])
    }

    /// 是否为 trait object 类型键
    pub fn is_capability(&self) -> bool {
        self.name.starts_with("dyn ")
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
