//! 容器查询抽象接口
//!
//! 提供按可查询类型检索已编目对象的核心抽象

use registry_common::{BeanRef, QueryError, QueryResult, TypeKey};
use std::sync::Arc;

/// 对象容器 trait
///
/// 容器在构建完成后只读，所有查询都没有副作用。
/// 以 `Option<&TypeKey>` 表示可能缺失的查询类型，缺失时返回
/// [`QueryError::InvalidQuery`]。
pub trait Container: Send + Sync {
    /// 获取唯一满足类型的对象
    ///
    /// 没有匹配时返回 `None`；匹配多于一个时返回 [`QueryError::AmbiguousQuery`]。
    fn lookup_single_or_none(&self, key: Option<&TypeKey>) -> QueryResult<Option<BeanRef>>;

    /// 获取所有满足类型的对象，按首次编目顺序排列
    fn lookup_all(&self, key: Option<&TypeKey>) -> QueryResult<Vec<BeanRef>>;

    /// 是否存在满足类型的对象
    fn exists(&self, key: Option<&TypeKey>) -> QueryResult<bool>;

    /// 按完整类型名称查找已知的类型键
    fn type_key_by_name(&self, name: &str) -> Option<TypeKey>;

    /// 所有至少有一个对象的类型键，按首次出现顺序排列
    fn known_types(&self) -> Vec<TypeKey>;

    /// 已编目的不同对象数量
    fn object_count(&self) -> usize;

    /// 容器是否为空
    fn is_empty(&self) -> bool {
        self.object_count() == 0
    }

    /// 按名称获取唯一满足类型的对象
    ///
    /// 空白名称返回 [`QueryError::InvalidQuery`]，未知名称视为没有匹配。
    fn lookup_single_or_none_by_name(&self, name: &str) -> QueryResult<Option<BeanRef>> {
        match self.type_key_by_name(validate_name(name)?) {
            Some(key) => self.lookup_single_or_none(Some(&key)),
            None => Ok(None),
        }
    }

    /// 按名称获取所有满足类型的对象
    fn lookup_all_by_name(&self, name: &str) -> QueryResult<Vec<BeanRef>> {
        match self.type_key_by_name(validate_name(name)?) {
            Some(key) => self.lookup_all(Some(&key)),
            None => Ok(Vec::new()),
        }
    }

    /// 按名称检查是否存在满足类型的对象
    fn exists_by_name(&self, name: &str) -> QueryResult<bool> {
        match self.type_key_by_name(validate_name(name)?) {
            Some(key) => self.exists(Some(&key)),
            None => Ok(false),
        }
    }
}

fn validate_name(name: &str) -> QueryResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(QueryError::invalid_query("类或接口名称不能为空"));
    }
    Ok(trimmed)
}

/// 类型化查询扩展
///
/// 为所有 [`Container`] 提供以 Rust 类型为参数的查询，
/// `T` 可以是具体类型，也可以是 `dyn Trait` 能力。
pub trait ContainerExt: Container {
    /// 获取唯一实现 `T` 的对象
    fn get_single_or_none<T: ?Sized + 'static>(&self) -> QueryResult<Option<Arc<T>>> {
        let key = TypeKey::of::<T>();
        Ok(self
            .lookup_single_or_none(Some(&key))?
            .and_then(|bean| bean.view::<T>()))
    }

    /// 获取所有实现 `T` 的对象
    fn get_all<T: ?Sized + 'static>(&self) -> QueryResult<Vec<Arc<T>>> {
        let key = TypeKey::of::<T>();
        Ok(self
            .lookup_all(Some(&key))?
            .iter()
            .filter_map(|bean| bean.view::<T>())
            .collect())
    }

    /// 是否存在实现 `T` 的对象
    fn contains<T: ?Sized + 'static>(&self) -> QueryResult<bool> {
        self.exists(Some(&TypeKey::of::<T>()))
    }

    /// 获取唯一实现 `T` 的对象，不存在时返回 [`QueryError::NotFound`]
    fn get_required<T: ?Sized + 'static>(&self) -> QueryResult<Arc<T>> {
        self.get_single_or_none::<T>()?
            .ok_or_else(|| QueryError::NotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }
}

impl<C: Container + ?Sized> ContainerExt for C {}
