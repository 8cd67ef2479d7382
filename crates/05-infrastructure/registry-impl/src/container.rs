//! 默认容器实现

use crate::index::{IndexEntry, TypeIndex};
use registry_abstractions::Container;
use registry_common::{BeanRef, QueryError, QueryResult, TypeKey};
use tracing::{debug, info};

/// 默认的对象容器
///
/// 构建时一次性完成编目，之后只读，可在线程间共享。
#[derive(Debug)]
pub struct DefaultContainer {
    index: TypeIndex,
}

impl DefaultContainer {
    /// 从根对象序列构建容器
    ///
    /// 同一对象多次出现只会编目一次。
    pub fn from_beans<I>(beans: I) -> Self
    where
        I: IntoIterator<Item = BeanRef>,
    {
        let mut index = TypeIndex::new();
        let mut received = 0usize;

        for bean in beans {
            received += 1;
            let added = index.catalog(&bean);
            debug!(
                "编目对象: {} ({}), 新增 {} 个索引项",
                bean.class_name(),
                bean.object_id(),
                added
            );
        }

        info!(
            "构建容器完成，收到 {} 个根对象，编目 {} 个不同对象",
            received,
            index.object_count()
        );

        Self { index }
    }

    /// 创建空容器
    pub fn empty() -> Self {
        Self::from_beans(std::iter::empty())
    }

    fn entry(&self, key: Option<&TypeKey>) -> QueryResult<Option<&IndexEntry>> {
        let key = key.ok_or_else(|| QueryError::invalid_query("类或接口不能为空"))?;
        Ok(self.index.entry(key))
    }
}

impl Default for DefaultContainer {
    fn default() -> Self {
        Self::empty()
    }
}

impl Container for DefaultContainer {
    fn lookup_single_or_none(&self, key: Option<&TypeKey>) -> QueryResult<Option<BeanRef>> {
        let Some(entry) = self.entry(key)? else {
            return Ok(None);
        };

        match entry.members() {
            [] => Ok(None),
            [only] => Ok(Some(only.clone())),
            members => {
                debug!("单对象查询存在歧义: {}, 候选数 {}", entry.key(), members.len());
                Err(QueryError::ambiguous(entry.key().name(), members.len()))
            }
        }
    }

    fn lookup_all(&self, key: Option<&TypeKey>) -> QueryResult<Vec<BeanRef>> {
        Ok(self
            .entry(key)?
            .map(|entry| entry.members().to_vec())
            .unwrap_or_default())
    }

    fn exists(&self, key: Option<&TypeKey>) -> QueryResult<bool> {
        Ok(self
            .entry(key)?
            .is_some_and(|entry| !entry.members().is_empty()))
    }

    fn type_key_by_name(&self, name: &str) -> Option<TypeKey> {
        self.index.key_by_name(name)
    }

    fn known_types(&self) -> Vec<TypeKey> {
        self.index.keys().collect()
    }

    fn object_count(&self) -> usize {
        self.index.object_count()
    }
}
