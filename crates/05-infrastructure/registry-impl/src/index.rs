//! 类型索引
//!
//! 可查询类型 → 按身份去重、按插入顺序排列的对象集合

use registry_common::{BeanRef, ObjectId, TypeKey};
use std::any::TypeId;
use std::collections::{HashMap, HashSet};

/// 单个类型下的对象集合
#[derive(Debug)]
pub(crate) struct IndexEntry {
    key: TypeKey,
    members: Vec<BeanRef>,
    seen: HashSet<ObjectId>,
}

impl IndexEntry {
    fn new(key: TypeKey) -> Self {
        Self {
            key,
            members: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// 插入对象，已存在时返回 false
    fn insert(&mut self, bean: &BeanRef) -> bool {
        if !self.seen.insert(bean.object_id()) {
            return false;
        }
        self.members.push(bean.clone());
        true
    }

    pub(crate) fn key(&self) -> TypeKey {
        self.key
    }

    pub(crate) fn members(&self) -> &[BeanRef] {
        &self.members
    }
}

/// 类型索引
///
/// 只在构建期写入，之后只读。
#[derive(Debug, Default)]
pub(crate) struct TypeIndex {
    entries: HashMap<TypeId, IndexEntry>,
    names: HashMap<&'static str, TypeId>,
    order: Vec<TypeId>,
    objects: HashSet<ObjectId>,
}

impl TypeIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 按对象声明的每一项能力编目，返回新增的索引项数量
    pub(crate) fn catalog(&mut self, bean: &BeanRef) -> usize {
        self.objects.insert(bean.object_id());

        let mut added = 0;
        for key in bean.capabilities() {
            let id = key.id();
            if !self.entries.contains_key(&id) {
                self.order.push(id);
                self.names.insert(key.name(), id);
            }
            let entry = self
                .entries
                .entry(id)
                .or_insert_with(|| IndexEntry::new(key));
            if entry.insert(bean) {
                added += 1;
            }
        }
        added
    }

    pub(crate) fn entry(&self, key: &TypeKey) -> Option<&IndexEntry> {
        self.entries.get(&key.id())
    }

    pub(crate) fn key_by_name(&self, name: &str) -> Option<TypeKey> {
        self.names
            .get(name)
            .and_then(|id| self.entries.get(id))
            .map(IndexEntry::key)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .filter(|entry| !entry.members.is_empty())
            .map(IndexEntry::key)
    }

    pub(crate) fn object_count(&self) -> usize {
        self.objects.len()
    }
}
