//! Bean 派生宏集成测试

use bean_macros::Bean;
use registry_abstractions::{Container, ContainerExt};
use registry_common::{Bean, BeanRef, TypeKey};
use registry_impl::DefaultContainer;
use std::sync::Arc;

pub trait Storage: Send + Sync {
    fn capacity(&self) -> usize;
}

pub trait Named: Send + Sync {
    fn name(&self) -> &str;
}

/// 以 `Named` 为父 trait，但派生时只声明 `Cache`
pub trait Cache: Named {
    fn hit_rate(&self) -> f64;
}

#[derive(Debug, Bean)]
#[bean(class = "memory", provides(Storage, Named))]
#[bean(provides(Storage))]
struct MemoryStorage {
    capacity: usize,
}

impl Storage for MemoryStorage {
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Named for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }
}

#[derive(Debug, Bean)]
#[bean(provides(Cache))]
struct LruCache;

impl Named for LruCache {
    fn name(&self) -> &str {
        "lru"
    }
}

impl Cache for LruCache {
    fn hit_rate(&self) -> f64 {
        0.5
    }
}

#[derive(Debug, Bean)]
struct Plain;

#[test]
fn derive_declares_listed_capabilities() {
    assert_eq!(MemoryStorage::class_name(), "memory");

    let bean = BeanRef::new(MemoryStorage { capacity: 8 });
    let capabilities: Vec<TypeKey> = bean.capabilities().collect();
    // 自身类型在前，重复声明的能力只记录一次
    assert_eq!(
        capabilities,
        vec![
            TypeKey::of::<MemoryStorage>(),
            TypeKey::of::<dyn Storage>(),
            TypeKey::of::<dyn Named>(),
        ]
    );
    assert_eq!(bean.view::<dyn Storage>().map(|s| s.capacity()), Some(8));
}

#[test]
fn derive_without_arguments_declares_only_the_type_itself() {
    assert_eq!(Plain::class_name(), "Plain");
    let bean = BeanRef::new(Plain);
    assert_eq!(bean.capabilities().count(), 1);
}

#[test]
fn supertraits_are_not_indexed_implicitly() {
    let container = DefaultContainer::from_beans([BeanRef::new(LruCache)]);

    let cache = container.get_required::<dyn Cache>().unwrap();
    assert_eq!(cache.name(), "lru");
    assert!(!container.contains::<dyn Named>().unwrap());
}

#[test]
fn derived_beans_share_one_identity_across_capabilities() {
    let storage = Arc::new(MemoryStorage { capacity: 4 });
    let bean = BeanRef::from_arc(Arc::clone(&storage));
    let container = DefaultContainer::from_beans([bean.clone(), bean, BeanRef::from_arc(storage)]);

    assert_eq!(container.object_count(), 1);
    assert_eq!(container.get_all::<dyn Storage>().unwrap().len(), 1);
    assert_eq!(container.get_all::<dyn Named>().unwrap().len(), 1);
    assert!(container.exists(Some(&TypeKey::of::<MemoryStorage>())).unwrap());
}
