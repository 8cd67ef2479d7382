//! 上下文加载器

use crate::catalog::TypeCatalog;
use crate::options::LoaderOptions;
use crate::record::{read_records, BeanRecord, DefinitionRecord};
use registry_abstractions::{ContextFormat, ObjectLoader};
use registry_common::{BeanRef, ContextError, ContextResult};
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

/// 基于 [`TypeCatalog`] 的上下文加载器
///
/// 每条定义记录产生一个新对象，每条引用记录再次产出之前定义的同一对象。
/// 返回的序列保持记录顺序。
#[derive(Debug, Clone)]
pub struct ContextLoader {
    catalog: Arc<TypeCatalog>,
    max_records: Option<usize>,
}

impl ContextLoader {
    /// 创建加载器
    pub fn new(catalog: TypeCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            max_records: None,
        }
    }

    /// 按加载器配置创建
    pub fn with_options(catalog: TypeCatalog, options: &LoaderOptions) -> Self {
        Self::new(catalog).with_max_records(options.max_records)
    }

    /// 限制单个上下文的记录数
    pub fn with_max_records(mut self, limit: Option<usize>) -> Self {
        self.max_records = limit;
        self
    }

    /// 类型目录
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }
}

impl ObjectLoader for ContextLoader {
    fn load(&self, reader: &mut dyn Read, format: ContextFormat) -> ContextResult<Vec<BeanRef>> {
        let mut materializer = Materializer::new(&self.catalog, self.max_records);
        let count = read_records(reader, format, |index, record| {
            materializer.accept(index, record)
        })?;

        info!(
            "上下文加载完成: {} 条记录, {} 个命名对象",
            count,
            materializer.named.len()
        );
        Ok(materializer.roots)
    }
}

/// 将记录逐条物化为对象
struct Materializer<'a> {
    catalog: &'a TypeCatalog,
    limit: Option<usize>,
    named: HashMap<String, BeanRef>,
    roots: Vec<BeanRef>,
}

impl<'a> Materializer<'a> {
    fn new(catalog: &'a TypeCatalog, limit: Option<usize>) -> Self {
        Self {
            catalog,
            limit,
            named: HashMap::new(),
            roots: Vec::new(),
        }
    }

    fn accept(&mut self, index: usize, record: BeanRecord) -> ContextResult<()> {
        if let Some(limit) = self.limit {
            if index >= limit {
                return Err(ContextError::TooManyRecords { limit });
            }
        }

        let bean = match record {
            BeanRecord::Definition(definition) => self.define(definition)?,
            BeanRecord::Reference(reference) => self
                .named
                .get(&reference.reference)
                .cloned()
                .ok_or(ContextError::UnresolvedReference {
                    id: reference.reference,
                })?,
        };

        self.roots.push(bean);
        Ok(())
    }

    fn define(&mut self, definition: DefinitionRecord) -> ContextResult<BeanRef> {
        let DefinitionRecord {
            id,
            class,
            properties,
        } = definition;

        if let Some(id) = &id {
            if self.named.contains_key(id) {
                return Err(ContextError::DuplicateId { id: id.clone() });
            }
        }

        let bean = self.catalog.create(&class, properties.as_ref())?;
        debug!("创建对象: {} ({})", class, bean.object_id());

        if let Some(id) = id {
            self.named.insert(id, bean.clone());
        }
        Ok(bean)
    }
}
