//! 上下文记录
//!
//! 一条记录要么定义一个新对象，要么引用之前定义过的对象。

use registry_abstractions::ContextFormat;
use registry_common::{ContextError, ContextResult};
use serde::Deserialize;
use serde_json::Value;
use std::io::{BufReader, Read};
use tracing::trace;

/// 对象定义记录
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionRecord {
    /// 供后续记录引用的 ID
    #[serde(default)]
    pub id: Option<String>,
    /// 在 [`crate::TypeCatalog`] 中注册的类名
    pub class: String,
    /// 对象属性
    #[serde(default)]
    pub properties: Option<Value>,
}

/// 对象引用记录
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceRecord {
    /// 被引用对象的 ID
    #[serde(rename = "ref")]
    pub reference: String,
}

/// 上下文记录
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BeanRecord {
    Reference(ReferenceRecord),
    Definition(DefinitionRecord),
}

/// JSON 流中的一个顶层值：单条记录或记录数组
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonChunk {
    Batch(Vec<BeanRecord>),
    Single(BeanRecord),
}

/// TOML 上下文文档
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlContext {
    #[serde(default)]
    beans: Vec<BeanRecord>,
}

/// 逐条读取记录，返回读取的记录数
///
/// 记录序号从 0 开始，用于错误定位。
pub fn read_records<F>(
    reader: &mut dyn Read,
    format: ContextFormat,
    mut visit: F,
) -> ContextResult<usize>
where
    F: FnMut(usize, BeanRecord) -> ContextResult<()>,
{
    let mut index = 0usize;

    match format {
        ContextFormat::Json => {
            // 流结束即表示没有更多记录，不作为错误
            let stream = serde_json::Deserializer::from_reader(BufReader::new(reader))
                .into_iter::<JsonChunk>();
            for chunk in stream {
                let records = match chunk.map_err(|e| json_error(e, index))? {
                    JsonChunk::Batch(records) => records,
                    JsonChunk::Single(record) => vec![record],
                };
                for record in records {
                    trace!("读取第 {} 条记录", index);
                    visit(index, record)?;
                    index += 1;
                }
            }
        }
        ContextFormat::Toml => {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            let context: TomlContext =
                toml::from_str(&text).map_err(|e| ContextError::malformed(0, e))?;
            for record in context.beans {
                trace!("读取第 {} 条记录", index);
                visit(index, record)?;
                index += 1;
            }
        }
    }

    Ok(index)
}

fn json_error(error: serde_json::Error, index: usize) -> ContextError {
    if error.is_io() {
        ContextError::ReadFailed {
            source: error.into(),
        }
    } else {
        ContextError::malformed(index, error)
    }
}
