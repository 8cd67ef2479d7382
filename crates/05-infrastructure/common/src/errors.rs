//! 错误类型定义

use thiserror::Error;

/// 装箱的底层错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 查询错误类型
#[derive(Error, Debug)]
pub enum QueryError {
    /// 查询类型缺失或为空白
    #[error("查询类型无效: {message}")]
    InvalidQuery { message: String },

    /// 单对象查询匹配到多个候选
    #[error("无法为类或接口 '{type_name}' 定位唯一的对象实例，共有 {candidates} 个候选")]
    AmbiguousQuery { type_name: String, candidates: usize },

    /// 必需对象不存在
    #[error("没有对象实现类或接口 '{type_name}'")]
    NotFound { type_name: String },
}

impl QueryError {
    /// 创建查询类型无效错误
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// 创建歧义查询错误
    pub fn ambiguous(type_name: impl Into<String>, candidates: usize) -> Self {
        Self::AmbiguousQuery {
            type_name: type_name.into(),
            candidates,
        }
    }
}

/// 上下文构建错误类型
///
/// 所有变体都表示上下文无效：输入缺失或不可读、定位符无法解析、
/// 或者加载器无法从内容中得到一致的对象序列。
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("上下文输入缺失: {what}")]
    MissingInput { what: String },

    #[error("上下文资源不存在: {locator}")]
    ResourceNotFound { locator: String },

    #[error("上下文资源定位符无效: {locator}, 原因: {reason}")]
    InvalidLocator { locator: String, reason: String },

    #[error("上下文读取失败: {source}")]
    ReadFailed {
        #[from]
        source: std::io::Error,
    },

    #[error("上下文格式错误 (第 {index} 条记录附近): {source}")]
    Malformed { index: usize, source: BoxError },

    #[error("上下文格式不受支持: {format}")]
    UnsupportedFormat { format: String },

    #[error("未注册的类: {class}")]
    UnknownClass { class: String },

    #[error("对象属性解码失败: {class}, 原因: {source}")]
    PropertyDecode { class: String, source: BoxError },

    #[error("引用了未定义的对象: {id}")]
    UnresolvedReference { id: String },

    #[error("对象 ID 重复: {id}")]
    DuplicateId { id: String },

    #[error("上下文记录数超出上限: {limit}")]
    TooManyRecords { limit: usize },

    #[error("加载器配置无效: {source}")]
    InvalidOptions { source: BoxError },
}

impl ContextError {
    /// 创建输入缺失错误
    pub fn missing_input(what: impl Into<String>) -> Self {
        Self::MissingInput { what: what.into() }
    }

    /// 创建格式错误
    pub fn malformed(index: usize, source: impl Into<BoxError>) -> Self {
        Self::Malformed {
            index,
            source: source.into(),
        }
    }

    /// 是否为资源定位相关的错误
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInput { .. }
                | Self::ResourceNotFound { .. }
                | Self::InvalidLocator { .. }
                | Self::ReadFailed { .. }
        )
    }
}

/// 注册表错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("查询错误: {source}")]
    Query {
        #[from]
        source: QueryError,
    },

    #[error("上下文错误: {source}")]
    Context {
        #[from]
        source: ContextError,
    },
}

/// 结果类型别名
pub type QueryResult<T> = Result<T, QueryError>;
pub type ContextResult<T> = Result<T, ContextError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
