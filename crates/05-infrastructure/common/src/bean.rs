//! 可编目对象定义
//!
//! 每个对象在创建时由提供者显式声明它满足的能力（trait），
//! 注册表据此为对象建立索引，不依赖运行时反射。

use crate::TypeKey;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

/// 类型擦除后的共享实例
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// 可编目对象 trait
///
/// 实现者通过 [`Bean::declare_capabilities`] 声明自己满足的能力。
/// 具体类型本身总是被视为一项能力，无需声明。
///
/// 只有直接声明的能力会被编目：如果 `trait Greeter: Named`，
/// 声明 `dyn Greeter` 并不会自动声明 `dyn Named`。
pub trait Bean: Any + Send + Sync + Sized {
    /// 上下文文件中引用该类型时使用的类名
    fn class_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 声明该类型满足的能力
    fn declare_capabilities(_capabilities: &mut CapabilitySet<Self>) {}
}

/// 单个能力视图：同一实例以某个能力类型呈现
struct CapabilityView {
    key: TypeKey,
    /// 实际存放 `Arc<C>`
    view: Box<dyn Any + Send + Sync>,
}

/// 能力声明集合
///
/// 第一项总是具体类型本身，其余按声明顺序排列，同一能力只记录一次。
pub struct CapabilitySet<T> {
    instance: Arc<T>,
    views: Vec<CapabilityView>,
}

impl<T: Bean> CapabilitySet<T> {
    fn new(instance: Arc<T>) -> Self {
        let own = CapabilityView {
            key: TypeKey::of::<T>(),
            view: Box::new(Arc::clone(&instance)),
        };
        Self {
            instance,
            views: vec![own],
        }
    }

    /// 声明能力 `C`
    ///
    /// `cast` 必须返回同一实例的视图，通常写作 `|it| it`。
    /// 返回其他实例的声明会被忽略。
    pub fn provide<C>(&mut self, cast: fn(Arc<T>) -> Arc<C>) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<C>();
        if self.contains(&key) {
            trace!("能力已声明，忽略重复声明: {} -> {}", T::class_name(), key);
            return self;
        }

        let view = cast(Arc::clone(&self.instance));
        if Arc::as_ptr(&view).cast::<()>() != Arc::as_ptr(&self.instance).cast::<()>() {
            warn!("能力视图不是同一实例，忽略声明: {} -> {}", T::class_name(), key);
            return self;
        }

        self.views.push(CapabilityView {
            key,
            view: Box::new(view),
        });
        self
    }

    /// 是否已声明能力
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.views.iter().any(|v| v.key == *key)
    }

    /// 已声明的能力数量（包含具体类型本身）
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// 总是包含具体类型本身，因此永不为空
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// 对象身份
///
/// 即共享实例的分配地址。只要持有对应的 [`BeanRef`]，地址就不会被复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

struct BeanInner {
    concrete: TypeKey,
    class_name: &'static str,
    instance: SharedInstance,
    views: Vec<CapabilityView>,
}

/// 已注册对象的共享句柄
///
/// 克隆只增加引用计数。两个句柄是否代表同一对象只看 [`ObjectId`]。
#[derive(Clone)]
pub struct BeanRef {
    inner: Arc<BeanInner>,
}

impl BeanRef {
    /// 包装一个新实例
    pub fn new<T: Bean>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// 包装已共享的实例
    ///
    /// 对同一个 `Arc` 调用两次得到的两个句柄身份相同。
    pub fn from_arc<T: Bean>(instance: Arc<T>) -> Self {
        let mut capabilities = CapabilitySet::new(Arc::clone(&instance));
        T::declare_capabilities(&mut capabilities);

        Self {
            inner: Arc::new(BeanInner {
                concrete: TypeKey::of::<T>(),
                class_name: T::class_name(),
                instance,
                views: capabilities.views,
            }),
        }
    }

    /// 对象身份
    pub fn object_id(&self) -> ObjectId {
        ObjectId(Arc::as_ptr(&self.inner.instance).cast::<()>() as usize)
    }

    /// 是否与另一个句柄代表同一对象
    pub fn is_same(&self, other: &BeanRef) -> bool {
        self.object_id() == other.object_id()
    }

    /// 具体类型
    pub fn concrete_type(&self) -> TypeKey {
        self.inner.concrete
    }

    /// 类名
    pub fn class_name(&self) -> &'static str {
        self.inner.class_name
    }

    /// 满足的全部能力，具体类型在前，其余按声明顺序
    pub fn capabilities(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.inner.views.iter().map(|v| v.key)
    }

    /// 是否满足指定能力
    pub fn satisfies(&self, key: &TypeKey) -> bool {
        self.inner.views.iter().any(|v| v.key == *key)
    }

    /// 以能力 `C` 的形式获取实例
    pub fn view<C: ?Sized + 'static>(&self) -> Option<Arc<C>> {
        let id = TypeId::of::<C>();
        self.inner
            .views
            .iter()
            .find(|v| v.key.id() == id)
            .and_then(|v| v.view.downcast_ref::<Arc<C>>())
            .cloned()
    }

    /// 获取具体类型的实例
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner.instance).downcast::<T>().ok()
    }

    /// 类型擦除后的实例
    pub fn instance(&self) -> &SharedInstance {
        &self.inner.instance
    }
}

impl fmt::Debug for BeanRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRef")
            .field("class", &self.inner.class_name)
            .field("object_id", &self.object_id())
            .field(
                "capabilities",
                &self.capabilities().map(|k| k.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
