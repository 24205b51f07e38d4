//! Runtime type tokens

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Zero-argument constructor producing a type-erased instance
pub type Constructor = fn() -> Box<dyn Any>;

/// Identifies a type at runtime, optionally with its parameterless constructor.
///
/// Stands in for a reflected type: the identity is the [`TypeId`], the name
/// is only used for messages. A `TypeRef` built with [`TypeRef::constructible`]
/// can be instantiated by the [`ActivatorResolver`](crate::ActivatorResolver).
#[derive(Clone, Copy)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
    constructor: Option<Constructor>,
}

impl TypeRef {
    /// Token for `T`, without a constructor
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            constructor: None,
        }
    }

    /// Token for `T` that carries `T::default` as its constructor
    pub fn constructible<T: Default + 'static>() -> Self {
        Self {
            constructor: Some(construct_default::<T>),
            ..Self::of::<T>()
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        match base.rfind("::") {
            Some(idx) => &self.name[idx + 2..],
            None => self.name,
        }
    }

    pub fn constructor(&self) -> Option<Constructor> {
        self.constructor
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

fn construct_default<T: Default + 'static>() -> Box<dyn Any> {
    Box::new(T::default())
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRef")
            .field("name", &self.name)
            .field("constructible", &self.constructor.is_some())
            .finish()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
