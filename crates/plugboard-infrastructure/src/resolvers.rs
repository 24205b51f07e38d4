//! Closure-based dependency resolver
//!
//! Registers a build closure per provider type, for providers that need
//! constructor arguments. Types without a closure fall back to another
//! resolver (the activator by default).
//!
//! ```
//! use plugboard_domain::{DependencyResolver, TypeRef};
//! use plugboard_infrastructure::ConstructorResolver;
//!
//! struct Endpoint(String);
//!
//! let resolver = ConstructorResolver::new()
//!     .register(|| Endpoint("smtp://relay".into()));
//! let endpoint = resolver
//!     .resolve(&TypeRef::of::<Endpoint>())
//!     .and_then(|built| built.downcast::<Endpoint>().ok())
//!     .unwrap();
//! assert_eq!(endpoint.0, "smtp://relay");
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use plugboard_domain::{ActivatorResolver, DependencyResolver, TypeRef};
use tracing::debug;

type Build = Box<dyn Fn() -> Box<dyn Any> + Send + Sync>;

struct Registration {
    name: &'static str,
    build: Build,
}

/// Resolver backed by registered build closures
pub struct ConstructorResolver {
    constructors: HashMap<TypeId, Registration>,
    fallback: Option<Arc<dyn DependencyResolver>>,
}

impl Default for ConstructorResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstructorResolver {
    /// Resolver that falls back to parameterless construction
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            fallback: Some(Arc::new(ActivatorResolver)),
        }
    }

    /// Resolver that only builds registered types
    pub fn strict() -> Self {
        Self {
            constructors: HashMap::new(),
            fallback: None,
        }
    }

    /// Build `T` with `build`, replacing any earlier registration for `T`
    #[must_use]
    pub fn register<T, F>(mut self, build: F) -> Self
    where
        T: Any,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.constructors.insert(
            TypeId::of::<T>(),
            Registration {
                name: std::any::type_name::<T>(),
                build: Box::new(move || Box::new(build()) as Box<dyn Any>),
            },
        );
        self
    }

    pub fn contains(&self, type_ref: &TypeRef) -> bool {
        self.constructors.contains_key(&type_ref.id())
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl DependencyResolver for ConstructorResolver {
    fn resolve(&self, type_ref: &TypeRef) -> Option<Box<dyn Any>> {
        if let Some(registration) = self.constructors.get(&type_ref.id()) {
            debug!(type_name = registration.name, "Building registered type");
            return Some((registration.build)());
        }
        self.fallback
            .as_ref()
            .and_then(|fallback| fallback.resolve(type_ref))
    }

    fn dispose(&self) {
        debug!(registered = self.constructors.len(), "Constructor resolver disposed");
    }
}

impl fmt::Debug for ConstructorResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.constructors.values().map(|r| r.name).collect();
        names.sort_unstable();
        f.debug_struct("ConstructorResolver")
            .field("constructors", &names)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
