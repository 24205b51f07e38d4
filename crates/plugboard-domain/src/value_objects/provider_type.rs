//! Runtime handle for a concrete provider type
//!
//! A [`ProviderType`] records which capability traits a concrete provider can
//! be viewed as. Assignability ("can a `dyn SmsProvider` be built from this
//! type?") is a lookup of the capability's `TypeId`, and the conversion from
//! the constructed instance to `Box<dyn Capability>` goes through a caster
//! captured when the type was built.
//!
//! ```
//! use plugboard_domain::{Provider, ProviderMeta, ProviderType};
//!
//! trait Greeter: Provider {
//!     fn greet(&self) -> String;
//! }
//!
//! #[derive(Default)]
//! struct English {
//!     meta: ProviderMeta,
//! }
//!
//! impl Provider for English {
//!     fn meta(&self) -> &ProviderMeta { &self.meta }
//!     fn meta_mut(&mut self) -> &mut ProviderMeta { &mut self.meta }
//! }
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String { "hello".into() }
//! }
//!
//! let english = ProviderType::builder::<English>()
//!     .implements::<dyn Greeter>(|p| p)
//!     .default_constructible()
//!     .build();
//!
//! assert!(english.is_assignable_to::<dyn Greeter>());
//! assert!(english.is_assignable_to::<dyn Provider>());
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::type_ref::TypeRef;
use crate::ports::provider::{Provider, ProviderMeta};

/// Converts a boxed concrete instance into a boxed `Box<dyn Capability>`
type Caster = Arc<dyn Fn(Box<dyn Any>) -> Option<Box<dyn Any>> + Send + Sync>;

/// Writes name, group and settings into a concrete instance
type Injector = fn(&mut dyn Any, &ProviderMeta) -> bool;

struct Capability {
    name: &'static str,
    cast: Caster,
}

struct Inner {
    type_ref: TypeRef,
    capabilities: HashMap<TypeId, Capability>,
    inject: Injector,
}

/// Concrete provider type known at runtime
#[derive(Clone)]
pub struct ProviderType {
    inner: Arc<Inner>,
}

impl ProviderType {
    /// Start describing provider type `P`.
    ///
    /// `P` itself and `dyn Provider` are registered as capabilities.
    pub fn builder<P: Provider>() -> ProviderTypeBuilder<P> {
        ProviderTypeBuilder {
            type_ref: TypeRef::of::<P>(),
            capabilities: HashMap::new(),
            _marker: PhantomData,
        }
        .implements::<P>(|p| p)
        .implements::<dyn Provider>(|p| p)
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.inner.type_ref
    }

    /// Short type name used in messages
    pub fn name(&self) -> &'static str {
        self.inner.type_ref.short_name()
    }

    /// Fully qualified type name
    pub fn type_name(&self) -> &'static str {
        self.inner.type_ref.name()
    }

    /// Whether an instance of this type can be handed out as a `T`
    pub fn is_assignable_to<T: ?Sized + 'static>(&self) -> bool {
        self.is_assignable_to_id(TypeId::of::<T>())
    }

    /// Same as [`is_assignable_to`](Self::is_assignable_to) for a runtime token
    pub fn is_assignable_to_id(&self, capability: TypeId) -> bool {
        self.inner.capabilities.contains_key(&capability)
    }

    /// Names of all capabilities this type can be viewed as
    pub fn capabilities(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.capabilities.values().map(|c| c.name).collect();
        names.sort_unstable();
        names
    }

    /// Inject `meta` into an instance of this type.
    ///
    /// Returns `false` if `instance` is not of this type.
    pub fn inject(&self, instance: &mut dyn Any, meta: &ProviderMeta) -> bool {
        (self.inner.inject)(instance, meta)
    }

    /// View an instance of this type as capability `T`.
    ///
    /// Returns `None` when `T` is not a registered capability or `instance`
    /// is not of this type.
    pub fn cast<T: ?Sized + 'static>(&self, instance: Box<dyn Any>) -> Option<Box<T>> {
        let capability = self.inner.capabilities.get(&TypeId::of::<T>())?;
        let erased = (capability.cast)(instance)?;
        erased.downcast::<Box<T>>().ok().map(|boxed| *boxed)
    }
}

impl PartialEq for ProviderType {
    fn eq(&self, other: &Self) -> bool {
        self.inner.type_ref == other.inner.type_ref
    }
}

impl Eq for ProviderType {}

impl fmt::Debug for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderType")
            .field("type", &self.inner.type_ref.name())
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder for [`ProviderType`]
pub struct ProviderTypeBuilder<P> {
    type_ref: TypeRef,
    capabilities: HashMap<TypeId, Capability>,
    _marker: PhantomData<fn() -> P>,
}

impl<P: Provider> ProviderTypeBuilder<P> {
    /// Register capability `T`, usually a `dyn Trait`, with its coercion.
    ///
    /// The coercion is almost always the identity closure `|p| p`.
    pub fn implements<T: ?Sized + 'static>(mut self, cast: fn(Box<P>) -> Box<T>) -> Self {
        let caster: Caster = Arc::new(move |instance: Box<dyn Any>| {
            instance
                .downcast::<P>()
                .ok()
                .map(|concrete| Box::new(cast(concrete)) as Box<dyn Any>)
        });
        self.capabilities.insert(
            TypeId::of::<T>(),
            Capability {
                name: std::any::type_name::<T>(),
                cast: caster,
            },
        );
        self
    }

    pub fn build(self) -> ProviderType {
        ProviderType {
            inner: Arc::new(Inner {
                type_ref: self.type_ref,
                capabilities: self.capabilities,
                inject: inject_meta::<P>,
            }),
        }
    }
}

impl<P: Provider + Default> ProviderTypeBuilder<P> {
    /// Let the activator resolver build `P` through `P::default`
    pub fn default_constructible(mut self) -> Self {
        self.type_ref = TypeRef::constructible::<P>();
        self
    }
}

fn inject_meta<P: Provider>(instance: &mut dyn Any, meta: &ProviderMeta) -> bool {
    match instance.downcast_mut::<P>() {
        Some(provider) => {
            provider.set_name(meta.name.clone());
            provider.set_group(meta.group.clone());
            provider.set_settings(meta.settings.clone());
            true
        }
        None => false,
    }
}
