//! Provider factory
//!
//! Builds one provider instance from a descriptor: check assignability,
//! construct through the dependency resolver, inject name, group and
//! settings, then hand the instance out as the requested capability.

use std::sync::Arc;

use plugboard_domain::{
    DependencyResolver, Error, Provider, ProviderDescriptor, Result, TypeRef, dependency_resolver,
};
use tracing::debug;

/// Creates providers from descriptors
///
/// Without an explicit resolver the process-wide resolver is read on every
/// call.
#[derive(Clone, Default)]
pub struct ProviderFactory {
    resolver: Option<Arc<dyn DependencyResolver>>,
}

impl ProviderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory that constructs through `resolver`
    pub fn with_resolver(resolver: Arc<dyn DependencyResolver>) -> Self {
        Self {
            resolver: Some(resolver),
        }
    }

    /// Create the provider described by `descriptor` as capability `T`.
    ///
    /// Every failure is a `CreateProvider` error.
    pub fn create<T: ?Sized + Provider>(&self, descriptor: &ProviderDescriptor) -> Result<Box<T>> {
        self.try_create::<T>(descriptor)
            .map_err(|e| e.wrap_create_provider("Error creating provider"))
    }

    fn try_create<T: ?Sized + Provider>(&self, descriptor: &ProviderDescriptor) -> Result<Box<T>> {
        let provider_type = descriptor.provider_type();
        if !provider_type.is_assignable_to::<T>() {
            return Err(Error::create_provider(format!(
                "{} should be assignable from {}",
                TypeRef::of::<T>().short_name(),
                provider_type.name()
            )));
        }

        let resolver = self
            .resolver
            .clone()
            .unwrap_or_else(dependency_resolver::current);
        let mut instance = resolver.resolve(provider_type.type_ref()).ok_or_else(|| {
            Error::create_provider(format!(
                "Could not create instance of {}. Providers with required constructor \
                 arguments need a custom DependencyResolver",
                provider_type.name()
            ))
        })?;

        if !provider_type.inject(&mut *instance, &descriptor.meta()) {
            return Err(Error::create_provider(format!(
                "Resolver returned an instance that is not a {}",
                provider_type.name()
            )));
        }

        let provider = provider_type.cast::<T>(instance).ok_or_else(|| {
            Error::create_provider(format!(
                "{} could not be converted to {}",
                provider_type.name(),
                TypeRef::of::<T>().short_name()
            ))
        })?;

        debug!(
            name = descriptor.name(),
            group = descriptor.group(),
            provider_type = provider_type.name(),
            "Provider created"
        );
        Ok(provider)
    }
}

impl std::fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}
