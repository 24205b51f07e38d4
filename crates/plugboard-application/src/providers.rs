//! Untyped provider façade
//!
//! [`Providers`] holds one descriptor set and hands out registries for any
//! capability over that same set, without creating anything up front.
//! Loader output with provider-wide settings goes through
//! [`ProviderManager`](crate::ProviderManager), which keeps both.

use std::sync::Arc;

use plugboard_domain::{Error, Provider, ProviderDescriptor, Result, TypeRef};

use crate::factory::ProviderFactory;
use crate::registry::{ProviderIter, ProviderRegistry, select_by_name};

/// All configured providers, re-typable per query
#[derive(Clone, Debug)]
pub struct Providers {
    descriptors: Arc<[ProviderDescriptor]>,
    factory: Arc<ProviderFactory>,
    all: ProviderRegistry<dyn Provider>,
}

impl Providers {
    /// Fails with `InvalidArgument` when `descriptors` is empty
    pub fn new(descriptors: Vec<ProviderDescriptor>) -> Result<Self> {
        Self::with_factory(descriptors, ProviderFactory::new())
    }

    pub fn with_factory(descriptors: Vec<ProviderDescriptor>, factory: ProviderFactory) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(Error::invalid_argument(
                "providers require at least one descriptor",
            ));
        }
        let descriptors: Arc<[ProviderDescriptor]> = descriptors.into();
        let factory = Arc::new(factory);
        let all = ProviderRegistry::lazy(Arc::clone(&descriptors), Arc::clone(&factory));
        Ok(Self {
            descriptors,
            factory,
            all,
        })
    }

    /// Every enabled provider
    pub fn all(&self) -> &ProviderRegistry<dyn Provider> {
        &self.all
    }

    /// The same descriptor set viewed as capability `U`
    pub fn all_of<U: ?Sized + Provider>(&self) -> ProviderRegistry<U> {
        ProviderRegistry::lazy(Arc::clone(&self.descriptors), Arc::clone(&self.factory))
    }

    pub fn by_group(&self, group: &str) -> ProviderRegistry<dyn Provider> {
        self.all.by_group(group)
    }

    pub fn by_group_of<U: ?Sized + Provider>(&self, group: &str) -> ProviderRegistry<U> {
        self.all_of::<U>().by_group(group)
    }

    pub fn by_name(&self, name: &str) -> Result<Option<Arc<dyn Provider>>> {
        self.all.by_name(name)
    }

    pub fn by_name_of<U: ?Sized + Provider>(&self, name: &str) -> Result<Option<Arc<U>>> {
        self.all_of::<U>().by_name(name)
    }

    /// Provider named `name` whose type implements the capability
    /// `capability`, for callers that only hold a runtime token.
    ///
    /// ```ignore
    /// let sms = providers.by_name_as("Twilio", &TypeRef::of::<dyn SmsProvider>())?;
    /// ```
    pub fn by_name_as(&self, name: &str, capability: &TypeRef) -> Result<Option<Arc<dyn Provider>>> {
        let found = select_by_name(&self.descriptors, name, capability, |t| {
            t.is_assignable_to_id(capability.id())
        })?;
        found
            .map(|d| self.factory.create::<dyn Provider>(d).map(Arc::from))
            .transpose()
    }

    /// Number of enabled providers, by full enumeration
    pub fn count(&self) -> Result<usize> {
        self.all.count()
    }

    pub fn iter(&self) -> ProviderIter<'_, dyn Provider> {
        self.all.iter()
    }

    pub fn descriptors(&self) -> &[ProviderDescriptor] {
        &self.descriptors
    }
}

impl<'a> IntoIterator for &'a Providers {
    type Item = Result<Arc<dyn Provider>>;
    type IntoIter = ProviderIter<'a, dyn Provider>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
