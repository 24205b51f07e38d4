//! Type-filtered provider registry
//!
//! A [`ProviderRegistry<T>`] is either backed by descriptors and a factory
//! (lazy) or by already-built instances (eager).
//!
//! Lazy enumeration is not memoized: every pass over a lazy registry
//! creates fresh instances with freshly injected settings. Call
//! [`materialize`](ProviderRegistry::materialize) to keep one set.

use std::fmt;
use std::sync::Arc;

use plugboard_domain::utils::eq_ignore_case;
use plugboard_domain::{Error, Provider, ProviderDescriptor, ProviderType, Result, TypeRef};

use crate::factory::ProviderFactory;

enum Source<T: ?Sized> {
    Lazy {
        descriptors: Arc<[ProviderDescriptor]>,
        factory: Arc<ProviderFactory>,
    },
    Eager {
        instances: Arc<[Arc<T>]>,
    },
}

impl<T: ?Sized> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Lazy {
                descriptors,
                factory,
            } => Self::Lazy {
                descriptors: Arc::clone(descriptors),
                factory: Arc::clone(factory),
            },
            Self::Eager { instances } => Self::Eager {
                instances: Arc::clone(instances),
            },
        }
    }
}

/// Providers of capability `T`
pub struct ProviderRegistry<T: ?Sized> {
    source: Source<T>,
}

impl<T: ?Sized + Provider> ProviderRegistry<T> {
    /// Lazy registry over `descriptors` using the default factory.
    ///
    /// Fails with `InvalidArgument` when `descriptors` is empty.
    pub fn new(descriptors: Vec<ProviderDescriptor>) -> Result<Self> {
        Self::with_factory(descriptors, Arc::new(ProviderFactory::new()))
    }

    /// Lazy registry over `descriptors` using `factory`
    pub fn with_factory(
        descriptors: Vec<ProviderDescriptor>,
        factory: Arc<ProviderFactory>,
    ) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(Error::invalid_argument(
                "provider registry requires at least one descriptor",
            ));
        }
        Ok(Self::lazy(descriptors.into(), factory))
    }

    /// Eager registry over already-built instances
    pub fn from_instances(instances: Vec<Arc<T>>) -> Self {
        Self {
            source: Source::Eager {
                instances: instances.into(),
            },
        }
    }

    pub(crate) fn lazy(descriptors: Arc<[ProviderDescriptor]>, factory: Arc<ProviderFactory>) -> Self {
        Self {
            source: Source::Lazy {
                descriptors,
                factory,
            },
        }
    }

    /// This registry; it is already filtered to `T`
    #[must_use]
    pub fn all(&self) -> Self {
        self.clone()
    }

    /// Enumerate the providers.
    ///
    /// Lazy registries create each enabled, assignable descriptor as it is
    /// reached.
    pub fn iter(&self) -> ProviderIter<'_, T> {
        let inner = match &self.source {
            Source::Lazy {
                descriptors,
                factory,
            } => IterInner::Lazy {
                descriptors: descriptors.iter(),
                factory: factory.as_ref(),
            },
            Source::Eager { instances } => IterInner::Eager(instances.iter()),
        };
        ProviderIter { inner }
    }

    /// Providers whose group equals `group`, ignoring case
    #[must_use]
    pub fn by_group(&self, group: &str) -> Self {
        match &self.source {
            Source::Lazy {
                descriptors,
                factory,
            } => Self::lazy(
                descriptors
                    .iter()
                    .filter(|d| eq_ignore_case(d.group(), group))
                    .cloned()
                    .collect(),
                Arc::clone(factory),
            ),
            Source::Eager { instances } => Self {
                source: Source::Eager {
                    instances: instances
                        .iter()
                        .filter(|p| eq_ignore_case(p.group(), group))
                        .cloned()
                        .collect(),
                },
            },
        }
    }

    /// The provider named `name`, ignoring case.
    ///
    /// Returns `Ok(None)` when nothing matches and fails with
    /// `InvalidOperation` when more than one provider matches.
    pub fn by_name(&self, name: &str) -> Result<Option<Arc<T>>> {
        match &self.source {
            Source::Lazy {
                descriptors,
                factory,
            } => {
                let found = select_by_name(descriptors, name, &TypeRef::of::<T>(), |t| {
                    t.is_assignable_to::<T>()
                })?;
                found
                    .map(|d| factory.create::<T>(d).map(Arc::from))
                    .transpose()
            }
            Source::Eager { instances } => {
                let mut matches = instances.iter().filter(|p| eq_ignore_case(p.name(), name));
                let first = matches.next().cloned();
                if matches.next().is_some() {
                    return Err(ambiguous(name, &TypeRef::of::<T>()));
                }
                Ok(first)
            }
        }
    }

    /// Number of providers a full enumeration produces
    pub fn count(&self) -> Result<usize> {
        self.iter().try_fold(0, |count, provider| provider.map(|_| count + 1))
    }

    /// Enumerate into a vector, stopping at the first failure
    pub fn to_vec(&self) -> Result<Vec<Arc<T>>> {
        self.iter().collect()
    }

    /// Eager registry holding one enumeration of this registry
    pub fn materialize(&self) -> Result<Self> {
        self.to_vec().map(Self::from_instances)
    }

    /// Descriptors behind a lazy registry
    pub fn descriptors(&self) -> Option<&[ProviderDescriptor]> {
        match &self.source {
            Source::Lazy { descriptors, .. } => Some(&descriptors[..]),
            Source::Eager { .. } => None,
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self.source, Source::Lazy { .. })
    }
}

impl<T: ?Sized> Clone for ProviderRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ProviderRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Lazy { descriptors, .. } => f
                .debug_struct("ProviderRegistry")
                .field("mode", &"lazy")
                .field("descriptors", &descriptors.len())
                .finish(),
            Source::Eager { instances } => f
                .debug_struct("ProviderRegistry")
                .field("mode", &"eager")
                .field("instances", &instances.len())
                .finish(),
        }
    }
}

impl<'a, T: ?Sized + Provider> IntoIterator for &'a ProviderRegistry<T> {
    type Item = Result<Arc<T>>;
    type IntoIter = ProviderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`ProviderRegistry`]
pub struct ProviderIter<'a, T: ?Sized> {
    inner: IterInner<'a, T>,
}

enum IterInner<'a, T: ?Sized> {
    Lazy {
        descriptors: std::slice::Iter<'a, ProviderDescriptor>,
        factory: &'a ProviderFactory,
    },
    Eager(std::slice::Iter<'a, Arc<T>>),
}

impl<T: ?Sized + Provider> Iterator for ProviderIter<'_, T> {
    type Item = Result<Arc<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Lazy {
                descriptors,
                factory,
            } => {
                let descriptor = descriptors
                    .find(|d| d.enabled() && d.provider_type().is_assignable_to::<T>())?;
                Some(factory.create::<T>(descriptor).map(Arc::from))
            }
            IterInner::Eager(instances) => instances.next().map(|p| Ok(Arc::clone(p))),
        }
    }
}

/// The single enabled descriptor named `name` whose type `accepts`
pub(crate) fn select_by_name<'a>(
    descriptors: &'a [ProviderDescriptor],
    name: &str,
    capability: &TypeRef,
    accepts: impl Fn(&ProviderType) -> bool,
) -> Result<Option<&'a ProviderDescriptor>> {
    let mut matches = descriptors.iter().filter(|d| {
        d.enabled() && eq_ignore_case(d.name(), name) && accepts(d.provider_type())
    });
    let first = matches.next();
    if matches.next().is_some() {
        return Err(ambiguous(name, capability));
    }
    Ok(first)
}

fn ambiguous(name: &str, capability: &TypeRef) -> Error {
    Error::invalid_operation(format!(
        "more than one {} provider is named '{name}'",
        capability.short_name()
    ))
}
