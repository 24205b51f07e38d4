//! Constructor resolver tests

use std::sync::Arc;

use plugboard_application::ProviderFactory;
use plugboard_domain::{
    DependencyResolver, Provider, ProviderDescriptor, ProviderMeta, ProviderType, TypeRef,
};
use plugboard_infrastructure::ConstructorResolver;

use crate::fixtures::{Notifier, email_type};

struct WebhookNotifier {
    meta: ProviderMeta,
    url: String,
}

impl Provider for WebhookNotifier {
    fn meta(&self) -> &ProviderMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ProviderMeta {
        &mut self.meta
    }
}

impl Notifier for WebhookNotifier {
    fn channel(&self) -> &'static str {
        "webhook"
    }
}

fn webhook_type() -> ProviderType {
    ProviderType::builder::<WebhookNotifier>()
        .implements::<dyn Notifier>(|p| p)
        .build()
}

fn webhook_resolver() -> ConstructorResolver {
    ConstructorResolver::new().register(|| WebhookNotifier {
        meta: ProviderMeta::default(),
        url: "https://hooks.example/alerts".to_owned(),
    })
}

#[test]
fn test_registered_closure_builds_type() {
    let resolver = webhook_resolver();
    assert!(resolver.contains(&TypeRef::of::<WebhookNotifier>()));
    assert_eq!(resolver.len(), 1);

    let built = resolver
        .resolve(&TypeRef::of::<WebhookNotifier>())
        .and_then(|b| b.downcast::<WebhookNotifier>().ok())
        .expect("should build");
    assert_eq!(built.url, "https://hooks.example/alerts");
}

#[test]
fn test_unregistered_type_falls_back_to_activator() {
    let resolver = webhook_resolver();
    assert!(resolver.resolve(email_type().type_ref()).is_some());
    assert!(
        ConstructorResolver::strict()
            .resolve(email_type().type_ref())
            .is_none()
    );
    assert!(ConstructorResolver::strict().is_empty());
}

#[test]
fn test_factory_uses_constructor_resolver() {
    let factory = ProviderFactory::with_resolver(Arc::new(webhook_resolver()));
    let descriptor = ProviderDescriptor::new("Hook", "alerts", webhook_type(), None, true);

    let hook = factory
        .create::<dyn Notifier>(&descriptor)
        .expect("should create");
    assert_eq!(hook.channel(), "webhook");
    assert_eq!(hook.name(), "Hook");

    let email = factory
        .create::<dyn Notifier>(&ProviderDescriptor::new("Mail", "", email_type(), None, true))
        .expect("fallback builds parameterless types");
    assert_eq!(email.channel(), "email");
}
