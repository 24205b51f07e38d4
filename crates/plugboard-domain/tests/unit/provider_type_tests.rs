//! Unit tests for runtime provider types

use std::any::Any;

use plugboard_domain::{Provider, ProviderMeta, ProviderType, TypeRef};

trait Greeter: Provider {
    fn greet(&self) -> String;
}

trait Counter: Provider {}

#[derive(Default)]
struct English {
    meta: ProviderMeta,
}

impl Provider for English {
    fn meta(&self) -> &ProviderMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ProviderMeta {
        &mut self.meta
    }
}

impl Greeter for English {
    fn greet(&self) -> String {
        format!("hello from {}", self.name())
    }
}

fn english_type() -> ProviderType {
    ProviderType::builder::<English>()
        .implements::<dyn Greeter>(|p| p)
        .default_constructible()
        .build()
}

#[test]
fn test_assignability() {
    let english = english_type();
    assert!(english.is_assignable_to::<dyn Greeter>());
    assert!(english.is_assignable_to::<dyn Provider>());
    assert!(english.is_assignable_to::<English>());
    assert!(!english.is_assignable_to::<dyn Counter>());
    assert_eq!(english.name(), "English");
}

#[test]
fn test_inject_and_cast() {
    let english = english_type();
    let construct = english.type_ref().constructor().expect("constructible");
    let mut instance = construct();

    let meta = ProviderMeta::new("Uk", "Greeters", None);
    assert!(english.inject(&mut *instance, &meta));

    let greeter = english.cast::<dyn Greeter>(instance).expect("should cast");
    assert_eq!(greeter.greet(), "hello from Uk");
    assert_eq!(greeter.group(), "Greeters");
}

#[test]
fn test_cast_rejects_foreign_instance() {
    let english = english_type();
    let foreign: Box<dyn Any> = Box::new(42_u8);
    assert!(english.cast::<dyn Greeter>(foreign).is_none());

    let mut other: Box<dyn Any> = Box::new(String::new());
    assert!(!english.inject(&mut *other, &ProviderMeta::default()));
}

#[test]
fn test_equality_follows_concrete_type() {
    assert_eq!(english_type(), english_type());
    assert_eq!(english_type().type_ref(), &TypeRef::of::<English>());
    assert!(english_type().capabilities().len() >= 3);
}
