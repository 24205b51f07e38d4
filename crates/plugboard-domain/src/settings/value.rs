//! Runtime-typed setting access
//!
//! Callers that only hold a type token at runtime ask for a setting with a
//! [`SettingType`] and receive a tagged [`SettingValue`].

use std::any::Any;
use std::fmt;

use serde::de::DeserializeOwned;

use super::Settings;
use crate::error::Result;
use crate::value_objects::TypeRef;

/// Reads one setting as a concrete object type
pub type ObjectReader = fn(&Settings, &str) -> Result<Box<dyn Any>>;

/// Runtime token for the target type of a setting
#[derive(Clone)]
pub enum SettingType {
    String,
    Bool,
    Integer,
    Unsigned,
    Float,
    Char,
    /// Structured type bound through the settings' data parser
    Object(ObjectType),
    /// Trait object; cannot be constructed from a setting
    Interface(TypeRef),
}

impl SettingType {
    pub fn object<T: DeserializeOwned + 'static>() -> Self {
        Self::Object(ObjectType {
            type_ref: TypeRef::of::<T>(),
            read: read_object::<T>,
        })
    }

    pub fn interface<T: ?Sized + 'static>() -> Self {
        Self::Interface(TypeRef::of::<T>())
    }
}

impl fmt::Debug for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Bool => f.write_str("Bool"),
            Self::Integer => f.write_str("Integer"),
            Self::Unsigned => f.write_str("Unsigned"),
            Self::Float => f.write_str("Float"),
            Self::Char => f.write_str("Char"),
            Self::Object(object) => f.debug_tuple("Object").field(&object.type_ref).finish(),
            Self::Interface(type_ref) => f.debug_tuple("Interface").field(type_ref).finish(),
        }
    }
}

/// Structured target type with its reader
#[derive(Clone, Copy)]
pub struct ObjectType {
    type_ref: TypeRef,
    read: ObjectReader,
}

impl ObjectType {
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub(crate) fn read(&self, settings: &Settings, name: &str) -> Result<Box<dyn Any>> {
        (self.read)(settings, name)
    }
}

fn read_object<T: DeserializeOwned + 'static>(settings: &Settings, name: &str) -> Result<Box<dyn Any>> {
    settings
        .get::<T>(name)
        .map(|value| Box::new(value) as Box<dyn Any>)
}

/// Setting converted for a [`SettingType`]
pub enum SettingValue {
    String(String),
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Char(char),
    Object(Box<dyn Any>),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Unsigned(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(value) => Some(*value),
            _ => None,
        }
    }

    /// Take the object out of an `Object` value
    pub fn downcast<T: 'static>(self) -> Option<T> {
        match self {
            Self::Object(value) => value.downcast::<T>().ok().map(|boxed| *boxed),
            _ => None,
        }
    }
}

impl fmt::Debug for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.debug_tuple("String").field(value).finish(),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Self::Unsigned(value) => f.debug_tuple("Unsigned").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Char(value) => f.debug_tuple("Char").field(value).finish(),
            Self::Object(_) => f.write_str("Object(..)"),
        }
    }
}
