//! Typed per-node annotations.
//!
//! An [`AnnotationKey<T>`] fixes the value type at the key's declaration, so
//! `set` and `get` through the same key always agree on `T`. Two keys with the
//! same name but different value types occupy separate slots.
//!
//! Values are stored type-erased, but the slot key includes the `TypeId` of
//! the key's `T`, so the downcast on read never fails.
//!
//! ```rust
//! use wikitree_ast::AnnotationKey;
//!
//! const CONVERTED: AnnotationKey<bool> = AnnotationKey::new("converted");
//! assert_eq!(CONVERTED.name(), "converted");
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A typed annotation key.
pub struct AnnotationKey<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> AnnotationKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for AnnotationKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AnnotationKey<T> {}

impl<T> fmt::Debug for AnnotationKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnnotationKey").field(&self.name).finish()
    }
}

type Slot = (&'static str, TypeId);

/// Annotation values attached to one node.
#[derive(Default)]
pub struct AnnotationStore {
    values: HashMap<Slot, Box<dyn Any>>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if any.
    pub fn get<T: Any>(&self, key: AnnotationKey<T>) -> Option<&T> {
        self.values
            .get(&(key.name, TypeId::of::<T>()))
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set<T: Any>(&mut self, key: AnnotationKey<T>, value: T) {
        self.values
            .insert((key.name, TypeId::of::<T>()), Box::new(value));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for AnnotationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.values.keys().map(|(name, _)| name))
            .finish()
    }
}
