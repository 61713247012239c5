//! Attaching methods to types when they are defined.
//!
//! There is no implicit hook that fires when a type is declared, so every
//! type opts in by calling [`Registry::define`] next to its definition.
//! The [`Builder::init_subclass`] hook then attaches `method_a`; a separate
//! [`Registry::decorate`] pass attaches `method_b` after the fact.
//!
//! ```
//! use builder_hook::{Builder, Registry};
//!
//! #[derive(Debug)]
//! struct Klass;
//! impl Builder for Klass {}
//!
//! let mut registry = Registry::new();
//! registry.define::<Klass>().decorate::<Klass>();
//!
//! assert_eq!(
//!     registry.call(&Klass, "method_a").as_deref(),
//!     Some("Builder.init_subclass:method_a(Klass)"),
//! );
//! assert_eq!(
//!     registry.call(&Klass, "method_b").as_deref(),
//!     Some("deco:method_b(Klass)"),
//! );
//! ```

use std::any::{type_name, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use tracing::debug;

pub type Method = fn(&dyn Debug) -> String;

pub trait Builder: Debug + 'static {
    /// Runs once per type, when the type is defined.
    fn init_subclass(registry: &mut Registry)
    where
        Self: Sized,
    {
        registry.attach::<Self>("method_a", method_a);
    }
}

fn method_a(this: &dyn Debug) -> String {
    format!("Builder.init_subclass:method_a({this:?})")
}

fn method_b(this: &dyn Debug) -> String { format!("deco:method_b({this:?})") }

struct Entry {
    name: &'static str,
    defined: bool,
    methods: BTreeMap<&'static str, Method>,
}

#[derive(Default)]
pub struct Registry {
    types: HashMap<TypeId, Entry>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    fn entry<T: 'static>(&mut self) -> &mut Entry {
        self.types.entry(TypeId::of::<T>()).or_insert_with(|| Entry {
            name: type_name::<T>(),
            defined: false,
            methods: BTreeMap::new(),
        })
    }

    /// Runs the definition hook of `T`. A second definition of the same
    /// type is ignored.
    pub fn define<T: Builder>(&mut self) -> &mut Self {
        let entry = self.entry::<T>();
        if entry.defined {
            debug!(ty = entry.name, "already defined");
            return self;
        }
        entry.defined = true;
        debug!(ty = entry.name, "init_subclass");
        T::init_subclass(self);
        self
    }

    /// Attaches `method_b` to `T`, defined or not.
    pub fn decorate<T: Debug + 'static>(&mut self) -> &mut Self {
        debug!(ty = type_name::<T>(), "deco");
        self.attach::<T>("method_b", method_b)
    }

    /// Attaches `method` under `name`, replacing any previous one.
    pub fn attach<T: Debug + 'static>(
        &mut self,
        name: &'static str,
        method: Method,
    ) -> &mut Self {
        self.entry::<T>().methods.insert(name, method);
        self
    }

    pub fn is_defined<T: 'static>(&self) -> bool {
        self.types.get(&TypeId::of::<T>()).is_some_and(|e| e.defined)
    }

    pub fn methods<T: 'static>(&self) -> Vec<&'static str> {
        self.types
            .get(&TypeId::of::<T>())
            .map(|e| e.methods.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn call<T: Debug + 'static>(
        &self,
        this: &T,
        name: &str,
    ) -> Option<String> {
        let method = self.types.get(&TypeId::of::<T>())?.methods.get(name)?;
        Some(method(this))
    }
}
