//! Statically linked module convention.
//!
//! A module is a unit that yields a factory function. Calling the factory
//! produces a fresh value exposing the module's operations. Modules are
//! compiled into the program, so there is no lookup step: callers name the
//! module type and ask it for its factory.

use crate::record::NameHolder;

/// Factory function produced by a module
pub type Factory<T> = fn() -> T;

/// A unit of code that evaluates to a factory function
pub trait Module {
    /// Value produced by each call of the factory
    type Exports;

    /// Module name, as a host would refer to it
    const NAME: &'static str;

    /// The module's factory function
    fn factory() -> Factory<Self::Exports>;

    /// Call the factory once
    fn instantiate() -> Self::Exports {
        (Self::factory())()
    }
}

/// The name-holder module. Its factory yields independent [`NameHolder`] records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHolderModule;

impl Module for NameHolderModule {
    type Exports = NameHolder;

    const NAME: &'static str = "name_holder";

    fn factory() -> Factory<NameHolder> {
        NameHolder::new
    }
}
