/// Classes, methods and instances.
///
/// Defines the `Class` type with its method table and optional parent, the
/// `ClassInstance` type carrying per-instance fields, and method invocation
/// with the implicit `self` binding.
pub mod class;

pub mod core;
