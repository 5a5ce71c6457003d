/// Comparison evaluation.
///
/// Implements the primitive `Equal` and `Less` comparators, including
/// `__eq__`/`__lt__` dispatch for instances, and derives the remaining
/// comparators from them.
pub mod comparison;

/// Arithmetic evaluation.
///
/// Dispatches `+`, `-`, `*` and `/` over the operand types, covering
/// integer arithmetic, string concatenation and `__add__` dispatch.
pub mod core;

/// Logical connective evaluation.
///
/// Implements the short-circuiting `and`/`or` and the `not` negation over
/// value truthiness.
pub mod logic;
