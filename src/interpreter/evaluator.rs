/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions:
/// arithmetic, comparisons, and the short-circuiting logical connectives.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context with the host
/// output sink, the execution flow type carrying non-local `return`, and
/// name resolution through dotted paths.
pub mod core;

/// Instance creation and method dispatch.
///
/// Evaluates `NewInstance`, `MethodCall` and `Stringify` expressions,
/// including constructor invocation through `__init__`.
pub mod method;

/// Statement execution.
///
/// Implements `print`, conditionals, statement sequences, class definition
/// binding, and the method-body frame that catches `return`.
pub mod statement;
