use std::{
    collections::HashMap,
    rc::{Rc, Weak},
};

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::class::{Class, ClassInstance},
};

/// A mapping from identifier to value handle; the unit of scoping.
///
/// The root closure holds top-level bindings, every method call gets a fresh
/// one, and each class instance uses one for its fields. Assignment creates
/// or overwrites a binding.
pub type Closure = HashMap<String, ValueHandle>;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, method returns, and conditions. Values live on the heap and
/// are shared through [`ValueHandle`]s.
#[derive(Debug)]
pub enum Value {
    /// A 64-bit signed integer.
    Number(i64),
    /// A string, compared lexicographically by its bytes.
    String(String),
    /// A boolean value, printed as `True` or `False`.
    Bool(bool),
    /// A class; printed as `Class <name>`.
    Class(Rc<Class>),
    /// An instance of a class with its own fields.
    Instance(ClassInstance),
}

impl Value {
    /// Returns a short description of the value's type, used in error
    /// messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::String(_) => "a string",
            Self::Bool(_) => "a boolean",
            Self::Class(_) => "a class",
            Self::Instance(_) => "a class instance",
        }
    }
}

/// A reference to a runtime value, or the distinguished none.
///
/// Handles come in two dereferenceable flavors that callers do not need to
/// distinguish:
///
/// - `Owned` shares ownership of the value; the value lives at least as long
///   as the last owning handle.
/// - `Borrowed` aliases a value owned elsewhere. It is used for the `self`
///   binding inside method calls, so that a method sees the live instance
///   without keeping it alive: an instance owning a field that owns the
///   instance again would otherwise never be released.
///
/// Handles are cheap to clone and are the unit of transfer in and out of
/// every evaluation step.
#[derive(Clone, Debug, Default)]
pub enum ValueHandle {
    /// The absent value, rendered as `None`.
    #[default]
    None,
    /// A shared owner of the value.
    Owned(Rc<Value>),
    /// A non-owning alias of a value owned elsewhere.
    Borrowed(Weak<Value>),
}

impl ValueHandle {
    /// Creates an owning handle to a fresh heap allocation of `value`.
    #[must_use]
    pub fn owned(value: Value) -> Self {
        Self::Owned(Rc::new(value))
    }

    /// Creates the none handle.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a non-owning handle aliasing the same value as `self`.
    #[must_use]
    pub fn borrowed(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Owned(object) => Self::Borrowed(Rc::downgrade(object)),
            Self::Borrowed(weak) => Self::Borrowed(weak.clone()),
        }
    }

    /// Dereferences the handle.
    ///
    /// Returns `None` for the none handle, and for a borrowed handle whose
    /// value has been dropped; such a handle behaves like none from then on.
    #[must_use]
    pub fn get(&self) -> Option<Rc<Value>> {
        match self {
            Self::None => None,
            Self::Owned(object) => Some(Rc::clone(object)),
            Self::Borrowed(weak) => weak.upgrade(),
        }
    }

    /// Reports the truthiness of the value behind the handle.
    ///
    /// None is false; numbers are true when nonzero; strings when nonempty;
    /// booleans carry their own truth; classes and instances are false.
    ///
    /// # Example
    /// ```
    /// use mython::interpreter::value::core::{Value, ValueHandle};
    ///
    /// assert!(ValueHandle::owned(Value::Number(3)).is_true());
    /// assert!(!ValueHandle::owned(Value::String(String::new())).is_true());
    /// assert!(!ValueHandle::none().is_true());
    /// ```
    #[must_use]
    pub fn is_true(&self) -> bool {
        match self.get().as_deref() {
            Some(Value::Number(n)) => *n != 0,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(Value::Class(_) | Value::Instance(_)) | None => false,
        }
    }

    /// Returns a short description of the referenced value's type, used in
    /// error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.get().map_or("None", |object| object.type_name())
    }

    /// Renders the referenced value to a string.
    ///
    /// Numbers render in decimal, strings as their raw content without
    /// quotes, booleans as `True`/`False`, classes as `Class <name>`, and
    /// the none handle as `None`. An instance whose class defines a
    /// zero-argument `__str__` renders as that method's result; otherwise an
    /// identity string based on the instance address is produced.
    ///
    /// # Errors
    /// Propagates any runtime error raised by a `__str__` method.
    ///
    /// # Example
    /// ```
    /// use mython::interpreter::{
    ///     evaluator::core::Context,
    ///     value::core::{Value, ValueHandle},
    /// };
    ///
    /// let mut sink: Vec<u8> = Vec::new();
    /// let mut context = Context::new(&mut sink);
    ///
    /// let value = ValueHandle::owned(Value::Bool(true));
    /// assert_eq!(value.render(1, &mut context).unwrap(), "True");
    /// assert_eq!(ValueHandle::none().render(1, &mut context).unwrap(), "None");
    /// ```
    pub fn render(&self, line: usize, context: &mut Context<'_>) -> EvalResult<String> {
        let Some(object) = self.get() else {
            return Ok("None".to_string());
        };

        match object.as_ref() {
            Value::Number(n) => Ok(n.to_string()),
            Value::String(s) => Ok(s.clone()),
            Value::Bool(b) => Ok(if *b { "True" } else { "False" }.to_string()),
            Value::Class(class) => Ok(format!("Class {}", class.name())),
            Value::Instance(instance) => {
                if instance.has_method("__str__", 0) {
                    let result = self.call_method("__str__", Vec::new(), line, context)?;
                    result.render(line, context)
                } else {
                    Ok(format!("<{} object at {:p}>",
                               instance.class().name(),
                               Rc::as_ptr(&object)))
                }
            },
        }
    }
}

impl From<i64> for ValueHandle {
    fn from(v: i64) -> Self {
        Self::owned(Value::Number(v))
    }
}

impl From<&str> for ValueHandle {
    fn from(v: &str) -> Self {
        Self::owned(Value::String(v.to_string()))
    }
}

impl From<bool> for ValueHandle {
    fn from(v: bool) -> Self {
        Self::owned(Value::Bool(v))
    }
}
