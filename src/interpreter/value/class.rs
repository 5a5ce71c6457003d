use std::{
    cell::{Ref, RefCell, RefMut},
    collections::HashMap,
    rc::Rc,
};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Closure, Value, ValueHandle},
    },
};

/// A named method with its formal parameter list and body.
///
/// The formal parameters exclude the implicit `self`; the body is wrapped in
/// a `MethodBody` statement by the parser so that `return` is caught at the
/// method boundary.
#[derive(Debug, Clone)]
pub struct Method {
    /// The name of the method.
    pub name:          String,
    /// The declared parameter names, without `self`.
    pub formal_params: Vec<String>,
    /// The statement executed when the method is called.
    pub body:          Statement,
}

/// A class: a name, a method table, and an optional parent class.
///
/// Method lookup searches this class first and then walks the parent chain;
/// the first match wins.
#[derive(Debug)]
pub struct Class {
    name:    String,
    methods: HashMap<String, Method>,
    parent:  Option<Rc<Class>>,
}

impl Class {
    /// Creates a class from its name, methods and optional parent.
    ///
    /// # Errors
    /// Fails with [`RuntimeError::DuplicateMethod`] when two methods share a
    /// name within this class.
    ///
    /// # Example
    /// ```
    /// use mython::{
    ///     ast::Statement,
    ///     interpreter::value::class::{Class, Method},
    /// };
    ///
    /// let body = Statement::MethodBody { body: Box::new(Statement::Compound { statements: vec![] }) };
    /// let method = Method { name:          "area".to_string(),
    ///                       formal_params: vec![],
    ///                       body, };
    ///
    /// let class = Class::new("Rect".to_string(), vec![method.clone()], None).unwrap();
    /// assert!(class.has_method("area", 0));
    ///
    /// let duplicated = Class::new("Rect".to_string(), vec![method.clone(), method], None);
    /// assert!(duplicated.is_err());
    /// ```
    pub fn new(name: String,
               methods: Vec<Method>,
               parent: Option<Rc<Self>>)
               -> Result<Self, RuntimeError> {
        let mut table = HashMap::with_capacity(methods.len());

        for method in methods {
            if table.contains_key(&method.name) {
                return Err(RuntimeError::DuplicateMethod { class:  name,
                                                           method: method.name, });
            }
            table.insert(method.name.clone(), method);
        }

        Ok(Self { name,
                  methods: table,
                  parent })
    }

    /// Returns the name of the class.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent class, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Looks up a method by name in this class and then in the parent chain.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        if let Some(method) = self.methods.get(name) {
            return Some(method);
        }

        self.parent.as_ref().and_then(|parent| parent.method(name))
    }

    /// Reports whether the class (or an ancestor) has a method with the given
    /// name taking exactly `argument_count` arguments, `self` excluded.
    #[must_use]
    pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
        self.method(name)
            .is_some_and(|method| method.formal_params.len() == argument_count)
    }
}

/// An instance of a class.
///
/// Carries a reference to its class and a closure of per-instance fields.
/// Fields appear when they are first assigned, usually inside `__init__`;
/// reading a field before it is assigned is a runtime failure.
pub struct ClassInstance {
    class:  Rc<Class>,
    fields: RefCell<Closure>,
}

impl ClassInstance {
    /// Creates an instance of `class` with no fields.
    #[must_use]
    pub fn new(class: Rc<Class>) -> Self {
        Self { class,
               fields: RefCell::new(Closure::new()) }
    }

    /// Returns the class of this instance.
    #[must_use]
    pub const fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Borrows the instance fields for reading.
    #[must_use]
    pub fn fields(&self) -> Ref<'_, Closure> {
        self.fields.borrow()
    }

    /// Borrows the instance fields for writing.
    #[must_use]
    pub fn fields_mut(&self) -> RefMut<'_, Closure> {
        self.fields.borrow_mut()
    }

    /// Reports whether the instance's class has a matching method; see
    /// [`Class::has_method`].
    #[must_use]
    pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
        self.class.has_method(name, argument_count)
    }
}

// Instances can refer to each other through their fields, so the derived
// representation could recurse forever; show only the class.
impl std::fmt::Debug for ClassInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassInstance")
         .field("class", &self.class.name())
         .finish_non_exhaustive()
    }
}

impl ValueHandle {
    /// Calls a method on the instance behind this handle.
    ///
    /// The method is resolved through the instance's class chain and must
    /// take exactly `args.len()` arguments. A fresh local closure is built
    /// with `self` bound to a borrowed alias of this handle plus each formal
    /// parameter bound to its actual, and the method body runs in it. A
    /// `return` anywhere in the body surfaces here as the call result; a
    /// body that finishes without returning yields none.
    ///
    /// # Errors
    /// Fails when the handle does not refer to a class instance, or when no
    /// method with the given name and arity exists.
    pub fn call_method(&self,
                       method: &str,
                       args: Vec<Self>,
                       line: usize,
                       context: &mut Context<'_>)
                       -> EvalResult<Self> {
        let Some(object) = self.get() else {
            return Err(RuntimeError::NotAnInstance { line });
        };
        let Value::Instance(instance) = object.as_ref() else {
            return Err(RuntimeError::NotAnInstance { line });
        };

        let class = instance.class();
        let found = class.method(method)
                         .filter(|m| m.formal_params.len() == args.len())
                         .ok_or_else(|| RuntimeError::UnknownMethod { class:  class.name()
                                                                                   .to_string(),
                                                                      method: method.to_string(),
                                                                      line })?;

        let mut local = Closure::new();
        local.insert("self".to_string(), self.borrowed());
        for (param, value) in found.formal_params.iter().zip(args) {
            local.insert(param.clone(), value);
        }

        Ok(context.exec(&found.body, &mut local)?.into_value())
    }
}
