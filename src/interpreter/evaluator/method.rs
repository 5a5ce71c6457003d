use std::rc::Rc;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            class::{Class, ClassInstance},
            core::{Closure, Value, ValueHandle},
        },
    },
};

/// The constructor method invoked on instance creation.
const INIT_METHOD: &str = "__init__";

impl Context<'_> {
    /// Evaluates creation of a new instance.
    ///
    /// The instance starts with no fields. When the class defines an
    /// `__init__` whose arity matches the argument count, the arguments are
    /// evaluated left to right and the constructor runs on the fresh
    /// instance; otherwise the arguments are ignored unevaluated. Yields the
    /// new instance either way.
    pub(crate) fn eval_new_instance(&mut self,
                                    class: &Rc<Class>,
                                    args: &[Expr],
                                    line: usize,
                                    closure: &Closure)
                                    -> EvalResult<ValueHandle> {
        let instance = ValueHandle::owned(Value::Instance(ClassInstance::new(Rc::clone(class))));

        if class.has_method(INIT_METHOD, args.len()) {
            let mut actuals = Vec::with_capacity(args.len());
            for arg in args {
                actuals.push(self.eval(arg, closure)?);
            }
            instance.call_method(INIT_METHOD, actuals, line, self)?;
        }

        Ok(instance)
    }

    /// Evaluates a method call.
    ///
    /// The receiver expression is evaluated first; when it is not a class
    /// instance the call yields none and the arguments stay unevaluated.
    /// Otherwise the arguments are evaluated left to right and the method is
    /// invoked; a missing or wrong-arity method is a runtime failure.
    pub(crate) fn eval_method_call(&mut self,
                                   object: &Expr,
                                   method: &str,
                                   args: &[Expr],
                                   line: usize,
                                   closure: &Closure)
                                   -> EvalResult<ValueHandle> {
        let receiver = self.eval(object, closure)?;

        if !matches!(receiver.get().as_deref(), Some(Value::Instance(_))) {
            return Ok(ValueHandle::none());
        }

        let mut actuals = Vec::with_capacity(args.len());
        for arg in args {
            actuals.push(self.eval(arg, closure)?);
        }

        receiver.call_method(method, actuals, line, self)
    }

    /// Evaluates `str(...)`: renders the operand and yields a freshly owned
    /// string value.
    pub(crate) fn eval_stringify(&mut self,
                                 expr: &Expr,
                                 line: usize,
                                 closure: &Closure)
                                 -> EvalResult<ValueHandle> {
        let value = self.eval(expr, closure)?;
        let rendered = value.render(line, self)?;

        Ok(ValueHandle::owned(Value::String(rendered)))
    }
}
