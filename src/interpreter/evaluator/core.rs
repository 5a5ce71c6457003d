use std::{io::Write, rc::Rc};

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement},
    error::RuntimeError,
    interpreter::value::core::{Closure, Value, ValueHandle},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of executing a statement.
///
/// `return` is the one non-local control flow construct in the evaluator:
/// instead of unwinding, every statement reports whether execution continues
/// normally or is carrying a return value toward the enclosing method body,
/// which is the single frame that converts `Returning` back to `Normal`.
#[derive(Debug)]
pub enum Flow {
    /// Sequential execution continues; the statement produced this value.
    Normal(ValueHandle),
    /// A `return` is unwinding; the value travels to the method boundary.
    Returning(ValueHandle),
}

impl Flow {
    /// Extracts the carried value, whichever way execution went.
    #[must_use]
    pub fn into_value(self) -> ValueHandle {
        match self {
            Self::Normal(value) | Self::Returning(value) => value,
        }
    }
}

/// Stores the runtime evaluation context.
///
/// The context owns the program's connection to the host: the writable sink
/// that `print` (and `__str__` rendering) targets. Scopes are not part of
/// the context; each evaluation step receives the closure it runs in.
pub struct Context<'a> {
    output: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    /// Creates an evaluation context writing program output to `output`.
    pub fn new(output: &'a mut dyn Write) -> Self {
        Self { output }
    }

    /// Returns the host output sink.
    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Executes a statement in the given closure.
    ///
    /// Dispatches on the statement variant; the returned [`Flow`] reports
    /// whether execution continues normally or is unwinding out of a
    /// `return`.
    ///
    /// # Errors
    /// Any runtime error raised while executing the statement.
    pub fn exec(&mut self, statement: &Statement, closure: &mut Closure) -> EvalResult<Flow> {
        match statement {
            Statement::Assignment { var, value, .. } => {
                let value = self.eval(value, closure)?;
                closure.insert(var.clone(), value.clone());
                Ok(Flow::Normal(value))
            },
            Statement::FieldAssignment { object,
                                         field,
                                         value,
                                         line, } => {
                self.exec_field_assignment(object, field, value, *line, closure)
            },
            Statement::Expression { expr } => Ok(Flow::Normal(self.eval(expr, closure)?)),
            Statement::Print { args, line } => self.exec_print(args, *line, closure),
            Statement::Return { value, .. } => {
                let value = self.eval(value, closure)?;
                Ok(Flow::Returning(value))
            },
            Statement::ClassDefinition { class, .. } => {
                closure.insert(class.name().to_string(),
                               ValueHandle::owned(Value::Class(Rc::clone(class))));
                Ok(Flow::Normal(ValueHandle::none()))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, .. } => {
                self.exec_if(condition, then_branch, else_branch.as_deref(), closure)
            },
            Statement::Compound { statements } => self.exec_compound(statements, closure),
            Statement::MethodBody { body } => self.exec_method_body(body, closure),
        }
    }

    /// Evaluates an expression in the given closure and returns the
    /// resulting value handle.
    ///
    /// # Errors
    /// Any runtime error raised while evaluating the expression.
    pub fn eval(&mut self, expr: &Expr, closure: &Closure) -> EvalResult<ValueHandle> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { dotted_ids, line } => Self::lookup_dotted(dotted_ids, *line, closure),
            Expr::NewInstance { class, args, line } => {
                self.eval_new_instance(class, args, *line, closure)
            },
            Expr::MethodCall { object,
                               method,
                               args,
                               line, } => {
                self.eval_method_call(object, method, args, *line, closure)
            },
            Expr::Stringify { expr, line } => self.eval_stringify(expr, *line, closure),
            Expr::BinaryOp { left, op, right, line } => match op {
                BinaryOperator::And => self.eval_and(left, right, closure),
                BinaryOperator::Or => self.eval_or(left, right, closure),
                _ => {
                    let lhs = self.eval(left, closure)?;
                    let rhs = self.eval(right, closure)?;
                    self.eval_arithmetic(*op, &lhs, &rhs, *line)
                },
            },
            Expr::Not { expr, .. } => self.eval_not(expr, closure),
            Expr::Comparison { cmp, left, right, line } => {
                let lhs = self.eval(left, closure)?;
                let rhs = self.eval(right, closure)?;
                self.compare(*cmp, &lhs, &rhs, *line)
            },
        }
    }

    /// Converts a literal into its runtime value.
    fn eval_literal(value: &LiteralValue) -> ValueHandle {
        match value {
            LiteralValue::Number(n) => ValueHandle::owned(Value::Number(*n)),
            LiteralValue::String(s) => ValueHandle::owned(Value::String(s.clone())),
            LiteralValue::Bool(b) => ValueHandle::owned(Value::Bool(*b)),
            LiteralValue::None => ValueHandle::none(),
        }
    }

    /// Resolves a dotted identifier path starting from `closure`.
    ///
    /// Every identifier but the last must name a class instance, whose
    /// fields become the closure for the next step; the final identifier
    /// only has to be bound.
    pub(crate) fn lookup_dotted(dotted_ids: &[String],
                                line: usize,
                                closure: &Closure)
                                -> EvalResult<ValueHandle> {
        let Some((first, rest)) = dotted_ids.split_first() else {
            return Ok(ValueHandle::none());
        };

        let mut handle =
            closure.get(first)
                   .cloned()
                   .ok_or_else(|| RuntimeError::UnknownVariable { name: first.clone(),
                                                                  line })?;
        let mut owner = first;

        for id in rest {
            let Some(object) = handle.get() else {
                return Err(RuntimeError::FieldAccess { name: owner.clone(),
                                                       line });
            };
            let Value::Instance(instance) = object.as_ref() else {
                return Err(RuntimeError::FieldAccess { name: owner.clone(),
                                                       line });
            };

            let next = instance.fields()
                               .get(id)
                               .cloned()
                               .ok_or_else(|| RuntimeError::UnknownField { name: id.clone(),
                                                                           line })?;
            handle = next;
            owner = id;
        }

        Ok(handle)
    }

    /// Assigns to a field of the instance named by a dotted path.
    ///
    /// When the path does not resolve to a class instance the assignment is
    /// skipped: the right-hand side stays unevaluated and none is yielded.
    fn exec_field_assignment(&mut self,
                             object: &[String],
                             field: &str,
                             value: &Expr,
                             line: usize,
                             closure: &mut Closure)
                             -> EvalResult<Flow> {
        let target = Self::lookup_dotted(object, line, closure)?;

        let Some(target_object) = target.get() else {
            return Ok(Flow::Normal(ValueHandle::none()));
        };
        let Value::Instance(instance) = target_object.as_ref() else {
            return Ok(Flow::Normal(ValueHandle::none()));
        };

        let assigned = self.eval(value, closure)?;
        instance.fields_mut().insert(field.to_string(), assigned.clone());

        Ok(Flow::Normal(assigned))
    }
}
