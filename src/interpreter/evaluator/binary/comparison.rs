use crate::{
    ast::Comparator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Value, ValueHandle},
    },
};

/// The method consulted when an instance is compared for equality.
const EQ_METHOD: &str = "__eq__";
/// The method consulted when an instance is ordered.
const LT_METHOD: &str = "__lt__";

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Comparator> Value` and
    /// returns a freshly owned boolean.
    ///
    /// `Equal` and `Less` are the primitives; the remaining comparators
    /// derive from them by the usual identities, so `NotEqual` is always the
    /// negation of `Equal` and `GreaterOrEqual` the negation of `Less`.
    ///
    /// # Errors
    /// Fails when the operands do not support the comparison, and
    /// propagates errors from `__eq__`/`__lt__` dispatch.
    pub fn compare(&mut self,
                   cmp: Comparator,
                   lhs: &ValueHandle,
                   rhs: &ValueHandle,
                   line: usize)
                   -> EvalResult<ValueHandle> {
        let result = match cmp {
            Comparator::Equal => self.equal(lhs, rhs, line)?,
            Comparator::NotEqual => !self.equal(lhs, rhs, line)?,
            Comparator::Less => self.less(lhs, rhs, line)?,
            Comparator::Greater => !self.less(lhs, rhs, line)? && !self.equal(lhs, rhs, line)?,
            Comparator::LessOrEqual => self.less(lhs, rhs, line)? || self.equal(lhs, rhs, line)?,
            Comparator::GreaterOrEqual => !self.less(lhs, rhs, line)?,
        };

        Ok(ValueHandle::owned(Value::Bool(result)))
    }

    /// Tests two values for equality.
    ///
    /// Numbers, strings and booleans of the same variant compare natively.
    /// Two none handles are equal; a none beside any value is unequal. A
    /// class instance as the left operand dispatches to `__eq__` when its
    /// class defines it for one argument.
    pub fn equal(&mut self, lhs: &ValueHandle, rhs: &ValueHandle, line: usize) -> EvalResult<bool> {
        match (lhs.get().as_deref(), rhs.get().as_deref()) {
            (None, None) => Ok(true),
            (Some(Value::Number(a)), Some(Value::Number(b))) => Ok(a == b),
            (Some(Value::String(a)), Some(Value::String(b))) => Ok(a == b),
            (Some(Value::Bool(a)), Some(Value::Bool(b))) => Ok(a == b),
            (Some(Value::Instance(instance)), _) if instance.has_method(EQ_METHOD, 1) => {
                Ok(lhs.call_method(EQ_METHOD, vec![rhs.clone()], line, self)?.is_true())
            },
            (None, Some(_)) | (Some(_), None) => Ok(false),
            _ => {
                Err(RuntimeError::TypeError { details:
                                                  format!("Cannot compare {} and {} for equality",
                                                          lhs.type_name(),
                                                          rhs.type_name()),
                                              line })
            },
        }
    }

    /// Tests whether `lhs` orders strictly before `rhs`.
    ///
    /// Numbers, strings and booleans of the same variant compare natively;
    /// a class instance as the left operand dispatches to `__lt__` when its
    /// class defines it for one argument. None does not order.
    pub fn less(&mut self, lhs: &ValueHandle, rhs: &ValueHandle, line: usize) -> EvalResult<bool> {
        match (lhs.get().as_deref(), rhs.get().as_deref()) {
            (Some(Value::Number(a)), Some(Value::Number(b))) => Ok(a < b),
            (Some(Value::String(a)), Some(Value::String(b))) => Ok(a < b),
            (Some(Value::Bool(a)), Some(Value::Bool(b))) => Ok(a < b),
            (Some(Value::Instance(instance)), _) if instance.has_method(LT_METHOD, 1) => {
                Ok(lhs.call_method(LT_METHOD, vec![rhs.clone()], line, self)?.is_true())
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("Cannot order {} and {}",
                                                               lhs.type_name(),
                                                               rhs.type_name()),
                                              line })
            },
        }
    }
}
