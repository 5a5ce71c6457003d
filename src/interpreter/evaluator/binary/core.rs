use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Value, ValueHandle},
    },
};

/// The method invoked when an instance is the left operand of `+`.
const ADD_METHOD: &str = "__add__";

impl Context<'_> {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Two numbers use 64-bit integer arithmetic; an overflowing result is a
    /// runtime failure, as is division by zero. Two strings concatenate
    /// under `+`. A class instance as the left operand of `+` dispatches to
    /// its `__add__` method. Every other combination fails with a type
    /// error.
    ///
    /// # Errors
    /// See above; additionally any error raised inside `__add__`.
    pub fn eval_arithmetic(&mut self,
                           op: BinaryOperator,
                           lhs: &ValueHandle,
                           rhs: &ValueHandle,
                           line: usize)
                           -> EvalResult<ValueHandle> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let left = lhs.get();
        let right = rhs.get();

        match (op, left.as_deref(), right.as_deref()) {
            (Add, Some(Value::Number(a)), Some(Value::Number(b))) => {
                Self::checked(a.checked_add(*b), line)
            },
            (Sub, Some(Value::Number(a)), Some(Value::Number(b))) => {
                Self::checked(a.checked_sub(*b), line)
            },
            (Mul, Some(Value::Number(a)), Some(Value::Number(b))) => {
                Self::checked(a.checked_mul(*b), line)
            },
            (Div, Some(Value::Number(_)), Some(Value::Number(0))) => {
                Err(RuntimeError::DivisionByZero { line })
            },
            (Div, Some(Value::Number(a)), Some(Value::Number(b))) => {
                Self::checked(a.checked_div(*b), line)
            },

            (Add, Some(Value::String(a)), Some(Value::String(b))) => {
                Ok(ValueHandle::owned(Value::String(format!("{a}{b}"))))
            },

            (Add, Some(Value::Instance(_)), _) => {
                lhs.call_method(ADD_METHOD, vec![rhs.clone()], line, self)
            },

            _ => {
                Err(RuntimeError::TypeError { details: format!("Cannot use '{op}' on {} and {}",
                                                               lhs.type_name(),
                                                               rhs.type_name()),
                                              line })
            },
        }
    }

    /// Wraps a checked integer result, turning `None` into an overflow
    /// error.
    fn checked(result: Option<i64>, line: usize) -> EvalResult<ValueHandle> {
        result.map(|n| ValueHandle::owned(Value::Number(n)))
              .ok_or(RuntimeError::Overflow { line })
    }
}
