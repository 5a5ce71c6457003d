use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Closure, Value, ValueHandle},
    },
};

impl Context<'_> {
    /// Evaluates `left and right`.
    ///
    /// Short-circuits: the right operand is only evaluated when the left is
    /// truthy. The result is always a freshly owned boolean, never one of
    /// the operands.
    pub(crate) fn eval_and(&mut self,
                           left: &Expr,
                           right: &Expr,
                           closure: &Closure)
                           -> EvalResult<ValueHandle> {
        let result =
            self.eval(left, closure)?.is_true() && self.eval(right, closure)?.is_true();

        Ok(ValueHandle::owned(Value::Bool(result)))
    }

    /// Evaluates `left or right`.
    ///
    /// Short-circuits: the right operand is only evaluated when the left is
    /// falsy. The result is always a freshly owned boolean.
    pub(crate) fn eval_or(&mut self,
                          left: &Expr,
                          right: &Expr,
                          closure: &Closure)
                          -> EvalResult<ValueHandle> {
        let result =
            self.eval(left, closure)?.is_true() || self.eval(right, closure)?.is_true();

        Ok(ValueHandle::owned(Value::Bool(result)))
    }

    /// Evaluates `not expr` as the negation of the operand's truthiness.
    pub(crate) fn eval_not(&mut self, expr: &Expr, closure: &Closure) -> EvalResult<ValueHandle> {
        let value = self.eval(expr, closure)?;

        Ok(ValueHandle::owned(Value::Bool(!value.is_true())))
    }
}
