use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::{Closure, ValueHandle},
    },
};

impl Context<'_> {
    /// Executes a `print` statement.
    ///
    /// Arguments are evaluated and written left to right, separated by
    /// single spaces and terminated by a newline. The none handle renders as
    /// `None`; instances render through `__str__` when their class defines
    /// it. Yields none.
    pub(crate) fn exec_print(&mut self,
                             args: &[Expr],
                             line: usize,
                             closure: &mut Closure)
                             -> EvalResult<Flow> {
        let mut first = true;

        for arg in args {
            if !first {
                self.write_output(b" ")?;
            }
            first = false;

            let value = self.eval(arg, closure)?;
            let rendered = value.render(line, self)?;
            self.write_output(rendered.as_bytes())?;
        }
        self.write_output(b"\n")?;

        Ok(Flow::Normal(ValueHandle::none()))
    }

    fn write_output(&mut self, bytes: &[u8]) -> EvalResult<()> {
        self.output()
            .write_all(bytes)
            .map_err(|_| RuntimeError::OutputStream)
    }

    /// Executes an `if` statement.
    ///
    /// Evaluates the condition; when truthy the `then` branch runs,
    /// otherwise the `else` branch if present. The executed branch's flow is
    /// passed through unchanged, so a `return` inside a branch keeps
    /// unwinding.
    pub(crate) fn exec_if(&mut self,
                          condition: &Expr,
                          then_branch: &Statement,
                          else_branch: Option<&Statement>,
                          closure: &mut Closure)
                          -> EvalResult<Flow> {
        if self.eval(condition, closure)?.is_true() {
            self.exec(then_branch, closure)
        } else if let Some(else_branch) = else_branch {
            self.exec(else_branch, closure)
        } else {
            Ok(Flow::Normal(ValueHandle::none()))
        }
    }

    /// Executes the statements of a sequence in order.
    ///
    /// A `Returning` flow stops the sequence immediately and propagates;
    /// otherwise the sequence yields none.
    pub(crate) fn exec_compound(&mut self,
                                statements: &[Statement],
                                closure: &mut Closure)
                                -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Returning(value) = self.exec(statement, closure)? {
                return Ok(Flow::Returning(value));
            }
        }

        Ok(Flow::Normal(ValueHandle::none()))
    }

    /// Executes a method body, the single frame that catches `return`.
    ///
    /// A `Returning` flow observed here is converted back to normal
    /// execution carrying the return value; a body that runs to completion
    /// yields none.
    pub(crate) fn exec_method_body(&mut self,
                                   body: &Statement,
                                   closure: &mut Closure)
                                   -> EvalResult<Flow> {
        match self.exec(body, closure)? {
            Flow::Returning(value) => Ok(Flow::Normal(value)),
            Flow::Normal(_) => Ok(Flow::Normal(ValueHandle::none())),
        }
    }
}
