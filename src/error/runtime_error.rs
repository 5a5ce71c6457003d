#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use a name that is not bound in the current scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to read a field that an instance does not have.
    UnknownField {
        /// The name of the field.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access fields of a value that is not a class instance.
    FieldAccess {
        /// The name of the value whose fields were accessed.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a method that the class does not have, or called it with the
    /// wrong number of arguments.
    UnknownMethod {
        /// The name of the class.
        class:  String,
        /// The name of the method.
        method: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Tried to call a method on a value that is not a class instance.
    NotAnInstance {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A class was defined with two methods of the same name.
    DuplicateMethod {
        /// The name of the class.
        class:  String,
        /// The name of the duplicated method.
        method: String,
    },
    /// Writing to the host output stream failed.
    OutputStream,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownField { name, line } => {
                write!(f, "Error on line {line}: Unknown field '{name}'.")
            },
            Self::FieldAccess { name, line } => write!(f,
                                                       "Error on line {line}: '{name}' is not a class instance and has no fields."),

            Self::UnknownMethod { class, method, line } => write!(f,
                                                                  "Error on line {line}: Class '{class}' has no matching method '{method}'."),

            Self::NotAnInstance { line } => {
                write!(f, "Error on line {line}: Value is not a class instance.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),

            Self::DuplicateMethod { class, method } => {
                write!(f, "Class '{class}' has duplicate method '{method}'.")
            },
            Self::OutputStream => write!(f, "Error: Failed to write to the output stream."),
        }
    }
}

impl std::error::Error for RuntimeError {}
