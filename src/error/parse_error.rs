#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what was found (and what was expected).
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An instance was created from (or a class inherited from) a class
    /// that has not been defined.
    UndefinedClass {
        /// The name that does not refer to a defined class.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A method was declared without `self` as its first parameter.
    MethodWithoutSelf {
        /// The name of the offending method.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Some other kind of parse error, with a custom message.
    Other {
        /// Details about the parse error.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },

            Self::UndefinedClass { name, line } => {
                write!(f, "Error on line {line}: Class '{name}' is not defined.")
            },

            Self::MethodWithoutSelf { name, line } => write!(f,
                                                             "Error on line {line}: The first parameter of method '{name}' must be 'self'."),

            Self::Other { message, line } => write!(f, "Error on line {line}: {message}"),
        }
    }
}

impl std::error::Error for ParseError {}
