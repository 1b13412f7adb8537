//! Error types for the b9 compiler.
//!
//! Every error is fatal for the compilation that raised it: there is no
//! recovery or resynchronization, and no partial module is handed back.

use thiserror::Error;

use crate::compiler::labels::Label;

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating, resolving, serializing or reading a module.
#[derive(Error, Debug)]
pub enum Error {
    /// A syntax node kind (or a form of it) the code generator does not handle
    #[error("unsupported syntax: {0}")]
    UnsupportedSyntax(String),

    /// An operator the code generator does not handle in this position
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// A function body was attached twice to the same name
    #[error("function `{0}` is defined more than once")]
    DuplicateFunctionDefinition(String),

    /// A called function never received a body
    #[error("undefined function reference: `{0}`")]
    UndefinedFunctionReference(String),

    /// A variable read or written is neither a local nor an argument
    #[error("undefined variable reference: `{0}`")]
    UndefinedVariableReference(String),

    /// `break` or `continue` outside of any loop
    #[error("`{0}` used outside of a loop")]
    InvalidBreakOrContinue(&'static str),

    /// A label was placed a second time
    #[error("label {0} placed twice")]
    DoubleLabelPlacement(Label),

    /// A label was read (or its function finalized) before placement
    #[error("label {0} was never placed")]
    UnplacedLabel(Label),

    /// An operand does not fit in the 24-bit instruction field
    #[error("operand {0} does not fit in 24 bits")]
    OperandOverflow(i64),

    /// Serialization requested before a successful resolve
    #[error("module must be resolved before it is serialized")]
    ModuleNotResolved,

    /// A primitive call names a primitive outside the fixed table
    #[error("unknown primitive: `{0}`")]
    UnknownPrimitive(String),

    /// Bytes handed to the module reader are not a valid module
    #[error("malformed module: {0}")]
    MalformedModule(String),

    /// I/O error while writing module output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
