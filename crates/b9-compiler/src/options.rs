//! Compiler configuration.

/// Default name of the pseudo-function that lowers to `primitive_call`.
pub const DEFAULT_PRIMITIVE_CALLEE: &str = "b9_primitive";

/// Options controlling how a program is lowered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Compile top-level statements into a function of this name (id 0).
    /// When `None` they go into the module initializer, which is checked
    /// but not serialized.
    pub script_function: Option<String>,
    /// Callee name reserved for primitive calls
    pub primitive_callee: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            script_function: None,
            primitive_callee: DEFAULT_PRIMITIVE_CALLEE.to_string(),
        }
    }
}

impl CompileOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits the top-level body as function `name`.
    pub fn with_script_function(mut self, name: impl Into<String>) -> Self {
        self.script_function = Some(name.into());
        self
    }

    /// Reserves `name` for primitive calls instead of `b9_primitive`.
    pub fn with_primitive_callee(mut self, name: impl Into<String>) -> Self {
        self.primitive_callee = name.into();
        self
    }
}
