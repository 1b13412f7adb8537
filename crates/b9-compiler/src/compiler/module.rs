//! The unit of compilation output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::compiler::function::FunctionDefinition;
use crate::compiler::functions::FunctionTable;
use crate::compiler::symbols::SymbolTable;
use crate::compiler::writer::ModuleWriter;
use crate::error::{Error, Result};

/// Every function definition and string constant of one program.
///
/// A module is built by the code generator, then [`resolve`](Module::resolve)d
/// once, and only then [`serialize`](Module::serialize)d.
#[derive(Debug, Clone, Default)]
pub struct Module {
    functions: FunctionTable,
    strings: SymbolTable,
    /// Top-level code not registered as a function
    initializer: FunctionDefinition,
    resolved: bool,
}

impl Module {
    /// Creates an empty module.
    pub fn new() -> Self {
        Self::default()
    }

    /// The function table.
    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub(crate) fn functions_mut(&mut self) -> &mut FunctionTable {
        &mut self.functions
    }

    /// The string constants.
    pub fn strings(&self) -> &SymbolTable {
        &self.strings
    }

    /// Interns a string constant, returning its id.
    pub(crate) fn intern_string(&mut self, s: &str) -> u32 {
        self.strings.intern(s)
    }

    /// The top-level body, resolved with the module but never serialized.
    pub fn initializer(&self) -> &FunctionDefinition {
        &self.initializer
    }

    pub(crate) fn initializer_mut(&mut self) -> &mut FunctionDefinition {
        &mut self.initializer
    }

    /// Whether [`resolve`](Self::resolve) has succeeded.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Checks that every referenced function is defined and finalizes all
    /// bodies. Calling it again after success does nothing.
    pub fn resolve(&mut self) -> Result<()> {
        if self.resolved {
            return Ok(());
        }
        self.functions.resolve_all()?;
        self.initializer.finalize()?;
        self.resolved = true;
        info!(
            functions = self.functions.len(),
            strings = self.strings.len(),
            "resolved module"
        );
        Ok(())
    }

    /// Encodes the module into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ModuleWriter::new(Vec::new());
        writer.write_module(self)?;
        Ok(writer.into_inner())
    }

    /// Writes the binary module to `sink`.
    ///
    /// The module is encoded in memory first, so nothing reaches `sink`
    /// unless encoding succeeds.
    pub fn serialize<W: Write>(&self, sink: &mut W) -> Result<()> {
        let bytes = self.to_bytes()?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        info!(bytes = bytes.len(), "serialized module");
        Ok(())
    }

    /// Writes the binary module to `path`, replacing it atomically.
    ///
    /// On failure no file at `path` is created or truncated.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| Error::Io(e.error))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote module");
        Ok(())
    }
}
