//! Binary module encoder.
//!
//! All integers are little-endian `u32`:
//!
//! ```text
//! "b9module"
//! 1  function_count  { name_len name index nargs nregs word* }*
//! 2  string_count    { len bytes }*
//! ```
//!
//! Function bodies carry no length; they run up to and including their
//! `end_section` word.

use std::io::{self, Write};

use crate::compiler::function::FunctionDefinition;
use crate::compiler::module::Module;
use crate::error::{Error, Result};

/// Leading bytes of every module.
pub const MAGIC: &[u8; 8] = b"b9module";

/// Section code of the function section.
pub const FUNCTION_SECTION: u32 = 1;

/// Section code of the string section.
pub const STRING_SECTION: u32 = 2;

/// Writes the sections of a resolved module to `W`.
pub struct ModuleWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> ModuleWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Writes header, function section and string section.
    pub fn write_module(&mut self, module: &Module) -> Result<()> {
        if !module.is_resolved() {
            return Err(Error::ModuleNotResolved);
        }
        self.write_header()?;
        self.write_function_section(module)?;
        self.write_string_section(module)?;
        Ok(())
    }

    fn write_header(&mut self) -> io::Result<()> {
        self.write_bytes(MAGIC)
    }

    fn write_function_section(&mut self, module: &Module) -> Result<()> {
        let functions = module.functions();
        self.write_u32(FUNCTION_SECTION)?;
        self.write_len(functions.len())?;
        for (id, name, body) in functions.iter() {
            let body = body.ok_or_else(|| Error::UndefinedFunctionReference(name.to_string()))?;
            self.write_function(id, name, body)?;
        }
        Ok(())
    }

    fn write_function(&mut self, id: u32, name: &str, body: &FunctionDefinition) -> Result<()> {
        let code = body.code().ok_or(Error::ModuleNotResolved)?;
        self.write_str(name)?;
        self.write_u32(id)?;
        self.write_u32(body.nargs())?;
        self.write_u32(body.nregs())?;
        for word in code {
            self.write_u32(word.raw())?;
        }
        Ok(())
    }

    fn write_string_section(&mut self, module: &Module) -> io::Result<()> {
        let strings = module.strings();
        self.write_u32(STRING_SECTION)?;
        self.write_len(strings.len())?;
        for (string, _) in strings.iter() {
            self.write_str(string)?;
        }
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_len(s.len())?;
        self.write_bytes(s.as_bytes())
    }

    fn write_len(&mut self, len: usize) -> io::Result<()> {
        let len = u32::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u32"))?;
        self.write_u32(len)
    }

    fn write_u32(&mut self, value: u32) -> io::Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    /// Bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Recovers the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
