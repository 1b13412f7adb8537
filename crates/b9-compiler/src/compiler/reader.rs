//! Binary module decoder and disassembler.

use std::fmt;

use b9_macros::bail;

use crate::compiler::bytecode::{OpCode, Word};
use crate::compiler::writer::{FUNCTION_SECTION, MAGIC, STRING_SECTION};
use crate::error::{Error, Result};

/// One function as stored in a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionImage {
    /// Function name
    pub name: String,
    /// Function id
    pub index: u32,
    /// Argument count
    pub nargs: u32,
    /// Local count
    pub nregs: u32,
    /// Body, including the terminating `end_section`
    pub code: Vec<Word>,
}

impl FunctionImage {
    /// Decodes every word of the body.
    pub fn instructions(&self) -> Result<Vec<(OpCode, i32)>> {
        self.code.iter().map(|word| word.decode()).collect()
    }

    /// Opcodes of the body, in order.
    pub fn opcodes(&self) -> Result<Vec<OpCode>> {
        self.code.iter().map(|word| word.opcode()).collect()
    }
}

/// A decoded binary module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleImage {
    /// Functions in id order
    pub functions: Vec<FunctionImage>,
    /// String constants in id order
    pub strings: Vec<String>,
}

impl ModuleImage {
    /// Parses a complete module.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor { bytes, pos: 0 };

        if cursor.take(MAGIC.len())? != MAGIC {
            bail!(malformed("bad magic"));
        }

        cursor.expect_section(FUNCTION_SECTION)?;
        let count = cursor.u32()?;
        let mut functions = Vec::with_capacity(count.min(1024) as usize);
        for _ in 0..count {
            functions.push(cursor.function()?);
        }

        cursor.expect_section(STRING_SECTION)?;
        let count = cursor.u32()?;
        let mut strings = Vec::with_capacity(count.min(1024) as usize);
        for _ in 0..count {
            strings.push(cursor.string()?);
        }

        if cursor.pos != bytes.len() {
            bail!(malformed(format!("{} trailing bytes", bytes.len() - cursor.pos)));
        }
        Ok(Self { functions, strings })
    }

    /// Finds a function by name.
    pub fn function(&self, name: &str) -> Option<&FunctionImage> {
        self.functions.iter().find(|f| f.name == name)
    }
}

impl fmt::Display for ModuleImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for func in &self.functions {
            writeln!(
                f,
                "function {} `{}` (nargs={}, nregs={})",
                func.index, func.name, func.nargs, func.nregs
            )?;
            for (offset, word) in func.code.iter().enumerate() {
                writeln!(f, "  {offset:04}  {word}")?;
            }
        }
        for (id, string) in self.strings.iter().enumerate() {
            writeln!(f, "string {id} {string:?}")?;
        }
        Ok(())
    }
}

fn malformed(reason: impl Into<String>) -> Error {
    Error::MalformedModule(reason.into())
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| malformed(format!("unexpected end of input at byte {}", self.pos)))?;
        let bytes: &'a [u8] = self.bytes;
        let slice = &bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn string(&mut self) -> Result<String> {
        let len = self.u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| malformed("string is not valid UTF-8"))
    }

    fn expect_section(&mut self, code: u32) -> Result<()> {
        let found = self.u32()?;
        if found != code {
            bail!(malformed(format!("expected section {code}, found {found}")));
        }
        Ok(())
    }

    fn function(&mut self) -> Result<FunctionImage> {
        let name = self.string()?;
        let index = self.u32()?;
        let nargs = self.u32()?;
        let nregs = self.u32()?;
        let mut code = Vec::new();
        loop {
            let word = Word::from_raw(self.u32()?);
            code.push(word);
            if word.opcode_byte() == OpCode::EndSection as u8 {
                break;
            }
        }
        Ok(FunctionImage {
            name,
            index,
            nargs,
            nregs,
            code,
        })
    }
}
