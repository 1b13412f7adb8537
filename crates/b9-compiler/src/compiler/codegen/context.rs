//! Per-construct state threaded through code generation.

use crate::compiler::labels::Label;

/// Whether the enclosing construct consumes the value an expression
/// leaves on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    /// Leave exactly one value on the stack
    Value,
    /// Leave nothing on the stack
    Discard,
}

/// Jump targets of one enclosing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopLabels {
    /// Target of `break`
    pub break_label: Label,
    /// Target of `continue`
    pub continue_label: Label,
}

/// Enclosing loops of the function being compiled, innermost last.
#[derive(Debug, Clone, Default)]
pub struct LoopStack {
    loops: Vec<LoopLabels>,
}

impl LoopStack {
    pub fn push(&mut self, break_label: Label, continue_label: Label) {
        self.loops.push(LoopLabels {
            break_label,
            continue_label,
        });
    }

    pub fn pop(&mut self) -> Option<LoopLabels> {
        self.loops.pop()
    }

    pub fn innermost(&self) -> Option<LoopLabels> {
        self.loops.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::labels::LabelTable;

    #[test]
    fn test_innermost_loop_wins() {
        let mut labels = LabelTable::new();
        let (b0, c0, b1, c1) = (labels.create(), labels.create(), labels.create(), labels.create());
        let mut loops = LoopStack::default();
        assert_eq!(loops.innermost(), None);
        loops.push(b0, c0);
        loops.push(b1, c1);
        assert_eq!(loops.innermost().map(|l| l.break_label), Some(b1));
        loops.pop();
        assert_eq!(loops.innermost().map(|l| l.continue_label), Some(c0));
        loops.pop();
        assert_eq!(loops.pop(), None);
    }
}
