//! Instruction format and output buffer for the Mini virtual machine.
//!
//! The compiler emits a line-numbered three-address instruction stream; this
//! crate owns that wire format so the assembler/executor side of the system
//! can share it.  Each line is rendered as
//!
//! ```text
//! <line> \t<OPCODE> <op1>,<op2>,<op3>
//! ```
//!
//! Lines are numbered from 1.  Unused operand fields are left empty, but the
//! commas are always present.  The space before the tab matters: the VM's
//! reader splits on spaces only.
//!
//! [`CodeBuffer`] also implements the one piece of deferred resolution the
//! compiler needs: a conditional jump is emitted before its target line is
//! known, carrying an unresolved *mark* in its third operand field.  Marks
//! resolve LIFO -- the most recently emitted unresolved jump is the first to
//! be completed.  That ordering is sound because the parser reduces inner
//! conditionals before the conditionals that enclose them.

use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    Sto,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Jle,
    Jlt,
    Jne,
    Jgt,
    Jge,
    Jeq,
    Jmp,
    Sys,
    Hlt,
}

impl Opcode {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Sto => "STO",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Jle => "JLE",
            Opcode::Jlt => "JLT",
            Opcode::Jne => "JNE",
            Opcode::Jgt => "JGT",
            Opcode::Jge => "JGE",
            Opcode::Jeq => "JEQ",
            Opcode::Jmp => "JMP",
            Opcode::Sys => "SYS",
            Opcode::Hlt => "HLT",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// An operand field.  Immediates carry a `#` prefix; a direct reference is
/// the bare decimal index of a storage slot.  Slot 0 is the scratch slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Immediate(i64),
    Slot(u32),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Immediate(n) => write!(f, "#{}", n),
            Operand::Slot(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: [Option<Operand>; 3],
}

impl Instruction {
    pub fn new(
        opcode: Opcode,
        a: Option<Operand>,
        b: Option<Operand>,
        c: Option<Operand>,
    ) -> Instruction {
        Instruction {
            opcode,
            operands: [a, b, c],
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.opcode)?;
        for (i, op) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if let Some(op) = op {
                write!(f, "{}", op)?;
            }
        }
        Ok(())
    }
}

struct Line {
    number: u32,
    instruction: Instruction,
    /// True while the third operand field is an unresolved jump target.
    marked: bool,
}

impl Line {
    fn render(&self, out: &mut String) {
        use core::fmt::Write;
        // The space before the tab is required by the VM reader.
        let _ = write!(out, "{} \t{}", self.number, self.instruction);
        if self.marked {
            out.push('@');
        }
        out.push('\n');
    }
}

/// Accumulates the instruction stream for one compilation.
///
/// The buffer is write-once: [`CodeBuffer::finish`] consumes it, so a stream
/// can never be finalized twice with conflicting contents.
pub struct CodeBuffer {
    lines: Vec<Line>,
    /// Indices into `lines` with unresolved marks, oldest first.
    marks: Vec<usize>,
    next_line: u32,
}

impl CodeBuffer {
    pub fn new() -> CodeBuffer {
        CodeBuffer {
            lines: Vec::new(),
            marks: Vec::new(),
            next_line: 1,
        }
    }

    /// The number the next emitted instruction will receive.
    pub fn current_line(&self) -> u32 {
        self.next_line
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append an instruction at the current line and advance the counter.
    pub fn emit(&mut self, instruction: Instruction) {
        self.push(instruction, false);
    }

    /// Like [`CodeBuffer::emit`], but the third operand field is left as an
    /// unresolved mark to be filled in by [`CodeBuffer::resolve_latest_mark`].
    pub fn emit_with_mark(&mut self, opcode: Opcode, a: Option<Operand>, b: Option<Operand>) {
        self.push(Instruction::new(opcode, a, b, None), true);
    }

    fn push(&mut self, instruction: Instruction, marked: bool) {
        if marked {
            self.marks.push(self.lines.len());
        }
        self.lines.push(Line {
            number: self.next_line,
            instruction,
            marked,
        });
        self.next_line += 1;
    }

    /// Substitute the most recently inserted unresolved mark with `target`.
    /// Returns false if no mark is pending.
    pub fn resolve_latest_mark(&mut self, target: Operand) -> bool {
        match self.marks.pop() {
            Some(index) => {
                let line = &mut self.lines[index];
                line.instruction.operands[2] = Some(target);
                line.marked = false;
                true
            }
            None => false,
        }
    }

    /// Remove the most recent mark without resolving it, leaving the operand
    /// field empty.  Returns false if no mark is pending.
    pub fn drop_latest_mark(&mut self) -> bool {
        match self.marks.pop() {
            Some(index) => {
                self.lines[index].marked = false;
                true
            }
            None => false,
        }
    }

    /// Render the accumulated stream.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.lines.len() * 16);
        for line in &self.lines {
            line.render(&mut out);
        }
        out
    }
}

impl Default for CodeBuffer {
    fn default() -> Self {
        CodeBuffer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sys_read_int(slot: u32) -> Instruction {
        Instruction::new(
            Opcode::Sys,
            Some(Operand::Immediate(1)),
            None,
            Some(Operand::Slot(slot)),
        )
    }

    #[test]
    fn rendering() {
        assert_eq!(sys_read_int(3).to_string(), "SYS #1,,3");
        assert_eq!(
            Instruction::new(Opcode::Hlt, None, None, None).to_string(),
            "HLT ,,"
        );
        assert_eq!(
            Instruction::new(
                Opcode::Sys,
                Some(Operand::Immediate(-1)),
                Some(Operand::Slot(2)),
                None
            )
            .to_string(),
            "SYS #-1,2,"
        );
    }

    #[test]
    fn lines_are_numbered_from_one() {
        let mut buf = CodeBuffer::new();
        assert_eq!(buf.current_line(), 1);
        buf.emit(sys_read_int(1));
        buf.emit(Instruction::new(Opcode::Hlt, None, None, None));
        assert_eq!(buf.current_line(), 3);
        assert_eq!(buf.finish(), "1 \tSYS #1,,1\n2 \tHLT ,,\n");
    }

    #[test]
    fn marks_resolve_lifo() {
        let mut buf = CodeBuffer::new();
        buf.emit_with_mark(
            Opcode::Jle,
            Some(Operand::Slot(1)),
            Some(Operand::Immediate(1)),
        );
        buf.emit_with_mark(
            Opcode::Jgt,
            Some(Operand::Slot(1)),
            Some(Operand::Immediate(2)),
        );
        assert!(buf.resolve_latest_mark(Operand::Immediate(9)));
        assert!(buf.resolve_latest_mark(Operand::Immediate(4)));
        assert!(!buf.resolve_latest_mark(Operand::Immediate(0)));
        assert_eq!(buf.finish(), "1 \tJLE 1,#1,#4\n2 \tJGT 1,#2,#9\n");
    }

    #[test]
    fn unresolved_mark_renders_as_at() {
        let mut buf = CodeBuffer::new();
        buf.emit_with_mark(Opcode::Jmp, None, None);
        assert_eq!(buf.finish(), "1 \tJMP ,,@\n");
    }

    #[test]
    fn drop_latest_mark_removes_without_resolving() {
        let mut buf = CodeBuffer::new();
        buf.emit_with_mark(Opcode::Jmp, None, None);
        assert!(buf.drop_latest_mark());
        assert!(!buf.drop_latest_mark());
        assert_eq!(buf.finish(), "1 \tJMP ,,\n");
    }
}
