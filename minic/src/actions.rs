//! Semantic actions: one per grammar production.
//!
//! The parser calls [`Actions::reduce`] every time it reduces, handing over
//! the popped right-hand-side nodes (left to right) and the nearest symbol
//! node still on the stack below them.  The action synthesizes the node for
//! the left-hand side and may emit instructions, consult or update the
//! binding store, and append to or flush the pending-declaration list.
//! All scratch state needed inside one reduction is local to the call;
//! nothing leaks between productions except the fields below, each of which
//! is part of the language's semantics.
//!
//! Expression evaluation runs entirely through slot 0: a simple expression
//! is materialized there, arithmetic reads its operands and stores there,
//! and assignment copies it into the target's slot.  Relational expressions
//! emit an *inverted* conditional jump whose target is backpatched when the
//! enclosing `if` statement reduces.

use crate::errors::BindingError;
use crate::grammar::PRODUCTIONS;
use crate::parser::SymbolNode;
use crate::symtab::SymbolTable;
use crate::{ArithOp, DataType, Production, RelOp, Symbol, Value};
use log::{debug, trace, warn};
use mini_asm::{CodeBuffer, Instruction, Opcode, Operand};

/// Codegen state shared by the semantic actions of one compilation.
pub struct Actions {
    symtab: SymbolTable,
    emitter: CodeBuffer,
    /// Identifier names collected while a declaration list reduces; flushed
    /// and cleared exactly once per declarations production.
    pending: Vec<String>,
    /// The type named by the current declaration, once its `type` term has
    /// reduced.
    declared: Option<DataType>,
    diagnostics: Vec<BindingError>,
    /// Slot for the next first-seen identifier.  Slot 0 is scratch space.
    next_slot: u32,
}

impl Actions {
    pub fn new() -> Actions {
        Actions {
            symtab: SymbolTable::new(),
            emitter: CodeBuffer::new(),
            pending: Vec::new(),
            declared: None,
            diagnostics: Vec::new(),
            next_slot: 1,
        }
    }

    /// Called by the engine when it shifts an identifier token.  First
    /// sight of a name binds it, untyped, to the next storage slot.
    pub fn register_identifier(&mut self, lexeme: &str) {
        if self.symtab.lookup(lexeme) {
            return;
        }
        let slot = self.next_slot;
        self.next_slot += 1;
        debug!("identifier {} bound to slot {}", lexeme, slot);
        if !self.symtab.insert(lexeme, DataType::Terminal, slot) {
            self.diagnostics.push(BindingError::NameTaken(lexeme.to_string()));
        }
    }

    /// Tear down into the finished code buffer and collected diagnostics.
    pub fn finish(self) -> (CodeBuffer, Vec<BindingError>) {
        trace!("symbol table at finish:\n{}", self.symtab);
        (self.emitter, self.diagnostics)
    }

    #[cfg(test)]
    pub fn diagnostics(&self) -> &[BindingError] {
        &self.diagnostics
    }

    /// Run the semantic action for `production` and synthesize its
    /// left-hand-side node.
    pub fn reduce(
        &mut self,
        production: Production,
        rhs: &[SymbolNode],
        below: Option<&SymbolNode>,
    ) -> SymbolNode {
        let def = &PRODUCTIONS[production.index()];
        let mut lhs = SymbolNode::nonterminal(def.lhs);

        match production.0 {
            // start : access static void ID ( identifier_list ) { declarations compound_statement } $
            1 => {
                self.emitter.emit(Instruction::new(Opcode::Hlt, None, None, None));
            }

            // identifier_list : ID
            // identifier_list : identifier_list , ID
            //
            // Record the identifier only in the declaration region, which
            // is exactly when the node below the popped symbols is the
            // `var` keyword.  The parameter list form of identifier_list is
            // unused and must not feed the pending list.
            4 | 5 => {
                if below.map(|n| n.symbol) == Some(Symbol::VAR) {
                    if let Some(id) = rhs.last() {
                        self.pending.push(id.lexeme.clone());
                    }
                }
            }

            // declarations : declarations var identifier_list : type ;
            //
            // Flush: rebind every pending name to the declared type, then
            // clear both the list and the type holder.
            7 => {
                let declared = self.declared.take();
                for name in std::mem::take(&mut self.pending) {
                    match declared {
                        Some(ty) => {
                            if !self.symtab.rebind_type(&name, ty) {
                                self.diagnostics.push(BindingError::NameNotFound(name));
                            }
                        }
                        None => warn!("declaration of {} flushed without a type", name),
                    }
                }
            }

            // type : char
            9 => self.declared = Some(DataType::Char),
            // type : int
            10 => self.declared = Some(DataType::Int),

            // statement : get ( ID )
            16 => {
                if let Some((ty, slot)) = self.bound_target(&rhs[2].lexeme) {
                    let selector = if ty == DataType::Int { 1 } else { 2 };
                    self.emitter.emit(Instruction::new(
                        Opcode::Sys,
                        Some(Operand::Immediate(selector)),
                        None,
                        Some(Operand::Slot(slot)),
                    ));
                }
            }

            // statement : put ( ID )
            17 => {
                if let Some((ty, slot)) = self.bound_target(&rhs[2].lexeme) {
                    let selector = if ty == DataType::Int { -1 } else { -2 };
                    self.emitter.emit(Instruction::new(
                        Opcode::Sys,
                        Some(Operand::Immediate(selector)),
                        Some(Operand::Slot(slot)),
                        None,
                    ));
                }
            }

            // statement : if ( expression ) statement
            //
            // The guarded statement has fully reduced, so the jump emitted
            // for the condition can be completed: its target is the line
            // just emitted, the fall-through point.
            18 => {
                let target = i64::from(self.emitter.current_line()) - 1;
                if !self.emitter.resolve_latest_mark(Operand::Immediate(target)) {
                    warn!("if-statement completed with no pending jump to resolve");
                }
            }

            // lefthandside : ID = righthandside
            //
            // The right-hand side has already been materialized into the
            // scratch slot; copy it into the target.
            19 => {
                if let Some((_, slot)) = self.bound_target(&rhs[0].lexeme) {
                    self.emitter.emit(Instruction::new(
                        Opcode::Sto,
                        Some(Operand::Slot(0)),
                        None,
                        Some(Operand::Slot(slot)),
                    ));
                }
            }

            // expression : simple_expression
            //
            // Materialize the value into the scratch slot unless it is
            // already there, or is a boolean tag (which emitted its own
            // jump, or nothing, at the factor level).
            21 => {
                lhs.value = rhs[0].value;
                match rhs[0].value {
                    Some(Value::Slot(0)) | Some(Value::Bool(_)) | None => {}
                    Some(value) => match to_operand(value) {
                        Some(op) => self.emitter.emit(Instruction::new(
                            Opcode::Sto,
                            Some(op),
                            None,
                            Some(Operand::Slot(0)),
                        )),
                        None => warn!("expression value {:?} cannot be stored", value),
                    },
                }
            }

            // expression : simple_expression relop simple_expression
            //
            // Emit the inverted conditional jump with an unresolved target
            // mark; production 18 resolves it.
            22 => {
                let rel = match rhs[1].value {
                    Some(Value::Rel(rel)) => Some(rel),
                    _ => None,
                };
                let left = rhs[0].value.and_then(to_operand);
                let right = rhs[2].value.and_then(to_operand);
                match (rel, left, right) {
                    (Some(rel), Some(left), Some(right)) => {
                        self.emitter
                            .emit_with_mark(inverted_jump(rel), Some(left), Some(right));
                    }
                    _ => warn!("relational expression with unusable operands; no code emitted"),
                }
            }

            // simple_expression : term / term : factor -- pass the value up
            23 | 25 => lhs.value = rhs[0].value,

            // simple_expression : simple_expression addop term
            // term : term mulop factor
            24 | 26 => lhs.value = self.arith(rhs),

            // factor : ID
            27 => {
                let name = &rhs[0].lexeme;
                match self.symtab.lookup_value(name) {
                    Some(slot) => {
                        if self.symtab.lookup_type(name) == Some(DataType::Terminal) {
                            self.diagnostics.push(BindingError::Undeclared(name.clone()));
                        }
                        lhs.value = Some(Value::Slot(slot));
                    }
                    None => self.diagnostics.push(BindingError::NameNotFound(name.clone())),
                }
            }

            // factor : NUM
            28 => lhs.value = rhs[0].value,

            // factor : true
            29 => lhs.value = Some(Value::Bool(true)),

            // factor : false -- an if(false) branch always skips its body
            30 => {
                lhs.value = Some(Value::Bool(false));
                self.emitter.emit_with_mark(Opcode::Jmp, None, None);
            }

            // factor : ' LITERAL '
            31 => {
                lhs.value = rhs[1].value;
                lhs.ty = DataType::Char;
            }

            // relop : > >= == <= < <>
            32 => lhs.value = Some(Value::Rel(RelOp::Gt)),
            33 => lhs.value = Some(Value::Rel(RelOp::Ge)),
            34 => lhs.value = Some(Value::Rel(RelOp::Eq)),
            35 => lhs.value = Some(Value::Rel(RelOp::Le)),
            36 => lhs.value = Some(Value::Rel(RelOp::Lt)),
            37 => lhs.value = Some(Value::Rel(RelOp::Ne)),

            // addop : + - / mulop : * / %
            38 => lhs.value = Some(Value::Arith(ArithOp::Add)),
            39 => lhs.value = Some(Value::Arith(ArithOp::Sub)),
            40 => lhs.value = Some(Value::Arith(ArithOp::Mul)),
            41 => lhs.value = Some(Value::Arith(ArithOp::Div)),
            42 => lhs.value = Some(Value::Arith(ArithOp::Mod)),

            // access, null productions, statement plumbing: no code, no value
            _ => {}
        }

        lhs
    }

    /// Emit a three-address arithmetic instruction over the scratch slot
    /// and synthesize the scratch-slot reference as the combined value.
    fn arith(&mut self, rhs: &[SymbolNode]) -> Option<Value> {
        let op = match rhs[1].value {
            Some(Value::Arith(op)) => Some(op),
            _ => None,
        };
        let left = rhs[0].value.and_then(to_operand);
        let right = rhs[2].value.and_then(to_operand);
        match (op, left, right) {
            (Some(op), Some(left), Some(right)) => {
                self.emitter.emit(Instruction::new(
                    arith_opcode(op),
                    Some(left),
                    Some(right),
                    Some(Operand::Slot(0)),
                ));
            }
            _ => warn!("arithmetic expression with unusable operands; no code emitted"),
        }
        Some(Value::Slot(0))
    }

    /// Look up an identifier a statement wants to read or write.  Reports
    /// (and returns nothing for) names that were never declared with a
    /// type, so no instruction is emitted for them.
    fn bound_target(&mut self, name: &str) -> Option<(DataType, u32)> {
        match (self.symtab.lookup_type(name), self.symtab.lookup_value(name)) {
            (Some(DataType::Terminal), _) => {
                self.diagnostics.push(BindingError::Undeclared(name.to_string()));
                None
            }
            (Some(ty), Some(slot)) => Some((ty, slot)),
            _ => {
                self.diagnostics.push(BindingError::NameNotFound(name.to_string()));
                None
            }
        }
    }
}

impl Default for Actions {
    fn default() -> Self {
        Actions::new()
    }
}

fn to_operand(value: Value) -> Option<Operand> {
    match value {
        Value::Immediate(n) => Some(Operand::Immediate(n)),
        Value::Slot(n) => Some(Operand::Slot(n)),
        Value::Rel(_) | Value::Arith(_) | Value::Bool(_) => None,
    }
}

/// A comparison guards the statement after it, so the emitted jump fires
/// when the comparison is false.
fn inverted_jump(rel: RelOp) -> Opcode {
    match rel {
        RelOp::Gt => Opcode::Jle,
        RelOp::Ge => Opcode::Jlt,
        RelOp::Eq => Opcode::Jne,
        RelOp::Le => Opcode::Jgt,
        RelOp::Lt => Opcode::Jge,
        RelOp::Ne => Opcode::Jeq,
    }
}

fn arith_opcode(op: ArithOp) -> Opcode {
    match op {
        ArithOp::Add => Opcode::Add,
        ArithOp::Sub => Opcode::Sub,
        ArithOp::Mul => Opcode::Mul,
        ArithOp::Div => Opcode::Div,
        ArithOp::Mod => Opcode::Mod,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_node(name: &str) -> SymbolNode {
        SymbolNode {
            symbol: Symbol::ID,
            lexeme: name.to_string(),
            value: None,
            ty: DataType::Terminal,
        }
    }

    fn node(symbol: Symbol, value: Value) -> SymbolNode {
        SymbolNode {
            symbol,
            lexeme: String::new(),
            value: Some(value),
            ty: DataType::Terminal,
        }
    }

    #[test]
    fn declaration_flush_rebinds_and_clears() {
        let mut actions = Actions::new();
        actions.register_identifier("X");
        actions.register_identifier("Y");
        let var = SymbolNode {
            symbol: Symbol::VAR,
            lexeme: "var".to_string(),
            value: None,
            ty: DataType::Terminal,
        };

        actions.reduce(Production(10), &[], None); // type : int
        actions.reduce(Production(4), &[id_node("X")], Some(&var));
        assert_eq!(actions.pending, ["X"]);
        actions.reduce(Production(7), &[], None);
        assert!(actions.pending.is_empty());
        assert_eq!(actions.declared, None);
        assert_eq!(actions.symtab.lookup_type("X"), Some(DataType::Int));
        // Y was never in the list and keeps its default
        assert_eq!(actions.symtab.lookup_type("Y"), Some(DataType::Terminal));
    }

    #[test]
    fn parameter_list_identifiers_are_not_recorded() {
        let mut actions = Actions::new();
        actions.register_identifier("A");
        let lparen = SymbolNode {
            symbol: Symbol::LPAREN,
            lexeme: "(".to_string(),
            value: None,
            ty: DataType::Terminal,
        };
        actions.reduce(Production(4), &[id_node("A")], Some(&lparen));
        assert!(actions.pending.is_empty());
    }

    #[test]
    fn relational_jumps_are_inverted() {
        assert_eq!(inverted_jump(RelOp::Gt), Opcode::Jle);
        assert_eq!(inverted_jump(RelOp::Ge), Opcode::Jlt);
        assert_eq!(inverted_jump(RelOp::Eq), Opcode::Jne);
        assert_eq!(inverted_jump(RelOp::Le), Opcode::Jgt);
        assert_eq!(inverted_jump(RelOp::Lt), Opcode::Jge);
        assert_eq!(inverted_jump(RelOp::Ne), Opcode::Jeq);
    }

    #[test]
    fn arithmetic_combines_through_the_scratch_slot() {
        let mut actions = Actions::new();
        let rhs = [
            node(Symbol::SIMPLE_EXPRESSION, Value::Slot(1)),
            node(Symbol::ADDOP, Value::Arith(ArithOp::Add)),
            node(Symbol::TERM, Value::Immediate(2)),
        ];
        let lhs = actions.reduce(Production(24), &rhs, None);
        assert_eq!(lhs.value, Some(Value::Slot(0)));
        let (buffer, _) = actions.finish();
        assert_eq!(buffer.finish(), "1 \tADD 1,#2,0\n");
    }

    #[test]
    fn undeclared_io_target_reports_and_emits_nothing() {
        let mut actions = Actions::new();
        actions.register_identifier("Y");
        let rhs = [
            SymbolNode {
                symbol: Symbol::GET,
                lexeme: "get".to_string(),
                value: None,
                ty: DataType::Terminal,
            },
            SymbolNode {
                symbol: Symbol::LPAREN,
                lexeme: "(".to_string(),
                value: None,
                ty: DataType::Terminal,
            },
            id_node("Y"),
            SymbolNode {
                symbol: Symbol::RPAREN,
                lexeme: ")".to_string(),
                value: None,
                ty: DataType::Terminal,
            },
        ];
        actions.reduce(Production(16), &rhs, None);
        assert_eq!(
            actions.diagnostics(),
            &[BindingError::Undeclared("Y".to_string())]
        );
        let (buffer, _) = actions.finish();
        assert!(buffer.is_empty());
    }
}
