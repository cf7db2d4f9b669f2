//! The shift-reduce driver.
//!
//! The engine owns a single parse stack of alternating state markers and
//! symbol nodes (bottom entry is always state 0) and advances one lookahead
//! token at a time.  Each loop iteration decodes one action table cell:
//!
//! * shift: push the lookahead and the new state, fetch the next token --
//!   registering first-seen identifiers in the binding store as they arrive;
//! * reduce: pop the production's right-hand side, verifying every popped
//!   symbol against the signature (a mismatch means the tables and the
//!   stack are out of sync, which is an internal failure, not bad input),
//!   run the semantic action, push the left-hand side and take the goto;
//! * accept: finish the code buffer and hand the listing back;
//! * reject: report the offending token and stop.
//!
//! There is no backtracking and no recovery; the first rejection is
//! terminal for the compilation.

use crate::actions::Actions;
use crate::errors::CompileError;
use crate::grammar::{self, Action, PRODUCTIONS};
use crate::scanner::{ClassifiedToken, Scanner};
use crate::{Compilation, DataType, Production, State, Symbol, Value};
use log::debug;

/// A node carried on the parse stack for a shifted token or a reduced
/// nonterminal.
#[derive(Clone, Debug)]
pub struct SymbolNode {
    pub symbol: Symbol,
    /// Source text for terminals; empty for nonterminals.
    pub lexeme: String,
    /// The synthesized value, the only channel semantic information flows
    /// through.
    pub value: Option<Value>,
    pub ty: DataType,
}

impl SymbolNode {
    pub fn nonterminal(symbol: Symbol) -> SymbolNode {
        SymbolNode {
            symbol,
            lexeme: String::new(),
            value: None,
            ty: DataType::Terminal,
        }
    }

    fn from_token(token: ClassifiedToken) -> SymbolNode {
        SymbolNode {
            symbol: token.symbol,
            lexeme: token.lexeme,
            value: token.value,
            ty: token.ty,
        }
    }

    /// The lexeme for terminals, the grammar name otherwise.
    pub fn display_name(&self) -> &str {
        if self.lexeme.is_empty() {
            grammar::symbol_name(self.symbol)
        } else {
            &self.lexeme
        }
    }
}

/// One entry of the parse stack.
pub enum StackEntry {
    State(State),
    Node(SymbolNode),
}

pub struct Parser<'a> {
    scanner: Scanner<'a>,
    stack: Vec<StackEntry>,
    state: State,
    actions: Actions,
}

impl<'a> Parser<'a> {
    pub fn new(scanner: Scanner<'a>) -> Parser<'a> {
        Parser {
            scanner,
            stack: vec![StackEntry::State(State::INITIAL)],
            state: State::INITIAL,
            actions: Actions::new(),
        }
    }

    /// The next classified token, or the synthesized end marker once the
    /// scanner is exhausted.
    fn fetch(&mut self) -> ClassifiedToken {
        self.scanner.next_token().unwrap_or_else(|| ClassifiedToken {
            lexeme: "$end".to_string(),
            symbol: Symbol::END,
            value: None,
            ty: DataType::Terminal,
        })
    }

    /// Drive the automaton to acceptance or rejection.
    pub fn run(mut self) -> Result<Compilation, CompileError> {
        let mut lookahead = self.fetch();

        loop {
            debug!(
                "state {}, lookahead {:?} ({}), stack depth {}",
                self.state,
                lookahead.lexeme,
                lookahead.symbol,
                self.stack.len()
            );

            if lookahead.symbol == Symbol::INVALID {
                return Err(CompileError::Lexical {
                    lexeme: lookahead.lexeme,
                });
            }
            let column = grammar::column(lookahead.symbol).ok_or(CompileError::MissingColumn {
                symbol: lookahead.symbol.0,
            })?;

            match grammar::action(self.state, column) {
                Action::Reject => {
                    return Err(CompileError::Syntax {
                        lexeme: lookahead.lexeme,
                        symbol: lookahead.symbol.0,
                    });
                }
                Action::Shift(next) => {
                    debug!("shift {:?}, state {} -> {}", lookahead.lexeme, self.state, next);
                    if lookahead.symbol == Symbol::ID {
                        self.actions.register_identifier(&lookahead.lexeme);
                    }
                    self.stack.push(StackEntry::Node(SymbolNode::from_token(lookahead)));
                    self.stack.push(StackEntry::State(next));
                    self.state = next;
                    lookahead = self.fetch();
                }
                Action::Reduce(production) => {
                    self.reduce(production)?;
                }
                Action::Accept => {
                    debug!("accept");
                    let (buffer, bindings) = self.actions.finish();
                    return Ok(Compilation {
                        listing: buffer.finish(),
                        bindings,
                    });
                }
            }
        }
    }

    fn reduce(&mut self, production: Production) -> Result<(), CompileError> {
        let def = &PRODUCTIONS[production.index()];
        debug!("reduce by ({}) {}", production, def.text);

        let rhs = pop_rhs(&mut self.stack, production)?;

        // The nearest symbol node left on the stack; the identifier-list
        // actions read it to tell the declaration region from the
        // parameter list.
        let below = self.stack.iter().rev().find_map(|entry| match entry {
            StackEntry::Node(node) => Some(node),
            StackEntry::State(_) => None,
        });
        debug!(
            "popped {} nodes, below {:?}",
            rhs.len(),
            below.map(|n| n.display_name())
        );
        let lhs = self.actions.reduce(production, &rhs, below);

        let top = match self.stack.last() {
            Some(StackEntry::State(state)) => *state,
            _ => return Err(out_of_sync(production, def.lhs, None)),
        };
        let column = grammar::column(def.lhs).ok_or(CompileError::MissingColumn {
            symbol: def.lhs.0,
        })?;
        match grammar::goto(top, column) {
            Some(next) => {
                debug!("goto on {}: state {} -> {}", def.lhs, top, next);
                self.stack.push(StackEntry::Node(lhs));
                self.stack.push(StackEntry::State(next));
                self.state = next;
                Ok(())
            }
            None => Err(CompileError::Syntax {
                lexeme: grammar::symbol_name(def.lhs).to_string(),
                symbol: def.lhs.0,
            }),
        }
    }
}

/// Pop a production's right-hand side off the stack, verifying each popped
/// symbol against the signature in right-to-left order.  Returns the nodes
/// in left-to-right order.
fn pop_rhs(
    stack: &mut Vec<StackEntry>,
    production: Production,
) -> Result<Vec<SymbolNode>, CompileError> {
    let def = &PRODUCTIONS[production.index()];
    let mut rhs: Vec<SymbolNode> = Vec::with_capacity(def.rhs.len());

    for expected in def.rhs.iter().rev() {
        match stack.pop() {
            Some(StackEntry::State(_)) => {}
            _ => return Err(out_of_sync(production, *expected, None)),
        }
        match stack.pop() {
            Some(StackEntry::Node(node)) => {
                if node.symbol != *expected {
                    return Err(out_of_sync(production, *expected, Some(node.symbol)));
                }
                rhs.push(node);
            }
            _ => return Err(out_of_sync(production, *expected, None)),
        }
    }

    rhs.reverse();
    Ok(rhs)
}

/// The stack and the tables disagree: fatal, and never the user's fault.
/// `found` is `None` when the stack ran out or held the wrong entry kind.
fn out_of_sync(production: Production, expected: Symbol, found: Option<Symbol>) -> CompileError {
    CompileError::Reduction {
        production: production.0,
        expected: expected.0,
        found: found.map(|s| s.0).unwrap_or(-1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: Symbol) -> StackEntry {
        StackEntry::Node(SymbolNode::nonterminal(symbol))
    }

    #[test]
    fn pop_rhs_returns_nodes_left_to_right() {
        // statement : get ( ID )
        let mut stack = vec![
            StackEntry::State(State(18)),
            entry(Symbol::GET),
            StackEntry::State(State(22)),
            entry(Symbol::LPAREN),
            StackEntry::State(State(32)),
            entry(Symbol::ID),
            StackEntry::State(State(51)),
            entry(Symbol::RPAREN),
            StackEntry::State(State(71)),
        ];
        // A real stack has a state under the popped region; the helper does
        // not look at it, but keep the shape honest.
        stack.insert(0, StackEntry::State(State::INITIAL));

        let rhs = pop_rhs(&mut stack, Production(16)).unwrap();
        let symbols: Vec<Symbol> = rhs.iter().map(|n| n.symbol).collect();
        assert_eq!(
            symbols,
            [Symbol::GET, Symbol::LPAREN, Symbol::ID, Symbol::RPAREN]
        );
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn mismatched_symbol_is_a_reduction_error() {
        // term : factor, but the stack holds an ID where factor belongs
        let mut stack = vec![
            StackEntry::State(State::INITIAL),
            entry(Symbol::ID),
            StackEntry::State(State(25)),
        ];
        match pop_rhs(&mut stack, Production(25)) {
            Err(CompileError::Reduction {
                production,
                expected,
                found,
            }) => {
                assert_eq!(production, 25);
                assert_eq!(expected, Symbol::FACTOR.0);
                assert_eq!(found, Symbol::ID.0);
            }
            other => panic!("expected a reduction error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn exhausted_stack_is_a_reduction_error() {
        let mut stack = vec![StackEntry::State(State::INITIAL)];
        assert!(matches!(
            pop_rhs(&mut stack, Production(25)),
            Err(CompileError::Reduction { found: -1, .. })
        ));
    }
}
