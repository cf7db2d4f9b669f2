//! # minic -- a compiler for the Mini language
//!
//! `minic` compiles a small structured source language into the
//! three-address, line-numbered assembly understood by the Mini virtual
//! machine.  There is no syntax tree and no intermediate representation:
//! a table-driven shift-reduce automaton recognizes the input and generates
//! code in a single pass, running one semantic action per grammar production
//! as it reduces.  Forward jump targets (needed by `if` statements) are
//! emitted as unresolved marks and backpatched when the enclosing statement
//! reduces.
//!
//! The pieces, bottom up:
//!
//! * [`grammar`] -- the production table and the dense state/action matrix.
//!   Pure data; the automaton never consults anything else.
//! * [`scanner`] -- splits raw text into lexemes and classifies each one as
//!   a grammar symbol.
//! * [`symtab`] -- the flat name -> (type, slot) binding store.  Every
//!   identifier gets a storage slot on first sight; slot 0 is reserved as
//!   scratch space for expression evaluation.
//! * [`actions`] -- one semantic action per production; synthesizes values
//!   flowing up the parse stack and emits instructions through
//!   [`mini_asm::CodeBuffer`].
//! * [`parser`] -- the shift-reduce driver.
//!
//! The usual entry point is [`compile`]:
//!
//! ```
//! let source = "\
//! public static void X ( )
//! {
//!     var X : int ;
//!     { X = 3 ;
//!       get ( X ) }
//! } $";
//! let out = minic::compile(source).unwrap();
//! assert_eq!(out.listing.lines().count(), 4);
//! ```

#![warn(rust_2018_idioms)]

pub mod actions;
pub mod errors;
pub mod grammar;
pub mod parser;
pub mod scanner;
pub mod symtab;

pub use crate::errors::{BindingError, CompileError};

macro_rules! int_alias {
    (type $name:ident = $int:ty;) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
        pub struct $name(pub $int);

        impl $name {
            pub fn index(&self) -> usize {
                self.0 as usize
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, fmt)
            }
        }
    };
}

// Type aliases
int_alias! {type Symbol = i16;}
int_alias! {type State = i16;}
int_alias! {type Production = i16;}

impl Symbol {
    /// The distinguished invalid/reject symbol.  The scanner classifies
    /// unrecognizable lexemes as this, and the action table uses the same
    /// value for its reject cells.
    pub const INVALID: Symbol = Symbol(99);
}

impl State {
    pub const INITIAL: State = State(0);
}

/// Element types attached to bindings and synthesized nodes.  `Terminal` is
/// the untyped default a binding carries until a declaration rebinds it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataType {
    Int,
    Char,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RelOp {
    Gt,
    Ge,
    Eq,
    Le,
    Lt,
    Ne,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

/// A synthesized semantic value, flowing bottom-up through reductions.
/// This is the only channel semantic information travels on; there is no
/// syntax tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A literal constant operand, rendered with a `#` prefix.
    Immediate(i64),
    /// A direct reference to a binding slot, rendered bare.
    Slot(u32),
    /// A relational operator tag, consumed by the enclosing expression.
    Rel(RelOp),
    /// An additive/multiplicative operator tag.
    Arith(ArithOp),
    /// A boolean literal tag.
    Bool(bool),
}

/// The result of a successful compilation.
pub struct Compilation {
    /// The rendered instruction stream, one line per instruction.
    pub listing: String,
    /// Non-fatal binding diagnostics raised during code generation.
    pub bindings: Vec<BindingError>,
}

/// Compile a complete source text.  On acceptance the emitted instruction
/// stream is returned; rejection and internal consistency failures are
/// terminal for the whole compilation.
pub fn compile(source: &str) -> Result<Compilation, CompileError> {
    let classifier = scanner::Classifier::new();
    let tokens = scanner::Scanner::new(source, &classifier);
    parser::Parser::new(tokens).run()
}
