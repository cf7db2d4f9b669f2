//! The grammar tables: productions and the dense state/action matrix.
//!
//! Everything here is immutable data.  The automaton asks two questions of
//! this module: "given state S and lookahead symbol K, what action?" and
//! "given production P, what is its left-hand side and right-hand-side
//! signature?".  A missing column for a symbol is an internal error, never
//! a user-facing condition; every cell not otherwise defined rejects.
//!
//! Cell encoding, unchanged from the table this grammar was built with:
//!
//! * `0`   -- accept (reachable only through the start production)
//! * `99`  -- reject
//! * `> 0` -- shift to (or, in a nonterminal column, goto) that state
//! * `< 0` -- reduce by the production numbered by the absolute value

use crate::{Production, State, Symbol};

pub const NUM_STATES: usize = 79;
pub const NUM_COLUMNS: usize = 56;
pub const NUM_PRODUCTIONS: usize = 43;

const CELL_ACCEPT: i16 = 0;
const CELL_REJECT: i16 = 99;

impl Symbol {
    /// The accepting meta-symbol.
    pub const ACCEPT: Symbol = Symbol(0);

    pub const STATIC: Symbol = Symbol(1);
    pub const VOID: Symbol = Symbol(2);
    pub const ID: Symbol = Symbol(3);
    pub const PUBLIC: Symbol = Symbol(4);
    pub const PRIVATE: Symbol = Symbol(5);
    pub const VAR: Symbol = Symbol(6);
    pub const COLON: Symbol = Symbol(7);
    pub const SEMI: Symbol = Symbol(8);
    pub const LBRACE: Symbol = Symbol(9);
    pub const RBRACE: Symbol = Symbol(10);
    pub const LPAREN: Symbol = Symbol(11);
    pub const RPAREN: Symbol = Symbol(12);
    pub const DOLLAR: Symbol = Symbol(13);
    pub const CHAR: Symbol = Symbol(14);
    pub const INT: Symbol = Symbol(15);
    pub const GET: Symbol = Symbol(16);
    pub const PUT: Symbol = Symbol(17);
    pub const IF: Symbol = Symbol(18);
    pub const ASSIGN: Symbol = Symbol(19);
    pub const NUM: Symbol = Symbol(20);
    pub const TRUE: Symbol = Symbol(21);
    pub const FALSE: Symbol = Symbol(22);
    pub const GT: Symbol = Symbol(23);
    pub const GE: Symbol = Symbol(24);
    pub const EQ: Symbol = Symbol(25);
    pub const LE: Symbol = Symbol(26);
    pub const LT: Symbol = Symbol(27);
    pub const NE: Symbol = Symbol(28);
    pub const PLUS: Symbol = Symbol(29);
    pub const MINUS: Symbol = Symbol(30);
    pub const STAR: Symbol = Symbol(31);
    pub const SLASH: Symbol = Symbol(32);
    pub const PERCENT: Symbol = Symbol(33);
    pub const LITERAL: Symbol = Symbol(34);
    pub const END: Symbol = Symbol(35);
    pub const COMMA: Symbol = Symbol(36);
    pub const QUOTE: Symbol = Symbol(37);

    // nonterminals
    pub const START: Symbol = Symbol(100);
    pub const ACCESS: Symbol = Symbol(101);
    pub const IDENTIFIER_LIST: Symbol = Symbol(102);
    pub const DECLARATIONS: Symbol = Symbol(103);
    pub const TYPE: Symbol = Symbol(104);
    pub const COMPOUND_STATEMENT: Symbol = Symbol(105);
    pub const STATEMENT_LIST: Symbol = Symbol(106);
    pub const STATEMENT: Symbol = Symbol(107);
    pub const LEFTHANDSIDE: Symbol = Symbol(108);
    pub const RIGHTHANDSIDE: Symbol = Symbol(109);
    pub const EXPRESSION: Symbol = Symbol(110);
    pub const SIMPLE_EXPRESSION: Symbol = Symbol(111);
    pub const TERM: Symbol = Symbol(112);
    pub const FACTOR: Symbol = Symbol(113);
    pub const RELOP: Symbol = Symbol(114);
    pub const ADDOP: Symbol = Symbol(115);
    pub const MULOP: Symbol = Symbol(116);

    pub fn is_nonterminal(self) -> bool {
        self.0 >= 100
    }
}

/// Human-readable name for a symbol, for diagnostics and trace logs.
pub fn symbol_name(symbol: Symbol) -> &'static str {
    match symbol.0 {
        0 => "$accept",
        1 => "static",
        2 => "void",
        3 => "ID",
        4 => "public",
        5 => "private",
        6 => "var",
        7 => ":",
        8 => ";",
        9 => "{",
        10 => "}",
        11 => "(",
        12 => ")",
        13 => "$",
        14 => "char",
        15 => "int",
        16 => "get",
        17 => "put",
        18 => "if",
        19 => "=",
        20 => "NUM",
        21 => "true",
        22 => "false",
        23 => ">",
        24 => ">=",
        25 => "==",
        26 => "<=",
        27 => "<",
        28 => "<>",
        29 => "+",
        30 => "-",
        31 => "*",
        32 => "/",
        33 => "%",
        34 => "LITERAL",
        35 => "$end",
        36 => ",",
        37 => "'",
        100 => "start",
        101 => "access",
        102 => "identifier_list",
        103 => "declarations",
        104 => "type",
        105 => "compound_statement",
        106 => "statement_list",
        107 => "statement",
        108 => "lefthandside",
        109 => "righthandside",
        110 => "expression",
        111 => "simple_expression",
        112 => "term",
        113 => "factor",
        114 => "relop",
        115 => "addop",
        116 => "mulop",
        99 => "error",
        _ => "?",
    }
}

/// Map a symbol to its column in [`ACTION`].  The mapping is a fixed dense
/// injection over every symbol the grammar uses; `None` means the symbol id
/// is unknown to the grammar, which callers treat as an internal error.
pub fn column(symbol: Symbol) -> Option<usize> {
    let column = match symbol.0 {
        35 => 0, // $end
        13 => 1, // $
        33 => 2, // %
        37 => 3, // '
        11 => 4, // (
        12 => 5, // )
        31 => 6, // *
        29 => 7, // +
        36 => 8, // ,
        30 => 9, // -
        32 => 10, // /
        7 => 11, // :
        8 => 12, // ;
        27 => 13, // <
        19 => 14, // =
        23 => 15, // >
        9 => 16, // {
        10 => 17, // }
        99 => 18, // error
        1 => 19, // static
        2 => 20, // void
        3 => 21, // ID
        4 => 22, // public
        5 => 23, // private
        6 => 24, // var
        14 => 25, // char
        15 => 26, // int
        16 => 27, // get
        17 => 28, // put
        18 => 29, // if
        20 => 30, // NUM
        21 => 31, // true
        22 => 32, // false
        34 => 33, // LITERAL
        24 => 34, // >=
        25 => 35, // ==
        26 => 36, // <=
        28 => 37, // <>
        0 => 38, // $accept
        100 => 39, // start
        101 => 40, // access
        102 => 41, // identifier_list
        103 => 42, // declarations
        104 => 43, // type
        105 => 44, // compound_statement
        106 => 45, // statement_list
        107 => 46, // statement
        108 => 47, // lefthandside
        109 => 48, // righthandside
        110 => 49, // expression
        111 => 50, // simple_expression
        112 => 51, // term
        113 => 52, // factor
        114 => 53, // relop
        115 => 54, // addop
        116 => 55, // mulop
        _ => return None,
    };
    Some(column)
}

/// A production: its left-hand side, right-hand-side signature, and a
/// display form for trace logs.  The signature length is the number of
/// (state, symbol) pairs popped when the production reduces; the engine
/// verifies every popped symbol against it.
pub struct ProductionDef {
    pub lhs: Symbol,
    pub rhs: &'static [Symbol],
    pub text: &'static str,
}

/// Indexed by production number.  Production 0 is unused.
pub static PRODUCTIONS: [ProductionDef; NUM_PRODUCTIONS] = [
    ProductionDef {
        lhs: Symbol::ACCEPT,
        rhs: &[],
        text: "(unused)",
    },
    // 1
    ProductionDef {
        lhs: Symbol::START,
        rhs: &[
            Symbol::ACCESS, Symbol::STATIC, Symbol::VOID, Symbol::ID, Symbol::LPAREN,
            Symbol::IDENTIFIER_LIST, Symbol::RPAREN, Symbol::LBRACE, Symbol::DECLARATIONS,
            Symbol::COMPOUND_STATEMENT, Symbol::RBRACE, Symbol::DOLLAR,
        ],
        text: "start : access static void ID ( identifier_list ) { declarations compound_statement } $",
    },
    // 2
    ProductionDef {
        lhs: Symbol::ACCESS,
        rhs: &[Symbol::PUBLIC],
        text: "access : public",
    },
    // 3
    ProductionDef {
        lhs: Symbol::ACCESS,
        rhs: &[Symbol::PRIVATE],
        text: "access : private",
    },
    // 4
    ProductionDef {
        lhs: Symbol::IDENTIFIER_LIST,
        rhs: &[Symbol::ID],
        text: "identifier_list : ID",
    },
    // 5
    ProductionDef {
        lhs: Symbol::IDENTIFIER_LIST,
        rhs: &[Symbol::IDENTIFIER_LIST, Symbol::COMMA, Symbol::ID],
        text: "identifier_list : identifier_list , ID",
    },
    // 6
    ProductionDef {
        lhs: Symbol::IDENTIFIER_LIST,
        rhs: &[],
        text: "identifier_list : /* empty */",
    },
    // 7
    ProductionDef {
        lhs: Symbol::DECLARATIONS,
        rhs: &[
            Symbol::DECLARATIONS, Symbol::VAR, Symbol::IDENTIFIER_LIST, Symbol::COLON,
            Symbol::TYPE, Symbol::SEMI,
        ],
        text: "declarations : declarations var identifier_list : type ;",
    },
    // 8
    ProductionDef {
        lhs: Symbol::DECLARATIONS,
        rhs: &[],
        text: "declarations : /* empty */",
    },
    // 9
    ProductionDef {
        lhs: Symbol::TYPE,
        rhs: &[Symbol::CHAR],
        text: "type : char",
    },
    // 10
    ProductionDef {
        lhs: Symbol::TYPE,
        rhs: &[Symbol::INT],
        text: "type : int",
    },
    // 11
    ProductionDef {
        lhs: Symbol::COMPOUND_STATEMENT,
        rhs: &[Symbol::LBRACE, Symbol::STATEMENT_LIST, Symbol::RBRACE],
        text: "compound_statement : { statement_list }",
    },
    // 12
    ProductionDef {
        lhs: Symbol::STATEMENT_LIST,
        rhs: &[Symbol::STATEMENT],
        text: "statement_list : statement",
    },
    // 13
    ProductionDef {
        lhs: Symbol::STATEMENT_LIST,
        rhs: &[Symbol::STATEMENT_LIST, Symbol::SEMI, Symbol::STATEMENT],
        text: "statement_list : statement_list ; statement",
    },
    // 14
    ProductionDef {
        lhs: Symbol::STATEMENT,
        rhs: &[Symbol::LEFTHANDSIDE],
        text: "statement : lefthandside",
    },
    // 15
    ProductionDef {
        lhs: Symbol::STATEMENT,
        rhs: &[Symbol::COMPOUND_STATEMENT],
        text: "statement : compound_statement",
    },
    // 16
    ProductionDef {
        lhs: Symbol::STATEMENT,
        rhs: &[Symbol::GET, Symbol::LPAREN, Symbol::ID, Symbol::RPAREN],
        text: "statement : get ( ID )",
    },
    // 17
    ProductionDef {
        lhs: Symbol::STATEMENT,
        rhs: &[Symbol::PUT, Symbol::LPAREN, Symbol::ID, Symbol::RPAREN],
        text: "statement : put ( ID )",
    },
    // 18
    ProductionDef {
        lhs: Symbol::STATEMENT,
        rhs: &[
            Symbol::IF, Symbol::LPAREN, Symbol::EXPRESSION, Symbol::RPAREN, Symbol::STATEMENT,
        ],
        text: "statement : if ( expression ) statement",
    },
    // 19
    ProductionDef {
        lhs: Symbol::LEFTHANDSIDE,
        rhs: &[Symbol::ID, Symbol::ASSIGN, Symbol::RIGHTHANDSIDE],
        text: "lefthandside : ID = righthandside",
    },
    // 20
    ProductionDef {
        lhs: Symbol::RIGHTHANDSIDE,
        rhs: &[Symbol::EXPRESSION],
        text: "righthandside : expression",
    },
    // 21
    ProductionDef {
        lhs: Symbol::EXPRESSION,
        rhs: &[Symbol::SIMPLE_EXPRESSION],
        text: "expression : simple_expression",
    },
    // 22
    ProductionDef {
        lhs: Symbol::EXPRESSION,
        rhs: &[Symbol::SIMPLE_EXPRESSION, Symbol::RELOP, Symbol::SIMPLE_EXPRESSION],
        text: "expression : simple_expression relop simple_expression",
    },
    // 23
    ProductionDef {
        lhs: Symbol::SIMPLE_EXPRESSION,
        rhs: &[Symbol::TERM],
        text: "simple_expression : term",
    },
    // 24
    ProductionDef {
        lhs: Symbol::SIMPLE_EXPRESSION,
        rhs: &[Symbol::SIMPLE_EXPRESSION, Symbol::ADDOP, Symbol::TERM],
        text: "simple_expression : simple_expression addop term",
    },
    // 25
    ProductionDef {
        lhs: Symbol::TERM,
        rhs: &[Symbol::FACTOR],
        text: "term : factor",
    },
    // 26
    ProductionDef {
        lhs: Symbol::TERM,
        rhs: &[Symbol::TERM, Symbol::MULOP, Symbol::FACTOR],
        text: "term : term mulop factor",
    },
    // 27
    ProductionDef {
        lhs: Symbol::FACTOR,
        rhs: &[Symbol::ID],
        text: "factor : ID",
    },
    // 28
    ProductionDef {
        lhs: Symbol::FACTOR,
        rhs: &[Symbol::NUM],
        text: "factor : NUM",
    },
    // 29
    ProductionDef {
        lhs: Symbol::FACTOR,
        rhs: &[Symbol::TRUE],
        text: "factor : true",
    },
    // 30
    ProductionDef {
        lhs: Symbol::FACTOR,
        rhs: &[Symbol::FALSE],
        text: "factor : false",
    },
    // 31
    ProductionDef {
        lhs: Symbol::FACTOR,
        rhs: &[Symbol::QUOTE, Symbol::LITERAL, Symbol::QUOTE],
        text: "factor : ' LITERAL '",
    },
    // 32
    ProductionDef {
        lhs: Symbol::RELOP,
        rhs: &[Symbol::GT],
        text: "relop : >",
    },
    // 33
    ProductionDef {
        lhs: Symbol::RELOP,
        rhs: &[Symbol::GE],
        text: "relop : >=",
    },
    // 34
    ProductionDef {
        lhs: Symbol::RELOP,
        rhs: &[Symbol::EQ],
        text: "relop : ==",
    },
    // 35
    ProductionDef {
        lhs: Symbol::RELOP,
        rhs: &[Symbol::LE],
        text: "relop : <=",
    },
    // 36
    ProductionDef {
        lhs: Symbol::RELOP,
        rhs: &[Symbol::LT],
        text: "relop : <",
    },
    // 37
    ProductionDef {
        lhs: Symbol::RELOP,
        rhs: &[Symbol::NE],
        text: "relop : <>",
    },
    // 38
    ProductionDef {
        lhs: Symbol::ADDOP,
        rhs: &[Symbol::PLUS],
        text: "addop : +",
    },
    // 39
    ProductionDef {
        lhs: Symbol::ADDOP,
        rhs: &[Symbol::MINUS],
        text: "addop : -",
    },
    // 40
    ProductionDef {
        lhs: Symbol::MULOP,
        rhs: &[Symbol::STAR],
        text: "mulop : *",
    },
    // 41
    ProductionDef {
        lhs: Symbol::MULOP,
        rhs: &[Symbol::SLASH],
        text: "mulop : /",
    },
    // 42
    ProductionDef {
        lhs: Symbol::MULOP,
        rhs: &[Symbol::PERCENT],
        text: "mulop : %",
    },
];

/// The parse table, ported cell for cell from the grammar worksheet.  Rows
/// are states; columns follow the order defined by [`column`]: the
/// terminals and the `$accept` meta-symbol first, then the nonterminals
/// `start` through `mulop`.
#[rustfmt::skip]
pub static ACTION: [[i16; NUM_COLUMNS]; NUM_STATES] = [
    // state 0
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 1, 2, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 3, 4, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 1
    [-2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
     -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, -2,
     -2, -2, -2, -2, -2, -2, -2, -2, -2, -2, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 2
    [-3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3,
     -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3,
     -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 3
    [5, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 4
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 6, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 5
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 6
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 7, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 7
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 8, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 8
    [99, 99, 99, 99, 9, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 9
    [-6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,
     -6, -6, -6, -6, -6, -6, -6, 10, -6, -6, -6, -6, -6, -6,
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, 99, 99, 99, 11,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 10
    [-4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,
     -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 11
    [99, 99, 99, 99, 99, 12, 99, 99, 13, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 12
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 14, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 13
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 15, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 14
    [-8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,
     -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, 99, 99, 99, 99,
     16, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 15
    [-5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
     -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 16
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 18, 99, 99, 99, 99, 99, 99, 99, 17, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 19, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 17
    [-6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,
     -6, -6, -6, -6, -6, -6, -6, 10, -6, -6, -6, -6, -6, -6,
     -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, 99, 99, 99, 20,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 18
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 18, 99, 99, 99, 99, 21, 99, 99, 99, 99, 99, 22,
     23, 24, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 25, 26, 27, 28, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 19
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 29, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 20
    [99, 99, 99, 99, 99, 99, 99, 99, 13, 99, 99, 30, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 21
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     31, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 22
    [99, 99, 99, 99, 32, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 23
    [99, 99, 99, 99, 33, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 24
    [99, 99, 99, 99, 34, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 25
    [-15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15,
     -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, -15,
     -15, -15, -15, -15, -15, -15, -15, -15, -15, -15, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 26
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 36, 99,
     99, 99, 99, 35, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 27
    [-12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12,
     -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12,
     -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 28
    [-14, -14, -14, -14, -14, -14, -14, -14, -14, -14, -14, -14, -14, -14,
     -14, -14, -14, -14, -14, -14, -14, -14, -14, -14, -14, -14, -14, -14,
     -14, -14, -14, -14, -14, -14, -14, -14, -14, -14, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 29
    [99, 37, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 30
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 38, 39, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 40, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 31
    [99, 99, 99, 45, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 41, 99, 99, 99, 99, 99, 99,
     99, 99, 42, 43, 44, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 46, 47, 48, 49, 50, 99, 99, 99],
    // state 32
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 51, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 33
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 52, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 34
    [99, 99, 99, 45, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 41, 99, 99, 99, 99, 99, 99,
     99, 99, 42, 43, 44, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 53, 48, 49, 50, 99, 99, 99],
    // state 35
    [-11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11,
     -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11,
     -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 36
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 18, 99, 99, 99, 99, 21, 99, 99, 99, 99, 99, 22,
     23, 24, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 25, 99, 54, 28, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 37
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
     -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 38
    [-9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,
     -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,
     -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 39
    [-10, -10, -10, -10, -10, -10, -10, -10, -10, -10, -10, -10, -10, -10,
     -10, -10, -10, -10, -10, -10, -10, -10, -10, -10, -10, -10, -10, -10,
     -10, -10, -10, -10, -10, -10, -10, -10, -10, -10, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 40
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 55, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 41
    [-27, -27, -27, -27, -27, -27, -27, -27, -27, -27, -27, -27, -27, -27,
     -27, -27, -27, -27, -27, -27, -27, -27, -27, -27, -27, -27, -27, -27,
     -27, -27, -27, -27, -27, -27, -27, -27, -27, -27, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 42
    [-28, -28, -28, -28, -28, -28, -28, -28, -28, -28, -28, -28, -28, -28,
     -28, -28, -28, -28, -28, -28, -28, -28, -28, -28, -28, -28, -28, -28,
     -28, -28, -28, -28, -28, -28, -28, -28, -28, -28, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 43
    [-29, -29, -29, -29, -29, -29, -29, -29, -29, -29, -29, -29, -29, -29,
     -29, -29, -29, -29, -29, -29, -29, -29, -29, -29, -29, -29, -29, -29,
     -29, -29, -29, -29, -29, -29, -29, -29, -29, -29, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 44
    [-30, -30, -30, -30, -30, -30, -30, -30, -30, -30, -30, -30, -30, -30,
     -30, -30, -30, -30, -30, -30, -30, -30, -30, -30, -30, -30, -30, -30,
     -30, -30, -30, -30, -30, -30, -30, -30, -30, -30, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 45
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 56, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 46
    [-19, -19, -19, -19, -19, -19, -19, -19, -19, -19, -19, -19, -19, -19,
     -19, -19, -19, -19, -19, -19, -19, -19, -19, -19, -19, -19, -19, -19,
     -19, -19, -19, -19, -19, -19, -19, -19, -19, -19, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 47
    [-20, -20, -20, -20, -20, -20, -20, -20, -20, -20, -20, -20, -20, -20,
     -20, -20, -20, -20, -20, -20, -20, -20, -20, -20, -20, -20, -20, -20,
     -20, -20, -20, -20, -20, -20, -20, -20, -20, -20, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 48
    [-21, -21, -21, -21, -21, -21, -21, 63, -21, 64, -21, -21, -21, 61,
     -21, 57, -21, -21, -21, -21, -21, -21, -21, -21, -21, -21, -21, -21,
     -21, -21, -21, -21, -21, -21, 58, 59, 60, 62, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 65, 66, 99],
    // state 49
    [-23, -23, 69, -23, -23, -23, 67, -23, -23, -23, 68, -23, -23, -23,
     -23, -23, -23, -23, -23, -23, -23, -23, -23, -23, -23, -23, -23, -23,
     -23, -23, -23, -23, -23, -23, -23, -23, -23, -23, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 70],
    // state 50
    [-25, -25, -25, -25, -25, -25, -25, -25, -25, -25, -25, -25, -25, -25,
     -25, -25, -25, -25, -25, -25, -25, -25, -25, -25, -25, -25, -25, -25,
     -25, -25, -25, -25, -25, -25, -25, -25, -25, -25, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 51
    [99, 99, 99, 99, 99, 71, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 52
    [99, 99, 99, 99, 99, 72, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 53
    [99, 99, 99, 99, 99, 73, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 54
    [-13, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13,
     -13, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13,
     -13, -13, -13, -13, -13, -13, -13, -13, -13, -13, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 55
    [-7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,
     -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 56
    [99, 99, 99, 74, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 57
    [-32, -32, -32, -32, -32, -32, -32, -32, -32, -32, -32, -32, -32, -32,
     -32, -32, -32, -32, -32, -32, -32, -32, -32, -32, -32, -32, -32, -32,
     -32, -32, -32, -32, -32, -32, -32, -32, -32, -32, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 58
    [-33, -33, -33, -33, -33, -33, -33, -33, -33, -33, -33, -33, -33, -33,
     -33, -33, -33, -33, -33, -33, -33, -33, -33, -33, -33, -33, -33, -33,
     -33, -33, -33, -33, -33, -33, -33, -33, -33, -33, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 59
    [-34, -34, -34, -34, -34, -34, -34, -34, -34, -34, -34, -34, -34, -34,
     -34, -34, -34, -34, -34, -34, -34, -34, -34, -34, -34, -34, -34, -34,
     -34, -34, -34, -34, -34, -34, -34, -34, -34, -34, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 60
    [-35, -35, -35, -35, -35, -35, -35, -35, -35, -35, -35, -35, -35, -35,
     -35, -35, -35, -35, -35, -35, -35, -35, -35, -35, -35, -35, -35, -35,
     -35, -35, -35, -35, -35, -35, -35, -35, -35, -35, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 61
    [-36, -36, -36, -36, -36, -36, -36, -36, -36, -36, -36, -36, -36, -36,
     -36, -36, -36, -36, -36, -36, -36, -36, -36, -36, -36, -36, -36, -36,
     -36, -36, -36, -36, -36, -36, -36, -36, -36, -36, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 62
    [-37, -37, -37, -37, -37, -37, -37, -37, -37, -37, -37, -37, -37, -37,
     -37, -37, -37, -37, -37, -37, -37, -37, -37, -37, -37, -37, -37, -37,
     -37, -37, -37, -37, -37, -37, -37, -37, -37, -37, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 63
    [-38, -38, -38, -38, -38, -38, -38, -38, -38, -38, -38, -38, -38, -38,
     -38, -38, -38, -38, -38, -38, -38, -38, -38, -38, -38, -38, -38, -38,
     -38, -38, -38, -38, -38, -38, -38, -38, -38, -38, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 64
    [-39, -39, -39, -39, -39, -39, -39, -39, -39, -39, -39, -39, -39, -39,
     -39, -39, -39, -39, -39, -39, -39, -39, -39, -39, -39, -39, -39, -39,
     -39, -39, -39, -39, -39, -39, -39, -39, -39, -39, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 65
    [99, 99, 99, 45, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 41, 99, 99, 99, 99, 99, 99,
     99, 99, 42, 43, 44, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 75, 49, 50, 99, 99, 99],
    // state 66
    [99, 99, 99, 45, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 41, 99, 99, 99, 99, 99, 99,
     99, 99, 42, 43, 44, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 76, 50, 99, 99, 99],
    // state 67
    [-40, -40, -40, -40, -40, -40, -40, -40, -40, -40, -40, -40, -40, -40,
     -40, -40, -40, -40, -40, -40, -40, -40, -40, -40, -40, -40, -40, -40,
     -40, -40, -40, -40, -40, -40, -40, -40, -40, -40, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 68
    [-41, -41, -41, -41, -41, -41, -41, -41, -41, -41, -41, -41, -41, -41,
     -41, -41, -41, -41, -41, -41, -41, -41, -41, -41, -41, -41, -41, -41,
     -41, -41, -41, -41, -41, -41, -41, -41, -41, -41, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 69
    [-42, -42, -42, -42, -42, -42, -42, -42, -42, -42, -42, -42, -42, -42,
     -42, -42, -42, -42, -42, -42, -42, -42, -42, -42, -42, -42, -42, -42,
     -42, -42, -42, -42, -42, -42, -42, -42, -42, -42, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 70
    [99, 99, 99, 45, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 41, 99, 99, 99, 99, 99, 99,
     99, 99, 42, 43, 44, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 77, 99, 99, 99],
    // state 71
    [-16, -16, -16, -16, -16, -16, -16, -16, -16, -16, -16, -16, -16, -16,
     -16, -16, -16, -16, -16, -16, -16, -16, -16, -16, -16, -16, -16, -16,
     -16, -16, -16, -16, -16, -16, -16, -16, -16, -16, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 72
    [-17, -17, -17, -17, -17, -17, -17, -17, -17, -17, -17, -17, -17, -17,
     -17, -17, -17, -17, -17, -17, -17, -17, -17, -17, -17, -17, -17, -17,
     -17, -17, -17, -17, -17, -17, -17, -17, -17, -17, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 73
    [99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 18, 99, 99, 99, 99, 21, 99, 99, 99, 99, 99, 22,
     23, 24, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
     99, 99, 25, 99, 78, 28, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 74
    [-31, -31, -31, -31, -31, -31, -31, -31, -31, -31, -31, -31, -31, -31,
     -31, -31, -31, -31, -31, -31, -31, -31, -31, -31, -31, -31, -31, -31,
     -31, -31, -31, -31, -31, -31, -31, -31, -31, -31, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 66, 99],
    // state 75
    [-22, -22, -22, -22, -22, -22, -22, 63, -22, 64, -22, -22, -22, -22,
     -22, -22, -22, -22, -22, -22, -22, -22, -22, -22, -22, -22, -22, -22,
     -22, -22, -22, -22, -22, -22, -22, -22, -22, -22, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 70],
    // state 76
    [-24, -24, 69, -24, -24, -24, 67, -24, -24, -24, 68, -24, -24, -24,
     -24, -24, -24, -24, -24, -24, -24, -24, -24, -24, -24, -24, -24, -24,
     -24, -24, -24, -24, -24, -24, -24, -24, -24, -24, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 77
    [-26, -26, -26, -26, -26, -26, -26, -26, -26, -26, -26, -26, -26, -26,
     -26, -26, -26, -26, -26, -26, -26, -26, -26, -26, -26, -26, -26, -26,
     -26, -26, -26, -26, -26, -26, -26, -26, -26, -26, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
    // state 78
    [-18, -18, -18, -18, -18, -18, -18, -18, -18, -18, -18, -18, -18, -18,
     -18, -18, -18, -18, -18, -18, -18, -18, -18, -18, -18, -18, -18, -18,
     -18, -18, -18, -18, -18, -18, -18, -18, -18, -18, 99, 99, 99, 99,
     99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99],
];

/// A decoded action table cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Shift(State),
    Reduce(Production),
    Accept,
    Reject,
}

/// Decode the cell for `(state, column)`.  Cells default to reject; the
/// reject check must precede the shift check because the reject value is
/// itself positive.
pub fn action(state: State, column: usize) -> Action {
    let cell = ACTION[state.index()][column];
    if cell == CELL_REJECT {
        Action::Reject
    } else if cell == CELL_ACCEPT {
        Action::Accept
    } else if cell > 0 {
        Action::Shift(State(cell))
    } else {
        Action::Reduce(Production(-cell))
    }
}

/// The goto consulted after a reduction: the cell for the new top state
/// and the reduced nonterminal's column.  `None` means reject.  Goto cells
/// in this table are always plain states.
pub fn goto(state: State, column: usize) -> Option<State> {
    let cell = ACTION[state.index()][column];
    if cell == CELL_REJECT {
        None
    } else {
        debug_assert!(cell > 0, "goto cell must name a state");
        Some(State(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every cell decodes to exactly one of the four actions, shift targets
    /// stay inside the table, and reductions name real productions.
    #[test]
    fn table_is_total() {
        for state in 0..NUM_STATES {
            for col in 0..NUM_COLUMNS {
                match action(State(state as i16), col) {
                    Action::Shift(s) => {
                        assert!(s.index() < NUM_STATES, "state {} col {}", state, col);
                        assert_ne!(s.0, CELL_REJECT);
                    }
                    Action::Reduce(p) => {
                        assert!(p.index() > 0 && p.index() < NUM_PRODUCTIONS);
                    }
                    Action::Accept | Action::Reject => {}
                }
            }
        }
    }

    /// The column mapping covers every symbol appearing in a production and
    /// is injective over the grammar's symbol set.
    #[test]
    fn columns_cover_the_grammar() {
        let mut seen = [false; NUM_COLUMNS];
        let mut symbols: Vec<Symbol> = vec![Symbol::ACCEPT, Symbol::INVALID, Symbol::END];
        for def in PRODUCTIONS.iter() {
            symbols.push(def.lhs);
            symbols.extend_from_slice(def.rhs);
        }
        for sym in symbols {
            let col = column(sym).expect("symbol without a column");
            if !seen[col] {
                seen[col] = true;
            }
        }
        assert!(column(Symbol(50)).is_none());
    }

    #[test]
    fn column_is_injective() {
        let mut owner = [None::<i16>; NUM_COLUMNS];
        for id in 0..=130i16 {
            if let Some(col) = column(Symbol(id)) {
                assert_eq!(owner[col], None, "column {} claimed twice", col);
                owner[col] = Some(id);
            }
        }
        assert!(owner.iter().all(|o| o.is_some()));
    }

    /// The stored arity is the signature length for every production.
    #[test]
    fn production_arity_matches_signature() {
        assert_eq!(PRODUCTIONS.len(), NUM_PRODUCTIONS);
        for (i, def) in PRODUCTIONS.iter().enumerate().skip(1) {
            assert!(def.lhs.is_nonterminal(), "production {}", i);
            for sym in def.rhs {
                assert!(column(*sym).is_some(), "production {}", i);
            }
        }
        // spot checks against the grammar sheet
        assert_eq!(PRODUCTIONS[1].rhs.len(), 12);
        assert_eq!(PRODUCTIONS[6].rhs.len(), 0);
        assert_eq!(PRODUCTIONS[22].rhs.len(), 3);
        assert_eq!(PRODUCTIONS[31].rhs, &[Symbol::QUOTE, Symbol::LITERAL, Symbol::QUOTE]);
    }

    #[test]
    fn initial_state_recognizes_only_access_modifiers() {
        for col in 0..NUM_COLUMNS {
            let act = action(State::INITIAL, col);
            if col == column(Symbol::PUBLIC).unwrap() || col == column(Symbol::PRIVATE).unwrap() {
                assert!(matches!(act, Action::Shift(_)));
            } else if col == column(Symbol::START).unwrap()
                || col == column(Symbol::ACCESS).unwrap()
            {
                assert!(matches!(act, Action::Shift(_)));
            } else {
                assert_eq!(act, Action::Reject);
            }
        }
    }
}
