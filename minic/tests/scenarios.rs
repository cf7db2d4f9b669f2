//! End-to-end compilation scenarios: source text in, exact listing out.

use minic::{BindingError, CompileError, Compilation};

#[static_init::dynamic]
static INIT_LOGGER: () = {
    env_logger::builder().default_format_timestamp(false).init();
};

/// Wrap a declaration region and a compound statement in the fixed program
/// frame the grammar requires.
fn program(name: &str, declarations: &str, body: &str) -> String {
    format!(
        "public static void {} ( )\n{{\n{}\n{} \n}} $\n",
        name, declarations, body
    )
}

fn compile_ok(source: &str) -> Compilation {
    match minic::compile(source) {
        Ok(result) => result,
        Err(err) => panic!("compilation failed: {}\nsource:\n{}", err, source),
    }
}

#[test]
fn scenario_assignment_and_read_back() {
    let source = program("X", "var X : int ;", "{ X = 3 ; get ( X ) }");
    let result = compile_ok(&source);
    assert_eq!(
        result.listing,
        "1 \tSTO #3,,0\n\
         2 \tSTO 0,,1\n\
         3 \tSYS #1,,1\n\
         4 \tHLT ,,\n"
    );
    assert!(result.bindings.is_empty());
}

#[test]
fn scenario_conditional_jump_resolves_past_the_body() {
    let source = program("X", "var X : int ;", "{ X = 3 ; if ( X > 2 ) put ( X ) }");
    let result = compile_ok(&source);
    assert_eq!(
        result.listing,
        "1 \tSTO #3,,0\n\
         2 \tSTO 0,,1\n\
         3 \tJLE 1,#2,#4\n\
         4 \tSYS #-1,1,\n\
         5 \tHLT ,,\n"
    );
}

#[test]
fn nested_ifs_resolve_innermost_first() {
    let source = program(
        "X",
        "var X : int ;",
        "{ X = 3 ; if ( X > 1 ) { if ( X > 2 ) get ( X ) ; put ( X ) } }",
    );
    let result = compile_ok(&source);
    // The inner jump (line 4) was emitted last and resolves first, to its
    // own fall-through line; the outer jump skips the whole block.
    assert_eq!(
        result.listing,
        "1 \tSTO #3,,0\n\
         2 \tSTO 0,,1\n\
         3 \tJLE 1,#1,#6\n\
         4 \tJLE 1,#2,#5\n\
         5 \tSYS #1,,1\n\
         6 \tSYS #-1,1,\n\
         7 \tHLT ,,\n"
    );
}

#[test]
fn sibling_ifs_resolve_independently() {
    let source = program(
        "X",
        "var X : int ;",
        "{ X = 3 ; if ( X > 1 ) put ( X ) ; if ( X > 2 ) get ( X ) }",
    );
    let result = compile_ok(&source);
    assert_eq!(
        result.listing,
        "1 \tSTO #3,,0\n\
         2 \tSTO 0,,1\n\
         3 \tJLE 1,#1,#4\n\
         4 \tSYS #-1,1,\n\
         5 \tJLE 1,#2,#6\n\
         6 \tSYS #1,,1\n\
         7 \tHLT ,,\n"
    );
}

#[test]
fn if_false_always_jumps() {
    let source = program("X", "var X : int ;", "{ X = 3 ; if ( false ) put ( X ) }");
    let result = compile_ok(&source);
    assert_eq!(
        result.listing,
        "1 \tSTO #3,,0\n\
         2 \tSTO 0,,1\n\
         3 \tJMP ,,#4\n\
         4 \tSYS #-1,1,\n\
         5 \tHLT ,,\n"
    );
}

#[test]
fn declarations_flush_per_statement() {
    // Two declaration statements; each list binds its own type, and the
    // first flush must not leak names into the second.
    let source = program(
        "X",
        "var X , Y : int ;\nvar C : char ;",
        "{ put ( X ) ; put ( Y ) ; put ( C ) }",
    );
    let result = compile_ok(&source);
    assert_eq!(
        result.listing,
        "1 \tSYS #-1,1,\n\
         2 \tSYS #-1,2,\n\
         3 \tSYS #-2,3,\n\
         4 \tHLT ,,\n"
    );
    assert!(result.bindings.is_empty());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let source = program("X", "var X : int ;", "{ X = 1 ; X = X + 2 * 3 }");
    let result = compile_ok(&source);
    assert_eq!(
        result.listing,
        "1 \tSTO #1,,0\n\
         2 \tSTO 0,,1\n\
         3 \tMUL #2,#3,0\n\
         4 \tADD 1,0,0\n\
         5 \tSTO 0,,1\n\
         6 \tHLT ,,\n"
    );
}

#[test]
fn character_literals_store_their_code() {
    let source = program("C", "var C : char ;", "{ C = 'A' ; put ( C ) }");
    let result = compile_ok(&source);
    assert_eq!(
        result.listing,
        "1 \tSTO #65,,0\n\
         2 \tSTO 0,,1\n\
         3 \tSYS #-2,1,\n\
         4 \tHLT ,,\n"
    );
}

#[test]
fn comments_are_stripped() {
    let source = program(
        "X",
        "var X : int ; // the only variable",
        "{ X = 3 // materialize, then store\n; get ( X ) }",
    );
    let result = compile_ok(&source);
    assert_eq!(
        result.listing,
        "1 \tSTO #3,,0\n\
         2 \tSTO 0,,1\n\
         3 \tSYS #1,,1\n\
         4 \tHLT ,,\n"
    );
}

#[test]
fn parameter_names_are_not_declarations() {
    let source = "public static void M ( A , B )\n{\nvar X : int ;\n{ put ( X ) }\n} $\n";
    let result = compile_ok(source);
    // M, A, B take slots 1-3; X is the fourth identifier seen.
    assert_eq!(result.listing, "1 \tSYS #-1,4,\n2 \tHLT ,,\n");
    assert!(result.bindings.is_empty());
}

#[test]
fn rejection_names_the_offending_token() {
    let source = program("X", "var X : int ;", "{ X = }");
    match minic::compile(&source) {
        Err(CompileError::Syntax { lexeme, symbol }) => {
            assert_eq!(lexeme, "}");
            assert_eq!(symbol, 10);
        }
        other => panic!("expected a syntax rejection, got {:?}", other.err()),
    }
}

#[test]
fn missing_end_marker_rejects_at_the_end_symbol() {
    let source = "public static void X ( )\n{\nvar X : int ;\n{ get ( X ) }\n}\n";
    match minic::compile(source) {
        Err(CompileError::Syntax { lexeme, .. }) => assert_eq!(lexeme, "$end"),
        other => panic!("expected a syntax rejection, got {:?}", other.err()),
    }
}

#[test]
fn lowercase_names_are_lexical_rejects() {
    let source = program("X", "var X : int ;", "{ x = 3 }");
    match minic::compile(&source) {
        Err(CompileError::Lexical { lexeme }) => assert_eq!(lexeme, "x"),
        other => panic!("expected a lexical rejection, got {:?}", other.err()),
    }
}

#[test]
fn undeclared_identifier_reports_and_emits_nothing() {
    let source = program("M", "", "{ get ( Y ) }");
    let result = compile_ok(&source);
    assert_eq!(
        result.bindings,
        [BindingError::Undeclared("Y".to_string())]
    );
    // No SYS was emitted for the unbound name.
    assert_eq!(result.listing, "1 \tHLT ,,\n");
}

#[test]
fn undeclared_assignment_target_reports() {
    let source = program("M", "var X : int ;", "{ Y = 3 }");
    let result = compile_ok(&source);
    assert!(result
        .bindings
        .contains(&BindingError::Undeclared("Y".to_string())));
    // The right-hand side still materializes, but no store targets Y.
    assert_eq!(result.listing, "1 \tSTO #3,,0\n2 \tHLT ,,\n");
}
