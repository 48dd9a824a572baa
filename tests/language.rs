use std::fs;

use minint::{
    config::Config,
    interpreter::session::{ERROR_MARKER, Session},
    run_script,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_transcripts(&content).into_iter().enumerate() {
            count += 1;
            let mut session = Session::new(Config::quiet());
            let actual = block.inputs
                              .iter()
                              .filter_map(|line| session.respond(line))
                              .collect::<Vec<_>>();

            assert_eq!(actual, block.expected, "transcript {} in {:?}", i + 1, path);
        }
    }

    assert!(count > 0, "No transcripts found in book/src");
}

struct Transcript {
    inputs:   Vec<String>,
    expected: Vec<String>,
}

fn extract_transcripts(content: &str) -> Vec<Transcript> {
    let mut blocks = Vec::new();
    let mut current: Option<Transcript> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```minint") {
            current = Some(Transcript { inputs:   Vec::new(),
                                        expected: Vec::new(), });
            continue;
        }
        let Some(block) = current.as_mut() else {
            continue;
        };
        if trimmed.starts_with("```") {
            blocks.extend(current.take());
        } else if trimmed.starts_with(">> ") {
            block.expected.push(trimmed.to_string());
        } else if !trimmed.is_empty() {
            block.inputs.push(trimmed.to_string());
        }
    }

    blocks
}

fn respond_all(lines: &[&str]) -> Vec<Option<String>> {
    let mut session = Session::new(Config::quiet());
    lines.iter().map(|line| session.respond(line)).collect()
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(respond_all(&[src]), vec![Some(expected.to_string())], "line: {src}");
}

fn assert_silent(src: &str) {
    assert_eq!(respond_all(&[src]), vec![None], "line: {src}");
}

fn assert_failure(src: &str) {
    assert_output(src, ERROR_MARKER);
}

#[test]
fn declaration_is_idempotent() {
    assert_output("integer x ; print x ;", ">> 0");
    assert_output("integer x ; integer x ; print x ;", ">> 0");
    assert_eq!(respond_all(&["integer x ; x = 5 ;", "integer x ; print x ;"]),
               vec![None, Some(">> 0".to_string())]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("integer a ; integer b ; integer c ; a = 5 ; b = 2 ; c = a + b * a - b ; print c ;",
                  ">> 13");
    assert_output("print 2 + 3 * 4 ;", ">> 14");
    assert_output("print ( 2 + 3 ) * 4 ;", ">> 20");
    assert_output("print 10 - 3 - 2 ;", ">> 5");
}

#[test]
fn unary_minus_applies_to_one_factor() {
    assert_output("integer a ; a = 4 ; print - a * 2 ;", ">> -8");
    assert_output("print - ( 2 + 3 ) ;", ">> -5");
    assert_output("print 7 - - 2 ;", ">> 9");
    assert_failure("print - - 2 ;");
}

#[test]
fn undeclared_identifiers_are_rejected() {
    assert_failure("print y ;");
    assert_failure("y = 1 ;");
    assert_failure("integer x ; x = y ;");
}

#[test]
fn undeclared_identifiers_are_rejected_in_untaken_branches() {
    assert_failure("integer i ; integer j ; i = 1 ; j = 0 ; if ( i < j ) { print z ; } else { print i ; } ;");
    assert_failure("integer i ; integer j ; i = 0 ; j = 1 ; if ( i < j ) { print i ; } else { z = 2 ; } ;");
    assert_failure("integer i ; integer j ; while ( i < j ) do { q = 1 ; } ;");
    assert_failure("integer i ; while ( i < z ) do { } ;");
}

#[test]
fn declarations_must_precede_statements() {
    assert_failure("integer x ; x = 1 ; integer y ;");
    assert_failure("print 1 ; integer y ;");
}

#[test]
fn while_loop_accumulates() {
    assert_output("integer i ; integer s ; integer n ; i = 0 ; s = 0 ; n = 3 ; while ( i < n ) do { s = s + i ; i = i + 1 ; } ; print s ;",
                  ">> 3");
}

#[test]
fn while_loop_prints_in_iteration_order() {
    assert_output("integer k ; integer j ; k = 30 ; j = 25 ; while ( k > j ) do { print ( k - j ) * 10 ; k = k - 1 ; } ; print k ;",
                  ">> 50 40 30 20 10 25");
}

#[test]
fn while_loop_that_never_runs_is_silent() {
    assert_silent("integer i ; integer j ; while ( i < j ) do { print i ; } ;");
}

#[test]
fn if_selects_the_else_branch_when_false() {
    assert_output("integer i ; integer k ; i = 5 ; k = 3 ; if ( i < k ) { print 1 ; } else { print 2 ; } ;",
                  ">> 2");
    assert_output("integer x ; integer y ; x = 10 + 5 * 2 ; y = 20 - 5 ; if ( x < y ) { print x - 5 ; } else { x = 7 ; print x + 5 ; } ;",
                  ">> 12");
}

#[test]
fn if_selects_the_then_branch_when_true() {
    assert_output("integer a ; integer b ; b = 1 ; if ( a != b ) { print 1 ; } else { print 2 ; } ;",
                  ">> 1");
    assert_output("integer a ; integer b ; if ( a == b ) { print 1 ; } else { } ;", ">> 1");
}

#[test]
fn untaken_branch_is_syntax_checked() {
    assert_failure("integer i ; integer k ; i = 5 ; k = 3 ; if ( i < k ) { print ; } else { print 2 ; } ;");
}

#[test]
fn nested_control_flow() {
    assert_output("integer i ; integer j ; integer k ; i = 0 ; j = 5 ; k = 3 ; while ( i < j ) do { if ( i < k ) { i = i + 1 ; print i ; } else { i = i + 1 ; } ; } ; print i ; print j * k ;",
                  ">> 1 2 3 5 15");
    assert_output("integer i ; integer j ; integer n ; integer c ; n = 3 ; while ( i < n ) do { j = 0 ; while ( j < n ) do { c = c + 1 ; j = j + 1 ; } ; i = i + 1 ; } ; print c ;",
                  ">> 9");
}

#[test]
fn conditions_compare_identifiers_only() {
    assert_failure("integer i ; while ( i < 3 ) do { } ;");
    assert_failure("integer i ; integer j ; if ( i < j j ) { } else { } ;");
    assert_failure("integer i ; integer j ; if ( i <= j ) { } else { } ;");
    assert_failure("integer i ; integer j ; if ( ) { } else { } ;");
}

#[test]
fn control_flow_requires_its_punctuation() {
    assert_failure("integer i ; integer j ; while ( i < j ) do { } ");
    assert_failure("integer i ; integer j ; while ( i < j ) { } ;");
    assert_failure("integer i ; integer j ; if ( i < j ) { } ;");
    assert_failure("integer i ; integer j ; if ( i < j { } else { } ;");
}

#[test]
fn unbalanced_braces_are_rejected() {
    assert_failure("integer i ; integer j ; if ( i < j ) { print i ; else { } ;");
    assert_failure("integer i ; integer j ; while ( i < j ) do { { } ;");
}

#[test]
fn block_declarations_take_effect_when_the_block_runs() {
    assert_output("integer z ; integer i ; integer j ; z = 9 ; if ( i == j ) { integer z ; z = z + 3 ; } else { } ; print z ;",
                  ">> 3");
    assert_failure("integer i ; integer j ; if ( i == j ) { integer w ; w = 3 ; } else { } ;");
}

#[test]
fn lexical_errors_are_reported_not_panicked() {
    assert_failure("integer X ;");
    assert_failure("Print 1 ;");
    assert_failure("integer x ; x = 1 : ");
    assert_failure("integer x ; x=1 ;");
    assert_failure("integer x1 ;");
    assert_failure("print 12345678901 ;");
}

#[test]
fn syntax_error_discards_the_whole_line_output() {
    assert_failure("print 1 ; print 2 ; print ;");
}

#[test]
fn effects_before_an_error_are_kept() {
    assert_eq!(respond_all(&["integer x ; x = 4 ; x = ;", "print x ;"]),
               vec![Some(ERROR_MARKER.to_string()), Some(">> 4".to_string())]);
}

#[test]
fn state_persists_across_lines() {
    assert_eq!(respond_all(&["integer a ; integer b ;", "a = 2 ; b = a * 10 ;", "print a + b ;"]),
               vec![None, None, Some(">> 22".to_string())]);
}

#[test]
fn overflow_is_rejected() {
    assert_failure("print 9999999999 * 9999999999 ;");
    assert_silent("integer i ; integer j ; while ( i < j ) do { print 9999999999 * 9999999999 ; } ;");
}

#[test]
fn loop_limit_bounds_runaway_loops() {
    let config = Config { show_prompt: false,
                          loop_limit:  Some(100), };
    let mut session = Session::new(config);

    assert_eq!(session.respond("integer i ; integer j ; j = 1 ; while ( i < j ) do { print i ; } ;"),
               Some(ERROR_MARKER.to_string()));
    assert_eq!(session.respond("integer i ; integer j ; j = 100 ; while ( i < j ) do { i = i + 1 ; } ; print i ;"),
               Some(">> 100".to_string()));
}

#[test]
fn session_state_tracks_declarations() {
    let mut session = Session::new(Config::quiet());
    assert!(session.state().is_empty());

    session.respond("integer a ; integer b ; integer a ; a = 3 ;");
    assert_eq!(session.state().len(), 2);
    assert_eq!(session.state().value("a"), 3);

    session.respond("print c ;");
    assert_eq!(session.state().len(), 2);
    assert!(!session.state().is_declared("c"));
}

#[test]
fn invalid_utf8_line_is_rejected_and_the_session_continues() {
    let mut session = Session::new(Config::quiet());
    let mut output = Vec::new();

    session.repl(&b"print 1 ;\nprint \xff ;\nprint 2 ;\n"[..], &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), ">> 1\n>> Syntax Error!\n>> 2\n");
}

#[test]
fn blank_line_ends_the_session() {
    let output = run_script("integer x ; print 1 ;\n   \nprint 2 ;\n", Config::quiet()).unwrap();
    assert_eq!(output, ">> 1\n");
}

#[test]
fn end_of_input_ends_the_session() {
    let output = run_script("print 1 ;\nprint 2 ;", Config::quiet()).unwrap();
    assert_eq!(output, ">> 1\n>> 2\n");
}

#[test]
fn prompt_is_written_before_each_read() {
    let config = Config { show_prompt: true,
                          loop_limit:  None, };
    let output = run_script("print 1 ;\nprint x ;\n", config).unwrap();
    assert_eq!(output, ">> >> 1\n>> >> Syntax Error!\n>> ");
}

#[test]
fn script_file_runs() {
    let script = fs::read_to_string("tests/sample.mi").expect("missing file");
    let output = run_script(&script, Config::quiet()).unwrap();
    assert_eq!(output, ">> 0\n>> 55\n>> 120\n>> Syntax Error!\n>> 120 10\n");
}
