//! Integration tests for the mondegreen interpreter
//!
//! Each test runs a complete source program through the full pipeline:
//! tokenize, parse against the English lexicon, execute with captured I/O.

use mondegreen::interp::{ErrorKind, Interpreter, RuntimeError};
use mondegreen::lexicon::Lexicon;
use mondegreen::parser::parse;
use std::io::Cursor;

/// Run a program with the English lexicon and captured I/O
fn run_with_input(source: &str, stdin: &str) -> Result<String, RuntimeError> {
    let lexicon = Lexicon::english();
    let program = parse(source, &lexicon).expect("program parses");
    let mut output = Vec::new();
    {
        let mut interpreter = Interpreter::with_io(
            &lexicon,
            &program,
            Box::new(Cursor::new(stdin.as_bytes().to_vec())),
            Box::new(&mut output),
        );
        interpreter.run()?;
    }
    Ok(String::from_utf8(output).expect("output is utf-8"))
}

fn run(source: &str) -> String {
    run_with_input(source, "").expect("program runs")
}

fn run_error(source: &str) -> RuntimeError {
    run_with_input(source, "").expect_err("program faults")
}

// ============================================
// Words, printing, concatenation
// ============================================

#[test]
fn hello_world() {
    assert_eq!(run("say fuse hello fuse gap world"), "hello world\n");
}

#[test]
fn constants_period_and_space() {
    assert_eq!(run("say fuse end period"), "end.\n");
    assert_eq!(run("say fuse a fuse gap b"), "a b\n");
}

#[test]
fn misheard_aliases_still_dispatch() {
    // kose is one letter off fuse, mope one letter off gap
    assert_eq!(run("say kose hello kose mope world"), "hello world\n");
}

// ============================================
// Numerals and calculate
// ============================================

#[test]
fn calculate_integers_and_fractions() {
    // beef encodes to 3, c.j to 4/3
    assert_eq!(run("reckon beef reckon c.j"), "3\n1.3333333333333333\n");
}

#[test]
fn arithmetic_over_words() {
    // dee is a plain word encoding 2
    let source = "reckon add beef dee \
                  reckon minus beef dee \
                  reckon multiply beef dee \
                  reckon divide beef dee \
                  reckon modulus beef dee \
                  reckon power dee beef";
    assert_eq!(run(source), "5\n1\n6\n1.5\n1\n8\n");
}

#[test]
fn comparisons_yield_truth_words() {
    let source = "say same beef beef \
                  say bigger dee beef \
                  say less dee beef \
                  say not bozo";
    assert_eq!(run(source), "ace\nbozo\nace\nace\n");
}

#[test]
fn and_or_return_operand_words() {
    assert_eq!(run("say both hello world"), "hello\n");
    assert_eq!(run("say either bozo world"), "world\n");
    assert_eq!(run("say both hello bozo"), "bozo\n");
}

// ============================================
// Variables
// ============================================

#[test]
fn assignment_and_fuzzy_lookup() {
    // cnt reaches the binding created as canot
    assert_eq!(run("set canot beef say cnt"), "beef\n");
}

#[test]
fn unbound_words_are_literals() {
    assert_eq!(run("say nothing"), "nothing\n");
}

#[test]
fn left_and_right_split_words() {
    assert_eq!(
        run("say left mondegreen beef say right mondegreen beef"),
        "mon\ndegreen\n"
    );
}

// ============================================
// Control flow
// ============================================

#[test]
fn if_advances_one_or_two() {
    assert_eq!(
        run("when bozo set count beef say fuse count count"),
        "countcount\n"
    );
    assert_eq!(
        run("when ace set count beef say fuse count count"),
        "beefbeef\n"
    );
}

#[test]
fn go_and_return_round_trip() {
    // fee is 3: jump to the final back, which returns to line 1
    assert_eq!(run("jump fee say hurrah quit back"), "hurrah\n");
}

#[test]
fn fractional_jump_targets_truncate_toward_zero() {
    // c.w encodes to 35/18, just shy of 2: the jump lands on line 1, not 2
    assert_eq!(run("jump c.w say low say high"), "low\nhigh\n");
}

#[test]
fn return_with_empty_register_halts() {
    assert_eq!(run("back say hurrah"), "");
}

#[test]
fn countdown_loop() {
    let source = "set count beef \
                  when count jump beg quit \
                  set count minus count ace \
                  say count jump boc";
    assert_eq!(run(source), "d\nc\n\n");
}

#[test]
fn truncated_program_ends_with_exit() {
    // the trailing set lacks its arguments; parsing closes with exit
    assert_eq!(run("say hello set count"), "hello\n");
}

// ============================================
// Input
// ============================================

#[test]
fn input_prompts_and_reads_a_word() {
    let output = run_with_input("set person listen who say fuse hi fuse gap person", "bob")
        .expect("program runs");
    assert_eq!(output, "who? hi bob\n");
}

#[test]
fn input_preserves_multibyte_words() {
    let output = run_with_input("say listen who", "café").expect("program runs");
    assert_eq!(output, "who? café\n");
}

// ============================================
// Runtime faults
// ============================================

#[test]
fn division_by_zero_faults() {
    assert_eq!(run_error("reckon divide ace bozo").kind, ErrorKind::DivisionByZero);
    assert_eq!(run_error("reckon modulus ace bozo").kind, ErrorKind::DivisionByZero);
}

#[test]
fn jump_out_of_range_faults() {
    // nope encodes to 191, far past the end
    assert_eq!(run_error("jump nope").kind, ErrorKind::JumpOutOfRange);
    assert_eq!(run_error("jump c- say hi").kind, ErrorKind::JumpOutOfRange);
}

// ============================================
// Alternate lexicons
// ============================================

#[test]
fn custom_lexicon_drives_dispatch() {
    let lexicon = Lexicon::parse(
        "digits: bcdfghjklmnpqrstvw\n\
         decimals: .\n\
         signs: -\n\
         print: d\n\
         exit: g\n",
    )
    .expect("lexicon parses");
    // f is equidistant from d and g; the earlier declaration wins
    let program = parse("f f", &lexicon).expect("program parses");
    let mut output = Vec::new();
    {
        let mut interpreter = Interpreter::with_io(
            &lexicon,
            &program,
            Box::new(Cursor::new(Vec::new())),
            Box::new(&mut output),
        );
        interpreter.run().expect("program runs");
    }
    assert_eq!(String::from_utf8(output).unwrap(), "f\n");
}

#[test]
fn invalid_lexicons_are_rejected() {
    assert!(Lexicon::parse("decimals: .\nsigns: -\n").is_err());
    assert!(Lexicon::parse("digits: bb\ndecimals: .\nsigns: -\n").is_err());
    assert!(Lexicon::parse("digits: bc\ndecimals: b\nsigns: -\n").is_err());
    assert!(Lexicon::parse("digits: bc\ndecimals: .\nsigns: -\nshout: s\n").is_err());
}
