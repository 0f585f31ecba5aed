//! The execution engine
//!
//! Programs run as a flat line-indexed sequence with a single instruction
//! pointer. `go` records the line after itself in a one-slot return
//! register; `return` consumes the register or, when it is empty, halts.
//! Every value flowing through evaluation is a word.

use super::env::Environment;
use super::error::{InterpResult, RuntimeError};
use super::value::Value;
use crate::ast::{Expr, FunctionKind, Program, Span, Statement, StatementKind};
use crate::lexicon::Lexicon;
use crate::numeral::{self, Numeral};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Pow, ToPrimitive, Zero};
use std::io::{self, BufRead, BufReader, Write};

/// Stack growth parameters for deeply nested expressions
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROW_SIZE: usize = 1024 * 1024;

/// Largest integer exponent evaluated exactly; beyond it `power` goes
/// through floating point
const MAX_EXACT_EXPONENT: i32 = 1000;

/// The interpreter for one program run
pub struct Interpreter<'a> {
    lexicon: &'a Lexicon,
    program: &'a Program,
    variables: Environment,
    /// 0-based index of the next statement to execute
    pointer: usize,
    /// Single-slot return register, filled by `go`, consumed by `return`
    return_to: Option<usize>,
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter wired to stdin/stdout
    pub fn new(lexicon: &'a Lexicon, program: &'a Program) -> Self {
        Self::with_io(
            lexicon,
            program,
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }

    /// Create an interpreter with explicit I/O streams
    pub fn with_io(
        lexicon: &'a Lexicon,
        program: &'a Program,
        input: Box<dyn BufRead + 'a>,
        output: Box<dyn Write + 'a>,
    ) -> Self {
        Interpreter {
            lexicon,
            program,
            variables: Environment::new(),
            pointer: 0,
            return_to: None,
            input,
            output,
        }
    }

    /// Run the program to completion
    pub fn run(&mut self) -> InterpResult<()> {
        let program = self.program;
        while self.pointer < program.len() {
            self.step(&program.statements[self.pointer])?;
        }
        self.output
            .flush()
            .map_err(|error| RuntimeError::io(error, Span::new(0, 0)))?;
        Ok(())
    }

    /// Number of live variable bindings, for diagnostics and tests
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    fn step(&mut self, statement: &Statement) -> InterpResult<()> {
        let len = self.program.len();
        match statement.kind {
            StatementKind::Assign => {
                // Value before target, so the target sees earlier state only
                let value = self.eval(&statement.args[1])?;
                let target = match &statement.args[0] {
                    Expr::Word { text, .. } => text.clone(),
                    expr => self.eval(expr)?.into_string(),
                };
                self.variables.assign(self.lexicon, &target, value);
                self.pointer += 1;
            }
            StatementKind::Calculate => {
                let word = self.eval(&statement.args[0])?;
                let value = word.numeral(self.lexicon);
                writeln!(self.output, "{}", numeral::display(&value))
                    .map_err(|error| RuntimeError::io(error, statement.span))?;
                self.pointer += 1;
            }
            StatementKind::Print => {
                let word = self.eval(&statement.args[0])?;
                writeln!(self.output, "{word}")
                    .map_err(|error| RuntimeError::io(error, statement.span))?;
                self.pointer += 1;
            }
            StatementKind::Exit => {
                self.pointer = len;
            }
            StatementKind::Go => {
                let word = self.eval(&statement.args[0])?;
                let target = numeral::trunc(&word.numeral(self.lexicon));
                let index = target
                    .to_usize()
                    .filter(|&index| index < len)
                    .ok_or_else(|| {
                        RuntimeError::jump_out_of_range(&target, len, statement.span)
                    })?;
                self.return_to = Some(self.pointer + 1);
                self.pointer = index;
            }
            StatementKind::Return => {
                // An empty register halts, like exit
                self.pointer = self.return_to.take().unwrap_or(len);
            }
            StatementKind::If => {
                let word = self.eval(&statement.args[0])?;
                self.pointer += if word.is_truthy(self.lexicon) { 1 } else { 2 };
            }
        }
        Ok(())
    }

    /// Evaluate an expression to a word
    fn eval(&mut self, expr: &Expr) -> InterpResult<Value> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> InterpResult<Value> {
        let (kind, args, span) = match expr {
            Expr::Word { text, .. } => {
                let word = match self.variables.lookup(self.lexicon, text) {
                    Some(value) => value.clone(),
                    None => Value::new(text.clone()),
                };
                return Ok(word);
            }
            Expr::Call { kind, args, span } => (*kind, args, *span),
        };

        match kind {
            FunctionKind::Add => {
                let (left, right) = self.eval_pair(args)?;
                Ok(self.render(&(self.number(&left) + self.number(&right))))
            }
            FunctionKind::Subtract => {
                let (left, right) = self.eval_pair(args)?;
                Ok(self.render(&(self.number(&left) - self.number(&right))))
            }
            FunctionKind::Multiply => {
                let (left, right) = self.eval_pair(args)?;
                Ok(self.render(&(self.number(&left) * self.number(&right))))
            }
            FunctionKind::Divide => {
                let (left, right) = self.eval_pair(args)?;
                let divisor = self.number(&right);
                if divisor.is_zero() {
                    return Err(RuntimeError::division_by_zero("division", span));
                }
                Ok(self.render(&(self.number(&left) / divisor)))
            }
            FunctionKind::Modulus => {
                let (left, right) = self.eval_pair(args)?;
                let divisor = self.number(&right);
                if divisor.is_zero() {
                    return Err(RuntimeError::division_by_zero("modulus", span));
                }
                // Floored semantics: the result carries the divisor's sign
                let dividend = self.number(&left);
                let quotient = (&dividend / &divisor).floor();
                Ok(self.render(&(dividend - divisor * quotient)))
            }
            FunctionKind::Power => {
                let (left, right) = self.eval_pair(args)?;
                let base = self.number(&left);
                let exponent = self.number(&right);
                if exponent.is_integer() {
                    if let Some(exp) = exponent
                        .to_integer()
                        .to_i32()
                        .filter(|exp| exp.abs() <= MAX_EXACT_EXPONENT)
                    {
                        if base.is_zero() && exp < 0 {
                            return Err(RuntimeError::division_by_zero("power", span));
                        }
                        return Ok(self.render(&base.pow(exp)));
                    }
                }
                let float = match (base.to_f64(), exponent.to_f64()) {
                    (Some(base), Some(exponent)) => base.powf(exponent),
                    _ => f64::NAN,
                };
                match Numeral::from_float(float) {
                    Some(value) => Ok(self.render(&value)),
                    None => Err(RuntimeError::overflow("power", span)),
                }
            }
            FunctionKind::Equal => {
                let (left, right) = self.eval_pair(args)?;
                Ok(self.truth(self.number(&left) == self.number(&right)))
            }
            FunctionKind::Greater => {
                let (left, right) = self.eval_pair(args)?;
                Ok(self.truth(self.number(&left) > self.number(&right)))
            }
            FunctionKind::Less => {
                let (left, right) = self.eval_pair(args)?;
                Ok(self.truth(self.number(&left) < self.number(&right)))
            }
            FunctionKind::Not => {
                let word = self.eval(&args[0])?;
                Ok(self.truth(!word.is_truthy(self.lexicon)))
            }
            FunctionKind::And => {
                // Both sides always evaluate; the result is an operand word
                let (left, right) = self.eval_pair(args)?;
                if !left.is_truthy(self.lexicon) {
                    Ok(left)
                } else if !right.is_truthy(self.lexicon) {
                    Ok(right)
                } else {
                    Ok(left)
                }
            }
            FunctionKind::Or => {
                let (left, right) = self.eval_pair(args)?;
                if left.is_truthy(self.lexicon) || !right.is_truthy(self.lexicon) {
                    Ok(left)
                } else {
                    Ok(right)
                }
            }
            FunctionKind::Concatenate => {
                let (left, right) = self.eval_pair(args)?;
                Ok(Value::new(format!("{left}{right}")))
            }
            FunctionKind::Left => {
                let (word, length) = self.eval_pair(args)?;
                let cut = self.wrap_length(&word, &length);
                Ok(Value::new(word.as_str().chars().take(cut).collect::<String>()))
            }
            FunctionKind::Right => {
                let (word, length) = self.eval_pair(args)?;
                let cut = self.wrap_length(&word, &length);
                Ok(Value::new(word.as_str().chars().skip(cut).collect::<String>()))
            }
            FunctionKind::Period => Ok(Value::new(".")),
            FunctionKind::Space => Ok(Value::new(" ")),
            FunctionKind::True => Ok(self.truth(true)),
            FunctionKind::False => Ok(self.truth(false)),
            FunctionKind::Input => {
                let prompt = self.eval(&args[0])?;
                write!(self.output, "{prompt}? ")
                    .and_then(|()| self.output.flush())
                    .map_err(|error| RuntimeError::io(error, span))?;
                self.read_word(span)
            }
        }
    }

    fn eval_pair(&mut self, args: &[Expr]) -> InterpResult<(Value, Value)> {
        let left = self.eval(&args[0])?;
        let right = self.eval(&args[1])?;
        Ok((left, right))
    }

    fn number(&self, word: &Value) -> Numeral {
        word.numeral(self.lexicon)
    }

    fn render(&self, value: &Numeral) -> Value {
        Value::new(numeral::render(self.lexicon, value))
    }

    /// The lexicon's word for a truth value: the first `true` (`false`)
    /// alias that encodes to exactly one (zero), else the rendered numeral.
    fn truth(&self, truthy: bool) -> Value {
        let (label, want) = if truthy {
            (FunctionKind::True, Numeral::from_integer(BigInt::from(1)))
        } else {
            (FunctionKind::False, Numeral::zero())
        };
        for (alias, kind) in self.lexicon.functions() {
            if *kind == label && numeral::encode(self.lexicon, alias) == want {
                return Value::new(alias.clone());
            }
        }
        self.render(&want)
    }

    /// A `left`/`right` cut point: the length numeral truncated and wrapped
    /// into `0..=len`, so any numeral names a valid split.
    fn wrap_length(&self, word: &Value, length: &Value) -> usize {
        let len = word.as_str().chars().count();
        let cut = numeral::trunc(&self.number(length)).mod_floor(&BigInt::from(len + 1));
        cut.to_usize().unwrap_or(0)
    }

    /// Read one whitespace-delimited word from the input stream.
    ///
    /// Bytes accumulate until the word is complete, so multi-byte UTF-8
    /// sequences survive buffer boundaries; the final conversion rejects
    /// input that is not UTF-8.
    fn read_word(&mut self, span: Span) -> InterpResult<Value> {
        let mut word = Vec::new();
        loop {
            let buffer = self
                .input
                .fill_buf()
                .map_err(|error| RuntimeError::io(error, span))?;
            if buffer.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &byte in buffer {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if word.is_empty() {
                        continue;
                    }
                    done = true;
                    break;
                }
                word.push(byte);
            }
            self.input.consume(used);
            if done {
                break;
            }
        }
        let word = String::from_utf8(word).map_err(|error| {
            RuntimeError::io(io::Error::new(io::ErrorKind::InvalidData, error), span)
        })?;
        Ok(Value::new(word))
    }
}
