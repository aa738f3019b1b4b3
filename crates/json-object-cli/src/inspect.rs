//! Interactive inspector: a line-oriented loop over a parsed document.
//!
//! Commands:
//!
//! - `obj` prints the whole document
//! - `obj[<int>]` / `obj["<key>"]` print a child, and segments chain
//!   (`obj["school"][1]`)
//! - `exit` ends the loop
//!
//! Anything else prints `Invalid command.` and the loop keeps going. Lookups
//! never modify the document; a missing key or wrong container type prints an
//! `Error:` line instead.

use std::io::{self, BufRead, Write};

use json_object::{AccessError, Value};
use log::debug;

pub const PROMPT: &str = "> ";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// One step of a path into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Index(usize),
    Key(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(Vec<Segment>),
    Exit,
}

/// Parse one input line. `None` means the line is not a command.
///
/// Bracket contents are read with the json-object parser itself, so keys take the
/// same escapes as document strings.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line == "exit" {
        return Some(Command::Exit);
    }

    let mut rest = line.strip_prefix("obj")?;
    let mut path = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let (segment, len) = json_object::parse(inner).ok()?;
        let after = inner[len..].trim_start();
        rest = after.strip_prefix(']')?;
        path.push(match segment {
            Value::Int(n) => Segment::Index(usize::try_from(n).ok()?),
            Value::String(key) => Segment::Key(key),
            _ => return None,
        });
    }
    Some(Command::Show(path))
}

/// Follow `path` from `root` without inserting anything.
pub fn resolve<'v>(root: &'v Value, path: &[Segment]) -> Result<&'v Value, AccessError> {
    path.iter().try_fold(root, |node, segment| match segment {
        Segment::Index(i) => node.get_index(*i),
        Segment::Key(key) => node.get_key(key),
    })
}

/// Run the loop until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(root: &Value, input: R, mut output: W) -> io::Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Exit) => {
                debug!("inspector exiting");
                return Ok(());
            }
            Some(Command::Show(path)) => match resolve(root, &path) {
                Ok(value) => writeln!(output, "{value}")?,
                Err(err) => writeln!(output, "Error: {err}")?,
            },
            None => writeln!(output, "{INVALID_COMMAND}")?,
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    Ok(())
}
