//! Session transcripts driven through in-memory input and output.

use std::io::{Cursor, Write};

use cairn_core::Statement;
use cairn_executor::{ExecResult, Executor, PlaceholderExecutor};
use cairn_repl::{BufferedReader, LineReader, ReadLine, Repl, ReplResult, SessionEnd};
use pretty_assertions::assert_eq;

fn run_session(input: &str) -> (SessionEnd, String) {
    run_session_with(input, false)
}

fn run_session_with(input: &str, report_unrecognized: bool) -> (SessionEnd, String) {
    let reader = BufferedReader::new(Cursor::new(input.as_bytes().to_vec()));
    let mut repl = Repl::new(reader, PlaceholderExecutor::new(), Vec::new())
        .report_unrecognized_statements(report_unrecognized);
    let end = repl.run().unwrap();
    let (_, out) = repl.into_parts();
    (end, String::from_utf8(out).unwrap())
}

#[test]
fn insert_select_exit_scenario() {
    let (end, out) = run_session("insert x\nselect y\n.exit\n");
    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(
        out,
        "db > This is where we would do an insert.\n\
         SQL command: insert x\n\
         db > This is where we would do a select.\n\
         SQL command: select y\n\
         db > "
    );
}

#[test]
fn unknown_meta_command_keeps_session_running() {
    let (end, out) = run_session(".bogus\nselect\n.exit\n");
    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(
        out,
        "db > Unrecognized command '.bogus'.\n\
         db > This is where we would do a select.\n\
         SQL command: select\n\
         db > "
    );
}

#[test]
fn unrecognized_statements_are_silent() {
    let (_, out) = run_session("update t\nINSERT 1\n\n  select\n.exit\n");
    assert_eq!(out, "db > db > db > db > db > ");
}

#[test]
fn unrecognized_statements_reported_when_enabled() {
    let (_, out) = run_session_with("update t\n\n.exit\n", true);
    assert_eq!(
        out,
        "db > Unrecognized keyword at start of 'update t'.\n\
         db > Unrecognized keyword at start of ''.\n\
         db > "
    );
}

#[test]
fn exit_produces_no_further_output() {
    let (end, out) = run_session(".exit\nselect\ninsert\n");
    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(out, "db > ");
}

#[test]
fn end_of_input_ends_session() {
    let (end, out) = run_session("select");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(
        out,
        "db > This is where we would do a select.\nSQL command: select\ndb > "
    );
}

#[test]
fn crlf_input_is_echoed_without_terminator() {
    let (_, out) = run_session("insert 1 a b\r\n.exit\r\n");
    assert_eq!(
        out,
        "db > This is where we would do an insert.\n\
         SQL command: insert 1 a b\n\
         db > "
    );
}

#[test]
fn exit_literal_is_exact() {
    let (end, out) = run_session(".EXIT\n.exit \n");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(
        out,
        "db > Unrecognized command '.EXIT'.\n\
         db > Unrecognized command '.exit '.\n\
         db > "
    );
}

/// Executor that records what the session asked of it.
#[derive(Default)]
struct RecordingExecutor {
    statements: Vec<Statement>,
    shutdowns: usize,
}

impl Executor for RecordingExecutor {
    fn execute(&mut self, stmt: Statement, out: &mut dyn Write) -> ExecResult<()> {
        writeln!(out, "ran {}", stmt.kind())?;
        self.statements.push(stmt);
        Ok(())
    }

    fn shutdown(&mut self) -> ExecResult<()> {
        self.shutdowns += 1;
        Ok(())
    }
}

#[test]
fn custom_executor_receives_prepared_statements() {
    let reader = BufferedReader::new(Cursor::new(b"select a\nnope\ninsert b\n.exit\n".to_vec()));
    let mut repl = Repl::new(reader, RecordingExecutor::default(), Vec::new());
    repl.run().unwrap();

    let (executor, out) = repl.into_parts();
    assert_eq!(
        executor.statements,
        vec![
            Statement::empty(cairn_core::StatementKind::Select),
            Statement::empty(cairn_core::StatementKind::Insert),
        ]
    );
    assert_eq!(executor.shutdowns, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "db > ran select\nSQL command: select a\ndb > db > ran insert\nSQL command: insert b\ndb > "
    );
}

#[test]
fn shutdown_runs_once_on_end_of_input() {
    let reader = BufferedReader::new(Cursor::new(Vec::new()));
    let mut repl = Repl::new(reader, RecordingExecutor::default(), Vec::new());
    assert_eq!(repl.run().unwrap(), SessionEnd::EndOfInput);
    assert_eq!(repl.executor().shutdowns, 1);
}

/// Line source that replays scripted reads, including interrupts.
struct ScriptedReader {
    reads: std::vec::IntoIter<ReadLine>,
    closed: bool,
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> ReplResult<ReadLine> {
        write!(out, "{}", prompt)?;
        Ok(self.reads.next().unwrap_or(ReadLine::EndOfInput))
    }

    fn close(&mut self) -> ReplResult<()> {
        self.closed = true;
        Ok(())
    }
}

#[test]
fn interrupt_discards_line_and_reprompts() {
    let reader = ScriptedReader {
        reads: vec![
            ReadLine::Interrupted,
            ReadLine::Line("select".into()),
            ReadLine::Line(".exit".into()),
        ]
        .into_iter(),
        closed: false,
    };
    let mut repl = Repl::new(reader, PlaceholderExecutor::new(), Vec::new());
    assert_eq!(repl.run().unwrap(), SessionEnd::Exit);

    let (executor, out) = repl.into_parts();
    assert!(executor.is_shut_down());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "db > db > This is where we would do a select.\nSQL command: select\ndb > "
    );
}
