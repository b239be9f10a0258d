use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn bfrun() -> Command {
    Command::cargo_bin("bfrun").unwrap()
}

fn program_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn no_arguments_prints_usage_hint_and_exits_zero() {
    bfrun()
        .assert()
        .success()
        .stdout(predicate::str::contains("provide the path"));
}

#[test]
fn missing_file_exits_nonzero_with_diagnostic() {
    bfrun()
        .arg("does-not-exist.bf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such file"));
}

#[test]
fn hello_world_program_prints_hello_world() {
    let file = program_file(
        "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.\
         +++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.",
    );
    bfrun()
        .arg(file.path())
        .assert()
        .success()
        .stdout("Hello World!\n");
}

#[test]
fn comments_and_whitespace_are_ignored() {
    let file = program_file("emit one: +\n.\t(that was it)\n");
    bfrun()
        .arg(file.path())
        .assert()
        .success()
        .stdout("\u{1}");
}

#[test]
fn echo_program_round_trips_stdin() {
    let file = program_file(",[.,]");
    bfrun()
        .arg(file.path())
        .write_stdin("hi\n")
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn drain_input_reads_one_keystroke_per_line() {
    let file = program_file(",.,.");
    bfrun()
        .arg(file.path())
        .arg("--drain-input")
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("ab");
}

#[test]
fn pointer_underrun_exits_nonzero() {
    let file = program_file("<");
    bfrun()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("pointer out of bounds"));
}

#[test]
fn unmatched_open_bracket_exits_nonzero() {
    let file = program_file("[");
    bfrun()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched '['"));
}

#[test]
fn runtime_errors_print_nothing_on_stdout() {
    let file = program_file("<");
    bfrun()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
