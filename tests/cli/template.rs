use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{InputFile, USAGE};

fn template() -> Command {
    Command::new(env!("CARGO_BIN_EXE_template"))
}

#[test]
fn echoes_input_length() {
    let input = InputFile::new("hello world\n");
    template()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("P1: 12\nP1: 12\n\nTime: "));
}

#[test]
fn length_is_in_bytes() {
    let input = InputFile::new([0xff, 0xfe, b'a']);
    template()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("P1: 3\nP1: 3\n"));
}

#[test]
fn no_arguments_prints_usage() {
    template().assert().code(1).stdout(USAGE);
}

#[test]
fn missing_file_reports_unreadable_input() {
    let input = InputFile::new("");
    template()
        .arg(input.missing_sibling())
        .assert()
        .code(1)
        .stdout("Unable to open file\n");
}
