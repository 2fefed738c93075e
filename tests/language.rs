use std::sync::{Arc, Mutex};

use bluedog::{
    dispatch::{Capability, Registry},
    error::DispatchError,
    execute,
};

fn eval(src: &str) -> Result<i64, Box<dyn std::error::Error>> {
    execute(src, "test.bd", &Registry::new())
}

fn assert_result(src: &str, expected: i64) {
    match eval(src) {
        Ok(result) => assert_eq!(result, expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {e}\nScript: {src}"),
    }
}

fn assert_failure(src: &str, expected_fragment: &str) {
    match eval(src) {
        Ok(result) => panic!("Script succeeded with {result} but was expected to fail: {src}"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(expected_fragment),
                    "Error '{message}' does not mention '{expected_fragment}'");
        },
    }
}

#[test]
fn addition_of_two_literals() {
    assert_result("3 + 4", 7);
    assert_result("10+32", 42);
    assert_result("  1 +\n1  ", 2);
    assert_result("0 + 0", 0);
}

#[test]
fn lone_literal_evaluates_to_itself() {
    assert_result("42", 42);
    assert_result("0", 0);
    assert_result("9001", 9001);
}

#[test]
fn tokens_after_the_expression_are_ignored() {
    assert_result("1 + 2 3", 3);
    assert_result("5 dog", 5);
    assert_result("7 + 8 + 9", 15);
}

#[test]
fn largest_literal_still_fits() {
    let src = format!("{}", i64::MAX);
    assert_result(&src, i64::MAX);
}

#[test]
fn empty_source_is_an_error() {
    assert_failure("", "Unexpected end of input");
    assert_failure("   \n  ", "Unexpected end of input");
}

#[test]
fn missing_right_operand_is_an_error() {
    assert_failure("1 +", "Unexpected end of input");
}

#[test]
fn unknown_characters_are_an_error() {
    assert_failure("3 $ 4", "Unexpected token");
    assert_failure("#", "Unexpected token");
}

#[test]
fn non_numeric_operands_are_an_error() {
    assert_failure("dog", "not a valid number literal");
    assert_failure("1 + dog", "not a valid number literal");
    assert_failure("+ 1", "not a valid number literal");
}

#[test]
fn addition_overflow_is_an_error() {
    let src = format!("{} + 1", i64::MAX);
    assert_failure(&src, "Integer overflow");
}

#[test]
fn error_messages_carry_line_numbers() {
    assert_failure("1 +\ndog", "Error on line 2");
    assert_failure("\n\n$", "Error on line 3");
}

/// A capability that records every filename it is invoked with.
struct RecordingPlugin {
    name:  String,
    fired: Arc<Mutex<Vec<String>>>,
}

impl RecordingPlugin {
    fn new(name: &str, fired: &Arc<Mutex<Vec<String>>>) -> Self {
        Self { name:  name.to_string(),
               fired: Arc::clone(fired), }
    }
}

impl Capability for RecordingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, filename: &str) -> Result<(), DispatchError> {
        self.fired
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, filename));
        Ok(())
    }
}

#[test]
fn first_matching_plugin_wins() {
    let fired = Arc::new(Mutex::new(Vec::new()));

    let mut registry = Registry::new();
    registry.register_plugin(Box::new(RecordingPlugin::new("foo", &fired)));
    registry.register_plugin(Box::new(RecordingPlugin::new("foobar", &fired)));

    registry.dispatch("foobar.bd");

    assert_eq!(*fired.lock().unwrap(), vec!["foo:foobar.bd"]);
}

#[test]
fn no_match_is_silent() {
    let fired = Arc::new(Mutex::new(Vec::new()));

    let mut registry = Registry::new();
    registry.register_plugin(Box::new(RecordingPlugin::new("alpha", &fired)));
    registry.register_module(Box::new(RecordingPlugin::new("beta", &fired)));

    registry.dispatch("plain.bd");

    assert!(fired.lock().unwrap().is_empty());
}

#[test]
fn plugins_and_modules_match_independently() {
    let fired = Arc::new(Mutex::new(Vec::new()));

    let mut registry = Registry::new();
    registry.register_plugin(Box::new(RecordingPlugin::new("report", &fired)));
    registry.register_module(Box::new(RecordingPlugin::new("report", &fired)));

    registry.dispatch("report.bd");

    assert_eq!(*fired.lock().unwrap(),
               vec!["report:report.bd", "report:report.bd"]);
}

#[test]
fn dispatch_runs_even_when_the_source_is_malformed() {
    let fired = Arc::new(Mutex::new(Vec::new()));

    let mut registry = Registry::new();
    registry.register_plugin(Box::new(RecordingPlugin::new("broken", &fired)));

    let result = execute("", "broken.bd", &registry);

    assert!(result.is_err());
    assert_eq!(*fired.lock().unwrap(), vec!["broken:broken.bd"]);
}
