use std::fs;

use treelox::{error::Diagnostics, run};
use walkdir::WalkDir;

/// What a fixture expects from running its source.
#[derive(Debug, PartialEq)]
enum Expectation {
    /// The expression evaluates and prints this text.
    Output(String),
    /// Running reports exactly these diagnostics, in order.
    Errors(Vec<String>),
}

#[test]
fn fixtures_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").sort_by_file_name()
                                      .into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;

        let expected = parse_expectation(&source)
            .unwrap_or_else(|| panic!("Fixture {path:?} has no `// expect:` or `// error:` line"));

        let mut diagnostics = Diagnostics::new();
        let actual = match run(&source, &mut diagnostics) {
            Some(value) if diagnostics.is_empty() => Expectation::Output(value.to_string()),
            _ => Expectation::Errors(diagnostics.iter().map(ToString::to_string).collect()),
        };

        assert_eq!(actual, expected, "Fixture {path:?} failed:\n{source}");
    }

    assert!(count > 0, "No fixtures found in tests/fixtures");
}

/// Reads the annotations of a fixture.
///
/// `// expect: <text>` gives the printed value. Every `// error: <text>`
/// line adds one expected diagnostic line; a runtime error spans two of them.
fn parse_expectation(source: &str) -> Option<Expectation> {
    let mut output = None;
    let mut errors = Vec::new();

    for line in source.lines() {
        let Some((_, comment)) = line.split_once("//") else {
            continue;
        };
        let comment = comment.trim();

        if let Some(text) = comment.strip_prefix("expect:") {
            output = Some(text.trim().to_string());
        } else if let Some(text) = comment.strip_prefix("error:") {
            errors.push(text.trim().to_string());
        }
    }

    if !errors.is_empty() {
        // Runtime errors print their message and line on separate lines.
        let mut joined: Vec<String> = Vec::new();
        for error in errors {
            match joined.last_mut() {
                Some(last) if error.starts_with("[line") && !error.contains("Error") => {
                    last.push('\n');
                    last.push_str(&error);
                },
                _ => joined.push(error),
            }
        }
        return Some(Expectation::Errors(joined));
    }

    output.map(Expectation::Output)
}
