//! Shared helpers for the integration tests.

#![allow(dead_code, reason = "Each test binary uses a subset of the helpers")]

use cssparser::{ParseError, Parser, ParserInput};

/// Route `log` output through the test harness.
pub fn init_logging() {
    if let Err(err) = env_logger::builder().is_test(true).try_init() {
        log::trace!("logger already installed: {err}");
    }
}

/// Whether `text` is exactly one `name(...)` function whose arguments tokenize cleanly.
pub fn parses_as_function(text: &str, name: &str) -> bool {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    if parser.expect_function_matching(name).is_err() {
        return false;
    }
    let arguments: Result<(), ParseError<'_, ()>> = parser.parse_nested_block(|block| {
        while block.next_including_whitespace_and_comments().is_ok() {}
        Ok(())
    });
    arguments.is_ok() && parser.is_exhausted()
}

/// Whether `text` is a `var()` whose first argument is a custom property ident,
/// optionally followed by a comma and a fallback.
pub fn parses_as_var(text: &str) -> bool {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    if parser.expect_function_matching("var").is_err() {
        return false;
    }
    let arguments: Result<(), ParseError<'_, ()>> = parser.parse_nested_block(|block| {
        let is_custom = block.expect_ident()?.starts_with("--");
        if !is_custom {
            return Err(block.new_custom_error(()));
        }
        if block.is_exhausted() {
            return Ok(());
        }
        block.expect_comma()?;
        while block.next_including_whitespace_and_comments().is_ok() {}
        Ok(())
    });
    arguments.is_ok() && parser.is_exhausted()
}
