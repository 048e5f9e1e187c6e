//! JSON I/O handling for CLI
//!
//! - Input: one JSON document on stdin (may span lines)
//! - Output: one JSON document on stdout
//! - Logs never go to stdout

use std::io::{self, Read, Write};

use super::errors::{CliError, CliResult};

/// Read the whole of stdin as one request body
pub fn read_request() -> CliResult<String> {
    read_request_from(io::stdin().lock())
}

pub fn read_request_from<R: Read>(mut reader: R) -> CliResult<String> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;

    if body.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }
    Ok(body)
}

/// Write an error object to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_json(&response.to_string())
}

/// Write a raw JSON string to stdout
pub fn write_json(json_str: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", json_str)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_multiline_body() {
        let body = read_request_from("{\n  \"arguments\": {}\n}\n".as_bytes()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value["arguments"].is_object());
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = read_request_from("  \n".as_bytes()).unwrap_err();
        assert_eq!(err.message(), "Empty input");
    }
}
