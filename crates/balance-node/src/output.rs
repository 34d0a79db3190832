//! Output formatting

use balance_core::Response;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Output builder for formatted CLI output
pub struct Output {
    json_mode: bool,
    fields: BTreeMap<String, Value>,
    message: Option<String>,
}

impl Output {
    /// Create a new output builder
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            fields: BTreeMap::new(),
            message: None,
        }
    }

    /// Add a string field to the output
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a JSON value field to the output
    pub fn field_value(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Set the human-readable message
    pub fn message(mut self, msg: &str) -> Self {
        self.message = Some(msg.to_string());
        self
    }

    /// Render without printing
    pub fn render(&self) -> Option<String> {
        if self.json_mode {
            Some(serde_json::to_string_pretty(&json!(self.fields)).unwrap_or_default())
        } else {
            self.message.clone()
        }
    }

    /// Print the output
    pub fn print(self) {
        if let Some(text) = self.render() {
            println!("{}", text);
        }
    }
}

/// Build the output for an invocation response.
///
/// Text mode shows the payload, or the message on failure.
pub fn response_output(response: &Response, json_mode: bool) -> Output {
    let fields = match serde_json::to_value(response) {
        Ok(Value::Object(map)) => map,
        _ => Default::default(),
    };
    let mut output = fields
        .into_iter()
        .fold(Output::new(json_mode), |out, (key, value)| out.field_value(&key, value));

    if response.is_ok() {
        if let Some(payload) = response.payload_str() {
            output = output.message(&payload);
        }
    } else {
        output = output.message(&format!("Error: {}", response.message));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use balance_core::ContractError;

    fn payload(value: &str) -> Response {
        Response::success(Some(value.as_bytes().to_vec().into()))
    }

    #[test]
    fn test_text_payload() {
        let output = response_output(&payload("30"), false);
        assert_eq!(output.render().as_deref(), Some("30"));
    }

    #[test]
    fn test_text_empty_success() {
        let output = response_output(&Response::success(None), false);
        assert_eq!(output.render(), None);
    }

    #[test]
    fn test_text_error() {
        let response = Response::error(&ContractError::AccountExists("alice".into()));
        let output = response_output(&response, false);
        assert_eq!(output.render().as_deref(), Some("Error: account already exists: alice"));
    }

    #[test]
    fn test_json_response() {
        let rendered = response_output(&payload("7"), true).render().unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, json!({ "status": 200, "payload": "7" }));
    }

    #[test]
    fn test_builder_fields() {
        let rendered = Output::new(true)
            .field("datadir", "./data")
            .message("ignored in json mode")
            .render()
            .unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, json!({ "datadir": "./data" }));
    }
}
