use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON record the service returns for a newly registered person.
///
/// The service may answer with the record itself or wrap it as
/// `{"success": .., "person_id": .., "data": {..}}`; accessors look in both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonRecord(Value);

impl PersonRecord {
    /// Wrap a decoded JSON body.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Person identifier assigned by the service.
    pub fn id(&self) -> Option<&str> {
        self.field("id").or_else(|| self.str_at(&self.0, "person_id"))
    }

    /// Registered display name.
    pub fn name(&self) -> Option<&str> {
        self.field("name")
    }

    /// Employee ID echoed back by the service.
    pub fn employee_id(&self) -> Option<&str> {
        self.field("employee_id")
    }

    /// The raw body.
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.str_at(&self.0, key)
            .or_else(|| self.0.get("data").and_then(|data| self.str_at(data, key)))
    }

    fn str_at<'a>(&self, value: &'a Value, key: &str) -> Option<&'a str> {
        value.get(key).and_then(Value::as_str)
    }
}
