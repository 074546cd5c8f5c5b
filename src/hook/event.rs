use serde::Deserialize;
use serde_json::{Map, Value};

/// Why the host built the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The new-issue form is being shown for the first time.
    InitialRender,
    /// A field changed and the form was re-submitted for a refresh.
    FieldUpdate {
        /// Name of the field that triggered the refresh, if the host said.
        triggered_by: Option<String>,
        /// Description as posted by the form.
        description: Option<String>,
        /// Tracker as posted by the form.
        tracker_id: Option<String>,
        /// Tracker before the change, when the host knows it.
        previous_tracker_id: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct RawParams {
    #[serde(default)]
    form_update_triggered_by: Option<String>,
    #[serde(default)]
    previous_tracker_id: Option<IdParam>,
    #[serde(default)]
    issue: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RawIssueParams {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tracker_id: Option<IdParam>,
}

/// Form ids arrive as strings or numbers depending on the client.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdParam {
    Text(String),
    Number(u64),
}

impl IdParam {
    fn into_string(self) -> String {
        match self {
            IdParam::Text(s) => s,
            IdParam::Number(n) => n.to_string(),
        }
    }
}

impl FormEvent {
    /// Build the event from the host's request params, e.g.
    ///
    /// ```json
    /// {"form_update_triggered_by": "issue_tracker_id",
    ///  "issue": {"tracker_id": "8", "description": "Steps:\n1."}}
    /// ```
    ///
    /// Params without an `issue` object (or with an empty one) are an
    /// initial render. Any issue field at all, even one this crate ignores
    /// such as a prefilled `subject`, makes it a submitted form.
    pub fn from_params(params: Value) -> Result<Self, serde_json::Error> {
        let raw: RawParams = serde_json::from_value(params)?;
        let issue = match raw.issue {
            Some(fields) if !fields.is_empty() => {
                serde_json::from_value::<RawIssueParams>(Value::Object(fields))?
            }
            _ => return Ok(FormEvent::InitialRender),
        };
        Ok(FormEvent::FieldUpdate {
            triggered_by: raw.form_update_triggered_by,
            description: issue.description,
            tracker_id: issue.tracker_id.map(IdParam::into_string),
            previous_tracker_id: raw.previous_tracker_id.map(IdParam::into_string),
        })
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
