/// The host's in-progress issue, as seen by the hook.
///
/// Only the description is ever written.
pub trait IssueDraft {
    fn project_id(&self) -> Option<&str>;
    fn tracker_id(&self) -> Option<&str>;
    fn description(&self) -> &str;
    fn set_description(&mut self, description: String);
    /// Whether the issue has not been saved yet.
    fn is_new_record(&self) -> bool;
}
