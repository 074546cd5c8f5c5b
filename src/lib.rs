//! Default issue templates for an issue tracker.
//!
//! New issues get the most specific template for their project and tracker:
//! `issue_template_<project>_<tracker>.md`, then `issue_template_<project>.md`,
//! then `default_issue_template.md`. When the tracker changes while the form is
//! being edited, the description is swapped for the new tracker's template
//! only if it is still template text; anything the user wrote is kept.

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod hook;
pub mod logging;
pub mod reconcile;
pub mod store;
pub mod template;
pub mod utils;

// Re-export commonly used types
pub use config::{load_config, ConfigError, TemplateConfig};
pub use hook::{FormEvent, IssueDraft, IssueTemplateHook};
pub use logging::{init_logging, LogConfig};
pub use reconcile::{
    apply_initial, classify, normalize, reconcile_on_tracker_change, Classification, Outcome,
    ReplacementPolicy,
};
pub use store::{FsStore, MemoryStore, StoreError, TemplateStore};
pub use template::{Template, TemplateError, TemplatePaths, TemplateResolver, TemplateScope};
