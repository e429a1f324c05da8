//! resume-core — the data core of the résumé builder.
//!
//! Three pure pieces share one snapshot type:
//! - [`schema`] — the current résumé shape plus migration from every
//!   persisted shape any past version of the app wrote,
//! - [`scoring`] — the deterministic ATS completeness score and its
//!   per-field bullet discipline advisory,
//! - [`render`] — derivation of a render-ready section layout for the
//!   classic / modern / minimal templates.
//!
//! [`store`] owns the in-memory snapshot for the integration layer:
//! every `replace` persists the document first, then notifies
//! subscribers, so a displayed score or layout is never derived from a
//! snapshot older than the persisted one. [`export`] holds the
//! plain-text serialization contract used by copy-to-clipboard.

pub mod errors;
pub mod export;
pub mod render;
pub mod schema;
pub mod scoring;
pub mod store;

pub use errors::StoreError;
pub use export::{render_plain_text, validate_for_export};
pub use render::{render_layout, ResumeLayout};
pub use schema::migrate::{migrate_raw, migrate_value};
pub use schema::{ResumeSnapshot, SkillCategories, TemplateId};
pub use scoring::discipline::check_bullet_discipline;
pub use scoring::{calculate_ats_score, AtsReport, ScoreLevel};
pub use store::{FileStorage, MemoryStorage, ResumeStore, StorageBackend};
