//! Core library surface for the profile card application.
//!
//! The form, the screen controller and the card are plain Rust types with no
//! terminal dependency, so tests (and any other front-end) can drive the whole
//! form → record → card flow without a TTY. `ui` wraps them in a Ratatui event
//! loop, while `config` and `telemetry` cover the start-up concerns the binary
//! needs before the first frame is drawn.
pub mod card;
pub mod config;
pub mod form;
pub mod models;
pub mod notify;
pub mod screen;
pub mod telemetry;
pub mod ui;
pub mod validation;

/// Display shaping for a finalized record; the card view reads nothing else.
pub use card::CardView;

/// Resolved command-line/environment settings consumed by `main.rs`.
pub use config::AppConfig;

/// The form component and the phase it reports to the renderer.
pub use form::{FormPhase, ProfileForm};

/// The two domain types that flow from the form to the card.
pub use models::{Location, PersonRecord};

/// Owner of the single "current record" slot and the view it implies.
pub use screen::{ScreenController, View};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

/// Field schema types, re-exported so callers can fill a draft and inspect
/// which rules failed.
pub use validation::{Draft, Field, FieldError, ValidationErrors};
