//! PassGen: a small desktop password generator.
//!
//! The composition algorithm lives in [`password`]; everything else is the
//! egui front end and the helpers it talks to.

pub mod app;
pub mod clipboard;
pub mod error;
pub mod notification;
pub mod password;
pub mod settings;
pub mod stepper;

pub use error::{ClipboardError, GenerationError, SettingsError};
pub use password::{CharacterClass, GenerationRequest, generate_password, generate_password_with};
