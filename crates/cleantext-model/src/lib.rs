//! Parameter model for column text cleaning.
//!
//! - **category**: Unicode general-category groups selectable for filtering
//! - **params**: the current parameter schema (`CleanTextParams`)
//! - **migrate**: upgrades stored parameter records from any older schema
//! - **error**: parameter errors

pub mod category;
pub mod error;
pub mod migrate;
pub mod params;

pub use category::CharCategory;
pub use error::{ParamsError, Result};
pub use migrate::{ParamsVersion, detect_version, migrate_params};
pub use params::{CaseMode, CharFilterMode, CleanTextParams, SpaceMode};
