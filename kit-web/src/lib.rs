//! # kit-web
//!
//! Checks whether websites respond and summarises what their headers say.

pub mod status;

pub use status::{
    normalize_url, validate_url, BatchReport, SecurityReport, ServerInfo, StatusCategory,
    StatusChecker, StatusReport,
};
