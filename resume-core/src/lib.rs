//! Resume core library — record types, presence rules, loading, errors.
//!
//! - [`types`] — the resume record and the [`Presence`] rule
//! - [`error`] — [`LoadError`]
//! - [`loader`] — path defaults, parse / load

pub mod error;
pub mod loader;
pub mod types;

pub use error::LoadError;
pub use types::{
    Coursework, Education, Experience, HighSchool, Hobby, Presence, Project, ResumeRecord,
    SkillCategory, Text,
};
