use crate::domain::model::CourseRecord;
use crate::utils::error::Result;

/// Opaque per-user key/value store owned by the host platform.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Block-level settings supplied by the host platform.
pub trait BlockSettings: Send + Sync {
    fn default_max_courses(&self) -> usize;
    fn force_default_max_courses(&self) -> bool;
    fn highlight_prefix(&self) -> Option<&str>;
}

/// Source of the user's course records.
pub trait CourseProvider {
    fn course_records(&self) -> Result<Vec<CourseRecord>>;
}
