pub mod overview;
pub mod preferences;
pub mod sorter;

pub use crate::domain::model::{Course, CourseId, CourseRecord, CourseSet, SortedCourses};
pub use crate::domain::ports::{BlockSettings, CourseProvider, PreferenceStore};
pub use crate::utils::error::Result;
