pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::enrolment::EnrolmentCourseProvider;
pub use crate::adapters::navigation::{NavigationNode, NavigationTree, NodeType};
pub use crate::adapters::preferences::{FilePreferenceStore, MemoryPreferenceStore};
pub use crate::adapters::select_course_records;
pub use crate::config::{toml_config::TomlConfig, BlockConfig};
pub use crate::core::overview::CourseOverview;
pub use crate::core::sorter::{
    compute_current, get_sorted_courses, resolve_limit, sort_courses, SortOptions,
    MAX_COURSES_HARD_LIMIT,
};
pub use crate::domain::model::{Course, CourseId, CourseRecord, CourseSet, SortedCourses};
pub use crate::utils::error::{OverviewError, Result};
