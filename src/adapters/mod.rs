// Adapters layer: concrete preference stores and course providers.

pub mod enrolment;
pub mod navigation;
pub mod preferences;

use crate::core::{CourseProvider, CourseRecord};
use crate::utils::error::Result;
use navigation::NavigationTree;

/// Takes courses from the navigation tree when its "my courses" branch is
/// already open, otherwise from the enrolment listing.
pub fn select_course_records<E: CourseProvider + ?Sized>(
    navigation: Option<&NavigationTree>,
    enrolment: Option<&E>,
) -> Result<Vec<CourseRecord>> {
    if let Some(tree) = navigation {
        let Some(my) = tree.my_courses_branch().filter(|my| !my.children.is_empty()) else {
            tracing::debug!("navigation tree has no usable my courses branch");
            return Ok(Vec::new());
        };
        if my.force_open {
            tracing::debug!("using courses from navigation tree");
            return tree.course_records();
        }
    }

    match enrolment {
        Some(provider) => {
            tracing::debug!("using courses from enrolment listing");
            provider.course_records()
        }
        None => {
            tracing::warn!("no course source available");
            Ok(Vec::new())
        }
    }
}
