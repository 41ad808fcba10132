use crate::core::preferences::UserPreferences;
use crate::core::sorter::{get_sorted_courses, SortOptions};
use crate::core::{BlockSettings, CourseId, CourseProvider, CourseRecord, PreferenceStore, SortedCourses};
use crate::utils::error::Result;

/// Course overview for one user: block settings plus that user's preferences.
pub struct CourseOverview<S: PreferenceStore, B: BlockSettings> {
    preferences: UserPreferences<S>,
    settings: B,
}

impl<S: PreferenceStore, B: BlockSettings> CourseOverview<S, B> {
    pub fn new(store: S, settings: B) -> Self {
        Self {
            preferences: UserPreferences::new(store),
            settings,
        }
    }

    pub fn preferences(&self) -> &UserPreferences<S> {
        &self.preferences
    }

    pub fn set_max_courses_preference(&mut self, number: usize) -> Result<()> {
        self.preferences.set_max_courses(number)
    }

    pub fn set_course_order_preference(&mut self, order: &[CourseId]) -> Result<()> {
        self.preferences.set_course_order(order)
    }

    /// Limit before the hard cap: the configured default, or the user's
    /// choice unless the block forces the default.
    pub fn max_user_courses(&self) -> usize {
        let default = self.settings.default_max_courses();
        if self.settings.force_default_max_courses() {
            return default;
        }
        self.preferences.max_courses().unwrap_or(default)
    }

    pub fn sorted_courses(&self, records: Vec<CourseRecord>) -> SortedCourses {
        let saved_limit = if self.settings.force_default_max_courses() {
            None
        } else {
            self.preferences.max_courses()
        };
        let saved_order = self.preferences.course_order();

        let options = SortOptions {
            default_max_courses: self.settings.default_max_courses(),
            force_default: self.settings.force_default_max_courses(),
            saved_limit,
            saved_order: saved_order.as_deref(),
            highlight_prefix: self.settings.highlight_prefix(),
        };
        get_sorted_courses(records, &options)
    }

    pub fn sorted_courses_from<P: CourseProvider + ?Sized>(&self, provider: &P) -> Result<SortedCourses> {
        let records = provider.course_records()?;
        tracing::debug!(records = records.len(), "loaded course records");
        Ok(self.sorted_courses(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::preferences::MemoryPreferenceStore;
    use crate::config::BlockConfig;

    fn records(n: u64) -> Vec<CourseRecord> {
        (1..=n)
            .map(|i| CourseRecord {
                id: CourseId(i),
                fullname: format!("Course {}", i),
                shortname: format!("C{}", i),
                url: format!("https://lms.example.edu/course/view.php?id={}", i),
                hidden: false,
            })
            .collect()
    }

    fn config(default_max: usize, force: bool, prefix: Option<&str>) -> BlockConfig {
        BlockConfig {
            default_max_courses: default_max,
            force_default_max_courses: force,
            highlight_prefix: prefix.map(str::to_string),
        }
    }

    #[test]
    fn test_max_user_courses() {
        let mut overview = CourseOverview::new(MemoryPreferenceStore::new(), config(10, false, None));
        assert_eq!(overview.max_user_courses(), 10);

        overview.set_max_courses_preference(4).unwrap();
        assert_eq!(overview.max_user_courses(), 4);
        assert_eq!(overview.preferences().max_courses(), Some(4));

        let mut forced = CourseOverview::new(MemoryPreferenceStore::new(), config(10, true, None));
        forced.set_max_courses_preference(4).unwrap();
        assert_eq!(forced.max_user_courses(), 10);
    }

    #[test]
    fn test_sorted_courses_applies_preferences() {
        let mut overview = CourseOverview::new(MemoryPreferenceStore::new(), config(0, false, Some("C5")));
        overview.set_max_courses_preference(3).unwrap();
        overview
            .set_course_order_preference(&[CourseId(4), CourseId(2)])
            .unwrap();

        let sorted = overview.sorted_courses(records(6));

        assert_eq!(sorted.ids(), vec![CourseId(4), CourseId(2), CourseId(1)]);
        assert_eq!(sorted.count, 3);
    }

    #[test]
    fn test_sorted_courses_unlimited_promotes_current() {
        let overview = CourseOverview::new(MemoryPreferenceStore::new(), config(0, false, Some("C3")));
        let sorted = overview.sorted_courses(records(4));
        assert_eq!(
            sorted.ids(),
            vec![CourseId(3), CourseId(1), CourseId(2), CourseId(4)]
        );
    }
}
