use crate::core::{CourseId, PreferenceStore};
use crate::utils::error::{OverviewError, Result};

pub const NUMBER_OF_COURSES_KEY: &str = "course_overview_lite_number_of_courses";
pub const COURSE_ORDER_KEY: &str = "course_overview_lite_course_order";

/// Typed view over the two preferences the block owns.
///
/// Values that cannot be read or decoded are reported and read back as absent.
pub struct UserPreferences<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> UserPreferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn max_courses(&self) -> Option<usize> {
        self.read(NUMBER_OF_COURSES_KEY)
            .and_then(|raw| decode_max_courses(&raw))
    }

    pub fn course_order(&self) -> Option<Vec<CourseId>> {
        self.read(COURSE_ORDER_KEY)
            .and_then(|raw| decode_course_order(&raw))
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(source) => {
                let err = OverviewError::PreferenceError {
                    key: key.to_string(),
                    message: source.to_string(),
                };
                tracing::warn!("ignoring unreadable preference store: {}", err);
                None
            }
        }
    }

    pub fn set_max_courses(&mut self, number: usize) -> Result<()> {
        tracing::debug!(number, "saving course limit preference");
        self.store.set(NUMBER_OF_COURSES_KEY, &number.to_string())
    }

    pub fn set_course_order(&mut self, order: &[CourseId]) -> Result<()> {
        let encoded = serde_json::to_string(order)?;
        tracing::debug!(courses = order.len(), "saving course order preference");
        self.store.set(COURSE_ORDER_KEY, &encoded)
    }
}

fn decode_max_courses(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(number) => Some(number),
        Err(e) => {
            tracing::warn!(key = NUMBER_OF_COURSES_KEY, value = raw, "ignoring unreadable preference: {}", e);
            None
        }
    }
}

fn decode_course_order(raw: &str) -> Option<Vec<CourseId>> {
    match serde_json::from_str::<Vec<CourseId>>(raw) {
        Ok(order) => Some(order),
        Err(e) => {
            tracing::warn!(key = COURSE_ORDER_KEY, "ignoring unreadable preference: {}", e);
            None
        }
    }
}
