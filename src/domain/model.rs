use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(CourseId)
    }
}

impl From<u64> for CourseId {
    fn from(value: u64) -> Self {
        CourseId(value)
    }
}

/// A course as handed over by a course provider, before highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: CourseId,
    pub fullname: String,
    pub shortname: String,
    pub url: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub fullname: String,
    pub shortname: String,
    pub url: String,
    /// Informational only; hidden courses are still listed.
    pub hidden: bool,
    pub current: bool,
}

impl Course {
    pub fn from_record(record: CourseRecord, current: bool) -> Self {
        Self {
            id: record.id,
            fullname: record.fullname,
            shortname: record.shortname,
            url: record.url,
            hidden: record.hidden,
            current,
        }
    }
}

/// Courses keyed by id, iterated in insertion order.
///
/// Inserting an id that is already present replaces the stored course but
/// keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct CourseSet {
    courses: Vec<Course>,
    index: HashMap<CourseId, usize>,
}

impl CourseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, course: Course) {
        match self.index.get(&course.id) {
            Some(&pos) => self.courses[pos] = course,
            None => {
                self.index.insert(course.id, self.courses.len());
                self.courses.push(course);
            }
        }
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.index.get(&id).map(|&pos| &self.courses[pos])
    }

    pub fn contains(&self, id: CourseId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Splits the set into its ordered courses and the id to position index.
    pub(crate) fn into_parts(self) -> (Vec<Course>, HashMap<CourseId, usize>) {
        (self.courses, self.index)
    }
}

impl FromIterator<Course> for CourseSet {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut set = CourseSet::new();
        for course in iter {
            set.insert(course);
        }
        set
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortedCourses {
    pub courses: Vec<Course>,
    pub count: usize,
}

impl SortedCourses {
    pub fn ids(&self) -> Vec<CourseId> {
        self.courses.iter().map(|c| c.id).collect()
    }
}
