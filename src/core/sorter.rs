use crate::core::{Course, CourseId, CourseRecord, CourseSet, SortedCourses};

/// Upper bound on any finite course limit, so the saved order stays small.
pub const MAX_COURSES_HARD_LIMIT: usize = 100;

/// Inputs to [`get_sorted_courses`], already decoded from configuration and
/// user preferences.
#[derive(Debug, Clone, Default)]
pub struct SortOptions<'a> {
    pub default_max_courses: usize,
    pub force_default: bool,
    pub saved_limit: Option<usize>,
    pub saved_order: Option<&'a [CourseId]>,
    pub highlight_prefix: Option<&'a str>,
}

/// Whether a course short name contains the highlight prefix.
pub fn compute_current(highlight_prefix: Option<&str>, shortname: &str) -> bool {
    match highlight_prefix {
        Some(prefix) if !prefix.is_empty() => shortname.contains(prefix),
        _ => false,
    }
}

/// Picks the effective course limit. `0` means unlimited and is never capped.
pub fn resolve_limit(
    configured_default: usize,
    force_default: bool,
    user_preference: Option<usize>,
) -> usize {
    let limit = if force_default {
        configured_default
    } else {
        user_preference.unwrap_or(configured_default)
    };
    limit.min(MAX_COURSES_HARD_LIMIT)
}

/// Orders courses by the saved order first, then the rest in input order with
/// current courses promoted, stopping once `limit` courses are placed.
pub fn sort_courses(
    courses: CourseSet,
    limit: usize,
    saved_order: Option<&[CourseId]>,
) -> SortedCourses {
    let limit_reached = |counter: usize| limit != 0 && counter >= limit;

    let (courses, index) = courses.into_parts();
    // A taken slot is gone from the working set, so repeated ids are skipped.
    let mut remaining: Vec<Option<Course>> = courses.into_iter().map(Some).collect();
    let mut sorted = Vec::new();
    let mut counter = 0;

    for id in saved_order.unwrap_or_default() {
        if limit_reached(counter) {
            break;
        }
        if let Some(course) = index.get(id).and_then(|&pos| remaining[pos].take()) {
            sorted.push(course);
            counter += 1;
        }
    }

    let mut rest = Vec::new();
    for course in remaining.into_iter().flatten() {
        if limit_reached(counter) {
            break;
        }
        if course.current {
            sorted.push(course);
        } else {
            rest.push(course);
        }
        counter += 1;
    }
    sorted.extend(rest);

    SortedCourses {
        count: sorted.len(),
        courses: sorted,
    }
}

pub fn get_sorted_courses<I>(records: I, options: &SortOptions<'_>) -> SortedCourses
where
    I: IntoIterator<Item = CourseRecord>,
{
    let courses: CourseSet = records
        .into_iter()
        .map(|record| {
            let current = compute_current(options.highlight_prefix, &record.shortname);
            Course::from_record(record, current)
        })
        .collect();

    let limit = resolve_limit(
        options.default_max_courses,
        options.force_default,
        options.saved_limit,
    );
    let available = courses.len();
    let sorted = sort_courses(courses, limit, options.saved_order);

    tracing::debug!(
        limit,
        available,
        placed = sorted.count,
        saved_order = options.saved_order.map(|o| o.len()),
        "sorted course list"
    );
    sorted
}
