use crate::core::{CourseId, CourseProvider, CourseRecord};
use crate::utils::error::Result;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
struct EnrolmentRow {
    id: CourseId,
    shortname: String,
    fullname: String,
    #[serde(default = "default_visible")]
    visible: u8,
}

fn default_visible() -> u8 {
    1
}

/// Courses the user is enrolled in, as exported by the platform.
#[derive(Debug, Clone)]
pub struct EnrolmentCourseProvider {
    wwwroot: Url,
    rows: Vec<EnrolmentRow>,
}

impl EnrolmentCourseProvider {
    pub fn from_path<P: AsRef<Path>>(path: P, wwwroot: &str) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, wwwroot)
    }

    pub fn from_reader<R: Read>(reader: R, wwwroot: &str) -> Result<Self> {
        let mut wwwroot = Url::parse(wwwroot)?;
        // join() replaces the last path segment unless the base ends in a slash
        if !wwwroot.path().ends_with('/') {
            let path = format!("{}/", wwwroot.path());
            wwwroot.set_path(&path);
        }
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let rows = csv_reader
            .deserialize::<EnrolmentRow>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!(rows = rows.len(), "read enrolment rows");
        Ok(Self { wwwroot, rows })
    }

    fn course_url(&self, id: CourseId) -> Result<String> {
        let mut url = self.wwwroot.join("course/view.php")?;
        url.query_pairs_mut().append_pair("id", &id.to_string());
        Ok(url.into())
    }
}

impl CourseProvider for EnrolmentCourseProvider {
    fn course_records(&self) -> Result<Vec<CourseRecord>> {
        self.rows
            .iter()
            .map(|row| {
                Ok(CourseRecord {
                    id: row.id,
                    fullname: row.fullname.clone(),
                    shortname: row.shortname.clone(),
                    url: self.course_url(row.id)?,
                    hidden: row.visible == 0,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "id,shortname,fullname,visible\n\
                       5, CS101 ,Intro to CS,1\n\
                       9,MATH201,Linear Algebra,0\n";

    #[test]
    fn test_records_from_csv() {
        let provider = EnrolmentCourseProvider::from_reader(CSV.as_bytes(), "https://lms.example.edu").unwrap();
        let records = provider.course_records().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, CourseId(5));
        assert_eq!(records[0].shortname, "CS101");
        assert_eq!(records[0].url, "https://lms.example.edu/course/view.php?id=5");
        assert!(!records[0].hidden);
        assert!(records[1].hidden);
    }

    #[test]
    fn test_wwwroot_with_subdirectory() {
        let provider =
            EnrolmentCourseProvider::from_reader(CSV.as_bytes(), "https://example.edu/moodle").unwrap();
        let records = provider.course_records().unwrap();
        assert_eq!(records[1].url, "https://example.edu/moodle/course/view.php?id=9");
    }

    #[test]
    fn test_missing_visible_column_defaults_to_visible() {
        let csv = "id,shortname,fullname\n3,ART,Art History\n";
        let provider = EnrolmentCourseProvider::from_reader(csv.as_bytes(), "http://localhost").unwrap();
        assert!(!provider.course_records().unwrap()[0].hidden);
    }

    #[test]
    fn test_bad_rows_are_errors() {
        let csv = "id,shortname,fullname,visible\nabc,X,Y,1\n";
        assert!(EnrolmentCourseProvider::from_reader(csv.as_bytes(), "http://localhost").is_err());
        assert!(EnrolmentCourseProvider::from_reader(CSV.as_bytes(), "not a url").is_err());
    }
}
