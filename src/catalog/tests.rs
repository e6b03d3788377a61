//! Catalog Module Tests
//!
//! ## Test Scopes
//! - **Types**: Clock time parsing/formatting and day-name mapping.
//! - **Store**: Term canonicalization (including concurrent first-time creation),
//!   per-school course isolation and id conflicts.
//! - **Loader**: JSON catalog ingestion and validation.

#[cfg(test)]
mod tests {
    use crate::catalog::fixtures::{course, sample_catalog, school};
    use crate::catalog::loader::{CatalogFile, ingest_catalog, load_catalog_file};
    use crate::catalog::store::{CatalogStore, CourseStore, TermStore};
    use crate::catalog::types::{ClockTime, CourseId, Day, StudentId};
    use std::collections::HashSet;
    use std::io::Write;
    use std::sync::Arc;

    // ============================================================
    // TYPES
    // ============================================================

    #[test]
    fn test_clock_time_parse_and_display() {
        let t: ClockTime = "09:05".parse().unwrap();
        assert_eq!(t.minutes(), 9 * 60 + 5);
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn test_clock_time_accepts_midnight_end() {
        assert_eq!(ClockTime::from_hour(24).unwrap().minutes(), 1440);
        assert!(ClockTime::from_hour(25).is_none());
        assert!("24:01".parse::<ClockTime>().is_err());
        assert!("9".parse::<ClockTime>().is_err());
        assert!("09:60".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_clock_time_serde_as_string() {
        let t = ClockTime::new(13, 30).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"13:30\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_day_names_map_to_codes() {
        let code = |name: &str| serde_json::to_string(&Day::from_name(name).unwrap()).unwrap();
        assert_eq!(code("Monday"), "\"M\"");
        assert_eq!(code("Tuesday"), "\"T\"");
        assert_eq!(code("Wednesday"), "\"W\"");
        assert_eq!(code("Thursday"), "\"R\"");
        assert_eq!(code("Friday"), "\"F\"");
        assert_eq!(code("Saturday"), "\"S\"");
        assert_eq!(code("Sunday"), "\"U\"");
        assert_eq!(Day::from_name("Funday"), None);
        assert_eq!(Day::from_name("monday"), None);
    }

    // ============================================================
    // STORE - TERMS
    // ============================================================

    #[test]
    fn test_get_or_create_is_idempotent() {
        let store = CatalogStore::new();
        let first = store.get_or_create("Fall", 2024).unwrap();
        let second = store.get_or_create("Fall", 2024).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.term_count(), 1);

        let other = store.get_or_create("Fall", 2025).unwrap();
        assert_ne!(first.id, other.id);
        assert_eq!(store.term_count(), 2);
    }

    #[test]
    fn test_concurrent_first_resolution_creates_one_term() {
        let store = CatalogStore::new();
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.get_or_create("Winter", 2026).unwrap().id)
            })
            .collect();

        let ids: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(ids.len(), 1, "All threads must observe the same term");
        assert_eq!(store.term_count(), 1);
    }

    // ============================================================
    // STORE - COURSES
    // ============================================================

    #[test]
    fn test_courses_are_scoped_by_school() {
        let catalog = sample_catalog();
        let jhu = catalog.store.courses_for("jhu").unwrap();
        let umd = catalog.store.courses_for("umd").unwrap();

        assert_eq!(jhu.len(), 7);
        assert_eq!(umd.len(), 1);
        assert!(jhu.iter().all(|c| c.school == "jhu"));
        assert_eq!(umd[0].code, "CMSC351");
        assert!(catalog.store.courses_for("nowhere").unwrap().is_empty());
    }

    #[test]
    fn test_courses_are_returned_in_id_order() {
        let catalog = sample_catalog();
        let ids: Vec<u64> = catalog
            .store
            .courses_for("jhu")
            .unwrap()
            .iter()
            .map(|c| c.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_duplicate_course_id_is_rejected() {
        let store = CatalogStore::new();
        store.register_school(school("jhu"));
        store
            .insert_course(course(1, "jhu", "A", "A", "", "CS", 100, &[], vec![]))
            .unwrap();
        let err = store
            .insert_course(course(1, "jhu", "B", "B", "", "CS", 100, &[], vec![]))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate course id"));
    }

    #[test]
    fn test_course_for_unknown_school_is_rejected() {
        let store = CatalogStore::new();
        let result = store.insert_course(course(1, "ghost", "A", "A", "", "CS", 100, &[], vec![]));
        assert!(result.is_err());
        assert_eq!(store.course_count(), 0);
    }

    // ============================================================
    // LOADER
    // ============================================================

    const CATALOG_JSON: &str = r#"{
        "schools": [{"code": "jhu", "name": "Johns Hopkins"}],
        "courses": [{
            "id": 10,
            "school": "jhu",
            "code": "EN.601.226",
            "name": "Data Structures",
            "description": "Lists, trees and graphs",
            "department": "CS",
            "level": 200,
            "areas": ["E"],
            "num_credits": 4.0,
            "sections": [{
                "code": "01",
                "term": {"name": "Fall", "year": 2024},
                "section_type": "L",
                "size": 100,
                "enrolment": 90,
                "meetings": [{"day": "M", "start": "09:00", "end": "10:15"}]
            }]
        }],
        "students": [{
            "id": 7,
            "school": "jhu",
            "name": "Alice",
            "major": "CS",
            "session_token": "secret",
            "enrollments": [{"course": 10, "section": "01", "term": {"name": "Fall", "year": 2024}}]
        }]
    }"#;

    #[test]
    fn test_ingest_catalog_stores_everything() {
        let store = CatalogStore::new();
        let file: CatalogFile = serde_json::from_str(CATALOG_JSON).unwrap();
        let summary = ingest_catalog(file, &store).unwrap();

        assert_eq!(summary.schools, 1);
        assert_eq!(summary.courses, 1);
        assert_eq!(summary.sections, 1);
        assert_eq!(summary.students, 1);
        assert_eq!(summary.sessions, vec![("secret".to_string(), StudentId(7))]);

        let fall = store.get_or_create("Fall", 2024).unwrap();
        let stored = store.course("jhu", CourseId(10)).unwrap();
        assert!(stored.is_offered_in(fall.id));
        assert_eq!(stored.sections[0].meetings[0].day, Day::Monday);

        let student = store.student(StudentId(7)).unwrap();
        assert_eq!(student.sections_of(CourseId(10), fall.id), vec!["01".to_string()]);
    }

    #[test]
    fn test_ingest_normalizes_school_codes() {
        let json = CATALOG_JSON.replace(r#""jhu""#, r#""JHU""#);
        let file: CatalogFile = serde_json::from_str(&json).unwrap();
        let store = CatalogStore::new();
        ingest_catalog(file, &store).unwrap();

        assert_eq!(store.school_codes(), vec!["jhu".to_string()]);
        assert_eq!(store.school("JHU").unwrap().code, "jhu");
        assert_eq!(store.course("jhu", CourseId(10)).unwrap().school, "jhu");
        assert_eq!(store.courses_for("Jhu").unwrap().len(), 1);
        assert_eq!(store.student(StudentId(7)).unwrap().school, "jhu");
    }

    #[test]
    fn test_ingest_rejects_inverted_meeting() {
        let json = CATALOG_JSON.replace(r#""end": "10:15""#, r#""end": "08:00""#);
        let file: CatalogFile = serde_json::from_str(&json).unwrap();
        let err = ingest_catalog(file, &CatalogStore::new()).unwrap_err();
        assert!(err.to_string().contains("ending before it starts"));
    }

    #[test]
    fn test_ingest_rejects_enrollment_in_unknown_course() {
        let json = CATALOG_JSON.replace(r#""course": 10"#, r#""course": 99"#);
        let file: CatalogFile = serde_json::from_str(&json).unwrap();
        assert!(ingest_catalog(file, &CatalogStore::new()).is_err());
    }

    #[tokio::test]
    async fn test_load_catalog_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        let store = CatalogStore::new();
        let summary = load_catalog_file(file.path(), &store).await.unwrap();
        assert_eq!(summary.courses, 1);
        assert_eq!(store.course_count(), 1);
    }

    #[tokio::test]
    async fn test_load_catalog_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let err = load_catalog_file(file.path(), &CatalogStore::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to parse catalog"));
    }
}
