use ccrm_courses::{CourseCatalog, CourseDraft, CourseError, MAX_COURSE_CREDITS, Semester};
use ccrm_enrollments::{EnrollmentLedger, Grade};
use ccrm_reporting::{Reporting, ReportingError};
use ccrm_students::StudentRegistry;

fn course(code: &str, credits: u32, department: &str) -> CourseDraft {
    CourseDraft::builder()
        .code(code)
        .title(format!("{code} title"))
        .credits(credits)
        .instructor("Dr. Smith")
        .semester(Semester::Fall)
        .department(department)
        .build()
}

fn setup() -> (StudentRegistry, CourseCatalog, EnrollmentLedger) {
    let mut students = StudentRegistry::new();
    students.add_student("S1", "REG-001", "Ada Lovelace", "ada@example.edu").expect("student");
    students.add_student("S2", "REG-002", "Alan Turing", "alan@example.edu").expect("student");

    let mut courses = CourseCatalog::new();
    courses.add_course(course("CS101", 3, "Computer Science")).expect("course");
    courses.add_course(course("MATH201", 4, "Mathematics")).expect("course");
    courses.add_course(course("PHY101", 3, "Physics")).expect("course");

    (students, courses, EnrollmentLedger::new())
}

#[test]
fn gpa_averages_grade_points() {
    let (mut students, courses, mut ledger) = setup();
    ledger.enroll(&mut students, &courses, "S1", "CS101").expect("enroll");
    ledger.enroll(&mut students, &courses, "S1", "math201").expect("enroll");
    ledger.record_marks("S1", "CS101", 90.0).expect("marks");
    ledger.record_marks("S1", "MATH201", 70.0).expect("marks");

    let transcript = Reporting::new(&students, &courses, &ledger).transcript_for("S1").expect("transcript");

    assert!((transcript.gpa - 3.0).abs() < 1e-9);
    assert_eq!(transcript.total_credits, 7);
    let grades: Vec<_> = transcript.rows.iter().map(|r| (r.course_code.as_str(), r.grade)).collect();
    assert_eq!(grades, [("CS101", Grade::A), ("MATH201", Grade::C)]);
    assert_eq!(transcript.rows[1].title, "MATH201 title");
}

#[test]
fn ungraded_rows_count_as_zero_points() {
    let (mut students, courses, mut ledger) = setup();
    ledger.enroll(&mut students, &courses, "S1", "CS101").expect("enroll");
    ledger.enroll(&mut students, &courses, "S1", "PHY101").expect("enroll");
    ledger.record_marks("S1", "CS101", 95.0).expect("marks");

    let transcript = Reporting::new(&students, &courses, &ledger).transcript_for("S1").expect("transcript");

    assert!((transcript.gpa - 2.0).abs() < 1e-9);
    assert_eq!(transcript.rows[1].marks, None);
    assert_eq!(transcript.rows[1].grade, Grade::F);
}

#[test]
fn student_without_enrollments_has_zero_gpa() {
    let (students, courses, ledger) = setup();
    let transcript = Reporting::new(&students, &courses, &ledger).transcript_for("S2").expect("transcript");

    assert!(transcript.rows.is_empty());
    assert!(transcript.gpa.abs() < f64::EPSILON);
    assert_eq!(transcript.total_credits, 0);
    assert_eq!(transcript.student.full_name(), "Alan Turing");
}

#[test]
fn unknown_student_has_no_transcript() {
    let (students, courses, ledger) = setup();
    let err = Reporting::new(&students, &courses, &ledger).transcript_for("S404").expect_err("missing");

    assert!(matches!(err, ReportingError::StudentNotFound { ref student_id, .. } if student_id == "S404"));
}

#[test]
fn departments_count_active_courses() {
    let (students, mut courses, ledger) = setup();
    let counts = Reporting::new(&students, &courses, &ledger).course_counts_by_department();

    assert_eq!(counts.len(), 3);
    assert_eq!(counts["Computer Science"], 1);
    assert_eq!(counts["Mathematics"], 1);
    assert_eq!(counts["Physics"], 1);

    courses.set_active("PHY101", false).expect("deactivate");
    let stats = Reporting::new(&students, &courses, &ledger).course_statistics();
    assert_eq!(stats.total_courses, 3);
    assert_eq!(stats.active_courses, 2);
    assert!(!stats.by_department.contains_key("Physics"));
}

#[test]
fn transcript_serializes_camel_case() {
    let (mut students, courses, mut ledger) = setup();
    ledger.enroll(&mut students, &courses, "S1", "CS101").expect("enroll");
    ledger.record_marks("S1", "CS101", 92.0).expect("marks");

    let transcript = Reporting::new(&students, &courses, &ledger).transcript_for("S1").expect("transcript");
    let json = serde_json::to_value(&transcript).expect("json");

    assert_eq!(json["totalCredits"], 3);
    assert_eq!(json["rows"][0]["courseCode"], "CS101");
    assert_eq!(json["rows"][0]["grade"], "A");
}

#[test]
fn credit_totals_stay_within_catalog_bounds() {
    let (mut students, mut courses, mut ledger) = setup();
    let err = courses.add_course(course("HUGE1", u32::MAX, "Physics")).expect_err("oversized");
    assert!(matches!(err, CourseError::InvalidField { field: "credits", .. }));

    courses.add_course(course("LAB1", MAX_COURSE_CREDITS, "Physics")).expect("course");
    courses.add_course(course("LAB2", MAX_COURSE_CREDITS, "Physics")).expect("course");
    ledger.enroll(&mut students, &courses, "S1", "LAB1").expect("enroll");
    ledger.enroll(&mut students, &courses, "S1", "LAB2").expect("enroll");

    let transcript = Reporting::new(&students, &courses, &ledger).transcript_for("S1").expect("transcript");
    assert_eq!(transcript.total_credits, 2 * MAX_COURSE_CREDITS);
}
