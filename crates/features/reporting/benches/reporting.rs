use ccrm_courses::{CourseCatalog, CourseDraft, Semester};
use ccrm_enrollments::EnrollmentLedger;
use ccrm_reporting::Reporting;
use ccrm_students::StudentRegistry;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const DEPARTMENTS: [&str; 4] = ["Computer Science", "Mathematics", "Physics", "Biology"];

fn populate(students_n: usize, courses_n: usize) -> (StudentRegistry, CourseCatalog, EnrollmentLedger) {
    let mut students = StudentRegistry::new();
    let mut courses = CourseCatalog::new();
    let mut ledger = EnrollmentLedger::new();

    for i in 0..courses_n {
        let draft = CourseDraft::builder()
            .code(format!("C{i:04}"))
            .title(format!("Course {i}"))
            .credits(3)
            .instructor("Dr. Bench")
            .semester(Semester::Fall)
            .department(DEPARTMENTS[i % DEPARTMENTS.len()])
            .build();
        courses.add_course(draft).unwrap();
    }

    for i in 0..students_n {
        let id = format!("S{i}");
        students.add_student(&id, &format!("REG-{i}"), "Bench Student", "bench@example.edu").unwrap();
        for c in 0..5 {
            let code = format!("C{:04}", (i + c) % courses_n);
            let marks = u8::try_from((i * 7 + c * 13) % 101).unwrap();
            ledger.enroll(&mut students, &courses, &id, &code).unwrap();
            ledger.record_marks(&id, &code, f64::from(marks)).unwrap();
        }
    }

    (students, courses, ledger)
}

fn bench_transcripts(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript");

    for students_n in [100, 1_000] {
        let (students, courses, ledger) = populate(students_n, 50);
        let reporting = Reporting::new(&students, &courses, &ledger);

        group.bench_with_input(BenchmarkId::new("single", students_n), &students_n, |b, n| {
            let id = format!("S{}", n / 2);
            b.iter(|| black_box(reporting.transcript_for(&id).unwrap()));
        });
    }

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for courses_n in [50, 500] {
        let (students, courses, ledger) = populate(10, courses_n);
        let reporting = Reporting::new(&students, &courses, &ledger);

        group.bench_with_input(BenchmarkId::new("by_department", courses_n), &courses_n, |b, _| {
            b.iter(|| black_box(reporting.course_counts_by_department()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transcripts, bench_statistics);
criterion_main!(benches);
