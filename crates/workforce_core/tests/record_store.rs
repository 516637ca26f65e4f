use chrono::{TimeZone, Utc};
use workforce_core::{
    seed_snapshot, Department, RecordStore, Snapshot, ValidationField, ValidationRules,
};

fn seeded_store() -> RecordStore {
    let mut store = RecordStore::new(ValidationRules::default());
    store.replace(seed_snapshot().unwrap()).unwrap();
    store
}

#[test]
fn rejected_salary_leaves_store_unchanged() {
    let mut store = seeded_store();
    let before = store.snapshot();

    let err = store
        .append_employee("New Hire", 500.0, 1, Utc::now())
        .unwrap_err();

    assert_eq!(
        err.message(ValidationField::Salary),
        Some("Salary must be at least $1,000")
    );
    assert!(err.message(ValidationField::Name).is_none());
    assert_eq!(*store.snapshot(), *before);
}

#[test]
fn duplicate_department_name_is_case_insensitive() {
    let mut store = seeded_store();

    let err = store
        .append_department("  engineering ", Utc::now())
        .unwrap_err();

    assert_eq!(
        err.message(ValidationField::Name),
        Some("Department name already exists")
    );
    assert_eq!(store.snapshot().departments().len(), 6);
}

#[test]
fn employee_errors_are_reported_together() {
    let mut store = seeded_store();

    let err = store
        .append_employee("A", 2_000_000.0, 99, Utc::now())
        .unwrap_err();

    assert_eq!(err.fields().len(), 3);
    assert_eq!(
        err.message(ValidationField::Salary),
        Some("Salary cannot exceed $1,000,000")
    );
    assert_eq!(
        err.message(ValidationField::DepartmentId),
        Some("Selected department does not exist")
    );
}

#[test]
fn ids_are_monotonic_across_appends() {
    let mut store = seeded_store();

    let research = store.append_department("Research", Utc::now()).unwrap();
    let legal = store.append_department("Legal", Utc::now()).unwrap();
    assert_eq!(research.id, 7);
    assert_eq!(legal.id, 8);

    let first = store
        .append_employee("Nina Patel", 81_000.0, research.id, Utc::now())
        .unwrap();
    let second = store
        .append_employee("Omar Haddad", 64_000.0, legal.id, Utc::now())
        .unwrap();
    assert_eq!(first.id, 16);
    assert_eq!(second.id, 17);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.employees().last().unwrap().id, 17);
    assert_eq!(snapshot.employee(16).unwrap().name, "Nina Patel");
    assert!(snapshot.employee(18).is_none());
    assert_eq!(snapshot.department(7).unwrap().name, "Research");
}

#[test]
fn appended_employee_captures_department_name() {
    let mut store = seeded_store();

    let employee = store
        .append_employee("  Nina   Patel ", 81_000.0, 3, Utc::now())
        .unwrap();

    assert_eq!(employee.name, "Nina Patel");
    assert_eq!(employee.department_id, 3);
    assert_eq!(employee.department_name, "Marketing");
}

#[test]
fn handed_out_snapshots_are_not_mutated() {
    let mut store = seeded_store();
    let before = store.snapshot();

    store.append_department("Research", Utc::now()).unwrap();

    assert_eq!(before.departments().len(), 6);
    assert_eq!(store.snapshot().departments().len(), 7);
}

#[test]
fn invalid_replacement_keeps_previous_snapshot() {
    let mut store = seeded_store();
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let broken = Snapshot::new(
        vec![
            Department::new(1, "Engineering", created_at),
            Department::new(2, "ENGINEERING", created_at),
        ],
        Vec::new(),
    );

    assert!(store.replace(broken).is_err());
    assert_eq!(store.snapshot().departments().len(), 6);
}

#[test]
fn empty_store_starts_ids_at_one() {
    let mut store = RecordStore::default();

    let department = store.append_department("Engineering", Utc::now()).unwrap();
    let employee = store
        .append_employee("Sarah Johnson", 85_000.0, department.id, Utc::now())
        .unwrap();

    assert_eq!(department.id, 1);
    assert_eq!(employee.id, 1);
}
