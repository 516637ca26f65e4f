use workforce_core::{
    seed_snapshot, CategoryFilter, Employee, EmployeeColumn, SortDirection, SortSpec,
    TableController, ViewPhase,
};

fn seed_employees() -> Vec<Employee> {
    seed_snapshot().unwrap().employees().to_vec()
}

fn employee_table(page_size: usize) -> TableController<Employee> {
    TableController::new(
        seed_employees(),
        EmployeeColumn::SEARCHABLE.to_vec(),
        page_size,
    )
}

fn page_ids(table: &TableController<Employee>) -> Vec<u64> {
    table.view().items.iter().map(|employee| employee.id).collect()
}

#[test]
fn toggling_sort_twice_restores_order() {
    let mut table = employee_table(15);

    table.set_sort_key(EmployeeColumn::Salary);
    let ascending = page_ids(&table);
    table.set_sort_key(EmployeeColumn::Salary);
    assert_eq!(table.state().sort.unwrap().direction, SortDirection::Desc);
    table.set_sort_key(EmployeeColumn::Salary);

    assert_eq!(page_ids(&table), ascending);
}

#[test]
fn new_sort_key_starts_ascending_and_keeps_page() {
    let mut table = employee_table(5);
    table.set_sort_key(EmployeeColumn::Salary);
    table.set_sort_key(EmployeeColumn::Salary);
    assert!(table.set_page(2));

    table.set_sort_key(EmployeeColumn::Name);

    assert_eq!(
        table.state().sort,
        Some(SortSpec::asc(EmployeeColumn::Name))
    );
    assert_eq!(table.state().current_page, 2);
}

#[test]
fn search_returns_to_first_page() {
    let mut table = employee_table(5);
    assert!(table.set_page(3));

    table.set_search_term("engineering");

    assert_eq!(table.state().current_page, 1);
    assert_eq!(table.view().total_count, 4);
    assert_eq!(table.view().total_pages, 1);
}

#[test]
fn category_change_returns_to_first_page() {
    let mut table = employee_table(5);
    assert!(table.set_page(2));

    table.set_category(CategoryFilter::Only {
        column: EmployeeColumn::DepartmentName,
        value: "Marketing".to_string(),
    });

    assert_eq!(table.state().current_page, 1);
    assert_eq!(page_ids(&table), vec![3, 9, 15]);
}

#[test]
fn out_of_range_page_is_ignored() {
    let mut table = employee_table(5);

    assert!(!table.set_page(0));
    assert!(!table.set_page(4));
    assert!(!table.set_page(1));
    assert_eq!(table.state().current_page, 1);
    assert_eq!(page_ids(&table), vec![1, 2, 3, 4, 5]);
}

#[test]
fn shrinking_rows_clamps_page() {
    let mut table = employee_table(5);
    assert!(table.set_page(3));

    let remaining: Vec<Employee> = seed_employees().into_iter().take(7).collect();
    table.replace_rows(remaining);

    assert_eq!(table.state().current_page, 2);
    assert_eq!(page_ids(&table), vec![6, 7]);

    table.replace_rows(Vec::new());
    assert_eq!(table.state().current_page, 1);
    assert!(table.view().items.is_empty());
}

#[test]
fn growing_rows_keeps_page() {
    let mut table = employee_table(5);
    assert!(table.set_page(2));

    let mut rows = seed_employees();
    rows.extend(seed_employees());
    table.replace_rows(rows);

    assert_eq!(table.state().current_page, 2);
    assert_eq!(table.view().total_pages, 6);
}

#[test]
fn phase_tracks_defaults() {
    let mut table = employee_table(5);
    assert_eq!(table.phase(), ViewPhase::Idle);

    table.set_search_term("son");
    assert_eq!(table.phase(), ViewPhase::Active);

    table.reset();
    assert_eq!(table.phase(), ViewPhase::Idle);
    assert_eq!(table.view().total_count, 15);
}

#[test]
fn initial_sort_is_part_of_idle_state() {
    let table = employee_table(5)
        .with_initial_sort(SortSpec::desc(EmployeeColumn::RegistrationDate));

    assert_eq!(table.phase(), ViewPhase::Idle);
    assert_eq!(page_ids(&table), vec![15, 14, 13, 12, 11]);
}
