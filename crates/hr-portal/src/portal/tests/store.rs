use super::common::*;
use crate::portal::domain::EmployeeStatus;
use crate::portal::store::{Collection, StoreError};

#[test]
fn insert_appends_in_order() {
    let mut collection = Collection::new();
    collection
        .insert(employee("e1", "Ada Lovelace", "Engineer", "Engineering"))
        .expect("first insert");
    collection
        .insert(employee("e2", "Grace Hopper", "Engineer", "Engineering"))
        .expect("second insert");

    let ids: Vec<&str> = collection.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["e1", "e2"]);
}

#[test]
fn insert_rejects_duplicate_ids() {
    let mut collection = Collection::new();
    collection
        .insert(employee("e1", "Ada Lovelace", "Engineer", "Engineering"))
        .expect("first insert");

    match collection.insert(employee("e1", "Someone Else", "Analyst", "Finance")) {
        Err(StoreError::DuplicateId(id)) => assert_eq!(id, "e1"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
    assert_eq!(collection.len(), 1);
}

#[test]
fn update_replaces_in_place_without_reordering() {
    let mut collection = Collection::new();
    for (id, name) in [("e1", "Ada"), ("e2", "Grace"), ("e3", "Edsger")] {
        collection
            .insert(employee(id, name, "Engineer", "Engineering"))
            .expect("insert");
    }

    let updated = collection
        .update_by_id("e2", |record| record.status = EmployeeStatus::OnLeave)
        .expect("update succeeds")
        .clone();
    assert_eq!(updated.status, EmployeeStatus::OnLeave);
    assert_eq!(updated.name, "Grace");

    let ids: Vec<&str> = collection.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["e1", "e2", "e3"]);
    assert_eq!(
        collection.get("e1").expect("e1 present").status,
        EmployeeStatus::Active
    );
    assert_eq!(
        collection.get("e3").expect("e3 present").status,
        EmployeeStatus::Active
    );
}

#[test]
fn update_missing_id_reports_not_found() {
    let mut collection = Collection::new();
    collection
        .insert(employee("e1", "Ada", "Engineer", "Engineering"))
        .expect("insert");

    match collection.update_by_id("e9", |record| record.status = EmployeeStatus::Inactive) {
        Err(StoreError::NotFound(id)) => assert_eq!(id, "e9"),
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn get_missing_id_reports_not_found() {
    let collection: Collection<crate::portal::domain::Employee> = Collection::new();
    match collection.get("missing") {
        Err(StoreError::NotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("expected not found error, got {other:?}"),
    }
}
