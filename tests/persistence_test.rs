//! Persistence tests against an in-memory SQLite database.
//!
//! These run the real migrations and drive the stores through the unit of
//! work, covering the schema rules the mock-based tests cannot see: delete
//! cascades, the referential restrict on company deletion, the
//! composite-key upsert and the transactional link path.

use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::ConnectOptions;
use sea_orm_migration::MigratorTrait;

use orgdir_api::domain::{
    never_modified, Address, AddressOwner, AddressType, Company, CreateCompany, CreateDepartment,
    CreateEmployee, Department, Employee,
};
use orgdir_api::errors::AppError;
use orgdir_api::infra::{
    AddressRepository, CompanyRepository, DepartmentRepository, EmployeeAddressRepository,
    EmployeeRepository, Migrator, Persistence, UnitOfWork,
};
use orgdir_api::services::{AddressManager, AddressService};

async fn fresh_uow() -> Arc<Persistence> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // Every statement must see the same in-memory database
    options.max_connections(1);
    let connection = sea_orm::Database::connect(options)
        .await
        .expect("in-memory database");
    Migrator::up(&connection, None).await.expect("migrations");
    Arc::new(Persistence::new(connection))
}

async fn seed_company(uow: &Persistence) -> Company {
    uow.companies()
        .create(CreateCompany {
            name: "Initech".to_string(),
            description: None,
        })
        .await
        .expect("company")
}

async fn seed_department(uow: &Persistence, company_id: i32) -> Department {
    uow.departments()
        .create(CreateDepartment {
            name: "Engineering".to_string(),
            description: None,
            company_id,
        })
        .await
        .expect("department")
}

async fn seed_employee(uow: &Persistence, company_id: i32, department_id: i32) -> Employee {
    uow.employees()
        .create(CreateEmployee {
            first_name: "John".to_string(),
            last_name: "Winchester".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
            company_id,
            department_id,
        })
        .await
        .expect("employee")
}

// =============================================================================
// Polymorphic Relations
// =============================================================================

#[tokio::test]
async fn test_deleting_address_removes_all_relations() {
    let uow = fresh_uow().await;
    let company = seed_company(&uow).await;
    let department = seed_department(&uow, company.id).await;
    let employee = seed_employee(&uow, company.id, department.id).await;
    let service = AddressManager::new(uow.clone());

    let address = uow
        .addresses()
        .create(Address::new("1 Main Street, Springfield".to_string()))
        .await
        .unwrap();
    service
        .link(address.id, AddressOwner::Company(company.id))
        .await
        .unwrap();
    service
        .link(address.id, AddressOwner::Employee(employee.id))
        .await
        .unwrap();
    assert_eq!(
        uow.addresses().relations_of(address.id).await.unwrap().len(),
        2
    );

    service.delete_address(address.id).await.unwrap();

    assert!(uow
        .addresses()
        .find_by_id(address.id)
        .await
        .unwrap()
        .is_none());
    assert!(uow
        .addresses()
        .relations_of(address.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_link_rejects_missing_owner() {
    let uow = fresh_uow().await;
    let service = AddressManager::new(uow.clone());

    let address = uow
        .addresses()
        .create(Address::new("1 Main Street, Springfield".to_string()))
        .await
        .unwrap();

    let result = service.link(address.id, AddressOwner::Company(99)).await;

    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    // The rejected insert must not leave a dangling relation behind
    assert!(uow
        .addresses()
        .relations_of(address.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_relinking_same_owner_conflicts() {
    let uow = fresh_uow().await;
    let company = seed_company(&uow).await;
    let service = AddressManager::new(uow.clone());

    let address = uow
        .addresses()
        .create(Address::new("1 Main Street, Springfield".to_string()))
        .await
        .unwrap();
    service
        .link(address.id, AddressOwner::Company(company.id))
        .await
        .unwrap();

    let result = service
        .link(address.id, AddressOwner::Company(company.id))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

// =============================================================================
// Employee Address Slots
// =============================================================================

#[tokio::test]
async fn test_deleting_employee_removes_address_slots() {
    let uow = fresh_uow().await;
    let company = seed_company(&uow).await;
    let department = seed_department(&uow, company.id).await;
    let employee = seed_employee(&uow, company.id, department.id).await;

    uow.employee_addresses()
        .insert(employee.id, AddressType::Home, "10 Home Row".to_string())
        .await
        .unwrap();
    uow.employee_addresses()
        .insert(employee.id, AddressType::Work, "1 Office Park".to_string())
        .await
        .unwrap();
    assert_eq!(
        uow.employee_addresses().list(employee.id).await.unwrap().len(),
        2
    );

    uow.employees().delete(employee.id).await.unwrap();

    assert!(uow
        .employee_addresses()
        .list(employee.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_upsert_overwrites_slot_in_place() {
    let uow = fresh_uow().await;
    let company = seed_company(&uow).await;
    let department = seed_department(&uow, company.id).await;
    let employee = seed_employee(&uow, company.id, department.id).await;

    let first = uow
        .employee_addresses()
        .upsert(
            employee.id,
            AddressType::Residential,
            "123 Residential St".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(first.modified_at, never_modified());

    let second = uow
        .employee_addresses()
        .upsert(
            employee.id,
            AddressType::Residential,
            "77 Relocation Ave".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(second.address, "77 Relocation Ave");
    assert_eq!(second.created_at, first.created_at);
    assert!(second.modified_at > never_modified());

    // Still exactly one row in the slot
    let slots = uow.employee_addresses().list(employee.id).await.unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].address, "77 Relocation Ave");
}

#[tokio::test]
async fn test_inserting_taken_slot_conflicts() {
    let uow = fresh_uow().await;
    let company = seed_company(&uow).await;
    let department = seed_department(&uow, company.id).await;
    let employee = seed_employee(&uow, company.id, department.id).await;

    uow.employee_addresses()
        .insert(employee.id, AddressType::Home, "10 Home Row".to_string())
        .await
        .unwrap();

    let result = uow
        .employee_addresses()
        .insert(employee.id, AddressType::Home, "11 Home Row".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

// =============================================================================
// Directory Referential Rules
// =============================================================================

#[tokio::test]
async fn test_deleting_company_with_departments_is_rejected() {
    let uow = fresh_uow().await;
    let company = seed_company(&uow).await;
    seed_department(&uow, company.id).await;

    let result = uow.companies().delete(company.id).await;
    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));

    // The company survives the failed delete
    assert!(uow
        .companies()
        .find_by_id(company.id)
        .await
        .unwrap()
        .is_some());
}
