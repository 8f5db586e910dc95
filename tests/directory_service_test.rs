//! Directory service unit tests (companies, departments, employees).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mockall::predicate::eq;

use orgdir_api::domain::{
    never_modified, AddressType, Company, CreateCompany, CreateDepartment, CreateEmployee,
    Department, Employee, EmployeeAddress,
};
use orgdir_api::errors::{AppError, AppResult};
use orgdir_api::infra::{
    AddressRepository, CompanyRepository, DepartmentRepository, EmployeeAddressRepository,
    EmployeeRepository, MockAddressRepository, MockCompanyRepository, MockDepartmentRepository,
    MockEmployeeAddressRepository, MockEmployeeRepository, MockUserRepository,
    TransactionContext, UnitOfWork, UserRepository,
};
use orgdir_api::services::{
    CompanyManager, CompanyService, DepartmentManager, DepartmentService, EmployeeManager,
    EmployeeService,
};
use orgdir_api::types::PaginationParams;

fn test_company(id: i32) -> Company {
    Company {
        id,
        name: "Acme".to_string(),
        description: Some("Widgets".to_string()),
        created_at: Utc::now(),
        modified_at: never_modified(),
    }
}

fn test_department(id: i32, company_id: i32) -> Department {
    Department {
        id,
        name: "Engineering".to_string(),
        description: None,
        company_id,
        created_at: Utc::now(),
        modified_at: never_modified(),
    }
}

fn test_employee(id: i32) -> Employee {
    Employee {
        id,
        first_name: "John".to_string(),
        last_name: "Winchester".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
        company_id: 1,
        department_id: 1,
        created_at: Utc::now(),
        modified_at: never_modified(),
    }
}

fn test_slot(employee_id: i32, address_type: AddressType, address: &str) -> EmployeeAddress {
    EmployeeAddress {
        employee_id,
        address_type,
        address: address.to_string(),
        created_at: Utc::now(),
        modified_at: never_modified(),
    }
}

/// Test mock for UnitOfWork wrapping per-repository mocks.
#[derive(Default)]
struct TestUnitOfWork {
    companies: Arc<MockCompanyRepository>,
    departments: Arc<MockDepartmentRepository>,
    employees: Arc<MockEmployeeRepository>,
    employee_addresses: Arc<MockEmployeeAddressRepository>,
    addresses: Arc<MockAddressRepository>,
    users: Arc<MockUserRepository>,
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.companies.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.departments.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employees.clone()
    }

    fn employee_addresses(&self) -> Arc<dyn EmployeeAddressRepository> {
        self.employee_addresses.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.addresses.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}

// =============================================================================
// Company service
// =============================================================================

#[tokio::test]
async fn test_get_company_success() {
    let mut repo = MockCompanyRepository::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .returning(|id| Ok(Some(test_company(id))));

    let uow = TestUnitOfWork {
        companies: Arc::new(repo),
        ..Default::default()
    };
    let service = CompanyManager::new(Arc::new(uow));

    let company = service.get_company(7).await.unwrap();
    assert_eq!(company.id, 7);
    assert_eq!(company.name, "Acme");
}

#[tokio::test]
async fn test_get_company_not_found() {
    let mut repo = MockCompanyRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let uow = TestUnitOfWork {
        companies: Arc::new(repo),
        ..Default::default()
    };
    let service = CompanyManager::new(Arc::new(uow));

    let result = service.get_company(404).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_companies_returns_page_and_total() {
    let mut repo = MockCompanyRepository::new();
    repo.expect_list()
        .returning(|_| Ok((vec![test_company(1), test_company(2)], 12)));

    let uow = TestUnitOfWork {
        companies: Arc::new(repo),
        ..Default::default()
    };
    let service = CompanyManager::new(Arc::new(uow));

    let (companies, total) = service
        .list_companies(PaginationParams::default())
        .await
        .unwrap();
    assert_eq!(companies.len(), 2);
    assert_eq!(total, 12);
}

#[tokio::test]
async fn test_create_company_starts_unmodified() {
    let mut repo = MockCompanyRepository::new();
    repo.expect_create()
        .withf(|data: &CreateCompany| data.name == "Acme")
        .returning(|data| {
            Ok(Company {
                id: 1,
                name: data.name,
                description: data.description,
                created_at: Utc::now(),
                modified_at: never_modified(),
            })
        });

    let uow = TestUnitOfWork {
        companies: Arc::new(repo),
        ..Default::default()
    };
    let service = CompanyManager::new(Arc::new(uow));

    let company = service
        .create_company(CreateCompany {
            name: "Acme".to_string(),
            description: None,
        })
        .await
        .unwrap();
    assert!(!company.is_modified());
}

#[tokio::test]
async fn test_delete_company_with_dependents_fails() {
    let mut repo = MockCompanyRepository::new();
    repo.expect_delete()
        .returning(|_| Err(AppError::bad_request("departments still reference it")));

    let uow = TestUnitOfWork {
        companies: Arc::new(repo),
        ..Default::default()
    };
    let service = CompanyManager::new(Arc::new(uow));

    let result = service.delete_company(1).await;
    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
}

// =============================================================================
// Department service
// =============================================================================

#[tokio::test]
async fn test_list_company_departments_requires_company() {
    let mut companies = MockCompanyRepository::new();
    companies.expect_find_by_id().returning(|_| Ok(None));

    // The department repo must never be consulted
    let departments = MockDepartmentRepository::new();

    let uow = TestUnitOfWork {
        companies: Arc::new(companies),
        departments: Arc::new(departments),
        ..Default::default()
    };
    let service = DepartmentManager::new(Arc::new(uow));

    let result = service.list_company_departments(99).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_company_departments_success() {
    let mut companies = MockCompanyRepository::new();
    companies
        .expect_find_by_id()
        .with(eq(3))
        .returning(|id| Ok(Some(test_company(id))));

    let mut departments = MockDepartmentRepository::new();
    departments
        .expect_list_by_company()
        .with(eq(3))
        .returning(|company_id| {
            Ok(vec![
                test_department(1, company_id),
                test_department(2, company_id),
            ])
        });

    let uow = TestUnitOfWork {
        companies: Arc::new(companies),
        departments: Arc::new(departments),
        ..Default::default()
    };
    let service = DepartmentManager::new(Arc::new(uow));

    let result = service.list_company_departments(3).await.unwrap();
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|d| d.company_id == 3));
}

#[tokio::test]
async fn test_create_department_passes_through() {
    let mut departments = MockDepartmentRepository::new();
    departments
        .expect_create()
        .withf(|data: &CreateDepartment| data.company_id == 1)
        .returning(|data| Ok(test_department(10, data.company_id)));

    let uow = TestUnitOfWork {
        departments: Arc::new(departments),
        ..Default::default()
    };
    let service = DepartmentManager::new(Arc::new(uow));

    let department = service
        .create_department(CreateDepartment {
            name: "Engineering".to_string(),
            description: None,
            company_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(department.id, 10);
}

// =============================================================================
// Employee service
// =============================================================================

#[tokio::test]
async fn test_get_employee_not_found() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_find_by_id().returning(|_| Ok(None));

    let uow = TestUnitOfWork {
        employees: Arc::new(employees),
        ..Default::default()
    };
    let service = EmployeeManager::new(Arc::new(uow));

    let result = service.get_employee(1).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_create_employee_passes_through() {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_create()
        .withf(|data: &CreateEmployee| data.first_name == "John")
        .returning(|_| Ok(test_employee(1)));

    let uow = TestUnitOfWork {
        employees: Arc::new(employees),
        ..Default::default()
    };
    let service = EmployeeManager::new(Arc::new(uow));

    let employee = service
        .create_employee(CreateEmployee {
            first_name: "John".to_string(),
            last_name: "Winchester".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
            company_id: 1,
            department_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(employee.id, 1);
}

#[tokio::test]
async fn test_list_slots_of_missing_employee_is_not_found() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_find_by_id().returning(|_| Ok(None));

    // Slot repo must never be consulted
    let slots = MockEmployeeAddressRepository::new();

    let uow = TestUnitOfWork {
        employees: Arc::new(employees),
        employee_addresses: Arc::new(slots),
        ..Default::default()
    };
    let service = EmployeeManager::new(Arc::new(uow));

    let result = service.list_employee_addresses(1).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_upsert_slot_overwrites_in_place() {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_employee(id))));

    let mut slots = MockEmployeeAddressRepository::new();
    slots
        .expect_upsert()
        .with(
            eq(1),
            eq(AddressType::Residential),
            eq("456 New Residential St".to_string()),
        )
        .returning(|employee_id, address_type, address| {
            let mut slot = test_slot(employee_id, address_type, &address);
            slot.modified_at = Utc::now();
            Ok(slot)
        });

    let uow = TestUnitOfWork {
        employees: Arc::new(employees),
        employee_addresses: Arc::new(slots),
        ..Default::default()
    };
    let service = EmployeeManager::new(Arc::new(uow));

    let slot = service
        .upsert_employee_address(
            1,
            AddressType::Residential,
            "456 New Residential St".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(slot.employee_id, 1);
    assert_eq!(slot.address, "456 New Residential St");
    assert!(slot.modified_at > never_modified());
}

#[tokio::test]
async fn test_add_slot_conflicts_when_taken() {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_employee(id))));

    let mut slots = MockEmployeeAddressRepository::new();
    slots
        .expect_insert()
        .returning(|_, _, _| Err(AppError::conflict("EmployeeAddress")));

    let uow = TestUnitOfWork {
        employees: Arc::new(employees),
        employee_addresses: Arc::new(slots),
        ..Default::default()
    };
    let service = EmployeeManager::new(Arc::new(uow));

    let result = service
        .add_employee_address(1, AddressType::Home, "1 Main St".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_remove_slot_passes_through() {
    let mut slots = MockEmployeeAddressRepository::new();
    slots
        .expect_remove()
        .with(eq(1), eq(AddressType::Work))
        .returning(|_, _| Ok(()));

    let uow = TestUnitOfWork {
        employee_addresses: Arc::new(slots),
        ..Default::default()
    };
    let service = EmployeeManager::new(Arc::new(uow));

    assert!(service
        .remove_employee_address(1, AddressType::Work)
        .await
        .is_ok());
}
