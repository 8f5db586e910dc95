//! Address service unit tests (pool CRUD and polymorphic relations).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use orgdir_api::domain::{
    never_modified, Address, AddressOwner, AddressRelation, CreateAddress, Employee,
    UpdateAddress,
};
use orgdir_api::errors::{AppError, AppResult};
use orgdir_api::infra::{
    AddressRepository, CompanyRepository, DepartmentRepository, EmployeeAddressRepository,
    EmployeeRepository, MockAddressRepository, MockCompanyRepository, MockDepartmentRepository,
    MockEmployeeAddressRepository, MockEmployeeRepository, MockUserRepository,
    TransactionContext, UnitOfWork, UserRepository,
};
use orgdir_api::services::{AddressManager, AddressService};

fn test_address(id: Uuid) -> Address {
    Address {
        id,
        full_address: "1 Main Street, Springfield".to_string(),
        created_at: Utc::now(),
        modified_at: never_modified(),
    }
}

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

#[tokio::test]
async fn test_get_address_not_found() {
    let mut addresses = MockAddressRepository::new();
    addresses.expect_find_by_id().returning(|_| Ok(None));

    let uow = TestUnitOfWork {
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let result = service.get_address(Uuid::new_v4()).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_create_address_starts_unmodified() {
    let mut addresses = MockAddressRepository::new();
    addresses
        .expect_create()
        .withf(|address: &Address| {
            address.full_address == "1 Main Street, Springfield" && !address.is_modified()
        })
        .returning(|address| Ok(address));

    let uow = TestUnitOfWork {
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let address = service
        .create_address(CreateAddress {
            full_address: "1 Main Street, Springfield".to_string(),
        })
        .await
        .unwrap();
    assert!(!address.is_modified());
}

#[tokio::test]
async fn test_update_address_passes_new_text() {
    let id = Uuid::new_v4();

    let mut addresses = MockAddressRepository::new();
    addresses
        .expect_update()
        .with(eq(id), eq("2 Side Street".to_string()))
        .returning(|id, full_address| {
            let mut address = test_address(id);
            address.full_address = full_address;
            address.modified_at = Utc::now();
            Ok(address)
        });

    let uow = TestUnitOfWork {
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let address = service
        .update_address(
            id,
            UpdateAddress {
                full_address: "2 Side Street".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(address.full_address, "2 Side Street");
    assert!(address.is_modified());
}

#[tokio::test]
async fn test_link_missing_address_is_not_found() {
    let mut addresses = MockAddressRepository::new();
    addresses.expect_find_by_id().returning(|_| Ok(None));

    let uow = TestUnitOfWork {
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let result = service
        .link(Uuid::new_v4(), AddressOwner::Company(1))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_relations_of_missing_address_is_not_found() {
    let mut addresses = MockAddressRepository::new();
    addresses.expect_find_by_id().returning(|_| Ok(None));

    let uow = TestUnitOfWork {
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let result = service.relations_of(Uuid::new_v4()).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_relations_of_lists_owners() {
    let id = Uuid::new_v4();

    let mut addresses = MockAddressRepository::new();
    addresses
        .expect_find_by_id()
        .with(eq(id))
        .returning(|id| Ok(Some(test_address(id))));
    addresses.expect_relations_of().with(eq(id)).returning(|id| {
        Ok(vec![
            AddressRelation {
                address_id: id,
                owner: AddressOwner::Company(1),
            },
            AddressRelation {
                address_id: id,
                owner: AddressOwner::Employee(4),
            },
        ])
    });

    let uow = TestUnitOfWork {
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let relations = service.relations_of(id).await.unwrap();
    assert_eq!(relations.len(), 2);
    assert!(relations.iter().all(|r| r.address_id == id));
}

#[tokio::test]
async fn test_addresses_of_missing_owner_is_not_found() {
    let mut companies = MockCompanyRepository::new();
    companies.expect_find_by_id().returning(|_| Ok(None));

    // Address repo must never be consulted for a missing owner
    let addresses = MockAddressRepository::new();

    let uow = TestUnitOfWork {
        companies: Arc::new(companies),
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let result = service.addresses_of(AddressOwner::Company(99)).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_addresses_of_employee_owner() {
    let mut employees = MockEmployeeRepository::new();
    employees.expect_find_by_id().with(eq(4)).returning(|id| {
        Ok(Some(Employee {
            id,
            first_name: "John".to_string(),
            last_name: "Winchester".to_string(),
            birth_date: chrono::NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
            company_id: 1,
            department_id: 1,
            created_at: Utc::now(),
            modified_at: never_modified(),
        }))
    });

    let mut addresses = MockAddressRepository::new();
    addresses
        .expect_addresses_of()
        .with(eq(AddressOwner::Employee(4)))
        .returning(|_| Ok(vec![test_address(Uuid::new_v4())]));

    let uow = TestUnitOfWork {
        employees: Arc::new(employees),
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let found = service
        .addresses_of(AddressOwner::Employee(4))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_unlink_missing_link_is_not_found() {
    let mut addresses = MockAddressRepository::new();
    addresses
        .expect_delete_link()
        .returning(|_, _| Err(AppError::NotFound));

    let uow = TestUnitOfWork {
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    let result = service
        .unlink(Uuid::new_v4(), AddressOwner::Department(2))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_delete_address_passes_through() {
    let id = Uuid::new_v4();

    let mut addresses = MockAddressRepository::new();
    addresses.expect_delete().with(eq(id)).returning(|_| Ok(()));

    let uow = TestUnitOfWork {
        addresses: Arc::new(addresses),
        ..Default::default()
    };
    let service = AddressManager::new(Arc::new(uow));

    assert!(service.delete_address(id).await.is_ok());
}
