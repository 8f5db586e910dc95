//! Authentication service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::predicate::eq;

use orgdir_api::config::Config;
use orgdir_api::domain::{never_modified, Password, RegisterUser, User};
use orgdir_api::errors::{AppError, AppResult};
use orgdir_api::infra::{
    AddressRepository, CompanyRepository, DepartmentRepository, EmployeeAddressRepository,
    EmployeeRepository, MockAddressRepository, MockCompanyRepository, MockDepartmentRepository,
    MockEmployeeAddressRepository, MockEmployeeRepository, MockUserRepository,
    TransactionContext, UnitOfWork, UserRepository,
};
use orgdir_api::services::{AuthService, Authenticator};

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn seeded_user(username: &str, password: &str) -> User {
    User {
        id: 1,
        username: username.to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        first_name: "John".to_string(),
        last_name: "Winchester".to_string(),
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

fn auth_with_users(users: MockUserRepository) -> Authenticator<TestUnitOfWork> {
    let uow = TestUnitOfWork {
        users: Arc::new(users),
        ..Default::default()
    };
    Authenticator::new(Arc::new(uow), Config::for_tests(TEST_SECRET))
}

#[tokio::test]
async fn test_login_with_correct_password_yields_token() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .with(eq("johnw"))
        .returning(|username| Ok(Some(seeded_user(username, "SecurePass123!"))));

    let service = auth_with_users(users);

    let token = service
        .login("johnw".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();
    assert!(!token.access_token.is_empty());
    assert_eq!(token.token_type, "Bearer");
    assert!(token.expires_in > 0);

    // The issued token must verify and carry the user's identity
    let claims = service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, 1);
    assert_eq!(claims.username, "johnw");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_invalid_credentials() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .returning(|username| Ok(Some(seeded_user(username, "SecurePass123!"))));

    let service = auth_with_users(users);

    let result = service
        .login("johnw".to_string(), "wrong-password".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_with_unknown_user_is_invalid_credentials() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|_| Ok(None));

    let service = auth_with_users(users);

    let result = service
        .login("nobody".to_string(), "whatever".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_register_hashes_password() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().returning(|_| Ok(None));
    users
        .expect_create()
        .withf(|_, password_hash: &String, _, _| {
            // Never the plaintext; verifiable against it
            password_hash != "SecurePass123!"
                && Password::from_hash(password_hash.clone()).verify("SecurePass123!")
        })
        .returning(|username, password_hash, first_name, last_name| {
            Ok(User {
                id: 1,
                username,
                password_hash,
                first_name,
                last_name,
                created_at: Utc::now(),
                modified_at: never_modified(),
            })
        });

    let service = auth_with_users(users);

    let user = service
        .register(RegisterUser {
            username: "johnw".to_string(),
            password: "SecurePass123!".to_string(),
            first_name: "John".to_string(),
            last_name: "Winchester".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.username, "johnw");
}

#[tokio::test]
async fn test_register_taken_username_conflicts() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .returning(|username| Ok(Some(seeded_user(username, "irrelevant"))));

    let service = auth_with_users(users);

    let result = service
        .register(RegisterUser {
            username: "johnw".to_string(),
            password: "SecurePass123!".to_string(),
            first_name: "John".to_string(),
            last_name: "Winchester".to_string(),
        })
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_verify_garbage_token_fails() {
    let service = auth_with_users(MockUserRepository::new());

    assert!(service.verify_token("not-a-jwt").is_err());
}
