//! HTTP request handlers.

pub mod address_handler;
pub mod auth_handler;
pub mod company_handler;
pub mod department_handler;
pub mod employee_handler;

pub use address_handler::address_routes;
pub use auth_handler::auth_routes;
pub use company_handler::company_routes;
pub use department_handler::department_routes;
pub use employee_handler::employee_routes;
