pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ManageRecordsUseCase, RecordRepository};

pub use cli::Commands;

pub use connector::api::{Container, ContainerConfig};
pub use connector::http::{create_router, serve, ApiError};
pub use connector::{
    ClientError, DepartmentClient, DepartmentStore, EmployeeClient, EmployeeStore,
    InMemoryRecordRepository, RecordClient,
};

pub use domain::{Department, DomainError, Employee, Record, RecordId, UNASSIGNED_ID};
