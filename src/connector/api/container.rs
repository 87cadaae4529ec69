use std::sync::Arc;

use tracing::debug;

use crate::application::ManageRecordsUseCase;
use crate::connector::{
    configured_server_url, DepartmentClient, DepartmentStore, EmployeeClient, EmployeeStore,
};
use crate::domain::{Department, Employee};

pub struct ContainerConfig {
    /// Base URL of the server targeted by the client commands.
    pub server_url: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            server_url: configured_server_url(),
        }
    }
}

/// Composition root: owns one store per record kind and hands out use
/// cases and clients wired to them.
///
/// Each container has its own stores, so independent containers never
/// share records.
pub struct Container {
    employee_store: Arc<EmployeeStore>,
    department_store: Arc<DepartmentStore>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        debug!("Initializing in-memory employee and department stores");
        Self {
            employee_store: Arc::new(EmployeeStore::new()),
            department_store: Arc::new(DepartmentStore::new()),
            config,
        }
    }

    pub fn employee_use_case(&self) -> ManageRecordsUseCase<Employee> {
        ManageRecordsUseCase::new(self.employee_store.clone())
    }

    pub fn department_use_case(&self) -> ManageRecordsUseCase<Department> {
        ManageRecordsUseCase::new(self.department_store.clone())
    }

    pub fn employee_client(&self) -> EmployeeClient {
        EmployeeClient::new(&self.config.server_url)
    }

    pub fn department_client(&self) -> DepartmentClient {
        DepartmentClient::new(&self.config.server_url)
    }

    pub fn server_url(&self) -> &str {
        &self.config.server_url
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(ContainerConfig::default())
    }
}
