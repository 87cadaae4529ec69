use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{DepartmentController, EmployeeController, ServeController};

pub struct Router<'a> {
    serve_controller: ServeController<'a>,
    employee_controller: EmployeeController<'a>,
    department_controller: DepartmentController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            serve_controller: ServeController::new(container),
            employee_controller: EmployeeController::new(container),
            department_controller: DepartmentController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Serve { host, port } => self.serve_controller.serve(&host, port).await,
            Commands::Employee { action } => self.employee_controller.handle(action).await,
            Commands::Department { action } => self.department_controller.handle(action).await,
        }
    }
}
