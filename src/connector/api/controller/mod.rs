pub mod department_controller;
pub mod employee_controller;
pub mod serve_controller;

pub use department_controller::DepartmentController;
pub use employee_controller::EmployeeController;
pub use serve_controller::ServeController;

use anyhow::Result;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
