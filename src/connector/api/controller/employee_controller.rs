use anyhow::{Context, Result};

use crate::cli::EmployeeAction;

use super::super::Container;
use super::to_json;

pub struct EmployeeController<'a> {
    container: &'a Container,
}

impl<'a> EmployeeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn handle(&self, action: EmployeeAction) -> Result<String> {
        let client = self.container.employee_client();
        let server = self.container.server_url();

        match action {
            EmployeeAction::List => {
                let employees = client
                    .retrieve_all()
                    .await
                    .with_context(|| format!("listing employees on {server}"))?;
                if employees.is_empty() {
                    return Ok("No employees stored.".to_string());
                }
                to_json(&employees)
            }
            EmployeeAction::Get { id } => {
                let employee = client
                    .retrieve(id)
                    .await
                    .with_context(|| format!("fetching employee {id} on {server}"))?;
                to_json(&employee)
            }
            EmployeeAction::Create { id, fields } => {
                let created = client
                    .create(&fields.into_employee(id))
                    .await
                    .with_context(|| format!("creating employee on {server}"))?;
                to_json(&created)
            }
            EmployeeAction::Update { id, fields } => {
                let updated = client
                    .update(&fields.into_employee(id))
                    .await
                    .with_context(|| format!("updating employee {id} on {server}"))?;
                to_json(&updated)
            }
            EmployeeAction::Delete { id } => {
                client
                    .delete(id)
                    .await
                    .with_context(|| format!("deleting employee {id} on {server}"))?;
                Ok(format!("Employee {id} deleted."))
            }
        }
    }
}
