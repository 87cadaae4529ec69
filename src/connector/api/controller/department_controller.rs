use anyhow::{Context, Result};

use crate::cli::DepartmentAction;
use crate::domain::Department;

use super::super::Container;
use super::to_json;

pub struct DepartmentController<'a> {
    container: &'a Container,
}

impl<'a> DepartmentController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn handle(&self, action: DepartmentAction) -> Result<String> {
        let client = self.container.department_client();
        let server = self.container.server_url();

        match action {
            DepartmentAction::List => {
                let departments = client
                    .retrieve_all()
                    .await
                    .with_context(|| format!("listing departments on {server}"))?;
                if departments.is_empty() {
                    return Ok("No departments stored.".to_string());
                }
                to_json(&departments)
            }
            DepartmentAction::Get { id } => {
                let department = client
                    .retrieve(id)
                    .await
                    .with_context(|| format!("fetching department {id} on {server}"))?;
                to_json(&department)
            }
            DepartmentAction::Create { id, name } => {
                let created = client
                    .create(&Department::new(name).with_id(id))
                    .await
                    .with_context(|| format!("creating department on {server}"))?;
                to_json(&created)
            }
            DepartmentAction::Update { id, name } => {
                let updated = client
                    .update(&Department::new(name).with_id(id))
                    .await
                    .with_context(|| format!("updating department {id} on {server}"))?;
                to_json(&updated)
            }
            DepartmentAction::Delete { id } => {
                client
                    .delete(id)
                    .await
                    .with_context(|| format!("deleting department {id} on {server}"))?;
                Ok(format!("Department {id} deleted."))
            }
        }
    }
}
