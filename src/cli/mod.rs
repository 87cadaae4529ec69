use clap::{Args, Subcommand};

use crate::domain::{Department, Employee, RecordId};

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server with empty in-memory stores
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },

    /// Manage employees on a running server
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage departments on a running server
    Department {
        #[command(subcommand)]
        action: DepartmentAction,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    List,

    Get {
        id: RecordId,
    },

    /// Create an employee; an id of 0 lets the server assign one
    Create {
        #[arg(long, default_value_t)]
        id: RecordId,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Replace every field of an existing employee
    Update {
        id: RecordId,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    Delete {
        id: RecordId,
    },
}

#[derive(Args)]
pub struct EmployeeFields {
    #[arg(long, default_value_t)]
    pub first_name: String,

    #[arg(long, default_value_t)]
    pub last_name: String,

    #[arg(long, default_value_t)]
    pub email: String,

    #[arg(long, default_value_t)]
    pub department_id: RecordId,

    #[arg(long, default_value_t)]
    pub department_name: String,
}

impl EmployeeFields {
    pub fn into_employee(self, id: RecordId) -> Employee {
        let department = Department::new(self.department_name).with_id(self.department_id);
        Employee::new(self.first_name, self.last_name, self.email, department).with_id(id)
    }
}

#[derive(Subcommand)]
pub enum DepartmentAction {
    List,

    Get {
        id: RecordId,
    },

    /// Create a department; an id of 0 lets the server assign one
    Create {
        #[arg(long, default_value_t)]
        id: RecordId,

        #[arg(long)]
        name: String,
    },

    /// Replace an existing department
    Update {
        id: RecordId,

        #[arg(long, default_value_t)]
        name: String,
    },

    Delete {
        id: RecordId,
    },
}
