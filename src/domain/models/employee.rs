use serde::{Deserialize, Serialize};

use super::record::null_as_default;
use super::{Department, Record, RecordId, UNASSIGNED_ID};

/// An employee together with a snapshot of their department.
///
/// The department is copied by value: later changes to the department
/// record are not reflected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub department: Department,
}

impl Employee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: Department,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department,
        }
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }
}

impl Record for Employee {
    const KIND: &'static str = "employee";
    const COLLECTION: &'static str = "employees";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_serializes_with_camel_case_fields() {
        let employee = Employee::new(
            "John",
            "Doe",
            "john.doe@example.com",
            Department::new("Engineering").with_id(1),
        )
        .with_id(7);

        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["email"], "john.doe@example.com");
        assert_eq!(json["department"]["id"], 1);
        assert_eq!(json["department"]["name"], "Engineering");
    }

    #[test]
    fn test_missing_fields_decode_to_empty_values() {
        let employee: Employee =
            serde_json::from_str(r#"{"id": 3, "firstName": "Jane"}"#).unwrap();

        assert_eq!(employee.id, 3);
        assert_eq!(employee.first_name, "Jane");
        assert_eq!(employee.last_name, "");
        assert_eq!(employee.email, "");
        assert_eq!(employee.department, Department::default());
    }

    #[test]
    fn test_missing_id_is_unassigned() {
        let employee: Employee = serde_json::from_str(r#"{"firstName": "Bob"}"#).unwrap();
        assert!(employee.is_unassigned());
    }

    #[test]
    fn test_null_fields_decode_to_zero_values() {
        let employee: Employee = serde_json::from_str(
            r#"{"id": null, "firstName": "Jane", "email": null, "department": null}"#,
        )
        .unwrap();

        assert!(employee.is_unassigned());
        assert_eq!(employee.first_name, "Jane");
        assert_eq!(employee.email, "");
        assert_eq!(employee.department, Department::default());
    }
}
