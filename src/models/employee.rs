use serde::{Deserialize, Serialize};

fn age_is_unset(age: &i64) -> bool {
    *age == 0
}

/// An employee record as stored in the document collection. Every field is
/// optional on the wire; absent fields are simply omitted from the stored
/// document, so encoding skips empty values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub employee_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub department: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gender: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "age_is_unset")]
    pub age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_fills_missing_fields_with_defaults() {
        let emp: Employee = serde_json::from_value(json!({"name": "Tony Stark"}))
            .expect("partial payload decodes");
        assert_eq!(emp.name, "Tony Stark");
        assert_eq!(emp.employee_id, "");
        assert_eq!(emp.age, 0);
    }

    #[test]
    fn encode_omits_empty_fields() {
        let emp = Employee {
            name: "Tony Stark".to_string(),
            age: 45,
            ..Employee::default()
        };
        let value = serde_json::to_value(&emp).expect("employee encodes");
        let obj = value.as_object().expect("object");
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["name"], "Tony Stark");
        assert_eq!(obj["age"], 45);
        assert!(!obj.contains_key("employee_id"));
    }

    #[test]
    fn round_trips_through_json() {
        let emp = Employee {
            employee_id: "abc-123".to_string(),
            name: "Tony Stark".to_string(),
            department: "physics".to_string(),
            mobile_number: "+15551234567".to_string(),
            gender: "Male".to_string(),
            email: "tony@stark.com".to_string(),
            age: 45,
        };
        let encoded = serde_json::to_string(&emp).expect("encodes");
        let decoded: Employee = serde_json::from_str(&encoded).expect("decodes");
        assert_eq!(decoded, emp);
    }
}
