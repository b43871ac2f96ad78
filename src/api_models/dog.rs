use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::NewDog;

/// POST / PUT 的请求体。字段先按可选接收，由 `validate` 做必填校验。
#[derive(Debug, Deserialize, Default)]
pub struct DogPayload {
    pub name: Option<String>,
    pub weight: Option<f64>,
}

#[derive(Debug, Error, PartialEq)]
#[error("name and weight are required")]
pub struct MissingFields;

impl DogPayload {
    pub fn validate(self) -> Result<NewDog, MissingFields> {
        match (self.name, self.weight) {
            (Some(name), Some(weight)) => Ok(NewDog { name, weight }),
            _ => Err(MissingFields),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DogResponse {
    pub id: String,
    pub name: String,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> DogPayload {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn complete_payload_validates() {
        let new_dog = parse(r#"{"name":"Rex","weight":20}"#).validate().unwrap();
        assert_eq!(
            new_dog,
            NewDog {
                name: "Rex".to_string(),
                weight: 20.0,
            }
        );
    }

    #[test]
    fn missing_or_null_fields_are_rejected() {
        for body in [
            r#"{"name":"Rex"}"#,
            r#"{"weight":20}"#,
            r#"{"name":null,"weight":20}"#,
            r#"{}"#,
        ] {
            assert_eq!(parse(body).validate(), Err(MissingFields), "body: {body}");
        }
    }

    #[test]
    fn presence_check_only() {
        // 空名字和 0 体重都算“已提供”
        let new_dog = parse(r#"{"name":"","weight":0}"#).validate().unwrap();
        assert_eq!(new_dog.name, "");
        assert_eq!(new_dog.weight, 0.0);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let new_dog = parse(r#"{"name":"Rex","weight":20,"id":"hijack","breed":"lab"}"#)
            .validate()
            .unwrap();
        assert_eq!(new_dog.name, "Rex");
    }

    #[test]
    fn wrong_type_fails_to_deserialize() {
        assert!(serde_json::from_str::<DogPayload>(r#"{"name":"Rex","weight":"heavy"}"#).is_err());
    }
}
