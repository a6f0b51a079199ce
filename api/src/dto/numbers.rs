use ng_core::domain::entities::NumberFields;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /numbers` and `PUT /numbers/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NumberRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 32))]
    pub number: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

impl From<NumberRequest> for NumberFields {
    fn from(request: NumberRequest) -> Self {
        NumberFields {
            name: request.name,
            number: request.number,
            description: request.description,
        }
    }
}
