//! DTOs for person endpoints

use personas_domain::Person;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a person record
///
/// Field names are shared by the create, update and read paths.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    /// Unique business identifier (e.g. a national ID), immutable once created
    #[schema(example = "123456")]
    pub document: String,
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Diaz")]
    pub last_name: String,
    #[schema(example = 25)]
    pub age: i32,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "1234567")]
    pub phone: String,
    #[schema(example = "Calle Falsa 123")]
    pub address: String,
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        Self {
            document: person.document,
            first_name: person.first_name,
            last_name: person.last_name,
            age: person.age,
            email: person.email,
            phone: person.phone,
            address: person.address,
        }
    }
}

impl From<PersonDto> for Person {
    fn from(dto: PersonDto) -> Self {
        Self {
            document: dto.document,
            first_name: dto.first_name,
            last_name: dto.last_name,
            age: dto.age,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
        }
    }
}

/// Response body carrying the outcome of a write operation
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Outcome message
    #[schema(example = "created")]
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "person not found")]
    pub error: String,
}
