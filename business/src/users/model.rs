//! User record as served by the users endpoint.
//!
//! Only `id` is required; every other field falls back to empty so a sparse record still
//! renders. Wire names are camelCase (`birthDate`, `catchPhrase`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub login: Login,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

/// Login info. Only `username` is shown; the credential fields are carried as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Login {
    pub uuid: String,
    pub username: String,
    pub password: String,
    pub md5: String,
    pub sha1: String,
    pub registered: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn username(&self) -> &str {
        &self.login.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "firstname": "John",
            "lastname": "Doe",
            "email": "johndoe@example.com",
            "birthDate": "1973-01-22",
            "login": {
                "uuid": "1a0eed01-9430-4d68-901f-c0d4c1c3bf22",
                "username": "johndoe",
                "password": "jsonplaceholder.org",
                "md5": "c1328472c5794a25723600f71c1b4586",
                "sha1": "35544a31cc19bd6520af116554873167117f4d94",
                "registered": "2023-01-10T10:03:20.022Z"
            },
            "address": {
                "street": "123 Main Street",
                "suite": "Apt. 4",
                "city": "Anytown",
                "zipcode": "12345-6789",
                "geo": { "lat": "42.1234", "lng": "-71.2345" }
            },
            "phone": "(555) 555-1234",
            "website": "www.johndoe.com",
            "company": {
                "name": "ABC Company",
                "catchPhrase": "Innovative solutions for all your needs",
                "bs": "Marketing"
            }
        }))
        .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.full_name(), "John Doe");
        assert_eq!(user.username(), "johndoe");
        assert_eq!(user.birth_date, "1973-01-22");
        assert_eq!(user.address.geo.lng, "-71.2345");
        assert_eq!(user.company.catch_phrase, "Innovative solutions for all your needs");
    }

    #[test]
    fn sparse_record_defaults_missing_fields() {
        let user: User = serde_json::from_str(r#"{"id": 7, "firstname": "Ann"}"#).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.lastname, "");
        assert_eq!(user.username(), "");
        assert_eq!(user.company, Company::default());
    }

    #[test]
    fn record_without_id_is_rejected() {
        assert!(serde_json::from_str::<User>(r#"{"firstname": "Ann"}"#).is_err());
    }
}
