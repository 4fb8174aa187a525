use serde::{Deserialize, Serialize};

/// Payload for `POST /api/v1/courier`.
///
/// All three fields are required by the backend, but each is optional here so that
/// scenarios can send an incomplete body on purpose. An absent field is omitted from
/// the JSON, never sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// A field of the courier payloads, used to build incomplete requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourierField {
    Login,
    Password,
    FirstName,
}

impl NewCourier {
    /// Creates a complete courier payload.
    ///
    /// # Arguments
    /// * `login` - Unique login
    /// * `password` - Password used later to log in
    /// * `first_name` - Courier's display name
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            login: Some(login.into()),
            password: Some(password.into()),
            first_name: Some(first_name.into()),
        }
    }

    /// Drops one field from the payload.
    pub fn without(mut self, field: CourierField) -> Self {
        match field {
            CourierField::Login => self.login = None,
            CourierField::Password => self.password = None,
            CourierField::FirstName => self.first_name = None,
        }
        self
    }

    /// The login/password pair this courier will log in with.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            login: self.login.clone(),
            password: self.password.clone(),
        }
    }
}

/// Payload for `POST /api/v1/courier/login`; also the courier's tracking key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            password: Some(password.into()),
        }
    }

    /// Drops one field; `FirstName` is not part of a login and leaves it unchanged.
    pub fn without(mut self, field: CourierField) -> Self {
        match field {
            CourierField::Login => self.login = None,
            CourierField::Password => self.password = None,
            CourierField::FirstName => {}
        }
        self
    }
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_are_omitted_not_null() {
        let courier = NewCourier::new("gali", "1234", "ytut").without(CourierField::Password);
        assert_eq!(
            serde_json::to_value(&courier).unwrap(),
            json!({ "login": "gali", "firstName": "ytut" })
        );

        let login = Credentials::new("gali", "1234").without(CourierField::Login);
        assert_eq!(serde_json::to_value(&login).unwrap(), json!({ "password": "1234" }));
    }

    #[test]
    fn test_credentials_follow_the_payload() {
        let courier = NewCourier::new("gali", "1234", "ytut");
        assert_eq!(courier.credentials(), Credentials::new("gali", "1234"));
    }
}
