//! Error messages the backend returns, verbatim.

/// `400` from `POST /api/v1/courier` when a field is missing.
pub const COURIER_CREATE_MISSING_FIELDS: &str = "Недостаточно данных для создания учетной записи";

/// `409` from `POST /api/v1/courier` when the login is taken.
pub const COURIER_LOGIN_TAKEN: &str = "Этот логин уже используется. Попробуйте другой.";

/// `400` from `POST /api/v1/courier/login` when a field is missing.
pub const COURIER_LOGIN_MISSING_FIELDS: &str = "Недостаточно данных для входа";

/// `404` from `POST /api/v1/courier/login` for unknown or mismatched credentials.
pub const COURIER_NOT_FOUND: &str = "Учетная запись не найдена";
