//! JDBC connection URL interpolation.
//!
//! No validation happens here: empty parts produce a malformed URL that
//! only fails once Flyway tries to connect.

use crate::constants::JDBC_POSTGRESQL_PREFIX;

/// Build `jdbc:postgresql://{host}:{port}/{database}` by literal concatenation.
pub fn jdbc_url(host: &str, port: &str, database: &str) -> String {
    format!("{JDBC_POSTGRESQL_PREFIX}{host}:{port}/{database}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jdbc_url_interpolates_parts() {
        assert_eq!(
            jdbc_url("db.local", "5432", "app"),
            "jdbc:postgresql://db.local:5432/app"
        );
    }

    #[test]
    fn test_jdbc_url_with_missing_parts_is_not_validated() {
        assert_eq!(jdbc_url("", "", ""), "jdbc:postgresql://:/");
        assert_eq!(jdbc_url("db", "", "app"), "jdbc:postgresql://db:/app");
    }

    #[test]
    fn test_jdbc_url_keeps_port_as_text() {
        assert_eq!(
            jdbc_url("db", "not-a-port", "app"),
            "jdbc:postgresql://db:not-a-port/app"
        );
    }
}
