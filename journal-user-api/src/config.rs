use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub keycloak_url: String,
    pub keycloak_realm: String,
    /// Client used for the password-grant login probe.
    pub keycloak_client_id: String,
    pub keycloak_client_secret: Option<String>,
    /// Client and credentials used to acquire the admin token.
    pub keycloak_admin_client_id: String,
    pub keycloak_admin_username: String,
    pub keycloak_admin_password: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            keycloak_url: env::var("KEYCLOAK_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            keycloak_realm: env::var("KEYCLOAK_REALM").unwrap_or_else(|_| "journal".into()),
            keycloak_client_id: env::var("KEYCLOAK_CLIENT_ID")
                .unwrap_or_else(|_| "user-mgmt-service".into()),
            keycloak_client_secret: env::var("KEYCLOAK_CLIENT_SECRET").ok(),
            keycloak_admin_client_id: env::var("KEYCLOAK_ADMIN_CLIENT_ID")
                .unwrap_or_else(|_| "admin-cli".into()),
            keycloak_admin_username: env::var("KEYCLOAK_ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".into()),
            keycloak_admin_password: env::var("KEYCLOAK_ADMIN_PASSWORD")
                .expect("KEYCLOAK_ADMIN_PASSWORD must be set"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .expect("Invalid PORT"),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:30073,http://127.0.0.1:30073".into()
                })
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        }
    }
}
