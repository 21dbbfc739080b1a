use crate::requests::PageQuery;

/// Builds loyalty API URLs against a base.
///
/// The browser client uses an empty base (same origin, served by the gateway);
/// the gateway uses the configured upstream base URLs. Both therefore agree on
/// paths by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// `base` may be empty. A trailing slash is dropped.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn users(&self, query: PageQuery) -> String {
        format!("{}/api/users/?{}", self.base, query.to_query_string())
    }

    pub fn user(&self, national_id: &str) -> String {
        format!("{}/api/users/{}", self.base, urlencoding::encode(national_id))
    }

    pub fn user_points(&self, national_id: &str) -> String {
        format!(
            "{}/api/users/puntos/{}",
            self.base,
            urlencoding::encode(national_id)
        )
    }

    pub fn ready_users(&self, query: PageQuery) -> String {
        format!(
            "{}/api/users/listos-canje/?{}",
            self.base,
            query.to_query_string()
        )
    }

    pub fn customer_points(&self, national_id: &str) -> String {
        format!(
            "{}/api/puntos/cliente/{}",
            self.base,
            urlencoding::encode(national_id)
        )
    }

    pub fn ready_customers(&self, query: PageQuery) -> String {
        format!(
            "{}/api/puntos/listos-canje?{}",
            self.base,
            query.to_query_string()
        )
    }

    pub fn upload(&self) -> String {
        format!("{}/api/data/upload", self.base)
    }
}
