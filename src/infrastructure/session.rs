use crate::domain::customer::Customer;
use crate::domain::ports::SessionProvider;

/// Session source backed by an environment variable holding the signed-in
/// customer as JSON, the way the demo binary receives it. Absent or
/// unparseable profiles mean "not signed in".
pub struct EnvSessionProvider {
    var: String,
}

impl EnvSessionProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SessionProvider for EnvSessionProvider {
    fn current_customer(&self) -> Option<Customer> {
        let raw = std::env::var(&self.var).ok()?;
        match serde_json::from_str(&raw) {
            Ok(customer) => Some(customer),
            Err(e) => {
                log::warn!("Ignoring unparseable {} profile: {}", self.var, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_means_no_session() {
        let provider = EnvSessionProvider::new("CART_TEST_SESSION_UNSET");
        assert!(provider.current_customer().is_none());
    }

    #[test]
    fn valid_profile_is_parsed() {
        std::env::set_var(
            "CART_TEST_SESSION_VALID",
            r#"{"id":"550e8400-e29b-41d4-a716-446655440000","email":"jo@example.com",
                "address":"1 Main St","city":"Springfield","state":"IL","zipCode":"62701"}"#,
        );
        let provider = EnvSessionProvider::new("CART_TEST_SESSION_VALID");
        let customer = provider.current_customer().expect("customer");
        assert_eq!(customer.email, "jo@example.com");
        assert_eq!(customer.zip_code, "62701");
    }

    #[test]
    fn unparseable_profile_means_no_session() {
        std::env::set_var("CART_TEST_SESSION_BAD", "{not json");
        let provider = EnvSessionProvider::new("CART_TEST_SESSION_BAD");
        assert!(provider.current_customer().is_none());
    }
}
