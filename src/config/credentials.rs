use tracing::debug;

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_credential_literal() {
        assert_eq!(resolve_credential("abc123token"), "abc123token");
    }

    #[test]
    fn test_resolve_credential_env_var() {
        std::env::set_var("TEST_ESGRISK_CRED", "secret123");
        assert_eq!(resolve_credential("$TEST_ESGRISK_CRED"), "secret123");
        std::env::remove_var("TEST_ESGRISK_CRED");
    }

    #[test]
    fn test_resolve_credential_missing_env_var() {
        let result = resolve_credential("$NONEXISTENT_ESGRISK_VAR");
        assert_eq!(result, "$NONEXISTENT_ESGRISK_VAR");
    }
}
