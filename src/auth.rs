use lazy_static::lazy_static;

/// Seam for the credential check so the comparison logic is not baked into
/// the front-end. The default implementation matches the shipped operator
/// accounts; deployments can plug in their own.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Credential {
    username: &'static str,
    password: &'static str,
}

lazy_static! {
    static ref OPERATOR_LOGINS: Vec<Credential> = vec![
        Credential {
            username: "admin",
            password: "jewel@123",
        },
        Credential {
            username: "manager",
            password: "gold#2024",
        },
    ];
}

pub struct StaticCredentialVerifier;

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        OPERATOR_LOGINS
            .iter()
            .any(|c| c.username == username && c.password == password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_operator_verifies() {
        assert!(StaticCredentialVerifier.verify("admin", "jewel@123"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(!StaticCredentialVerifier.verify("admin", "wrong"));
        assert!(!StaticCredentialVerifier.verify("nobody", "jewel@123"));
    }

    #[test]
    fn the_verifier_seam_accepts_other_implementations() {
        struct AllowAll;
        impl CredentialVerifier for AllowAll {
            fn verify(&self, _username: &str, _password: &str) -> bool {
                true
            }
        }

        let verifier: &dyn CredentialVerifier = &AllowAll;
        assert!(verifier.verify("anyone", "anything"));
    }
}
