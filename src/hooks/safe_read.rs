//! Safe-read hook
//!
//! Auto-approves reads of documentation and configuration files while
//! keeping sensitive files (environment, lock files, keys, vendored code)
//! behind the host's normal confirmation prompt.

use super::{HookContext, HookInput, HookResponse};
use crate::policy::PolicySet;
use anyhow::Result;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafeReadVerdict {
    /// Safe to auto-approve, with a friendly reason
    Approve(String),
    /// Matched a sensitive pattern; never auto-approved
    Sensitive(String),
    /// No table matched
    NoMatch,
}

impl SafeReadVerdict {
    pub fn is_approved(&self) -> bool {
        matches!(self, SafeReadVerdict::Approve(_))
    }
}

/// Classify a read. Sensitive patterns take precedence over safe ones.
pub fn is_safe_read(file_path: &str, policies: &PolicySet) -> SafeReadVerdict {
    if let Some(pattern) = policies.sensitive_reads.first_match(file_path) {
        return SafeReadVerdict::Sensitive(format!("Sensitive file pattern: {}", pattern.source));
    }

    match policies.safe_reads.first_match(file_path) {
        Some(pattern) => SafeReadVerdict::Approve(pattern.payload.reason().to_string()),
        None => SafeReadVerdict::NoMatch,
    }
}

pub fn execute<R>(input: &HookInput, context: &HookContext<R>) -> Result<HookResponse> {
    let Some(file_path) = input.file_path() else {
        return Ok(HookResponse::Silent);
    };

    match is_safe_read(file_path, &context.policies) {
        SafeReadVerdict::Approve(reason) => Ok(HookResponse::allow(reason)),
        SafeReadVerdict::Sensitive(reason) => {
            debug!(file_path, %reason, "read left to the host");
            Ok(HookResponse::Silent)
        }
        SafeReadVerdict::NoMatch => Ok(HookResponse::Silent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(path: &str) -> SafeReadVerdict {
        is_safe_read(path, &PolicySet::builtin())
    }

    #[test]
    fn test_documentation_is_approved() {
        assert_eq!(
            verdict("README.md"),
            SafeReadVerdict::Approve("Safe read: documentation file".to_string())
        );
        assert_eq!(
            verdict("/srv/shop/CLAUDE.md"),
            SafeReadVerdict::Approve("Safe read: documentation file".to_string())
        );
    }

    #[test]
    fn test_configuration_is_approved() {
        assert_eq!(
            verdict("/srv/shop/tsconfig.json"),
            SafeReadVerdict::Approve("Safe read: configuration file".to_string())
        );
        assert_eq!(
            verdict("/srv/shop/.claude/settings.local"),
            SafeReadVerdict::Approve("Safe read: Claude configuration".to_string())
        );
        assert_eq!(
            verdict("/srv/shop/vite.config.ts"),
            SafeReadVerdict::Approve("Safe read: safe file pattern".to_string())
        );
    }

    #[test]
    fn test_yaml_uses_generic_reason() {
        for path in ["docker-compose.yml", "/srv/shop/.github/workflows/ci.yaml"] {
            assert_eq!(
                verdict(path),
                SafeReadVerdict::Approve("Safe read: safe file pattern".to_string()),
                "{}",
                path
            );
        }
    }

    #[test]
    fn test_sensitive_files_are_not_approved() {
        match verdict("secrets.json") {
            SafeReadVerdict::Sensitive(reason) => assert!(reason.contains("Sensitive file pattern")),
            other => panic!("expected sensitive verdict, got {:?}", other),
        }

        for path in ["/srv/shop/composer.lock", "/srv/shop/storage/logs/laravel.log", "certs/server.pem", "aws/credentials"] {
            assert!(!verdict(path).is_approved(), "{} must not be approved", path);
        }
    }

    #[test]
    fn test_block_precedence_over_safe_patterns() {
        // matches README and .md, but vendored code is never auto-approved
        assert!(matches!(verdict("/vendor/README.md"), SafeReadVerdict::Sensitive(_)));
        assert!(matches!(verdict("/srv/shop/node_modules/pkg/package.json"), SafeReadVerdict::Sensitive(_)));
        assert!(matches!(verdict("/srv/shop/package-lock.json"), SafeReadVerdict::Sensitive(_)));
    }

    #[test]
    fn test_env_files_block_case_insensitively() {
        for path in [".env", ".ENV", ".EnV", "/srv/shop/.env.local.md"] {
            assert!(matches!(verdict(path), SafeReadVerdict::Sensitive(_)), "{}", path);
        }
    }

    #[test]
    fn test_unknown_files_have_no_opinion() {
        assert_eq!(verdict("/srv/shop/app/Models/Item.php"), SafeReadVerdict::NoMatch);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let policies = PolicySet::builtin();
        assert_eq!(is_safe_read("docs/guide.txt", &policies), is_safe_read("docs/guide.txt", &policies));
    }
}
