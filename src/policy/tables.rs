//! Built-in policy tables
//!
//! Order matters: every table is evaluated first-match-wins.

use serde::{Deserialize, Serialize};

/// Why a read is considered safe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SafeCategory {
    Documentation,
    Configuration,
    AssistantConfig,
    #[default]
    Generic,
}

impl SafeCategory {
    /// Friendly reason reported to the host
    pub fn reason(self) -> &'static str {
        match self {
            SafeCategory::Documentation => "Safe read: documentation file",
            SafeCategory::Configuration => "Safe read: configuration file",
            SafeCategory::AssistantConfig => "Safe read: Claude configuration",
            SafeCategory::Generic => "Safe read: safe file pattern",
        }
    }
}

impl std::fmt::Display for SafeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafeCategory::Documentation => write!(f, "documentation"),
            SafeCategory::Configuration => write!(f, "configuration"),
            SafeCategory::AssistantConfig => write!(f, "assistant config"),
            SafeCategory::Generic => write!(f, "generic"),
        }
    }
}

/// Label and explanation attached to a protected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protection {
    /// Short warning shown as the decision reason
    pub label: String,

    /// Longer explanation passed as additional context
    pub context: String,
}

impl Protection {
    pub fn new(label: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            context: context.into(),
        }
    }
}

/// Reads that are never auto-approved. Checked before [`SAFE_READS`].
pub const SENSITIVE_READS: &[&str] = &[
    r"\.env",               // .env, .env.local, ...
    r"package-lock\.json$", // lock files are huge
    r"composer\.lock$",
    r"yarn\.lock$",
    r"pnpm-lock\.yaml$",
    r"/storage/",
    r"/vendor/",
    r"/node_modules/",
    r"\.pem$",
    r"\.key$",
    r"credentials",
    r"secrets?\.json$",
];

/// Reads that are auto-approved when no sensitive pattern matched
pub const SAFE_READS: &[(&str, SafeCategory)] = &[
    (r"\.md$", SafeCategory::Documentation),
    (r"\.txt$", SafeCategory::Generic),
    (r"\.json$", SafeCategory::Configuration),
    (r"\.ya?ml$", SafeCategory::Generic),
    (r"\.claude/", SafeCategory::AssistantConfig),
    (r"CLAUDE\.md$", SafeCategory::Documentation),
    (r"README", SafeCategory::Documentation),
    (r"/docs?/", SafeCategory::Generic),
    (r"\.gitignore$", SafeCategory::Generic),
    (r"\.editorconfig$", SafeCategory::Generic),
    (r"tsconfig.*\.json$", SafeCategory::Configuration),
    (r"phpunit\.xml$", SafeCategory::Generic),
    (r"phpstan.*\.neon$", SafeCategory::Generic),
    (r"vite\.config\.", SafeCategory::Generic),
    (r"tailwind\.config\.", SafeCategory::Generic),
    (r"eslint\.config\.", SafeCategory::Generic),
];

/// Shell commands that can destroy uncommitted work or project data
pub const DESTRUCTIVE_COMMANDS: &[(&str, &str)] = &[
    (
        r"\bgit\s+clean\b",
        "git clean deletes untracked files permanently",
    ),
    (
        r"\bgit\s+reset\s+--hard\b",
        "git reset --hard discards all uncommitted changes",
    ),
    (
        r"\bgit\s+checkout\s+(--)?\s*\.\s*$",
        "git checkout . discards all unstaged changes",
    ),
    (
        r"\brm\s+-[a-zA-Z]*r[a-zA-Z]*f",
        "rm -rf permanently deletes files and directories",
    ),
    (
        r"\bgit\s+checkout\s+--\s+\S",
        "git checkout -- <file> discards unstaged changes to specific files",
    ),
    (
        r"\bphp\s+-r\b",
        "php -r executes arbitrary PHP code inline",
    ),
];

/// Files whose modification deserves an extra confirmation: (pattern, label, context)
pub const PROTECTED_FILES: &[(&str, &str, &str)] = &[
    (
        r"\.env",
        "⚠️ Environment file",
        "Environment files contain sensitive credentials and configuration.\n\
         Changes affect all deployments using this file.\n\
         Consider: Is this change needed across all environments?",
    ),
    (
        r"composer\.json$",
        "⚠️ PHP dependencies",
        "composer.json controls PHP package dependencies.\n\
         Changes require `composer install` to take effect.\n\
         Ensure version constraints are appropriate.",
    ),
    (
        r"package\.json$",
        "⚠️ JavaScript dependencies",
        "package.json controls JS/Node dependencies.\n\
         Changes require `npm install` to take effect.\n\
         Ensure version constraints are appropriate.",
    ),
    (
        r"config/.*\.php$",
        "⚠️ Laravel configuration file",
        "Laravel config files affect all environments.\n\
         Changes may require: `php artisan config:clear`\n\
         Consider: Does this belong in .env instead?",
    ),
    (
        r"database/migrations/",
        "⚠️ Database migration",
        "Migrations are permanent once run in production.\n\
         Ensure proper rollback is possible (down() method).\n\
         Test migration: `php artisan migrate:refresh --step=1`",
    ),
    (
        r"routes/.*\.php$",
        "⚠️ Route definitions",
        "Route changes affect application URL structure.\n\
         Ensure middleware and route names are correct.\n\
         Run: `php artisan route:list` to verify.",
    ),
    (
        r"app/Providers/",
        "⚠️ Service provider",
        "Service providers bootstrap the application.\n\
         Errors here can prevent the app from starting.\n\
         Test thoroughly before deploying.",
    ),
    (
        r"bootstrap/",
        "⚠️ Bootstrap file",
        "Bootstrap files control application initialization.\n\
         Errors here can break the entire application.\n\
         Test locally before deploying.",
    ),
    (
        r"app/Console/Kernel\.php$",
        "⚠️ Console scheduler",
        "The Console Kernel controls scheduled tasks.\n\
         Changes affect cron job execution.\n\
         Test with: `php artisan schedule:list`",
    ),
    (
        r"app/Http/Kernel\.php$",
        "⚠️ HTTP middleware stack",
        "The HTTP Kernel controls middleware execution order.\n\
         Changes affect all HTTP requests.\n\
         Middleware order is critical for security.",
    ),
    (
        r"app/Exceptions/Handler\.php$",
        "⚠️ Exception handler",
        "The Exception Handler controls error handling.\n\
         Errors here can mask other issues.\n\
         Test error scenarios after changes.",
    ),
];
