//! Policy pattern tables
//!
//! Every hook decision is driven by an ordered table of case-insensitive
//! regular expressions, each paired with a payload describing what a match
//! means. Tables are evaluated first-match-wins. The built-in entries live in
//! [`tables`] as plain data; configuration may append extra entries after them.

use crate::config::ToolguardConfig;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

pub mod tables;

#[cfg(test)]
mod tests;

pub use tables::{Protection, SafeCategory};

/// A compiled policy pattern
#[derive(Debug, Clone)]
pub struct PolicyPattern<P> {
    /// Regex source as written in the table
    pub source: String,

    /// Compiled, case-insensitive regex
    pub regex: Regex,

    /// What a match means for the hook
    pub payload: P,
}

impl<P> PolicyPattern<P> {
    /// Compile a new policy pattern
    pub fn new(pattern: &str, payload: P) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid regex pattern: {}", pattern))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            payload,
        })
    }

    /// Unanchored search, like `re.search`
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

/// Ordered pattern table, first match wins
#[derive(Debug, Clone)]
pub struct PatternTable<P> {
    patterns: Vec<PolicyPattern<P>>,
}

impl<P> PatternTable<P> {
    /// Compile a table from `(regex, payload)` entries, preserving order
    pub fn compile<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, P)>,
        S: AsRef<str>,
    {
        let patterns = entries
            .into_iter()
            .map(|(pattern, payload)| PolicyPattern::new(pattern.as_ref(), payload))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Return the first pattern matching `haystack`
    pub fn first_match(&self, haystack: &str) -> Option<&PolicyPattern<P>> {
        self.patterns.iter().find(|pattern| pattern.is_match(haystack))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolicyPattern<P>> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The four tables the hooks consult
#[derive(Debug, Clone)]
pub struct PolicySet {
    /// Reads that must never be auto-approved
    pub sensitive_reads: PatternTable<()>,

    /// Reads that are safe to auto-approve
    pub safe_reads: PatternTable<SafeCategory>,

    /// Shell commands that need explicit confirmation
    pub destructive_commands: PatternTable<String>,

    /// Files whose edits need explicit confirmation
    pub protected_files: PatternTable<Protection>,
}

lazy_static! {
    static ref BUILTIN: PolicySet =
        PolicySet::from_config(&ToolguardConfig::default()).expect("built-in policy patterns compile");
}

impl PolicySet {
    /// Built-in tables with no configured extras
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Compile built-in tables followed by the extras from configuration
    pub fn from_config(config: &ToolguardConfig) -> Result<Self> {
        let sensitive_reads = PatternTable::compile(
            tables::SENSITIVE_READS
                .iter()
                .map(|pattern| (pattern.to_string(), ()))
                .chain(config.safe_read.extra_block.iter().map(|pattern| (pattern.clone(), ()))),
        )
        .context("Failed to compile sensitive read patterns")?;

        let safe_reads = PatternTable::compile(
            tables::SAFE_READS
                .iter()
                .map(|(pattern, category)| (pattern.to_string(), *category))
                .chain(
                    config
                        .safe_read
                        .extra_safe
                        .iter()
                        .map(|entry| (entry.pattern.clone(), entry.category)),
                ),
        )
        .context("Failed to compile safe read patterns")?;

        let destructive_commands = PatternTable::compile(
            tables::DESTRUCTIVE_COMMANDS
                .iter()
                .map(|(pattern, message)| (pattern.to_string(), message.to_string()))
                .chain(
                    config
                        .destructive_bash
                        .extra_patterns
                        .iter()
                        .map(|entry| (entry.pattern.clone(), entry.message.clone())),
                ),
        )
        .context("Failed to compile destructive command patterns")?;

        let protected_files = PatternTable::compile(
            tables::PROTECTED_FILES
                .iter()
                .map(|(pattern, label, context)| {
                    (pattern.to_string(), Protection::new(*label, *context))
                })
                .chain(config.file_protection.extra_patterns.iter().map(|entry| {
                    (
                        entry.pattern.clone(),
                        Protection::new(entry.message.as_str(), entry.context.as_str()),
                    )
                })),
        )
        .context("Failed to compile protected file patterns")?;

        Ok(Self {
            sensitive_reads,
            safe_reads,
            destructive_commands,
            protected_files,
        })
    }
}
