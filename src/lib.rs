//! Composable configuration builders for the flatlint rule-checking engine.
//!
//! The crate does not lint anything itself. Each composer is a pure function
//! from a [`ComposeOptions`] record to an ordered [`FragmentSequence`], which
//! the engine consumes through its CLI or programmatic entry point. Later
//! fragments override earlier ones for the same rule and overlapping file
//! scope, so composition is entirely about ordering:
//!
//! ```
//! use flatlint_config::{ComposeOptions, base_config};
//!
//! let sequence = base_config(ComposeOptions::new().with_playwright(true));
//! assert!(sequence.len() > 0);
//! ```
//!
//! Framework flavors ([`react_config`], [`vue_config`], [`angular_config`],
//! [`next_config`]) wrap the base composer and splice their own fragments in
//! front of the caller's, so user customizations always land last.

mod angular;
mod base;
mod catalog;
mod error;
mod fragment;
pub mod naming;
mod next;
mod options;
mod presets;
mod react;
mod sequence;
mod sequence_ext;
mod vue;

pub use angular::{angular_config, angular_config_with};
pub use base::{BUILT_IN_IGNORES, base_config};
pub use catalog::{ExtensionCatalog, keys};
pub use error::ConfigError;
pub use fragment::{
    Fragment, FragmentBuilder, LinterOptions, RuleMap, RuleSetting, SOURCE_FILES, Severity,
    TEST_FILES, only_for_source_files,
};
pub use next::{next_config, next_config_with};
pub use options::ComposeOptions;
pub use react::{react_config, react_config_with};
pub use sequence::{FragmentSequence, SequencedFragment};
pub use sequence_ext::FragmentSequenceExt;
pub use vue::{vue_config, vue_config_with};
