use ron::de::from_reader;
use ron::ser::{PrettyConfig, to_writer_pretty};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;

use crate::fragment::Fragment;

/// One slot in a composed sequence.
///
/// Disabled optional sections occupy a `Placeholder` slot instead of being
/// omitted, so every flag combination yields the same number of positions and
/// derived composers can rely on where things sit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SequencedFragment {
    Present(Fragment),
    Placeholder,
}

impl SequencedFragment {
    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            SequencedFragment::Present(fragment) => Some(fragment),
            SequencedFragment::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SequencedFragment::Placeholder)
    }
}

impl From<Fragment> for SequencedFragment {
    fn from(fragment: Fragment) -> Self {
        SequencedFragment::Present(fragment)
    }
}

/// An ordered sequence of configuration fragments.
///
/// Order is the only invariant the composer owns: later entries override
/// earlier ones for the same rule and overlapping file scope, and that
/// resolution happens in the engine, not here.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FragmentSequence {
    pub fragments: Vec<SequencedFragment>,
}

impl FragmentSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(SequencedFragment::Present(fragment));
    }

    pub fn push_placeholder(&mut self) {
        self.fragments.push(SequencedFragment::Placeholder);
    }

    /// Pushes the fragment when present, otherwise an inert placeholder that
    /// keeps the slot.
    pub fn push_optional(&mut self, fragment: Option<Fragment>) {
        match fragment {
            Some(fragment) => self.push(fragment),
            None => self.push_placeholder(),
        }
    }

    /// Appends caller- or preset-supplied fragments verbatim, preserving
    /// their relative order.
    pub fn splice<I>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = Fragment>,
    {
        for fragment in fragments {
            self.push(fragment);
        }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequencedFragment> {
        self.fragments.iter()
    }

    /// Iterates over the non-placeholder fragments.
    pub fn present(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter_map(SequencedFragment::fragment)
    }

    /// Position of the first fragment configuring the given rule.
    pub fn position_with_rule(&self, rule: &str) -> Option<usize> {
        self.fragments.iter().position(|slot| {
            slot.fragment()
                .is_some_and(|fragment| fragment.rules.contains_key(rule))
        })
    }

    // Method to write the sequence to a file for the engine to pick up
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path).map_err(io::Error::other)?;
        to_writer_pretty(file, &self.fragments, PrettyConfig::default())
            .map_err(io::Error::other)?;
        Ok(())
    }

    // Method to read a previously written sequence back
    pub fn read_from_file<P: AsRef<std::path::Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path).map_err(io::Error::other)?;

        let fragments: Vec<SequencedFragment> = from_reader(file).map_err(io::Error::other)?;

        Ok(FragmentSequence { fragments })
    }
}

impl FromIterator<Fragment> for FragmentSequence {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        FragmentSequence {
            fragments: iter.into_iter().map(SequencedFragment::Present).collect(),
        }
    }
}
