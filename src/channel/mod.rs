//! Named channels that can be toggled independently of the severity threshold.
//!
//! A channel is registered the first time anything asks about it, taking the
//! registry's default state at that moment. After that its value only changes
//! through [`ChannelRegistry::set_enabled`].

use std::collections::HashMap;

/// Channel name → enabled flag, plus the state given to channels seen for the first time.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    channels: HashMap<String, bool>,
    default_state: bool,
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ChannelRegistry {
    /// Empty registry whose unseen channels start as `default_state`.
    #[must_use]
    pub fn new(default_state: bool) -> Self {
        Self {
            channels: HashMap::new(),
            default_state,
        }
    }

    /// Returns the stored flag, registering `name` with the current default on first use.
    pub fn is_enabled(&mut self, name: &str) -> bool {
        if let Some(&enabled) = self.channels.get(name) {
            return enabled;
        }
        let enabled = self.default_state;
        self.channels.insert(name.to_string(), enabled);
        enabled
    }

    /// Copies persisted channel states in and replaces the default state.
    ///
    /// Meant to run once, before the first [`is_enabled`](Self::is_enabled).
    /// Channels that are already registered keep their current value.
    pub fn seed<I, K>(&mut self, initial: I, default_state: bool)
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        self.default_state = default_state;
        for (name, enabled) in initial {
            self.channels.entry(name.into()).or_insert(enabled);
        }
    }

    /// Explicitly sets a channel's state, registering it if needed.
    pub fn set_enabled(&mut self, name: impl Into<String>, enabled: bool) {
        self.channels.insert(name.into(), enabled);
    }

    /// Peeks at a channel without registering it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.channels.get(name).copied()
    }

    /// Whether `name` has been registered, without registering it.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// State assigned to channels registered from now on.
    #[must_use]
    pub const fn default_state(&self) -> bool {
        self.default_state
    }

    /// Already-registered channels are unaffected.
    pub const fn set_default_state(&mut self, state: bool) {
        self.default_state = state;
    }

    /// Number of registered channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True until the first channel is registered or seeded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Unordered view over every registered channel.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.channels.iter().map(|(name, &enabled)| (name.as_str(), enabled))
    }

    /// Registered channels sorted by name, for listings.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, bool)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
