//! Builder for constructing status machines.

use crate::builder::error::BuildError;
use crate::config::StatusConfig;
use crate::error::StatusError;
use crate::machine::StatusMachine;
use crate::status::IsolationPolicy;
use crate::store::StatusStore;

/// Fluent construction of a [`StatusMachine`].
///
/// # Example
///
/// ```rust
/// use isolation_status::builder::StatusMachineBuilder;
/// use isolation_status::config::StatusConfig;
/// use isolation_status::store::MemoryStore;
///
/// let machine = StatusMachineBuilder::new()
///     .store(MemoryStore::new())
///     .config(StatusConfig::default())
///     .build()
///     .unwrap();
/// assert!(machine.current_status().is_ok());
/// ```
pub struct StatusMachineBuilder<S: StatusStore> {
    store: Option<S>,
    policy: Option<IsolationPolicy>,
    config: Option<StatusConfig>,
}

impl<S: StatusStore> StatusMachineBuilder<S> {
    /// An empty builder; only the store is required.
    pub fn new() -> Self {
        Self {
            store: None,
            policy: None,
            config: None,
        }
    }

    /// Set the persistence collaborator (required).
    pub fn store(mut self, store: S) -> Self {
        self.store = Some(store);
        self
    }

    /// Use an explicit policy.
    pub fn policy(mut self, policy: IsolationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Derive the policy from configuration.
    pub fn config(mut self, config: StatusConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the machine, loading the stored status.
    ///
    /// Without a policy or config the default policy is used.
    pub fn build(self) -> Result<StatusMachine<S>, StatusError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        let policy = match (self.policy, self.config) {
            (Some(_), Some(_)) => return Err(BuildError::ConflictingPolicy.into()),
            (Some(policy), None) => policy,
            (None, Some(config)) => config.policy()?,
            (None, None) => IsolationPolicy::default(),
        };
        StatusMachine::load(store, policy)
    }
}

impl<S: StatusStore> Default for StatusMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
