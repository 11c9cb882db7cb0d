//! Runtime configuration for the collaboration platform.

use serde::{Deserialize, Serialize};

/// Tunables applied by the project catalogue and the public operation
/// surface.
///
/// # Examples
///
/// ```
/// use campus_collab::config::PlatformConfig;
///
/// let config = PlatformConfig::default().with_default_members_required(3);
/// assert_eq!(config.default_members_required, 3);
/// assert!(config.admin_override);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Team size recorded on new projects that do not state one.
    pub default_members_required: u32,
    /// Whether `ADMIN` callers may read other users' request and task
    /// listings.
    pub admin_override: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            default_members_required: 5,
            admin_override: true,
        }
    }
}

impl PlatformConfig {
    /// Creates a configuration that never lets admins read on behalf of
    /// another user.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            admin_override: false,
            ..Self::default()
        }
    }

    /// Sets the default required-member count.
    #[must_use]
    pub const fn with_default_members_required(mut self, count: u32) -> Self {
        self.default_members_required = count;
        self
    }

    /// Enables or disables the admin read override.
    #[must_use]
    pub const fn with_admin_override(mut self, enabled: bool) -> Self {
        self.admin_override = enabled;
        self
    }
}
