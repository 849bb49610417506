use serde::{Deserialize, Serialize};

/// A virtual machine to provision, as sent by the client.
///
/// None of the fields are validated: they are substituted into the
/// Vagrantfile verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxDescriptor {
    /// Base box, e.g. `ubuntu/focal64`.
    pub name: String,
    /// Guest hostname, also used as the VirtualBox display name.
    pub hostname: String,
    pub cpu: i64,
    /// Memory in megabytes.
    pub memory: i64,
    pub ip_address: String,
    /// Vagrant network mode, e.g. `private_network`.
    pub network_type: String,
}
