use crate::error::{BootstrapError, Result};

/// A named Stellar network: its passphrase and, where one exists, a public RPC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    pub name: &'static str,
    pub passphrase: &'static str,
    pub rpc_url: Option<&'static str>,
}

const NETWORKS: &[Network] = &[
    Network {
        name: "local",
        passphrase: "Standalone Network ; February 2017",
        rpc_url: Some("http://localhost:8000/rpc"),
    },
    Network {
        name: "futurenet",
        passphrase: "Test SDF Future Network ; October 2022",
        rpc_url: Some("https://rpc-futurenet.stellar.org"),
    },
    Network {
        name: "testnet",
        passphrase: "Test SDF Network ; September 2015",
        rpc_url: Some("https://soroban-testnet.stellar.org"),
    },
    Network {
        name: "mainnet",
        passphrase: "Public Global Stellar Network ; September 2015",
        rpc_url: None,
    },
];

impl Network {
    pub fn by_name(name: &str) -> Result<&'static Network> {
        NETWORKS
            .iter()
            .find(|network| network.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| BootstrapError::UnsupportedNetwork {
                network: name.to_string(),
            })
    }

    /// `explicit` wins over the network default.
    pub fn rpc_url(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .or(self.rpc_url)
            .map(str::to_string)
            .ok_or_else(|| BootstrapError::MissingRpcUrl {
                network: self.name.to_string(),
            })
    }
}
