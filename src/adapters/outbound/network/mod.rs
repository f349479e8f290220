/// Network adapters for external API calls
mod pub_dev_client;

pub use pub_dev_client::{PubDevClient, DEFAULT_REGISTRY_URL};
