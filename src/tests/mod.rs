mod group;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Registry, RegistryConfig};

/// Registry with a fixed random seed.
fn seeded(config: RegistryConfig) -> Registry {
    Registry::with_config(config)
        .unwrap()
        .with_rng(StdRng::seed_from_u64(0x5eed))
}
