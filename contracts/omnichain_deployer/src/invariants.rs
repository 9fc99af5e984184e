#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, BytesN, Vec};

/// INV-1: After a successful launch the project belongs to the requested
/// owner and never to the deployer.
pub fn assert_final_owner(actual: &Address, requested: &Address, deployer: &Address) {
    assert_eq!(
        actual, requested,
        "INV-1 violated: project owned by {:?}, expected {:?}",
        actual, requested
    );
    assert_ne!(
        actual, deployer,
        "INV-1 violated: project left owned by the deployer"
    );
}

/// INV-2: Distinct requesters never share an effective salt.
pub fn assert_salts_distinct(first: &BytesN<32>, second: &BytesN<32>) {
    assert_ne!(
        first, second,
        "INV-2 violated: two requesters derived the same effective salt"
    );
}

/// INV-3: An effective salt is never the raw salt it came from.
pub fn assert_salt_rebound(raw: &BytesN<32>, effective: &BytesN<32>) {
    assert_ne!(
        raw, effective,
        "INV-3 violated: raw salt reached the registry unbound"
    );
}

/// INV-4: The sucker set returned to the caller is exactly what the registry
/// recorded for this call, in order.
pub fn assert_suckers_recorded(returned: &Vec<Address>, recorded: &Vec<Address>) {
    assert_eq!(
        returned.len(),
        recorded.len(),
        "INV-4 violated: {} suckers returned, {} recorded",
        returned.len(),
        recorded.len()
    );
    for (i, sucker) in returned.iter().enumerate() {
        assert_eq!(
            Some(sucker),
            recorded.get(i as u32),
            "INV-4 violated: sucker {} out of order",
            i
        );
    }
}
