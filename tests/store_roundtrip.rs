use proptest::prelude::*;

use shouldupdate::store::{VersionStore, Versions};

fn arb_versions() -> impl Strategy<Value = Versions> {
    prop::collection::btree_map(r"\PC{0,12}[a-zA-Z0-9/._-]\PC{0,12}", r"\PC{0,24}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn store_roundtrip(versions in arb_versions()) {
        let dir = tempfile::tempdir().unwrap();
        let store = VersionStore::new(dir.path().join("versions.toml"));

        store.save(&versions).unwrap();
        prop_assert_eq!(store.load().unwrap(), versions);
    }

    #[test]
    fn upsert_then_remove_restores_contents(
        versions in arb_versions(),
        name in r"[a-z]{1,8}/[a-z]{1,8}",
        version in r"[0-9]{1,3}\.[0-9]{1,3}",
    ) {
        prop_assume!(!versions.contains_key(&name));
        let dir = tempfile::tempdir().unwrap();
        let store = VersionStore::new(dir.path().join("versions.toml"));
        store.save(&versions).unwrap();

        prop_assert_eq!(store.upsert(&name, &version).unwrap(), None);
        prop_assert_eq!(store.remove(&name).unwrap(), Some(version));
        prop_assert_eq!(store.load().unwrap(), versions);
    }
}
