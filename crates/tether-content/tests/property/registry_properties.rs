use proptest::prelude::*;
use tether_content::VirtualContentRegistry;

// ── store then get returns the stored content ────────────────────────────

proptest! {
    #[test]
    fn store_then_get_round_trips(id in "[a-z:/0-9-]{1,32}", content in ".*") {
        let registry = VirtualContentRegistry::new();
        registry.store(id.clone(), content.clone());
        prop_assert_eq!(registry.get(&id), Some(content));
    }
}

// ── clear_all empties the registry for any population ────────────────────

proptest! {
    #[test]
    fn clear_all_empties_everything(
        entries in prop::collection::hash_map("[a-z0-9]{1,12}", ".{0,40}", 0..32),
    ) {
        let registry = VirtualContentRegistry::new();
        for (id, content) in &entries {
            registry.store(id.clone(), content.clone());
        }
        prop_assert_eq!(registry.count(), entries.len());

        registry.clear_all();

        prop_assert_eq!(registry.count(), 0);
        for id in entries.keys() {
            prop_assert!(registry.get(id).is_none());
            prop_assert!(!registry.has(id));
        }
    }
}
