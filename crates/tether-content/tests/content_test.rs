use std::sync::Arc;
use std::thread;

use tether_content::{
    diff_id_for_entry, render_line_diff, VirtualContentRegistry, VirtualDocumentProvider,
};

// ── Stored diff resolves through its virtual document URI ─────────────────

#[test]
fn stored_diff_resolves_exactly_through_uri() {
    let registry = Arc::new(VirtualContentRegistry::new());
    let provider = VirtualDocumentProvider::new("tether-diff", Arc::clone(&registry));

    registry.store("diff://turn-7", "- old\n+ new");
    let uri = provider.uri_for("diff://turn-7");

    assert_eq!(provider.provide_text(&uri), "- old\n+ new");
}

#[test]
fn rendered_diff_resolves_through_provider() {
    let registry = Arc::new(VirtualContentRegistry::new());
    let provider = VirtualDocumentProvider::new("tether-diff", Arc::clone(&registry));

    let id = diff_id_for_entry("turn-7");
    registry.store(id.clone(), render_line_diff("old", "new"));

    assert_eq!(provider.provide_text(&provider.uri_for(&id)), "- old\n+ new");
}

#[test]
fn reopening_does_not_consume_content() {
    let registry = Arc::new(VirtualContentRegistry::new());
    let provider = VirtualDocumentProvider::new("tether-diff", Arc::clone(&registry));
    registry.store("diff://x", "body");

    let uri = provider.uri_for("diff://x");
    for _ in 0..3 {
        assert_eq!(provider.provide_text(&uri), "body");
    }
    assert_eq!(registry.count(), 1);
}

// ── Concurrent writers and readers share one registry ─────────────────────

#[test]
fn concurrent_store_and_get_no_corruption() {
    let registry = Arc::new(VirtualContentRegistry::new());
    let mut handles = vec![];

    for t in 0..4 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                let id = format!("diff://{t}-{i}");
                registry.store(id.clone(), format!("body {t} {i}"));
                assert_eq!(registry.get(&id), Some(format!("body {t} {i}")));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.count(), 400);
    assert_eq!(registry.ids().len(), 400);
}
