use proptest::prelude::*;
use tether_ledger::OptimisticLedger;

#[derive(Debug, Clone)]
enum Op {
    Mark,
    Consume,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Mark), Just(Op::Consume)]
}

// ── Exactly the first consume after a mark succeeds ──────────────────────

proptest! {
    #[test]
    fn first_consume_after_mark_wins(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut ledger = OptimisticLedger::new();
        let mut marked = false;
        for op in ops {
            match op {
                Op::Mark => {
                    ledger.mark_user_input_pending();
                    marked = true;
                }
                Op::Consume => {
                    let consumed = ledger.consume_user_input_if_pending();
                    prop_assert_eq!(consumed, marked);
                    marked = false;
                }
            }
        }
    }
}

// ── Permission consume twice: true then false ────────────────────────────

proptest! {
    #[test]
    fn permission_consume_is_true_then_false(
        id in "[a-z0-9-]{1,24}",
        marks in 1usize..5,
    ) {
        let mut ledger = OptimisticLedger::new();
        for _ in 0..marks {
            ledger.mark_permission_pending(id.clone());
        }
        prop_assert!(ledger.consume_permission_if_pending(&id));
        prop_assert!(!ledger.consume_permission_if_pending(&id));
    }
}

// ── Markers for distinct ids are independent ─────────────────────────────

proptest! {
    #[test]
    fn distinct_permissions_do_not_interfere(
        ids in prop::collection::hash_set("[a-z]{1,8}", 1..16),
    ) {
        let mut ledger = OptimisticLedger::new();
        for id in &ids {
            ledger.mark_permission_pending(id.clone());
        }
        prop_assert_eq!(ledger.pending_permission_count(), ids.len());
        for id in &ids {
            prop_assert!(ledger.consume_permission_if_pending(id));
        }
        prop_assert!(ledger.is_empty());
    }
}
