//! The capacity-aware packing rule.

use blocksim_primitives::PendingTx;

use crate::selector::TxSelector;

/// One assembled-but-unsealed block: the included transactions and their
/// aggregates. The driver turns non-empty drafts into sealed blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockDraft {
    txs: Vec<PendingTx>,
    gas_used: u64,
    reward: u128,
}

impl BlockDraft {
    /// Included transactions in admission order.
    pub fn txs(&self) -> &[PendingTx] {
        &self.txs
    }

    /// Total gas of the included transactions.
    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }

    /// Total reward of the included transactions, in wei.
    pub fn reward(&self) -> u128 {
        self.reward
    }

    /// True when nothing fit.
    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }

    /// Consumes the draft into its parts.
    pub fn into_parts(self) -> (Vec<PendingTx>, u64, u128) {
        (self.txs, self.gas_used, self.reward)
    }
}

/// Packs one block from the selector.
///
/// First-fit greedy scan: each candidate is included iff it fits under
/// `gas_hard_cap`; a candidate that does not fit is skipped (it stays in the
/// mempool for later blocks) and the scan continues, so smaller candidates
/// further down the strategy order can still fill the block. Admission stops
/// early once `gas_used >= gas_target`, or when the selector runs dry.
///
/// An empty draft is a normal outcome, not an error. No backtracking: the
/// result is not guaranteed to reach the target or maximize reward even when
/// a feasible combination exists.
pub fn assemble_block<S: TxSelector + ?Sized>(
    selector: &mut S,
    gas_target: u64,
    gas_hard_cap: u64,
) -> BlockDraft {
    let mut draft = BlockDraft::default();

    while let Some(tx) = selector.next_tx() {
        if draft.gas_used + tx.gas_limit <= gas_hard_cap {
            draft.gas_used += tx.gas_limit;
            draft.reward += tx.reward;
            draft.txs.push(tx);
            if draft.gas_used >= gas_target {
                break;
            }
        }
        // Over the cap: skipped, not consumed from the mempool.
    }

    draft
}

#[cfg(test)]
mod tests {
    use blocksim_primitives::TxId;

    use super::*;
    use crate::selector::SelectionPolicy;

    fn tx(id: &str, gas: u64, fee: u128, reward: u128, ts: i64) -> PendingTx {
        PendingTx::new(TxId::from(id), gas, fee, reward, ts)
    }

    fn ids(draft: &BlockDraft) -> Vec<&str> {
        draft.txs().iter().map(|t| t.txid.as_str()).collect()
    }

    #[test]
    fn packs_around_oversized_candidate() {
        // 0xbig is densest but alone exceeds the cap together with nothing;
        // it fits, then the next-densest that still fits is packed around it.
        let candidates = vec![
            tx("0xbig", 50, 5_000, 0, 1), // density 100
            tx("0xmid", 40, 400, 0, 1),   // density 10
            tx("0xsml", 10, 50, 0, 1),    // density 5
        ];
        let mut selector = SelectionPolicy::PriorityFee.selector(&candidates);
        // Cap 60: big (50) fits, mid (40) would overflow and is skipped,
        // small (10) still fits.
        let draft = assemble_block(selector.as_mut(), 60, 60);
        assert_eq!(ids(&draft), vec!["0xbig", "0xsml"]);
        assert_eq!(draft.gas_used(), 60);
    }

    #[test]
    fn stops_once_soft_target_reached() {
        let candidates = vec![
            tx("0xa", 30, 300, 0, 1),
            tx("0xb", 30, 200, 0, 1),
            tx("0xc", 30, 100, 0, 1),
        ];
        let mut selector = SelectionPolicy::PriorityFee.selector(&candidates);
        // Target 50 is crossed after the second inclusion; 0xc is never taken.
        let draft = assemble_block(selector.as_mut(), 50, 200);
        assert_eq!(ids(&draft), vec!["0xa", "0xb"]);
    }

    #[test]
    fn empty_draft_when_nothing_fits() {
        let candidates = vec![tx("0xa", 100, 1, 0, 1), tx("0xb", 90, 1, 0, 1)];
        let mut selector = SelectionPolicy::ArrivalOrder.selector(&candidates);
        let draft = assemble_block(selector.as_mut(), 50, 50);
        assert!(draft.is_empty());
    }

    #[test]
    fn never_exceeds_hard_cap() {
        let candidates: Vec<PendingTx> = (0..100)
            .map(|i| tx(&format!("0x{i:02}"), 7 + (i % 13), (i * 3) as u128, 0, 1))
            .collect();
        for policy in [SelectionPolicy::PriorityFee, SelectionPolicy::ArrivalOrder] {
            let mut selector = policy.selector(&candidates);
            let draft = assemble_block(selector.as_mut(), 40, 55);
            assert!(draft.gas_used() <= 55);
            let sum: u64 = draft.txs().iter().map(|t| t.gas_limit).sum();
            assert_eq!(sum, draft.gas_used());
        }
    }

    #[test]
    fn arrival_policy_ignores_density() {
        let candidates = vec![
            tx("0xearly", 30, 1, 5, 10),
            tx("0xrich", 30, 9_999, 5, 11),
        ];
        let mut selector = SelectionPolicy::ArrivalOrder.selector(&candidates);
        let draft = assemble_block(selector.as_mut(), 30, 30);
        assert_eq!(ids(&draft), vec!["0xearly"]);
    }

    #[test]
    fn aggregates_track_included_txs() {
        let candidates = vec![tx("0xa", 10, 5, 100, 1), tx("0xb", 20, 4, 200, 1)];
        let mut selector = SelectionPolicy::ArrivalOrder.selector(&candidates);
        let draft = assemble_block(selector.as_mut(), 100, 100);
        assert_eq!(draft.gas_used(), 30);
        assert_eq!(draft.reward(), 300);
    }
}
