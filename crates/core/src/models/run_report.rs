use crate::prelude::*;

/// Receipts of every transaction sent during a run, in send order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Getters)]
pub struct RunReport {
    #[getset(get = "pub")]
    receipts: Vec<Receipt>,
}

impl RunReport {
    pub(crate) fn push(&mut self, receipt: Receipt) {
        self.receipts.push(receipt);
    }
}
