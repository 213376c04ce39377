//! Tracking session
//!
//! Owns the ledger and keeps the derived views in step with it: nudges and
//! trends are recomputed after every successful add or delete, while the
//! what-if projection only changes when explicitly requested.

use chrono::NaiveDate;

use crate::config::InsightConfig;
use crate::error::Result;
use crate::insights::{
    parse_extra_saving, AnalysisContext, InsightEngine, Insights, Nudge, TrendProjection,
    WhatIfProjection,
};
use crate::ledger::Ledger;
use crate::models::{LedgerSummary, NewTransaction, Transaction, TransactionId};

pub struct Session {
    ledger: Ledger,
    engine: InsightEngine,
    /// Fixed reference date; local today when unset
    reference_date: Option<NaiveDate>,
    insights: Insights,
    what_if: Option<WhatIfProjection>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(InsightEngine::new())
    }
}

impl Session {
    pub fn new(engine: InsightEngine) -> Self {
        let mut session = Self {
            ledger: Ledger::new(),
            engine,
            reference_date: None,
            insights: Insights::default(),
            what_if: None,
        };
        session.recompute();
        session
    }

    pub fn with_config(config: &InsightConfig) -> Self {
        Self::new(InsightEngine::with_config(config))
    }

    /// Pin the reference date instead of following the clock
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self.recompute();
        self
    }

    /// The date that defines the current month and new transaction dates
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Replace the ledger contents with previously recorded transactions
    pub fn load(&mut self, transactions: Vec<Transaction>) -> Result<()> {
        self.ledger = Ledger::from_transactions(transactions)?;
        tracing::info!(count = self.ledger.len(), "Loaded transactions");
        self.recompute();
        Ok(())
    }

    /// Record a transaction dated at the reference date
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<Transaction> {
        let today = self.today();
        let tx = self.ledger.add_transaction_on(new, today)?;
        self.recompute();
        Ok(tx)
    }

    /// Remove a transaction; unknown ids change nothing
    pub fn delete_transaction(&mut self, id: &TransactionId) -> Option<Transaction> {
        let removed = self.ledger.delete_transaction(id)?;
        self.recompute();
        Some(removed)
    }

    /// Run the what-if projector
    ///
    /// A rejected amount clears any projection from an earlier run.
    pub fn run_what_if(&mut self, extra_saving: f64) -> Result<&WhatIfProjection> {
        let today = self.today();
        let ctx = AnalysisContext::new(self.ledger.transactions(), today);
        match self.engine.what_if(&ctx, extra_saving) {
            Ok(projection) => Ok(&*self.what_if.insert(projection)),
            Err(e) => {
                self.what_if = None;
                tracing::warn!(error = %e, "Rejected what-if amount");
                Err(e)
            }
        }
    }

    /// Run the what-if projector on user-entered text
    pub fn run_what_if_text(&mut self, input: &str) -> Result<&WhatIfProjection> {
        match parse_extra_saving(input) {
            Ok(extra_saving) => self.run_what_if(extra_saving),
            Err(e) => {
                self.what_if = None;
                tracing::warn!(error = %e, "Rejected what-if amount");
                Err(e)
            }
        }
    }

    fn recompute(&mut self) {
        let ctx = AnalysisContext::new(self.ledger.transactions(), self.today());
        self.insights = self.engine.analyze(&ctx);
    }

    pub fn insights(&self) -> &Insights {
        &self.insights
    }

    pub fn nudges(&self) -> &[Nudge] {
        &self.insights.nudges
    }

    pub fn trends(&self) -> &TrendProjection {
        &self.insights.trends
    }

    /// Latest successful what-if projection, if any
    pub fn what_if(&self) -> Option<&WhatIfProjection> {
        self.what_if.as_ref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }
}
