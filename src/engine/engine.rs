// src/engine/engine.rs
use tracing::{debug, info, info_span, warn};
use url::Url;

use crate::config::deployment::{ConfigError, Deployment};
use crate::core::dom::{DomNode, Page};
use crate::engine::classify::{classify, ClassifyPolicy};
use crate::engine::error::EngineError;
use crate::engine::extract::{Extractor, ListRules};
use crate::engine::normalize::normalize;
use crate::engine::pattern::{DatePattern, TokenPattern};
use crate::engine::types::*;

/// Result of one run over one page snapshot.
#[derive(Clone, Debug)]
pub struct Extraction {
    pub dataset: NormalizedDataset,
    pub report: RunReport,
}

/// A validated deployment with its patterns compiled, ready to run over pages.
/// Holds no per-run state; one pipeline can serve any number of snapshots.
#[derive(Clone, Debug)]
pub struct Pipeline {
    deployment: Deployment,
    extractor: Extractor,
}

impl Pipeline {
    pub fn new(deployment: Deployment) -> Result<Self, ConfigError> {
        deployment.validate()?;

        let list = match (&deployment.pattern, deployment.uses(ExtractMode::Pattern)) {
            (Some(p), true) => Some(ListRules {
                token: p.token_regex.as_deref().map(TokenPattern::compile).transpose()?,
                date: DatePattern::compile(&p.date_format)?,
                // validate() has already checked it parses
                base_url: deployment.url.as_deref().and_then(|u| Url::parse(u).ok()),
            }),
            _ => None,
        };

        Ok(Self { deployment, extractor: Extractor::new(list) })
    }

    /// Resolve entry-list links against `base` instead of the deployment URL.
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.extractor.set_base_url(base);
        self
    }

    pub fn deployment(&self) -> &Deployment { &self.deployment }

    fn policy(&self) -> ClassifyPolicy<'_> {
        let d = &self.deployment;
        ClassifyPolicy {
            key_value: d.uses(ExtractMode::KeyValue).then_some(&d.key_value),
            tables: d.uses(ExtractMode::Tabular).then_some(&d.tabular),
            entry_list: if d.uses(ExtractMode::Pattern) { d.pattern.as_ref() } else { None },
        }
    }

    /// Classify and extract; rows come back in region-then-row order.
    pub fn collect_rows<N: DomNode>(&self, root: &N) -> (Vec<ExtractedRow>, RunReport) {
        let regions = classify(root, &self.policy());
        debug!(regions = regions.len(), "page classified");

        let mut rows = Vec::new();
        let mut report = RunReport::default();
        for region in &regions {
            let RegionRows { rows: region_rows, gaps } = self.extractor.extract(region);
            info!(
                label = %region.provenance_label,
                kind = %region.kind,
                rows = region_rows.len(),
                skipped = gaps.len(),
                "region extracted"
            );
            report.regions.push(RegionSummary {
                provenance_label: region.provenance_label.clone(),
                kind: region.kind,
                rows: region_rows.len(),
                skipped: gaps.len(),
            });
            rows.extend(region_rows);
        }
        (rows, report)
    }

    pub fn run<N: DomNode>(&self, root: &N) -> Result<Extraction, EngineError> {
        let _span = info_span!("run", deployment = %self.deployment.name).entered();

        let (rows, report) = self.collect_rows(root);
        if rows.is_empty() {
            warn!(regions = report.regions.len(), "no rows survived extraction");
        }
        let dataset = normalize(&rows, &self.deployment.columns)?;
        info!(rows = dataset.len(), width = dataset.width(), "dataset normalized");
        Ok(Extraction { dataset, report })
    }

    /// Parse `html` into a snapshot and run over it.
    pub fn run_html(&self, html: &str) -> Result<Extraction, EngineError> {
        let page = Page::parse(html);
        self.run(&page.root())
    }
}
