//! Tool catalog: categorised descriptors, name resolution, overviews.
//!
//! The catalog is built once and never mutated. Lookup normalises names by
//! lowercasing and scans categories in fixed order: external, default,
//! marketing, affiliate. Unknown names resolve to the default tool.

use super::availability::filter_available;
use super::builtin::{
    AffiliateProductResearch, AffiliateRevenueScaling, CampaignAnalysis, Code,
    CompetitorAffiliateAnalysis, ContentGeneration, ConversionOptimization, Image,
    MarketResearch, Search, Sid, WebDevelopment,
};
use super::{format_tool_name, ToolRef};
use crate::credentials::CredentialStore;
use crate::types::{AvailabilityConfig, Error, Result, User};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Categories
// =============================================================================

/// Catalog partition. Declaration order is lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    External,
    Default,
    Marketing,
    Affiliate,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::External,
        ToolCategory::Default,
        ToolCategory::Marketing,
        ToolCategory::Affiliate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::External => "external",
            ToolCategory::Default => "default",
            ToolCategory::Marketing => "marketing",
            ToolCategory::Affiliate => "affiliate",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ToolCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::validation(format!("unknown tool category: {}", s)))
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Serializable projection of a descriptor, for listing tools to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
    pub public_description: String,
    pub arg_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: ToolCategory,
}

impl ToolSummary {
    fn new(tool: &ToolRef, category: ToolCategory) -> Self {
        Self {
            name: tool.name(),
            description: tool.description().to_string(),
            public_description: tool.public_description().to_string(),
            arg_description: tool.arg_description().to_string(),
            image_url: tool.image_url().map(str::to_string),
            category,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable tool catalog.
///
/// Share it behind an `Arc` with whatever needs tool resolution.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    external: Vec<ToolRef>,
    default: Vec<ToolRef>,
    marketing: Vec<ToolRef>,
    affiliate: Vec<ToolRef>,
    /// First entry of `default`, captured at construction so the default
    /// category can never be observed empty.
    fallback: ToolRef,
    availability: AvailabilityConfig,
}

impl ToolCatalog {
    /// The production catalog.
    pub fn builtin() -> Self {
        let search: ToolRef = Arc::new(Search);
        Self {
            external: vec![Arc::new(Image), Arc::new(Code), Arc::new(Sid)],
            default: vec![search.clone()],
            marketing: vec![
                Arc::new(MarketResearch),
                Arc::new(ContentGeneration),
                Arc::new(WebDevelopment),
                Arc::new(CampaignAnalysis),
            ],
            affiliate: vec![
                Arc::new(AffiliateProductResearch),
                Arc::new(CompetitorAffiliateAnalysis),
                Arc::new(ConversionOptimization),
                Arc::new(AffiliateRevenueScaling),
            ],
            fallback: search,
            availability: AvailabilityConfig::default(),
        }
    }

    pub fn builder() -> ToolCatalogBuilder {
        ToolCatalogBuilder::default()
    }

    /// Replace the availability check settings.
    pub fn with_availability(mut self, availability: AvailabilityConfig) -> Self {
        self.availability = availability;
        self
    }

    pub fn availability(&self) -> &AvailabilityConfig {
        &self.availability
    }

    /// One category's descriptors, in declared order.
    pub fn tools_in(&self, category: ToolCategory) -> &[ToolRef] {
        match category {
            ToolCategory::External => &self.external,
            ToolCategory::Default => &self.default,
            ToolCategory::Marketing => &self.marketing,
            ToolCategory::Affiliate => &self.affiliate,
        }
    }

    fn iter_with_category(&self) -> impl Iterator<Item = (ToolCategory, &ToolRef)> + '_ {
        ToolCategory::ALL
            .into_iter()
            .flat_map(move |category| self.tools_in(category).iter().map(move |t| (category, t)))
    }

    /// Every descriptor in catalog order. Duplicates are kept.
    pub fn list_all_tools(&self) -> Vec<ToolRef> {
        self.iter_with_category().map(|(_, t)| t.clone()).collect()
    }

    /// Normalised names of `list_all_tools()`, same order and length.
    pub fn list_all_tool_names(&self) -> Vec<String> {
        self.iter_with_category().map(|(_, t)| t.name()).collect()
    }

    /// Serializable listing of every descriptor in catalog order.
    pub fn summaries(&self) -> Vec<ToolSummary> {
        self.iter_with_category()
            .map(|(category, t)| ToolSummary::new(t, category))
            .collect()
    }

    /// Strict case-insensitive lookup. First match in catalog order wins.
    pub fn find_by_name(&self, name: &str) -> Option<ToolRef> {
        let wanted = format_tool_name(name);
        self.iter_with_category()
            .find(|(_, t)| t.name() == wanted)
            .map(|(_, t)| t.clone())
    }

    /// Case-insensitive lookup that falls back to the default tool.
    pub fn resolve_by_name(&self, name: &str) -> ToolRef {
        self.find_by_name(name).unwrap_or_else(|| {
            tracing::debug!(
                "Unknown tool name '{}', falling back to {}",
                name,
                self.default_tool_name()
            );
            self.default_tool()
        })
    }

    /// The fallback descriptor: first entry of the default category.
    pub fn default_tool(&self) -> ToolRef {
        self.fallback.clone()
    }

    pub fn default_tool_name(&self) -> String {
        self.fallback.name()
    }

    /// Tools a user may be offered for the requested names.
    ///
    /// Each name is resolved (unknown → default), the default category is
    /// appended, and the result is filtered by each descriptor's
    /// availability check. Order is preserved; duplicates are kept. The first
    /// failing check aborts the call with its error.
    pub async fn list_user_tools<S>(
        &self,
        names: &[S],
        user: &User,
        store: &dyn CredentialStore,
    ) -> Result<Vec<ToolRef>>
    where
        S: AsRef<str>,
    {
        let candidates: Vec<ToolRef> = names
            .iter()
            .map(|name| self.resolve_by_name(name.as_ref()))
            .chain(self.default.iter().cloned())
            .collect();

        tracing::debug!(
            "Listing tools for user={} requested={} candidates={} store={}",
            user.id,
            names.len(),
            candidates.len(),
            store.name()
        );

        filter_available(
            candidates,
            user,
            store,
            self.availability.max_concurrent_checks,
        )
        .await
    }

    /// Number of catalog entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.external.len() + self.default.len() + self.marketing.len() + self.affiliate.len()
    }

    pub fn is_empty(&self) -> bool {
        // The default category is never empty.
        false
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Assembles a custom catalog. `build` rejects an empty default category.
#[derive(Debug, Default)]
pub struct ToolCatalogBuilder {
    external: Vec<ToolRef>,
    default: Vec<ToolRef>,
    marketing: Vec<ToolRef>,
    affiliate: Vec<ToolRef>,
    availability: AvailabilityConfig,
}

impl ToolCatalogBuilder {
    /// Append a tool to a category.
    pub fn tool(mut self, category: ToolCategory, tool: ToolRef) -> Self {
        match category {
            ToolCategory::External => self.external.push(tool),
            ToolCategory::Default => self.default.push(tool),
            ToolCategory::Marketing => self.marketing.push(tool),
            ToolCategory::Affiliate => self.affiliate.push(tool),
        }
        self
    }

    pub fn availability(mut self, availability: AvailabilityConfig) -> Self {
        self.availability = availability;
        self
    }

    pub fn build(self) -> Result<ToolCatalog> {
        let fallback = self.default.first().cloned().ok_or_else(|| {
            Error::validation("Tool catalog requires at least one default tool")
        })?;
        if self.availability.max_concurrent_checks == 0 {
            return Err(Error::validation(
                "max_concurrent_checks must be at least 1",
            ));
        }
        Ok(ToolCatalog {
            external: self.external,
            default: self.default,
            marketing: self.marketing,
            affiliate: self.affiliate,
            fallback,
            availability: self.availability,
        })
    }
}

// =============================================================================
// Overview
// =============================================================================

/// Render `'<name>': <description>` lines for prompt construction.
///
/// Identical lines collapse to their first occurrence; survivors keep
/// first-seen order. An empty slice renders as the empty string.
pub fn render_overview(tools: &[ToolRef]) -> String {
    let mut seen = HashSet::with_capacity(tools.len());
    let mut lines = Vec::with_capacity(tools.len());
    for tool in tools {
        let line = format!("'{}': {}", tool.name(), tool.description());
        if seen.insert(line.clone()) {
            lines.push(line);
        }
    }
    lines.join("\n")
}

// =============================================================================
// Tests
// =============================================================================
