//! Built-in tool descriptors.
//!
//! Most tools are always available and differ only in metadata, so they are
//! generated by `define_tool!`. `Sid` needs an OAuth grant and is written
//! out by hand.

use super::Tool;
use crate::credentials::{CredentialStore, OAuthProvider};
use crate::types::{Result, User};
use async_trait::async_trait;

/// Macro to define an always-available tool descriptor.
///
/// Generates a unit struct and its `Tool` impl. `arg` and `image` are
/// optional; omitted fields fall back to the trait defaults.
macro_rules! define_tool {
    (
        $(#[$meta:meta])*
        $name:ident {
            description: $description:expr,
            public_description: $public:expr
            $(, arg: $arg:expr)?
            $(, image: $image:expr)?
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        #[async_trait]
        impl Tool for $name {
            fn display_name(&self) -> &str {
                stringify!($name)
            }

            fn description(&self) -> &str {
                $description
            }

            fn public_description(&self) -> &str {
                $public
            }

            $(
                fn arg_description(&self) -> &str {
                    $arg
                }
            )?

            $(
                fn image_url(&self) -> Option<&str> {
                    Some($image)
                }
            )?
        }
    };
}

// =============================================================================
// External
// =============================================================================

define_tool!(
    /// Image generation.
    Image {
        description: "Used to sketch, draw, or generate an image.",
        public_description: "Generate AI images.",
        arg: "The input prompt to the image generator. This should be a detailed \
              description of the image touching on image style, image focus, color, etc.",
        image: "/tools/replicate.png",
    }
);

define_tool!(
    Code {
        description: "Should only be used to write code, refactor code, fix code bugs, \
                      and explain programming concepts.",
        public_description: "Write and review code.",
        arg: "The description of the code to write, or the code to review.",
        image: "/tools/openai-white.png",
    }
);

/// Personal data search over the user's connected Notion, email and Google
/// Drive. Offered only to users holding a `sid` installation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sid;

#[async_trait]
impl Tool for Sid {
    fn display_name(&self) -> &str {
        "SID"
    }

    fn description(&self) -> &str {
        "Find private information by searching through notion, email and google drive. \
         Should be used when questions refer to personal information."
    }

    fn public_description(&self) -> &str {
        "Grant access to your Notion, Google Drive, etc."
    }

    fn arg_description(&self) -> &str {
        "The query to search the user's connected sources for."
    }

    fn image_url(&self) -> Option<&str> {
        Some("/tools/sid.png")
    }

    async fn dynamic_available(&self, user: &User, store: &dyn CredentialStore) -> Result<bool> {
        store.has_installation(&user.id, OAuthProvider::Sid).await
    }
}

// =============================================================================
// Default
// =============================================================================

define_tool!(
    /// Web search. The registry's fallback tool.
    Search {
        description: "Search Google for short up to date searches for simple questions \
                      about public information news and people.",
        public_description: "Search google for information about current events.",
        arg: "The query argument to search for. This value is always populated and \
              cannot be an empty string.",
        image: "/tools/google.png",
    }
);

// =============================================================================
// Marketing
// =============================================================================

define_tool!(
    MarketResearch {
        description: "Research a market: size, trends, target audience and competitors \
                      for a product or niche.",
        public_description: "Analyze markets, audiences and competitors.",
        arg: "The product, niche or market to research.",
    }
);

define_tool!(
    ContentGeneration {
        description: "Write marketing content such as blog posts, ad copy, emails and \
                      social media posts.",
        public_description: "Generate marketing copy and content.",
        arg: "The topic, audience and format of the content to write.",
    }
);

define_tool!(
    WebDevelopment {
        description: "Plan and write landing pages and simple websites, including \
                      structure, copy and HTML/CSS.",
        public_description: "Build landing pages and websites.",
    }
);

define_tool!(
    CampaignAnalysis {
        description: "Analyze a marketing campaign's performance and suggest \
                      improvements to targeting, budget and creatives.",
        public_description: "Review and improve marketing campaigns.",
        arg: "The campaign details and metrics to analyze.",
    }
);

// =============================================================================
// Affiliate
// =============================================================================

define_tool!(
    AffiliateProductResearch {
        description: "Find affiliate products and programs worth promoting in a niche, \
                      comparing commissions, cookie duration and demand.",
        public_description: "Discover profitable affiliate products.",
        arg: "The niche or audience to find affiliate products for.",
    }
);

define_tool!(
    CompetitorAffiliateAnalysis {
        description: "Analyze competing affiliate sites: the products they promote, \
                      their traffic sources and content strategy.",
        public_description: "Study competing affiliate marketers.",
        arg: "The competitor site or niche to analyze.",
    }
);

define_tool!(
    ConversionOptimization {
        description: "Suggest changes to pages, funnels and calls to action that raise \
                      affiliate conversion rates.",
        public_description: "Improve affiliate conversion rates.",
    }
);

define_tool!(
    AffiliateRevenueScaling {
        description: "Plan how to scale affiliate revenue through new channels, \
                      content volume and higher-paying programs.",
        public_description: "Grow affiliate revenue.",
    }
);
