//! Content pools: the fixed lexical material every post is sampled from.
//!
//! Each pool holds the candidates for one semantic role (title template,
//! intro sentence, highlight bullet, …). The stock pools are static literal
//! tables; [`ContentPools::default`] copies them into owned vectors once at
//! startup so that `postgen.toml` can replace any role wholesale:
//!
//! ```toml
//! [pools]
//! topics = ["Ranked Queue Health", "Scrim Scheduling"]
//!
//! [[pools.internal_links]]
//! phrase = "ranked queue"
//! target = "/tags/ranked/"
//! ```
//!
//! Roles that are not mentioned keep their stock contents.
//!
//! ## Placeholders
//!
//! | Pool | Placeholder | Replaced with |
//! |------|-------------|---------------|
//! | `title_templates` | `{year}` | current year |
//! | `title_templates` | `{topic}` | one entry of `topics` |
//! | sentence pools (`intro`, `highlights`, …) | `{year}` | current year |
//! | `images` | `{rand}` | random 5-digit number |

use serde::{Deserialize, Serialize};

pub const TITLE_TEMPLATES: &[&str] = &[
    "AI Agents Changing Competitive Esports in {year}",
    "Real-time Strategy with Reinforcement Learning ({year} Playbook)",
    "Web3 Guild Management: {topic} On-chain ({year})",
    "From VOD to Live Inference: {topic} That Moves the Needle",
    "Latency, Risk & Execution: AI Pipelines for Pro Gamers",
    "NFT Utility in Competitive Ladders: Beyond Cosmetics",
    "Matchmaking 2.0: Skill Curves & MMR with ML ({year})",
    "HubGaming Meta: {topic} ({year})",
    "What {year} Taught Us About {topic}",
    "{topic}: A Field Guide for Competitive Teams",
];

pub const TOPICS: &[&str] = &[
    "Predictive Aim Analytics",
    "Dynamic Economy Balancing",
    "Behavioral Anti-cheat Signals",
    "Market-making for In-game Assets",
    "Adaptive Coaching and Highlights",
    "Squad Role Optimization",
    "MMR Quality and Skill Modeling",
    "Tilt Detection and Recovery",
    "Scrim Automation",
    "Draft Pick Forecasting",
];

pub const INTRO: &[&str] = &[
    "In today’s fast meta, milliseconds decide victories.",
    "Esports analytics matured fast, moving from VOD review to live inference at the edge.",
    "Here’s what matters for competitive teams in {year}.",
    "Teams that treat operations like products ship faster meta reactions and win more maps.",
    "Reinforcement learning has quietly moved from research labs into practice queues.",
    "Coaches now expect data on every round, not just every match.",
    "Matchmaking quality shapes the player experience more than any single patch.",
    "The gap between tier-one and tier-two rosters is increasingly an infrastructure gap.",
    "Anti-cheat is no longer a lone kernel driver but a stack of behavioral signals.",
    "On-chain coordination gives guilds new ways to share rewards and risk.",
    "Every scrim is now a dataset waiting to be labeled.",
    "Let’s unpack the stack that separates contenders from the rest.",
];

pub const HIGHLIGHTS: &[&str] = &[
    "**Edge inference**: capture, featurize, detect risk and act inside one stateless service.",
    "**Reinforcement loops**: practice queues become simulation labs where policies improve on real scrims.",
    "**Ops as code**: version strategies, A/B test them during scrims, and revert safely.",
    "**MMR quality**: robust Bayesian skill curves resist smurf abuse better than raw Elo.",
    "**Anti-cheat**: behavior modeling plus hardware fingerprints lower false positives.",
    "**Aim entropy** models find inconsistency bursts and surface real coaching moments.",
    "**Tactical heatmaps** built from POV embeddings help IGLs call faster.",
    "**Risk engines** manage tilt with loss limits for economy rounds and cool-downs after bad streaks.",
    "**Guild treasuries** settle rewards and loans on-chain with slippage-tolerant markets.",
];

pub const CASE_STUDY: &[&str] = &[
    "A mid-table roster rebuilt its review process around automated round tagging.",
    "Instead of watching full VODs, analysts queried clips by economy state and utility usage.",
    "Within six weeks the team cut review time in half.",
    "Their esports analytics pipeline flagged a recurring retake pattern that opponents exploited.",
    "The coaching staff paired those clips with reinforcement learning drills in custom lobbies.",
    "Data from ranked matchmaking confirmed the fix held up against unfamiliar opponents.",
    "Telemetry from the anti-cheat client was reused to spot input-timing anomalies that signalled fatigue.",
    "By the playoffs the squad converted more than seventy percent of its retakes.",
    "None of this required a bigger budget, only better plumbing.",
];

pub const STRATEGY: &[&str] = &[
    "Instrument scrims first; ranked data is noisier and arrives later.",
    "Keep feature pipelines stateless so a bad patch day never corrupts history.",
    "Model roles, not players, so insights survive roster changes.",
    "Treat MMR as a distribution with uncertainty, not a single number.",
    "Close the loop: every insight should map to a drill or a rule change.",
    "Budget latency end to end, from capture to the coach’s screen.",
    "Separate detection from enforcement to keep anti-cheat appeals fair.",
    "Settle guild rewards on a fixed cadence to avoid governance fatigue.",
];

pub const TIPS: &[&str] = &[
    "Tag every round with economy state before anything else.",
    "Review three clips per player per day instead of one full VOD per week.",
    "Set a tilt threshold and enforce a cool-down when it trips.",
    "Rotate one experimental strategy into each scrim block.",
    "Keep a changelog of strategy versions alongside patch notes.",
    "Share heatmaps with players before the review session, not during it.",
    "Measure decision latency, not just reaction time.",
    "Archive raw demos; today’s model will want tomorrow’s features.",
];

pub const CLOSING: &[&str] = &[
    "Teams that productize operations will dominate.",
    "AI won’t replace pros; the pros using AI will replace others.",
    "The next season belongs to squads that automate the boring and amplify the skill.",
    "Build the plumbing now and the wins will follow.",
    "The meta moves fast, so make sure your data moves faster.",
];

pub const IMAGES: &[&str] = &[
    "https://images.pexels.com/photos/907221/pexels-photo-907221.jpeg?auto=compress&cs=tinysrgb&w=1200&h=630&fit=crop",
    "https://images.pexels.com/photos/3945662/pexels-photo-3945662.jpeg?auto=compress&cs=tinysrgb&w=1200&h=630&fit=crop",
    "https://source.unsplash.com/1200x630/?esports,gaming",
    "https://picsum.photos/1200/630?random={rand}",
];

pub const DOMAINS: &[&str] = &[
    "bottradingai.com",
    "botgame.io",
    "metaversebot.io",
    "nftgameai.com",
    "hubgaming.io",
    "botdefi.io",
    "esportsai.io",
    "nftgamepro.com",
    "botesports.com",
    "aiesports.io",
    "pronftgame.com",
    "botplay.io",
    "botweb3ai.com",
    "botblockchain.io",
];

pub const TAGS: &[&str] = &[
    "ai",
    "esports",
    "machine-learning",
    "anti-cheat",
    "matchmaking",
    "web3",
    "nft",
    "coaching",
    "analytics",
    "strategy",
];

pub const CATEGORIES: &[&str] = &["Esports", "AI", "Web3", "Strategy", "Analytics"];

pub const KEYWORDS: &[&str] = &[
    "esports ai",
    "competitive gaming analytics",
    "reinforcement learning games",
    "mmr skill rating",
    "anti-cheat machine learning",
    "web3 guilds",
    "nft gaming utility",
    "pro gamer coaching",
    "edge inference",
    "game strategy automation",
];

/// Phrase → same-site target pairs used to interlink body paragraphs.
pub const INTERNAL_LINKS: &[(&str, &str)] = &[
    ("esports analytics", "/category/analytics/"),
    ("reinforcement learning", "/tags/machine-learning/"),
    ("Reinforcement learning", "/tags/machine-learning/"),
    ("Matchmaking", "/tags/matchmaking/"),
    ("matchmaking", "/tags/matchmaking/"),
    ("Anti-cheat", "/tags/anti-cheat/"),
    ("anti-cheat", "/tags/anti-cheat/"),
    ("On-chain coordination", "/tags/web3/"),
];

/// A phrase that, when found in an interlinked paragraph, becomes a link to
/// `target` on the same site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InternalLink {
    pub phrase: String,
    pub target: String,
}

/// Every candidate string a post can be assembled from, grouped by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentPools {
    pub title_templates: Vec<String>,
    pub topics: Vec<String>,
    pub intro: Vec<String>,
    pub highlights: Vec<String>,
    pub case_study: Vec<String>,
    pub strategy: Vec<String>,
    pub tips: Vec<String>,
    pub closing: Vec<String>,
    pub images: Vec<String>,
    pub domains: Vec<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub internal_links: Vec<InternalLink>,
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

impl Default for ContentPools {
    fn default() -> Self {
        Self {
            title_templates: owned(TITLE_TEMPLATES),
            topics: owned(TOPICS),
            intro: owned(INTRO),
            highlights: owned(HIGHLIGHTS),
            case_study: owned(CASE_STUDY),
            strategy: owned(STRATEGY),
            tips: owned(TIPS),
            closing: owned(CLOSING),
            images: owned(IMAGES),
            domains: owned(DOMAINS),
            tags: owned(TAGS),
            categories: owned(CATEGORIES),
            keywords: owned(KEYWORDS),
            internal_links: INTERNAL_LINKS
                .iter()
                .map(|(phrase, target)| InternalLink {
                    phrase: phrase.to_string(),
                    target: target.to_string(),
                })
                .collect(),
        }
    }
}

impl ContentPools {
    /// `(role, pool)` pairs for every plain string pool, in declaration order.
    pub fn roles(&self) -> [(&'static str, &[String]); 13] {
        [
            ("title_templates", self.title_templates.as_slice()),
            ("topics", self.topics.as_slice()),
            ("intro", self.intro.as_slice()),
            ("highlights", self.highlights.as_slice()),
            ("case_study", self.case_study.as_slice()),
            ("strategy", self.strategy.as_slice()),
            ("tips", self.tips.as_slice()),
            ("closing", self.closing.as_slice()),
            ("images", self.images.as_slice()),
            ("domains", self.domains.as_slice()),
            ("tags", self.tags.as_slice()),
            ("categories", self.categories.as_slice()),
            ("keywords", self.keywords.as_slice()),
        ]
    }
}
