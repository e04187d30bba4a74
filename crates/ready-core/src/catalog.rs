//! The static question catalog.
//!
//! Sections and items are compiled into the binary and never change at
//! runtime. Item ids are unique across the whole catalog, which is what lets
//! answers be keyed by item id alone.

use serde::Serialize;

/// One checklist question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    /// "Why it matters" rationale shown under the question.
    pub why: &'static str,
}

/// An ordered group of related items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Item],
}

impl Section {
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A closed, ordered list of sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    sections: &'static [Section],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// Build a catalog over an arbitrary static section list.
    #[must_use]
    pub const fn new(sections: &'static [Section]) -> Self {
        Self { sections }
    }

    /// The shipped AI-readiness marketing operations checklist.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(STANDARD_SECTIONS)
    }

    #[must_use]
    pub const fn sections(&self) -> &'static [Section] {
        self.sections
    }

    #[must_use]
    pub const fn section_count(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn section(&self, index: usize) -> Option<&'static Section> {
        self.sections.get(index)
    }

    /// Total number of items across all sections (also the maximum score).
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(Section::item_count).sum()
    }

    /// Look up an item and the section that owns it.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<(&'static Section, &'static Item)> {
        self.sections.iter().find_map(|section| {
            section
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| (section, item))
        })
    }

    #[must_use]
    pub fn contains_item(&self, id: &str) -> bool {
        self.find_item(id).is_some()
    }

    /// Iterate every item in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &'static Item> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }
}

static STANDARD_SECTIONS: &[Section] = &[
    Section {
        id: "s1",
        title: "Section 1 – Data Quality & Management",
        subtitle: "Foundation of AI Success",
        items: &[
            Item {
                id: "1.1",
                title: "1.1 Data Cleanliness & Consistency:",
                question: "Have we purged duplicates, corrected spelling, and enforced standard fields?",
                why: "Uniform, error-free data means every algorithm learns from the same reliable truth—boosting segmentation accuracy, report confidence, and campaign ROI.",
            },
            Item {
                id: "1.2",
                title: "1.2 Silo Elimination & Integration:",
                question: "Is customer data flowing freely between marketing, sales, and service?",
                why: "A single, synchronized data stream unlocks 360° insights, eliminates conflicting metrics, and feeds AI the full customer story.",
            },
            Item {
                id: "1.3",
                title: "1.3 Governance & Privacy Compliance:",
                question: "Do we follow GDPR/CCPA and document-retention rules?",
                why: "Strong governance avoids fines, protects reputation, and ensures the data you train AI on is ethically sourced and trustworthy.",
            },
            Item {
                id: "1.4",
                title: "1.4 AI-Ready Data Assessment:",
                question: "Is our data structured, labeled, and large enough for machine learning?",
                why: "Well-structured, well-labeled datasets let models train faster, reduce hallucinations, and deliver reliable, actionable insights.",
            },
        ],
    },
    Section {
        id: "s2",
        title: "Section 2 – MarTech Stack Optimization & Integration",
        subtitle: "Fueling AI’s Capabilities",
        items: &[
            Item {
                id: "2.1",
                title: "2.1 MarTech Stack Audit:",
                question: "Have we documented redundant or under-used tools?",
                why: "Cutting tool bloat reclaims budget, simplifies workflows, and clears technical debt that can stall any AI rollout.",
            },
            Item {
                id: "2.2",
                title: "2.2 Tool Integration & Data Flow:",
                question: "Are key systems natively integrated?",
                why: "Real-time integrations end manual CSV shuffles, reduce error rates, and keep AI models continuously fueled with fresh context.",
            },
            Item {
                id: "2.3",
                title: "2.3 Future-Proofing for AI Orchestration:",
                question: "Is our stack composable?",
                why: "A modular architecture lets you snap in new AI services without ripping out your core—extending stack lifespan and ROI.",
            },
        ],
    },
    Section {
        id: "s3",
        title: "Section 3 – Operational Processes & Workflows",
        subtitle: "Enabling AI Efficiency",
        items: &[
            Item {
                id: "3.1",
                title: "3.1 Process Mapping & Bottleneck ID:",
                question: "Have we visualized every hand-off?",
                why: "Seeing the entire workflow surfaces hidden delays that AI or automation can eliminate—speeding time-to-launch and cutting costs.",
            },
            Item {
                id: "3.2",
                title: "3.2 Automation Opportunity Assessment:",
                question: "Which repetitive tasks can AI own?",
                why: "Replacing copy-paste busywork with bots slashes errors and frees humans for high-value creative and strategic work.",
            },
            Item {
                id: "3.3",
                title: "3.3 Campaign Management & Optimization Overhaul:",
                question: "Are campaigns self-optimizing?",
                why: "Machine-learning bidding and creative rotation drive compounding ROI while your team sleeps.",
            },
        ],
    },
    Section {
        id: "s4",
        title: "Section 4 – Team Skills & Culture",
        subtitle: "Fostering Human-AI Collaboration",
        items: &[
            Item {
                id: "4.1",
                title: "4.1 AI Literacy & Skill Gap Analysis:",
                question: "Do we know what we don’t know?",
                why: "Teams fluent in AI concepts extract 3-5× more value from the same platform and spot ethical pitfalls early.",
            },
            Item {
                id: "4.2",
                title: "4.2 Human-in-the-Loop Strategy:",
                question: "Where is human oversight mandatory?",
                why: "Defined checkpoints preserve brand voice, ethics, and strategic judgment, preventing costly AI hallucinations.",
            },
            Item {
                id: "4.3",
                title: "4.3 Change Management & Trust Building:",
                question: "Do we have a rollout plan?",
                why: "Transparent pilots and quick wins convert skeptics, accelerate adoption, and cement an experimentation culture.",
            },
        ],
    },
    Section {
        id: "s5",
        title: "Section 5 – Strategic Alignment & Governance",
        subtitle: "Guiding Your AI Journey",
        items: &[
            Item {
                id: "5.1",
                title: "5.1 Comprehensive AI Roadmap:",
                question: "Do we have 12-24-month milestones?",
                why: "A clear roadmap aligns investments with revenue goals and stops shiny-object distractions.",
            },
            Item {
                id: "5.2",
                title: "5.2 Ethical AI Guidelines & Policies:",
                question: "Are bias and transparency addressed?",
                why: "Robust policies mitigate reputational risk and keep you ahead of tightening regulations.",
            },
            Item {
                id: "5.3",
                title: "5.3 Clear Goals & Measurable Targets:",
                question: "Are KPIs defined before launch?",
                why: "Pre-set success metrics let you prove ROI fast and iterate with confidence.",
            },
        ],
    },
];
