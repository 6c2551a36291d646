//! Page models
//!
//! A report is one overview page followed by one page per category. Pages
//! are identified by [`PageId`], which is also the key the navigation bar
//! uses to mark the current page, so a page and its navigation entry can
//! never disagree.

use serde::Serialize;

use crate::aggregate::{aggregate, CategoryAggregate};
use crate::coerce::truncate_pct;
use crate::partition::{CategoryBucket, Partition};
use crate::{Category, Record};

// ============================================================================
// Page identity
// ============================================================================

/// Identity of one output page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Overview,
    Category(Category),
}

impl PageId {
    /// All pages in navigation order
    pub const ALL: [PageId; 6] = [
        PageId::Overview,
        PageId::Category(Category::WaterQuality),
        PageId::Category(Category::LakeEutrophication),
        PageId::Category(Category::InvasiveSpecies),
        PageId::Category(Category::WildlifeHabitat),
        PageId::Category(Category::Wetlands),
    ];

    /// Stable slug (`index`, `orientation-1` .. `orientation-5`)
    pub const fn slug(self) -> &'static str {
        match self {
            PageId::Overview => "index",
            PageId::Category(Category::WaterQuality) => "orientation-1",
            PageId::Category(Category::LakeEutrophication) => "orientation-2",
            PageId::Category(Category::InvasiveSpecies) => "orientation-3",
            PageId::Category(Category::WildlifeHabitat) => "orientation-4",
            PageId::Category(Category::Wetlands) => "orientation-5",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.html", self.slug())
    }

    /// Label of the navigation entry
    pub const fn nav_label(self) -> &'static str {
        match self {
            PageId::Overview => "Introduction",
            PageId::Category(category) => category.nav_label(),
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

// ============================================================================
// Overview
// ============================================================================

/// Inline piece of static overview text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Span {
    Text(&'static str),
    Strong(&'static str),
    Link { text: &'static str, href: &'static str },
}

/// Static content of the introduction page
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OverviewPage {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static [Span]],
    pub mission_title: &'static str,
    pub mission_statement: &'static str,
}

const WELCOME: &[Span] = &[
    Span::Text("Bienvenue sur l'outil de suivi des objectifs du PDE 2024-2034 de l'"),
    Span::Strong("Organisme de bassin versant du fleuve Saint-Jean"),
    Span::Text(". Ce tableau de bord présente l'état d'avancement des "),
    Span::Strong("47 objectifs"),
    Span::Text(" du PDE à travers les "),
    Span::Strong("5 orientations"),
    Span::Text(
        " qui ont été définies en concertation avec les acteurs de l'eau de la zone de gestion \
         intégrée de l'eau du bassin versant du fleuve Saint-Jean.",
    ),
];

const TERRITORY: &[Span] = &[
    Span::Text(
        "Pour de plus amples informations sur le territoire couvert par notre action collective, \
         consultez la page suivante : ",
    ),
    Span::Link {
        text: "obvfleuvestjean.com/un-bassin-versant-transfrontalier/",
        href: "https://obvfleuvestjean.com/un-bassin-versant-transfrontalier/",
    },
    Span::Text("."),
];

impl Default for OverviewPage {
    fn default() -> Self {
        Self {
            heading: "Démarche de suivi du Plan directeur de l'eau (PDE)",
            paragraphs: &[WELCOME, TERRITORY],
            mission_title: "Mission de l'OBVFSJ",
            mission_statement: "« Dans le bassin versant du fleuve Saint-Jean, le maintien \
                d'écosystèmes intègres, source d'une excellente qualité d'eau, constitue la \
                base d'un héritage bâti sur de saines relations transfrontalières »",
        }
    }
}

// ============================================================================
// Category pages
// ============================================================================

/// A record prepared for display
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemView {
    pub record: Record,
    /// Achievement truncated toward zero, also the progress bar width
    pub display_pct: i64,
}

impl ItemView {
    pub fn new(record: Record) -> Self {
        let display_pct = truncate_pct(record.achievement_pct);
        Self {
            record,
            display_pct,
        }
    }
}

/// Content of one category page
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub aggregate: CategoryAggregate,
    pub items: Vec<ItemView>,
}

impl CategoryPage {
    pub fn from_bucket(bucket: &CategoryBucket) -> Self {
        Self {
            category: bucket.category,
            aggregate: aggregate(bucket),
            items: bucket.records.iter().cloned().map(ItemView::new).collect(),
        }
    }

    pub fn id(&self) -> PageId {
        PageId::Category(self.category)
    }

    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }

    /// Full orientation title as written in the workbook
    pub fn title(&self) -> &'static str {
        self.category.source_label()
    }
}

// ============================================================================
// Page model
// ============================================================================

/// Content model of one output page
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageModel {
    Overview(OverviewPage),
    Category(CategoryPage),
}

impl PageModel {
    /// The page identity, derived from the variant itself
    pub fn id(&self) -> PageId {
        match self {
            PageModel::Overview(_) => PageId::Overview,
            PageModel::Category(page) => page.id(),
        }
    }

    pub fn as_category(&self) -> Option<&CategoryPage> {
        match self {
            PageModel::Category(page) => Some(page),
            PageModel::Overview(_) => None,
        }
    }
}

/// Build the overview page followed by one page per bucket.
///
/// Buckets are expected in [`Category::ALL`] order, which
/// [`partition`](crate::partition::partition) guarantees.
pub fn build_pages(partition: &Partition) -> Vec<PageModel> {
    std::iter::once(PageModel::Overview(OverviewPage::default()))
        .chain(
            partition
                .buckets
                .iter()
                .map(|bucket| PageModel::Category(CategoryPage::from_bucket(bucket))),
        )
        .collect()
}
