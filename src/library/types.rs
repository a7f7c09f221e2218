use serde::{Deserialize, Serialize};

/// Top-level Korean Decimal Classification classes the chart can be filtered by.
///
/// The declaration order matters: each variant's discriminant is the `classNo`
/// value the catalog expects, so `Category::Literature as u8` is `7`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    GeneralWorks,
    Philosophy,
    SocialScience,
    Language,
    NaturalScience,
    AppliedScience,
    Arts,
    Literature,
    History,
    Other,
}

impl Category {
    /// Every category in classification order. The index equals `class_no`.
    pub const ALL: [Category; 10] = [
        Category::GeneralWorks,
        Category::Philosophy,
        Category::SocialScience,
        Category::Language,
        Category::NaturalScience,
        Category::AppliedScience,
        Category::Arts,
        Category::Literature,
        Category::History,
        Category::Other,
    ];

    /// The `classNo` query value for this category.
    pub fn class_no(self) -> u8 {
        self as u8
    }

    /// Looks up a category by its `classNo` value.
    pub fn from_class_no(n: u8) -> Option<Category> {
        Self::ALL.get(n as usize).copied()
    }

    /// Korean display name, as shown in the category bar.
    pub fn label(self) -> &'static str {
        match self {
            Category::GeneralWorks => "총류",
            Category::Philosophy => "철학",
            Category::SocialScience => "사회과학",
            Category::Language => "어학",
            Category::NaturalScience => "자연과학",
            Category::AppliedScience => "응용과학",
            Category::Arts => "예술",
            Category::Literature => "문학",
            Category::History => "역사",
            Category::Other => "기타",
        }
    }

    /// Cycles to the next category (wraps around).
    pub fn next(self) -> Category {
        let i = self as usize;
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Cycles to the previous category (wraps around).
    pub fn prev(self) -> Category {
        let i = self as usize;
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One charted title, decoded from the subset of catalog fields the screen uses.
/// The API sends many more keys per record; serde drops the rest.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u64,
    pub title_statement: String,
    pub author: String,
    pub publisher: String,
    pub thumbnail_url: String,
}

/// The `data` payload of a chart lookup: the page of books plus the
/// catalog-side total (which can exceed the page length).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookListPage {
    pub total_count: u32,
    pub list: Vec<Book>,
}

/// Pyxis wraps every payload in the same status envelope.
///
/// `success`, `code` and `message` are catalog-side bookkeeping; callers act
/// on `data` and only log the rest.
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    pub data: T,
}

/// Acquisition-date window (`YYYYMM`, inclusive) the chart is computed over.
///
/// Kept as an opaque pair of strings: the catalog treats them as query text,
/// so there is nothing to gain from parsing them as dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchWindow {
    pub from: String,
    pub to: String,
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self {
            from: String::from("202302"),
            to: String::from("202304"),
        }
    }
}
