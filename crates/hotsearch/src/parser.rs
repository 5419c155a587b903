use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::types::HotSearchItem;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// CSS signatures of the realtime board markup.
///
/// The class names carry build hashes (`_iQLoo`, `_1Ew5p`, ...) and change
/// whenever the page is redeployed, so they are kept apart from the
/// extraction code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSelectors {
    pub card: String,
    pub rank: String,
    pub title: String,
    pub summary: String,
    pub hot_score: String,
    pub detail_link: String,
}

impl Default for BoardSelectors {
    fn default() -> Self {
        Self {
            card: "div.category-wrap_iQLoo".to_string(),
            rank: "div.index_1Ew5p".to_string(),
            title: "div.c-single-text-ellipsis".to_string(),
            summary: "div.hot-desc_1m_jR".to_string(),
            hot_score: "div.hot-index_1Bl1a".to_string(),
            detail_link: "a.c-single-text-ellipsis".to_string(),
        }
    }
}

/// Compiled form of [`BoardSelectors`].
#[derive(Debug, Clone)]
pub struct BoardLayout {
    card: Selector,
    rank: Selector,
    title: Selector,
    summary: Selector,
    hot_score: Selector,
    detail_link: Selector,
}

static DEFAULT_LAYOUT: LazyLock<BoardLayout> = LazyLock::new(|| {
    BoardLayout::compile(&BoardSelectors::default()).expect("invalid default board selectors")
});

fn compile_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl BoardLayout {
    pub fn compile(selectors: &BoardSelectors) -> Result<Self, ParseError> {
        Ok(Self {
            card: compile_selector(&selectors.card)?,
            rank: compile_selector(&selectors.rank)?,
            title: compile_selector(&selectors.title)?,
            summary: compile_selector(&selectors.summary)?,
            hot_score: compile_selector(&selectors.hot_score)?,
            detail_link: compile_selector(&selectors.detail_link)?,
        })
    }

    /// Locates every card block, in document order.
    pub fn cards<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        document.select(&self.card)
    }

    /// Extracts a single card. `None` means the card has no usable rank.
    pub fn parse_card(&self, card: ElementRef) -> Option<HotSearchItem> {
        let rank = first_text(card, &self.rank).and_then(|text| parse_rank(&text))?;

        let detail_url = card
            .select(&self.detail_link)
            .next()
            .and_then(|e| e.value().attr("href"))
            .map(|href| href.trim().to_string())
            .unwrap_or_default();

        Some(HotSearchItem {
            rank,
            title: first_text(card, &self.title).unwrap_or_default(),
            summary: first_text(card, &self.summary).unwrap_or_default(),
            hot_score: first_text(card, &self.hot_score).unwrap_or_default(),
            detail_url,
        })
    }
}

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|e| elem_text(e).trim().to_string())
}

fn parse_rank(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Parses the board with the default selectors.
pub fn parse_hot_search(html: &str) -> Vec<HotSearchItem> {
    parse_hot_search_with(html, &DEFAULT_LAYOUT)
}

/// Parses the board with a custom layout. Cards without a rank are dropped,
/// and the result is ordered by rank rather than by position in the markup.
pub fn parse_hot_search_with(html: &str, layout: &BoardLayout) -> Vec<HotSearchItem> {
    let document = Html::parse_document(html);

    let mut items = Vec::new();
    let mut skipped = 0usize;

    for (i, card) in layout.cards(&document).enumerate() {
        match layout.parse_card(card) {
            Some(item) => items.push(item),
            None => {
                skipped += 1;
                log::debug!("Skipping card {} without a valid rank", i + 1);
            }
        }
    }

    if skipped > 0 {
        log::warn!(
            "Dropped {} of {} card(s) without a valid rank",
            skipped,
            items.len() + skipped
        );
    }

    // sort_by_key is stable, ties keep document order
    items.sort_by_key(|item| item.rank);
    items
}
