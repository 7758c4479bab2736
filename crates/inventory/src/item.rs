use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult, ValueObject};

/// Raw item description: the constructor input and the serialized shape.
///
/// Carries no guarantees. Validation and classification happen when it is
/// turned into an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl ValueObject for ItemSpec {}

/// Desirability score of a stocked item.
///
/// Held in `MIN..=MAX` for every category except legendary stock, which is
/// pinned to [`Quality::LEGENDARY`] and never adjusted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(i32);

impl Quality {
    /// Floor for adjustable stock.
    pub const MIN: Quality = Quality(0);
    /// Ceiling for adjustable stock.
    pub const MAX: Quality = Quality(50);
    /// Fixed value legendary stock is pinned to.
    pub const LEGENDARY: Quality = Quality(80);

    /// Callers validate; see [`Item::new`].
    pub(crate) const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Add `delta` and clamp the result to `MIN..=MAX`. Every category's
    /// quality movement funnels through this one helper.
    pub(crate) fn adjusted(self, delta: i32) -> Self {
        Self((self.0 + delta).clamp(Self::MIN.0, Self::MAX.0))
    }

    pub(crate) const fn in_range(value: i32) -> bool {
        Self::MIN.0 <= value && value <= Self::MAX.0
    }
}

impl ValueObject for Quality {}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Days remaining before an item is past its sale date.
///
/// Never negative: construction rejects negative input and the daily
/// decrement floors at zero, where it stays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SellIn(i32);

impl SellIn {
    /// Callers validate; see [`Item::new`].
    pub(crate) const fn new(days: i32) -> Self {
        Self(days)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// True once the countdown has reached zero. Read *before* the day's
    /// decrement, so an item hits double rate on the day it expires and
    /// keeps it thereafter (the floor holds the countdown at zero).
    pub const fn is_expired(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn decremented(self) -> Self {
        Self((self.0 - 1).max(0))
    }
}

impl ValueObject for SellIn {}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// How an item ages. Derived from the name once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    /// Plain stock: loses one quality per day.
    Normal,
    /// Improves the longer it sits on the shelf.
    Aged,
    /// Never ages: quality pinned, countdown frozen.
    Legendary,
    /// Appreciates on the approach to the event, worthless after it.
    EventTicket,
}

/// Fixed classification table: keyword substrings per category plus the
/// conjured name prefix.
///
/// Matching is case-insensitive (keywords are stored lowercase). Category
/// keywords are tried in declaration order and the first hit wins, so exactly
/// one category applies to any name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryKeywords {
    aged: &'static str,
    event_ticket: &'static str,
    legendary: &'static str,
    conjured_prefix: &'static str,
}

impl CategoryKeywords {
    /// The table every inventory uses. The keyword strings are fixed
    /// constants, not configuration.
    pub const DEFAULT: CategoryKeywords = CategoryKeywords {
        aged: "aged brie",
        event_ticket: "backstage pass",
        legendary: "sulfuras",
        conjured_prefix: "conjured",
    };

    /// Classify a name by case-insensitive substring match.
    pub fn category(&self, name: &str) -> ItemCategory {
        let name = name.to_lowercase();
        if name.contains(self.aged) {
            ItemCategory::Aged
        } else if name.contains(self.event_ticket) {
            ItemCategory::EventTicket
        } else if name.contains(self.legendary) {
            ItemCategory::Legendary
        } else {
            ItemCategory::Normal
        }
    }

    /// Conjured is orthogonal to the category: a name *prefix*, not a
    /// keyword anywhere in the name.
    pub fn is_conjured(&self, name: &str) -> bool {
        name.to_lowercase().starts_with(self.conjured_prefix)
    }
}

/// One stocked good.
///
/// Classified once at construction; afterwards only `sell_in` and `quality`
/// move, one simulated day at a time. Serialization goes through
/// [`ItemSpec`], so no serde path bypasses the construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemSpec", into = "ItemSpec")]
pub struct Item {
    name: String,
    category: ItemCategory,
    conjured: bool,
    sell_in: SellIn,
    quality: Quality,
}

impl Item {
    /// Validate and classify a raw item description.
    ///
    /// Fails with [`DomainError::QualityOutOfRange`] if a non-legendary
    /// quality sits outside `0..=50`, or with
    /// [`DomainError::NegativeSellIn`] if the sell-in is negative (checked
    /// for every category). Legendary stock is exempt from the quality band
    /// and pinned to [`Quality::LEGENDARY`] regardless of the given value.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Item> {
        let name = name.into();
        let keywords = &CategoryKeywords::DEFAULT;
        let category = keywords.category(&name);
        let conjured = keywords.is_conjured(&name);

        if category != ItemCategory::Legendary && !Quality::in_range(quality) {
            return Err(DomainError::quality_out_of_range(name, quality));
        }
        if sell_in < 0 {
            return Err(DomainError::negative_sell_in(name, sell_in));
        }

        let quality = match category {
            ItemCategory::Legendary => Quality::LEGENDARY,
            _ => Quality::new(quality),
        };

        Ok(Item {
            name,
            category,
            conjured,
            sell_in: SellIn::new(sell_in),
            quality,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn is_conjured(&self) -> bool {
        self.conjured
    }

    pub fn sell_in(&self) -> SellIn {
        self.sell_in
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Advance this item by one simulated day.
    ///
    /// Every rate decision reads `sell_in` *before* the day's decrement.
    pub(crate) fn age_one_day(&mut self) {
        // Legendary stock is frozen: no quality movement, no countdown, and
        // the 0-50 clamp never applies to its pinned value.
        if self.category == ItemCategory::Legendary {
            return;
        }
        self.quality = self.next_quality();
        self.sell_in = self.sell_in.decremented();
    }

    fn next_quality(&self) -> Quality {
        let per_day = match self.category {
            ItemCategory::Normal => -1,
            ItemCategory::Aged => 1,
            ItemCategory::EventTicket => {
                if self.sell_in.is_expired() {
                    // A ticket past its event is worthless outright; the
                    // rate multipliers do not apply.
                    return Quality::MIN;
                }
                ticket_appreciation(self.sell_in)
            }
            // age_one_day returns early for legendary stock
            ItemCategory::Legendary => 0,
        };
        self.quality.adjusted(per_day * self.rate_multiplier())
    }

    /// Expired stock moves at double rate; the conjured modifier doubles
    /// again and stacks, so a conjured item at its deadline moves at 4x.
    fn rate_multiplier(&self) -> i32 {
        let expired = if self.sell_in.is_expired() { 2 } else { 1 };
        let conjured = if self.conjured { 2 } else { 1 };
        expired * conjured
    }
}

/// Ticket appreciation accelerates as the event approaches: +1 beyond ten
/// days out, +2 within ten, +3 within five.
fn ticket_appreciation(days_left: SellIn) -> i32 {
    match days_left.value() {
        d if d > 10 => 1,
        d if d > 5 => 2,
        _ => 3,
    }
}

impl TryFrom<ItemSpec> for Item {
    type Error = DomainError;

    fn try_from(spec: ItemSpec) -> DomainResult<Item> {
        Item::new(spec.name, spec.sell_in, spec.quality)
    }
}

impl From<Item> for ItemSpec {
    fn from(item: Item) -> ItemSpec {
        ItemSpec {
            name: item.name,
            sell_in: item.sell_in.value(),
            quality: item.quality.value(),
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
