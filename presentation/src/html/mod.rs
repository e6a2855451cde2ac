//! Typed HTML rendering
//!
//! Everything that ends up in the page goes through [`HtmlBuilder`], which
//! escapes plain text and passes [`Markup`](millet_domain::Markup) through
//! untouched.

mod builder;
mod card;
mod document;
mod evidence;
mod stars;

pub use builder::HtmlBuilder;
pub use card::{CardView, ConcernMatch};
pub use document::{DocumentParts, render_document};
pub use evidence::{EVIDENCE_LIMIT, EVIDENCE_PENDING, EvidenceSummary, MORE_EVIDENCE_NOTE, strip_page_prefix};
pub use stars::{STAR_SLOTS, StarRating};
