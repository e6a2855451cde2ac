//! Concern selector
//!
//! Owns the [`SelectionState`] and everything derived from it: the
//! selected-tags list and the concern board. Both are recomputed after every
//! mutation, so the view can never disagree with the state.

use crate::html::HtmlBuilder;
use millet_domain::{ConcernTag, Markup, SelectionState};

/// Shown in the tags area while nothing is selected
pub const TAGS_PLACEHOLDER: &str = "Select health concerns to get started";

/// One entry of the selected-tags list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagView {
    pub tag: ConcernTag,
    pub display_name: &'static str,
}

/// Rendered selected-tags area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagsDisplay {
    Placeholder,
    Tags(Vec<TagView>),
}

impl TagsDisplay {
    pub fn to_html(&self) -> Markup {
        let mut b = HtmlBuilder::new();
        match self {
            TagsDisplay::Placeholder => {
                b.open("div", &[("class", "empty-state")])
                    .icon("fas fa-plus-circle")
                    .element("span", &[], TAGS_PLACEHOLDER)
                    .close();
            }
            TagsDisplay::Tags(tags) => {
                for view in tags {
                    b.open("div", &[("class", "selected-tag")])
                        .text(view.display_name)
                        .open(
                            "i",
                            &[("class", "fas fa-times"), ("data-remove", view.tag.as_str())],
                        )
                        .close()
                        .close();
                }
            }
        }
        b.finish()
    }
}

/// One card on the concern board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcernCard {
    pub tag: ConcernTag,
    pub selected: bool,
}

#[derive(Debug)]
pub struct ConcernSelector {
    state: SelectionState,
    tags: TagsDisplay,
}

impl Default for ConcernSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcernSelector {
    pub fn new() -> Self {
        let state = SelectionState::new();
        let tags = Self::render(&state);
        Self { state, tags }
    }

    /// Flip membership of `tag`; returns whether it is now selected.
    pub fn toggle(&mut self, tag: ConcernTag) -> bool {
        let selected = self.state.toggle(tag);
        self.refresh();
        selected
    }

    /// Remove `tag` if present; returns whether anything changed.
    pub fn remove(&mut self, tag: ConcernTag) -> bool {
        let removed = self.state.remove(tag);
        self.refresh();
        removed
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The selected-tags area as of the last mutation
    pub fn tags(&self) -> &TagsDisplay {
        &self.tags
    }

    /// Recompute the selected-tags area from the current state
    pub fn render_tags(&self) -> TagsDisplay {
        Self::render(&self.state)
    }

    /// Every concern, marked selected iff it is in the state
    pub fn concern_board(&self) -> Vec<ConcernCard> {
        ConcernTag::ALL
            .iter()
            .map(|&tag| ConcernCard {
                tag,
                selected: self.state.contains(tag),
            })
            .collect()
    }

    pub fn board_html(&self) -> Markup {
        let mut b = HtmlBuilder::new();
        b.open("div", &[("class", "concerns-grid")]);
        for card in self.concern_board() {
            let class = if card.selected {
                "concern-card selected"
            } else {
                "concern-card"
            };
            b.element(
                "div",
                &[("class", class), ("data-concern", card.tag.as_str())],
                card.tag.display_name(),
            );
        }
        b.close();
        b.finish()
    }

    fn refresh(&mut self) {
        self.tags = Self::render(&self.state);
    }

    fn render(state: &SelectionState) -> TagsDisplay {
        if state.is_empty() {
            return TagsDisplay::Placeholder;
        }
        TagsDisplay::Tags(
            state
                .iter()
                .map(|tag| TagView {
                    tag,
                    display_name: tag.display_name(),
                })
                .collect(),
        )
    }
}
