// web_app/paging.rs - Which pagination buttons to show
//
// Kept apart from the Leptos component so the button layout can be
// checked without a reactive runtime.

use crate::web_app::model::PageInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// The page currently shown
    Solid,
    Ghost,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "solid",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonLabel {
    Prev,
    Page(u32),
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageButtonSpec {
    /// Page number the button navigates to
    pub target: u32,
    pub label: ButtonLabel,
    pub variant: ButtonVariant,
}

/// Buttons in display order: previous, `start..=end`, next.
///
/// Previous and next only appear when the server reported such a page.
pub fn pagination_buttons(info: &PageInfo) -> Vec<PageButtonSpec> {
    let mut buttons = Vec::new();

    if let Some(prev) = info.prev_page_number {
        buttons.push(PageButtonSpec {
            target: prev,
            label: ButtonLabel::Prev,
            variant: ButtonVariant::Ghost,
        });
    }

    buttons.extend(info.page_numbers().map(|page| PageButtonSpec {
        target: page,
        label: ButtonLabel::Page(page),
        variant: if info.is_current(page) {
            ButtonVariant::Solid
        } else {
            ButtonVariant::Ghost
        },
    }));

    if let Some(next) = info.next_page_number {
        buttons.push(PageButtonSpec {
            target: next,
            label: ButtonLabel::Next,
            variant: ButtonVariant::Ghost,
        });
    }

    buttons
}
