//! Document-wide style rules.
//!
//! Components that need to restyle something outside their own area insert a
//! rule and hold the returned [`StyleRuleGuard`]. Dropping the guard removes
//! exactly that rule, whichever path the owner leaves by.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Selector of the provider's attribution text.
pub const ATTRIBUTION_SELECTOR: &str = ".map-ctrl-attrib";
/// Selector of the provider's logo.
pub const LOGO_SELECTOR: &str = ".map-ctrl-logo";
/// Selectors hidden while a map is mounted.
pub const ATTRIBUTION_HIDE_SELECTORS: [&str; 2] = [ATTRIBUTION_SELECTOR, LOGO_SELECTOR];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Comma-separated selector list
    pub selector: String,
    pub declarations: String,
}

impl StyleRule {
    fn matches(&self, selector: &str) -> bool {
        self.selector.split(',').any(|s| s.trim() == selector)
    }

    fn hides(&self) -> bool {
        self.declarations
            .split(';')
            .map(|d| d.split_whitespace().collect::<String>())
            .any(|d| d == "display:none" || d == "display:none!important")
    }
}

#[derive(Debug, Default)]
struct Sheet {
    next_id: u64,
    rules: BTreeMap<u64, StyleRule>,
}

/// Shared handle to the document's style sheet. Cloning shares the sheet.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sheet: Rc<RefCell<Sheet>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule; it stays until the guard is dropped.
    pub fn insert_rule(&self, selector: &str, declarations: &str) -> StyleRuleGuard {
        let mut sheet = self.sheet.borrow_mut();
        let id = sheet.next_id;
        sheet.next_id += 1;
        sheet.rules.insert(
            id,
            StyleRule {
                selector: selector.to_string(),
                declarations: declarations.to_string(),
            },
        );
        StyleRuleGuard {
            sheet: Rc::clone(&self.sheet),
            id,
        }
    }

    /// Whether any active rule sets `display: none` on the selector.
    pub fn is_hidden(&self, selector: &str) -> bool {
        self.sheet
            .borrow()
            .rules
            .values()
            .any(|rule| rule.matches(selector) && rule.hides())
    }

    pub fn rule_count(&self) -> usize {
        self.sheet.borrow().rules.len()
    }

    pub fn rules(&self) -> Vec<StyleRule> {
        self.sheet.borrow().rules.values().cloned().collect()
    }
}

/// Owned presence of one style rule.
#[derive(Debug)]
#[must_use = "the rule is removed as soon as the guard is dropped"]
pub struct StyleRuleGuard {
    sheet: Rc<RefCell<Sheet>>,
    id: u64,
}

impl Drop for StyleRuleGuard {
    fn drop(&mut self) {
        self.sheet.borrow_mut().rules.remove(&self.id);
    }
}

/// Hides the provider's attribution and logo for the guard's lifetime.
pub fn hide_attribution(document: &Document) -> StyleRuleGuard {
    document.insert_rule(&ATTRIBUTION_HIDE_SELECTORS.join(", "), "display: none !important;")
}
