//! Browser-console script that ticks list-item checkboxes by label.
//!
//! The output is plain text built from a fixed template; it is never run here.
//! Tag names are embedded as double-quoted literals without escaping, so names
//! containing `"` or `\` would produce broken JavaScript. XML names cannot
//! contain either character.

use serde::{Deserialize, Serialize};

/// CSS selectors the generated script uses to find labels and their checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistSelectors {
    /// Elements whose trimmed text is compared against each tag name.
    pub primary_text_selector: String,
    /// Nearest ancestor of a matched label that owns the checkbox.
    pub item_selector: String,
    /// Checkbox input inside the list item.
    pub checkbox_selector: String,
}

impl Default for ChecklistSelectors {
    fn default() -> Self {
        Self {
            primary_text_selector: ".mdc-list-item__primary-text".to_string(),
            item_selector: ".mdc-list-item".to_string(),
            checkbox_selector: ".mdc-checkbox__native-control".to_string(),
        }
    }
}

/// Render the checklist script for `tags`, which are inserted in the order given
/// (callers pass the alphabetical view).
pub fn render_tag_checklist_script<S: AsRef<str>>(
    tags: &[S],
    selectors: &ChecklistSelectors,
) -> String {
    let items = tags
        .iter()
        .map(|t| format!("\"{}\"", t.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"
function checkCheckboxesWithTextValues(textValues) {{
    // Array collecting the labels that were not found
    let notFound = [];

    // Loop over the requested text values
    textValues.forEach(function(textToMatch) {{
        // Find the label elements whose text matches
        let found = false;
        document.querySelectorAll('{primary}').forEach(function(item) {{
            if (item.textContent.trim() === textToMatch) {{
                found = true;
                let checkbox = item.closest('{item}').querySelector('{checkbox}');
                if (checkbox) {{
                    checkbox.checked = true;
                }}
            }}
        }});

        // Remember the value when no element matched
        if (!found) {{
            notFound.push(textToMatch);
        }}
    }});

    // Return the labels that were not found
    return notFound;
}}

// Text values to check
const itemsToCheck = [{items}];

// Pass the list to the function and collect the items that were not found
const itemsNotFound = checkCheckboxesWithTextValues(itemsToCheck);

// Report the missing items on the console
if (itemsNotFound.length > 0) {{
    console.log('These items were not found:', itemsNotFound);
}} else {{
    console.log('All items were found and checked.');
}}
"#,
        primary = selectors.primary_text_selector,
        item = selectors.item_selector,
        checkbox = selectors.checkbox_selector,
        items = items,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FUNCTION_BODY: &str = r#"
function checkCheckboxesWithTextValues(textValues) {
    // Array collecting the labels that were not found
    let notFound = [];

    // Loop over the requested text values
    textValues.forEach(function(textToMatch) {
        // Find the label elements whose text matches
        let found = false;
        document.querySelectorAll('.mdc-list-item__primary-text').forEach(function(item) {
            if (item.textContent.trim() === textToMatch) {
                found = true;
                let checkbox = item.closest('.mdc-list-item').querySelector('.mdc-checkbox__native-control');
                if (checkbox) {
                    checkbox.checked = true;
                }
            }
        });

        // Remember the value when no element matched
        if (!found) {
            notFound.push(textToMatch);
        }
    });

    // Return the labels that were not found
    return notFound;
}

// Text values to check
const itemsToCheck = ["#;

    const TRAILER: &str = r#"];

// Pass the list to the function and collect the items that were not found
const itemsNotFound = checkCheckboxesWithTextValues(itemsToCheck);

// Report the missing items on the console
if (itemsNotFound.length > 0) {
    console.log('These items were not found:', itemsNotFound);
} else {
    console.log('All items were found and checked.');
}
"#;

    #[test]
    fn embeds_tags_as_literal_array() {
        let js = render_tag_checklist_script(&["a", "b", "c"], &ChecklistSelectors::default());
        assert!(js.contains("const itemsToCheck = [\"a\", \"b\", \"c\"];"));
        assert_eq!(js.matches("[\"a\"").count(), 1);
    }

    #[test]
    fn default_selectors_render_fixed_body() {
        let js = render_tag_checklist_script(&["p"], &ChecklistSelectors::default());
        assert_eq!(js, format!("{}\"p\"{}", FUNCTION_BODY, TRAILER));
        assert!(js.starts_with("\nfunction checkCheckboxesWithTextValues"));
    }

    #[test]
    fn empty_list_renders_empty_array() {
        let js = render_tag_checklist_script::<&str>(&[], &ChecklistSelectors::default());
        assert!(js.contains("const itemsToCheck = [];"));
    }

    #[test]
    fn order_is_preserved() {
        let js = render_tag_checklist_script(&["teiHeader", "TEI"], &ChecklistSelectors::default());
        assert!(js.contains("[\"teiHeader\", \"TEI\"]"));
    }

    #[test]
    fn deterministic() {
        let sel = ChecklistSelectors::default();
        let tags = vec!["div".to_string(), "p".to_string()];
        assert_eq!(
            render_tag_checklist_script(tags.as_slice(), &sel),
            render_tag_checklist_script(tags.as_slice(), &sel)
        );
    }

    #[test]
    fn custom_selectors_are_used() {
        let sel = ChecklistSelectors {
            primary_text_selector: ".label".into(),
            item_selector: "li".into(),
            checkbox_selector: "input[type=checkbox]".into(),
        };
        let js = render_tag_checklist_script(&["p"], &sel);
        assert!(js.contains("document.querySelectorAll('.label')"));
        assert!(js.contains("item.closest('li').querySelector('input[type=checkbox]')"));
        assert!(!js.contains("mdc-"));
    }
}
