// 📝 Report Writer - RankedTotals → XML document
// Fixed wire format: one root, one entry element per ranked pair

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::stats::RankedTotals;

/// Root element of the output document
pub const ROOT_ELEMENT: &str = "moving_violations";
/// One child per ranked (type, total) pair
pub const ENTRY_ELEMENT: &str = "mv";
/// Attribute carrying the violation type name
pub const NAME_ATTRIBUTE: &str = "name";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Render the ranked totals as the output document.
///
/// Entries are written in ranking order - this format never re-sorts. The
/// element and attribute names plus the closed set of type names contain
/// nothing that needs escaping, and totals print with their exact scale.
pub fn render_xml(totals: &RankedTotals) -> String {
    let mut document = String::new();
    document.push_str(XML_DECLARATION);
    document.push('\n');

    if totals.is_empty() {
        document.push_str(&format!("<{ROOT_ELEMENT}/>\n"));
        return document;
    }

    document.push_str(&format!("<{ROOT_ELEMENT}>\n"));
    for (violation_type, total) in totals.entries() {
        document.push_str(&format!(
            "  <{ENTRY_ELEMENT} {NAME_ATTRIBUTE}=\"{}\">{}</{ENTRY_ELEMENT}>\n",
            violation_type.name(),
            total
        ));
    }
    document.push_str(&format!("</{ROOT_ELEMENT}>\n"));
    document
}

/// Write the report all-or-nothing: render in memory, write a sibling temp
/// file, rename into place. A failure leaves no half-written document at the
/// destination, and the whole run fails with it.
pub fn write_report(totals: &RankedTotals, path: &Path) -> Result<()> {
    let document = render_xml(totals);

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, document.as_bytes())
        .with_context(|| format!("Failed to write report to {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to move report into place at {}", path.display()))?;
    Ok(())
}
