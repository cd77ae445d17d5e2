//! Text formatting shared by the menu and the one-shot commands.

use unidisc_core::{Catalog, EntityId};

/// One ordering as course codes joined by ` -> `.
#[must_use]
pub fn order_line(catalog: &Catalog, order: &[EntityId]) -> String {
    order
        .iter()
        .map(|id| catalog.course_label(*id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Course codes separated by single spaces.
#[must_use]
pub fn label_list(catalog: &Catalog, ids: &[EntityId]) -> String {
    ids.iter()
        .map(|id| catalog.course_label(*id))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Raw ids separated by single spaces.
#[must_use]
pub fn id_list(ids: &[EntityId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ids whose flag is set, ascending.
#[must_use]
pub fn marked_ids(flags: &[bool]) -> Vec<EntityId> {
    flags
        .iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .map(|(i, _)| EntityId(i))
        .collect()
}

/// A subset in braces, e.g. `{CS101,CS201}`.
#[must_use]
pub fn braced_set(catalog: &Catalog, ids: &[EntityId]) -> String {
    let inner = ids
        .iter()
        .map(|id| catalog.course_label(*id))
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", inner)
}

/// `Yes` or `No`.
#[must_use]
pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// `SATISFIED` or `NOT SATISFIED`.
#[must_use]
pub fn satisfied(value: bool) -> &'static str {
    if value { "SATISFIED" } else { "NOT SATISFIED" }
}

/// Block-letter title shown at startup.
const TITLE_ART: &str = r#"
   _   _   _   _   ___   ____    ___   ____     ____
  | | | | | \ | | |_ _| |  _ \  |_ _| / ___|   / ___|
  | | | | |  \| |  | |  | | | |  | |  \___ \  | |
  | |_| | | |\  |  | |  | |_| |  | |   ___) | | |___
   \___/  |_| \_| |___| |____/  |___| |____/   \____|
"#;

/// Startup banner for the given version.
#[must_use]
pub fn banner(version: &str) -> String {
    format!(
        "{}\n  Course Relation Engine v{}\n\n  Closure • Orders • Induction • Inference\n",
        TITLE_ART, version
    )
}
