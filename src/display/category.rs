//! Category display formatting
//!
//! Row numbers are 1-based; front ends translate them back to store positions.

use super::strings::{Strings, TextKey};
use crate::models::Category;

/// Format categories as a numbered table
///
/// `rows` pairs each category with its position in the store, so a filtered
/// listing still shows numbers that can be passed back for removal.
pub fn format_category_list<'a, I>(rows: I, strings: &Strings) -> String
where
    I: IntoIterator<Item = (usize, &'a Category)>,
{
    let rows: Vec<_> = rows.into_iter().collect();
    if rows.is_empty() {
        return format!("{}.\n", strings.get(TextKey::NoCategories));
    }

    let header_name = strings.get(TextKey::Category);
    let header_type = strings.get(TextKey::Type);

    let name_width = rows
        .iter()
        .map(|(_, c)| c.name.chars().count())
        .chain(std::iter::once(header_name.chars().count()))
        .max()
        .unwrap_or(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<width$}  {}\n",
        "#",
        header_name,
        header_type,
        width = name_width
    ));
    output.push_str(&format!(
        "{:->3}  {:-<width$}  {:-<8}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for (index, category) in rows {
        output.push_str(&format!(
            "{:>3}  {:<width$}  {}\n",
            index + 1,
            category.name,
            strings.kind_label(category.kind),
            width = name_width
        ));
    }

    output
}
