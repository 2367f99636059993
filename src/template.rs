//! Rendering of fresh assignment documents.
//!
//! Pure string assembly; the caller decides where the result is written.

use indexmap::IndexMap;

use crate::layout;

/// Renders the document skeleton for one assignment.
///
/// Deterministic: identical inputs produce byte-identical output. The group
/// and due date may be empty, in which case the corresponding macros render
/// with empty arguments and the class omits them from the header.
pub fn render(
    course: &str,
    group: &str,
    members: &IndexMap<String, String>,
    number: u32,
    due: &str,
) -> String {
    let members = members
        .iter()
        .map(|(id, name)| member_line(id, name))
        .collect::<Vec<_>>()
        .join("\n");
    let sheet = layout::pad(number);
    format!(
        r"\documentclass{{../assignments}}
\course{{{course}}}
\group{{{group}}}
{members}
\title{{}}
\author{{}}
\date{{}}
\sheet{{{sheet}}}
\due{{{due}}}

\begin{{document}}
\maketitle
\gradingtable{{}}

% \exercise[<number of points>]{{<Exercise Title>}}
% \subexercise{{<Subexercise Title>}}

\end{{document}}
"
    )
}

/// One `\member{<id>}{<given names>}{<surname>}` declaration.
///
/// The display name is split on whitespace; the last token is the surname
/// and the remaining tokens, joined, are the given name. A single-token
/// name yields an empty given-name field.
fn member_line(id: &str, name: &str) -> String {
    let mut parts: Vec<&str> = name.split_whitespace().collect();
    let surname = parts.pop().unwrap_or("");
    let given = parts.join(" ");
    format!("\\member{{{id}}}{{{given}}}{{{surname}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> IndexMap<String, String> {
        let mut members = IndexMap::new();
        members.insert("123456".to_string(), "Max Mustermann".to_string());
        members.insert("789012".to_string(), "Erika Marie Musterfrau".to_string());
        members
    }

    #[test]
    fn render_is_deterministic() {
        let a = render("Analysis II", "Gruppe 7", &roster(), 3, "April 20, 2021");
        let b = render("Analysis II", "Gruppe 7", &roster(), 3, "April 20, 2021");
        assert_eq!(a, b);
    }

    #[test]
    fn render_embeds_course_sheet_and_members() {
        let doc = render("Analysis II", "Gruppe 7", &roster(), 3, "April 20, 2021");
        assert!(doc.contains(r"\course{Analysis II}"));
        assert!(doc.contains(r"\group{Gruppe 7}"));
        assert!(doc.contains(r"\sheet{03}"));
        assert!(doc.contains(r"\due{April 20, 2021}"));
        assert!(doc.contains(r"\member{123456}{Max}{Mustermann}"));
        assert!(doc.contains(r"\member{789012}{Erika Marie}{Musterfrau}"));
        assert!(doc.starts_with(r"\documentclass{../assignments}"));
    }

    #[test]
    fn render_with_empty_group_and_due() {
        let doc = render("Stochastik", "", &IndexMap::new(), 12, "");
        assert!(doc.contains(r"\group{}"));
        assert!(doc.contains(r"\due{}"));
        assert!(doc.contains(r"\sheet{12}"));
    }

    #[test]
    fn member_line_splits_on_last_whitespace() {
        assert_eq!(
            member_line("123456", "Max Mustermann"),
            r"\member{123456}{Max}{Mustermann}"
        );
        assert_eq!(
            member_line("1", "Juan Pablo de la Cruz"),
            r"\member{1}{Juan Pablo de la}{Cruz}"
        );
    }

    #[test]
    fn member_line_single_token_name_has_empty_given_name() {
        assert_eq!(member_line("42", "Cher"), r"\member{42}{}{Cher}");
    }
}
