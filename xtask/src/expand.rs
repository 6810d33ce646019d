//! Template expansion for fixed-arity code.
//!
//! A template is plain text with literal directives delimited by pipes. Each
//! directive repeats a fragment once per index `1..=arity`; inside a repeated
//! fragment `@n` becomes the index and `@w` its English word.
//!
//! - `pre|repeat_csv|ITEM|post`: items joined by `", "`
//! - `|repeat_line|LINE`: one line per index
//! - `|repeat_line_csv|LINE`: one line per index, all but the last ending in `,`
//! - `|repeat_multi_line_csv|`: the block up to the next line ending in `|` is
//!   emitted once per index, copies separated by `,`
//! - `|repeat_multi_line_semicolon|`: as above, every copy terminated by `;`
//! - `|repeat_with_intersect_csv|ITEM|ALT|`: inside a block or a repeated
//!   line only; the items use `ALT` at the copy's own index
//!
//! # Examples
//!
//! ```text
//! pub enum Union<|repeat_csv|T@n|> {
//! |repeat_line_csv|    T@n(T@n)
//! }
//! ```
//!
//! expands for arity 2 to
//!
//! ```text
//! pub enum Union<T1, T2> {
//!     T1(T1),
//!     T2(T2)
//! }
//! ```

use thiserror::Error;

const REPEAT_CSV: &str = "|repeat_csv|";
const REPEAT_LINE: &str = "|repeat_line|";
const REPEAT_LINE_CSV: &str = "|repeat_line_csv|";
const REPEAT_MULTI_LINE_CSV: &str = "|repeat_multi_line_csv|";
const REPEAT_MULTI_LINE_SEMICOLON: &str = "|repeat_multi_line_semicolon|";
const REPEAT_WITH_INTERSECT_CSV: &str = "|repeat_with_intersect_csv|";

const LINE_DIRECTIVES: [&str; 3] = [REPEAT_CSV, REPEAT_LINE, REPEAT_LINE_CSV];

const WORDS: [&str; 10] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
];

/// Failures while expanding a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("arity must be at least 1")]
    ZeroArity,

    #[error("no English word for index {0}")]
    NoWord(usize),

    #[error("block opened on line {0} is never closed")]
    UnterminatedBlock(usize),

    #[error("unterminated `{directive}` span on line {line}")]
    UnterminatedSpan { directive: &'static str, line: usize },

    #[error("`repeat_with_intersect_csv` on line {0} is outside a repeated line or block")]
    StrayIntersect(usize),
}

/// Expands `template` for the given arity.
///
/// The output keeps the template's line structure, one `\n` per line.
///
/// # Errors
///
/// Returns [`ExpandError`] when the arity is zero or too large for `@w`, when
/// a span or block is not terminated, or when an intersect span sits on a
/// line that is not repeated.
pub fn expand(template: &str, arity: usize) -> Result<String, ExpandError> {
    if arity == 0 {
        return Err(ExpandError::ZeroArity);
    }

    let mut output = Vec::new();
    let mut lines = template.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let line_number = index + 1;

        if let Some(separator) = block_separator(line) {
            let mut block = vec![line.to_string()];
            loop {
                let Some((_, next)) = lines.next() else {
                    return Err(ExpandError::UnterminatedBlock(line_number));
                };
                block.push(next.to_string());
                if next.trim_end().ends_with('|') {
                    break;
                }
            }
            output.extend(expand_block(&block, separator, arity, line_number)?);
        } else {
            output.extend(expand_line(line.to_string(), arity, line_number)?);
        }
    }

    let mut text = output.join("\n");
    text.push('\n');
    Ok(text)
}

fn block_separator(line: &str) -> Option<Separator> {
    if line.contains(REPEAT_MULTI_LINE_SEMICOLON) {
        Some(Separator::Semicolon)
    } else if line.contains(REPEAT_MULTI_LINE_CSV) {
        Some(Separator::Comma)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Comma,
    Semicolon,
}

impl Separator {
    const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
        }
    }
}

/// Expands a single line, re-scanning until no line directive remains.
fn expand_line(line: String, arity: usize, line_number: usize) -> Result<Vec<String>, ExpandError> {
    let mut pending = vec![line];

    while pending
        .iter()
        .any(|line| LINE_DIRECTIVES.iter().any(|directive| line.contains(directive)))
    {
        let mut next = Vec::with_capacity(pending.len());
        for line in pending {
            let line = expand_csv_spans(&line, arity, line_number)?;
            for repeated in repeat_line(&line, REPEAT_LINE, arity, line_number)? {
                let lines = repeat_line(&repeated, REPEAT_LINE_CSV, arity, line_number)?;
                let last = lines.len().saturating_sub(1);
                if repeated.contains(REPEAT_LINE_CSV) {
                    next.extend(
                        lines
                            .into_iter()
                            .enumerate()
                            .map(|(position, line)| if position < last { line + "," } else { line }),
                    );
                } else {
                    next.extend(lines);
                }
            }
        }
        pending = next;
    }

    if pending.iter().any(|line| line.contains(REPEAT_WITH_INTERSECT_CSV)) {
        return Err(ExpandError::StrayIntersect(line_number));
    }

    Ok(pending)
}

fn repeat_line(
    line: &str,
    directive: &str,
    arity: usize,
    line_number: usize,
) -> Result<Vec<String>, ExpandError> {
    if !line.contains(directive) {
        return Ok(vec![line.to_string()]);
    }
    let body = line.replace(directive, "");
    (1..=arity)
        .map(|index| substitute(&expand_intersect(&body, arity, index, line_number)?, index))
        .collect()
}

/// Replaces every `|repeat_csv|ITEM|` span with the comma-joined items.
fn expand_csv_spans(line: &str, arity: usize, line_number: usize) -> Result<String, ExpandError> {
    let mut current = line.to_string();

    while let Some(start) = current.find(REPEAT_CSV) {
        let body_start = start + REPEAT_CSV.len();
        let Some(length) = current[body_start..].find('|') else {
            return Err(ExpandError::UnterminatedSpan {
                directive: "repeat_csv",
                line: line_number,
            });
        };
        let body = &current[body_start..body_start + length];
        let items = (1..=arity)
            .map(|index| substitute(body, index))
            .collect::<Result<Vec<_>, _>>()?;

        current = format!(
            "{}{}{}",
            &current[..start],
            items.join(", "),
            &current[body_start + length + 1..]
        );
    }

    Ok(current)
}

/// Emits the block once per index, each copy expanded for that index.
fn expand_block(
    block: &[String],
    separator: Separator,
    arity: usize,
    line_number: usize,
) -> Result<Vec<String>, ExpandError> {
    let last = block.len() - 1;
    let bodies = block
        .iter()
        .enumerate()
        .map(|(position, line)| {
            let line = if position == 0 {
                line.replace(REPEAT_MULTI_LINE_CSV, "")
                    .replace(REPEAT_MULTI_LINE_SEMICOLON, "")
            } else if position == last {
                line.trim_end().trim_end_matches('|').to_string()
            } else {
                line.clone()
            };
            expand_csv_spans(&line, arity, line_number + position)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut output = Vec::with_capacity(bodies.len() * arity);
    for index in 1..=arity {
        let mut copy = bodies
            .iter()
            .enumerate()
            .map(|(position, body)| {
                let body = expand_intersect(body, arity, index, line_number + position)?;
                substitute(&body, index)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if (index < arity || separator == Separator::Semicolon)
            && let Some(tail) = copy.last_mut()
        {
            tail.push(separator.as_char());
        }
        output.extend(copy);
    }

    Ok(output)
}

/// Replaces each `|repeat_with_intersect_csv|ITEM|ALT|` with the joined
/// items, using `ALT` at position `selected`.
fn expand_intersect(
    line: &str,
    arity: usize,
    selected: usize,
    line_number: usize,
) -> Result<String, ExpandError> {
    let mut current = line.to_string();

    while let Some(start) = current.find(REPEAT_WITH_INTERSECT_CSV) {
        let body_start = start + REPEAT_WITH_INTERSECT_CSV.len();
        let mut parts = current[body_start..].splitn(3, '|');

        let (Some(item), Some(alternative), Some(rest)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ExpandError::UnterminatedSpan {
                directive: "repeat_with_intersect_csv",
                line: line_number,
            });
        };

        let items = (1..=arity)
            .map(|index| substitute(if index == selected { alternative } else { item }, index))
            .collect::<Result<Vec<_>, _>>()?;

        current = format!("{}{}{}", &current[..start], items.join(", "), rest);
    }

    Ok(current)
}

fn substitute(fragment: &str, index: usize) -> Result<String, ExpandError> {
    let mut expanded = fragment.replace("@n", &index.to_string());
    if expanded.contains("@w") {
        expanded = expanded.replace("@w", word(index)?);
    }
    Ok(expanded)
}

fn word(index: usize) -> Result<&'static str, ExpandError> {
    index
        .checked_sub(1)
        .and_then(|position| WORDS.get(position))
        .copied()
        .ok_or(ExpandError::NoWord(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "enum OneOf<T1> {}\n")]
    #[case(3, "enum OneOf<T1, T2, T3> {}\n")]
    fn repeat_csv_joins_items(#[case] arity: usize, #[case] expected: &str) {
        assert_eq!(expand("enum OneOf<|repeat_csv|T@n|> {}", arity).unwrap(), expected);
    }

    #[rstest]
    fn repeat_csv_expands_every_span_on_a_line() {
        let expanded = expand("fn f<|repeat_csv|A@n|>(x: (|repeat_csv|A@n|))", 2).unwrap();
        assert_eq!(expanded, "fn f<A1, A2>(x: (A1, A2))\n");
    }

    #[rstest]
    fn repeat_line_emits_one_line_per_index() {
        let expanded = expand("|repeat_line|const @w: usize = @n;", 3).unwrap();
        assert_eq!(
            expanded,
            "const One: usize = 1;\nconst Two: usize = 2;\nconst Three: usize = 3;\n"
        );
    }

    #[rstest]
    fn repeat_line_csv_separates_all_but_the_last_line() {
        let template = "enum E {\n|repeat_line_csv|    T@n(T@n)\n}";
        assert_eq!(expand(template, 2).unwrap(), "enum E {\n    T1(T1),\n    T2(T2)\n}\n");
    }

    #[rstest]
    fn nested_directives_are_rescanned() {
        let expanded = expand("|repeat_line|f@n(|repeat_csv|x@n|)", 2).unwrap();
        assert_eq!(expanded, "f1(x1, x2)\nf2(x1, x2)\n");
    }

    #[rstest]
    fn lines_without_directives_pass_through() {
        let template = "// header\nuse std::fmt;";
        assert_eq!(expand(template, 4).unwrap(), "// header\nuse std::fmt;\n");
    }

    #[rstest]
    fn multi_line_csv_repeats_the_block() {
        let template = "match x {\n|repeat_multi_line_csv|    T@n(v) => {\n        on_@n(v)\n    }|\n}";
        let expected = "match x {\n    T1(v) => {\n        on_1(v)\n    },\n    T2(v) => {\n        on_2(v)\n    }\n}\n";
        assert_eq!(expand(template, 2).unwrap(), expected);
    }

    #[rstest]
    fn multi_line_semicolon_terminates_every_block() {
        let template = "|repeat_multi_line_semicolon|let a@n =\n    @n|";
        assert_eq!(expand(template, 2).unwrap(), "let a1 =\n    1;\nlet a2 =\n    2;\n");
    }

    #[rstest]
    fn intersect_substitutes_the_alternative_at_the_block_index() {
        let template = "|repeat_multi_line_csv|fn map_@n(self) -> OneOf<|repeat_with_intersect_csv|T@n|R@n|>\n{}|";
        let expected = "fn map_1(self) -> OneOf<R1, T2, T3>\n{},\nfn map_2(self) -> OneOf<T1, R2, T3>\n{},\nfn map_3(self) -> OneOf<T1, T2, R3>\n{}\n";
        assert_eq!(expand(template, 3).unwrap(), expected);
    }

    #[rstest]
    fn zero_arity_is_rejected() {
        assert_eq!(expand("x", 0), Err(ExpandError::ZeroArity));
    }

    #[rstest]
    fn words_stop_at_ten() {
        assert!(expand("|repeat_line|@w", 10).is_ok());
        assert_eq!(expand("|repeat_line|@w", 11), Err(ExpandError::NoWord(11)));
    }

    #[rstest]
    fn numerals_do_not_need_words() {
        assert!(expand("|repeat_line|@n", 12).is_ok());
    }

    #[rstest]
    fn unterminated_block_reports_its_opening_line() {
        let template = "first\n|repeat_multi_line_csv|open\nstill open";
        assert_eq!(expand(template, 2), Err(ExpandError::UnterminatedBlock(2)));
    }

    #[rstest]
    fn unterminated_span_is_rejected() {
        assert_eq!(
            expand("x<|repeat_csv|T@n", 2),
            Err(ExpandError::UnterminatedSpan {
                directive: "repeat_csv",
                line: 1
            })
        );
    }

    #[rstest]
    #[case("type Pair = (|repeat_with_intersect_csv|A|B|);", 1)]
    #[case("head\nfn f<|repeat_csv|T@n|>() -> (|repeat_with_intersect_csv|A|B|)", 2)]
    fn intersect_outside_a_repetition_is_rejected(#[case] template: &str, #[case] line: usize) {
        assert_eq!(expand(template, 2), Err(ExpandError::StrayIntersect(line)));
    }

    #[rstest]
    fn intersect_in_a_repeated_line_uses_the_line_index() {
        let expanded = expand("|repeat_line|fn f@n() -> (|repeat_with_intersect_csv|A|B|)", 2).unwrap();
        assert_eq!(expanded, "fn f1() -> (B, A)\nfn f2() -> (A, B)\n");
    }

    #[rstest]
    #[case(2)]
    #[case(5)]
    fn union_template_expands_every_case(#[case] arity: usize) {
        let template = include_str!("../templates/one_of.rs.tmpl");
        let expanded = expand(template, arity).unwrap();

        assert!(!expanded.contains("|repeat_"));
        assert!(!expanded.contains("@n"));
        assert!(expanded.contains(&format!("    T{arity}(T{arity})\n}}")));
        assert!(expanded.contains(&format!("pub fn project_{arity}(self) -> Option<T{arity}>")));
        assert_eq!(expanded.matches("pub fn map_").count(), arity);
    }

    #[rstest]
    fn union_template_maps_only_the_selected_case() {
        let expanded = expand(include_str!("../templates/one_of.rs.tmpl"), 2).unwrap();

        assert!(expanded.contains(
            "pub fn map_2<R>(self, function: impl FnOnce(T2) -> R) -> OneOf<T1, R> { match self { \
             Self::T1(value) => OneOf::T1(value), Self::T2(value) => OneOf::T2(function(value)) } }"
        ));
        assert!(expanded.contains("        let case_1: OneOf<u8, ()> = OneOf::T1(1);\n"));
        assert!(expanded.contains("            },\n            Self::T2(value) => {\n"));
    }
}
