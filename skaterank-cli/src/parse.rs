/// Free-text score sheet parsing.
///
/// One skater per line: an optional name ended by ':', then marks in
/// reading order, technical first. Sheets arrive copy-pasted from all
/// kinds of sources, so anything between numbers is treated as a
/// separator and decimal commas are accepted alongside decimal points.
use skaterank_core::SkaterInput;

/// Marks per side (technical / artistic) a line can carry.
pub const MARKS_PER_SIDE: usize = 3;

/// Parse a whole sheet. Blank lines, '#' comment lines and lines without
/// a single parseable number are skipped; everything else is a skater.
pub fn parse_skaters(sheet: &str) -> Vec<SkaterInput> {
    let mut skaters = Vec::new();
    for line in sheet.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(skater) = parse_line(trimmed, skaters.len()) {
            skaters.push(skater);
        }
    }
    skaters
}

/// Parse one line. `position` is the 0-based record position, used to
/// number unnamed skaters ("Skater 3" is the third parsed record, not the
/// third input line).
fn parse_line(line: &str, position: usize) -> Option<SkaterInput> {
    let (name_part, mark_part) = match line.split_once(':') {
        Some((name, rest)) => (name.trim(), rest),
        None => ("", line),
    };

    let marks: Vec<f64> = mark_part
        .split_whitespace()
        .filter_map(parse_mark)
        .take(MARKS_PER_SIDE * 2)
        .collect();
    if marks.is_empty() {
        return None;
    }

    // First three numbers are technical, the rest artistic. Short lines
    // leave explicit missing marks; the engine knows what those mean.
    let mut technical = vec![None; MARKS_PER_SIDE];
    let mut artistic = vec![None; MARKS_PER_SIDE];
    for (i, &mark) in marks.iter().enumerate() {
        if i < MARKS_PER_SIDE {
            technical[i] = Some(mark);
        } else {
            artistic[i - MARKS_PER_SIDE] = Some(mark);
        }
    }

    let name = if name_part.is_empty() {
        format!("Skater {}", position + 1)
    } else {
        name_part.to_string()
    };

    Some(SkaterInput {
        name,
        technical,
        artistic,
    })
}

/// Parse one whitespace token as a mark.
///
/// Edge punctuation is stripped, stray list commas included; an interior
/// ',' or '.' is the decimal mark. Any token containing a letter is a
/// separator, and a token mixing ',' and '.' (thousands notation) is
/// noise, not a mark.
fn parse_mark(token: &str) -> Option<f64> {
    let trimmed =
        token.trim_matches(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '-')));
    if trimmed.is_empty() || trimmed.chars().any(|c| c.is_alphabetic()) {
        return None;
    }

    if trimmed.contains(',') && trimmed.contains('.') {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse().ok()
}
