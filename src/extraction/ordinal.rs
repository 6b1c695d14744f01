/// Ordinal used when a label carries no `<n>st`/`<n>nd`/`<n>rd`/`<n>th` token.
pub const DEFAULT_ORDINAL: u32 = 1;

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// Read the marker ordinal out of an extension label.
///
/// The label is scanned for maximal runs of ASCII digits. The first run that
/// is immediately followed by an English ordinal suffix (any case) gives the
/// ordinal, so `StartNoInterference2nd_Wheel1` is 2. Labels without such a
/// run get [`DEFAULT_ORDINAL`]; a number too large for `u32` saturates.
pub fn ordinal_of(label: &str) -> u32 {
    digit_runs(label)
        .find(|(_, end)| has_ordinal_suffix(&label[*end..]))
        .map(|(start, end)| label[start..end].parse().unwrap_or(u32::MAX))
        .unwrap_or(DEFAULT_ORDINAL)
}

fn has_ordinal_suffix(rest: &str) -> bool {
    rest.get(..2).is_some_and(|head| {
        ORDINAL_SUFFIXES
            .iter()
            .any(|suffix| head.eq_ignore_ascii_case(suffix))
    })
}

/// Byte ranges of maximal ASCII digit runs, left to right
pub(crate) fn digit_runs(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = text.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() && !bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos >= bytes.len() {
            return None;
        }
        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        Some((start, pos))
    })
}

/// Leading ASCII digits of `text`, if any
pub(crate) fn leading_digits(text: &str) -> Option<&str> {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    (end > 0).then(|| &text[..end])
}
