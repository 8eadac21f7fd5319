use crate::cd::Frame;

/// Characters separating fields and trimmed from the ends of every line.
pub const DELIMITERS: &[char] = &['\t', '\r', '\n', ' '];

/// Reads the next field from `line` and advances it past the field.
///
/// A field starting with `"` or `'` runs to the next unescaped occurrence of the same
/// quote; a backslash takes the following character literally and is dropped from the
/// returned value. Any other field ends at the first space, which is consumed too.
pub fn read_field<'a>(line: &mut &'a str) -> String {
    let current: &'a str = *line;
    let rest = current.trim_start_matches(DELIMITERS);

    let Some(first) = rest.chars().next() else {
        *line = rest;
        return String::new();
    };

    if first == '"' || first == '\'' {
        let (value, after) = scan_quoted(&rest[first.len_utf8()..], first);
        *line = after;
        return value;
    }

    match rest.find(' ') {
        Some(pos) => {
            *line = &rest[pos + 1..];
            rest[..pos].to_string()
        }
        None => {
            *line = "";
            rest.to_string()
        }
    }
}

/// Unescapes a quoted body up to the closing `quote`, returning the value and whatever
/// follows the closing quote. An unterminated quote takes the rest of the input.
fn scan_quoted(body: &str, quote: char) -> (String, &str) {
    let mut value = String::with_capacity(body.len());
    let mut chars = body.char_indices();

    while let Some((pos, c)) = chars.next() {
        if c == quote {
            return (value, &body[pos + c.len_utf8()..]);
        }
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => value.push(c),
            }
            continue;
        }
        value.push(c);
    }

    (value, "")
}

pub fn read_uint(line: &mut &str) -> u32 {
    read_field(line).parse().unwrap_or(0)
}

pub fn read_int(line: &mut &str) -> i32 {
    read_field(line).parse().unwrap_or(0)
}

pub fn read_frame(line: &mut &str) -> Frame {
    read_field(line).parse().unwrap_or_default()
}

/// Text of a track TITLE/PERFORMER/SONGWRITER line. Quoted text goes through the
/// same unescaping as [`read_field`]; unquoted text is kept as written, spaces and all.
pub fn unquote_remainder(line: &str) -> String {
    let mut rest = line.trim_start_matches(DELIMITERS);
    if rest.starts_with(['"', '\'']) {
        read_field(&mut rest)
    } else {
        rest.to_string()
    }
}

/// Quotes `value` for output when it contains a delimiter or starts with a quote,
/// otherwise returns it as is.
pub fn format_string(value: &str) -> String {
    if value.contains(DELIMITERS) || value.starts_with(['"', '\'']) {
        quote(value, '"')
    } else {
        value.to_string()
    }
}

pub fn quote(value: &str, quote: char) -> String {
    let mut quoted = String::with_capacity(value.len() * 3 / 2 + 2);
    quoted.push(quote);
    for c in value.chars() {
        if c == quote || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push(quote);
    quoted
}

/// Track and index numbers are written with at least two digits.
pub fn format_number(n: u32) -> String {
    format!("{:02}", n)
}
