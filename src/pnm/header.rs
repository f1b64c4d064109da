//! Line-oriented header parsing shared by all six variants.
//!
//! Blank lines and `#` comments may precede every header field and every
//! text pixel row. A `#` later in a line comments out the rest of it.

use crate::error::PnmError;
use crate::info::NetpbmFormat;

/// Parsed header (internal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PnmHeader {
    pub format: NetpbmFormat,
    pub width: u32,
    pub height: u32,
    /// 1 for bitmaps.
    pub maxval: u8,
    /// Offset of the first byte after the header's last line.
    pub data_offset: usize,
}

/// Cursor yielding one line at a time from a byte slice.
pub(crate) struct LineReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Next raw line without its `\n` / `\r\n` terminator.
    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        let (line, consumed) = match rest.iter().position(|&b| b == b'\n') {
            Some(nl) => (&rest[..nl], nl + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }

    /// Next line that is neither empty nor starts with `#`, returned
    /// untrimmed.
    pub fn next_row(&mut self) -> Option<&'a [u8]> {
        while let Some(line) = self.next_line() {
            if line.first().is_some_and(|&b| b != b'#') {
                return Some(line);
            }
        }
        None
    }

    /// Next line with content, comments stripped and whitespace trimmed.
    pub fn next_meaningful(&mut self) -> Option<&'a [u8]> {
        while let Some(line) = self.next_line() {
            let content = match line.iter().position(|&b| b == b'#') {
                Some(hash) => &line[..hash],
                None => line,
            };
            let content = content.trim_ascii();
            if !content.is_empty() {
                return Some(content);
            }
        }
        None
    }
}

/// Whitespace-separated tokens of a line.
pub(crate) fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
}

/// Unsigned decimal integer; `None` on anything else or overflow.
pub(crate) fn parse_uint(token: &[u8]) -> Option<u32> {
    if token.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for &b in token {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }
    Some(value)
}

fn display(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}

fn parse_dimension(token: &[u8], what: &str) -> Result<u32, PnmError> {
    match parse_uint(token) {
        Some(0) => Err(PnmError::InvalidDimensions(format!("{what} is zero"))),
        Some(v) => Ok(v),
        None => Err(PnmError::InvalidDimensions(format!(
            "{what} '{}' is not a positive integer",
            display(token)
        ))),
    }
}

fn parse_maxval(token: &[u8]) -> Result<u8, PnmError> {
    match parse_uint(token) {
        Some(0) => Err(PnmError::InvalidMaxValue("max value is zero".into())),
        Some(v) => u8::try_from(v).map_err(|_| {
            PnmError::InvalidMaxValue(format!("{v} exceeds 255 (only 8-bit samples supported)"))
        }),
        None => Err(PnmError::InvalidMaxValue(format!(
            "'{}' is not a positive integer",
            display(token)
        ))),
    }
}

/// Parse tag, dimensions and (grayscale/color) max value, leaving `reader`
/// at the first pixel line.
pub(crate) fn parse_header(reader: &mut LineReader<'_>) -> Result<PnmHeader, PnmError> {
    let tag_line = reader
        .next_meaningful()
        .ok_or_else(|| PnmError::InvalidHeader("missing format tag".into()))?;
    let mut tag_tokens = tokens(tag_line);
    let magic = tag_tokens
        .next()
        .ok_or_else(|| PnmError::InvalidHeader("missing format tag".into()))?;
    let format = NetpbmFormat::from_magic(magic).ok_or_else(|| {
        PnmError::InvalidHeader(format!("unrecognized format tag '{}'", display(magic)))
    })?;
    if tag_tokens.next().is_some() {
        return Err(PnmError::InvalidHeader(format!(
            "unexpected data after {format} tag"
        )));
    }

    let needs_maxval = format.kind().has_maxval();

    let dims_line = reader.next_meaningful().ok_or_else(|| {
        PnmError::InvalidDimensions("missing width and height".into())
    })?;
    let dims: Vec<&[u8]> = tokens(dims_line).collect();
    if dims.len() < 2 {
        return Err(PnmError::InvalidDimensions(format!(
            "expected width and height, found {} token(s)",
            dims.len()
        )));
    }
    let width = parse_dimension(dims[0], "width")?;
    let height = parse_dimension(dims[1], "height")?;

    let maxval = match (&dims[2..], needs_maxval) {
        ([], false) => 1,
        ([], true) => {
            let line = reader
                .next_meaningful()
                .ok_or_else(|| PnmError::InvalidMaxValue("missing max value".into()))?;
            let mut it = tokens(line);
            let token = it.next().unwrap_or_default();
            if it.next().is_some() {
                return Err(PnmError::InvalidMaxValue(format!(
                    "unexpected data after max value in '{}'",
                    display(line)
                )));
            }
            parse_maxval(token)?
        }
        ([maxval], true) => parse_maxval(maxval)?,
        (extra, _) => {
            return Err(PnmError::InvalidDimensions(format!(
                "{} unexpected token(s) after width and height",
                extra.len()
            )));
        }
    };

    let header = PnmHeader {
        format,
        width,
        height,
        maxval,
        data_offset: reader.position(),
    };
    log::debug!(
        "PNM header: {} {}x{} maxval {}",
        header.format,
        header.width,
        header.height,
        header.maxval
    );
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(data: &[u8]) -> Result<PnmHeader, PnmError> {
        parse_header(&mut LineReader::new(data))
    }

    #[test]
    fn comments_and_blank_lines_between_fields() {
        let data = b"# lead\nP2\n\n# size next\n  4 2 # trailing\n#\n\n15\nrest";
        let h = header(data).unwrap();
        assert_eq!(h.format, NetpbmFormat::PgmAscii);
        assert_eq!((h.width, h.height, h.maxval), (4, 2, 15));
        assert_eq!(&data[h.data_offset..], b"rest");
    }

    #[test]
    fn row_lines_keep_spaces_and_hashes() {
        let mut reader = LineReader::new(b"\n# skip\n 1#1 \r\n   \n");
        assert_eq!(reader.next_row(), Some(&b" 1#1 "[..]));
        assert_eq!(reader.next_row(), Some(&b"   "[..]));
        assert_eq!(reader.next_row(), None);
    }

    #[test]
    fn crlf_lines() {
        let h = header(b"P3\r\n2 1\r\n255\r\n").unwrap();
        assert_eq!((h.width, h.height, h.maxval), (2, 1, 255));
    }

    #[test]
    fn maxval_on_dimension_line() {
        let h = header(b"P6\n3 3 200\n").unwrap();
        assert_eq!(h.maxval, 200);
        assert!(matches!(
            header(b"P1\n3 3 1\n"),
            Err(PnmError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn bitmap_has_unit_maxval() {
        let h = header(b"P1\n5 3\n1 0 1 0 1\n").unwrap();
        assert_eq!(h.maxval, 1);
        assert_eq!(h.data_offset, 7);
    }

    #[test]
    fn header_errors() {
        assert!(matches!(header(b""), Err(PnmError::InvalidHeader(_))));
        assert!(matches!(header(b"# only\n\n"), Err(PnmError::InvalidHeader(_))));
        assert!(matches!(header(b"P9\n1 1\n"), Err(PnmError::InvalidHeader(_))));
        assert!(matches!(header(b"P1 1 1\n"), Err(PnmError::InvalidHeader(_))));
        assert!(matches!(header(b"P1\n5\n"), Err(PnmError::InvalidDimensions(_))));
        assert!(matches!(header(b"P1\n"), Err(PnmError::InvalidDimensions(_))));
        assert!(matches!(header(b"P1\n0 3\n"), Err(PnmError::InvalidDimensions(_))));
        assert!(matches!(header(b"P1\n-2 3\n"), Err(PnmError::InvalidDimensions(_))));
        assert!(matches!(header(b"P1\nfive 3\n"), Err(PnmError::InvalidDimensions(_))));
        assert!(matches!(header(b"P2\n2 2\n"), Err(PnmError::InvalidMaxValue(_))));
        assert!(matches!(header(b"P2\n2 2\n0\n"), Err(PnmError::InvalidMaxValue(_))));
        assert!(matches!(header(b"P2\n2 2\nmax\n"), Err(PnmError::InvalidMaxValue(_))));
        assert!(matches!(header(b"P3\n2 2\n65535\n"), Err(PnmError::InvalidMaxValue(_))));
    }

    #[test]
    fn parse_uint_rejects_signs_and_overflow() {
        assert_eq!(parse_uint(b"0042"), Some(42));
        assert_eq!(parse_uint(b"+1"), None);
        assert_eq!(parse_uint(b"99999999999"), None);
        assert_eq!(parse_uint(b""), None);
    }
}
