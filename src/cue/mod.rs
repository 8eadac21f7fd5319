use crate::cue::error::{CueError, CueResult};
use crate::cue::lines::LineReader;
use crate::cue::models::CueSheet;
use log::debug;
use std::fmt;
use std::io::{BufRead, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;

pub mod error;
pub mod field;
pub mod lines;
pub mod models;
mod reader;
mod writer;

/// Parses a complete cue sheet from `reader`.
///
/// Malformed content never fails: unknown commands are skipped and bad numbers read
/// as zero. Only I/O errors from the underlying reader are returned.
pub fn read_cue_sheet<R: BufRead>(reader: R) -> CueResult<CueSheet> {
    let mut lines = LineReader::new(reader);
    let cue_sheet = reader::read_disc(&mut lines)?;
    debug!(
        "Read {} line(s): {} file(s), {} track(s)",
        lines.line_number(),
        cue_sheet.files.len(),
        cue_sheet.tracks().count()
    );
    Ok(cue_sheet)
}

/// Writes `cue_sheet` in canonical form. The writer is flushed but not closed.
pub fn write_cue_sheet<W: Write>(output: &mut W, cue_sheet: &CueSheet) -> CueResult<()> {
    let mut out = BufWriter::new(output);
    for line in writer::cue_lines(cue_sheet) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

pub fn parse_cue_sheet(text: &str) -> CueResult<CueSheet> {
    read_cue_sheet(text.as_bytes())
}

pub fn render_cue_sheet(cue_sheet: &CueSheet) -> String {
    cue_sheet.to_string()
}

impl FromStr for CueSheet {
    type Err = CueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cue_sheet(s)
    }
}

impl fmt::Display for CueSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in writer::cue_lines(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Reads a cue sheet from disk.
pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    pub async fn parse(&self) -> CueResult<CueSheet> {
        debug!("Parsing CUE file: {:?}", self.cue_path);
        let data = fs::read(&self.cue_path).await?;
        read_cue_sheet(Cursor::new(data))
    }
}

pub async fn read_cue_file(path: impl AsRef<Path>) -> CueResult<CueSheet> {
    CueParser::new(path).parse().await
}

/// Writes `cue_sheet` to `path`, refusing to replace an existing file unless `force`.
pub async fn write_cue_file(
    path: impl AsRef<Path>,
    cue_sheet: &CueSheet,
    force: bool,
) -> CueResult<()> {
    let path = path.as_ref();
    if fs::metadata(path).await.is_ok() && !force {
        return Err(CueError::OutputAlreadyExists(path.to_path_buf()));
    }

    let mut data = Vec::new();
    write_cue_sheet(&mut data, cue_sheet)?;

    debug!("Writing CUE file: {:?}", path);
    fs::write(path, data).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cd::Frame;
    use std::io;

    const EXAMPLE: &str = "REM DATE 2015\n\
                           TITLE \"Test Album\"\n\
                           FILE \"test.wav\" WAVE\n\
                           \x20 TRACK 01 AUDIO\n\
                           \x20   INDEX 01 00:00:00\n";

    #[test]
    fn parses_example_sheet() {
        let sheet = parse_cue_sheet(EXAMPLE).unwrap();

        assert_eq!(sheet.rem, ["DATE 2015"]);
        assert_eq!(sheet.title, "Test Album");
        assert_eq!(sheet.files.len(), 1);

        let file = &sheet.files[0];
        assert_eq!(file.name, "test.wav");
        assert_eq!(file.file_type, "WAVE");
        assert_eq!(file.tracks.len(), 1);

        let track = &file.tracks[0];
        assert_eq!(track.number, 1);
        assert_eq!(track.data_type, "AUDIO");
        assert_eq!(track.indexes.len(), 1);
        assert_eq!(track.indexes[0].number, 1);
        assert_eq!(track.indexes[0].frame, Frame::ZERO);
    }

    #[test]
    fn example_sheet_renders_back_unchanged_except_quoting() {
        let sheet: CueSheet = EXAMPLE.parse().unwrap();
        // test.wav has no whitespace so it loses its quotes
        let expected = EXAMPLE.replace("\"test.wav\"", "test.wav");
        assert_eq!(render_cue_sheet(&sheet), expected);
    }

    #[test]
    fn write_cue_sheet_matches_display() {
        let sheet = parse_cue_sheet(EXAMPLE).unwrap();
        let mut out = Vec::new();
        write_cue_sheet(&mut out, &sheet).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), sheet.to_string());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_errors_are_propagated() {
        let sheet = parse_cue_sheet(EXAMPLE).unwrap();
        let err = write_cue_sheet(&mut FailingWriter, &sheet).unwrap_err();
        assert!(matches!(err, CueError::IoError(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn read_errors_are_propagated() {
        let err = read_cue_sheet(FailingReader).unwrap_err();
        assert!(matches!(err, CueError::IoError(e) if e.kind() == io::ErrorKind::ConnectionReset));
    }

    #[test]
    fn latin1_sheet_parses() {
        let bytes = b"TITLE Caf\xe9\nPERFORMER Band\n".to_vec();
        let sheet = read_cue_sheet(Cursor::new(bytes)).unwrap();
        assert_eq!(sheet.title, "Caf\u{e9}");
        assert_eq!(sheet.performer, "Band");
    }
}
