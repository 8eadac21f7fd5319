//! Reader and writer for CUE sheets, the text format describing the track layout of
//! optical disc images.
//!
//! ```
//! use cuesheet::{parse_cue_sheet, render_cue_sheet};
//!
//! let text = "TITLE \"Test Album\"\nFILE test.wav WAVE\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n";
//! let sheet = parse_cue_sheet(text).unwrap();
//! assert_eq!(sheet.files[0].tracks[0].number, 1);
//! assert_eq!(render_cue_sheet(&sheet), text);
//! ```
pub mod cd;
pub mod cue;

pub use cd::Frame;
pub use cue::error::{CueError, CueResult};
pub use cue::models::{CueFile, CueSheet, Track, TrackFlags, TrackIndex};
pub use cue::{
    CueParser, parse_cue_sheet, read_cue_file, read_cue_sheet, render_cue_sheet,
    write_cue_file, write_cue_sheet,
};
