// src/cue/models
use crate::cd::Frame;
use crate::cue::field::read_field;
use serde::{Deserialize, Serialize};

/// A parsed cue sheet. Empty strings and zero frames mean the command was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueSheet {
    /// Raw text following each `REM`, in input order.
    pub rem: Vec<String>,
    pub catalog: String,
    pub cd_text_file: String,
    pub title: String,
    pub performer: String,
    pub songwriter: String,
    pub pregap: Frame,
    pub postgap: Frame,
    pub files: Vec<CueFile>,
}

impl CueSheet {
    /// All tracks across all files, in order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.files.iter().flat_map(|file| file.tracks.iter())
    }

    /// Value of the first `REM <key> <value>` comment, e.g. `DATE` or `GENRE`.
    pub fn rem_value(&self, key: &str) -> Option<String> {
        self.rem.iter().find_map(|rem| {
            let mut line = rem.as_str();
            if read_field(&mut line) == key {
                Some(read_field(&mut line))
            } else {
                None
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueFile {
    pub name: String,
    /// `BINARY`, `WAVE`, `MP3`, ... kept verbatim.
    pub file_type: String,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub number: u32,
    /// `AUDIO`, `MODE1/2048`, ... kept verbatim.
    pub data_type: String,
    pub flags: TrackFlags,
    pub isrc: String,
    pub title: String,
    pub performer: String,
    pub songwriter: String,
    pub pregap: Frame,
    pub postgap: Frame,
    pub indexes: Vec<TrackIndex>,
}

impl Track {
    pub fn new(number: u32, data_type: impl Into<String>) -> Self {
        Self {
            number,
            data_type: data_type.into(),
            ..Default::default()
        }
    }

    pub fn index(&self, number: u32) -> Option<&TrackIndex> {
        self.indexes.iter().find(|index| index.number == number)
    }

    /// Position of INDEX 01, where the track becomes audible.
    pub fn start(&self) -> Option<Frame> {
        self.index(1).map(|index| index.frame)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackIndex {
    pub number: u32,
    pub frame: Frame,
}

/// Subcode flags of a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackFlags {
    /// Digital copy permitted.
    pub dcp: bool,
    /// Four channel audio.
    pub four_ch: bool,
    /// Pre-emphasis enabled.
    pub pre: bool,
    /// Serial copy management system.
    pub scms: bool,
}

impl TrackFlags {
    pub fn is_empty(&self) -> bool {
        !(self.dcp || self.four_ch || self.pre || self.scms)
    }

    /// Tokens of the set flags, always in `DCP 4CH PRE SCMS` order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.dcp, "DCP"),
            (self.four_ch, "4CH"),
            (self.pre, "PRE"),
            (self.scms, "SCMS"),
        ]
        .into_iter()
        .filter_map(|(set, token)| set.then_some(token))
    }

    /// Sets the flag named by `token`. Returns `false` for an unknown token.
    pub fn set_token(&mut self, token: &str) -> bool {
        let flag = match token {
            "DCP" => &mut self.dcp,
            "4CH" => &mut self.four_ch,
            "PRE" => &mut self.pre,
            "SCMS" => &mut self.scms,
            _ => return false,
        };
        *flag = true;
        true
    }
}
