use crate::cd::Frame;
use crate::cue::field::{format_number, format_string};
use crate::cue::models::{CueFile, CueSheet, Track};

const TRACK_INDENT: &str = "  ";
const ATTRIBUTE_INDENT: &str = "    ";

/// Canonical lines of `cue_sheet`, without line terminators.
///
/// Empty strings and zero gaps are left out; everything else is written in a fixed
/// order regardless of the order it was read in.
pub fn cue_lines(cue_sheet: &CueSheet) -> Vec<String> {
    let mut lines = Vec::new();

    for rem in &cue_sheet.rem {
        lines.push(format!("REM {}", rem));
    }

    if !cue_sheet.catalog.is_empty() {
        lines.push(format!("CATALOG {}", cue_sheet.catalog));
    }

    push_string(&mut lines, "", "CDTEXTFILE", &cue_sheet.cd_text_file);
    push_string(&mut lines, "", "TITLE", &cue_sheet.title);
    push_string(&mut lines, "", "PERFORMER", &cue_sheet.performer);
    push_string(&mut lines, "", "SONGWRITER", &cue_sheet.songwriter);
    push_frame(&mut lines, "", "PREGAP", cue_sheet.pregap);
    push_frame(&mut lines, "", "POSTGAP", cue_sheet.postgap);

    for file in &cue_sheet.files {
        push_file(&mut lines, file);
    }

    lines
}

fn push_file(lines: &mut Vec<String>, file: &CueFile) {
    lines.push(format!(
        "FILE {} {}",
        format_string(&file.name),
        file.file_type
    ));

    for track in &file.tracks {
        push_track(lines, track);
    }
}

fn push_track(lines: &mut Vec<String>, track: &Track) {
    lines.push(format!(
        "{}TRACK {} {}",
        TRACK_INDENT,
        format_number(track.number),
        track.data_type
    ));

    if !track.flags.is_empty() {
        let flags: Vec<&str> = track.flags.tokens().collect();
        lines.push(format!("{}FLAGS {}", ATTRIBUTE_INDENT, flags.join(" ")));
    }

    if !track.isrc.is_empty() {
        lines.push(format!("{}ISRC {}", ATTRIBUTE_INDENT, track.isrc));
    }

    push_string(lines, ATTRIBUTE_INDENT, "TITLE", &track.title);
    push_string(lines, ATTRIBUTE_INDENT, "PERFORMER", &track.performer);
    push_string(lines, ATTRIBUTE_INDENT, "SONGWRITER", &track.songwriter);
    push_frame(lines, ATTRIBUTE_INDENT, "PREGAP", track.pregap);
    push_frame(lines, ATTRIBUTE_INDENT, "POSTGAP", track.postgap);

    for index in &track.indexes {
        lines.push(format!(
            "{}INDEX {} {}",
            ATTRIBUTE_INDENT,
            format_number(index.number),
            index.frame
        ));
    }
}

fn push_string(lines: &mut Vec<String>, indent: &str, command: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{}{} {}", indent, command, format_string(value)));
    }
}

fn push_frame(lines: &mut Vec<String>, indent: &str, command: &str, frame: Frame) {
    if !frame.is_zero() {
        lines.push(format!("{}{} {}", indent, command, frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::models::{TrackFlags, TrackIndex};

    #[test]
    fn empty_sheet_has_no_lines() {
        assert!(cue_lines(&CueSheet::default()).is_empty());
    }

    #[test]
    fn writes_disc_commands_in_fixed_order() {
        let sheet = CueSheet {
            rem: vec!["DATE 2015".to_string(), "GENRE Rock".to_string()],
            catalog: "1234567890123".to_string(),
            cd_text_file: "disc.cdt".to_string(),
            title: "Test Album".to_string(),
            performer: "Band".to_string(),
            songwriter: "Writer Person".to_string(),
            pregap: Frame(150),
            postgap: Frame(75),
            files: Vec::new(),
        };

        assert_eq!(
            cue_lines(&sheet),
            [
                "REM DATE 2015",
                "REM GENRE Rock",
                "CATALOG 1234567890123",
                "CDTEXTFILE disc.cdt",
                "TITLE \"Test Album\"",
                "PERFORMER Band",
                "SONGWRITER \"Writer Person\"",
                "PREGAP 00:02:00",
                "POSTGAP 00:01:00",
            ]
        );
    }

    #[test]
    fn writes_tracks_with_indentation() {
        let mut track = Track::new(2, "MODE1/2048");
        track.flags = TrackFlags {
            dcp: true,
            four_ch: false,
            pre: true,
            scms: true,
        };
        track.isrc = "ABCDE1234567".to_string();
        track.title = "Say \"Hi\" Now".to_string();
        track.pregap = Frame(150);
        track.indexes = vec![
            TrackIndex {
                number: 0,
                frame: Frame(2565),
            },
            TrackIndex {
                number: 1,
                frame: Frame(2715),
            },
        ];

        let sheet = CueSheet {
            files: vec![CueFile {
                name: "my image.bin".to_string(),
                file_type: "BINARY".to_string(),
                tracks: vec![track],
            }],
            ..Default::default()
        };

        assert_eq!(
            cue_lines(&sheet),
            [
                "FILE \"my image.bin\" BINARY",
                "  TRACK 02 MODE1/2048",
                "    FLAGS DCP PRE SCMS",
                "    ISRC ABCDE1234567",
                "    TITLE \"Say \\\"Hi\\\" Now\"",
                "    PREGAP 00:02:00",
                "    INDEX 00 00:34:15",
                "    INDEX 01 00:36:15",
            ]
        );
    }

    #[test]
    fn zero_gaps_and_empty_flags_are_omitted() {
        let mut track = Track::new(1, "AUDIO");
        track.pregap = Frame::ZERO;
        track.postgap = Frame::ZERO;

        let sheet = CueSheet {
            files: vec![CueFile {
                name: "a.wav".to_string(),
                file_type: "WAVE".to_string(),
                tracks: vec![track],
            }],
            ..Default::default()
        };

        assert_eq!(cue_lines(&sheet), ["FILE a.wav WAVE", "  TRACK 01 AUDIO"]);
    }
}
