use crate::cue::error::CueResult;
use crate::cue::field::{DELIMITERS, read_field, read_frame, read_uint, unquote_remainder};
use crate::cue::lines::LineReader;
use crate::cue::models::{CueFile, CueSheet, Track, TrackFlags, TrackIndex};
use log::{debug, trace};
use std::io::BufRead;

const TRACK_INDENT: &str = "  ";
const ATTRIBUTE_INDENT: &str = "    ";

/// Reads disc level commands until the end of the stream.
pub fn read_disc<R: BufRead>(lines: &mut LineReader<R>) -> CueResult<CueSheet> {
    let mut cue_sheet = CueSheet::default();

    while let Some(line) = lines.next_line()? {
        let mut rest = line.trim_matches(DELIMITERS);
        let command = read_field(&mut rest);

        match command.as_str() {
            "REM" => cue_sheet.rem.push(rest.to_string()),
            "CATALOG" => cue_sheet.catalog = rest.to_string(),
            "CDTEXTFILE" => cue_sheet.cd_text_file = read_field(&mut rest),
            "TITLE" => cue_sheet.title = read_field(&mut rest),
            "PERFORMER" => cue_sheet.performer = read_field(&mut rest),
            "SONGWRITER" => cue_sheet.songwriter = read_field(&mut rest),
            "PREGAP" => cue_sheet.pregap = read_frame(&mut rest),
            "POSTGAP" => cue_sheet.postgap = read_frame(&mut rest),
            "FILE" => {
                let name = read_field(&mut rest);
                let file_type = read_field(&mut rest);
                debug!("Reading tracks of file {:?} ({})", name, file_type);

                let tracks = read_tracks(lines)?;
                cue_sheet.files.push(CueFile {
                    name,
                    file_type,
                    tracks,
                });
            }
            _ => trace!(
                "Ignoring line {}: unknown command {:?}",
                lines.line_number(),
                command
            ),
        }
    }

    Ok(cue_sheet)
}

/// Reads the two-space indented `TRACK` blocks following a `FILE` line.
///
/// The first line without the indent is handed back to the disc level. An unknown
/// command at track level ends the block and that line is consumed.
fn read_tracks<R: BufRead>(lines: &mut LineReader<R>) -> CueResult<Vec<Track>> {
    let mut tracks = Vec::new();

    while let Some(line) = lines.next_line()? {
        if !line.starts_with(TRACK_INDENT) {
            lines.unread(line);
            break;
        }

        let mut rest = line.trim_matches(DELIMITERS);
        let command = read_field(&mut rest);

        match command.as_str() {
            "TRACK" => {
                let number = read_uint(&mut rest);
                let data_type = read_field(&mut rest);
                let mut track = Track::new(number, data_type);
                read_track_attributes(lines, &mut track)?;
                tracks.push(track);
            }
            _ => {
                debug!(
                    "Dropping line {}: {:?} ends the track block",
                    lines.line_number(),
                    command
                );
                break;
            }
        }
    }

    Ok(tracks)
}

/// Reads the four-space indented attributes of one track, with the same block
/// ending rules as [`read_tracks`].
fn read_track_attributes<R: BufRead>(
    lines: &mut LineReader<R>,
    track: &mut Track,
) -> CueResult<()> {
    while let Some(line) = lines.next_line()? {
        if !line.starts_with(ATTRIBUTE_INDENT) {
            lines.unread(line);
            break;
        }

        let mut rest = line.trim_matches(DELIMITERS);
        let command = read_field(&mut rest);

        match command.as_str() {
            "FLAGS" => {
                track.flags = TrackFlags::default();
                while !rest.is_empty() {
                    let token = read_field(&mut rest);
                    if !track.flags.set_token(&token) {
                        trace!("Ignoring unknown flag {:?}", token);
                    }
                }
            }
            "ISRC" => track.isrc = rest.to_string(),
            "TITLE" => track.title = unquote_remainder(rest),
            "PERFORMER" => track.performer = unquote_remainder(rest),
            "SONGWRITER" => track.songwriter = unquote_remainder(rest),
            "PREGAP" => track.pregap = read_frame(&mut rest),
            "POSTGAP" => track.postgap = read_frame(&mut rest),
            "INDEX" => {
                let number = read_uint(&mut rest);
                let frame = read_frame(&mut rest);
                track.indexes.push(TrackIndex { number, frame });
            }
            _ => {
                debug!(
                    "Dropping line {}: {:?} ends the attributes of track {}",
                    lines.line_number(),
                    command,
                    track.number
                );
                break;
            }
        }
    }

    Ok(())
}
