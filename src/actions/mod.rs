use anyhow::Result;
use cuesheet::{CueSheet, read_cue_file, write_cue_file, write_cue_sheet};
use log::info;
use std::io::Write;
use std::path::Path;

pub async fn format_cue(input: &Path, output: Option<&Path>, force: bool) -> Result<()> {
    let cue_sheet = read_cue_file(input).await?;

    match output {
        Some(output) => {
            write_cue_file(output, &cue_sheet, force).await?;
            info!("Wrote {:?}", output);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_cue_sheet(&mut stdout, &cue_sheet)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub async fn show_info(input: &Path) -> Result<()> {
    let cue_sheet = read_cue_file(input).await?;

    for line in describe(&cue_sheet) {
        info!("{}", line);
    }

    Ok(())
}

pub async fn dump_json(input: &Path) -> Result<()> {
    let cue_sheet = read_cue_file(input).await?;
    println!("{}", serde_json::to_string_pretty(&cue_sheet)?);
    Ok(())
}

fn describe(cue_sheet: &CueSheet) -> Vec<String> {
    let mut lines = Vec::new();

    let disc = [
        ("Title", &cue_sheet.title),
        ("Performer", &cue_sheet.performer),
        ("Songwriter", &cue_sheet.songwriter),
        ("Catalog", &cue_sheet.catalog),
        ("CD-Text file", &cue_sheet.cd_text_file),
    ];
    for (label, value) in disc {
        if !value.is_empty() {
            lines.push(format!("{}: {}", label, value));
        }
    }
    for rem in &cue_sheet.rem {
        lines.push(format!("REM {}", rem));
    }

    for file in &cue_sheet.files {
        lines.push(format!(
            "File {} ({}), {} track(s)",
            file.name,
            file.file_type,
            file.tracks.len()
        ));
        for track in &file.tracks {
            let start = track
                .start()
                .map(|frame| frame.to_string())
                .unwrap_or_else(|| "--:--:--".to_string());
            let mut line = format!("  {:02} {:<10} {}", track.number, track.data_type, start);
            if !track.title.is_empty() {
                line.push_str(&format!(" {}", track.title));
            }
            lines.push(line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuesheet::parse_cue_sheet;

    #[test]
    fn describes_disc_and_tracks() {
        let cue_sheet = parse_cue_sheet(
            "REM DATE 2015\n\
             TITLE \"Test Album\"\n\
             FILE \"test.wav\" WAVE\n\
             \x20 TRACK 01 AUDIO\n\
             \x20   TITLE \"Intro\"\n\
             \x20   INDEX 01 00:00:00\n\
             \x20 TRACK 02 AUDIO\n",
        )
        .unwrap();

        assert_eq!(
            describe(&cue_sheet),
            [
                "Title: Test Album",
                "REM DATE 2015",
                "File test.wav (WAVE), 2 track(s)",
                "  01 AUDIO      00:00:00 Intro",
                "  02 AUDIO      --:--:--",
            ]
        );
    }
}
