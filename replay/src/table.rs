use std::io;

use eloboard::{AnnotatedMatch, MatchRecord, Ranking};
use tracing::debug;

use crate::{
    record::{AnnotatedRow, RankingRow, RawMatch},
    Error,
};

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

/// Reads the match schedule, in file order. Fails on the first row that
/// does not fit the schema.
pub fn read_matches<R: io::Read>(reader: R) -> Result<Vec<MatchRecord>, Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut matches = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);
        let raw: RawMatch = record.deserialize(Some(&headers))?;
        matches.push(raw.into_record(line)?);
    }

    debug!(matches = matches.len(), "read match schedule");
    Ok(matches)
}

/// Writes the rated match history.
///
/// The output is normalized rather than a copy of the input rows: only the
/// schedule columns are kept, `scheduled` is written as RFC 3339 UTC, and
/// missing scores of open matches are written as `0`.
pub fn write_annotated<W: io::Write>(writer: W, annotated: &[AnnotatedMatch]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for m in annotated {
        writer.serialize(AnnotatedRow::from(m))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a rated match history previously written by [`write_annotated`].
pub fn read_annotated<R: io::Read>(reader: R) -> Result<Vec<AnnotatedMatch>, Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut annotated = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);
        let row: AnnotatedRow = record.deserialize(Some(&headers))?;
        annotated.push(row.into_annotated(line)?);
    }

    debug!(matches = annotated.len(), "read rated matches");
    Ok(annotated)
}

pub fn write_ranking<W: io::Write>(writer: W, ranking: &Ranking) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for entry in ranking.entries() {
        writer.serialize(RankingRow::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}
