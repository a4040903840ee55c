use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    error::{Error, Result},
    tf_idf::types::ResultSet,
};

const STDOUT_PATH: &str = "-";
const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

/// Serializes `results` as `{"id": [["word", score], ...]}`.
pub fn write_results<W: Write>(writer: W, results: &ResultSet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            let mut serializer =
                Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
            results.serialize(&mut serializer)?;
        }
        OutputFormat::Compact => serde_json::to_writer(writer, results)?,
    }

    Ok(())
}

/// Writes to `path`, or to stdout when `path` is `-`.
pub fn save_results(path: &Path, results: &ResultSet, format: OutputFormat) -> Result<()> {
    if path.as_os_str() == STDOUT_PATH {
        let mut writer = BufWriter::new(io::stdout().lock());
        write_results(&mut writer, results, format)?;
        writeln!(writer)?;
        writer.flush()?;
        return Ok(());
    }

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_results(&mut writer, results, format)?;
    writer.flush().map_err(|e| Error::io(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tf_idf::types::ScoredWord;

    fn results() -> ResultSet {
        let mut results = ResultSet::new();
        results.insert(
            "b.json".to_string(),
            vec![
                ScoredWord::new("fish".to_string(), 0.0),
                ScoredWord::new("cat".to_string(), -0.25),
            ],
        );
        results.insert("a.json".to_string(), Vec::new());
        results
    }

    fn render(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_results(&mut buffer, &results(), format).expect("Failed to write results");
        String::from_utf8(buffer).expect("Output is not UTF-8")
    }

    #[test]
    fn compact_output_keeps_input_order() {
        assert_eq!(
            render(OutputFormat::Compact),
            r#"{"b.json":[["fish",0.0],["cat",-0.25]],"a.json":[]}"#
        );
    }

    #[test]
    fn pretty_output_uses_four_space_indent() {
        let rendered = render(OutputFormat::Pretty);

        assert!(rendered.starts_with("{\n    \"b.json\": [\n        [\n            \"fish\","));
        assert!(rendered.contains("\"a.json\": []"));
    }

    #[test]
    fn round_trips_through_json() {
        let parsed: ResultSet =
            serde_json::from_str(&render(OutputFormat::Pretty)).expect("Failed to parse output");

        assert_eq!(parsed, results());
    }

    #[test]
    fn saves_to_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.json");

        save_results(&path, &results(), OutputFormat::Compact).expect("Failed to save results");

        assert_eq!(
            std::fs::read_to_string(&path).expect("Failed to read output"),
            render(OutputFormat::Compact)
        );
    }
}
