use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use dashboard_core::{SURVEY_QUESTION_COUNT, SurveyAnswer};
use metrics::{join_record, split_record};

use crate::error::Result;

pub const SURVEY_FILE_NAME: &str = "survey_answers.csv";

const SURVEY_HEADER: [&str; 5] = ["key", "q1", "q2", "q3", "q4"];

/// Flat-CSV store for survey answers, one row per submission.
///
/// The file is created lazily on first append. Edits rewrite every row
/// matching the key; delete removes only the first matching row.
pub struct SurveyStore {
    path: PathBuf,
}

impl SurveyStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all rows in file order. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<SurveyAnswer>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut answers = Vec::new();
        for line in BufReader::new(file).lines().skip(1) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut cells = split_record(&line);
            cells.resize(1 + SURVEY_QUESTION_COUNT, String::new());
            let mut cells = cells.into_iter();
            let key = cells.next().unwrap_or_default();
            let answers_row: [String; SURVEY_QUESTION_COUNT] =
                std::array::from_fn(|_| cells.next().unwrap_or_default());
            answers.push(SurveyAnswer {
                key,
                answers: answers_row,
            });
        }
        Ok(answers)
    }

    /// Last submission wins when a key appears more than once.
    pub fn answers_by_key(&self) -> Result<BTreeMap<String, SurveyAnswer>> {
        let mut map = BTreeMap::new();
        for answer in self.load()? {
            map.insert(answer.key.clone(), answer);
        }
        Ok(map)
    }

    pub fn append(&self, answer: &SurveyAnswer) -> Result<()> {
        let file_exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        if !file_exists {
            writeln!(writer, "{}", join_record(SURVEY_HEADER))?;
        }
        writeln!(writer, "{}", record_line(answer))?;
        writer.flush()?;
        Ok(())
    }

    /// Updates every row matching `key`. Returns whether any row changed.
    pub fn edit(&self, key: &str, answers: &[String; SURVEY_QUESTION_COUNT]) -> Result<bool> {
        let mut rows = self.load()?;
        let mut changed = false;
        for row in rows.iter_mut() {
            if row.key == key {
                row.answers = answers.clone();
                changed = true;
            }
        }
        if changed {
            self.rewrite(&rows)?;
        }
        Ok(changed)
    }

    /// Removes the first row matching `key`. Returns whether a row was
    /// removed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let mut rows = self.load()?;
        let Some(index) = rows.iter().position(|row| row.key == key) else {
            return Ok(false);
        };
        rows.remove(index);
        self.rewrite(&rows)?;
        Ok(true)
    }

    fn rewrite(&self, rows: &[SurveyAnswer]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", join_record(SURVEY_HEADER))?;
        for row in rows {
            writeln!(writer, "{}", record_line(row))?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn record_line(answer: &SurveyAnswer) -> String {
    let mut fields = vec![answer.key.as_str()];
    fields.extend(answer.answers.iter().map(|value| value.as_str()));
    join_record(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn answer(key: &str, first: &str) -> SurveyAnswer {
        SurveyAnswer {
            key: key.to_string(),
            answers: [
                first.to_string(),
                "Never".to_string(),
                "Neutral".to_string(),
                "Well".to_string(),
            ],
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempdir().expect("temp dir");
        let store = SurveyStore::new(dir.path().join(SURVEY_FILE_NAME));
        assert!(store.load().expect("load").is_empty());
    }

    #[test]
    fn append_creates_header_then_appends() {
        let dir = tempdir().expect("temp dir");
        let store = SurveyStore::new(dir.path().join(SURVEY_FILE_NAME));
        store.append(&answer("ana", "<1 day")).expect("append ana");
        store.append(&answer("ben", "1 week")).expect("append ben");

        let contents = std::fs::read_to_string(store.path()).expect("read");
        assert!(contents.starts_with("key,q1,q2,q3,q4\n"));
        let rows = store.load().expect("load");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "ana");
        assert_eq!(rows[1].answers[0], "1 week");
    }

    #[test]
    fn edit_updates_every_matching_row() {
        let dir = tempdir().expect("temp dir");
        let store = SurveyStore::new(dir.path().join(SURVEY_FILE_NAME));
        store.append(&answer("ana", "<1 day")).expect("append");
        store.append(&answer("ana", "1 week")).expect("append dup");
        store.append(&answer("ben", "1 week")).expect("append ben");

        let updated = answer("ana", "2+ weeks").answers;
        assert!(store.edit("ana", &updated).expect("edit"));

        let rows = store.load().expect("load");
        assert_eq!(rows[0].answers[0], "2+ weeks");
        assert_eq!(rows[1].answers[0], "2+ weeks");
        assert_eq!(rows[2].answers[0], "1 week");
    }

    #[test]
    fn edit_unknown_key_changes_nothing() {
        let dir = tempdir().expect("temp dir");
        let store = SurveyStore::new(dir.path().join(SURVEY_FILE_NAME));
        store.append(&answer("ana", "<1 day")).expect("append");
        let attempted = answer("zed", "Never").answers;
        assert!(!store.edit("zed", &attempted).expect("edit"));
    }

    #[test]
    fn delete_removes_only_first_occurrence() {
        let dir = tempdir().expect("temp dir");
        let store = SurveyStore::new(dir.path().join(SURVEY_FILE_NAME));
        store.append(&answer("ana", "<1 day")).expect("append");
        store.append(&answer("ana", "1 week")).expect("append dup");

        assert!(store.delete("ana").expect("delete"));
        let rows = store.load().expect("load");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].answers[0], "1 week");

        assert!(!store.delete("zed").expect("delete missing"));
    }

    #[test]
    fn keys_with_commas_round_trip() {
        let dir = tempdir().expect("temp dir");
        let store = SurveyStore::new(dir.path().join(SURVEY_FILE_NAME));
        store
            .append(&answer("Doe, Jane", "<1 day"))
            .expect("append");
        let rows = store.load().expect("load");
        assert_eq!(rows[0].key, "Doe, Jane");
    }

    #[test]
    fn duplicate_keys_collapse_last_write_wins() {
        let dir = tempdir().expect("temp dir");
        let store = SurveyStore::new(dir.path().join(SURVEY_FILE_NAME));
        store.append(&answer("ana", "<1 day")).expect("append");
        store.append(&answer("ana", "1 week")).expect("append dup");
        let map = store.answers_by_key().expect("map");
        assert_eq!(map.len(), 1);
        assert_eq!(map["ana"].answers[0], "1 week");
    }
}
