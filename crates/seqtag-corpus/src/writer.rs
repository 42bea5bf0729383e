//! Writing sentences back out in the tab-separated corpus format.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{CorpusError, Result};
use crate::reader::Sentence;

/// Create `path` and its parents if they do not exist yet.
pub fn prepare_folder<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "creating output folder");
        fs::create_dir_all(path).map_err(|e| CorpusError::io(e, Some(path.to_path_buf())))?;
    }
    Ok(())
}

/// Write sentences as `token<TAB>label` lines, each sentence followed by a blank line.
pub fn write_sentences<'a, W, I>(writer: &mut W, sentences: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Sentence>,
{
    for sentence in sentences {
        if sentence.tokens.len() != sentence.labels.len() {
            return Err(CorpusError::LengthMismatch {
                tokens: sentence.tokens.len(),
                labels: sentence.labels.len(),
            });
        }
        for (token, label) in sentence.pairs() {
            writeln!(writer, "{token}\t{label}").map_err(|e| CorpusError::io(e, None))?;
        }
        writeln!(writer).map_err(|e| CorpusError::io(e, None))?;
    }
    Ok(())
}

/// Write the sentences selected by `indices`, in that order, to `path`.
pub fn save_data<P: AsRef<Path>>(path: P, sentences: &[Sentence], indices: &[usize]) -> Result<()> {
    if let Some(&index) = indices.iter().find(|&&i| i >= sentences.len()) {
        return Err(CorpusError::IndexOutOfRange {
            index,
            len: sentences.len(),
        });
    }
    write_file(path.as_ref(), indices.iter().map(|&i| &sentences[i]))
}

/// Write every sentence to `path`.
pub fn save_all<P: AsRef<Path>>(path: P, sentences: &[Sentence]) -> Result<()> {
    write_file(path.as_ref(), sentences)
}

fn write_file<'a, I>(path: &Path, sentences: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Sentence>,
{
    let io_err = |e| CorpusError::io(e, Some(path.to_path_buf()));
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_sentences(&mut writer, sentences).map_err(|e| match e {
        CorpusError::Io { source, path: None } => io_err(source),
        other => other,
    })?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
