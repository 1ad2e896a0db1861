use crate::db::{CompilationRecord, Database};
use crate::error::{Error, Result};
use crate::parse;
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read build output from each of `paths`, or from stdin when there are none.
pub fn read_inputs(paths: &[PathBuf]) -> Result<Vec<String>> {
    if paths.is_empty() {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .map_err(|e| Error::io(Path::new("<stdin>"), e))?;
        return Ok(vec![s]);
    }

    paths
        .iter()
        .map(|path| std::fs::read_to_string(path).map_err(|e| Error::io(path, e)))
        .collect()
}

/// Build one compilation database from several build logs.
///
/// Each log gets its own parser, so directory state never leaks between
/// logs. Records keep the order of the logs and of the lines within them.
pub fn build_database(inputs: &[String]) -> Result<Database> {
    if inputs.iter().all(|s| s.trim().is_empty()) {
        return Err(Error::EmptyInput);
    }

    // logs are independent, so parse them in parallel; collect keeps order
    let parsed: Vec<Vec<CompilationRecord>> = inputs
        .par_iter()
        .map(|input| parse::parse(input.trim()))
        .collect();

    for (n, records) in parsed.iter().enumerate() {
        debug!(input = n, records = records.len(), "parsed build output");
    }

    Ok(Database::new(parsed.into_iter().flatten().collect()))
}
