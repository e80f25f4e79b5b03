use crate::error::Result;
use solvsieve::core::io::dataset::PhysicalPropertyDataSet;
use std::path::Path;
use tracing::info;

/// Loads a data set, dispatching on the file extension: `.csv` is read as a
/// FreeSolv-style table, anything else as this crate's JSON form.
pub fn load_data_set(path: &Path) -> Result<PhysicalPropertyDataSet> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let data_set = if is_csv {
        PhysicalPropertyDataSet::from_csv_path(path)?
    } else {
        PhysicalPropertyDataSet::from_json_path(path)?
    };

    info!(
        path = %path.display(),
        properties = data_set.len(),
        "Loaded data set."
    );
    Ok(data_set)
}
