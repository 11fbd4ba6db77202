use crate::error::{BikeshareError, Result};
use crate::filter;
use crate::models::{FilterSelection, Trip, TripTable};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Read a trip CSV (header row required) into a [`TripTable`].
///
/// `Gender` and `Birth Year` are optional columns; their presence is recorded
/// on the table so reporters can tell "column missing" from "all values blank".
pub fn load_trips<P: AsRef<Path>>(path: P) -> Result<TripTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            BikeshareError::DatasetNotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            BikeshareError::Io(source)
        }
    })?;
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let headers = rdr.headers()?.clone();
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let trips = rdr
        .deserialize::<Trip>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(TripTable {
        trips,
        has_gender,
        has_birth_year,
    })
}

/// Load the dataset for `selection.city` from `data_dir` and apply the month/day filters.
///
/// A missing file is reported on `out` with a hint about the data directory and
/// then returned as [`BikeshareError::DatasetNotFound`].
pub fn load_data<P: AsRef<Path>, W: Write>(
    data_dir: P,
    selection: &FilterSelection,
    out: &mut W,
) -> Result<TripTable> {
    let path = data_dir.as_ref().join(selection.city.file_name());
    log::debug!("filter selection: {selection:?}");

    let table = match load_trips(&path) {
        Ok(t) => t,
        Err(e @ BikeshareError::DatasetNotFound { .. }) => {
            log::error!("{e}");
            writeln!(
                out,
                "Unable to open file \"{}\", do you have the needed CSV/data files \
                 in your path? Original error \"{e}\"",
                path.display(),
            )?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };
    log::info!("loaded {} trips from {}", table.len(), path.display());

    let filtered = filter::apply(table, selection.month, selection.day);
    log::info!("{} trips after filtering", filtered.len());
    Ok(filtered)
}
