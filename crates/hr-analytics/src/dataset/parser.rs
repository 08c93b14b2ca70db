use std::io::Read;

use crate::workforce::EmployeeRecord;

/// Deserialize every row of an employee CSV export. Columns the record does not know about
/// (`EmployeeCount`, `Over18`) are ignored.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<EmployeeRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<EmployeeRecord>()
        .collect::<Result<Vec<_>, _>>()
}
