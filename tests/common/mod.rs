use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_orders_csv(path: &Path, rows: &[[&str; 2]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "final_value"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
