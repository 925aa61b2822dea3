use crate::error::Result;
use crate::snapshot::OrderedSnapshot;

pub fn to_csv(snapshot: &OrderedSnapshot, mut w: impl std::io::Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut w);
    writer.write_record(["name", "value"])?;
    for (name, value) in snapshot.iter() {
        writer.write_record([name, value.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
