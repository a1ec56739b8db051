//! Delimited text table with the fixed three-column header.

use std::io::{self, Write};

use impound_core::StageCurve;

/// The fixed header row of the exported table.
pub const TABLE_HEADER: &str = "Area (m2),Height (m),Volume (m3)";

/// Write the curve as comma-delimited text: the fixed header followed
/// by one `area,height,volume` row per record.
pub fn write_table<W: Write>(curve: &StageCurve, mut out: W) -> io::Result<()> {
    writeln!(out, "{TABLE_HEADER}")?;
    for record in &curve.records {
        writeln!(out, "{},{},{}", record.area, record.height, record.volume)?;
    }
    Ok(())
}

/// The table as an in-memory string.
pub fn table_string(curve: &StageCurve) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    write_table(curve, &mut buf).expect("write to Vec");
    String::from_utf8(buf).expect("table is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use impound_core::StageRecord;

    fn curve() -> StageCurve {
        let mut c = StageCurve::default();
        c.push(StageRecord {
            area: 0.0,
            height: -1.0,
            volume: 0.0,
        });
        c.push(StageRecord {
            area: 25.5,
            height: 0.0,
            volume: 12.75,
        });
        c
    }

    #[test]
    fn header_then_one_row_per_record() {
        let text = table_string(&curve());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(lines[1], "0,-1,0");
        assert_eq!(lines[2], "25.5,0,12.75");
    }

    #[test]
    fn empty_curve_is_header_only() {
        let text = table_string(&StageCurve::default());
        assert_eq!(text.trim_end(), TABLE_HEADER);
    }
}
