//! Tabular export of a [`Design`].
//!
//! The CSV layout is three columns wide throughout. With `header = true` a
//! parameter block precedes the table; only the three lengths come from the
//! run, the filtering rows are fixed placeholders because no filtering is
//! performed:
//!
//! ```text
//! Parameters and output for Gene Primer/Probe Design,,
//! Parameters,,
//! Primer Length,32bp,
//! Probe Length,54bp,
//! Amplicon length,190bp,
//! Min GC content,30%,
//! Max GC content,70%,
//! Tolerated self binding region,5,
//! Tolerated secondary structure region,6,
//! Tolerate background binding bases,N/A,
//! Number of background files checked,N/A,
//!
//! Forward_Primer,Probe,Reverse_Primer
//! ...
//! ```
use std::io::Write;

use anyhow::Result;

use crate::design::Design;
use crate::params::WindowParameters;
use crate::scan::Triplet;

/// Column names of the triplet table.
pub const COLUMNS: [&str; 3] = ["Forward_Primer", "Probe", "Reverse_Primer"];

const TITLE: &str = "Parameters and output for Gene Primer/Probe Design";

const PLACEHOLDER_ROWS: [(&str, &str); 6] = [
    ("Min GC content", "30%"),
    ("Max GC content", "70%"),
    ("Tolerated self binding region", "5"),
    ("Tolerated secondary structure region", "6"),
    ("Tolerate background binding bases", "N/A"),
    ("Number of background files checked", "N/A"),
];

/// File name offered for a record's CSV: `{id}_primers_probes.csv`.
pub fn default_output_name(id: &str) -> String {
    format!("{id}_primers_probes.csv")
}

/// The parameter block rows (without the trailing blank row).
pub fn parameter_rows(params: &WindowParameters) -> Vec<[String; 3]> {
    let mut rows = vec![
        [TITLE.to_string(), String::new(), String::new()],
        ["Parameters".to_string(), String::new(), String::new()],
        ["Primer Length".to_string(), format!("{}bp", params.primer_length), String::new()],
        ["Probe Length".to_string(), format!("{}bp", params.probe_length), String::new()],
        ["Amplicon length".to_string(), format!("{}bp", params.amplicon_length), String::new()],
    ];
    rows.extend(
        PLACEHOLDER_ROWS
            .iter()
            .map(|(k, v)| [k.to_string(), v.to_string(), String::new()]),
    );
    rows
}

fn csv_writer<W: Write>(w: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(w)
}

/// Write triplets as CSV, optionally preceded by the parameter block.
pub fn write_csv<W: Write>(mut w: W, params: &WindowParameters, triplets: &[Triplet], header: bool) -> Result<()> {
    if header {
        let mut wtr = csv_writer(&mut w);
        for row in parameter_rows(params) {
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        drop(wtr);
        // csv writes an empty record as `""`; the separator is a bare line break.
        w.write_all(b"\r\n")?;
    }
    let mut wtr = csv_writer(&mut w);
    wtr.write_record(COLUMNS)?;
    for t in triplets {
        wtr.write_record([t.forward_primer.as_str(), t.probe.as_str(), t.reverse_primer.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_csv`] for a whole [`Design`].
pub fn write_design_csv<W: Write>(w: W, design: &Design, header: bool) -> Result<()> {
    write_csv(w, &design.params, &design.triplets, header)
}

/// Human-readable record summary (id, length, GC content).
pub fn format_summary(design: &Design) -> String {
    format!(
        "Sequence ID: {}\nSequence Length: {} bp\nGC Content: {:.2}%\nTriplets: {}",
        design.id,
        design.stats.length,
        design.stats.gc_percent,
        design.triplets.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::design_record;
    use crate::scan::Validation;

    fn render(header: bool) -> String {
        let d = design_record("demo", b"AAAACCCCGGGGTTTT", &WindowParameters::new(2, 2, 8), Validation::Strict).unwrap();
        let mut buf = Vec::new();
        write_design_csv(&mut buf, &d, header).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_block_matches_layout() {
        let out = render(true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Parameters and output for Gene Primer/Probe Design,,");
        assert_eq!(lines[1], "Parameters,,");
        assert_eq!(lines[2], "Primer Length,2bp,");
        assert_eq!(lines[3], "Probe Length,2bp,");
        assert_eq!(lines[4], "Amplicon length,8bp,");
        assert_eq!(lines[5], "Min GC content,30%,");
        assert_eq!(lines[10], "Number of background files checked,N/A,");
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "Forward_Primer,Probe,Reverse_Primer");
        assert_eq!(lines[13], "AA,AA,GG");
        assert_eq!(lines.len(), 13 + 9);
        assert!(out.ends_with("\r\n"));
    }

    #[test]
    fn separator_row_is_a_bare_line_break() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &WindowParameters::new(2, 2, 8), &[], true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.split("\r\n").collect();
        assert_eq!(lines[10], "Number of background files checked,N/A,");
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "Forward_Primer,Probe,Reverse_Primer");
        assert!(!out.contains("\"\""));
    }

    #[test]
    fn table_only_without_header() {
        let out = render(false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Forward_Primer,Probe,Reverse_Primer");
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[9], "GG,GG,AA");
    }

    #[test]
    fn empty_design_still_has_column_row() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &WindowParameters::default(), &[], false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Forward_Primer,Probe,Reverse_Primer\r\n");
    }

    #[test]
    fn output_name_and_summary() {
        assert_eq!(default_output_name("NM_1.2"), "NM_1.2_primers_probes.csv");
        let d = design_record("g", b"GATTACA", &WindowParameters::default(), Validation::Strict).unwrap();
        let s = format_summary(&d);
        assert!(s.contains("Sequence Length: 7 bp"));
        assert!(s.contains("GC Content: 28.57%"));
        assert!(s.ends_with("Triplets: 0"));
    }
}
